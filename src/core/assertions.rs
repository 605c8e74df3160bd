use crate::domain::model::{Exchange, Message};
use crate::domain::ports::{Expression, Predicate};
use crate::utils::error::{Result, TestkitError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// 斷言 message header 等於預期值，成功時回傳實際值供後續串接
pub fn assert_message_header(message: &Message, name: &str, expected: impl Into<Value>) -> Value {
    let expected = expected.into();
    let actual = message.header(name).cloned().unwrap_or(Value::Null);
    assert_eq!(expected, actual, "Header: {} on Message: {:?}", name, message);
    actual
}

pub fn assert_input_header(exchange: &Exchange, name: &str, expected: impl Into<Value>) -> Value {
    assert_message_header(exchange.input(), name, expected)
}

pub fn assert_output_header(exchange: &Exchange, name: &str, expected: impl Into<Value>) -> Value {
    let message = exchange
        .output()
        .unwrap_or_else(|| panic!("Should have an output message on exchange: {:?}", exchange));
    assert_message_header(message, name, expected)
}

/// 斷言 input body 等於預期值
///
/// body 缺少或無法取得時回傳 InvalidPayloadError，值不相等時 panic。
pub fn assert_input_body_equals(exchange: &Exchange, expected: impl Into<Value>) -> Result<Value> {
    let expected = expected.into();
    let actual = exchange.input().mandatory_body()?;
    assert_eq!(expected, *actual, "input body of exchange: {:?}", exchange);

    tracing::debug!("Received exchange with input body: {:?}", actual);
    Ok(actual.clone())
}

/// 斷言 output body 等於預期值
pub fn assert_output_body_equals(exchange: &Exchange, expected: impl Into<Value>) -> Result<Value> {
    let expected = expected.into();
    let message = exchange
        .output()
        .ok_or_else(|| TestkitError::InvalidPayloadError {
            expected: "an output message".to_string(),
            reason: "output message is not set".to_string(),
        })?;
    let actual = message.mandatory_body()?;
    assert_eq!(expected, *actual, "output body of exchange: {:?}", exchange);

    tracing::debug!("Received exchange with output body: {:?}", actual);
    Ok(actual.clone())
}

/// 斷言 body 可轉換為指定型別，成功時回傳轉換結果
pub fn assert_body_as<T: DeserializeOwned>(message: &Message) -> T {
    match message.body_as::<T>() {
        Ok(value) => value,
        Err(e) => panic!(
            "Body should convert to type {} but did not: {}",
            std::any::type_name::<T>(),
            e
        ),
    }
}

/// 斷言 expression 在 exchange 上求值的結果等於預期值
pub fn assert_expression(
    expression: &dyn Expression,
    exchange: &Exchange,
    expected: impl Into<Value>,
) -> Value {
    let expected = expected.into();
    let actual = expression.evaluate(exchange);

    tracing::debug!(
        "Evaluated expression on exchange: {:?} result: {:?}",
        exchange,
        actual
    );

    assert_eq!(expected, actual, "Expression on Exchange: {:?}", exchange);
    actual
}

/// 斷言 predicate 在 exchange 上的結果等於預期布林值
pub fn assert_predicate(predicate: &dyn Predicate, exchange: &Exchange, expected: bool) -> bool {
    let value = predicate.matches(exchange);

    tracing::debug!(
        "Evaluated predicate on exchange: {:?} result: {}",
        exchange,
        value
    );

    assert_eq!(expected, value, "Predicate on Exchange: {:?}", exchange);
    value
}

pub fn assert_predicate_matches(predicate: &dyn Predicate, exchange: &Exchange) {
    assert_predicate(predicate, exchange, true);
}

pub fn assert_predicate_does_not_match(predicate: &dyn Predicate, exchange: &Exchange) {
    assert_predicate(predicate, exchange, false);
}

pub fn assert_string_contains(text: &str, contained: &str) {
    assert!(
        text.contains(contained),
        "Text: {} does not contain: {}",
        text,
        contained
    );
}

pub fn assert_one_element<T: std::fmt::Debug>(list: &[T]) -> &T {
    assert_eq!(1, list.len(), "Size of list should be 1: {:?}", list);
    &list[0]
}

pub fn assert_list_size<T: std::fmt::Debug>(list: &[T], size: usize) {
    assert_eq!(
        size,
        list.len(),
        "List should be of size: {} but is: {:?}",
        size,
        list
    );
}

/// 比較兩個 URI，兩邊都能解析時用正規化後的形式比較
pub fn assert_uri_equals(expected: &str, actual: &str) {
    match (Url::parse(expected), Url::parse(actual)) {
        (Ok(expected_uri), Ok(actual_uri)) => {
            assert_eq!(
                expected_uri, actual_uri,
                "URI: {} should equal: {}",
                actual, expected
            );
        }
        _ => assert_eq!(expected, actual, "URI: {} should equal: {}", actual, expected),
    }
}

/// 跨平台的目錄路徑比較，統一使用 '/' 作為分隔符
pub fn assert_directory_equals(expected: &str, actual: &str) {
    let expected_path = expected.replace('\\', "/");
    let actual_path = actual.replace('\\', "/");
    assert_eq!(expected_path, actual_path);
}
