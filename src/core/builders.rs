use crate::domain::model::Exchange;
use crate::domain::ports::{Expression, Predicate};
use serde_json::Value;
use std::sync::Arc;

/// 取得 input message header 的 expression builder
pub fn header(name: &str) -> ValueBuilder {
    let name = name.to_string();
    ValueBuilder::new(move |exchange: &Exchange| {
        exchange
            .input()
            .header(&name)
            .cloned()
            .unwrap_or(Value::Null)
    })
}

/// 取得 input message body 的 expression builder
pub fn body() -> ValueBuilder {
    ValueBuilder::new(|exchange: &Exchange| {
        exchange.input().body().cloned().unwrap_or(Value::Null)
    })
}

/// 取得 exchange property 的 expression builder
pub fn exchange_property(name: &str) -> ValueBuilder {
    let name = name.to_string();
    ValueBuilder::new(move |exchange: &Exchange| {
        exchange.property(&name).cloned().unwrap_or(Value::Null)
    })
}

/// 固定值的 expression builder
pub fn constant(value: impl Into<Value>) -> ValueBuilder {
    let value = value.into();
    ValueBuilder::new(move |_: &Exchange| value.clone())
}

/// 取得環境變數的 expression builder
pub fn env_property(name: &str) -> ValueBuilder {
    let name = name.to_string();
    ValueBuilder::new(move |_: &Exchange| match std::env::var(&name) {
        Ok(value) => Value::String(value),
        Err(_) => Value::Null,
    })
}

/// 取得環境變數的 expression builder，未設定時使用預設值
pub fn env_property_or(name: &str, default: &str) -> ValueBuilder {
    let name = name.to_string();
    let default = default.to_string();
    ValueBuilder::new(move |_: &Exchange| {
        Value::String(std::env::var(&name).unwrap_or_else(|_| default.clone()))
    })
}

#[derive(Clone)]
pub struct ValueBuilder {
    expression: Arc<dyn Expression>,
}

impl ValueBuilder {
    pub fn new(expression: impl Expression + 'static) -> Self {
        Self {
            expression: Arc::new(expression),
        }
    }

    pub fn is_equal_to(&self, expected: impl Into<Value>) -> ExpressionPredicate {
        ExpressionPredicate {
            expression: self.expression.clone(),
            check: PredicateCheck::EqualTo(expected.into()),
        }
    }

    pub fn is_not_null(&self) -> ExpressionPredicate {
        ExpressionPredicate {
            expression: self.expression.clone(),
            check: PredicateCheck::NotNull,
        }
    }

    pub fn contains(&self, needle: &str) -> ExpressionPredicate {
        ExpressionPredicate {
            expression: self.expression.clone(),
            check: PredicateCheck::Contains(needle.to_string()),
        }
    }
}

impl Expression for ValueBuilder {
    fn evaluate(&self, exchange: &Exchange) -> Value {
        self.expression.evaluate(exchange)
    }
}

#[derive(Clone)]
enum PredicateCheck {
    EqualTo(Value),
    NotNull,
    Contains(String),
}

#[derive(Clone)]
pub struct ExpressionPredicate {
    expression: Arc<dyn Expression>,
    check: PredicateCheck,
}

impl Predicate for ExpressionPredicate {
    fn matches(&self, exchange: &Exchange) -> bool {
        let value = self.expression.evaluate(exchange);
        match &self.check {
            PredicateCheck::EqualTo(expected) => value == *expected,
            PredicateCheck::NotNull => !value.is_null(),
            PredicateCheck::Contains(needle) => match &value {
                Value::String(text) => text.contains(needle),
                Value::Null => false,
                other => other.to_string().contains(needle),
            },
        }
    }
}
