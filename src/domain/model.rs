use crate::utils::error::{Result, TestkitError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    headers: HashMap<String, Value>,
    body: Option<Value>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.headers.insert(name.into(), value.into());
    }

    pub fn header(&self, name: &str) -> Option<&Value> {
        self.headers.get(name)
    }

    pub fn headers(&self) -> &HashMap<String, Value> {
        &self.headers
    }

    pub fn set_body(&mut self, body: impl Into<Value>) {
        self.body = Some(body.into());
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// 取得必要的 body，未設定時回傳 InvalidPayloadError
    pub fn mandatory_body(&self) -> Result<&Value> {
        self.body
            .as_ref()
            .ok_or_else(|| TestkitError::InvalidPayloadError {
                expected: "a message body".to_string(),
                reason: "body is not set".to_string(),
            })
    }

    /// 將 body 轉換為指定型別，轉換失敗時回傳 InvalidPayloadError
    pub fn body_as<T: DeserializeOwned>(&self) -> Result<T> {
        let body = self.mandatory_body()?;
        serde_json::from_value(body.clone()).map_err(|e| TestkitError::InvalidPayloadError {
            expected: std::any::type_name::<T>().to_string(),
            reason: e.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Exchange {
    properties: HashMap<String, Value>,
    input: Message,
    output: Option<Message>,
}

impl Exchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(body: impl Into<Value>) -> Self {
        let mut exchange = Self::new();
        exchange.input_mut().set_body(body);
        exchange
    }

    pub fn input(&self) -> &Message {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut Message {
        &mut self.input
    }

    pub fn output(&self) -> Option<&Message> {
        self.output.as_ref()
    }

    /// 取得 output message，第一次存取時才建立
    pub fn output_mut(&mut self) -> &mut Message {
        self.output.get_or_insert_with(Message::new)
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}
