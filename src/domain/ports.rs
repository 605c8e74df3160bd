use crate::domain::model::Exchange;
use serde_json::Value;

pub trait Predicate: Send + Sync {
    fn matches(&self, exchange: &Exchange) -> bool;
}

pub trait Expression: Send + Sync {
    fn evaluate(&self, exchange: &Exchange) -> Value;
}

impl<F> Predicate for F
where
    F: Fn(&Exchange) -> bool + Send + Sync,
{
    fn matches(&self, exchange: &Exchange) -> bool {
        self(exchange)
    }
}

impl<F> Expression for F
where
    F: Fn(&Exchange) -> Value + Send + Sync,
{
    fn evaluate(&self, exchange: &Exchange) -> Value {
        self(exchange)
    }
}
