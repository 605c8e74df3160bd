pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod route;

pub use crate::domain::model::{Exchange, Message};
pub use crate::domain::ports::{Expression, Predicate};
pub use crate::utils::error::Result;
pub use route::{RouteBuilder, RouteContext, RouteDefinition, RouteScaffold};
