pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::TestkitConfig;
pub use domain::model::{Exchange, Message};
pub use domain::ports::{Expression, Predicate};
pub use self::core::assertions;
pub use self::core::builders::{
    body, constant, env_property, env_property_or, exchange_property, header, ValueBuilder,
};
pub use self::core::fixtures;
pub use self::core::route::{route_list, RouteBuilder, RouteContext, RouteDefinition, RouteScaffold};
pub use utils::environment;
pub use utils::error::{Result, TestkitError};
