use anyhow::Result;
use etl_testkit::utils::logger;
use etl_testkit::{
    header, route_list, Exchange, Predicate, RouteBuilder, RouteContext, RouteScaffold,
    TestkitError,
};
use std::sync::Arc;

/// Route builder 引用了一個從未被指定的過濾條件
struct MissingPredicateBuilder {
    not_yet_decided: Option<Arc<dyn Predicate>>,
}

impl RouteBuilder for MissingPredicateBuilder {
    fn configure(&self, routes: &mut RouteScaffold) -> etl_testkit::Result<()> {
        routes
            .from("direct:start")
            .when(self.not_yet_decided.clone())
            .to("mock:dead");
        Ok(())
    }
}

struct OrderRoutesBuilder;

impl RouteBuilder for OrderRoutesBuilder {
    fn configure(&self, routes: &mut RouteScaffold) -> etl_testkit::Result<()> {
        let is_emea: Arc<dyn Predicate> = Arc::new(header("region").is_equal_to("emea"));

        routes
            .from("direct:orders")
            .when(Some(is_emea))
            .to("mock:emea-orders");
        routes.from("direct:audit").to("mock:audit-log");
        Ok(())
    }
}

struct FailingConfigureBuilder;

impl RouteBuilder for FailingConfigureBuilder {
    fn configure(&self, _routes: &mut RouteScaffold) -> etl_testkit::Result<()> {
        Err(TestkitError::RouteDefinitionError {
            route: "direct:broken".to_string(),
            message: "configure blew up".to_string(),
        })
    }
}

#[test]
fn test_add_routes_fails_when_filter_predicate_is_missing() {
    logger::init_test_logger(false);

    let builder = MissingPredicateBuilder {
        not_yet_decided: None,
    };
    let mut context = RouteContext::new();

    let err = context.add_routes(&builder).unwrap_err();
    match err {
        TestkitError::RouteDefinitionError { route, message } => {
            assert_eq!(route, "direct:start");
            assert!(message.contains("predicate"));
        }
        other => panic!("Expected RouteDefinitionError, got: {:?}", other),
    }

    // 失敗的 add_routes 不應留下任何路由
    assert_eq!(context.route_count(), 0);
}

#[test]
fn test_route_list_returns_validated_definitions() -> Result<()> {
    let routes = route_list(&OrderRoutesBuilder)?;

    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].id(), "route-1");
    assert_eq!(routes[0].source(), "direct:orders");
    assert_eq!(routes[0].targets().len(), 1);
    assert_eq!(routes[0].targets()[0], "mock:emea-orders");
    assert_eq!(routes[0].filters().len(), 1);

    assert_eq!(routes[1].id(), "route-2");
    assert_eq!(routes[1].source(), "direct:audit");
    assert!(routes[1].filters().is_empty());

    // 過濾條件在收集到的定義上仍然可用
    let mut exchange = Exchange::new();
    exchange.input_mut().set_header("region", "emea");
    assert!(routes[0].filters()[0].matches(&exchange));

    Ok(())
}

#[test]
fn test_configure_error_propagates_unchanged() {
    let mut context = RouteContext::new();
    let err = context.add_routes(&FailingConfigureBuilder).unwrap_err();

    assert!(err.to_string().contains("configure blew up"));
    assert_eq!(context.route_count(), 0);
}

#[test]
fn test_route_without_targets_is_rejected() {
    struct NoTargetBuilder;

    impl RouteBuilder for NoTargetBuilder {
        fn configure(&self, routes: &mut RouteScaffold) -> etl_testkit::Result<()> {
            routes.from("direct:nowhere");
            Ok(())
        }
    }

    let err = route_list(&NoTargetBuilder).unwrap_err();
    assert!(matches!(&err, TestkitError::RouteDefinitionError { .. }));
    assert!(err.to_string().contains("no targets"));
}

#[test]
fn test_empty_builder_yields_no_routes() -> Result<()> {
    struct EmptyBuilder;

    impl RouteBuilder for EmptyBuilder {
        fn configure(&self, _routes: &mut RouteScaffold) -> etl_testkit::Result<()> {
            Ok(())
        }
    }

    let routes = route_list(&EmptyBuilder)?;
    assert!(routes.is_empty());
    Ok(())
}

#[test]
fn test_successful_adds_accumulate_route_ids() -> Result<()> {
    let mut context = RouteContext::new();
    context.add_routes(&OrderRoutesBuilder)?;
    context.add_routes(&OrderRoutesBuilder)?;

    assert_eq!(context.route_count(), 4);
    assert_eq!(context.routes()[3].id(), "route-4");
    Ok(())
}
