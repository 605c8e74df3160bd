use crate::domain::ports::Predicate;
use crate::utils::error::{Result, TestkitError};
use std::fmt;
use std::sync::Arc;

pub trait RouteBuilder: Send + Sync {
    fn configure(&self, routes: &mut RouteScaffold) -> Result<()>;
}

/// configure 期間收集路由規格，尚未驗證
#[derive(Default)]
pub struct RouteScaffold {
    specs: Vec<RouteSpec>,
}

impl RouteScaffold {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(&mut self, source: &str) -> &mut RouteSpec {
        self.specs.push(RouteSpec::new(source));
        self.specs
            .last_mut()
            .expect("route spec should exist after push")
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

pub struct RouteSpec {
    source: String,
    steps: Vec<RouteStep>,
}

enum RouteStep {
    // 過濾條件可能尚未提供，驗證階段才會拒絕
    Filter(Option<Arc<dyn Predicate>>),
    To(String),
}

impl RouteSpec {
    fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            steps: Vec::new(),
        }
    }

    pub fn when(&mut self, predicate: Option<Arc<dyn Predicate>>) -> &mut Self {
        self.steps.push(RouteStep::Filter(predicate));
        self
    }

    pub fn to(&mut self, target: &str) -> &mut Self {
        self.steps.push(RouteStep::To(target.to_string()));
        self
    }

    fn into_definition(self, id: String) -> Result<RouteDefinition> {
        if self.source.trim().is_empty() {
            return Err(TestkitError::RouteDefinitionError {
                route: id,
                message: "source endpoint is not set".to_string(),
            });
        }

        let mut filters = Vec::new();
        let mut targets = Vec::new();
        for step in self.steps {
            match step {
                RouteStep::Filter(Some(predicate)) => filters.push(predicate),
                RouteStep::Filter(None) => {
                    return Err(TestkitError::RouteDefinitionError {
                        route: self.source,
                        message: "filter predicate is not set".to_string(),
                    });
                }
                RouteStep::To(target) => targets.push(target),
            }
        }

        if targets.is_empty() {
            return Err(TestkitError::RouteDefinitionError {
                route: self.source,
                message: "route has no targets".to_string(),
            });
        }

        Ok(RouteDefinition {
            id,
            source: self.source,
            filters,
            targets,
        })
    }
}

#[derive(Clone)]
pub struct RouteDefinition {
    id: String,
    source: String,
    filters: Vec<Arc<dyn Predicate>>,
    targets: Vec<String>,
}

impl RouteDefinition {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn filters(&self) -> &[Arc<dyn Predicate>] {
        &self.filters
    }
}

impl fmt::Debug for RouteDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDefinition")
            .field("id", &self.id)
            .field("source", &self.source)
            .field("filters", &self.filters.len())
            .field("targets", &self.targets)
            .finish()
    }
}

/// 持有已驗證路由定義的 context
#[derive(Default)]
pub struct RouteContext {
    routes: Vec<RouteDefinition>,
}

impl RouteContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 執行 builder 的 configure 並驗證收集到的路由
    ///
    /// 任何一條路由驗證失敗時整批捨棄，context 維持原狀。
    pub fn add_routes(&mut self, builder: &dyn RouteBuilder) -> Result<()> {
        let mut scaffold = RouteScaffold::new();
        builder.configure(&mut scaffold)?;

        let mut validated = Vec::new();
        for (index, spec) in scaffold.specs.into_iter().enumerate() {
            let id = format!("route-{}", self.routes.len() + index + 1);
            validated.push(spec.into_definition(id)?);
        }

        tracing::debug!("Added {} validated routes", validated.len());
        self.routes.extend(validated);
        Ok(())
    }

    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

/// 在全新的 context 中建立 builder 的路由並回傳定義
pub fn route_list(builder: &dyn RouteBuilder) -> Result<Vec<RouteDefinition>> {
    let mut context = RouteContext::new();
    context.add_routes(builder)?;
    Ok(context.routes().to_vec())
}
