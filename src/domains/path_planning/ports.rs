use crate::common::DomainResult;
use crate::domains::path_planning::aggregate::types::Scenario;
use async_trait::async_trait;

/// Port trait that the path_planning domain depends on for loading scenarios.
/// Implementations (adapters) provide filesystem or in-memory sources.
pub trait ScenarioSource: Send + Sync {
    fn load_scenario(&self, name: &str) -> DomainResult<Scenario>;
}

/// Async variant of ScenarioSource for adapters that perform async I/O
#[async_trait]
pub trait ScenarioSourceAsync: Send + Sync {
    async fn load_scenario(&self, name: &str) -> DomainResult<Scenario>;
}
