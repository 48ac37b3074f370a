use async_trait::async_trait;
use rendezvous_planner::adapters::inbound::FilesystemScenarioSource;
use rendezvous_planner::application::PathPlanningService;
use rendezvous_planner::common::{ApplicationError, DomainError, DomainResult};
use rendezvous_planner::config::{Config, PlannerConfig};
use rendezvous_planner::domains::logger::silent_logger;
use rendezvous_planner::domains::path_planning::*;
use std::path::PathBuf;
use std::sync::Arc;

struct InMemorySource {
    text: &'static str,
}

#[async_trait]
impl ScenarioSourceAsync for InMemorySource {
    async fn load_scenario(&self, _name: &str) -> DomainResult<Scenario> {
        Ok(parse_scenario(self.text)?)
    }
}

const BOXED_IN: &str = "\
3 3
2
0 0
2 2
1 1
000
001
010
";

fn bundled_scenarios() -> Arc<FilesystemScenarioSource> {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/scenarios");
    Arc::new(FilesystemScenarioSource::new(Some(base)))
}

#[tokio::test]
async fn test_service_plans_in_memory_scenario() {
    let service = PathPlanningService::new(
        Arc::new(InMemorySource { text: BOXED_IN }),
        silent_logger(),
        PlannerConfig::default(),
    );

    let run = service.run("boxed-in").await.unwrap();
    assert_eq!(run.scenario.robots.len(), 2);
    assert_eq!(run.plans.get("Robot 1").unwrap().steps(), 2);
    assert!(run.plans.get("Robot 2").unwrap().is_empty());
}

#[tokio::test]
async fn test_parallel_service_matches_sequential() {
    let sequential = PathPlanningService::new(bundled_scenarios(), silent_logger(), PlannerConfig::default());
    let parallel = PathPlanningService::new(
        bundled_scenarios(),
        silent_logger(),
        PlannerConfig {
            parallel: true,
            ..PlannerConfig::default()
        },
    );

    let a = sequential.run("warehouse.txt").await.unwrap();
    let b = parallel.run("warehouse.txt").await.unwrap();
    assert_eq!(a.plans, b.plans);
}

#[tokio::test]
async fn test_bundled_warehouse_scenario() {
    let service = PathPlanningService::new(bundled_scenarios(), silent_logger(), PlannerConfig::default());
    let run = service.run("warehouse.txt").await.unwrap();

    assert_eq!(run.plans.get("Robot 1").unwrap().steps(), 6);
    assert_eq!(run.plans.get("Robot 2").unwrap().steps(), 8);
    assert!(run.plans.get("Robot 3").unwrap().is_empty());
}

#[tokio::test]
async fn test_bundled_example_rooms() {
    let service = PathPlanningService::new(bundled_scenarios(), silent_logger(), PlannerConfig::default());

    let open = service.run("open_room.txt").await.unwrap();
    assert_eq!(open.plans.get("Robot 1").unwrap().len(), 5);

    let walled = service.run("walled_off.txt").await.unwrap();
    assert!(walled.plans.get("Robot 1").unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_scenario_is_an_application_error() {
    let service = PathPlanningService::new(bundled_scenarios(), silent_logger(), PlannerConfig::default());
    let err = service.run("nope.txt").await.unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InfrastructureError(_))
    ));
}

#[test]
fn test_config_from_toml_with_defaults() {
    let config = Config::from_toml(
        r#"
[planner]
max_expansions = 500
parallel = true

[output]
format = "json"
"#,
    )
    .unwrap();

    assert_eq!(config.planner.limits(), SearchLimits::with_max_expansions(500));
    assert!(config.planner.parallel);
    assert_eq!(config.planner.validation(), ScenarioValidation::Lenient);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert_eq!(
        config.output.format,
        rendezvous_planner::adapters::outbound::ReportFormat::Json
    );
}

#[test]
fn test_config_rejects_unknown_format() {
    let res = Config::from_toml("[output]\nformat = \"yaml\"\n");
    assert!(res.is_err());
}

#[tokio::test]
async fn test_bundled_config_file_loads() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config.toml");
    let config = Config::from_file(path).await.unwrap();
    assert_eq!(config.scenarios.data_dir.as_deref(), Some("resources/scenarios"));
    assert!(!config.planner.validate_positions);
}

#[tokio::test]
async fn test_missing_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).await.unwrap();
    assert!(config.logging.file.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(!config.planner.parallel);
}

#[tokio::test]
async fn test_malformed_config_file_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[planner\nparallel = yes\n").unwrap();

    let res = Config::load_or_default(&path).await;
    assert!(matches!(res, Err(ApplicationError::Configuration(_))));
}
