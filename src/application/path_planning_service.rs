use std::sync::Arc;

use crate::common::{ApplicationResult, DomainResult};
use crate::config::PlannerConfig;
use crate::domains::logger::DynLogger;
use crate::domains::path_planning::{PlanSet, RendezvousPlanner, Scenario, ScenarioSourceAsync};

/// A loaded scenario together with the plans computed for it.
#[derive(Debug, Clone)]
pub struct PlanningRun {
    pub scenario: Scenario,
    pub plans: PlanSet,
}

pub struct PathPlanningService {
    data_source: Arc<dyn ScenarioSourceAsync>,
    logger: DynLogger,
    config: PlannerConfig,
}

impl PathPlanningService {
    pub fn new(data_source: Arc<dyn ScenarioSourceAsync>, logger: DynLogger, config: PlannerConfig) -> Self {
        Self {
            data_source,
            logger,
            config,
        }
    }

    /// Load the named scenario and plan every robot in it.
    pub async fn run(&self, name: &str) -> ApplicationResult<PlanningRun> {
        let scenario = self.data_source.load_scenario(name).await?;
        self.logger.info(&format!(
            "Loaded {}: {}x{} grid, {} robots, rendezvous {}",
            name,
            scenario.rows(),
            scenario.cols(),
            scenario.robots.len(),
            scenario.rendezvous
        ));
        let plans = self.plan(&scenario).await?;
        Ok(PlanningRun { scenario, plans })
    }

    pub async fn plan(&self, scenario: &Scenario) -> DomainResult<PlanSet> {
        for robot in scenario.robots_on_invalid_cells() {
            self.logger.warn(&format!(
                "{} starts on {}, which is off the grid or blocked",
                robot.label(),
                robot.start
            ));
        }
        if !scenario.grid.is_valid(scenario.rendezvous) {
            self.logger.warn(&format!(
                "Rendezvous {} is off the grid or blocked",
                scenario.rendezvous
            ));
        }

        let planner = RendezvousPlanner::new(Arc::new(scenario.grid.clone()), scenario.rendezvous)
            .with_limits(self.config.limits())
            .with_logger(self.logger.clone());

        let plans = if self.config.parallel {
            planner.find_paths_parallel(&scenario.robots).await?
        } else {
            planner.find_paths(&scenario.robots)
        };

        self.logger.info(&format!(
            "{} of {} robots can reach the rendezvous",
            plans.reachable_count(),
            plans.len()
        ));
        Ok(plans)
    }
}
