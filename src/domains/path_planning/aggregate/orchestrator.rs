use std::sync::Arc;

use super::astar::{AStarSearch, SearchLimits, SearchOutcome};
use super::grid::Grid;
use super::types::{Cell, PlanSet, Robot, RobotPlan};
use crate::common::{DomainError, DomainResult};
use crate::domains::logger::{silent_logger, DynLogger};

/// Runs one independent A* search per robot against the shared rendezvous.
///
/// Robots never see each other: there is no collision checking and no shared
/// search state, only read access to the grid.
#[derive(Clone)]
pub struct RendezvousPlanner {
    grid: Arc<Grid>,
    rendezvous: Cell,
    limits: SearchLimits,
    logger: DynLogger,
}

impl RendezvousPlanner {
    pub fn new(grid: Arc<Grid>, rendezvous: Cell) -> Self {
        Self {
            grid,
            rendezvous,
            limits: SearchLimits::default(),
            logger: silent_logger(),
        }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_logger(mut self, logger: DynLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rendezvous(&self) -> Cell {
        self.rendezvous
    }

    fn searcher(&self) -> AStarSearch<'_> {
        AStarSearch::new(&self.grid, self.rendezvous).with_limits(self.limits)
    }

    /// Plan every robot in order. Unreachable robots get an empty path.
    pub fn find_paths(&self, robots: &[Robot]) -> PlanSet {
        let searcher = self.searcher();
        robots
            .iter()
            .map(|robot| {
                let outcome = searcher.search_with_stats(robot.start);
                self.record(robot, outcome)
            })
            .collect()
    }

    /// Same result as [`find_paths`](Self::find_paths), with each search on
    /// the blocking thread pool.
    pub async fn find_paths_parallel(&self, robots: &[Robot]) -> DomainResult<PlanSet> {
        let handles: Vec<_> = robots
            .iter()
            .map(|robot| {
                let grid = Arc::clone(&self.grid);
                let rendezvous = self.rendezvous;
                let limits = self.limits;
                let start = robot.start;
                tokio::task::spawn_blocking(move || {
                    AStarSearch::new(&grid, rendezvous)
                        .with_limits(limits)
                        .search_with_stats(start)
                })
            })
            .collect();

        let mut plans = PlanSet::new();
        for (robot, handle) in robots.iter().zip(handles) {
            let outcome = handle.await.map_err(|e| {
                DomainError::InfrastructureError(format!(
                    "search task for {} failed: {}",
                    robot.label(),
                    e
                ))
            })?;
            plans.push(self.record(robot, outcome));
        }
        Ok(plans)
    }

    fn record(&self, robot: &Robot, outcome: SearchOutcome) -> RobotPlan {
        let label = robot.label();
        if outcome.budget_exhausted {
            self.logger.warn(&format!(
                "{} from {}: gave up after {} expansions",
                label, robot.start, outcome.expanded
            ));
        } else if outcome.path.is_empty() {
            self.logger.warn(&format!(
                "{} from {}: rendezvous {} unreachable",
                label, robot.start, self.rendezvous
            ));
        } else {
            self.logger.info(&format!(
                "{} from {}: {} steps ({} cells expanded)",
                label,
                robot.start,
                outcome.path.steps(),
                outcome.expanded
            ));
        }

        RobotPlan {
            label,
            start: robot.start,
            path: outcome.path,
        }
    }
}
