//! A* shortest-path search on a 4-connected occupancy grid.
//!
//! The frontier is a min-heap of `(f_score, cell)` entries. Improved costs are
//! re-pushed rather than decreased in place; stale entries are dropped lazily
//! when they are popped for a cell that is already closed. Equal f-scores are
//! resolved by the cell's natural ordering (row, then column), so results are
//! fully deterministic.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::grid::Grid;
use super::heuristic::ManhattanHeuristic;
use super::types::{Cell, Path};

/// Bounds on the work a single search may do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Maximum number of cells to close before giving up. `None` is unbounded.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Path,
    /// Cells moved into the closed set.
    pub expanded: usize,
    /// The expansion budget ran out before the rendezvous was reached.
    pub budget_exhausted: bool,
}

/// Per-call bookkeeping; never outlives one `search`.
struct SearchState {
    open: BinaryHeap<Reverse<(u32, Cell)>>,
    g_score: HashMap<Cell, u32>,
    came_from: HashMap<Cell, Cell>,
    closed: HashSet<Cell>,
}

impl SearchState {
    fn new(start: Cell, h: u32) -> Self {
        let mut open = BinaryHeap::new();
        open.push(Reverse((h, start)));
        let mut g_score = HashMap::new();
        g_score.insert(start, 0);
        Self {
            open,
            g_score,
            came_from: HashMap::new(),
            closed: HashSet::new(),
        }
    }

    fn reconstruct(&self, mut current: Cell) -> Path {
        let mut cells = vec![current];
        while let Some(&prev) = self.came_from.get(&current) {
            cells.push(prev);
            current = prev;
        }
        cells.reverse();
        Path::new(cells)
    }
}

/// Shortest-path search from any start cell to one fixed rendezvous.
pub struct AStarSearch<'g> {
    grid: &'g Grid,
    heuristic: ManhattanHeuristic,
    limits: SearchLimits,
}

impl<'g> AStarSearch<'g> {
    pub fn new(grid: &'g Grid, rendezvous: Cell) -> Self {
        Self {
            grid,
            heuristic: ManhattanHeuristic::new(rendezvous),
            limits: SearchLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn rendezvous(&self) -> Cell {
        self.heuristic.goal()
    }

    /// Shortest path from `start` to the rendezvous, empty when unreachable.
    ///
    /// The start cell itself is not checked against the grid: a robot placed
    /// off-map or on an obstacle is still expanded, only its neighbours are
    /// filtered.
    pub fn search(&self, start: Cell) -> Path {
        self.search_with_stats(start).path
    }

    pub fn search_with_stats(&self, start: Cell) -> SearchOutcome {
        let goal = self.heuristic.goal();
        let mut state = SearchState::new(start, self.heuristic.estimate(start));
        let mut expanded = 0usize;

        while let Some(Reverse((_, current))) = state.open.pop() {
            if !state.closed.insert(current) {
                continue;
            }
            expanded += 1;

            if current == goal {
                let path = state.reconstruct(current);
                tracing::debug!(%start, %goal, expanded, steps = path.steps(), "rendezvous reached");
                return SearchOutcome {
                    path,
                    expanded,
                    budget_exhausted: false,
                };
            }

            if self.limits.max_expansions.is_some_and(|max| expanded >= max) {
                tracing::debug!(%start, %goal, expanded, "expansion budget exhausted");
                return SearchOutcome {
                    path: Path::empty(),
                    expanded,
                    budget_exhausted: true,
                };
            }

            let tentative_g = state.g_score[&current] + 1;
            for neighbor in current.neighbors() {
                if !self.grid.is_valid(neighbor) {
                    continue;
                }
                let improves = state
                    .g_score
                    .get(&neighbor)
                    .map_or(true, |&g| tentative_g < g);
                if improves {
                    state.g_score.insert(neighbor, tentative_g);
                    state.came_from.insert(neighbor, current);
                    let f = tentative_g + self.heuristic.estimate(neighbor);
                    state.open.push(Reverse((f, neighbor)));
                }
            }
        }

        tracing::debug!(%start, %goal, expanded, "frontier exhausted, rendezvous unreachable");
        SearchOutcome {
            path: Path::empty(),
            expanded,
            budget_exhausted: false,
        }
    }
}
