use serde::{Deserialize, Serialize};
use std::fmt;

use super::grid::Grid;

/// A (row, column) coordinate. Ordering is row first, then column, which is
/// what the search frontier uses to break ties between equal f-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Orthogonal neighbours in up, down, left, right order.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            Some(Cell {
                row: self.row.checked_add(dr)?,
                col: self.col.checked_add(dc)?,
            })
        })
    }

    pub fn manhattan_distance(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    /// 1-based position in the scenario
    pub id: usize,
    pub start: Cell,
}

impl Robot {
    pub fn new(id: usize, start: Cell) -> Self {
        Self { id, start }
    }

    pub fn label(&self) -> String {
        format!("Robot {}", self.id)
    }

    /// Number robots 1..=n in the order given.
    pub fn from_starts<I>(starts: I) -> Vec<Robot>
    where
        I: IntoIterator<Item = Cell>,
    {
        starts
            .into_iter()
            .enumerate()
            .map(|(i, start)| Robot::new(i + 1, start))
            .collect()
    }
}

/// Ordered cells from a robot's start to the rendezvous, both inclusive.
/// An empty path means the rendezvous could not be reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Cell>);

impl Path {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of unit moves along the path.
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn start(&self) -> Option<Cell> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<Cell> {
        self.0.last().copied()
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "]")
    }
}

/// A fully parsed planning problem: the map, the fleet and the meeting point.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub grid: Grid,
    pub robots: Vec<Robot>,
    pub rendezvous: Cell,
}

impl Scenario {
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Robots whose start cell is off the grid or on an obstacle.
    pub fn robots_on_invalid_cells(&self) -> Vec<&Robot> {
        self.robots
            .iter()
            .filter(|r| !self.grid.is_valid(r.start))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotPlan {
    pub label: String,
    pub start: Cell,
    pub path: Path,
}

impl RobotPlan {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Per-robot results in robot input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSet {
    plans: Vec<RobotPlan>,
}

impl PlanSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, plan: RobotPlan) {
        self.plans.push(plan);
    }

    pub fn get(&self, label: &str) -> Option<&Path> {
        self.plans.iter().find(|p| p.label == label).map(|p| &p.path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RobotPlan> {
        self.plans.iter()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn reachable_count(&self) -> usize {
        self.plans.iter().filter(|p| p.is_reachable()).count()
    }

    pub fn unreachable_labels(&self) -> Vec<&str> {
        self.plans
            .iter()
            .filter(|p| !p.is_reachable())
            .map(|p| p.label.as_str())
            .collect()
    }
}

impl FromIterator<RobotPlan> for PlanSet {
    fn from_iter<T: IntoIterator<Item = RobotPlan>>(iter: T) -> Self {
        Self {
            plans: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PlanSet {
    type Item = &'a RobotPlan;
    type IntoIter = std::slice::Iter<'a, RobotPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.plans.iter()
    }
}
