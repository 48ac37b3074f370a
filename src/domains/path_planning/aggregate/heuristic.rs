use super::types::Cell;

/// Manhattan distance to the rendezvous. Admissible and consistent for
/// 4-connected unit-cost moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManhattanHeuristic {
    goal: Cell,
}

impl ManhattanHeuristic {
    pub fn new(goal: Cell) -> Self {
        Self { goal }
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn estimate(&self, cell: Cell) -> u32 {
        cell.manhattan_distance(self.goal)
    }
}
