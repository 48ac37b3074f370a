pub mod astar;
pub mod grid;
pub mod heuristic;
pub mod orchestrator;
pub mod types;

// Re-export all public types for convenience
pub use astar::*;
pub use grid::Grid;
pub use heuristic::*;
pub use orchestrator::*;
pub use types::*;
