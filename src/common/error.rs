use thiserror::Error;

use crate::domains::path_planning::aggregate::types::Cell;

/// Grid construction failures. Fatal: no partially built grid is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid has no cells")]
    EmptyGrid,

    #[error("Grid row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Grid cell ({row}, {col}) holds {value}, only 0 (free) and 1 (blocked) are accepted")]
    InvalidCell { row: usize, col: usize, value: u8 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("Scenario is missing the {0} section")]
    MissingSection(&'static str),

    #[error("Line {line}: '{token}' is not an integer")]
    InvalidInteger { line: usize, token: String },

    #[error("Line {line}: expected {expected} values, found {found}")]
    WrongTokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: dimensions and robot count must not be negative")]
    NegativeCount { line: usize },

    #[error("Scenario declares {expected} grid rows, found {found}")]
    GridRowCount { expected: usize, found: usize },

    #[error("Line {line}: grid row has {found} cells, expected {expected}")]
    GridRowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}, column {col}: '{symbol}' is not a grid symbol (use 0 or 1)")]
    InvalidCell { line: usize, col: usize, symbol: char },

    #[error("{what} {cell} is outside the grid or blocked")]
    InvalidPosition { what: String, cell: Cell },

    #[error("Invalid grid: {0}")]
    Grid(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid grid: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid scenario: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
