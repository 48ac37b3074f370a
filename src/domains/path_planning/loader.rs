use std::env;
use std::path::{Path, PathBuf};

use crate::common::ScenarioError;
use crate::domains::path_planning::aggregate::grid::{Grid, BLOCKED, FREE};
use crate::domains::path_planning::aggregate::types::{Cell, Robot, Scenario};

pub const SCENARIO_DIR_ENV: &str = "RENDEZVOUS_SCENARIO_DIR";

/// Resolve the scenario directory.
/// Precedence: RENDEZVOUS_SCENARIO_DIR env var -> ./resources/scenarios
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(v) = env::var(SCENARIO_DIR_ENV) {
        return PathBuf::from(v);
    }
    Path::new("resources/scenarios").to_path_buf()
}

/// How strictly robot starts and the rendezvous are checked against the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScenarioValidation {
    /// Accept positions as written, even off-grid or on obstacles.
    #[default]
    Lenient,
    /// Reject positions that are off-grid or blocked.
    Strict,
}

/// Data lines with their 1-based source line numbers, comments stripped.
fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(i, raw)| {
        let line = raw.split("//").next().unwrap_or("").trim();
        (!line.is_empty()).then_some((i + 1, line))
    })
}

fn parse_ints(line_no: usize, line: &str, expected: usize) -> Result<Vec<i64>, ScenarioError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(ScenarioError::WrongTokenCount {
            line: line_no,
            expected,
            found: tokens.len(),
        });
    }
    tokens
        .into_iter()
        .map(|t| {
            t.parse::<i64>().map_err(|_| ScenarioError::InvalidInteger {
                line: line_no,
                token: t.to_string(),
            })
        })
        .collect()
}

fn to_count(line_no: usize, v: i64) -> Result<usize, ScenarioError> {
    usize::try_from(v).map_err(|_| ScenarioError::NegativeCount { line: line_no })
}

fn to_cell(line_no: usize, line: &str) -> Result<Cell, ScenarioError> {
    let v = parse_ints(line_no, line, 2)?;
    let coord = |x: i64| {
        i32::try_from(x).map_err(|_| ScenarioError::InvalidInteger {
            line: line_no,
            token: x.to_string(),
        })
    };
    Ok(Cell::new(coord(v[0])?, coord(v[1])?))
}

/// Parse the plain-text scenario format:
///
/// ```text
/// 3 3        // rows cols
/// 1          // robot count
/// 0 0        // robot 1 (row col)
/// 2 2        // rendezvous
/// 000
/// 010
/// 000
/// ```
pub fn parse_scenario(text: &str) -> Result<Scenario, ScenarioError> {
    let mut lines = data_lines(text);

    let (line_no, line) = lines
        .next()
        .ok_or(ScenarioError::MissingSection("dimensions"))?;
    let dims = parse_ints(line_no, line, 2)?;
    let rows = to_count(line_no, dims[0])?;
    let cols = to_count(line_no, dims[1])?;

    let (line_no, line) = lines
        .next()
        .ok_or(ScenarioError::MissingSection("robot count"))?;
    let count = to_count(line_no, parse_ints(line_no, line, 1)?[0])?;

    let mut starts = Vec::new();
    for _ in 0..count {
        let (line_no, line) = lines
            .next()
            .ok_or(ScenarioError::MissingSection("robot positions"))?;
        starts.push(to_cell(line_no, line)?);
    }

    let (line_no, line) = lines
        .next()
        .ok_or(ScenarioError::MissingSection("rendezvous"))?;
    let rendezvous = to_cell(line_no, line)?;

    let mut grid_rows = Vec::new();
    for (line_no, line) in lines {
        let row = line
            .chars()
            .enumerate()
            .map(|(col, symbol)| match symbol {
                '0' => Ok(FREE),
                '1' => Ok(BLOCKED),
                _ => Err(ScenarioError::InvalidCell {
                    line: line_no,
                    col: col + 1,
                    symbol,
                }),
            })
            .collect::<Result<Vec<u8>, _>>()?;
        if row.len() != cols {
            return Err(ScenarioError::GridRowWidth {
                line: line_no,
                expected: cols,
                found: row.len(),
            });
        }
        grid_rows.push(row);
    }

    if grid_rows.len() != rows {
        return Err(ScenarioError::GridRowCount {
            expected: rows,
            found: grid_rows.len(),
        });
    }

    Ok(Scenario {
        grid: Grid::new(grid_rows)?,
        robots: Robot::from_starts(starts),
        rendezvous,
    })
}

/// Parse, then apply the requested position checks.
pub fn parse_scenario_with(
    text: &str,
    validation: ScenarioValidation,
) -> Result<Scenario, ScenarioError> {
    let scenario = parse_scenario(text)?;
    if validation == ScenarioValidation::Strict {
        validate_positions(&scenario)?;
    }
    Ok(scenario)
}

pub fn validate_positions(scenario: &Scenario) -> Result<(), ScenarioError> {
    if let Some(robot) = scenario.robots_on_invalid_cells().first() {
        return Err(ScenarioError::InvalidPosition {
            what: robot.label(),
            cell: robot.start,
        });
    }
    if !scenario.grid.is_valid(scenario.rendezvous) {
        return Err(ScenarioError::InvalidPosition {
            what: "Rendezvous".to_string(),
            cell: scenario.rendezvous,
        });
    }
    Ok(())
}
