//! `TargetRange`: an ASCII-grid problem oracle.
//!
//! Legend: `#` wall, `.` open floor, `M` mud, `@` agent start, `T` target.
//! Start and target cells are open floor underneath. Compass actions
//! `"N"/"S"/"E"/"W"` move one cell; a move into a remaining target cell
//! neutralizes that target. Entering open floor costs 1, entering mud
//! costs 3.

use gridshot_search::contract::{ProblemOracle, Transition};
use gridshot_search::state::{Location, TargetSet};

/// Cost of entering an open cell.
pub const FLOOR_COST: u64 = 1;
/// Cost of entering a mud cell.
pub const MUD_COST: u64 = 3;

/// The four compass actions, in label order.
const ACTIONS: [(&str, i32, i32); 4] = [("E", 0, 1), ("N", -1, 0), ("S", 1, 0), ("W", 0, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Wall,
    Open,
    Mud,
}

/// A parsed grid world implementing [`ProblemOracle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRange {
    cells: Vec<Vec<Cell>>,
    start: Location,
    targets: Vec<Location>,
}

/// Why an ASCII grid failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeParseError {
    /// The input had no rows.
    EmptyGrid,
    /// A row's width differs from the first row's.
    RaggedRow { row: usize },
    /// A glyph outside the legend.
    UnknownGlyph { glyph: char, row: usize, col: usize },
    /// No `@` cell.
    MissingStart,
    /// More than one `@` cell.
    DuplicateStart { row: usize, col: usize },
}

impl std::fmt::Display for RangeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid has no rows"),
            Self::RaggedRow { row } => {
                write!(f, "row {row} differs in width from the first row")
            }
            Self::UnknownGlyph { glyph, row, col } => {
                write!(f, "unknown glyph {glyph:?} at row {row}, col {col}")
            }
            Self::MissingStart => write!(f, "grid has no '@' start cell"),
            Self::DuplicateStart { row, col } => {
                write!(f, "second '@' start cell at row {row}, col {col}")
            }
        }
    }
}

impl std::error::Error for RangeParseError {}

impl TargetRange {
    /// Parse a grid from newline-separated rows.
    ///
    /// # Errors
    ///
    /// Returns [`RangeParseError`] on an empty grid, ragged rows, a glyph
    /// outside the legend, or a missing/duplicate start.
    pub fn parse(text: &str) -> Result<Self, RangeParseError> {
        let mut cells: Vec<Vec<Cell>> = Vec::new();
        let mut start = None;
        let mut targets = Vec::new();

        for (row_index, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for (col_index, glyph) in line.chars().enumerate() {
                let here = Location::new(
                    i32::try_from(row_index).unwrap_or(i32::MAX),
                    i32::try_from(col_index).unwrap_or(i32::MAX),
                );
                let cell = match glyph {
                    '#' => Cell::Wall,
                    '.' => Cell::Open,
                    'M' => Cell::Mud,
                    'T' => {
                        targets.push(here);
                        Cell::Open
                    }
                    '@' => {
                        if start.is_some() {
                            return Err(RangeParseError::DuplicateStart {
                                row: row_index,
                                col: col_index,
                            });
                        }
                        start = Some(here);
                        Cell::Open
                    }
                    other => {
                        return Err(RangeParseError::UnknownGlyph {
                            glyph: other,
                            row: row_index,
                            col: col_index,
                        });
                    }
                };
                row.push(cell);
            }
            if let Some(first) = cells.first() {
                if row.len() != first.len() {
                    return Err(RangeParseError::RaggedRow { row: row_index });
                }
            }
            cells.push(row);
        }

        if cells.is_empty() {
            return Err(RangeParseError::EmptyGrid);
        }
        let Some(start) = start else {
            return Err(RangeParseError::MissingStart);
        };

        Ok(Self {
            cells,
            start,
            targets,
        })
    }

    fn cell(&self, loc: Location) -> Cell {
        let (Ok(row), Ok(col)) = (usize::try_from(loc.row), usize::try_from(loc.col)) else {
            return Cell::Wall;
        };
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(Cell::Wall)
    }

    fn destination(&self, action: &str, from: Location) -> Option<Location> {
        let (_, dr, dc) = ACTIONS.iter().find(|(label, _, _)| *label == action)?;
        let next = Location::new(from.row + dr, from.col + dc);
        (self.cell(next) != Cell::Wall).then_some(next)
    }

    /// Every non-wall location, in row-major order.
    #[must_use]
    pub fn open_locations(&self) -> Vec<Location> {
        let mut out = Vec::new();
        for (row_index, row) in self.cells.iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                if *cell != Cell::Wall {
                    out.push(Location::new(
                        i32::try_from(row_index).unwrap_or(i32::MAX),
                        i32::try_from(col_index).unwrap_or(i32::MAX),
                    ));
                }
            }
        }
        out
    }

    /// Number of targets in the parsed grid.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}

impl ProblemOracle for TargetRange {
    fn initial_location(&self) -> Location {
        self.start
    }

    fn initial_targets(&self) -> TargetSet {
        TargetSet::from_locations(self.targets.iter().copied())
    }

    fn transitions(&self, location: Location, remaining: &TargetSet) -> Vec<Transition> {
        let mut out = Vec::new();
        for (label, _, _) in ACTIONS {
            let Some(next) = self.destination(label, location) else {
                continue;
            };
            let targets_hit = if remaining.contains(next) {
                vec![next]
            } else {
                Vec::new()
            };
            out.push(Transition {
                action: label.to_string(),
                next_location: next,
                targets_hit,
            });
        }
        out
    }

    fn transition_cost(&self, action: &str, location: Location) -> u64 {
        // Cost of the cell being entered. An illegal (action, location)
        // pair never comes out of `transitions`, so the fallback only
        // covers contract misuse.
        match self.destination(action, location).map(|next| self.cell(next)) {
            Some(Cell::Mud) => MUD_COST,
            _ => FLOOR_COST,
        }
    }
}
