//! Occupancy grid with implicit 4-neighbor connectivity
//!
//! A cell connects to the cells directly above, below, left and right of it
//! when they lie inside the grid and are passable. Neighbors are always
//! enumerated in that order: up, down, left, right.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::bail_invalid;
use crate::config::GridMarkers;
use crate::error::{Result, WaypathError};
use crate::graph::{search_with, NeighborSource, SearchOptions, SearchReport};

/// A grid coordinate, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `r,c`, optionally wrapped in parentheses and padded with spaces
impl FromStr for Cell {
    type Err = WaypathError;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let Some((row, col)) = inner.split_once(',') else {
            bail_invalid!("cell (expected row,col)", s);
        };
        let row = row
            .trim()
            .parse()
            .map_err(|_| WaypathError::invalid_value("cell row", s))?;
        let col = col
            .trim()
            .parse()
            .map_err(|_| WaypathError::invalid_value("cell column", s))?;
        Ok(Cell { row, col })
    }
}

/// Serializes as a `[row, col]` pair
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (self.row, self.col).serialize(serializer)
    }
}

/// One axis-aligned step between adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Enumeration order used for neighbor generation
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    fn offset(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// The move that leads from `from` to the adjacent cell `to`, if any
    pub fn between(from: Cell, to: Cell) -> Option<Move> {
        Move::ALL.into_iter().find(|m| {
            let (dr, dc) = m.offset();
            from.row.checked_add_signed(dr) == Some(to.row)
                && from.col.checked_add_signed(dc) == Some(to.col)
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Passability matrix with fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major, `true` where the cell can be entered
    passable: Vec<bool>,
}

impl Grid {
    /// Build from rows of passability flags. Rows must be non-empty and equally long.
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        if row_count == 0 || cols == 0 {
            return Err(WaypathError::EmptyGrid {
                rows: row_count,
                cols,
            });
        }

        let mut passable = Vec::with_capacity(row_count * cols);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(WaypathError::RaggedGrid {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            passable.extend(row);
        }

        Ok(Grid {
            rows: row_count,
            cols,
            passable,
        })
    }

    /// Build from a 0/1 matrix where 0 is passable and 1 is blocked
    pub fn from_matrix(matrix: &[Vec<u8>]) -> Result<Self> {
        let mut rows = Vec::with_capacity(matrix.len());
        for (r, row) in matrix.iter().enumerate() {
            let mut flags = Vec::with_capacity(row.len());
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 => flags.push(true),
                    1 => flags.push(false),
                    other => {
                        return Err(WaypathError::invalid_config(format!(
                            "grid cell ({r}, {c}) is {other}, expected 0 or 1"
                        )))
                    }
                }
            }
            rows.push(flags);
        }
        Grid::new(rows)
    }

    /// Parse text rows of marker characters.
    ///
    /// Trailing whitespace on each row is ignored, as are blank lines before
    /// the first row and after the last. A blank line between rows is an
    /// empty row and makes the grid ragged.
    pub fn parse(text: &str, markers: &GridMarkers) -> Result<Self> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let first = lines
            .iter()
            .position(|line| !line.is_empty())
            .unwrap_or(lines.len());
        let last = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(first, |i| i + 1);
        Self::parse_rows(lines[first..last].iter().copied(), markers)
    }

    /// Parse already-split text rows of marker characters
    pub fn parse_rows<'a, I>(rows: I, markers: &GridMarkers) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut parsed = Vec::new();
        for (r, line) in rows.into_iter().enumerate() {
            let mut flags = Vec::new();
            for (c, ch) in line.trim_end().chars().enumerate() {
                if ch == markers.passable {
                    flags.push(true);
                } else if ch == markers.blocked {
                    flags.push(false);
                } else {
                    return Err(WaypathError::invalid_config(format!(
                        "grid cell ({r}, {c}) has marker {ch:?}, expected {:?} or {:?}",
                        markers.passable, markers.blocked
                    )));
                }
            }
            parsed.push(flags);
        }
        Grid::new(parsed)
    }

    /// Load a grid text file
    pub fn load(path: &Path, markers: &GridMarkers) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WaypathError::io_operation("read grid", path.display(), e))?;
        Self::parse(&content, markers)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Whether the cell is inside the grid and can be entered
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.contains(cell) && self.passable[cell.row * self.cols + cell.col]
    }

    /// The in-bounds cell one move away, regardless of passability
    fn step(&self, cell: Cell, m: Move) -> Option<Cell> {
        let (dr, dc) = m.offset();
        let next = Cell {
            row: cell.row.checked_add_signed(dr)?,
            col: cell.col.checked_add_signed(dc)?,
        };
        self.contains(next).then_some(next)
    }

    fn check_bounds(&self, cell: Cell) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(WaypathError::OutOfBounds {
                cell: cell.to_string(),
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Find the path with the fewest moves between two cells.
    ///
    /// Cells outside the grid are configuration errors. A blocked start or
    /// goal reports `NotFound` without searching.
    #[tracing::instrument(skip(self, opts), fields(rows = self.rows, cols = self.cols, start = %start, goal = %goal))]
    pub fn find_path(
        &self,
        start: Cell,
        goal: Cell,
        opts: &SearchOptions,
    ) -> Result<SearchReport<Cell>> {
        self.check_bounds(start)?;
        self.check_bounds(goal)?;

        if !self.is_passable(start) || !self.is_passable(goal) {
            tracing::debug!("start or goal cell is blocked");
            return Ok(SearchReport::short_circuit());
        }

        Ok(search_with(self, &start, &goal, opts))
    }
}

impl NeighborSource for Grid {
    type State = Cell;

    fn neighbors(&self, state: &Cell) -> Vec<Cell> {
        Move::ALL
            .into_iter()
            .filter_map(|m| self.step(*state, m))
            .filter(|&cell| self.is_passable(cell))
            .collect()
    }
}
