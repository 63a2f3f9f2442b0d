use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const BOARD_SIZE: usize = 3;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("Location ({row}, {col}) does not exist on the Board")]
    OutOfBounds { row: i32, col: i32 },
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    pub fn opponent(&self) -> Marker {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    // Uppercase name used in status messages, e.g. "X wins!"
    pub fn name(&self) -> &'static str {
        match self {
            Marker::X => "X",
            Marker::O => "O",
        }
    }
}

// Lowercase symbol shown inside a board cell
impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::X => write!(f, "x"),
            Marker::O => write!(f, "o"),
        }
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Marker),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn marker(&self) -> Option<Marker> {
        match self {
            Cell::Marked(marker) => Some(*marker),
            Cell::Empty => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Marked(marker) => write!(f, "{}", marker),
            Cell::Empty => Ok(()),
        }
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position(usize, usize);

impl Position {
    // Signed so that callers can hand us negative indices and get an error back
    pub fn new(row: i32, col: i32) -> Result<Self, BoardError> {
        let out_of_bounds = BoardError::OutOfBounds { row, col };
        let r = usize::try_from(row).map_err(|_| out_of_bounds)?;
        let c = usize::try_from(col).map_err(|_| out_of_bounds)?;
        if r >= BOARD_SIZE || c >= BOARD_SIZE {
            return Err(out_of_bounds);
        }
        Ok(Position(r, c))
    }

    pub fn row(&self) -> usize {
        self.0
    }

    pub fn col(&self) -> usize {
        self.1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// The three positions of a completed row, column or diagonal.
///
/// Positions are kept in the order the scan found them, so compare with
/// [`WinLine::contains`] or [`WinLine::same_cells`] rather than `==` when the
/// order does not matter.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct WinLine([Position; 3]);

impl WinLine {
    fn from_scan(found: Vec<Position>) -> Option<Self> {
        let positions: [Position; 3] = found.try_into().ok()?;
        Some(WinLine(positions))
    }

    pub fn positions(&self) -> &[Position; 3] {
        &self.0
    }

    pub fn contains(&self, position: Position) -> bool {
        self.0.contains(&position)
    }

    pub fn same_cells(&self, other: &WinLine) -> bool {
        self.0.iter().all(|p| other.contains(*p))
    }
}

pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Board(Grid);

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    // Overwrites whatever is in the cell; occupancy is the caller's business
    pub fn mark(&mut self, row: i32, col: i32, marker: Marker) -> Result<(), BoardError> {
        let pos = Position::new(row, col)?;
        self.0[pos.row()][pos.col()] = Cell::Marked(marker);
        Ok(())
    }

    pub fn get_marker(&self, row: i32, col: i32) -> Result<Cell, BoardError> {
        let pos = Position::new(row, col)?;
        Ok(self.cell(pos))
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.0[pos.row()][pos.col()]
    }

    pub fn snapshot(&self) -> Grid {
        self.0
    }

    pub fn clear(&mut self) {
        self.0 = Grid::default();
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().flatten().all(|c| !c.is_empty())
    }

    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|r| (0..BOARD_SIZE).map(move |c| Position(r, c)))
    }

    /// Finds the completed line of the marker at (`row`, `col`) that runs
    /// through that cell, if there is one.
    ///
    /// Rows and columns collect every matching cell in the line, while the
    /// diagonal walks stop at the first mismatch in each direction. The
    /// families are tried in the order row, column, anti-diagonal, main
    /// diagonal and the first one that collects exactly three cells wins.
    pub fn winning_line_through(&self, row: i32, col: i32) -> Result<Option<WinLine>, BoardError> {
        let start = Position::new(row, col)?;
        let marker = match self.cell(start) {
            Cell::Marked(m) => m,
            // Never report a line through an empty cell
            Cell::Empty => return Ok(None),
        };

        // Each family gets its own fresh scan
        let line = WinLine::from_scan(self.scan_row(start, marker))
            .or_else(|| WinLine::from_scan(self.scan_col(start, marker)))
            // top-right, then bottom-left
            .or_else(|| WinLine::from_scan(self.walk_diagonal(start, marker, (-1, 1))))
            // top-left, then bottom-right
            .or_else(|| WinLine::from_scan(self.walk_diagonal(start, marker, (-1, -1))));
        Ok(line)
    }

    pub fn winner(&self) -> Option<Marker> {
        Board::positions()
            .find(|pos| {
                matches!(
                    self.winning_line_through(pos.row() as i32, pos.col() as i32),
                    Ok(Some(_))
                )
            })
            .and_then(|pos| self.cell(pos).marker())
    }

    fn scan_row(&self, start: Position, marker: Marker) -> Vec<Position> {
        let row = start.row();
        (start.col()..BOARD_SIZE)
            .chain((0..start.col()).rev())
            .map(|c| Position(row, c))
            .filter(|p| self.cell(*p) == Cell::Marked(marker))
            .collect()
    }

    fn scan_col(&self, start: Position, marker: Marker) -> Vec<Position> {
        let col = start.col();
        (start.row()..BOARD_SIZE)
            .chain((0..start.row()).rev())
            .map(|r| Position(r, col))
            .filter(|p| self.cell(*p) == Cell::Marked(marker))
            .collect()
    }

    // Walk from the start cell in `step` direction, then from the neighbour
    // on the opposite side in the opposite direction
    fn walk_diagonal(&self, start: Position, marker: Marker, step: (i32, i32)) -> Vec<Position> {
        let (dr, dc) = step;
        let (row, col) = (start.row() as i32, start.col() as i32);
        let mut found = self.walk(row, col, (dr, dc), marker);
        found.extend(self.walk(row - dr, col - dc, (-dr, -dc), marker));
        found
    }

    fn walk(&self, mut row: i32, mut col: i32, step: (i32, i32), marker: Marker) -> Vec<Position> {
        let mut found = Vec::new();
        while let Ok(pos) = Position::new(row, col) {
            if self.cell(pos) != Cell::Marked(marker) {
                break;
            }
            found.push(pos);
            row += step.0;
            col += step.1;
        }
        found
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.iter() {
            let line = row
                .iter()
                .map(|c| match c {
                    Cell::Marked(m) => format!("[{}]", m),
                    Cell::Empty => "[ ]".to_string(),
                })
                .collect::<Vec<String>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
