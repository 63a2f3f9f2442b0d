use common::{Cell, Marker, Position, Renderer, WinLine, BOARD_SIZE};
use std::collections::HashSet;

// What the page shows, kept up to date by the game controller
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardView {
    cells: [[String; BOARD_SIZE]; BOARD_SIZE],
    highlighted: HashSet<(usize, usize)>,
    x_wins: u32,
    o_wins: u32,
    status: String,
}

impl BoardView {
    pub fn cell_text(&self, row: usize, col: usize) -> &str {
        &self.cells[row][col]
    }

    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.highlighted.contains(&(row, col))
    }

    pub fn wins(&self, marker: Marker) -> u32 {
        match marker {
            Marker::X => self.x_wins,
            Marker::O => self.o_wins,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

impl Renderer for BoardView {
    fn update_cell(&mut self, position: Position, cell: Cell) {
        self.cells[position.row()][position.col()] = cell.to_string();
    }

    fn highlight(&mut self, line: &WinLine) {
        self.highlighted
            .extend(line.positions().iter().map(|p| (p.row(), p.col())));
    }

    fn clear_cells(&mut self) {
        self.cells = Default::default();
        self.highlighted.clear();
    }

    fn update_score(&mut self, marker: Marker, score: u32) {
        match marker {
            Marker::X => self.x_wins = score,
            Marker::O => self.o_wins = score,
        }
    }

    fn set_status(&mut self, message: &str) {
        self.status = message.to_string();
    }
}
