use crate::tictactoe::board::{Cell, Marker, Position, WinLine};

/// Everything the game controller needs from a display.
///
/// Implementations only reflect state; they never decide anything about the
/// game. The browser frontend implements this over its view model.
pub trait Renderer {
    fn update_cell(&mut self, position: Position, cell: Cell);

    fn highlight(&mut self, line: &WinLine);

    // Also drops any highlight left over from the previous round
    fn clear_cells(&mut self);

    fn update_score(&mut self, marker: Marker, score: u32);

    fn set_status(&mut self, message: &str);
}
