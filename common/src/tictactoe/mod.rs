mod board;
mod game_state;
mod player;
mod renderer;

pub use board::{Board, BoardError, Cell, Grid, Marker, Position, WinLine, BOARD_SIZE};
pub use game_state::{
    win_status, GameError, GameState, MoveOutcome, Phase, DRAW_STATUS, OPENING_STATUS,
};
pub use player::{Player, Players};
pub use renderer::Renderer;
