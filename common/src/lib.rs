mod tictactoe;

pub use tictactoe::*;
