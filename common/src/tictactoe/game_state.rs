use crate::tictactoe::board::{Board, BoardError, Cell, Marker, Position, WinLine};
use crate::tictactoe::player::Players;
use crate::tictactoe::renderer::Renderer;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const OPENING_STATUS: &str = "X goes first.";
pub const DRAW_STATUS: &str = "It's a draw!";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell: {0}")]
    InvalidPosition(#[from] BoardError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    InProgress,
    Won { marker: Marker, line: WinLine },
    Draw,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    // Occupied cell, or the round is already over
    Ignored,
    Placed {
        position: Position,
        marker: Marker,
        next: Marker,
    },
    Won {
        position: Position,
        marker: Marker,
        line: WinLine,
    },
    Draw {
        position: Position,
        marker: Marker,
    },
}

pub fn win_status(marker: Marker) -> String {
    format!("{} wins!", marker.name())
}

#[derive(Debug)]
pub struct GameState<R: Renderer> {
    board: Board,
    players: Players,
    current: Marker,
    phase: Phase,
    status: String,
    renderer: R,
}

impl<R: Renderer> GameState<R> {
    pub fn new(renderer: R) -> Self {
        let mut game_state = GameState {
            board: Board::new(),
            players: Players::default(),
            current: Marker::X,
            phase: Phase::InProgress,
            status: String::new(),
            renderer,
        };
        let scores: Vec<(Marker, u32)> = game_state
            .players
            .iter()
            .map(|p| (p.marker(), p.score()))
            .collect();
        for (marker, score) in scores {
            game_state.renderer.update_score(marker, score);
        }
        game_state.set_status(OPENING_STATUS.to_string());
        game_state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Marker {
        self.current
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn score(&self, marker: Marker) -> u32 {
        self.players[marker].score()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn handle_cell_click(&mut self, row: i32, col: i32) -> Result<MoveOutcome, GameError> {
        let position = Position::new(row, col)?;
        if self.phase != Phase::InProgress {
            warn!("click on {} ignored, round is over", position);
            return Ok(MoveOutcome::Ignored);
        }
        if !self.board.get_marker(row, col)?.is_empty() {
            warn!("click on {} ignored, cell is occupied", position);
            return Ok(MoveOutcome::Ignored);
        }

        let marker = self.current;
        self.board.mark(row, col, marker)?;
        self.renderer.update_cell(position, Cell::Marked(marker));
        debug!("{} marked {}\n{}", marker.name(), position, self.board);

        if let Some(line) = self.board.winning_line_through(row, col)? {
            let player = &mut self.players[marker];
            player.increment_score();
            let score = player.score();
            self.renderer.update_score(marker, score);
            self.renderer.highlight(&line);
            self.set_status(win_status(marker));
            self.phase = Phase::Won { marker, line };
            info!("{} won the round, score is now {}", marker.name(), score);
            return Ok(MoveOutcome::Won {
                position,
                marker,
                line,
            });
        }

        if self.board.is_full() {
            self.set_status(DRAW_STATUS.to_string());
            self.phase = Phase::Draw;
            info!("round ended in a draw");
            return Ok(MoveOutcome::Draw { position, marker });
        }

        self.current = marker.opponent();
        Ok(MoveOutcome::Placed {
            position,
            marker,
            next: self.current,
        })
    }

    // Scores carry over between rounds
    pub fn new_game(&mut self) {
        self.board.clear();
        self.renderer.clear_cells();
        self.current = Marker::X;
        self.phase = Phase::InProgress;
        self.set_status(OPENING_STATUS.to_string());
        info!(
            "new round started, X {} - O {}",
            self.score(Marker::X),
            self.score(Marker::O)
        );
    }

    fn set_status(&mut self, status: String) {
        self.renderer.set_status(&status);
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        UpdateCell(Position, Cell),
        Highlight(WinLine),
        ClearCells,
        UpdateScore(Marker, u32),
        SetStatus(String),
    }

    #[derive(Debug, Default)]
    struct RecordingRenderer {
        calls: Vec<Call>,
    }

    impl Renderer for RecordingRenderer {
        fn update_cell(&mut self, position: Position, cell: Cell) {
            self.calls.push(Call::UpdateCell(position, cell));
        }

        fn highlight(&mut self, line: &WinLine) {
            self.calls.push(Call::Highlight(*line));
        }

        fn clear_cells(&mut self) {
            self.calls.push(Call::ClearCells);
        }

        fn update_score(&mut self, marker: Marker, score: u32) {
            self.calls.push(Call::UpdateScore(marker, score));
        }

        fn set_status(&mut self, message: &str) {
            self.calls.push(Call::SetStatus(message.to_string()));
        }
    }

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col).unwrap()
    }

    fn new_game_state() -> GameState<RecordingRenderer> {
        GameState::new(RecordingRenderer::default())
    }

    fn play(game_state: &mut GameState<RecordingRenderer>, moves: &[(i32, i32)]) -> MoveOutcome {
        let mut outcome = MoveOutcome::Ignored;
        for (r, c) in moves {
            outcome = game_state.handle_cell_click(*r, *c).unwrap();
        }
        outcome
    }

    #[test]
    fn test_initial_render() {
        let game_state = new_game_state();
        assert_eq!(
            game_state.renderer().calls,
            vec![
                Call::UpdateScore(Marker::X, 0),
                Call::UpdateScore(Marker::O, 0),
                Call::SetStatus(OPENING_STATUS.to_string()),
            ]
        );
        assert_eq!(game_state.current(), Marker::X);
        assert_eq!(game_state.phase(), &Phase::InProgress);
        assert_eq!(game_state.status(), OPENING_STATUS);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game_state = new_game_state();
        let outcome = game_state.handle_cell_click(0, 2).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                position: pos(0, 2),
                marker: Marker::X,
                next: Marker::O,
            }
        );
        let outcome = game_state.handle_cell_click(2, 2).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                position: pos(2, 2),
                marker: Marker::O,
                next: Marker::X,
            }
        );
        assert_eq!(game_state.board().get_marker(0, 2).unwrap(), Cell::Marked(Marker::X));
        assert_eq!(game_state.board().get_marker(2, 2).unwrap(), Cell::Marked(Marker::O));
        assert_eq!(game_state.status(), OPENING_STATUS);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut game_state = new_game_state();
        play(&mut game_state, &[(1, 1)]);
        let calls_before = game_state.renderer().calls.len();
        assert_eq!(game_state.handle_cell_click(1, 1).unwrap(), MoveOutcome::Ignored);
        assert_eq!(game_state.board().get_marker(1, 1).unwrap(), Cell::Marked(Marker::X));
        assert_eq!(game_state.current(), Marker::O);
        assert_eq!(game_state.renderer().calls.len(), calls_before);
    }

    #[test]
    fn test_x_wins_round() {
        let mut game_state = new_game_state();
        let outcome = play(&mut game_state, &[(0, 2), (2, 2), (0, 1), (1, 1), (0, 0)]);
        let line = match outcome {
            MoveOutcome::Won {
                position,
                marker,
                line,
            } => {
                assert_eq!(position, pos(0, 0));
                assert_eq!(marker, Marker::X);
                line
            }
            other => panic!("expected a win, got {:?}", other),
        };
        for p in [pos(0, 0), pos(0, 1), pos(0, 2)] {
            assert!(line.contains(p));
        }
        assert_eq!(game_state.score(Marker::X), 1);
        assert_eq!(game_state.score(Marker::O), 0);
        assert_eq!(game_state.status(), "X wins!");
        assert_eq!(game_state.phase(), &Phase::Won { marker: Marker::X, line });

        let calls = &game_state.renderer().calls;
        assert!(calls.contains(&Call::UpdateScore(Marker::X, 1)));
        assert!(calls.contains(&Call::Highlight(line)));
        assert_eq!(calls.last(), Some(&Call::SetStatus("X wins!".to_string())));
    }

    #[test]
    fn test_board_locked_after_win() {
        let mut game_state = new_game_state();
        play(&mut game_state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(game_state.handle_cell_click(2, 2).unwrap(), MoveOutcome::Ignored);
        assert_eq!(game_state.board().get_marker(2, 2).unwrap(), Cell::Empty);
        assert_eq!(game_state.score(Marker::X), 1);
    }

    #[test]
    fn test_o_wins_column() {
        let mut game_state = new_game_state();
        let outcome = play(&mut game_state, &[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)]);
        assert!(matches!(outcome, MoveOutcome::Won { marker: Marker::O, .. }));
        assert_eq!(game_state.score(Marker::O), 1);
        assert_eq!(game_state.status(), "O wins!");
    }

    #[test]
    fn test_draw() {
        let mut game_state = new_game_state();
        // x o x / x o o / o x x
        let outcome = play(
            &mut game_state,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(
            outcome,
            MoveOutcome::Draw {
                position: pos(2, 2),
                marker: Marker::X,
            }
        );
        assert_eq!(game_state.phase(), &Phase::Draw);
        assert_eq!(game_state.status(), DRAW_STATUS);
        assert_eq!(game_state.score(Marker::X), 0);
        assert_eq!(game_state.score(Marker::O), 0);
        assert_eq!(game_state.handle_cell_click(0, 0).unwrap(), MoveOutcome::Ignored);
    }

    #[test]
    fn test_new_game_keeps_scores() {
        let mut game_state = new_game_state();
        play(&mut game_state, &[(0, 2), (2, 2), (0, 1), (1, 1), (0, 0)]);
        game_state.new_game();

        assert_eq!(game_state.board(), &Board::new());
        assert_eq!(game_state.current(), Marker::X);
        assert_eq!(game_state.phase(), &Phase::InProgress);
        assert_eq!(game_state.status(), OPENING_STATUS);
        assert_eq!(game_state.score(Marker::X), 1);
        assert_eq!(game_state.score(Marker::O), 0);
        let calls = &game_state.renderer().calls;
        assert!(calls.contains(&Call::ClearCells));
        assert_eq!(calls.last(), Some(&Call::SetStatus(OPENING_STATUS.to_string())));

        // Second round, O takes it
        play(&mut game_state, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
        assert_eq!(game_state.score(Marker::X), 1);
        assert_eq!(game_state.score(Marker::O), 1);
    }

    #[test]
    fn test_new_game_mid_round() {
        let mut game_state = new_game_state();
        play(&mut game_state, &[(0, 2), (2, 2)]);
        game_state.new_game();
        assert_eq!(game_state.board().get_marker(0, 2).unwrap(), Cell::Empty);
        assert_eq!(game_state.current(), Marker::X);
    }

    #[test]
    fn test_invalid_position() {
        let mut game_state = new_game_state();
        assert_eq!(
            game_state.handle_cell_click(3, 0),
            Err(GameError::InvalidPosition(BoardError::OutOfBounds { row: 3, col: 0 }))
        );
        assert_eq!(
            game_state.handle_cell_click(0, -1),
            Err(GameError::InvalidPosition(BoardError::OutOfBounds { row: 0, col: -1 }))
        );
        assert_eq!(game_state.current(), Marker::X);
    }
}
