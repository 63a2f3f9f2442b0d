use crate::view::BoardView;
use common::{GameState, Marker, MoveOutcome, BOARD_SIZE};
use gloo::console::log;
use std::fmt;
use yew::prelude::*;

#[derive(Debug, Clone)]
pub enum Message {
    ClickCell(usize, usize),
    NewGame,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::ClickCell(row, col) => write!(f, "ClickCell: {}, {}", row, col),
            Message::NewGame => write!(f, "NewGame"),
        }
    }
}

pub struct Game {
    game_state: GameState<BoardView>,
}

impl Component for Game {
    type Message = Message;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            game_state: GameState::new(BoardView::default()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        log!(msg.to_string());
        match msg {
            Message::ClickCell(row, col) => {
                match self.game_state.handle_cell_click(row as i32, col as i32) {
                    Ok(MoveOutcome::Ignored) => false,
                    Ok(outcome) => {
                        log!(format!("{:?}", outcome));
                        true
                    }
                    Err(e) => {
                        log!(e.to_string());
                        false
                    }
                }
            }
            Message::NewGame => {
                self.game_state.new_game();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = self.game_state.renderer();
        let onclick_new_game = ctx.link().callback(|_| Message::NewGame);
        html! {
            <>
                <header>
                    <h1>{"Tic-Tac-Toe"}</h1>
                    <h2 id="game-status-field" data-cy="game-status-field">
                        {view.status().to_string()}
                    </h2>
                </header>
                <div class={classes!("game-board")} data-cy="game-board">
                    <div class={classes!("game-board__board-wrapper")}>
                        {
                            (0..BOARD_SIZE)
                                .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
                                .map(|(row, col)| board_cell(ctx, view, row, col))
                                .collect::<Html>()
                        }
                    </div>
                </div>
                <div class={classes!("new-game-button")}>
                    <button
                        class={classes!("new-game-button__button")}
                        data-cy="new-game-button"
                        onclick={onclick_new_game}>
                        {"New Game"}
                    </button>
                </div>
                {view_win_status(view)}
                <footer>{"Tic-Tac-Toe in Rust"}</footer>
            </>
        }
    }
}

fn board_cell(ctx: &Context<Game>, view: &BoardView, row: usize, col: usize) -> Html {
    let onclick = ctx.link().callback(move |_| Message::ClickCell(row, col));
    let id = format!("cell-{}-{}", row, col);
    let mut class = classes!("game-board__cell");
    if view.is_highlighted(row, col) {
        class.push("game-board__cell--highlighted");
    }
    html! {
        <div id={id.clone()} data-cy={id} class={class} {onclick}>
            {view.cell_text(row, col).to_string()}
        </div>
    }
}

fn view_win_status(view: &BoardView) -> Html {
    html! {
        <div class={classes!("win-status")}>
            <h3 class={classes!("win-status--grid-1")}>{"X-Wins"}</h3>
            <h3 class={classes!("win-status--grid-2")}>{"O-Wins"}</h3>
            <div
                class={classes!("win-status__win-value", "win-status--grid-3")}
                id="x-win-count"
                data-cy="x-win-count">
                {view.wins(Marker::X).to_string()}
            </div>
            <div
                class={classes!("win-status__win-value", "win-status--grid-4")}
                id="o-win-count"
                data-cy="o-win-count">
                {view.wins(Marker::O).to_string()}
            </div>
        </div>
    }
}
