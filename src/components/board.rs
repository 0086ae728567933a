use leptos::{component, view, Callable, Callback, CollectView, IntoView, ReadSignal, SignalGet};
use memomatch_core::logic::game::{GameState, RoundStatus};

const BOARD_WIDTH: f64 = 420.0;
const GAP: f64 = 10.0;

/// Side length of a square tile so that `cols` of them plus the gaps
/// fill the board width exactly.
#[allow(clippy::cast_precision_loss)]
fn card_size(cols: usize) -> f64 {
    let cols_f = cols as f64;
    (BOARD_WIDTH - GAP * (cols_f - 1.0)) / cols_f
}

#[component]
pub fn BoardView(game: ReadSignal<GameState>, on_flip: Callback<usize>) -> impl IntoView {
    let grid_style = move || {
        let cols = game.get().level.config().cols;
        format!(
            "display: grid; grid-template-columns: repeat({cols}, 1fr); gap: {GAP}px; width: {BOARD_WIDTH}px; max-width: 95vw; margin: 0 auto;"
        )
    };

    let tiles = move || {
        let state = game.get();
        let size = card_size(state.level.config().cols);
        state
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let symbol = card.symbol;
                let face_up = card.face_up();
                let matched = card.matched;
                let tile_style =
                    format!("height: {size}px; font-size: {:.0}px;", size * 0.6);
                view! {
                    <div
                        class="card"
                        class:is-flipped=face_up
                        class:matched=matched
                        style=tile_style
                        on:click=move |_ev: web_sys::MouseEvent| on_flip.call(index)
                    >
                        <div class="card-inner">
                            <div class="card-face card-back">"?"</div>
                            <div class="card-face card-front">{symbol.to_string()}</div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="board-area">
            <div class="card-grid" style=grid_style>
                {tiles}
            </div>
            <RoundMessage game=game />
        </div>
    }
}

/// Banner under the board; invisible while the round is still running.
#[component]
pub fn RoundMessage(game: ReadSignal<GameState>) -> impl IntoView {
    let message_style = move || {
        if game.get().status == RoundStatus::Playing {
            "visibility: hidden;"
        } else {
            "visibility: visible;"
        }
    };
    let message_text = move || match game.get().status {
        RoundStatus::Playing => String::new(),
        RoundStatus::Won => "you win!".to_owned(),
        RoundStatus::TimeUp => "time over!".to_owned(),
    };

    view! {
        <div class="game-message" style=message_style>
            {message_text}
        </div>
    }
}
