use crate::app::controls::ControlsArea;
use crate::app::styles::GAME_STYLES;
use crate::components::board::BoardView;
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::{
    component, create_effect, create_signal, set_interval_with_handle, set_timeout, store_value,
    view, Callback, IntoView, SignalGet, SignalGetUntracked, SignalSet,
    SignalUpdate,
};
use memomatch_core::logic::game::{FlipOutcome, GameState, RoundAction, RoundStatus};
use std::time::Duration;

/// How long a mismatched pair stays revealed before it turns back over.
const MISMATCH_REVEAL: Duration = Duration::from_secs(1);
const TICK: Duration = Duration::from_secs(1);

#[component]
pub fn App() -> impl IntoView {
    let (game, set_game) = create_signal(GameState::new());

    // At most one countdown is ever active; it is always cancelled before a
    // replacement is scheduled. Clearing an absent handle is a no-op.
    let timer = store_value(Option::<IntervalHandle>::None);

    let stop_timer = move || {
        timer.update_value(|handle| {
            if let Some(active) = handle.take() {
                active.clear();
            }
        });
    };
    let start_timer = move || {
        stop_timer();
        if let Ok(handle) = set_interval_with_handle(move || set_game.update(GameState::tick), TICK)
        {
            timer.set_value(Some(handle));
        }
    };

    // Countdown for the opening round; later rounds restart it from the
    // action button.
    create_effect(move |_| start_timer());

    // The clock stops as soon as the round ends either way.
    create_effect(move |_| {
        if game.get().status != RoundStatus::Playing {
            stop_timer();
        }
    });

    let on_flip = Callback::new(move |index: usize| {
        let mut state = game.get_untracked();
        match state.flip(index) {
            Ok(FlipOutcome::Mismatch) => {
                set_game.set(state);
                set_timeout(
                    move || set_game.update(GameState::resolve_mismatch),
                    MISMATCH_REVEAL,
                );
            }
            Ok(FlipOutcome::First | FlipOutcome::Matched { .. }) => set_game.set(state),
            // Locked board, matched tile, re-clicked tile: silently ignored.
            Err(_) => {}
        }
    });

    let on_action = Callback::new(move |()| {
        let mut state = game.get_untracked();
        if state.action() == RoundAction::Finished {
            return;
        }
        state.advance(&mut rand::thread_rng());
        set_game.set(state);
        start_timer();
    });

    view! {
        <div class="game-container" style="font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; min-height: 100vh; background-color: #222; color: #eee; display: flex; flex-direction: column; align-items: center;">
            <style>
                {GAME_STYLES}
            </style>

            <h1 style="margin: 20px 0; color: #f0d9b5; text-shadow: 0 2px 4px rgba(0,0,0,0.5); text-align: center;">"Memory Match"</h1>

            <ControlsArea game=game on_action=on_action />

            <BoardView game=game on_flip=on_flip />
        </div>
    }
}
