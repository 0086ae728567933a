use leptos::{
    component, view, Callable, Callback, IntoView, ReadSignal, SignalGet,
};
use memomatch_core::logic::game::{format_clock, GameState, RoundAction};

fn action_label(action: RoundAction) -> &'static str {
    match action {
        RoundAction::Restart => "restart",
        RoundAction::NextLevel => "next level",
        RoundAction::TryAgain => "try again",
        RoundAction::Finished => "you made it!",
    }
}

#[component]
pub fn ControlsArea(game: ReadSignal<GameState>, on_action: Callback<()>) -> impl IntoView {
    view! {
        <div class="controls-area">
            <div class="status-row">
                <div class="status-item">
                    <span class="status-label">"Level"</span>
                    <span class="status-value">
                        {move || game.get().level.number().to_string()}
                    </span>
                </div>
                <div class="status-item">
                    <span class="status-label">"Pairs"</span>
                    <span class="status-value">
                        {move || {
                            let state = game.get();
                            format!("{} / {}", state.matched_pairs, state.total_pairs())
                        }}
                    </span>
                </div>
                <div class="status-item">
                    <span class="status-label">"Time"</span>
                    <span class="status-value timer">
                        {move || format_clock(game.get().time_left)}
                    </span>
                </div>
            </div>

            <button
                class="control-btn btn-primary"
                prop:disabled=move || game.get().action() == RoundAction::Finished
                on:click=move |_| on_action.call(())
            >
                {move || action_label(game.get().action())}
            </button>
        </div>
    }
}
