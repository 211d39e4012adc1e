//! Game header: round, score, and a phase-specific status line.

#[cfg(test)]
#[path = "game_hud_test.rs"]
mod game_hud_test;

use engine::{GameSession, Phase};
use leptos::prelude::*;

/// Header strip above the pad grid.
#[component]
pub fn GameHud(#[prop(into)] session: Signal<GameSession>) -> impl IntoView {
    view! {
        <header class="game-hud">
            <div class="game-hud__counters">
                <span class="game-hud__counter">
                    {move || session.with(|s| format!("Round {}", s.round()))}
                </span>
                <span class="game-hud__counter">
                    {move || session.with(|s| format!("Score {}", s.score()))}
                </span>
            </div>
            <p class="game-hud__status">{move || session.with(status_line)}</p>
        </header>
    }
}

/// One line telling the player what is happening right now.
fn status_line(session: &GameSession) -> String {
    match session.phase() {
        Phase::Instructions => "Watch the pads light up, then repeat the order.".to_owned(),
        Phase::Countdown => format!("Get ready... {}", session.countdown()),
        Phase::Revealing => "Memorize the order.".to_owned(),
        Phase::AwaitingInput => {
            format!("Your turn: {} of {}", session.entered_len(), session.sequence_len())
        }
        Phase::RoundWon => "Round cleared!".to_owned(),
        Phase::RoundLost => "Wrong pad. Game over.".to_owned(),
    }
}
