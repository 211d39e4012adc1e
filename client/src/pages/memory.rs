//! Sequence-recall memory game page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one `GameSession` signal and acts as the engine's timer
//! host: every directive the engine returns is scheduled as a one-shot
//! callback that feeds its tick back through `advance`. Directives carry
//! the session epoch, so a callback surviving past a reset lands as a
//! no-op instead of corrupting the new game.

use engine::{GameSession, Phase, PressOutcome};
use leptos::prelude::*;

use crate::components::game_hud::GameHud;
use crate::components::pad_grid::PadGrid;
use crate::state::records::RecordsState;

#[component]
pub fn MemoryPage() -> impl IntoView {
    let session = RwSignal::new(GameSession::new());
    let records = expect_context::<RwSignal<RecordsState>>();

    let on_start = move |_| start_round(session, StartKind::Fresh);
    let on_next = move |_| start_round(session, StartKind::NextRound);
    let on_reset = move |_| session.update(GameSession::reset);

    let on_press = Callback::new(move |value: u8| {
        let mut outcome = PressOutcome::Ignored;
        session.update(|s| outcome = s.press(value));
        if matches!(outcome, PressOutcome::RoundWon | PressOutcome::RoundLost) {
            let (round, score) = session.with_untracked(|s| (s.round(), s.score()));
            records.update(|r| r.absorb_memory(round, score));
        }
    });

    let highlighted = Signal::derive(move || session.with(engine::GameSession::highlighted));
    let accepting = Signal::derive(move || session.with(|s| s.phase() == Phase::AwaitingInput));
    let phase = move || session.with(engine::GameSession::phase);

    view! {
        <section class="memory-page">
            <GameHud session=session/>
            <Show when=move || phase() == Phase::Countdown>
                <div class="memory-page__countdown">
                    {move || session.with(|s| s.countdown().to_string())}
                </div>
            </Show>
            <PadGrid highlighted=highlighted accepting=accepting on_press=on_press/>
            <div class="memory-page__controls">
                <Show when=move || phase() == Phase::Instructions>
                    <button class="memory-page__action" on:click=on_start>"Start"</button>
                </Show>
                <Show when=move || phase() == Phase::RoundWon>
                    <button class="memory-page__action" on:click=on_next>"Next round"</button>
                </Show>
                <Show when=move || phase() == Phase::RoundLost>
                    <button
                        class="memory-page__action memory-page__action--reset"
                        on:click=on_reset
                    >
                        "Play again"
                    </button>
                </Show>
                <Show when=move || {
                    matches!(phase(), Phase::Countdown | Phase::Revealing | Phase::AwaitingInput)
                }>
                    <button
                        class="memory-page__action memory-page__action--reset"
                        on:click=move |_| session.update(GameSession::reset)
                    >
                        "Reset"
                    </button>
                </Show>
            </div>
        </section>
    }
}

/// Which engine entry point a round begins through.
#[derive(Clone, Copy)]
enum StartKind {
    Fresh,
    NextRound,
}

/// Begin a round and hand its first timer to the scheduler.
fn start_round(session: RwSignal<GameSession>, kind: StartKind) {
    #[cfg(feature = "hydrate")]
    {
        let mut rng = crate::util::seed::session_rng();
        let mut timer = None;
        session.update(|s| {
            timer = match kind {
                StartKind::Fresh => s.start(&mut rng),
                StartKind::NextRound => s.next_round(&mut rng),
            };
        });
        if let Some(timer) = timer {
            schedule_tick(session, timer);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, kind);
    }
}

/// Schedule one engine timer directive. The fired callback feeds the tick
/// back through `advance`, which validates epoch and phase before acting,
/// and schedules whatever directive comes next.
#[cfg(feature = "hydrate")]
fn schedule_tick(session: RwSignal<GameSession>, timer: engine::Timer) {
    gloo_timers::callback::Timeout::new(timer.delay_ms, move || {
        let mut next = None;
        session.update(|s| next = s.advance(timer.tick, timer.epoch));
        if let Some(next) = next {
            schedule_tick(session, next);
        }
    })
    .forget();
}
