//! Focus timer page: a countdown tracker for one work block.
//!
//! Uses the same guarded-interval idiom as the game page: the ticking
//! callback re-checks the running flag before mutating, and pausing drops
//! the interval handle entirely.

#[cfg(test)]
#[path = "focus_test.rs"]
mod focus_test;

use leptos::prelude::*;

use crate::state::records::RecordsState;

const DEFAULT_MINUTES: u32 = 25;

#[component]
pub fn FocusPage() -> impl IntoView {
    let records = expect_context::<RwSignal<RecordsState>>();
    let total_secs = RwSignal::new(DEFAULT_MINUTES * 60);
    let remaining = RwSignal::new(DEFAULT_MINUTES * 60);
    let running = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let ticker = Rc::new(RefCell::new(None::<gloo_timers::callback::Interval>));
        Effect::new(move || {
            if !running.get() {
                ticker.borrow_mut().take();
                return;
            }
            if ticker.borrow().is_some() {
                return;
            }
            let tick = gloo_timers::callback::Interval::new(1000, move || {
                if !running.get_untracked() {
                    return;
                }
                let next = remaining.get_untracked().saturating_sub(1);
                remaining.set(next);
                if next == 0 {
                    running.set(false);
                }
            });
            *ticker.borrow_mut() = Some(tick);
        });
    }

    // Count a finished session exactly when the clock strikes zero; resets
    // and duration changes move the clock off zero without recording.
    Effect::new(move || {
        if remaining.get() == 0 {
            records.update(|r| r.record_focus_session());
        }
    });

    let on_toggle = move |_| {
        if remaining.get() > 0 {
            running.update(|r| *r = !*r);
        }
    };
    let on_reset = move |_| {
        running.set(false);
        remaining.set(total_secs.get());
    };
    let on_duration = move |ev| {
        if let Some(minutes) = parse_minutes(&event_target_value(&ev)) {
            running.set(false);
            total_secs.set(minutes * 60);
            remaining.set(minutes * 60);
        }
    };

    view! {
        <section class="focus-page">
            <h1 class="focus-page__title">"Focus Timer"</h1>
            <p class="focus-page__clock">{move || format_clock(remaining.get())}</p>
            <div class="focus-page__controls">
                <select class="focus-page__duration" on:change=on_duration disabled=move || running.get()>
                    <option value="15">"15 minutes"</option>
                    <option value="25" selected="selected">"25 minutes"</option>
                    <option value="50">"50 minutes"</option>
                </select>
                <button class="focus-page__action" on:click=on_toggle>
                    {move || toggle_label(running.get(), remaining.get())}
                </button>
                <button class="focus-page__action focus-page__action--secondary" on:click=on_reset>
                    "Reset"
                </button>
            </div>
            <Show when=move || remaining.get() == 0>
                <p class="focus-page__done">"Session complete. Take a break."</p>
            </Show>
        </section>
    }
}

/// Render seconds as `MM:SS`.
fn format_clock(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Label for the start/pause button.
fn toggle_label(running: bool, remaining: u32) -> &'static str {
    if running {
        "Pause"
    } else if remaining == 0 {
        "Done"
    } else {
        "Start"
    }
}

/// Parse the duration `<select>` value (whole minutes).
fn parse_minutes(raw: &str) -> Option<u32> {
    raw.trim().parse().ok().filter(|minutes| (1..=180).contains(minutes))
}
