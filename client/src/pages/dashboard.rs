//! Dashboard page listing the widget deck.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Cards link to each widget; badges surface
//! persisted best results so returning players see progress at a glance.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::widget_card::WidgetCard;
use crate::state::records::RecordsState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let records = expect_context::<RwSignal<RecordsState>>();

    view! {
        <section class="dashboard">
            <h1 class="dashboard__title">"Playdeck"</h1>
            <p class="dashboard__subtitle">"Small interactive demos, one per card."</p>
            <div class="dashboard__grid">
                {move || {
                    let state = records.get();
                    view! {
                        <WidgetCard
                            href="/memory"
                            title="Sequence Recall"
                            blurb="Watch the pads light up, repeat the order."
                            glyph="▦"
                            badge=memory_badge_label(&state)
                        />
                        <WidgetCard
                            href="/convert"
                            title="Temperature Converter"
                            blurb="Celsius, Fahrenheit and Kelvin, both ways."
                            glyph="⇄"
                        />
                        <WidgetCard
                            href="/hue"
                            title="Hue Match"
                            blurb="Dial a slider onto the target color."
                            glyph="◐"
                            badge=hue_badge_label(&state)
                        />
                        <WidgetCard
                            href="/focus"
                            title="Focus Timer"
                            blurb="A countdown for one unbroken work block."
                            glyph="◷"
                            badge=focus_badge_label(&state)
                        />
                    }
                }}
            </div>
        </section>
    }
}

fn memory_badge_label(records: &RecordsState) -> Option<String> {
    (records.memory.best_score > 0).then(|| {
        format!("Best {} pts, round {}", records.memory.best_score, records.memory.best_round)
    })
}

fn hue_badge_label(records: &RecordsState) -> Option<String> {
    (records.widgets.hue_score > 0).then(|| format!("Best match {}%", records.widgets.hue_score))
}

fn focus_badge_label(records: &RecordsState) -> Option<String> {
    match records.widgets.focus_sessions {
        0 => None,
        1 => Some("1 session done".to_owned()),
        n => Some(format!("{n} sessions done")),
    }
}
