//! Hue-match page: dial a slider onto the target swatch.

use leptos::prelude::*;

use crate::state::records::RecordsState;
use crate::util::hue::{match_score, swatch_css};

#[component]
pub fn HuePage() -> impl IntoView {
    let records = expect_context::<RwSignal<RecordsState>>();
    let target = RwSignal::new(210.0_f64);
    let guess = RwSignal::new(0.0_f64);
    let locked = RwSignal::new(None::<u32>);

    // Roll a random target once the client is interactive; SSR keeps the
    // default so hydration starts from the rendered markup.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        target.set(crate::util::hue::random_hue(&mut crate::util::seed::session_rng()));
    });

    let live_score = move || match_score(target.get(), guess.get());

    let on_guess = move |ev| {
        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
            guess.set(value);
        }
    };
    let on_lock = move |_| {
        let score = live_score();
        locked.set(Some(score));
        records.update(|r| r.absorb_hue_score(score));
    };
    let on_new_target = move |_| {
        #[cfg(feature = "hydrate")]
        target.set(crate::util::hue::random_hue(&mut crate::util::seed::session_rng()));
        locked.set(None);
    };

    view! {
        <section class="hue-page">
            <h1 class="hue-page__title">"Hue Match"</h1>
            <div class="hue-page__swatches">
                <div class="hue-page__swatch">
                    <span
                        class="hue-page__color"
                        style:background-color=move || swatch_css(target.get())
                    ></span>
                    <span class="hue-page__label">"Target"</span>
                </div>
                <div class="hue-page__swatch">
                    <span
                        class="hue-page__color"
                        style:background-color=move || swatch_css(guess.get())
                    ></span>
                    <span class="hue-page__label">"Yours"</span>
                </div>
            </div>
            <input
                class="hue-page__slider"
                type="range"
                min="0"
                max="359"
                step="1"
                prop:value=move || guess.get().to_string()
                on:input=on_guess
            />
            <p class="hue-page__score">{move || format!("Match {}%", live_score())}</p>
            <div class="hue-page__controls">
                <button class="hue-page__action" on:click=on_lock>"Lock it in"</button>
                <button class="hue-page__action hue-page__action--secondary" on:click=on_new_target>
                    "New target"
                </button>
            </div>
            <Show when=move || locked.get().is_some()>
                <p class="hue-page__locked">
                    {move || format!("Locked at {}%", locked.get().unwrap_or_default())}
                </p>
            </Show>
        </section>
    }
}
