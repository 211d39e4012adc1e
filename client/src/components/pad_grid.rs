//! The 3x3 pad grid the memory game reveals on and reads input from.

use leptos::prelude::*;

/// Grid of numbered pads. The page decides whether presses count; the grid
/// only renders highlight state and forwards clicks.
#[component]
pub fn PadGrid(
    #[prop(into)] highlighted: Signal<Option<u8>>,
    #[prop(into)] accepting: Signal<bool>,
    on_press: Callback<u8>,
) -> impl IntoView {
    view! {
        <div class="pad-grid" role="group" aria-label="Memory pads">
            {(engine::PAD_MIN..=engine::PAD_MAX)
                .map(|value| {
                    view! {
                        <button
                            class="pad-grid__pad"
                            class:pad-grid__pad--lit=move || highlighted.get() == Some(value)
                            class:pad-grid__pad--idle=move || !accepting.get()
                            on:click=move |_| {
                                if accepting.get() {
                                    on_press.run(value);
                                }
                            }
                        >
                            {value.to_string()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
