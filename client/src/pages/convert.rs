//! Temperature converter page.

#[cfg(test)]
#[path = "convert_test.rs"]
mod convert_test;

use leptos::prelude::*;

use crate::util::convert::{TempUnit, convert_temperature, format_amount};

#[component]
pub fn ConvertPage() -> impl IntoView {
    let amount = RwSignal::new("20".to_owned());
    let from = RwSignal::new(TempUnit::Celsius);
    let to = RwSignal::new(TempUnit::Fahrenheit);

    let result = move || {
        parse_amount(&amount.get()).map(|value| {
            let converted = convert_temperature(value, from.get(), to.get());
            format!("{} {}", format_amount(converted), to.get().label())
        })
    };

    let on_swap = move |_| {
        let (f, t) = (from.get(), to.get());
        from.set(t);
        to.set(f);
    };

    view! {
        <section class="convert-page">
            <h1 class="convert-page__title">"Temperature Converter"</h1>
            <div class="convert-page__row">
                <input
                    class="convert-page__amount"
                    type="number"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <select
                    class="convert-page__unit"
                    prop:value=move || from.get().option_value().to_owned()
                    on:change=move |ev| {
                        if let Some(unit) = TempUnit::from_option(&event_target_value(&ev)) {
                            from.set(unit);
                        }
                    }
                >
                    <UnitOptions/>
                </select>
                <button class="convert-page__swap" on:click=on_swap title="Swap units">
                    "⇄"
                </button>
                <select
                    class="convert-page__unit"
                    prop:value=move || to.get().option_value().to_owned()
                    on:change=move |ev| {
                        if let Some(unit) = TempUnit::from_option(&event_target_value(&ev)) {
                            to.set(unit);
                        }
                    }
                >
                    <UnitOptions/>
                </select>
            </div>
            <p class="convert-page__result">
                {move || result().unwrap_or_else(|| "Enter a number to convert.".to_owned())}
            </p>
        </section>
    }
}

/// The three `<option>` rows shared by both unit selects.
#[component]
fn UnitOptions() -> impl IntoView {
    view! {
        <option value="c">"Celsius"</option>
        <option value="f">"Fahrenheit"</option>
        <option value="k">"Kelvin"</option>
    }
}

/// Parse the free-form amount input, tolerating surrounding whitespace.
fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}
