//! Card component linking to one widget demo from the dashboard.

use leptos::prelude::*;

/// A clickable card representing a widget.
#[component]
pub fn WidgetCard(
    href: &'static str,
    title: &'static str,
    blurb: &'static str,
    glyph: &'static str,
    #[prop(optional_no_strip)] badge: Option<String>,
) -> impl IntoView {
    view! {
        <a class="widget-card" href=href>
            <span class="widget-card__glyph" aria-hidden="true">{glyph}</span>
            <span class="widget-card__title">{title}</span>
            <span class="widget-card__blurb">{blurb}</span>
            {badge.map(|label| view! { <span class="widget-card__badge">{label}</span> })}
        </a>
    }
}
