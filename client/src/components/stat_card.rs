//! Single-number card for the traffic dashboard.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    title: &'static str,
    caption: &'static str,
    #[prop(into)] value: Signal<u64>,
    #[prop(optional)] accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{}", if accent.is_empty() { "plain" } else { accent })>
            <h6 class="stat-card__title">{title}</h6>
            <h4 class="stat-card__value">{move || value.get()}</h4>
            <small class="stat-card__caption">{caption}</small>
        </div>
    }
}
