//! Card for one candidate route in the planner sidebar.

use leptos::prelude::*;

use crate::state::routes::Route;

/// Clickable route summary; selecting it highlights its overlay.
#[component]
pub fn RouteCard(index: usize, route: Route, #[prop(into)] selected: Signal<bool>, on_select: Callback<usize>) -> impl IntoView {
    let color = route.color;
    let no_overlay = route.path_error.is_some();
    view! {
        <button
            class="route-card"
            class:route-card--selected=move || selected.get()
            style=format!("border-left-color:{color}")
            on:click=move |_| on_select.run(index)
        >
            <span class="route-card__header">
                <span class="route-card__index">{index + 1}</span>
                <span class="route-card__summary">{route.summary}</span>
                <span class="route-card__distance" style=format!("background:{color}")>
                    {route.distance}
                </span>
            </span>
            <span class="route-card__duration">{route.duration}</span>
            <Show when=move || no_overlay>
                <span class="route-card__note">"Route shape unavailable"</span>
            </Show>
        </button>
    }
}
