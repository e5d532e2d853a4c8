//! Three-lamp signal head showing the active light colour.

#[cfg(test)]
#[path = "traffic_light_test.rs"]
mod traffic_light_test;

use leptos::prelude::*;

use crate::net::types::LightState;

/// Lit colour per lamp.
#[must_use]
pub fn light_color(light: LightState) -> &'static str {
    match light {
        LightState::Green => "#4ade80",
        LightState::Yellow => "#fde047",
        LightState::Red => "#f87171",
        LightState::Unknown => "#9ca3af",
    }
}

/// Dimmed colour of an unlit lamp.
fn dim_color(lamp: LightState) -> &'static str {
    match lamp {
        LightState::Red => "#542626",
        LightState::Yellow => "#4d4d26",
        LightState::Green | LightState::Unknown => "#264426",
    }
}

/// Inline style for `lamp` while `active` is showing.
#[must_use]
pub fn lamp_style(lamp: LightState, active: LightState) -> String {
    if lamp == active {
        let lit = light_color(lamp);
        format!("background-color:{lit};box-shadow:0 0 8px {lit}")
    } else {
        format!("background-color:{};box-shadow:none", dim_color(lamp))
    }
}

/// `NORTH_SOUTH` -> `NORTH-SOUTH`. Only the first underscore is replaced.
#[must_use]
pub fn direction_label(direction: &str) -> String {
    direction.replacen('_', "-", 1)
}

#[component]
pub fn TrafficLight(#[prop(into)] light: Signal<LightState>, #[prop(into)] direction: Signal<String>) -> impl IntoView {
    view! {
        <div class="traffic-light">
            <div class="traffic-light__housing">
                {LightState::LAMPS
                    .into_iter()
                    .map(|lamp| {
                        view! {
                            <div
                                class="traffic-light__bulb"
                                class:traffic-light__bulb--on=move || light.get() == lamp
                                data-lamp=lamp.as_str()
                                style=move || lamp_style(lamp, light.get())
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
            <h6 class="traffic-light__state" style=move || format!("color:{}", light_color(light.get()))>
                {move || light.get().as_str()}
            </h6>
            <p class="traffic-light__direction">"Direction: " {move || direction_label(&direction.get())}</p>
        </div>
    }
}
