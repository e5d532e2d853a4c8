//! Landing page: device location, its address, and entry points to the
//! planner and the traffic dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! "Know Your Location" asks the browser for a position, recenters the map on
//! it through the map command channel at the current zoom, then
//! reverse-geocodes it. Until a position is known the "You are here" marker
//! sits on the default center. The trip
//! form is a plain GET to `/navigation`, which pre-fills the planner from the
//! query string.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use mapkit::Coordinate;

use crate::components::map_view::MapView;
use crate::components::notice_banner::NoticeBanner;
use crate::config::{ClientConfig, DEFAULT_CENTER, HOME_ZOOM};
use crate::state::location::LocationState;
use crate::state::map::{MapCommand, MapCommands, MapMarker};
use crate::util::lifetime::ViewLifetime;
use crate::util::markers::MarkerKind;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let location = RwSignal::new(LocationState::default());
    let commands = RwSignal::new(MapCommands::default());
    let sidebar_open = RwSignal::new(true);
    let from = RwSignal::new(String::new());
    let to = RwSignal::new(String::new());

    let lifetime = ViewLifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    let geocoder_url = config.geocoder_url.clone();
    let on_locate = move |_| {
        if location.get_untracked().locating {
            return;
        }
        location.update(LocationState::begin_locate);
        leptos::task::spawn_local(locate_and_geocode(lifetime.clone(), geocoder_url.clone(), location, commands));
    };

    let you_marker = Signal::derive(move || vec![you_are_here(location.with(|s| s.position))]);

    view! {
        <div class="home-page" class:home-page--sidebar-closed=move || !sidebar_open.get()>
            <button
                class="home-page__sidebar-toggle"
                title="Toggle panel"
                on:click=move |_| sidebar_open.update(|open| *open = !*open)
            >
                {move || if sidebar_open.get() { "✕" } else { "☰" }}
            </button>

            <aside class="sidebar">
                <header class="sidebar__header">
                    <h5>"Welcome to"</h5>
                    <h2>"Smart Navigation System"</h2>
                </header>

                <section class="panel">
                    <button class="btn btn--dark" on:click=on_locate disabled=move || location.get().locating>
                        {move || if location.get().locating { "Locating..." } else { "Know Your Location" }}
                    </button>
                    <p class="panel__address">{move || location.get().address_label().to_owned()}</p>
                    <NoticeBanner notice=Signal::derive(move || location.get().notice) />
                </section>

                <form class="panel trip-form" action="/navigation" method="get">
                    <input
                        type="text"
                        name="from"
                        placeholder="From (optional)"
                        prop:value=move || from.get()
                        on:input=move |ev| from.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        name="to"
                        placeholder="To"
                        prop:value=move || to.get()
                        on:input=move |ev| to.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn--dark">"Get Routes"</button>
                </form>

                <nav class="sidebar__links">
                    <a class="btn btn--outline" href="/navigation">"Start A Journey"</a>
                    <a class="btn btn--outline" href="/traffic">"Traffic Management"</a>
                </nav>

                <footer class="sidebar__footer">"~Made in India"</footer>
            </aside>

            <main class="home-page__map">
                <MapView
                    provider=config.map_provider
                    center=DEFAULT_CENTER
                    zoom=HOME_ZOOM
                    markers=you_marker
                    commands=commands
                />
            </main>
        </div>
    }
}

async fn locate_and_geocode(
    lifetime: ViewLifetime,
    geocoder_url: String,
    location: RwSignal<LocationState>,
    commands: RwSignal<MapCommands>,
) {
    let result = crate::util::geolocation::current_position().await;
    if !lifetime.is_alive() {
        log::debug!("location resolved after leaving the page");
        return;
    }
    let position = result.as_ref().ok().copied();
    let Some(Some(seq)) = location.try_update(|s| s.apply_position(result)) else {
        return;
    };
    let Some(at) = position else {
        return;
    };
    commands.update(|c| c.send(recenter_on(at)));

    let address = crate::net::api::reverse_geocode(&geocoder_url, at).await;
    if !lifetime.is_alive() {
        return;
    }
    location.try_update(|s| s.apply_address(seq, address));
}

/// Device marker, on the default center until a position is known.
fn you_are_here(position: Option<Coordinate>) -> MapMarker {
    MapMarker { kind: MarkerKind::You, at: position.unwrap_or(DEFAULT_CENTER), popup: "You are here".to_owned() }
}

/// Move to `at` keeping whatever zoom the user has chosen.
fn recenter_on(at: Coordinate) -> MapCommand {
    MapCommand::RecenterOn { center: at, zoom: None }
}
