//! Route planner: start/destination form, candidate route list, and the map
//! showing every candidate with the selected one highlighted.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_query_map;

use crate::components::map_view::MapView;
use crate::components::notice_banner::{InlinePrompt, NoticeBanner};
use crate::components::route_card::RouteCard;
use crate::config::{ClientConfig, DEFAULT_CENTER, PLANNER_ZOOM};
use crate::net::types::RouteRequest;
use crate::state::ApplyOutcome;
use crate::state::map::{MapCommand, MapCommands};
use crate::state::routes::RoutePlannerState;
use crate::util::lifetime::ViewLifetime;

#[component]
pub fn NavigationPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let query = use_query_map();
    let (from, to) = query.with_untracked(|q| (q.get("from").unwrap_or_default(), q.get("to").unwrap_or_default()));
    let planner = RwSignal::new(RoutePlannerState::with_inputs(&from, &to));
    let commands = RwSignal::new(MapCommands::default());

    let lifetime = ViewLifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    let routing_url = config.routing_api_url.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !planner.get_untracked().can_submit() {
            return;
        }
        let Some(Ok((seq, request))) = planner.try_update(RoutePlannerState::begin_request) else {
            return;
        };
        leptos::task::spawn_local(fetch_and_apply(lifetime.clone(), routing_url.clone(), seq, request, planner, commands));
    };

    let on_select = Callback::new(move |index: usize| planner.update(|s| s.select(index)));

    let overlays = Signal::derive(move || planner.with(RoutePlannerState::overlays));
    let markers = Signal::derive(move || planner.with(RoutePlannerState::markers));

    let route_list = move || {
        let state = planner.get();
        if state.routes.is_empty() {
            return view! { <p class="route-list__empty">"No routes yet. Enter destination above."</p> }.into_any();
        }
        state
            .routes
            .into_iter()
            .enumerate()
            .map(|(index, route)| {
                let selected = Signal::derive(move || planner.with(|s| s.selected == Some(index)));
                view! { <RouteCard index=index route=route selected=selected on_select=on_select /> }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="navigation-page">
            <aside class="sidebar sidebar--wide">
                <header class="sidebar__header">
                    <a class="sidebar__back" href="/">"← Home"</a>
                    <h2>"Start A Journey"</h2>
                </header>

                <form class="panel trip-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Enter Start (optional)"
                        prop:value=move || planner.with(|s| s.start_input.clone())
                        on:input=move |ev| planner.update(|s| s.start_input = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Enter Destination"
                        prop:value=move || planner.with(|s| s.destination_input.clone())
                        on:input=move |ev| planner.update(|s| s.destination_input = event_target_value(&ev))
                    />
                    <InlinePrompt notice=Signal::derive(move || planner.with(|s| s.prompt.clone())) />
                    <button type="submit" class="btn btn--dark" disabled=move || !planner.with(RoutePlannerState::can_submit)>
                        {move || if planner.with(|s| s.loading) { "Finding Routes..." } else { "Get Routes" }}
                    </button>
                </form>

                <NoticeBanner notice=Signal::derive(move || planner.with(|s| s.notice.clone())) />

                <section class="route-list">
                    <h4>"Available Routes"</h4>
                    {route_list}
                </section>
            </aside>

            <main class="navigation-page__map">
                <MapView
                    provider=config.map_provider
                    center=DEFAULT_CENTER
                    zoom=PLANNER_ZOOM
                    markers=markers
                    overlays=overlays
                    commands=commands
                />
                <div class="map-hint">"Drag to pan, scroll to zoom"</div>
            </main>
        </div>
    }
}

async fn fetch_and_apply(
    lifetime: ViewLifetime,
    routing_url: String,
    seq: u64,
    request: RouteRequest,
    planner: RwSignal<RoutePlannerState>,
    commands: RwSignal<MapCommands>,
) {
    let result = crate::net::api::fetch_routes(&routing_url, &request).await;
    if !lifetime.is_alive() {
        log::debug!("route response #{seq} arrived after leaving the planner");
        return;
    }
    let Some((ApplyOutcome::Applied, bounds)) = planner.try_update(|s| {
        let outcome = s.apply_response(seq, &request, result);
        (outcome, s.bounds())
    }) else {
        return;
    };
    if let Some(bounds) = bounds {
        commands.update(|c| c.send(MapCommand::FitBounds(bounds)));
    }
}
