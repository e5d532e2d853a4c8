//! Live traffic dashboard: camera feed, signal state, vehicle counts, and
//! upstream reachability.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount a refresh loop fetches `/data` immediately and then once per poll
//! interval until the page is left. Ticks do not wait for each other; every
//! response is sequence-tagged and `TrafficState` drops the ones that
//! arrive behind a newer applied snapshot. The "System Status" panel is
//! fetched once per mount from the host's `/api/status`.

#[cfg(test)]
#[path = "traffic_test.rs"]
mod traffic_test;

use leptos::prelude::*;

use crate::components::notice_banner::NoticeBanner;
use crate::components::stat_card::StatCard;
use crate::components::traffic_light::TrafficLight;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::BackendStatus;
use crate::state::traffic::TrafficState;
use crate::util::lifetime::ViewLifetime;

#[component]
pub fn TrafficPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let traffic = RwSignal::new(TrafficState::default());
    let now = RwSignal::new(0.0_f64);
    let interval_ms = config.poll_interval.as_secs_f64() * 1000.0;

    let lifetime = ViewLifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    #[cfg(feature = "hydrate")]
    {
        let base = config.traffic_api_url.clone();
        let tick_lifetime = lifetime.clone();
        crate::util::lifetime::spawn_refresh_loop(lifetime.clone(), config.poll_interval, move |_tick| {
            now.try_set(now_ms());
            let Some(seq) = traffic.try_update(TrafficState::begin_poll) else {
                return;
            };
            leptos::task::spawn_local(poll_once(tick_lifetime.clone(), base.clone(), seq, traffic));
        });

        let status_lifetime = lifetime.clone();
        leptos::task::spawn_local(async move {
            let result = api::fetch_backend_status().await;
            if status_lifetime.is_alive() {
                traffic.try_update(|s| s.apply_backends(result));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &lifetime;
    }

    let snapshot = move || traffic.with(|s| s.snapshot.clone());
    let freshness = move || traffic.with(|s| freshness_label(s, now.get(), interval_ms));

    view! {
        <div class="traffic-page">
            <header class="traffic-page__header">
                <a class="traffic-page__back" href="/">"← Home"</a>
                <h1>"Smart Traffic Control"</h1>
                <span
                    class="traffic-page__freshness"
                    class:traffic-page__freshness--stale=move || traffic.with(|s| s.is_stale(now.get(), interval_ms))
                >
                    {freshness}
                </span>
            </header>

            <NoticeBanner notice=Signal::derive(move || traffic.with(|s| s.notice.clone())) />

            <div class="traffic-page__grid">
                <section class="card card--feed">
                    <h3 class="card__title">"Live Traffic Feed"</h3>
                    <img class="card__feed" src=api::video_stream_url(&config.traffic_api_url) alt="Traffic Feed" />
                    <div class="card__feed-caption">
                        <span>"Live"</span>
                        <span class="card__recording">"● Recording"</span>
                    </div>
                </section>

                <section class="card card--signal">
                    <h3 class="card__title">"Signal Status"</h3>
                    <TrafficLight
                        light=Signal::derive(move || snapshot().light_state)
                        direction=Signal::derive(move || snapshot().current_direction)
                    />
                </section>
            </div>

            <div class="traffic-page__stats">
                <StatCard
                    title="North-South"
                    caption="Vehicles"
                    accent="info"
                    value=Signal::derive(move || snapshot().north_south)
                />
                <StatCard
                    title="East-West"
                    caption="Vehicles"
                    accent="warning"
                    value=Signal::derive(move || snapshot().east_west)
                />
                <StatCard
                    title="Total Traffic"
                    caption="All vehicles"
                    accent="success"
                    value=Signal::derive(move || snapshot().total)
                />
            </div>

            <section class="card card--status">
                <h3 class="card__title">"System Status"</h3>
                {move || {
                    traffic
                        .with(|s| status_rows(&s.backends, s.backends_error.as_deref()))
                        .into_iter()
                        .map(|row| {
                            view! {
                                <div class="status-row">
                                    <span class=row.dot_class></span>
                                    <small>{row.label}</small>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </section>
        </div>
    }
}

#[cfg(feature = "hydrate")]
async fn poll_once(lifetime: ViewLifetime, base: String, seq: u64, traffic: RwSignal<TrafficState>) {
    let result = api::fetch_traffic_snapshot(&base).await;
    if !lifetime.is_alive() {
        log::debug!("traffic response #{seq} arrived after leaving the dashboard");
        return;
    }
    traffic.try_update(|s| s.apply_result(seq, result, now_ms()));
}

#[cfg(feature = "hydrate")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Header text describing how current the snapshot is.
fn freshness_label(state: &TrafficState, now_ms: f64, interval_ms: f64) -> String {
    match state.last_updated_ms {
        None if state.consecutive_failures > 0 => "Traffic backend unreachable".to_owned(),
        None => "Waiting for data...".to_owned(),
        Some(at) if state.is_stale(now_ms, interval_ms) => {
            let secs = ((now_ms - at) / 1000.0).floor();
            format!("Stale: last update {secs:.0}s ago")
        }
        Some(_) => "Live".to_owned(),
    }
}

#[derive(Debug, PartialEq, Eq)]
struct StatusRow {
    dot_class: &'static str,
    label: String,
}

fn status_rows(backends: &[BackendStatus], error: Option<&str>) -> Vec<StatusRow> {
    if backends.is_empty() {
        let label = error.map_or_else(|| "Checking services...".to_owned(), str::to_owned);
        return vec![StatusRow { dot_class: "status-dot status-dot--unknown", label }];
    }
    backends
        .iter()
        .map(|b| {
            let state = match (b.online, b.latency_ms) {
                (true, Some(ms)) => format!("online, {ms} ms"),
                (true, None) => "online".to_owned(),
                (false, _) => "offline".to_owned(),
            };
            StatusRow {
                dot_class: if b.online { "status-dot status-dot--up" } else { "status-dot status-dot--down" },
                label: format!("{}: {state}", b.name),
            }
        })
        .collect()
}
