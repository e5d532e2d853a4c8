//! Slippy map: raster tiles, route polylines, and markers.
//!
//! DESIGN
//! ======
//! The component owns its camera (`Viewport`) and nothing else. Pages pass
//! markers and overlays as signals and move the camera only through
//! [`MapCommands`]; the map remembers the last command sequence it applied so
//! each command takes effect exactly once. Tiles are plain `<img>` elements
//! positioned from `Viewport::visible_tiles`; overlays and markers are drawn
//! in screen space from `Viewport::to_screen`. The camera size follows the
//! container on mount, on window resize, and at the start of each drag.

#[cfg(test)]
#[path = "map_view_test.rs"]
mod map_view_test;

use leptos::prelude::*;
use mapkit::mercator::{Pixel, TileSlot, Viewport};
use mapkit::{Coordinate, TileProvider};

use crate::state::map::{MapCommand, MapCommands, MapMarker, RouteOverlay};
use crate::util::markers::{MarkerStyle, icons};

/// Clear space kept around fitted bounds.
pub const FIT_PADDING: f64 = 40.0;
/// Closest zoom a fit may choose, so short routes do not zoom to street level.
pub const FIT_MAX_ZOOM: u8 = 17;

const FALLBACK_WIDTH: f64 = 800.0;
const FALLBACK_HEIGHT: f64 = 600.0;

#[component]
pub fn MapView(
    provider: TileProvider,
    center: Coordinate,
    zoom: u8,
    #[prop(into, optional)] markers: Signal<Vec<MapMarker>>,
    #[prop(into, optional)] overlays: Signal<Vec<RouteOverlay>>,
    #[prop(into, optional)] commands: Signal<MapCommands>,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let viewport = RwSignal::new(Viewport::new(center, zoom, FALLBACK_WIDTH, FALLBACK_HEIGHT));
    let last_command = StoredValue::new(0_u64);
    let drag_from = RwSignal::new(None::<(f64, f64)>);
    let open_popup = RwSignal::new(None::<usize>);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(el) = container_ref.get() else {
                return;
            };
            sync_size(&el, viewport);
        });
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(el) = container_ref.get_untracked() {
                sync_size(&el, viewport);
            }
        });
        on_cleanup(move || resize.remove());
    }

    Effect::new(move || {
        let Some((seq, command)) = commands.get().since(last_command.get_value()) else {
            return;
        };
        last_command.set_value(seq);
        viewport.update(|vp| *vp = apply_command(*vp, command));
    });

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = container_ref.get() {
                sync_size(&el, viewport);
                if let Err(err) = el.set_pointer_capture(ev.pointer_id()) {
                    log::debug!("map pointer capture unavailable: {err:?}");
                }
            }
        }
        drag_from.set(Some((f64::from(ev.client_x()), f64::from(ev.client_y()))));
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let Some((x0, y0)) = drag_from.get_untracked() else {
            return;
        };
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        drag_from.set(Some((x, y)));
        viewport.update(|vp| *vp = vp.panned_by(x - x0, y - y0));
    };
    let on_pointer_end = move |_ev: leptos::ev::PointerEvent| drag_from.set(None);
    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        ev.prevent_default();
        let step = if ev.delta_y() < 0.0 { 1 } else { -1 };
        viewport.update(|vp| *vp = zoom_step(*vp, step));
    };

    let tiles = move || {
        let vp = viewport.get();
        vp.visible_tiles()
            .into_iter()
            .map(|slot| {
                view! {
                    <img
                        class="map-view__tile"
                        src=provider.tile_url(slot.z, slot.x, slot.y)
                        style=tile_style(&slot)
                        alt=""
                        draggable="false"
                    />
                }
            })
            .collect_view()
    };

    let lines = move || {
        let vp = viewport.get();
        overlays
            .get()
            .into_iter()
            .map(|overlay| {
                view! {
                    <polyline
                        class="map-view__route"
                        class:map-view__route--selected=overlay.selected
                        points=polyline_points(&vp, &overlay.path)
                        stroke=overlay.color
                        stroke-width=if overlay.selected { "6" } else { "4" }
                        stroke-opacity=if overlay.selected { "0.95" } else { "0.55" }
                        fill="none"
                    ></polyline>
                }
            })
            .collect_view()
    };

    let pins = move || {
        let vp = viewport.get();
        let icon_set = icons();
        markers
            .get()
            .into_iter()
            .enumerate()
            .map(|(i, marker)| {
                let style = icon_set.style(marker.kind);
                let popup = marker.popup;
                let title = popup.clone();
                view! {
                    <div
                        class="map-view__marker"
                        style=marker_style(&vp, marker.at, &style)
                        title=title
                        on:pointerdown=move |ev: leptos::ev::PointerEvent| ev.stop_propagation()
                        on:click=move |_| open_popup.update(|p| *p = if *p == Some(i) { None } else { Some(i) })
                    >
                        <span class="map-view__marker-glyph">{style.glyph}</span>
                        <Show when=move || open_popup.get() == Some(i)>
                            <span class="map-view__popup">{popup.clone()}</span>
                        </Show>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div
            class="map-view"
            node_ref=container_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointerleave=on_pointer_end
            on:wheel=on_wheel
        >
            <div class="map-view__tiles">{tiles}</div>
            <svg
                class="map-view__overlay"
                width=move || viewport.get().width.to_string()
                height=move || viewport.get().height.to_string()
            >
                {lines}
            </svg>
            <div class="map-view__markers">{pins}</div>
            <div class="map-view__zoom">
                <button
                    class="map-view__zoom-btn"
                    title="Zoom in"
                    on:pointerdown=move |ev: leptos::ev::PointerEvent| ev.stop_propagation()
                    on:click=move |_| viewport.update(|vp| *vp = zoom_step(*vp, 1))
                >
                    "+"
                </button>
                <button
                    class="map-view__zoom-btn"
                    title="Zoom out"
                    on:pointerdown=move |ev: leptos::ev::PointerEvent| ev.stop_propagation()
                    on:click=move |_| viewport.update(|vp| *vp = zoom_step(*vp, -1))
                >
                    "-"
                </button>
            </div>
            <div class="map-view__attribution">{provider.attribution()}</div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn sync_size(el: &web_sys::HtmlDivElement, viewport: RwSignal<Viewport>) {
    let width = f64::from(el.client_width());
    let height = f64::from(el.client_height());
    if let Some(next) = resized(viewport.get_untracked(), width, height) {
        viewport.set(next);
    }
}

/// Camera for a container of `width` x `height`, or `None` when nothing
/// changed or the container is collapsed.
#[must_use]
pub fn resized(vp: Viewport, width: f64, height: f64) -> Option<Viewport> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    if (vp.width - width).abs() < 0.5 && (vp.height - height).abs() < 0.5 {
        return None;
    }
    Some(Viewport { width, height, ..vp })
}

/// Camera after applying `command`.
#[must_use]
pub fn apply_command(vp: Viewport, command: MapCommand) -> Viewport {
    match command {
        MapCommand::RecenterOn { center, zoom } => vp.with_center(center).with_zoom(zoom.unwrap_or(vp.zoom)),
        MapCommand::FitBounds(bounds) => Viewport::fit_bounds(bounds, vp.width, vp.height, FIT_PADDING, FIT_MAX_ZOOM),
    }
}

#[must_use]
pub fn zoom_step(vp: Viewport, step: i8) -> Viewport {
    vp.with_zoom(vp.zoom.saturating_add_signed(step))
}

/// SVG `points` attribute for `path` in screen space.
#[must_use]
pub fn polyline_points(vp: &Viewport, path: &[Coordinate]) -> String {
    path.iter()
        .map(|c| {
            let Pixel { x, y } = vp.to_screen(*c);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn tile_style(slot: &TileSlot) -> String {
    format!("left:{:.0}px;top:{:.0}px", slot.left, slot.top)
}

/// Pin positioned so its tip sits on `at`.
fn marker_style(vp: &Viewport, at: Coordinate, style: &MarkerStyle) -> String {
    let Pixel { x, y } = vp.to_screen(at);
    let size = style.size;
    format!(
        "left:{:.1}px;top:{:.1}px;width:{size}px;height:{size}px;background:{};border-color:{}",
        x - size / 2.0,
        y - size,
        style.fill,
        style.stroke
    )
}
