//! Route planner state: inputs, the current route set, and selection.
//!
//! DESIGN
//! ======
//! A successful response replaces routes, start, and destination wholesale.
//! An application error leaves all of them untouched. Route geometry comes
//! from the encoded polyline when one is present, else from `coords`; a
//! polyline that fails to decode leaves that one route listed without an
//! overlay.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use mapkit::polyline::{self, PolylineError};
use mapkit::{Bounds, Coordinate};

use super::ApplyOutcome;
use super::map::{MapMarker, RouteOverlay};
use crate::net::error::{FetchError, ValidationError};
use crate::net::types::{RouteDto, RouteRequest, RoutesResponse};
use crate::util::markers::MarkerKind;
use crate::util::notify::{self, Notice};
use crate::util::request_seq::RequestSeq;

/// Start label when the backend resolves the start from the device position.
pub const CURRENT_LOCATION: &str = "Current Location";

/// Overlay colours, assigned to routes in order and cycling after five.
pub const ROUTE_COLORS: [&str; 5] = ["#ff0000", "#0000ff", "#00ff00", "#ff9900", "#9900ff"];

#[must_use]
pub fn route_color(index: usize) -> &'static str {
    ROUTE_COLORS[index % ROUTE_COLORS.len()]
}

#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub summary: String,
    pub distance: String,
    pub duration: String,
    pub path: Vec<Coordinate>,
    pub path_error: Option<PolylineError>,
    pub color: &'static str,
}

impl Route {
    #[must_use]
    pub fn from_dto(index: usize, dto: RouteDto) -> Self {
        let duration = dto.duration_label().to_owned();
        let (path, path_error) = match dto.polyline.as_deref().filter(|p| !p.is_empty()) {
            Some(encoded) => match polyline::decode(encoded) {
                Ok(path) => (path, None),
                Err(err) => {
                    log::warn!("route {index} ({}): undecodable polyline: {err}", dto.summary);
                    (Vec::new(), Some(err))
                }
            },
            None => (dto.coords.unwrap_or_default(), None),
        };
        Self {
            summary: dto.summary,
            distance: dto.distance,
            duration,
            path,
            path_error,
            color: route_color(index),
        }
    }

    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.path.len() >= 2
    }
}

#[derive(Clone, Debug, Default)]
pub struct RoutePlannerState {
    pub start_input: String,
    pub destination_input: String,
    pub routes: Vec<Route>,
    pub start: Option<Coordinate>,
    pub destination: Option<Coordinate>,
    /// Request that produced the current routes.
    pub applied_request: Option<RouteRequest>,
    pub selected: Option<usize>,
    pub loading: bool,
    pub seq: RequestSeq,
    /// Inline prompt next to the destination input.
    pub prompt: Option<Notice>,
    /// Banner for failed requests.
    pub notice: Option<Notice>,
}

impl RoutePlannerState {
    #[must_use]
    pub fn with_inputs(start: &str, destination: &str) -> Self {
        Self {
            start_input: start.to_owned(),
            destination_input: destination.to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    /// Validate inputs and tag a new request.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingDestination`] when the destination is blank;
    /// the inline prompt is set and nothing should be sent.
    pub fn begin_request(&mut self) -> Result<(u64, RouteRequest), ValidationError> {
        let destination = self.destination_input.trim();
        if destination.is_empty() {
            self.prompt = Some(notify::report_validation(ValidationError::MissingDestination));
            return Err(ValidationError::MissingDestination);
        }
        let request = RouteRequest {
            start: self.start_input.trim().to_owned(),
            destination: destination.to_owned(),
        };
        self.prompt = None;
        self.loading = true;
        Ok((self.seq.issue(), request))
    }

    pub fn apply_response(
        &mut self,
        seq: u64,
        request: &RouteRequest,
        result: Result<RoutesResponse, FetchError>,
    ) -> ApplyOutcome {
        if self.seq.is_latest(seq) {
            self.loading = false;
        }
        if !self.seq.is_fresh(seq) {
            log::debug!("dropping stale route response #{seq}");
            return ApplyOutcome::Stale;
        }
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                self.notice = Some(notify::report_fetch("route fetch", &err));
                return ApplyOutcome::Failed;
            }
        };
        self.seq.admit(seq);
        self.routes = response
            .routes
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, dto)| Route::from_dto(i, dto))
            .collect();
        self.start = response.start_coords;
        self.destination = response.dest_coords;
        self.applied_request = Some(request.clone());
        self.selected = if self.routes.is_empty() { None } else { Some(0) };
        self.notice = None;
        ApplyOutcome::Applied
    }

    pub fn select(&mut self, index: usize) {
        if index < self.routes.len() {
            self.selected = Some(index);
        }
    }

    /// Drawable route paths; the selected one last so it renders on top.
    #[must_use]
    pub fn overlays(&self) -> Vec<RouteOverlay> {
        let mut overlays: Vec<RouteOverlay> = self
            .routes
            .iter()
            .enumerate()
            .filter(|(_, route)| route.has_overlay())
            .map(|(i, route)| RouteOverlay {
                path: route.path.clone(),
                color: route.color,
                selected: self.selected == Some(i),
            })
            .collect();
        overlays.sort_by_key(|o| o.selected);
        overlays
    }

    #[must_use]
    pub fn markers(&self) -> Vec<MapMarker> {
        let (start_label, destination_label) = match &self.applied_request {
            Some(req) if !req.start.is_empty() => (req.start.as_str(), req.destination.as_str()),
            Some(req) => (CURRENT_LOCATION, req.destination.as_str()),
            None => (CURRENT_LOCATION, ""),
        };
        let mut markers = Vec::new();
        if let Some(at) = self.start {
            markers.push(MapMarker { kind: MarkerKind::Start, at, popup: format!("Start: {start_label}") });
        }
        if let Some(at) = self.destination {
            markers.push(MapMarker {
                kind: MarkerKind::Destination,
                at,
                popup: format!("Destination: {destination_label}"),
            });
        }
        markers
    }

    /// Box around every route point and both endpoints.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let points = self
            .routes
            .iter()
            .flat_map(|route| route.path.iter().copied())
            .chain(self.start)
            .chain(self.destination);
        Bounds::from_coords(points)
    }
}
