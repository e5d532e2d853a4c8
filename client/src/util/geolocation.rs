//! Device position via the browser Geolocation API.
//!
//! The callback-based `getCurrentPosition` is bridged into a single future
//! with a oneshot channel. Off the browser every call fails with
//! [`GeolocationError::Unsupported`].

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

use mapkit::Coordinate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location unavailable")]
    Unavailable,
    #[error("location request timed out")]
    Timeout,
    #[error("geolocation is not supported by this browser")]
    Unsupported,
}

impl GeolocationError {
    /// Map a `GeolocationPositionError.code`.
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            3 => Self::Timeout,
            _ => Self::Unavailable,
        }
    }
}

/// Ask the device for its current position.
///
/// # Errors
///
/// Any [`GeolocationError`]; the browser may also never answer, in which
/// case the future stays pending.
pub async fn current_position() -> Result<Coordinate, GeolocationError> {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        type Reply = Result<Coordinate, GeolocationError>;

        let geolocation = web_sys::window()
            .ok_or(GeolocationError::Unsupported)?
            .navigator()
            .geolocation()
            .map_err(|_| GeolocationError::Unsupported)?;

        let (tx, rx) = futures::channel::oneshot::channel::<Reply>();
        let tx = Rc::new(RefCell::new(Some(tx)));
        let send = move |reply: Reply| {
            if let Some(tx) = tx.borrow_mut().take()
                && tx.send(reply).is_err()
            {
                log::debug!("geolocation answered after the caller went away");
            }
        };
        let send_err = send.clone();

        let on_success = Closure::once_into_js(move |position: web_sys::GeolocationPosition| {
            let coords = position.coords();
            send(Ok(Coordinate::new(coords.latitude(), coords.longitude())));
        });
        let on_error = Closure::once_into_js(move |error: web_sys::GeolocationPositionError| {
            send_err(Err(GeolocationError::from_code(error.code())));
        });

        geolocation
            .get_current_position_with_error_callback(on_success.unchecked_ref(), Some(on_error.unchecked_ref()))
            .map_err(|_| GeolocationError::Unavailable)?;

        rx.await.unwrap_or(Err(GeolocationError::Unavailable))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(GeolocationError::Unsupported)
    }
}
