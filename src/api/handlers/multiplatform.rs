//! Handler for the device-adaptive redirect.

use axum::{
    extract::Query,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;
use url::Url;

use crate::api::dto::redirect::MultiplatformQuery;
use crate::domain::platform::{Platform, RedirectTargets};
use crate::error::AppError;

/// Redirects to the target registered for the caller's platform.
///
/// # Endpoint
///
/// `GET /multiplatform?ios=..&android=..&desktop=..&u=..`
///
/// # Platform Detection
///
/// - `iPad`, `iPhone` or `iPod` in `User-Agent`: iOS
/// - `Android` in `User-Agent`: Android
/// - anything else, including a missing header: desktop
///
/// Non-ASCII bytes in `User-Agent` are read lossily, so they never hide a
/// device marker.
///
/// The platform's own target wins; `u` is used when it is absent. A target
/// that is not a valid header value is sent as its parsed URL.
///
/// # Errors
///
/// Returns 400 `Missing target` when neither the platform target nor `u`
/// is set, or when the chosen target cannot be expressed as a `Location`.
pub async fn multiplatform_handler(
    headers: HeaderMap,
    Query(query): Query<MultiplatformQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();

    let platform = Platform::detect(&user_agent);
    let targets = RedirectTargets::from(query);

    let target = targets
        .resolve(platform)
        .and_then(location_for)
        .ok_or_else(|| AppError::redirect("Missing target"))?;

    debug!(platform = platform.as_str(), %target, "Dispatching");
    metrics::counter!("multiplatform_dispatch_total", "platform" => platform.as_str())
        .increment(1);

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]))
}

/// Returns `target` if it is a legal header value, else its parsed URL.
fn location_for(target: &str) -> Option<String> {
    if HeaderValue::from_str(target).is_ok() {
        return Some(target.to_string());
    }

    Url::parse(target).ok().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_for_plain_target() {
        assert_eq!(
            location_for("https://x.example/a").as_deref(),
            Some("https://x.example/a")
        );
    }

    #[test]
    fn test_location_for_strips_control_characters() {
        assert_eq!(
            location_for("https://x.example/a\nb").as_deref(),
            Some("https://x.example/ab")
        );
    }

    #[test]
    fn test_location_for_unparseable_target() {
        assert_eq!(location_for("not a url\n"), None);
    }
}
