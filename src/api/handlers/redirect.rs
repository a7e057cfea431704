//! Handlers for the tracking redirect.

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::redirect::{ClickCountsResponse, TrackQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Counts a scan and redirects to the wrapped target.
///
/// # Endpoint
///
/// `GET /redirect?to=<target>[&utm_source=..][&utm_medium=..][&utm_campaign=..]`
///
/// # Request Flow
///
/// 1. Resolve `to` as an absolute URL, or relative to `BASE_URL`
/// 2. Increment the counter keyed by the literal `to`
/// 3. Append each UTM parameter the target does not already carry
/// 4. Return 302 Found
///
/// # Errors
///
/// Returns 400 `Missing 'to'` if `to` is absent or empty.
/// Returns 400 `Invalid 'to'` if `to` cannot be read as a URL.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Query(query): Query<TrackQuery>,
) -> Result<impl IntoResponse, AppError> {
    let location = state
        .analytics_service
        .track_redirect(query.to.as_deref(), &query.utm())
        .await?;

    metrics::counter!("redirect_clicks_total").increment(1);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}

/// Returns the click counter table.
///
/// # Endpoint
///
/// `POST /redirect`
///
/// # Response
///
/// Entries appear in the order their target was first seen.
///
/// ```json
/// {
///   "data": [
///     { "to": "https://x.example.com", "count": 2 },
///     { "to": "https://y.example.com", "count": 1 }
///   ]
/// }
/// ```
pub async fn click_counts_handler(
    State(state): State<AppState>,
) -> Result<Json<ClickCountsResponse>, AppError> {
    let data = state.analytics_service.click_counts().await?;
    Ok(Json(ClickCountsResponse { data }))
}
