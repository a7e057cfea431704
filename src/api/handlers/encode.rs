//! Handler for payload encoding.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::encode::{EncodeRequest, EncodeResponse};
use crate::domain::ContentKind;
use crate::error::AppError;
use crate::state::AppState;

/// Encodes form fields into a QR payload.
///
/// # Endpoint
///
/// `POST /api/encode`
///
/// # Request Body
///
/// ```json
/// {
///   "kind": "sms",
///   "fields": { "number": "+1 555 0100", "text": "Hi" },
///   "ec_level": "H",
///   "tracking": { "utm_source": "flyer" }
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "kind": "sms",
///   "payload": "sms:+15550100?body=Hi",
///   "ready": true,
///   "ec_level": "H"
/// }
/// ```
///
/// `ready` is false when the payload is blank; the client should not render
/// a code for it.
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown kind, a field the kind does not
/// read, a value of the wrong type, or an oversized UTM value.
pub async fn encode_handler(
    State(state): State<AppState>,
    Json(payload): Json<EncodeRequest>,
) -> Result<Json<EncodeResponse>, AppError> {
    payload.validate()?;
    let kind: ContentKind = payload.kind.parse()?;

    let outcome = state.payload_service.encode(
        kind,
        payload.fields,
        payload.tracking.map(Into::into),
    )?;

    Ok(Json(EncodeResponse {
        kind: outcome.kind,
        payload: outcome.payload,
        ready: outcome.ready,
        ec_level: payload.ec_level,
    }))
}
