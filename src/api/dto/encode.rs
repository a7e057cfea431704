//! DTOs for the payload encoding endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::tracking::UtmParams;
use crate::domain::{ContentKind, FieldMap};

/// QR error-correction level requested for rendering.
///
/// This service does not render; the level is echoed back so the client can
/// hand payload and level to its renderer together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrectionLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

/// Request to encode one payload.
///
/// ```json
/// {
///   "kind": "wifi",
///   "fields": { "ssid": "Cafe", "password": "latte", "hidden": false },
///   "ec_level": "Q",
///   "tracking": { "utm_source": "table-tent" }
/// }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct EncodeRequest {
    /// Content kind name, parsed into [`ContentKind`] by the handler.
    #[validate(length(min = 1, max = 32))]
    pub kind: String,

    #[serde(default)]
    pub fields: FieldMap,

    #[serde(default)]
    pub ec_level: ErrorCorrectionLevel,

    /// When present, the payload is wrapped into a tracking redirect link.
    #[validate(nested)]
    pub tracking: Option<TrackingRequest>,
}

/// UTM parameters attached to a tracking redirect link.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TrackingRequest {
    #[validate(length(max = 200))]
    pub utm_source: Option<String>,

    #[validate(length(max = 200))]
    pub utm_medium: Option<String>,

    #[validate(length(max = 200))]
    pub utm_campaign: Option<String>,
}

impl From<TrackingRequest> for UtmParams {
    fn from(req: TrackingRequest) -> Self {
        UtmParams {
            utm_source: req.utm_source,
            utm_medium: req.utm_medium,
            utm_campaign: req.utm_campaign,
        }
    }
}

/// Encoded payload ready for an external QR renderer.
#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub kind: ContentKind,
    pub payload: String,
    pub ready: bool,
    pub ec_level: ErrorCorrectionLevel,
}
