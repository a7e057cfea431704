//! Handler for the content kind catalogue.

use axum::Json;

use crate::api::dto::kinds::{KindSchema, KindsResponse};
use crate::domain::ContentKind;
use crate::domain::schema::fields_for;

/// Lists every content kind with the fields its encoder reads.
///
/// # Endpoint
///
/// `GET /api/kinds`
pub async fn kinds_handler() -> Json<KindsResponse> {
    let kinds = ContentKind::ALL
        .iter()
        .map(|&kind| KindSchema {
            kind,
            fields: fields_for(kind),
        })
        .collect();

    Json(KindsResponse { kinds })
}
