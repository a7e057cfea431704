//! DTOs for the content kind catalogue.

use serde::Serialize;

use crate::domain::ContentKind;
use crate::domain::schema::FieldSpec;

#[derive(Debug, Serialize)]
pub struct KindsResponse {
    pub kinds: Vec<KindSchema>,
}

/// One content kind with the fields its encoder reads.
#[derive(Debug, Serialize)]
pub struct KindSchema {
    pub kind: ContentKind,
    pub fields: &'static [FieldSpec],
}
