//! DTOs for the tracking and multi-platform redirect endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ClickCount;
use crate::domain::platform::RedirectTargets;
use crate::domain::tracking::UtmParams;

/// Query of `GET /redirect`.
#[derive(Debug, Default, Deserialize)]
pub struct TrackQuery {
    pub to: Option<String>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
}

impl TrackQuery {
    pub fn utm(&self) -> UtmParams {
        UtmParams {
            utm_source: self.utm_source.clone(),
            utm_medium: self.utm_medium.clone(),
            utm_campaign: self.utm_campaign.clone(),
        }
    }
}

/// Query of `GET /multiplatform`. The fallback travels as `u`.
#[derive(Debug, Default, Deserialize)]
pub struct MultiplatformQuery {
    pub ios: Option<String>,
    pub android: Option<String>,
    pub desktop: Option<String>,
    pub u: Option<String>,
}

impl From<MultiplatformQuery> for RedirectTargets {
    fn from(query: MultiplatformQuery) -> Self {
        RedirectTargets {
            ios: query.ios,
            android: query.android,
            desktop: query.desktop,
            fallback: query.u,
        }
    }
}

/// Click counter table returned by `POST /redirect`.
#[derive(Debug, Serialize)]
pub struct ClickCountsResponse {
    pub data: Vec<ClickCount>,
}
