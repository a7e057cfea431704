//! UTM passthrough for tracked redirects.
//!
//! A payload can be wrapped into a link to this service's `/redirect`
//! endpoint. When the link is followed, the UTM parameters it carries are
//! copied onto the final target, but never over a parameter the target
//! already defines.

use serde::Deserialize;
use url::{Url, form_urlencoded};

/// Path of the tracking redirect endpoint relative to the service origin.
pub const REDIRECT_PATH: &str = "/redirect";

/// Standard marketing parameters forwarded by the tracking redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UtmParams {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
}

impl UtmParams {
    /// Non-empty parameters as `(name, value)` pairs, in canonical order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("utm_source", &self.utm_source),
            ("utm_medium", &self.utm_medium),
            ("utm_campaign", &self.utm_campaign),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (name, v))
        })
    }

    /// Applies `f` to every present value.
    pub fn map_values(self, f: impl Fn(&str) -> String) -> Self {
        Self {
            utm_source: self.utm_source.map(|v| f(&v)),
            utm_medium: self.utm_medium.map(|v| f(&v)),
            utm_campaign: self.utm_campaign.map(|v| f(&v)),
        }
    }
}

/// Wraps `payload` into `<origin>/redirect?to=<payload>[&utm_*=..]`.
pub fn wrap_payload(origin: &str, payload: &str, utm: &UtmParams) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("to", payload);
    for (name, value) in utm.pairs() {
        query.append_pair(name, value);
    }

    format!(
        "{}{}?{}",
        origin.trim_end_matches('/'),
        REDIRECT_PATH,
        query.finish()
    )
}

/// Appends to `target` every UTM parameter it does not already carry.
///
/// Returns `None` when nothing was appended, so callers can keep the
/// target string exactly as received.
pub fn merge_utm(target: &Url, utm: &UtmParams) -> Option<Url> {
    let missing: Vec<(&str, &str)> = utm
        .pairs()
        .filter(|(name, _)| !target.query_pairs().any(|(key, _)| key == *name))
        .collect();

    if missing.is_empty() {
        return None;
    }

    let mut merged = target.clone();
    {
        let mut pairs = merged.query_pairs_mut();
        for (name, value) in missing {
            pairs.append_pair(name, value);
        }
    }
    Some(merged)
}
