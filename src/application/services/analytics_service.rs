//! Tracking redirects and click counts.

use std::sync::Arc;

use crate::domain::entities::ClickCount;
use crate::domain::repositories::ClickStore;
use crate::domain::tracking::{UtmParams, merge_utm};
use crate::error::AppError;
use axum::http::HeaderValue;
use tracing::debug;
use url::Url;

/// Service behind the tracking redirect.
///
/// Counts every redirect under the literal `to` value and computes the
/// outbound location with UTM parameters merged in.
pub struct AnalyticsService<S: ClickStore + ?Sized> {
    store: Arc<S>,
    base_url: Url,
}

impl<S: ClickStore + ?Sized> AnalyticsService<S> {
    /// Creates the service.
    ///
    /// `base_url` resolves relative `to` values such as `/menu`.
    pub fn new(store: Arc<S>, base_url: Url) -> Self {
        Self { store, base_url }
    }

    /// Records a click on `to` and returns the redirect location.
    ///
    /// The location is `to` unchanged unless at least one UTM parameter is
    /// missing from it, in which case the merged URL is returned. A `to`
    /// that cannot travel in a `Location` header (control characters such
    /// as `\n`) is replaced by its parsed URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Redirect`] if `to` is missing, empty, or cannot
    /// be read as a URL. Nothing is counted in that case.
    /// Returns [`AppError::Internal`] if the click store fails.
    pub async fn track_redirect(
        &self,
        to: Option<&str>,
        utm: &UtmParams,
    ) -> Result<String, AppError> {
        let to = to
            .filter(|to| !to.is_empty())
            .ok_or_else(|| AppError::redirect("Missing 'to'"))?;

        let target = Url::parse(to)
            .or_else(|_| self.base_url.join(to))
            .map_err(|_| AppError::redirect("Invalid 'to'"))?;

        let count = self.store.increment(to).await?;
        debug!(to, count, "Click recorded");

        let location = match merge_utm(&target, utm) {
            Some(merged) => merged.into(),
            None if HeaderValue::from_str(to).is_ok() => to.to_string(),
            None => target.into(),
        };

        Ok(location)
    }

    /// Returns all counters in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the click store fails.
    pub async fn click_counts(&self) -> Result<Vec<ClickCount>, AppError> {
        self.store.snapshot().await
    }

    /// Reports whether the click store is reachable.
    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }
}
