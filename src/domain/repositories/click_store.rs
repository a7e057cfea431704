//! Storage contract for the redirect click counter.

use crate::domain::entities::ClickCount;
use crate::error::AppError;
use async_trait::async_trait;

/// Counter table of redirect targets.
///
/// The default implementation keeps the table in process memory and loses it
/// on restart. A durable backend only has to provide these operations.
///
/// # Implementations
///
/// - [`crate::infrastructure::click_store::InMemoryClickStore`] - Mutex-guarded in-process table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickStore: Send + Sync {
    /// Increments the counter for `key` and returns the new count.
    ///
    /// The first increment of a key creates its entry with count 1.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend is unavailable.
    async fn increment(&self, key: &str) -> Result<u64, AppError>;

    /// Returns every entry in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend is unavailable.
    async fn snapshot(&self) -> Result<Vec<ClickCount>, AppError>;

    /// Checks that the backend can serve requests.
    async fn health_check(&self) -> bool;
}
