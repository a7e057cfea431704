//! In-process click counter.

use crate::domain::entities::ClickCount;
use crate::domain::repositories::ClickStore;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// Click counter kept in process memory.
///
/// Entries are never evicted and are lost on restart. The whole table sits
/// behind one mutex, so concurrent increments of the same key are not lost.
/// Counts are per process: several replicas each keep their own table.
#[derive(Default)]
pub struct InMemoryClickStore {
    inner: Mutex<Table>,
}

#[derive(Default)]
struct Table {
    entries: Vec<ClickCount>,
    index: HashMap<String, usize>,
}

impl InMemoryClickStore {
    pub fn new() -> Self {
        debug!("Using in-memory click store");
        Self::default()
    }
}

#[async_trait]
impl ClickStore for InMemoryClickStore {
    async fn increment(&self, key: &str) -> Result<u64, AppError> {
        let mut table = self.inner.lock().await;

        if let Some(&position) = table.index.get(key) {
            let entry = &mut table.entries[position];
            entry.count += 1;
            return Ok(entry.count);
        }

        let position = table.entries.len();
        table.entries.push(ClickCount::new(key, 1));
        table.index.insert(key.to_string(), position);
        Ok(1)
    }

    async fn snapshot(&self) -> Result<Vec<ClickCount>, AppError> {
        Ok(self.inner.lock().await.entries.clone())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_increment_counts_per_key() {
        let store = InMemoryClickStore::new();

        assert_eq!(store.increment("https://x").await.unwrap(), 1);
        assert_eq!(store.increment("https://x").await.unwrap(), 2);
        assert_eq!(store.increment("https://y").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_snapshot_in_first_seen_order() {
        let store = InMemoryClickStore::new();

        store.increment("https://x").await.unwrap();
        store.increment("https://y").await.unwrap();
        store.increment("https://x").await.unwrap();

        assert_eq!(
            store.snapshot().await.unwrap(),
            vec![ClickCount::new("https://x", 2), ClickCount::new("https://y", 1)]
        );
    }

    #[tokio::test]
    async fn test_snapshot_empty() {
        let store = InMemoryClickStore::new();
        assert!(store.snapshot().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_keys_are_literal() {
        let store = InMemoryClickStore::new();

        store.increment("https://x").await.unwrap();
        store.increment("https://x/").await.unwrap();

        assert_eq!(store.snapshot().await.unwrap().len(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let store = Arc::new(InMemoryClickStore::new());

        let handles: Vec<_> = (0..200)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.increment("https://x").await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(
            store.snapshot().await.unwrap(),
            vec![ClickCount::new("https://x", 200)]
        );
    }
}
