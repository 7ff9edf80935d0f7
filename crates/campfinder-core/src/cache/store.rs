//! In-memory record cache.
//!
//! Camp and category snapshots are memoized for the process lifetime: the
//! first caller triggers a full paginated fetch, later callers get the
//! cached snapshot. A fetch failure is absorbed here - callers get an
//! empty list, never an error - and leaves the slot unfilled so the next
//! call retries.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::api::{AirtableClient, ApiError};
use crate::models::{Camp, CategoryRecord};

/// Something that can produce full camp and category snapshots.
/// Implemented by `AirtableClient`; tests substitute a scripted source.
pub trait RecordSource: Send + Sync {
    fn fetch_camps(&self) -> impl Future<Output = Result<Vec<Camp>, ApiError>> + Send;
    fn fetch_categories(
        &self,
    ) -> impl Future<Output = Result<Vec<CategoryRecord>, ApiError>> + Send;
}

impl RecordSource for AirtableClient {
    async fn fetch_camps(&self) -> Result<Vec<Camp>, ApiError> {
        AirtableClient::fetch_camps(self).await
    }

    async fn fetch_categories(&self) -> Result<Vec<CategoryRecord>, ApiError> {
        AirtableClient::fetch_categories(self).await
    }
}

/// Process-lifetime cache over a `RecordSource`.
///
/// Each snapshot slot is replaced atomically; readers see either the old
/// list or the new one, never a partial update. There is no in-flight
/// de-duplication: two concurrent cold reads may both fetch, and the slot
/// holds whichever result lands last.
pub struct CampCache<S: RecordSource> {
    source: S,
    camps: RwLock<Option<Arc<Vec<Camp>>>>,
    categories: RwLock<Option<Arc<Vec<CategoryRecord>>>>,
}

impl<S: RecordSource> CampCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            camps: RwLock::new(None),
            categories: RwLock::new(None),
        }
    }

    /// Return the camp snapshot, fetching on first use, forced refresh, or
    /// after an earlier failure. On failure returns an empty list without
    /// disturbing a previously cached snapshot.
    pub async fn get_camps(&self, force_refresh: bool) -> Arc<Vec<Camp>> {
        if !force_refresh {
            if let Some(cached) = self.camps.read().await.clone() {
                return cached;
            }
        }

        match self.source.fetch_camps().await {
            Ok(camps) => {
                let snapshot = Arc::new(camps);
                *self.camps.write().await = Some(Arc::clone(&snapshot));
                info!(count = snapshot.len(), "Refreshed camp snapshot");
                snapshot
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch camps");
                Arc::new(Vec::new())
            }
        }
    }

    /// Return the category snapshot. Same memoization discipline as camps
    /// in an independent slot; there is no forced-refresh path, so a stale
    /// category list lasts until `invalidate()` or process restart.
    pub async fn get_categories(&self) -> Arc<Vec<CategoryRecord>> {
        if let Some(cached) = self.categories.read().await.clone() {
            return cached;
        }

        match self.source.fetch_categories().await {
            Ok(categories) => {
                let snapshot = Arc::new(categories);
                *self.categories.write().await = Some(Arc::clone(&snapshot));
                info!(count = snapshot.len(), "Refreshed category snapshot");
                snapshot
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch categories");
                Arc::new(Vec::new())
            }
        }
    }

    /// Look up a single camp by record id in the cached snapshot.
    pub async fn camp_by_id(&self, id: &str) -> Option<Camp> {
        self.get_camps(false)
            .await
            .iter()
            .find(|camp| camp.id == id)
            .cloned()
    }

    /// Drop both snapshots. The next reads fetch fresh data.
    pub async fn invalidate(&self) {
        *self.camps.write().await = None;
        *self.categories.write().await = None;
        info!("Cache invalidated");
    }
}
