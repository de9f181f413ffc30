use std::sync::Arc;

use super::resource::Resource;
use crate::cache::{Cache, cache_key};
use crate::error::{Error, Result};
use crate::store::Store;

/// Read-through lookup shared by every resource service.
///
/// The primary store is always consulted first, so a missing id is
/// `NotFound` regardless of what the cache holds. After that the first
/// cached snapshot wins: writes never refresh or evict it.
#[derive(Clone)]
pub struct ReadThrough {
    store: Arc<dyn Store>,
    cache: Arc<dyn Cache>,
}

impl ReadThrough {
    pub fn new(store: Arc<dyn Store>, cache: Arc<dyn Cache>) -> Self {
        Self { store, cache }
    }

    /// Returns the full, unredacted record.
    pub async fn lookup<R: Resource>(&self, id: i64) -> Result<R> {
        let record = R::load(self.store.as_ref(), id)?.ok_or(Error::NotFound(R::NAME))?;
        let key = cache_key(R::KIND, id);

        match self.cache.get(&key).await? {
            Some(cached) => {
                tracing::debug!(kind = R::KIND, id, "Cache hit");
                Ok(serde_json::from_str(&cached)?)
            }
            None => {
                tracing::debug!(kind = R::KIND, id, "Cache miss");
                self.cache.set(&key, serde_json::to_string(&record)?).await?;
                Ok(record)
            }
        }
    }

    pub async fn get<R: Resource>(&self, id: i64) -> Result<R::View> {
        Ok(self.lookup::<R>(id).await?.redact())
    }

    pub(crate) fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
}
