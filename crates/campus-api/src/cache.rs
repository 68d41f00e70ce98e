//! Keyed request cache with in-flight deduplication.
//!
//! Key = path + sorted query + backend language ([`ContentRequest`]).
//! Concurrent callers for one key share a single fetch. Successful results
//! live for the configured TTL; failures are never stored, so the next
//! caller retries. Expired entries and abandoned slots are pruned on lookup.

use async_trait::async_trait;
use campus_core::{
    config::CacheConfig, error::CampusError, listing::Listing, request::ContentRequest,
    traits::ContentSource,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tokio::sync::OnceCell;
use tracing::debug;

struct Stamped {
    at: Instant,
    listing: Listing,
}

type Slot = Arc<OnceCell<Stamped>>;

enum Lookup {
    Hit(Listing),
    Pending(Slot),
}

/// Caching wrapper around any [`ContentSource`].
pub struct CachedSource<S> {
    inner: S,
    ttl: Duration,
    enabled: bool,
    slots: Mutex<HashMap<ContentRequest, Slot>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<S: ContentSource> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            enabled: true,
            slots: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn from_config(inner: S, cfg: &CacheConfig) -> Self {
        let mut cached = Self::new(inner, Duration::from_secs(cfg.ttl_secs));
        cached.enabled = cfg.enabled;
        cached
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// (hits, misses) since creation.
    pub fn stats(&self) -> (u64, u64) {
        (
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }

    /// Drop the entry for `request`, if any.
    pub fn invalidate(&self, request: &ContentRequest) {
        self.lock().remove(request);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ContentRequest, Slot>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lookup(&self, request: &ContentRequest) -> Lookup {
        let mut slots = self.lock();
        // Keep fresh entries and slots a caller is still fetching into.
        slots.retain(|_, slot| match slot.get() {
            Some(stamped) => stamped.at.elapsed() < self.ttl,
            None => Arc::strong_count(slot) > 1,
        });
        if let Some(slot) = slots.get(request) {
            match slot.get() {
                Some(stamped) if stamped.at.elapsed() < self.ttl => {
                    return Lookup::Hit(stamped.listing.clone());
                }
                Some(_) => {}
                // Another caller is fetching.
                None => return Lookup::Pending(slot.clone()),
            }
        }
        let slot: Slot = Arc::new(OnceCell::new());
        slots.insert(request.clone(), slot.clone());
        Lookup::Pending(slot)
    }
}

#[async_trait]
impl<S: ContentSource> ContentSource for CachedSource<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn fetch(&self, request: &ContentRequest) -> Result<Listing, CampusError> {
        if !self.enabled {
            return self.inner.fetch(request).await;
        }
        let slot = match self.lookup(request) {
            Lookup::Hit(listing) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("cache: hit {request}");
                return Ok(listing);
            }
            Lookup::Pending(slot) => slot,
        };
        let stamped = slot
            .get_or_try_init(|| async {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("cache: miss {request}");
                let listing = self.inner.fetch(request).await?;
                Ok::<_, CampusError>(Stamped {
                    at: Instant::now(),
                    listing,
                })
            })
            .await?;
        Ok(stamped.listing.clone())
    }

    async fn is_available(&self) -> bool {
        self.inner.is_available().await
    }
}
