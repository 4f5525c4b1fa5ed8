//! # Category Cache
//!
//! Time-bounded cache of the resolved category map.
//!
//! ## Cache Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Snapshot Semantics                                 │
//! │                                                                         │
//! │  The cache holds ONE snapshot: the whole category map plus the          │
//! │  instant it was loaded.                                                 │
//! │                                                                         │
//! │  get()      ── read lock ──► fresh?  → Some(Arc<map>)                  │
//! │                              stale?  → None (caller reloads)           │
//! │                                                                         │
//! │  replace()  ── write lock ─► swap the ENTIRE snapshot                  │
//! │                                                                         │
//! │  A reader either sees the complete old map or the complete new map -   │
//! │  never a half-written one. If a reload fails the old snapshot simply   │
//! │  stays in place until its TTL runs out.                                 │
//! │                                                                         │
//! │  Staleness is bounded by the TTL: rates changed mid-window are         │
//! │  briefly stale, which is the accepted trade for an informational       │
//! │  tool. TTL zero disables caching entirely.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::repository::rates::CategoryMap;

/// One cached load of the category map.
#[derive(Debug)]
struct CacheEntry {
    loaded_at: Instant,
    categories: Arc<CategoryMap>,
}

/// Time-bounded snapshot cache for resolved categories.
///
/// Safe under concurrent reads with a single periodic refresh; the snapshot
/// is replaced wholesale, never mutated in place.
#[derive(Debug)]
pub struct CategoryCache {
    ttl: Duration,
    slot: RwLock<Option<CacheEntry>>,
}

impl CategoryCache {
    /// Creates a cache with the given time-to-live.
    ///
    /// `Duration::ZERO` disables caching: every `get` misses.
    pub fn new(ttl: Duration) -> Self {
        CategoryCache {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Returns the cached snapshot if it is still within its TTL.
    pub async fn get(&self) -> Option<Arc<CategoryMap>> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|entry| entry.loaded_at.elapsed() < self.ttl)
            .map(|entry| Arc::clone(&entry.categories))
    }

    /// Replaces the snapshot with a freshly loaded map and returns it.
    pub async fn replace(&self, categories: CategoryMap) -> Arc<CategoryMap> {
        let shared = Arc::new(categories);
        let mut slot = self.slot.write().await;
        *slot = Some(CacheEntry {
            loaded_at: Instant::now(),
            categories: Arc::clone(&shared),
        });
        shared
    }

    /// Drops the snapshot so the next `get` misses.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        *slot = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
