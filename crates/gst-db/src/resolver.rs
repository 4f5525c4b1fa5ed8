//! # Rate Resolver
//!
//! The facade the presentation layer talks to: ordered category names and
//! per-category scenarios, resolved to current rates and cached for a
//! bounded window.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Resolver Request Flow                              │
//! │                                                                         │
//! │  list_scenarios("Restaurants")                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Cache fresh? ──yes──► serve from snapshot                             │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  RateRepository::categories_with_scenarios()  (one SQL query)          │
//! │       │                                                                 │
//! │       ├── Ok(map)  → replace snapshot, serve                           │
//! │       │                                                                 │
//! │       └── Err(e)   → warn via tracing, return Err(e)                   │
//! │                      (the CALLER decides how to degrade - for this     │
//! │                       tool that means an empty list + warning banner)  │
//! │                                                                         │
//! │  Unknown category → Ok(vec![]) - an expected outcome, not an error.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Degrading at the Call Site
//! ```rust,ignore
//! // Fail-open: any store failure renders as "no data available"
//! let scenarios = resolver
//!     .list_scenarios(&category)
//!     .await
//!     .unwrap_or_default();
//! ```

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::cache::CategoryCache;
use crate::error::DbResult;
use crate::pool::Database;
use crate::repository::rates::CategoryMap;
use gst_core::types::Scenario;

/// Default cache time-to-live: rates change rarely, five minutes of
/// staleness is acceptable for an informational tool.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Resolves categories to their currently-effective GST scenarios.
///
/// Constructed once at process start with an injected database handle and a
/// configurable TTL - there is no global instance and no implicit state
/// beyond the explicit snapshot cache.
///
/// ## Usage
/// ```rust,ignore
/// let resolver = RateResolver::new(db);
///
/// for category in resolver.list_categories().await? {
///     let scenarios = resolver.list_scenarios(&category).await?;
///     // hand to the presentation layer
/// }
/// ```
#[derive(Debug)]
pub struct RateResolver {
    db: Database,
    cache: CategoryCache,
}

impl RateResolver {
    /// Creates a resolver with the default five-minute cache.
    pub fn new(db: Database) -> Self {
        RateResolver::with_ttl(db, DEFAULT_CACHE_TTL)
    }

    /// Creates a resolver with a custom cache TTL.
    ///
    /// `Duration::ZERO` disables caching; every call hits the store.
    pub fn with_ttl(db: Database, ttl: Duration) -> Self {
        RateResolver {
            db,
            cache: CategoryCache::new(ttl),
        }
    }

    /// Lists category names in display order (lexicographic).
    ///
    /// ## Returns
    /// * `Ok(names)` - possibly empty when no reference data is loaded
    /// * `Err(DbError)` - the store was unreachable; caller decides the
    ///   degradation
    pub async fn list_categories(&self) -> DbResult<Vec<String>> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.keys().cloned().collect())
    }

    /// Lists the resolved scenarios for a category.
    ///
    /// ## Returns
    /// * `Ok(scenarios)` - empty for an unknown category or one whose codes
    ///   have no current rate (both expected outcomes, not errors)
    /// * `Err(DbError)` - the store was unreachable
    pub async fn list_scenarios(&self, category: &str) -> DbResult<Vec<Scenario>> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.get(category).cloned().unwrap_or_default())
    }

    /// Forces a reload of the category snapshot, bypassing the TTL.
    ///
    /// On failure the previous snapshot is left untouched.
    pub async fn refresh(&self) -> DbResult<Arc<CategoryMap>> {
        debug!("Refreshing category snapshot");

        let categories = match self.db.rates().categories_with_scenarios().await {
            Ok(categories) => categories,
            Err(e) => {
                warn!(error = %e, "Category snapshot refresh failed");
                return Err(e);
            }
        };

        Ok(self.cache.replace(categories).await)
    }

    /// Drops the cached snapshot so the next call reloads.
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }

    /// Returns a fresh-enough snapshot, reloading when the cache missed.
    async fn snapshot(&self) -> DbResult<Arc<CategoryMap>> {
        if let Some(snapshot) = self.cache.get().await {
            return Ok(snapshot);
        }
        self.refresh().await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
