//! # gst-db: Database Layer for GST Calc
//!
//! This crate provides rate-store access for the GST calculator.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        GST Calc Data Flow                               │
//! │                                                                         │
//! │  Presentation layer (external collaborator)                            │
//! │       │                                                                 │
//! │       │  resolver.list_scenarios("Restaurants")                        │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      gst-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ RateResolver  │    │RateRepository │    │  Migrations  │  │   │
//! │  │   │ (resolver.rs) │◄───│  (rates.rs)   │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ TTL cache     │    │ latest-rate   │    │ 001_init.sql │  │   │
//! │  │   │ category map  │    │ join query    │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite: product_categories, gst_goods_rates, gst_services_rates       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Rate repository (queries)
//! - [`cache`] - Time-bounded category cache
//! - [`resolver`] - The resolver facade the collaborator talks to
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gst_db::{Database, DbConfig, RateResolver};
//!
//! // Create database with default config
//! let db = Database::new(DbConfig::new("path/to/gst.db")).await?;
//!
//! // Resolver with the default 5-minute cache
//! let resolver = RateResolver::new(db);
//!
//! let categories = resolver.list_categories().await?;
//! let scenarios = resolver.list_scenarios("Restaurants").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cache;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod resolver;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};
pub use resolver::{RateResolver, DEFAULT_CACHE_TTL};

// Repository re-exports for convenience
pub use repository::rates::{CategoryMap, RateRepository};
