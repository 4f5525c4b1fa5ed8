//! # Repository Module
//!
//! Database repository implementation for the GST rate store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  RateResolver                                                          │
//! │       │                                                                 │
//! │       │  db.rates().categories_with_scenarios()                        │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  RateRepository                                                        │
//! │  ├── categories_with_scenarios(&self)                                  │
//! │  ├── find_goods_rate(&self, hsn_code)                                  │
//! │  ├── find_services_rate(&self, sac_code)                               │
//! │  └── stats(&self)                                                      │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                        │
//! │  • The latest-effective-rate rule is written exactly once              │
//! │  • Easy to test against an in-memory database                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod rates;
