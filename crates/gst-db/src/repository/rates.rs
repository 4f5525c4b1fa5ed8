//! # Rate Repository
//!
//! Database operations for GST rate resolution.
//!
//! ## The Latest-Effective-Rate Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │             How the current rate for a code is chosen                   │
//! │                                                                         │
//! │  gst_goods_rates for HSN 8415 (air conditioners):                      │
//! │                                                                         │
//! │  │ 8415 │ 14.0+14.0 │ 28% │ effective 2017-07-01 │ active │            │
//! │  │ 8415 │  9.0+9.0  │ 18% │ effective 2025-09-22 │ active │ ← CURRENT  │
//! │  │ 8415 │ 15.0+15.0 │ 30% │ effective 2016-01-01 │ dead   │ (ignored)  │
//! │                                                                         │
//! │  Current = active row with the latest effective_from.                  │
//! │  Rate rows are append-only: a rate change adds a new row, it never     │
//! │  rewrites history.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A subcategory whose code has no active rate row is silently dropped from
//! scenario listings - the store legitimately contains categories (petroleum,
//! alcohol) that sit outside GST.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::DbResult;
use gst_core::names::friendly_name;
use gst_core::types::{short_description, GoodsRate, RateBreakdown, RateStats, Scenario, ServicesRate};

/// Scenarios grouped by category name, in display order.
///
/// BTreeMap keys give the lexicographic category ordering; each Vec keeps
/// the subcategory ordering from the source query.
pub type CategoryMap = BTreeMap<String, Vec<Scenario>>;

// =============================================================================
// Row Types
// =============================================================================

/// One row of the category/rate join: the category pair plus the current
/// goods row and current services row side by side (either may be absent).
#[derive(Debug, FromRow)]
struct ScenarioRow {
    category_name: String,
    subcategory_name: String,
    hsn_code: Option<String>,
    sac_code: Option<String>,
    goods_cgst: Option<f64>,
    goods_sgst: Option<f64>,
    goods_igst: Option<f64>,
    goods_description: Option<String>,
    services_cgst: Option<f64>,
    services_sgst: Option<f64>,
    services_igst: Option<f64>,
    services_description: Option<String>,
}

impl ScenarioRow {
    /// Builds a Scenario from the resolved row.
    ///
    /// Rates come wholesale from ONE side of the join - the goods row when
    /// present, else the services row - so a goods CGST is never paired
    /// with a services SGST. Missing components default to 0.0 rather than
    /// failing: this is an informational tool and partial data still helps.
    fn into_scenario(self) -> Scenario {
        let (cgst, sgst, igst, description) = if self.goods_cgst.is_some() {
            (
                self.goods_cgst,
                self.goods_sgst,
                self.goods_igst,
                self.goods_description,
            )
        } else {
            (
                self.services_cgst,
                self.services_sgst,
                self.services_igst,
                self.services_description,
            )
        };

        Scenario {
            name: friendly_name(&self.subcategory_name),
            description: short_description(description.as_deref()),
            gst_rate: igst.unwrap_or(0.0),
            breakdown: RateBreakdown::new(cgst.unwrap_or(0.0), sgst.unwrap_or(0.0)),
            hsn_code: self.hsn_code,
            sac_code: self.sac_code,
        }
    }
}

#[derive(Debug, FromRow)]
struct GoodsRateRow {
    hsn_code: String,
    description: Option<String>,
    cgst_rate: Option<f64>,
    sgst_rate: Option<f64>,
    igst_rate: Option<f64>,
    compensation_cess: Option<f64>,
}

#[derive(Debug, FromRow)]
struct ServicesRateRow {
    sac_code: String,
    description: Option<String>,
    cgst_rate: Option<f64>,
    sgst_rate: Option<f64>,
    igst_rate: Option<f64>,
}

// =============================================================================
// Insert Records (seed tool and tests)
// =============================================================================

/// A goods rate row to append.
#[derive(Debug, Clone)]
pub struct NewGoodsRate {
    pub hsn_code: String,
    pub description: Option<String>,
    pub cgst_rate: Option<f64>,
    pub sgst_rate: Option<f64>,
    pub igst_rate: Option<f64>,
    pub compensation_cess: f64,
    pub effective_from: NaiveDate,
    pub is_active: bool,
}

/// A services rate row to append.
#[derive(Debug, Clone)]
pub struct NewServicesRate {
    pub sac_code: String,
    pub description: Option<String>,
    pub cgst_rate: Option<f64>,
    pub sgst_rate: Option<f64>,
    pub igst_rate: Option<f64>,
    pub effective_from: NaiveDate,
    pub is_active: bool,
}

// =============================================================================
// Queries
// =============================================================================

/// The single resolution query.
///
/// Each LEFT JOIN picks the current rate row for the subcategory's code via
/// a correlated subquery (active rows, latest effective_from, highest id as
/// the deterministic tie-break - the most recently appended row wins).
/// The WHERE clause is the drop rule: no current row on either side means
/// the subcategory is omitted, not errored.
const SCENARIOS_SQL: &str = r#"
SELECT
    pc.category_name,
    pc.subcategory_name,
    pc.hsn_code,
    pc.sac_code,
    g.cgst_rate AS goods_cgst,
    g.sgst_rate AS goods_sgst,
    g.igst_rate AS goods_igst,
    g.description AS goods_description,
    s.cgst_rate AS services_cgst,
    s.sgst_rate AS services_sgst,
    s.igst_rate AS services_igst,
    s.description AS services_description
FROM product_categories pc
LEFT JOIN gst_goods_rates g ON g.id = (
    SELECT g2.id
    FROM gst_goods_rates g2
    WHERE g2.hsn_code = pc.hsn_code AND g2.is_active = 1
    ORDER BY g2.effective_from DESC, g2.id DESC
    LIMIT 1
)
LEFT JOIN gst_services_rates s ON s.id = (
    SELECT s2.id
    FROM gst_services_rates s2
    WHERE s2.sac_code = pc.sac_code AND s2.is_active = 1
    ORDER BY s2.effective_from DESC, s2.id DESC
    LIMIT 1
)
WHERE g.cgst_rate IS NOT NULL OR s.cgst_rate IS NOT NULL
ORDER BY pc.category_name, pc.subcategory_name
"#;

/// Repository for rate-store operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = RateRepository::new(pool);
///
/// let categories = repo.categories_with_scenarios().await?;
/// let ac_rate = repo.find_goods_rate("8415").await?;
/// ```
#[derive(Debug, Clone)]
pub struct RateRepository {
    pool: SqlitePool,
}

impl RateRepository {
    /// Creates a new RateRepository.
    pub fn new(pool: SqlitePool) -> Self {
        RateRepository { pool }
    }

    /// Fetches every category with its resolved scenarios in one query.
    ///
    /// ## How It Works
    /// 1. For each (category, subcategory) pair, join the current rate row
    ///    from the matching table (goods for HSN, services for SAC)
    /// 2. Drop subcategories with no current row (the WHERE clause)
    /// 3. Build scenarios: prettified name, truncated description, nominal
    ///    rate from IGST, CGST/SGST breakdown from the same row
    /// 4. Group by category, preserving (category, subcategory) ordering
    ///
    /// ## Returns
    /// The full category map. Empty map when no reference data is loaded -
    /// a valid outcome, not an error.
    pub async fn categories_with_scenarios(&self) -> DbResult<CategoryMap> {
        debug!("Resolving categories with current rates");

        let rows = sqlx::query_as::<_, ScenarioRow>(SCENARIOS_SQL)
            .fetch_all(&self.pool)
            .await?;

        let mut categories = CategoryMap::new();
        for row in rows {
            let category = row.category_name.clone();
            categories
                .entry(category)
                .or_default()
                .push(row.into_scenario());
        }

        debug!(categories = categories.len(), "Rate resolution complete");
        Ok(categories)
    }

    /// Looks up the current rate row for an HSN code.
    ///
    /// Applies the same current-rate rule as scenario resolution: active
    /// rows only, latest effective_from wins.
    ///
    /// ## Returns
    /// * `Ok(Some(GoodsRate))` - A current rate exists for the code
    /// * `Ok(None)` - Unknown code, or no active rate row
    pub async fn find_goods_rate(&self, hsn_code: &str) -> DbResult<Option<GoodsRate>> {
        debug!(hsn_code = %hsn_code, "Searching goods rate");

        let row = sqlx::query_as::<_, GoodsRateRow>(
            r#"
            SELECT hsn_code, description, cgst_rate, sgst_rate, igst_rate, compensation_cess
            FROM gst_goods_rates
            WHERE hsn_code = ?1 AND is_active = 1
            ORDER BY effective_from DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(hsn_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| GoodsRate {
            hsn_code: r.hsn_code,
            description: r.description,
            cgst_rate: r.cgst_rate.unwrap_or(0.0),
            sgst_rate: r.sgst_rate.unwrap_or(0.0),
            igst_rate: r.igst_rate.unwrap_or(0.0),
            compensation_cess: r.compensation_cess.unwrap_or(0.0),
        }))
    }

    /// Looks up the current rate row for a SAC code.
    ///
    /// ## Returns
    /// * `Ok(Some(ServicesRate))` - A current rate exists for the code
    /// * `Ok(None)` - Unknown code, or no active rate row
    pub async fn find_services_rate(&self, sac_code: &str) -> DbResult<Option<ServicesRate>> {
        debug!(sac_code = %sac_code, "Searching services rate");

        let row = sqlx::query_as::<_, ServicesRateRow>(
            r#"
            SELECT sac_code, description, cgst_rate, sgst_rate, igst_rate
            FROM gst_services_rates
            WHERE sac_code = ?1 AND is_active = 1
            ORDER BY effective_from DESC, id DESC
            LIMIT 1
            "#,
        )
        .bind(sac_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| ServicesRate {
            sac_code: r.sac_code,
            description: r.description,
            cgst_rate: r.cgst_rate.unwrap_or(0.0),
            sgst_rate: r.sgst_rate.unwrap_or(0.0),
            igst_rate: r.igst_rate.unwrap_or(0.0),
        }))
    }

    /// Returns summary statistics over the loaded reference data.
    pub async fn stats(&self) -> DbResult<RateStats> {
        let goods_count: i64 =
            sqlx::query_scalar("SELECT COUNT(DISTINCT hsn_code) FROM gst_goods_rates")
                .fetch_one(&self.pool)
                .await?;

        let services_count: i64 =
            sqlx::query_scalar("SELECT COUNT(DISTINCT sac_code) FROM gst_services_rates")
                .fetch_one(&self.pool)
                .await?;

        let categories_count: i64 =
            sqlx::query_scalar("SELECT COUNT(DISTINCT category_name) FROM product_categories")
                .fetch_one(&self.pool)
                .await?;

        let goods_updated: Option<DateTime<Utc>> =
            sqlx::query_scalar("SELECT MAX(last_updated) FROM gst_goods_rates")
                .fetch_one(&self.pool)
                .await?;

        let services_updated: Option<DateTime<Utc>> =
            sqlx::query_scalar("SELECT MAX(last_updated) FROM gst_services_rates")
                .fetch_one(&self.pool)
                .await?;

        let last_updated = match (goods_updated, services_updated) {
            (Some(g), Some(s)) => Some(g.max(s)),
            (g, s) => g.or(s),
        };

        Ok(RateStats {
            goods_count,
            services_count,
            categories_count,
            last_updated,
        })
    }

    // =========================================================================
    // Write Path (seed tool and tests only)
    // =========================================================================

    /// Inserts a (category, subcategory) pair.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - the pair already exists
    pub async fn insert_category(
        &self,
        category_name: &str,
        subcategory_name: &str,
        hsn_code: Option<&str>,
        sac_code: Option<&str>,
    ) -> DbResult<()> {
        debug!(category = %category_name, subcategory = %subcategory_name, "Inserting category");

        sqlx::query(
            r#"
            INSERT INTO product_categories (category_name, subcategory_name, hsn_code, sac_code)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(category_name)
        .bind(subcategory_name)
        .bind(hsn_code)
        .bind(sac_code)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Appends a goods rate row.
    pub async fn insert_goods_rate(&self, rate: &NewGoodsRate) -> DbResult<()> {
        debug!(hsn_code = %rate.hsn_code, effective_from = %rate.effective_from, "Inserting goods rate");

        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO gst_goods_rates (
                hsn_code, description, cgst_rate, sgst_rate, igst_rate,
                compensation_cess, effective_from, is_active, last_updated
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(&rate.hsn_code)
        .bind(&rate.description)
        .bind(rate.cgst_rate)
        .bind(rate.sgst_rate)
        .bind(rate.igst_rate)
        .bind(rate.compensation_cess)
        .bind(rate.effective_from)
        .bind(rate.is_active)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Appends a services rate row.
    pub async fn insert_services_rate(&self, rate: &NewServicesRate) -> DbResult<()> {
        debug!(sac_code = %rate.sac_code, effective_from = %rate.effective_from, "Inserting services rate");

        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO gst_services_rates (
                sac_code, description, cgst_rate, sgst_rate, igst_rate,
                effective_from, is_active, last_updated
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&rate.sac_code)
        .bind(&rate.description)
        .bind(rate.cgst_rate)
        .bind(rate.sgst_rate)
        .bind(rate.igst_rate)
        .bind(rate.effective_from)
        .bind(rate.is_active)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts category rows (for seed-tool idempotence checks).
    pub async fn category_count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn goods_rate(hsn: &str, half: f64, effective: &str, active: bool) -> NewGoodsRate {
        NewGoodsRate {
            hsn_code: hsn.to_string(),
            description: Some(format!("Goods under HSN {hsn}")),
            cgst_rate: Some(half),
            sgst_rate: Some(half),
            igst_rate: Some(half * 2.0),
            compensation_cess: 0.0,
            effective_from: date(effective),
            is_active: active,
        }
    }

    fn services_rate(sac: &str, half: f64, effective: &str) -> NewServicesRate {
        NewServicesRate {
            sac_code: sac.to_string(),
            description: Some(format!("Services under SAC {sac}")),
            cgst_rate: Some(half),
            sgst_rate: Some(half),
            igst_rate: Some(half * 2.0),
            effective_from: date(effective),
            is_active: true,
        }
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_latest_effective_rate_wins() {
        let db = test_db().await;
        let repo = db.rates();

        repo.insert_category("Electronics", "Air Conditioning Machines", Some("8415"), None)
            .await
            .unwrap();
        // Both rows active: the 2025 revision must win over the 2017 rate
        repo.insert_goods_rate(&goods_rate("8415", 14.0, "2017-07-01", true))
            .await
            .unwrap();
        repo.insert_goods_rate(&goods_rate("8415", 9.0, "2025-09-22", true))
            .await
            .unwrap();

        let categories = repo.categories_with_scenarios().await.unwrap();
        let scenarios = &categories["Electronics"];
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].gst_rate, 18.0);
        assert_eq!(scenarios[0].breakdown.cgst, 9.0);
        assert_eq!(scenarios[0].breakdown.sgst, 9.0);
    }

    #[tokio::test]
    async fn test_inactive_rows_are_ignored() {
        let db = test_db().await;
        let repo = db.rates();

        repo.insert_category("Electronics", "Computers, Laptops", Some("8471"), None)
            .await
            .unwrap();
        repo.insert_goods_rate(&goods_rate("8471", 9.0, "2017-07-01", true))
            .await
            .unwrap();
        // Newer but deactivated: must not shadow the active row
        repo.insert_goods_rate(&goods_rate("8471", 14.0, "2024-01-01", false))
            .await
            .unwrap();

        let categories = repo.categories_with_scenarios().await.unwrap();
        assert_eq!(categories["Electronics"][0].gst_rate, 18.0);
    }

    #[tokio::test]
    async fn test_subcategory_without_current_rate_is_dropped() {
        let db = test_db().await;
        let repo = db.rates();

        repo.insert_category("Fuel", "Petroleum Products", Some("2709"), None)
            .await
            .unwrap();
        repo.insert_category("Electronics", "Telephone Sets, Smartphones", Some("8517"), None)
            .await
            .unwrap();
        repo.insert_goods_rate(&goods_rate("8517", 9.0, "2017-07-01", true))
            .await
            .unwrap();

        let categories = repo.categories_with_scenarios().await.unwrap();

        // No rate row for 2709: the whole Fuel category disappears silently
        assert!(!categories.contains_key("Fuel"));
        assert!(categories.contains_key("Electronics"));
    }

    #[tokio::test]
    async fn test_grouping_and_ordering() {
        let db = test_db().await;
        let repo = db.rates();

        // Inserted out of order on purpose
        repo.insert_category("Transport", "Taxi, Cab, Auto Rickshaw", None, Some("996411"))
            .await
            .unwrap();
        repo.insert_category("Electronics", "Telephone Sets, Smartphones", Some("8517"), None)
            .await
            .unwrap();
        repo.insert_category("Electronics", "Air Conditioning Machines", Some("8415"), None)
            .await
            .unwrap();

        repo.insert_goods_rate(&goods_rate("8517", 9.0, "2017-07-01", true))
            .await
            .unwrap();
        repo.insert_goods_rate(&goods_rate("8415", 9.0, "2025-09-22", true))
            .await
            .unwrap();
        repo.insert_services_rate(&services_rate("996411", 2.5, "2017-07-01"))
            .await
            .unwrap();

        let categories = repo.categories_with_scenarios().await.unwrap();

        let names: Vec<&String> = categories.keys().collect();
        assert_eq!(names, ["Electronics", "Transport"]);

        // Subcategories sorted by technical name: "Air Conditioning Machines"
        // before "Telephone Sets, Smartphones"
        let electronics = &categories["Electronics"];
        assert_eq!(electronics[0].name, "Air Conditioner");
        assert_eq!(electronics[1].name, "Mobile Phone/Smartphone");
    }

    #[tokio::test]
    async fn test_goods_row_wins_over_services_row() {
        let db = test_db().await;
        let repo = db.rates();

        // Data-quality edge: a subcategory wrongly carrying both codes.
        // The whole goods row must be used - no column mixing.
        repo.insert_category("Odd", "Both Codes", Some("9999"), Some("888888"))
            .await
            .unwrap();
        repo.insert_goods_rate(&goods_rate("9999", 6.0, "2017-07-01", true))
            .await
            .unwrap();
        repo.insert_services_rate(&services_rate("888888", 9.0, "2017-07-01"))
            .await
            .unwrap();

        let categories = repo.categories_with_scenarios().await.unwrap();
        let scenario = &categories["Odd"][0];
        assert_eq!(scenario.gst_rate, 12.0);
        assert_eq!(scenario.breakdown.cgst, 6.0);
        assert_eq!(scenario.breakdown.sgst, 6.0);
        assert_eq!(scenario.description, "Goods under HSN 9999");
    }

    #[tokio::test]
    async fn test_missing_igst_defaults_to_zero() {
        let db = test_db().await;
        let repo = db.rates();

        repo.insert_category("Clothing", "Mens Shirts", Some("6205"), None)
            .await
            .unwrap();
        repo.insert_goods_rate(&NewGoodsRate {
            igst_rate: None,
            ..goods_rate("6205", 2.5, "2017-07-01", true)
        })
        .await
        .unwrap();

        let categories = repo.categories_with_scenarios().await.unwrap();
        let scenario = &categories["Clothing"][0];
        assert_eq!(scenario.gst_rate, 0.0);
        assert_eq!(scenario.breakdown.cgst, 2.5);
        assert_eq!(scenario.breakdown.sgst, 2.5);
    }

    #[tokio::test]
    async fn test_long_description_is_truncated() {
        let db = test_db().await;
        let repo = db.rates();

        repo.insert_category("Food", "Food Preparations", Some("2106"), None)
            .await
            .unwrap();
        repo.insert_goods_rate(&NewGoodsRate {
            description: Some("z".repeat(180)),
            ..goods_rate("2106", 9.0, "2017-07-01", true)
        })
        .await
        .unwrap();

        let categories = repo.categories_with_scenarios().await.unwrap();
        let description = &categories["Food"][0].description;
        assert_eq!(description.chars().count(), 103);
        assert!(description.ends_with("..."));
    }

    #[tokio::test]
    async fn test_scenario_names_are_prettified() {
        let db = test_db().await;
        let repo = db.rates();

        repo.insert_category("Restaurants", "Non-AC Restaurants", None, Some("996331"))
            .await
            .unwrap();
        repo.insert_services_rate(&services_rate("996331", 2.5, "2017-07-01"))
            .await
            .unwrap();

        let categories = repo.categories_with_scenarios().await.unwrap();
        assert_eq!(categories["Restaurants"][0].name, "Regular Restaurant");
    }

    #[tokio::test]
    async fn test_find_goods_rate_applies_current_rule() {
        let db = test_db().await;
        let repo = db.rates();

        repo.insert_goods_rate(&NewGoodsRate {
            compensation_cess: 12.0,
            ..goods_rate("2202", 14.0, "2017-07-01", true)
        })
        .await
        .unwrap();
        repo.insert_goods_rate(&NewGoodsRate {
            compensation_cess: 0.0,
            ..goods_rate("2202", 20.0, "2025-09-22", true)
        })
        .await
        .unwrap();

        let rate = repo.find_goods_rate("2202").await.unwrap().unwrap();
        assert_eq!(rate.igst_rate, 40.0);
        assert_eq!(rate.compensation_cess, 0.0);

        assert!(repo.find_goods_rate("0000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_services_rate() {
        let db = test_db().await;
        let repo = db.rates();

        repo.insert_services_rate(&services_rate("998412", 9.0, "2017-07-01"))
            .await
            .unwrap();

        let rate = repo.find_services_rate("998412").await.unwrap().unwrap();
        assert_eq!(rate.cgst_rate, 9.0);
        assert_eq!(rate.igst_rate, 18.0);

        assert!(repo.find_services_rate("000000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_stats() {
        let db = test_db().await;
        let repo = db.rates();

        let empty = repo.stats().await.unwrap();
        assert_eq!(empty.goods_count, 0);
        assert!(empty.last_updated.is_none());

        repo.insert_category("Electronics", "Air Conditioning Machines", Some("8415"), None)
            .await
            .unwrap();
        repo.insert_goods_rate(&goods_rate("8415", 14.0, "2017-07-01", true))
            .await
            .unwrap();
        repo.insert_goods_rate(&goods_rate("8415", 9.0, "2025-09-22", true))
            .await
            .unwrap();
        repo.insert_services_rate(&services_rate("996331", 2.5, "2017-07-01"))
            .await
            .unwrap();

        let stats = repo.stats().await.unwrap();
        assert_eq!(stats.goods_count, 1); // two rows, one distinct code
        assert_eq!(stats.services_count, 1);
        assert_eq!(stats.categories_count, 1);
        assert!(stats.last_updated.is_some());
    }

    #[tokio::test]
    async fn test_duplicate_category_is_a_unique_violation() {
        let db = test_db().await;
        let repo = db.rates();

        repo.insert_category("Electronics", "Computers, Laptops", Some("8471"), None)
            .await
            .unwrap();
        let err = repo
            .insert_category("Electronics", "Computers, Laptops", Some("8471"), None)
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }
}
