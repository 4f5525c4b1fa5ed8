//! # Reference Data Loader
//!
//! Populates the rate store with CBIC-derived GST reference data.
//!
//! ## Usage
//! ```bash
//! # Load into the default database
//! cargo run -p gst-db --bin seed
//!
//! # Specify database path
//! cargo run -p gst-db --bin seed -- --db ./data/gst.db
//! ```
//!
//! ## Loaded Data
//! Consumer categories with their HSN/SAC codes and effective-dated rate
//! rows, including the 2025 rate-revision rows so the latest-effective rule
//! is exercised on real data:
//! - Goods: vehicles, electronics, clothing, food, household items
//! - Services: restaurants, hotels, telecom, transport, financial services
//! - One deliberately rate-less category (petroleum sits outside GST)
//!
//! Rate history is append-only: revisions are extra rows with later
//! effective dates, never edits.

use std::env;

use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

use gst_db::repository::rates::{NewGoodsRate, NewServicesRate};
use gst_db::{Database, DbConfig, RateResolver};

/// Category/subcategory pairs: (category, subcategory, hsn_code, sac_code).
const CATEGORIES: &[(&str, &str, Option<&str>, Option<&str>)] = &[
    ("Automobiles", "Passenger Cars - Petrol (Engine ≤1200cc)", Some("870321"), None),
    ("Automobiles", "Passenger Cars - Diesel (Engine ≤1500cc)", Some("870331"), None),
    ("Automobiles", "SUVs (Length >4m, Engine >1500cc, Ground clearance ≥170mm)", Some("870340"), None),
    ("Automobiles", "Electric Vehicles (All types)", Some("870380"), None),
    ("Automobiles", "Motorcycles (Engine ≤150cc)", Some("871120"), None),
    ("Clothing", "T-shirts, Singlets, Tank Tops", Some("6109"), None),
    ("Clothing", "Mens Shirts", Some("6205"), None),
    ("Electronics", "Air Conditioning Machines", Some("8415"), None),
    ("Electronics", "Computers, Laptops", Some("8471"), None),
    ("Electronics", "Telephone Sets, Smartphones", Some("8517"), None),
    ("Financial Services", "Basic Banking", None, Some("997113")),
    ("Financial Services", "Life Insurance", None, Some("997132")),
    ("Food & Beverages", "Food Preparations", Some("2106"), None),
    ("Food & Beverages", "Soft Drinks, Fruit Juices", Some("2202"), None),
    ("Footwear", "Sports Footwear", Some("6404"), None),
    // Petroleum is outside GST: no rate row exists, so the resolver drops it
    ("Fuel", "Petroleum Products", Some("2709"), None),
    ("Home & Kitchen", "Living Room Furniture", Some("9403"), None),
    ("Home & Kitchen", "Soaps & Detergents", Some("3401"), None),
    ("Hotels", "Luxury Hotels (Above ₹7,500/night)", None, Some("996311")),
    ("Hotels", "Standard Hotels (₹1,000-2,500/night)", None, Some("996312")),
    ("Restaurants", "AC Restaurants", None, Some("996332")),
    ("Restaurants", "Non-AC Restaurants", None, Some("996331")),
    ("Telecom", "Internet Services", None, Some("998422")),
    ("Telecom", "Mobile Services", None, Some("998412")),
    ("Transport", "Bus Transportation", None, Some("996412")),
    ("Transport", "Taxi, Cab, Auto Rickshaw", None, Some("996411")),
];

/// Goods rate rows:
/// (hsn, description, cgst, sgst, igst, cess, effective_from, is_active).
const GOODS_RATES: &[(&str, &str, f64, f64, f64, f64, &str, bool)] = &[
    // Small petrol cars: 28% + 1% cess until the 2025 revision cut them to 18%
    ("870321", "Motor cars with spark-ignition engine of cylinder capacity not exceeding 1200cc", 14.0, 14.0, 28.0, 1.0, "2017-07-01", true),
    ("870321", "Motor cars with spark-ignition engine of cylinder capacity not exceeding 1200cc", 9.0, 9.0, 18.0, 0.0, "2025-09-22", true),
    ("870331", "Motor cars with compression-ignition engine of cylinder capacity not exceeding 1500cc", 14.0, 14.0, 28.0, 3.0, "2017-07-01", true),
    ("870331", "Motor cars with compression-ignition engine of cylinder capacity not exceeding 1500cc", 9.0, 9.0, 18.0, 0.0, "2025-09-22", true),
    // SUVs: cess folded into the 40% demerit rate in 2025
    ("870340", "Motor vehicles with ground clearance of 170mm and above, length exceeding 4000mm and engine capacity exceeding 1500cc", 14.0, 14.0, 28.0, 22.0, "2017-07-01", true),
    ("870340", "Motor vehicles with ground clearance of 170mm and above, length exceeding 4000mm and engine capacity exceeding 1500cc", 20.0, 20.0, 40.0, 0.0, "2025-09-22", true),
    ("870380", "Motor vehicles with only electric motor for propulsion", 2.5, 2.5, 5.0, 0.0, "2019-08-01", true),
    ("871120", "Motorcycles and mopeds with reciprocating engine of cylinder capacity not exceeding 150cc", 14.0, 14.0, 28.0, 0.0, "2017-07-01", true),
    ("871120", "Motorcycles and mopeds with reciprocating engine of cylinder capacity not exceeding 150cc", 9.0, 9.0, 18.0, 0.0, "2025-09-22", true),
    ("6109", "T-shirts, singlets and other vests, knitted or crocheted", 2.5, 2.5, 5.0, 0.0, "2017-07-01", true),
    ("6205", "Men's or boys' shirts, not knitted or crocheted", 2.5, 2.5, 5.0, 0.0, "2017-07-01", true),
    ("8415", "Air conditioning machines comprising a motor-driven fan and elements for changing temperature and humidity", 14.0, 14.0, 28.0, 0.0, "2017-07-01", true),
    ("8415", "Air conditioning machines comprising a motor-driven fan and elements for changing temperature and humidity", 9.0, 9.0, 18.0, 0.0, "2025-09-22", true),
    ("8471", "Automatic data processing machines and units thereof; laptops, desktops and servers", 9.0, 9.0, 18.0, 0.0, "2017-07-01", true),
    // Mobile phones moved from 12% to 18% in April 2020
    ("8517", "Telephone sets, including smartphones and other telephones for cellular networks", 6.0, 6.0, 12.0, 0.0, "2017-07-01", true),
    ("8517", "Telephone sets, including smartphones and other telephones for cellular networks", 9.0, 9.0, 18.0, 0.0, "2020-04-01", true),
    ("2106", "Food preparations not elsewhere specified or included, ready for direct consumption", 9.0, 9.0, 18.0, 0.0, "2017-07-01", true),
    // Withdrawn draft revision kept for history: deactivated, never current
    ("2106", "Food preparations not elsewhere specified or included, ready for direct consumption", 6.0, 6.0, 12.0, 0.0, "2023-10-01", false),
    ("2202", "Waters, including mineral waters and aerated waters, containing added sugar or other sweetening matter or flavoured, and other non-alcoholic beverages", 14.0, 14.0, 28.0, 12.0, "2017-07-01", true),
    ("2202", "Waters, including mineral waters and aerated waters, containing added sugar or other sweetening matter or flavoured, and other non-alcoholic beverages", 20.0, 20.0, 40.0, 0.0, "2025-09-22", true),
    ("6404", "Footwear with outer soles of rubber or plastics and uppers of textile materials", 9.0, 9.0, 18.0, 0.0, "2017-07-01", true),
    ("9403", "Other furniture and parts thereof, of wood, metal or plastics", 9.0, 9.0, 18.0, 0.0, "2017-07-01", true),
    // Soaps were part of the November 2017 28%-to-18% cut
    ("3401", "Soap and organic surface-active products and preparations for use as soap", 14.0, 14.0, 28.0, 0.0, "2017-07-01", true),
    ("3401", "Soap and organic surface-active products and preparations for use as soap", 9.0, 9.0, 18.0, 0.0, "2017-11-15", true),
];

/// Services rate rows:
/// (sac, description, cgst, sgst, igst, effective_from, is_active).
const SERVICES_RATES: &[(&str, &str, f64, f64, f64, &str, bool)] = &[
    ("996311", "Room or unit accommodation services provided by hotels with declared tariff above ₹7,500 per night", 9.0, 9.0, 18.0, "2019-10-01", true),
    ("996312", "Room or unit accommodation services provided by hotels with declared tariff between ₹1,000 and ₹2,500 per night", 6.0, 6.0, 12.0, "2019-10-01", true),
    ("996331", "Services provided by restaurants, cafes and similar eating facilities including takeaway and room services", 2.5, 2.5, 5.0, "2017-11-15", true),
    ("996332", "Services provided by air-conditioned restaurants including those serving liquor", 2.5, 2.5, 5.0, "2017-11-15", true),
    ("996411", "Local land transport services of passengers by taxis, radio taxis, auto rickshaws and similar vehicles", 2.5, 2.5, 5.0, "2017-07-01", true),
    ("996412", "Local land transport services of passengers by stage carriage and contract carriage buses", 2.5, 2.5, 5.0, "2017-07-01", true),
    ("997113", "Deposit, credit and other banking services provided to account holders", 9.0, 9.0, 18.0, "2017-07-01", true),
    // Individual life insurance premiums were exempted in the 2025 revision
    ("997132", "Life insurance services including premium collection and policy administration", 9.0, 9.0, 18.0, "2017-07-01", true),
    ("997132", "Life insurance services including premium collection and policy administration", 0.0, 0.0, 0.0, "2025-09-22", true),
    ("998412", "Mobile telecommunication services including voice, SMS and data", 9.0, 9.0, 18.0, "2017-07-01", true),
    ("998422", "Internet access services including broadband and leased line", 9.0, 9.0, 18.0, "2017-07-01", true),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./gst.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("GST Calc Reference Data Loader");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./gst.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 GST Calc Reference Data Loader");
    println!("=================================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing data
    let repo = db.rates();
    let existing = repo.category_count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} categories", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to reload.");
        return Ok(());
    }

    println!();
    println!("Loading reference data...");

    for (category, subcategory, hsn_code, sac_code) in CATEGORIES {
        repo.insert_category(category, subcategory, *hsn_code, *sac_code)
            .await?;
    }
    println!("  {} category entries", CATEGORIES.len());

    for (hsn, description, cgst, sgst, igst, cess, effective, active) in GOODS_RATES {
        repo.insert_goods_rate(&NewGoodsRate {
            hsn_code: (*hsn).to_string(),
            description: Some((*description).to_string()),
            cgst_rate: Some(*cgst),
            sgst_rate: Some(*sgst),
            igst_rate: Some(*igst),
            compensation_cess: *cess,
            effective_from: NaiveDate::parse_from_str(effective, "%Y-%m-%d")?,
            is_active: *active,
        })
        .await?;
    }
    println!("  {} goods rate rows", GOODS_RATES.len());

    for (sac, description, cgst, sgst, igst, effective, active) in SERVICES_RATES {
        repo.insert_services_rate(&NewServicesRate {
            sac_code: (*sac).to_string(),
            description: Some((*description).to_string()),
            cgst_rate: Some(*cgst),
            sgst_rate: Some(*sgst),
            igst_rate: Some(*igst),
            effective_from: NaiveDate::parse_from_str(effective, "%Y-%m-%d")?,
            is_active: *active,
        })
        .await?;
    }
    println!("  {} services rate rows", SERVICES_RATES.len());

    // Verify by running the resolver end-to-end
    println!();
    println!("Verifying resolution...");
    let resolver = RateResolver::new(db.clone());

    let categories = resolver.list_categories().await?;
    println!("  {} categories resolve with current rates", categories.len());
    for category in &categories {
        let scenarios = resolver.list_scenarios(category).await?;
        println!("    {} ({} scenarios)", category, scenarios.len());
    }

    let stats = repo.stats().await?;
    println!();
    println!(
        "  {} HSN codes, {} SAC codes across {} categories",
        stats.goods_count, stats.services_count, stats.categories_count
    );

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
