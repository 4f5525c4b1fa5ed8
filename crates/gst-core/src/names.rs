//! # Scenario Name Cleanup
//!
//! Converts technical subcategory names from the rate tables into everyday
//! language for display.
//!
//! ## Two-Step Lookup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Passenger Cars - Petrol (Engine ≤1200cc)"                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Step 1: exact match against FRIENDLY_NAMES table                      │
//! │       │                                                                 │
//! │       ├── hit  → "Small Petrol Car (up to 1200cc)"                     │
//! │       │                                                                 │
//! │       └── miss → Step 2: generic cleanup                               │
//! │                  strip " - reduced to " / " - maintained at "          │
//! │                  " (exempt)" → " (No GST)"                             │
//! │                  drop trailing "services"/"Products"/"Items"/...       │
//! │                                                                         │
//! │  The table is pure data: a static slice, not executable code.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Lookup Tables
// =============================================================================

/// Direct replacements for known technical subcategory names.
static FRIENDLY_NAMES: &[(&str, &str)] = &[
    // Vehicle scenarios
    ("Passenger Cars - Petrol (Engine ≤1200cc)", "Small Petrol Car (up to 1200cc)"),
    ("Passenger Cars - Petrol (Engine >1200cc)", "Large Petrol Car (above 1200cc)"),
    ("Passenger Cars - Diesel (Engine ≤1500cc)", "Small Diesel Car (up to 1500cc)"),
    ("Passenger Cars - Diesel (Engine >1500cc)", "Large Diesel Car (above 1500cc)"),
    ("SUVs (Length >4m, Engine >1500cc, Ground clearance ≥170mm)", "SUV or Large Vehicle"),
    ("Electric Vehicles (All types)", "Electric Car"),
    ("Motorcycles (Engine ≤150cc)", "Small Motorcycle/Scooter"),
    ("Motorcycles (Engine >150cc ≤350cc)", "Medium Motorcycle"),
    ("Motorcycles (Engine >350cc)", "Large Motorcycle"),
    // Hotel scenarios
    ("Luxury Hotels (Above ₹7,500/night)", "Luxury Hotel Stay"),
    ("Premium Hotels (₹2,500-7,500/night)", "Premium Hotel Stay"),
    ("Standard Hotels (₹1,000-2,500/night)", "Standard Hotel Stay"),
    // Restaurant scenarios
    ("Non-AC Restaurants", "Regular Restaurant"),
    ("AC Restaurants", "Air-Conditioned Restaurant"),
    ("Small Restaurants, Dhaba, Mess", "Small Restaurant/Dhaba"),
    // Property scenarios
    ("Renting Residential Property", "House/Apartment Rent"),
    ("Renting Commercial Property", "Office/Shop Rent"),
    ("Under-construction Property Sale", "New Property Purchase"),
    ("Real Estate Brokerage", "Property Agent Service"),
    // Electronics
    ("Air Conditioning Machines", "Air Conditioner"),
    ("Computers, Laptops", "Computer/Laptop"),
    ("Telephone Sets, Smartphones", "Mobile Phone/Smartphone"),
    // Food items
    ("Soft Drinks, Fruit Juices", "Soft Drinks & Juices"),
    ("Food Preparations", "Processed Foods"),
    // Textiles
    ("T-shirts, Singlets, Tank Tops", "T-shirts & Casual Tops"),
    ("Mens Suits, Jackets, Trousers", "Men's Formal Wear"),
    ("Womens Suits, Jackets, Dresses", "Women's Formal Wear"),
    ("Mens Shirts", "Men's Shirts"),
    ("Womens Blouses, Shirts", "Women's Shirts & Blouses"),
    // Footwear
    ("Sports Footwear", "Sports Shoes"),
    ("Leather Footwear", "Leather Shoes"),
    ("Textile Footwear", "Canvas/Fabric Shoes"),
    // Home items
    ("Living Room Furniture", "Sofa & Living Room"),
    ("Bedroom Furniture", "Bed & Mattress"),
    ("Kitchen Plastic", "Plastic Kitchen Items"),
    ("Storage Items", "Storage Containers"),
    ("Ceramic Dishes", "Plates & Bowls"),
    ("Knives & Cutlery", "Kitchen Knives"),
    ("Spoons & Forks", "Spoons & Forks"),
    // Services
    ("Basic Banking", "Bank Account Services"),
    ("Credit Card Services", "Credit Card"),
    ("Investment Services", "Investment & Mutual Funds"),
    ("Life Insurance", "Life Insurance Policy"),
    ("General Insurance", "Car/Health Insurance"),
    ("Mobile Services", "Mobile Phone Bill"),
    ("Internet Services", "Internet Connection"),
    ("TV & Entertainment", "Cable/DTH TV"),
    // Transportation
    ("Taxi, Cab, Auto Rickshaw", "Taxi/Auto/Cab Ride"),
    ("Bus Transportation", "Bus Travel"),
    // Other common items
    ("Tissue Paper", "Toilet Paper & Tissues"),
    ("Paper Plates", "Paper Plates & Cups"),
    ("Soaps & Detergents", "Soap & Cleaning"),
    ("House Paints", "Paint for Home"),
    ("Car Tyres", "Car Tyres"),
    ("String Instruments", "Guitar/Violin"),
    ("Keyboards", "Piano/Keyboard"),
];

/// Fallback cleanup applied to names with no direct replacement.
/// Order matters: qualifier suffixes are stripped before category suffixes.
static CLEANUP_RULES: &[(&str, &str)] = &[
    (" - reduced to ", " "),
    (" - maintained at ", " "),
    (" (exempt)", " (No GST)"),
    (" services", ""),
    (" Products", ""),
    (" Items", ""),
    (" Articles", ""),
];

// =============================================================================
// Lookup
// =============================================================================

/// Converts a technical subcategory name to a user-friendly display name.
///
/// Exact matches use the [`FRIENDLY_NAMES`] table; everything else goes
/// through the generic [`CLEANUP_RULES`] pass.
///
/// ## Example
/// ```rust
/// use gst_core::names::friendly_name;
///
/// assert_eq!(friendly_name("Non-AC Restaurants"), "Regular Restaurant");
/// assert_eq!(friendly_name("Courier services"), "Courier");
/// ```
pub fn friendly_name(technical_name: &str) -> String {
    if let Some((_, friendly)) = FRIENDLY_NAMES
        .iter()
        .find(|(technical, _)| *technical == technical_name)
    {
        return (*friendly).to_string();
    }

    let mut cleaned = technical_name.to_string();
    for (from, to) in CLEANUP_RULES {
        cleaned = cleaned.replace(from, to);
    }

    cleaned.trim().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_table_hit() {
        assert_eq!(
            friendly_name("Passenger Cars - Petrol (Engine ≤1200cc)"),
            "Small Petrol Car (up to 1200cc)"
        );
        assert_eq!(friendly_name("AC Restaurants"), "Air-Conditioned Restaurant");
        assert_eq!(friendly_name("Life Insurance"), "Life Insurance Policy");
    }

    #[test]
    fn test_fallback_strips_category_suffixes() {
        assert_eq!(friendly_name("Courier services"), "Courier");
        assert_eq!(friendly_name("Rubber Products"), "Rubber");
        assert_eq!(friendly_name("Glassware Items"), "Glassware");
        assert_eq!(friendly_name("Leather Articles"), "Leather");
    }

    #[test]
    fn test_fallback_maps_exempt_marker() {
        assert_eq!(friendly_name("Fresh Vegetables (exempt)"), "Fresh Vegetables (No GST)");
    }

    #[test]
    fn test_fallback_strips_rate_qualifiers() {
        assert_eq!(friendly_name("Cement - reduced to 18%"), "Cement 18%");
        assert_eq!(friendly_name("Tobacco - maintained at 28%"), "Tobacco 28%");
    }

    #[test]
    fn test_unknown_name_passes_through() {
        assert_eq!(friendly_name("Solar Panels"), "Solar Panels");
    }

    #[test]
    fn test_table_beats_fallback() {
        // "Mobile Services" is in the table; the " services" strip rule
        // (lowercase s) must not fire instead
        assert_eq!(friendly_name("Mobile Services"), "Mobile Phone Bill");
    }
}
