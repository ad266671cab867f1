//! Fixed vocabulary shared by the local extractor, the remote prompt and the
//! validator.

/// Addis Ababa neighborhoods, in match priority order
pub const ADDIS_AREAS: &[&str] = &[
    "Bole",
    "CMC",
    "Kazanchis",
    "Old Airport",
    "Meskel Square",
    "Merkato",
    "Piassa",
    "Addis Ketema",
    "Kirkos",
    "Lideta",
];

/// Keyword found in a query → canonical feature label.
/// Order decides the order labels appear in the extracted feature list.
pub const FEATURE_KEYWORDS: &[(&str, &str)] = &[
    ("furnished", "Furnished"),
    ("parking", "Parking"),
    ("garden", "Garden"),
    ("wifi", "Internet"),
    ("internet", "Internet"),
    ("security", "Security"),
    ("gym", "Gym"),
    ("pool", "Swimming Pool"),
    ("swimming pool", "Swimming Pool"),
    ("balcony", "Balcony"),
    ("elevator", "Elevator"),
    ("conference", "Conference Room"),
    ("loading", "Loading Dock"),
    ("reception", "Reception Area"),
    ("air conditioning", "Air Conditioning"),
    ("ac", "Air Conditioning"),
];

pub const BUSINESS_KEYWORDS: &[&str] = &["office", "business", "commercial"];
pub const RESIDENTIAL_KEYWORDS: &[&str] = &["apartment", "house", "residential", "studio"];

pub const RESIDENTIAL_FEATURES: &[&str] = &[
    "Parking",
    "Balcony",
    "Garden",
    "Security",
    "Furnished",
    "Pet Friendly",
    "Internet",
    "Air Conditioning",
    "Heating",
    "Gym",
    "Swimming Pool",
    "Elevator",
];

pub const BUSINESS_FEATURES: &[&str] = &[
    "Reception Area",
    "Conference Room",
    "Parking",
    "Security",
    "Internet",
    "Air Conditioning",
    "Elevator",
    "Kitchen",
    "Storage",
    "Loading Dock",
];

/// Upper bound (inclusive) for monthly price in ETB
pub const PRICE_CEILING: u64 = 1_000_000;
pub const BEDROOMS_MAX: u64 = 10;
pub const SQUARE_METERS_MAX: u64 = 2_000;

/// Confidence reported by rule-based extraction
pub const LOCAL_CONFIDENCE: f64 = 0.7;

/// Confidence assumed when a candidate carries none
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// `true` when `value` lies in `(0, ceiling]`
pub fn within(value: u64, ceiling: u64) -> bool {
    value > 0 && value <= ceiling
}
