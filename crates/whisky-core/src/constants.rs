//! Reference data for form selects and filters.

pub const COUNTRIES: &[&str] = &[
    "Scotland", "Ireland", "USA", "Japan", "Canada", "India", "Taiwan", "Australia", "Other",
];

pub const REGIONS: &[&str] = &[
    "Speyside",
    "Highland",
    "Lowland",
    "Islay",
    "Campbeltown",
    "Islands",
    "Single Pot Still",
    "Single Malt",
    "Blended",
    "Kentucky",
    "Tennessee",
    "Other US",
    "Japanese",
    "Canadian",
    "Indian",
    "Taiwanese",
    "Australian",
    "Other",
];

/// Subset offered by the collection's region filter
pub const FILTER_REGIONS: &[&str] = &[
    "Speyside",
    "Highland",
    "Lowland",
    "Islay",
    "Campbeltown",
    "Islands",
    "Kentucky",
    "Tennessee",
];

/// Page size for every list the UI fetches
pub const LIST_LIMIT: u32 = 100;

/// How many similar whiskies the bottle page asks for
pub const SIMILAR_LIMIT: u32 = 5;

pub const MAX_RATING: u8 = 5;
