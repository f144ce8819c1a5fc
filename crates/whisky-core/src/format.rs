//! Display Formatting
//!
//! Small string helpers shared by the pages.

use crate::constants::MAX_RATING;
use crate::models::{Bottle, ReferenceWhisky};

/// Filled stars only, for compact cards
pub fn stars(rating: u8) -> String {
    "★".repeat(rating.min(MAX_RATING) as usize)
}

/// Filled stars padded with hollow ones up to five
pub fn stars_out_of_five(rating: u8) -> String {
    let filled = rating.min(MAX_RATING);
    format!("{}{}", stars(filled), "☆".repeat((MAX_RATING - filled) as usize))
}

pub fn age_label(age_statement: Option<i32>) -> String {
    match age_statement {
        Some(age) => format!("{} years", age),
        None => "NAS".to_string(),
    }
}

/// Similarity score as a whole percentage
pub fn match_percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// "distillery • region • status[ • ★★]"
pub fn bottle_subtitle(bottle: &Bottle) -> String {
    let mut subtitle = format!(
        "{} • {} • {}",
        bottle.distillery_name,
        bottle.region,
        bottle.status.as_str()
    );
    if let Some(rating) = bottle.rating.filter(|r| *r > 0) {
        subtitle.push_str(" • ");
        subtitle.push_str(&stars(rating));
    }
    subtitle
}

/// "distillery • region", distillery omitted when unlinked
pub fn whisky_subtitle(whisky: &ReferenceWhisky) -> String {
    match &whisky.distillery {
        Some(distillery) => format!("{} • {}", distillery.name, whisky.region),
        None => whisky.region.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BottleStatus, DistillerySummary};
    use crate::FlavorProfile;

    fn bottle(rating: Option<u8>) -> Bottle {
        Bottle {
            id: "b1".to_string(),
            name: "Springbank 10".to_string(),
            distillery_name: "Springbank".to_string(),
            distillery: None,
            age_statement: Some(10),
            region: "Campbeltown".to_string(),
            country: "Scotland".to_string(),
            size_ml: None,
            abv: None,
            flavor_profile: None,
            tasting_notes: None,
            rating,
            status: BottleStatus::Opened,
            purchase_price: None,
            purchase_date: None,
            purchase_location: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(3), "★★★");
        assert_eq!(stars_out_of_five(2), "★★☆☆☆");
        assert_eq!(stars_out_of_five(7), "★★★★★");
    }

    #[test]
    fn test_age_label() {
        assert_eq!(age_label(Some(18)), "18 years");
        assert_eq!(age_label(None), "NAS");
    }

    #[test]
    fn test_match_percent_rounds() {
        assert_eq!(match_percent(0.876), 88);
        assert_eq!(match_percent(0.5), 50);
        assert_eq!(match_percent(1.0), 100);
    }

    #[test]
    fn test_bottle_subtitle() {
        assert_eq!(bottle_subtitle(&bottle(None)), "Springbank • Campbeltown • opened");
        assert_eq!(
            bottle_subtitle(&bottle(Some(4))),
            "Springbank • Campbeltown • opened • ★★★★"
        );
    }

    #[test]
    fn test_whisky_subtitle() {
        let mut whisky = ReferenceWhisky {
            id: "r1".to_string(),
            slug: "hazelburn-10".to_string(),
            name: "Hazelburn 10".to_string(),
            distillery: None,
            age_statement: Some(10),
            region: "Campbeltown".to_string(),
            country: "Scotland".to_string(),
            flavor_profile: FlavorProfile::default(),
            description: None,
        };
        assert_eq!(whisky_subtitle(&whisky), "Campbeltown");
        whisky.distillery = Some(DistillerySummary {
            id: "d1".to_string(),
            slug: "springbank".to_string(),
            name: "Springbank".to_string(),
            region: "Campbeltown".to_string(),
            country: "Scotland".to_string(),
        });
        assert_eq!(whisky_subtitle(&whisky), "Springbank • Campbeltown");
    }
}
