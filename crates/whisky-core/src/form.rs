//! Bottle Form State
//!
//! Controlled-form data for adding and editing bottles, and its
//! conversion into the create/update request body.

use std::str::FromStr;

use serde::Serialize;

use crate::flavor::FlavorProfile;
use crate::models::{Bottle, BottleStatus};

/// Form fields as the inputs hold them. Empty strings mean "unset".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BottleFormData {
    pub name: String,
    pub distillery_name: String,
    pub age_statement: Option<i32>,
    pub region: String,
    pub country: String,
    pub size_ml: Option<i32>,
    pub abv: Option<f64>,
    pub flavor_profile: Option<FlavorProfile>,
    pub tasting_notes: String,
    pub rating: Option<u8>,
    pub status: BottleStatus,
    pub purchase_price: Option<f64>,
    pub purchase_date: String,
    pub purchase_location: String,
}

/// Body of `POST /bottles` and `PUT /bottles/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BottlePayload {
    pub name: String,
    pub distillery_name: String,
    pub age_statement: Option<i32>,
    pub region: String,
    pub country: String,
    pub size_ml: Option<i32>,
    pub abv: Option<f64>,
    pub flavor_profile: Option<FlavorProfile>,
    pub tasting_notes: Option<String>,
    pub rating: Option<u8>,
    pub status: BottleStatus,
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<String>,
    pub purchase_location: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl BottleFormData {
    /// Pre-fill for the edit page
    pub fn from_bottle(bottle: &Bottle) -> Self {
        Self {
            name: bottle.name.clone(),
            distillery_name: bottle.distillery_name.clone(),
            age_statement: bottle.age_statement,
            region: bottle.region.clone(),
            country: bottle.country.clone(),
            size_ml: bottle.size_ml,
            abv: bottle.abv,
            flavor_profile: bottle.flavor_profile,
            tasting_notes: bottle.tasting_notes.clone().unwrap_or_default(),
            rating: bottle.rating,
            status: bottle.status,
            purchase_price: bottle.purchase_price,
            purchase_date: bottle.purchase_date.clone().unwrap_or_default(),
            purchase_location: bottle.purchase_location.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> BottlePayload {
        BottlePayload {
            name: self.name.clone(),
            distillery_name: self.distillery_name.clone(),
            age_statement: self.age_statement,
            region: self.region.clone(),
            country: self.country.clone(),
            size_ml: self.size_ml,
            abv: self.abv,
            flavor_profile: self.flavor_profile,
            tasting_notes: non_empty(&self.tasting_notes),
            rating: self.rating,
            status: self.status,
            purchase_price: self.purchase_price,
            purchase_date: non_empty(&self.purchase_date),
            purchase_location: non_empty(&self.purchase_location),
        }
    }

    /// Labels of required fields left blank
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("Name", &self.name),
            ("Distillery", &self.distillery_name),
            ("Country", &self.country),
            ("Region", &self.region),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }
}

/// Lenient number-input parsing: blank or garbage means unset
pub fn parse_optional<T: FromStr>(input: &str) -> Option<T> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Render an optional number back into an input value
pub fn display_optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BottleFormData {
        BottleFormData {
            name: "Talisker 10".to_string(),
            distillery_name: "Talisker".to_string(),
            region: "Islands".to_string(),
            country: "Scotland".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_payload_nulls_empty_text() {
        let payload = filled_form().to_payload();
        assert_eq!(payload.tasting_notes, None);
        assert_eq!(payload.purchase_date, None);
        assert_eq!(payload.purchase_location, None);
        assert_eq!(payload.status, BottleStatus::Sealed);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["tasting_notes"].is_null());
        assert_eq!(json["status"], "sealed");
    }

    #[test]
    fn test_payload_keeps_filled_text() {
        let mut form = filled_form();
        form.purchase_date = "2024-05-01".to_string();
        form.tasting_notes = "Pepper and sea spray".to_string();
        let payload = form.to_payload();
        assert_eq!(payload.purchase_date.as_deref(), Some("2024-05-01"));
        assert_eq!(payload.tasting_notes.as_deref(), Some("Pepper and sea spray"));
    }

    #[test]
    fn test_missing_required() {
        assert!(filled_form().missing_required().is_empty());
        let mut form = filled_form();
        form.region.clear();
        form.name = "   ".to_string();
        assert_eq!(form.missing_required(), vec!["Name", "Region"]);
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(parse_optional::<i32>(""), None);
        assert_eq!(parse_optional::<i32>(" 12 "), Some(12));
        assert_eq!(parse_optional::<i32>("abc"), None);
        assert_eq!(parse_optional::<f64>("46.3"), Some(46.3));
        assert_eq!(display_optional::<i32>(None), "");
        assert_eq!(display_optional(Some(700)), "700");
    }

    #[test]
    fn test_from_bottle_round_trips_into_payload() {
        let json = r#"{
            "id": "b9", "name": "Redbreast 12", "distillery_name": "Midleton",
            "region": "Single Pot Still", "country": "Ireland",
            "tasting_notes": null, "purchase_location": "Dublin",
            "status": "finished", "rating": 4,
            "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let bottle: Bottle = serde_json::from_str(json).unwrap();
        let form = BottleFormData::from_bottle(&bottle);
        assert_eq!(form.tasting_notes, "");
        assert_eq!(form.purchase_location, "Dublin");
        assert_eq!(form.status, BottleStatus::Finished);

        let payload = form.to_payload();
        assert_eq!(payload.tasting_notes, None);
        assert_eq!(payload.purchase_location.as_deref(), Some("Dublin"));
        assert_eq!(payload.rating, Some(4));
    }
}
