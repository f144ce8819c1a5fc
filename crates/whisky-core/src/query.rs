//! List Query Strings
//!
//! Filter and sort parameters for the list endpoints.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::constants::LIST_LIMIT;

/// Characters left as-is in query values (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Combined `field-order` select values with their labels
pub const SORT_OPTIONS: &[(&str, &str)] = &[
    ("created_at-desc", "Newest First"),
    ("created_at-asc", "Oldest First"),
    ("name-asc", "Name A-Z"),
    ("name-desc", "Name Z-A"),
    ("rating-desc", "Highest Rated"),
];

fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parameters for `GET /bottles`
#[derive(Debug, Clone, PartialEq)]
pub struct BottleQuery {
    pub search: String,
    pub region: String,
    pub status: String,
    pub sort: String,
    pub order: String,
    pub limit: u32,
}

impl Default for BottleQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            region: String::new(),
            status: String::new(),
            sort: "created_at".to_string(),
            order: "desc".to_string(),
            limit: LIST_LIMIT,
        }
    }
}

impl BottleQuery {
    /// Current sort as a `field-order` select value
    pub fn sort_key(&self) -> String {
        format!("{}-{}", self.sort, self.order)
    }

    /// Apply a `field-order` select value. Values without an order are ignored.
    pub fn set_sort_key(&mut self, key: &str) {
        if let Some((sort, order)) = key.rsplit_once('-') {
            if !sort.is_empty() && !order.is_empty() {
                self.sort = sort.to_string();
                self.order = order.to_string();
            }
        }
    }

    pub fn to_query_string(&self) -> String {
        let limit = self.limit.to_string();
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.as_str()));
        }
        if !self.region.is_empty() {
            pairs.push(("region", self.region.as_str()));
        }
        if !self.status.is_empty() {
            pairs.push(("status", self.status.as_str()));
        }
        pairs.push(("sort", self.sort.as_str()));
        pairs.push(("order", self.order.as_str()));
        pairs.push(("limit", limit.as_str()));
        encode_pairs(&pairs)
    }
}

/// Parameters for `GET /distilleries`
#[derive(Debug, Clone, PartialEq)]
pub struct DistilleryQuery {
    pub search: String,
    pub limit: u32,
}

impl Default for DistilleryQuery {
    fn default() -> Self {
        Self { search: String::new(), limit: LIST_LIMIT }
    }
}

impl DistilleryQuery {
    pub fn to_query_string(&self) -> String {
        let limit = self.limit.to_string();
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.as_str()));
        }
        pairs.push(("limit", limit.as_str()));
        encode_pairs(&pairs)
    }
}

/// Percent-encode a single path segment (bottle ids, slugs)
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, QUERY_VALUE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_equality_tracks_every_filter() {
        let requested = BottleQuery::default();

        let mut typed = requested.clone();
        typed.search = "lag".to_string();
        assert_ne!(typed, requested);

        let mut resorted = requested.clone();
        resorted.set_sort_key("name-asc");
        assert_ne!(resorted, requested);

        let mut filtered = requested.clone();
        filtered.status = "opened".to_string();
        assert_ne!(filtered, requested);

        assert_eq!(requested.clone(), BottleQuery::default());
    }

    #[test]
    fn test_distillery_query_equality_tracks_search() {
        let requested = DistilleryQuery { search: "ard".to_string(), ..Default::default() };
        let latest = DistilleryQuery { search: "ardb".to_string(), ..Default::default() };
        assert_ne!(requested, latest);
        assert_eq!(requested.clone(), requested);
    }

    #[test]
    fn test_default_bottle_query() {
        assert_eq!(
            BottleQuery::default().to_query_string(),
            "sort=created_at&order=desc&limit=100"
        );
    }

    #[test]
    fn test_filters_are_encoded() {
        let query = BottleQuery {
            search: "old pulteney & co".to_string(),
            region: "Other US".to_string(),
            status: "opened".to_string(),
            ..Default::default()
        };
        assert_eq!(
            query.to_query_string(),
            "search=old%20pulteney%20%26%20co&region=Other%20US&status=opened&sort=created_at&order=desc&limit=100"
        );
    }

    #[test]
    fn test_sort_key_splits_on_last_dash() {
        let mut query = BottleQuery::default();
        assert_eq!(query.sort_key(), "created_at-desc");
        query.set_sort_key("rating-desc");
        assert_eq!((query.sort.as_str(), query.order.as_str()), ("rating", "desc"));
        query.set_sort_key("name");
        assert_eq!(query.sort_key(), "rating-desc");
        for (key, _) in SORT_OPTIONS {
            query.set_sort_key(key);
            assert_eq!(query.sort_key(), *key);
        }
    }

    #[test]
    fn test_distillery_query() {
        assert_eq!(DistilleryQuery::default().to_query_string(), "limit=100");
        let query = DistilleryQuery { search: "glen".to_string(), ..Default::default() };
        assert_eq!(query.to_query_string(), "search=glen&limit=100");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("the-macallan"), "the-macallan");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
    }
}
