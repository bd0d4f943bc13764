use crate::models::{ListingType, PropertyType};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

/// Value of a dropdown that offers an `any` wildcard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    /// Wildcard, the clause is skipped
    Any,
    /// Exact match on a known value
    Only(T),
    /// A value outside the known set; exact matching means it matches nothing
    Unknown(String),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::Any
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::Any => true,
            Choice::Only(wanted) => wanted == value,
            Choice::Unknown(_) => false,
        }
    }
}

impl<T: FromStr> Choice<T> {
    /// Parse raw dropdown input; blank and `any` are the wildcard.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "any" {
            return Choice::Any;
        }
        match trimmed.parse::<T>() {
            Ok(value) => Choice::Only(value),
            Err(_) => Choice::Unknown(trimmed.to_string()),
        }
    }
}

/// Typed search criteria, one per submission
///
/// `Default` is the reset state: every clause inactive, so the whole dataset
/// matches. Numeric bounds are signed and wide so that any integer a user
/// types keeps its meaning: `maxPrice = -1` admits nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchCriteria {
    pub property_type: Choice<PropertyType>,
    pub listing_type: Choice<ListingType>,
    pub min_price: Option<i128>,
    pub max_price: Option<i128>,
    pub min_bedrooms: Option<i128>,
    pub max_bedrooms: Option<i128>,
    postcode: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Choice::Only(property_type);
        self
    }

    pub fn with_listing_type(mut self, listing_type: ListingType) -> Self {
        self.listing_type = Choice::Only(listing_type);
        self
    }

    pub fn with_price_range(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_price = min.map(i128::from);
        self.max_price = max.map(i128::from);
        self
    }

    pub fn with_bedroom_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_bedrooms = min.map(i128::from);
        self.max_bedrooms = max.map(i128::from);
        self
    }

    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// Set the postcode prefix. Stored trimmed and upper-cased; blank clears it.
    pub fn with_postcode(mut self, postcode: &str) -> Self {
        self.set_postcode(postcode);
        self
    }

    pub fn set_postcode(&mut self, postcode: &str) {
        let normalized = postcode.trim().to_uppercase();
        self.postcode = if normalized.is_empty() {
            None
        } else {
            Some(normalized)
        };
    }

    /// Normalized postcode prefix, if the clause is active
    pub fn postcode(&self) -> Option<&str> {
        self.postcode.as_deref()
    }

    /// True when no clause is active
    pub fn is_unbounded(&self) -> bool {
        *self == Self::default()
    }
}

/// Raw search form state as the view layer holds it
///
/// Every field is the untyped text of a form widget. Field names follow the
/// camelCase form payload so a submitted form can be deserialized directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchForm {
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub listing_type: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_bedrooms: Option<String>,
    pub max_bedrooms: Option<String>,
    pub postcode: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl SearchForm {
    /// Translate raw form input into typed criteria.
    ///
    /// Malformed numeric or date values leave that bound inactive rather than
    /// failing the search.
    pub fn into_criteria(self) -> SearchCriteria {
        let mut criteria = SearchCriteria {
            property_type: self
                .property_type
                .as_deref()
                .map(Choice::parse)
                .unwrap_or_default(),
            listing_type: self
                .listing_type
                .as_deref()
                .map(Choice::parse)
                .unwrap_or_default(),
            min_price: parse_bound("minPrice", self.min_price.as_deref()),
            max_price: parse_bound("maxPrice", self.max_price.as_deref()),
            min_bedrooms: parse_bound("minBedrooms", self.min_bedrooms.as_deref()),
            max_bedrooms: parse_bound("maxBedrooms", self.max_bedrooms.as_deref()),
            postcode: None,
            date_from: parse_date("dateFrom", self.date_from.as_deref()),
            date_to: parse_date("dateTo", self.date_to.as_deref()),
        };
        if let Some(postcode) = self.postcode.as_deref() {
            criteria.set_postcode(postcode);
        }
        criteria
    }
}

/// Parse an optional numeric bound from its leading integer.
///
/// An optional sign and the digits that follow it are used and the rest of the
/// input is dropped, so `"2.5"` is 2 and `"300k"` is 300. Input with no leading
/// digits is unbounded. Magnitudes beyond `i128` saturate.
pub fn parse_bound(field: &str, raw: Option<&str>) -> Option<i128> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        warn!(field, value = raw, "ignoring non-numeric search bound");
        return None;
    }
    if digit_count < unsigned.len() {
        debug!(field, value = raw, "using leading digits of search bound");
    }
    let magnitude = unsigned[..digit_count].parse::<i128>().unwrap_or(i128::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse an optional date bound from `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(field: &str, raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    warn!(field, value = raw, "ignoring unparsable search date");
    None
}
