use crate::error::CriteriaError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a listing
///
/// The id is the only key used for lookup and favourites membership; two
/// records with the same id are the same property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub u64);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PropertyId {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(PropertyId)
            .map_err(|_| CriteriaError::InvalidId(s.to_string()))
    }
}

/// Kind of building
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Flat,
}

impl FromStr for PropertyType {
    type Err = CriteriaError;

    /// Exact, case-sensitive match on the serialized name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "house" => Ok(PropertyType::House),
            "flat" => Ok(PropertyType::Flat),
            other => Err(CriteriaError::UnknownChoice {
                field: "type",
                value: other.to_string(),
            }),
        }
    }
}

/// Whether the property is offered for sale or to let
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
        }
    }
}

impl FromStr for ListingType {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(ListingType::Sale),
            "rent" => Ok(ListingType::Rent),
            other => Err(CriteriaError::UnknownChoice {
                field: "listingType",
                value: other.to_string(),
            }),
        }
    }
}

/// Map coordinates for a property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Core property data model
///
/// Field names follow the camelCase schema of `properties.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: PropertyId,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub listing_type: ListingType,
    pub bedrooms: u32,
    pub price: u64,
    pub postcode: String,
    pub date_added: NaiveDate,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub floor_plan: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl PropertyRecord {
    /// First image, used as the card thumbnail
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_listing() {
        let json = r#"{
            "id": 7,
            "type": "flat",
            "listingType": "rent",
            "bedrooms": 2,
            "price": 1450,
            "postcode": "E14 9GE",
            "dateAdded": "2024-03-02",
            "address": "Canary Wharf, London",
            "longDescription": "Riverside views.",
            "images": ["images/p7a.jpg", "images/p7b.jpg"],
            "floorPlan": "images/p7plan.jpg",
            "location": { "lat": 51.505, "lng": -0.0235 }
        }"#;

        let record: PropertyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, PropertyId(7));
        assert_eq!(record.property_type, PropertyType::Flat);
        assert_eq!(record.listing_type, ListingType::Rent);
        assert_eq!(record.date_added, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(record.description, "");
        assert_eq!(record.thumbnail(), Some("images/p7a.jpg"));
    }

    #[test]
    fn choice_names_are_case_sensitive() {
        assert_eq!("house".parse::<PropertyType>().unwrap(), PropertyType::House);
        assert!("House".parse::<PropertyType>().is_err());
        assert!("SALE".parse::<ListingType>().is_err());
    }

    #[test]
    fn parses_route_ids() {
        assert_eq!(" 12 ".parse::<PropertyId>().unwrap(), PropertyId(12));
        assert!("abc".parse::<PropertyId>().is_err());
        assert_eq!(PropertyId(3).to_string(), "3");
    }
}
