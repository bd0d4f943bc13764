//! Display helpers for listing cards, the detail page and result counts.

use crate::models::PropertyType;
use chrono::NaiveDate;

/// `£` followed by the amount with comma thousands separators.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('£');
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Short card date, e.g. `5 Jan 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Numeric date for the detail table, e.g. `05/01/2024`.
pub fn format_date_numeric(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn type_label(property_type: PropertyType) -> &'static str {
    match property_type {
        PropertyType::House => "House",
        PropertyType::Flat => "Flat",
    }
}

pub fn bedroom_label(bedrooms: u32) -> String {
    if bedrooms == 1 {
        "1 Bedroom".to_string()
    } else {
        format!("{bedrooms} Bedrooms")
    }
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 property".to_string()
    } else {
        format!("{count} properties")
    }
}
