use crate::models::PropertyRecord;
use crate::search::types::SearchCriteria;

impl SearchCriteria {
    /// True when the record satisfies every active clause.
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        self.property_type.admits(&record.property_type)
            && self.listing_type.admits(&record.listing_type)
            && self.min_price.map_or(true, |min| i128::from(record.price) >= min)
            && self.max_price.map_or(true, |max| i128::from(record.price) <= max)
            && self.min_bedrooms.map_or(true, |min| i128::from(record.bedrooms) >= min)
            && self.max_bedrooms.map_or(true, |max| i128::from(record.bedrooms) <= max)
            && self.postcode().map_or(true, |prefix| {
                record.postcode.to_uppercase().starts_with(prefix)
            })
            && self.date_from.map_or(true, |from| record.date_added >= from)
            && self.date_to.map_or(true, |to| record.date_added <= to)
    }
}

/// Keep the records matching `criteria`, in their original order.
///
/// Accepts any iterator of record references, so the output of one search can
/// be filtered again.
pub fn filter<'a, I>(records: I, criteria: &SearchCriteria) -> Vec<&'a PropertyRecord>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}
