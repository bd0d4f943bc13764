//! A browsing session: the listing store plus the favourites the user has
//! collected while navigating between search and detail views.

use crate::favourites::{DropEvent, DropOutcome, FavouritesSet};
use crate::format::count_label;
use crate::listings::ListingStore;
use crate::models::{PropertyId, PropertyRecord};
use crate::search::SearchCriteria;
use tracing::{debug, info};

/// A search match, flagged when it is already a favourite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultEntry<'a> {
    pub record: &'a PropertyRecord,
    pub is_favourite: bool,
}

/// Matches for one submission, in store order
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults<'a> {
    pub entries: Vec<ResultEntry<'a>>,
}

impl<'a> SearchResults<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &'a PropertyRecord> + '_ {
        self.entries.iter().map(|entry| entry.record)
    }

    /// Heading shown above the result cards
    pub fn summary(&self) -> String {
        if self.entries.is_empty() {
            "No properties match your search criteria. Try adjusting your filters.".to_string()
        } else {
            format!("{} found", count_label(self.entries.len()))
        }
    }
}

/// Detail view of a single listing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDetail<'a> {
    pub record: &'a PropertyRecord,
    pub is_favourite: bool,
}

/// Owns the read-only listings and the mutable favourites for one user
#[derive(Debug, Clone)]
pub struct Session {
    store: ListingStore,
    favourites: FavouritesSet,
    criteria: SearchCriteria,
}

impl Session {
    /// Start with no favourites and the full dataset showing.
    pub fn new(store: ListingStore) -> Self {
        Self {
            store,
            favourites: FavouritesSet::new(),
            criteria: SearchCriteria::default(),
        }
    }

    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    pub fn favourites(&self) -> &FavouritesSet {
        &self.favourites
    }

    /// The most recently submitted criteria
    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Record a submission; the next [`results`](Self::results) reflect it.
    pub fn submit(&mut self, criteria: SearchCriteria) {
        debug!(?criteria, "search submitted");
        self.criteria = criteria;
    }

    /// Matches for the current criteria, marked against the favourites
    pub fn results(&self) -> SearchResults<'_> {
        let entries: Vec<_> = self
            .store
            .search(&self.criteria)
            .into_iter()
            .map(|record| ResultEntry {
                record,
                is_favourite: self.favourites.contains(record.id),
            })
            .collect();
        info!(matches = entries.len(), total = self.store.len(), "search complete");
        SearchResults { entries }
    }

    /// Submit `criteria` and return the matches.
    pub fn search(&mut self, criteria: SearchCriteria) -> SearchResults<'_> {
        self.submit(criteria);
        self.results()
    }

    /// Look up a property from a route segment; unparsable or unknown ids are
    /// `None`.
    pub fn property_detail(&self, raw_id: &str) -> Option<PropertyDetail<'_>> {
        let id = raw_id.parse::<PropertyId>().ok()?;
        let record = self.store.find_by_id(id)?;
        Some(PropertyDetail {
            record,
            is_favourite: self.favourites.contains(id),
        })
    }

    pub fn is_favourite(&self, id: PropertyId) -> bool {
        self.favourites.contains(id)
    }

    /// Add a listing by id (the heart button). Unknown ids change nothing.
    pub fn add_favourite(&mut self, id: PropertyId) -> bool {
        match self.store.find_by_id(id) {
            Some(record) => self.favourites.add(record.clone()),
            None => {
                debug!(%id, "cannot favourite unknown property");
                false
            }
        }
    }

    pub fn remove_favourite(&mut self, id: PropertyId) -> bool {
        self.favourites.remove(id).is_some()
    }

    pub fn clear_favourites(&mut self) {
        self.favourites.clear();
    }

    pub fn handle_drop(&mut self, event: DropEvent) -> DropOutcome {
        self.favourites.apply_drop(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favourites::{DragItem, DropZone};
    use crate::listings::SampleSource;
    use crate::models::PropertyType;

    fn session() -> Session {
        let records = SampleSource::new().listings().unwrap();
        Session::new(ListingStore::new(records).unwrap())
    }

    #[test]
    fn starts_with_full_dataset_and_no_favourites() {
        let session = session();
        assert_eq!(session.results().len(), session.store().len());
        assert!(session.favourites().is_empty());
        assert!(session.criteria().is_unbounded());
    }

    #[test]
    fn results_mark_favourites() {
        let mut session = session();
        assert!(session.add_favourite(PropertyId(3)));

        let results = session.search(SearchCriteria::new().with_type(PropertyType::House));
        let flagged: Vec<_> = results
            .entries
            .iter()
            .filter(|entry| entry.is_favourite)
            .map(|entry| entry.record.id)
            .collect();
        assert_eq!(flagged, vec![PropertyId(3)]);
    }

    #[test]
    fn favourites_survive_new_searches() {
        let mut session = session();
        session.add_favourite(PropertyId(4));
        session.search(SearchCriteria::new().with_postcode("SW19"));
        session.search(SearchCriteria::new());
        assert!(session.is_favourite(PropertyId(4)));
    }

    #[test]
    fn summary_reflects_match_count() {
        let mut session = session();
        assert_eq!(
            session.search(SearchCriteria::new().with_postcode("SW19")).summary(),
            "1 property found"
        );
        assert_eq!(
            session.search(SearchCriteria::new().with_postcode("BR")).summary(),
            "4 properties found"
        );
        assert!(session
            .search(SearchCriteria::new().with_postcode("ZZ9"))
            .summary()
            .starts_with("No properties match"));
    }

    #[test]
    fn detail_lookup_handles_bad_routes() {
        let mut session = session();
        session.add_favourite(PropertyId(2));

        let detail = session.property_detail("2").unwrap();
        assert_eq!(detail.record.id, PropertyId(2));
        assert!(detail.is_favourite);

        assert!(session.property_detail("99").is_none());
        assert!(session.property_detail("not-a-number").is_none());
    }

    #[test]
    fn unknown_id_cannot_be_favourited() {
        let mut session = session();
        assert!(!session.add_favourite(PropertyId(404)));
        assert!(session.favourites().is_empty());
    }

    #[test]
    fn drag_and_click_share_one_set() {
        let mut session = session();
        let card = session.store().find_by_id(PropertyId(5)).unwrap().clone();

        session.handle_drop(DropEvent::new(DragItem::Property(card), DropZone::Favourites));
        assert!(!session.add_favourite(PropertyId(5)));

        assert!(session.remove_favourite(PropertyId(5)));
        assert_eq!(
            session.handle_drop(DropEvent::new(DragItem::Favourite(PropertyId(5)), DropZone::RemoveZone)),
            DropOutcome::NotFavourite(PropertyId(5))
        );

        session.add_favourite(PropertyId(1));
        session.clear_favourites();
        assert!(session.favourites().is_empty());
    }
}
