//! Drag-and-drop adapter.
//!
//! A drop is translated into exactly one call to [`FavouritesSet::add`] or
//! [`FavouritesSet::remove`]; there is no other mutation path.

use crate::favourites::FavouritesSet;
use crate::models::{PropertyId, PropertyRecord};
use tracing::debug;

/// What is being dragged
#[derive(Debug, Clone, PartialEq)]
pub enum DragItem {
    /// A result card
    Property(PropertyRecord),
    /// An entry of the favourites list
    Favourite(PropertyId),
}

/// Where it was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropZone {
    /// The favourites drop area
    Favourites,
    /// The bin below the favourites list
    RemoveZone,
    /// The search form and results area
    SearchArea,
}

impl DropZone {
    /// Whether this zone takes drops of `item`'s kind
    pub fn accepts(&self, item: &DragItem) -> bool {
        match (self, item) {
            (DropZone::Favourites, DragItem::Property(_)) => true,
            (DropZone::RemoveZone | DropZone::SearchArea, DragItem::Favourite(_)) => true,
            _ => false,
        }
    }
}

/// A completed drag gesture
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    pub item: DragItem,
    pub zone: DropZone,
}

impl DropEvent {
    pub fn new(item: DragItem, zone: DropZone) -> Self {
        Self { item, zone }
    }
}

/// Result of applying a drop to the favourites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Added(PropertyId),
    AlreadyFavourite(PropertyId),
    Removed(PropertyId),
    NotFavourite(PropertyId),
    /// The zone does not accept this kind of item
    Ignored,
}

pub(crate) fn apply(favourites: &mut FavouritesSet, event: DropEvent) -> DropOutcome {
    if !event.zone.accepts(&event.item) {
        debug!(zone = ?event.zone, "drop ignored by zone");
        return DropOutcome::Ignored;
    }
    match event.item {
        DragItem::Property(record) => {
            let id = record.id;
            if favourites.add(record) {
                DropOutcome::Added(id)
            } else {
                DropOutcome::AlreadyFavourite(id)
            }
        }
        DragItem::Favourite(id) => match favourites.remove(id) {
            Some(_) => DropOutcome::Removed(id),
            None => DropOutcome::NotFavourite(id),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingType, PropertyType};
    use chrono::NaiveDate;

    fn record(id: u64) -> PropertyRecord {
        PropertyRecord {
            id: PropertyId(id),
            property_type: PropertyType::House,
            listing_type: ListingType::Sale,
            bedrooms: 3,
            price: 450_000,
            postcode: "BR6".to_string(),
            date_added: NaiveDate::from_ymd_opt(2024, 4, 9).unwrap(),
            address: String::new(),
            description: String::new(),
            long_description: String::new(),
            images: vec![],
            floor_plan: None,
            location: None,
        }
    }

    #[test]
    fn dropping_a_card_on_favourites_adds_once() {
        let mut favourites = FavouritesSet::new();
        let drop = DropEvent::new(DragItem::Property(record(1)), DropZone::Favourites);

        assert_eq!(favourites.apply_drop(drop.clone()), DropOutcome::Added(PropertyId(1)));
        assert_eq!(
            favourites.apply_drop(drop),
            DropOutcome::AlreadyFavourite(PropertyId(1))
        );
        assert_eq!(favourites.len(), 1);
    }

    #[test]
    fn dragging_a_favourite_out_removes_it() {
        for zone in [DropZone::RemoveZone, DropZone::SearchArea] {
            let mut favourites = FavouritesSet::new();
            favourites.add(record(1));
            favourites.add(record(2));

            let outcome = favourites.apply_drop(DropEvent::new(DragItem::Favourite(PropertyId(1)), zone));
            assert_eq!(outcome, DropOutcome::Removed(PropertyId(1)));
            assert_eq!(favourites.ids(), vec![PropertyId(2)]);
        }
    }

    #[test]
    fn drop_matches_click_semantics() {
        let mut clicked = FavouritesSet::new();
        clicked.add(record(1));
        clicked.add(record(2));
        clicked.remove(PropertyId(1));

        let mut dragged = FavouritesSet::new();
        dragged.apply_drop(DropEvent::new(DragItem::Property(record(1)), DropZone::Favourites));
        dragged.apply_drop(DropEvent::new(DragItem::Property(record(2)), DropZone::Favourites));
        dragged.apply_drop(DropEvent::new(DragItem::Favourite(PropertyId(1)), DropZone::RemoveZone));

        assert_eq!(clicked, dragged);
    }

    #[test]
    fn mismatched_drops_are_ignored() {
        let mut favourites = FavouritesSet::new();
        favourites.add(record(1));

        let card_in_bin = DropEvent::new(DragItem::Property(record(2)), DropZone::RemoveZone);
        let favourite_on_itself = DropEvent::new(DragItem::Favourite(PropertyId(1)), DropZone::Favourites);

        assert_eq!(favourites.apply_drop(card_in_bin), DropOutcome::Ignored);
        assert_eq!(favourites.apply_drop(favourite_on_itself), DropOutcome::Ignored);
        assert_eq!(favourites.ids(), vec![PropertyId(1)]);
    }

    #[test]
    fn removing_a_missing_favourite_reports_it() {
        let mut favourites = FavouritesSet::new();
        let outcome = favourites.apply_drop(DropEvent::new(DragItem::Favourite(PropertyId(7)), DropZone::SearchArea));
        assert_eq!(outcome, DropOutcome::NotFavourite(PropertyId(7)));
    }
}
