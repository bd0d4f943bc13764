//! Property search over a preloaded listing set.
//!
//! The crate provides:
//!
//! - [`listings::ListingStore`]: the read-only dataset with id lookup
//! - [`search`]: typed criteria, lenient form translation and the filter
//! - [`favourites::FavouritesSet`]: the user's saved listings, with a
//!   drag-and-drop adapter over the same add/remove calls
//! - [`session::Session`]: one user's store and favourites together
//!
//! # Example
//!
//! ```
//! use property_search::listings::{ListingStore, SampleSource};
//! use property_search::models::{PropertyId, PropertyType};
//! use property_search::search::SearchCriteria;
//! use property_search::session::Session;
//!
//! let records = SampleSource::new().listings().unwrap();
//! let mut session = Session::new(ListingStore::new(records).unwrap());
//!
//! session.add_favourite(PropertyId(1));
//! let houses = session.search(SearchCriteria::new().with_type(PropertyType::House));
//! assert!(houses.records().all(|r| r.property_type == PropertyType::House));
//! ```

pub mod error;
pub mod favourites;
pub mod format;
pub mod listings;
pub mod models;
pub mod search;
pub mod session;

pub use error::{CriteriaError, ListingError};
pub use favourites::FavouritesSet;
pub use listings::ListingStore;
pub use models::{PropertyId, PropertyRecord};
pub use search::{filter, SearchCriteria};
pub use session::Session;
