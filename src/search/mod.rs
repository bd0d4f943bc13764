pub mod filter;
pub mod types;

pub use filter::filter;
pub use types::{parse_bound, parse_date, Choice, SearchCriteria, SearchForm};
