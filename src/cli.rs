use clap::Parser;
use property_search::search::SearchForm;
use std::path::PathBuf;

/// Command-line front end for the listing search
///
/// Search fields are free text and go through the same lenient parsing as the
/// search form: a malformed bound is ignored rather than rejected.
#[derive(Parser, Debug)]
#[command(name = "property-search")]
#[command(about = "Search a property listing set and collect favourites")]
#[command(version)]
pub struct Cli {
    /// Listing file in properties.json format (built-in sample set if omitted)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Property type: any, house or flat
    #[arg(long = "type")]
    pub property_type: Option<String>,

    /// Listing type: any, sale or rent
    #[arg(long)]
    pub listing_type: Option<String>,

    #[arg(long)]
    pub min_price: Option<String>,

    #[arg(long)]
    pub max_price: Option<String>,

    #[arg(long)]
    pub min_bedrooms: Option<String>,

    #[arg(long)]
    pub max_bedrooms: Option<String>,

    /// Postcode prefix, e.g. BR1
    #[arg(long)]
    pub postcode: Option<String>,

    /// Earliest date added (YYYY-MM-DD)
    #[arg(long)]
    pub date_from: Option<String>,

    /// Latest date added (YYYY-MM-DD)
    #[arg(long)]
    pub date_to: Option<String>,

    /// Add a property to favourites by id (repeatable)
    #[arg(long = "favourite", value_name = "ID")]
    pub favourites: Vec<String>,

    /// Show the detail view of one property
    #[arg(long, value_name = "ID")]
    pub show: Option<String>,

    /// Write the matching listings to this file as JSON
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// The raw search form these arguments describe
    pub fn search_form(&self) -> SearchForm {
        SearchForm {
            property_type: self.property_type.clone(),
            listing_type: self.listing_type.clone(),
            min_price: self.min_price.clone(),
            max_price: self.max_price.clone(),
            min_bedrooms: self.min_bedrooms.clone(),
            max_bedrooms: self.max_bedrooms.clone(),
            postcode: self.postcode.clone(),
            date_from: self.date_from.clone(),
            date_to: self.date_to.clone(),
        }
    }
}
