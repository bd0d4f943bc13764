mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use property_search::format::{
    bedroom_label, format_date, format_date_numeric, format_price, type_label,
};
use property_search::listings::{JsonFileSource, ListingSource, ListingStore, SampleSource};
use property_search::models::PropertyId;
use property_search::session::Session;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "property_search=info".into()),
        )
        .init();

    let cli = Cli::parse();

    info!("🏠 Property Search");

    let source: Box<dyn ListingSource> = match &cli.data {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SampleSource::new()),
    };
    let store = ListingStore::load(source.as_ref())
        .await
        .context("Failed to load listings")?;

    let mut session = Session::new(store);

    for raw in &cli.favourites {
        match raw.parse::<PropertyId>() {
            Ok(id) if session.add_favourite(id) => info!("❤️ Added property {} to favourites", id),
            Ok(id) => warn!("Property {} is unknown or already a favourite", id),
            Err(err) => warn!("Skipping favourite: {}", err),
        }
    }

    if let Some(raw_id) = &cli.show {
        match session.property_detail(raw_id) {
            Some(detail) => {
                let property = detail.record;
                println!("{}", format_price(property.price));
                println!("📍 {}", property.address);
                println!(
                    "🏠 {} · 🛏️ {} · 📮 {}",
                    type_label(property.property_type),
                    bedroom_label(property.bedrooms),
                    property.postcode
                );
                println!("Date Added: {}", format_date_numeric(property.date_added));
                if detail.is_favourite {
                    println!("❤️ In your favourites");
                }
                println!();
                println!("{}", property.description);
                println!("{}", property.long_description);
                if let Some(location) = property.location {
                    println!("Map: {}, {}", location.lat, location.lng);
                }
            }
            None => warn!("Property {} not found", raw_id),
        }
        return Ok(());
    }

    session.submit(cli.search_form().into_criteria());
    let results = session.results();

    println!("{}\n", results.summary());

    for (i, entry) in results.entries.iter().enumerate() {
        let property = entry.record;
        let badge = if entry.is_favourite { " ❤️ Favourite" } else { "" };
        println!("{}. {} {}{}", i + 1, format_price(property.price), property.address, badge);
        println!(
            "   {} · {} · {}",
            type_label(property.property_type),
            bedroom_label(property.bedrooms),
            property.listing_type.as_str()
        );
        println!("   Added: {}", format_date(property.date_added));
        if let Some(image) = property.thumbnail() {
            println!("   Image: {}", image);
        }
        println!("   ID: {}", property.id);
        println!();
    }

    let favourites = session.favourites();
    if !favourites.is_empty() {
        println!("My Favourites ({})", favourites.len());
        for property in favourites {
            println!("   {} - {}", property.address, format_price(property.price));
        }
    }

    // Save matching listings like the original properties.json
    if let Some(path) = &cli.output {
        let matches: Vec<_> = results.records().collect();
        let json = serde_json::to_string_pretty(&matches)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved {} properties to {}", matches.len(), path.display());
    }

    Ok(())
}
