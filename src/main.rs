#![warn(clippy::all, clippy::pedantic)]

mod error;
mod fetch;
mod geo;
mod geocode;
mod location;
mod parse;
mod scrape;
mod slug;
mod store;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use scraper::Html;

use crate::parse::Flavor;
use crate::store::FileStore;

pub use error::Result;

/// Find nearby Culver's storefronts and report their flavors of the day.
#[derive(Debug, Parser)]
#[command(name = "flavor-scout", version)]
struct Cli {
    /// Path to the locations JSON file
    #[arg(short = 'i', long = "locations", default_value = "locations.json")]
    locations: PathBuf,

    /// Re-scrape the location directory even when the file already exists
    #[arg(long)]
    refresh: bool,

    /// State to search from (prompted for when omitted)
    #[arg(short, long)]
    state: Option<String>,

    /// City to search from (prompted for when omitted)
    #[arg(short, long)]
    city: Option<String>,

    /// Maximum distance in kilometers (prompted for when omitted)
    #[arg(short = 'd', long)]
    max_distance: Option<f64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    run(Cli::parse()).await
}

async fn run(args: Cli) -> Result<()> {
    let store = FileStore::open(&args.locations);
    let client = fetch::make_client();

    let locations = if args.refresh {
        scrape::scrape_locations(&client, &store).await?
    } else {
        match store.load().await? {
            Some(locations) => {
                log::info!(
                    "loaded {} locations from {}",
                    locations.len(),
                    store.path().display()
                );
                locations
            }
            None => {
                log::info!("no saved locations found, scraping the directory");
                scrape::scrape_locations(&client, &store).await?
            }
        }
    };

    let state = match args.state {
        Some(state) => state,
        None => prompt("Enter the state to search from: ")?,
    };
    let city = match args.city {
        Some(city) => city,
        None => prompt("Enter the city to search from: ")?,
    };
    let max_distance = match args.max_distance {
        Some(distance) => distance,
        None => prompt_distance()?,
    };

    let Some(reference) = locations.iter().find(|loc| loc.matches(&state, &city)) else {
        println!("No saved location matches {city}, {state}. Check the spelling or re-run with --refresh.");
        return Ok(());
    };
    if !reference.is_geocoded() {
        println!("The saved entry for {city}, {state} has no coordinates; re-run with --refresh.");
        return Ok(());
    }

    let nearby = geo::find_nearby(&locations, reference.coordinates(), max_distance);
    if nearby.is_empty() {
        println!("No Culver's locations found within {max_distance} km.");
        return Ok(());
    }

    for found in &nearby {
        println!(
            "Found Culver's in {}, {} ({:.2} km away).",
            found.location.city, found.location.state, found.distance_km
        );

        let Some(address) = fetch::discover_address(&client, found.location).await else {
            println!("Could not find a valid address for the location.");
            continue;
        };
        println!("Address: {address}");

        let page = match fetch::flavor_page(&client, &address).await {
            Ok(page) => page,
            Err(e) => {
                log::warn!("error fetching flavor page {address}: {e}");
                continue;
            }
        };
        let flavors = {
            let document = Html::parse_document(&page);
            Flavor::all_from_html_element(document.root_element())
        };

        println!("Flavors of the Day:");
        for flavor in &flavors {
            println!("{}: {}", flavor.day, flavor.name);
        }
    }

    Ok(())
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_distance() -> io::Result<f64> {
    loop {
        let line = prompt("Enter the maximum distance (in kilometers): ")?;
        match line.parse() {
            Ok(distance) => return Ok(distance),
            Err(_) => eprintln!("Please enter a number."),
        }
    }
}
