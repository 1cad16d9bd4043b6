use std::collections::HashSet;

use reqwest::Client;

use crate::location::Location;
use crate::parse::Directory;
use crate::store::FileStore;
use crate::{fetch, geocode};

/// Runs a full scrape pass: fetch the locations-by-state directory, geocode
/// each storefront's city/state pair, and persist the result.
///
/// Duplicate (city, state) pairs keep their first entry. A storefront whose
/// geocoding request fails outright is skipped; one that merely has no match
/// is kept with zeroed coordinates.
pub async fn scrape_locations(client: &Client, store: &FileStore) -> crate::Result<Vec<Location>> {
    let page = fetch::directory_page(client).await?;
    let entries = {
        let document = scraper::Html::parse_document(&page);
        Directory::from_html_element(document.root_element())?.into_entries()
    };

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut locations = Vec::with_capacity(entries.len());
    for entry in entries {
        let key = (
            entry.city.to_ascii_lowercase(),
            entry.state.to_ascii_lowercase(),
        );
        if !seen.insert(key) {
            continue;
        }

        let (latitude, longitude) = match geocode::locate(client, &entry.city, &entry.state).await {
            Ok(Some(coords)) => coords,
            Ok(None) => {
                log::warn!("no geocoding match for {}, {}", entry.city, entry.state);
                (0.0, 0.0)
            }
            Err(e) => {
                log::warn!("error geocoding {}, {}: {e}", entry.city, entry.state);
                continue;
            }
        };

        log::info!(
            "added location: {} in {}, {} at ({latitude}, {longitude})",
            entry.name,
            entry.city,
            entry.state
        );
        locations.push(Location {
            state: entry.state,
            city: entry.city,
            name: entry.name,
            latitude,
            longitude,
        });
    }

    store.save(&locations).await?;
    log::info!(
        "saved {} locations to {}",
        locations.len(),
        store.path().display()
    );
    Ok(locations)
}
