use scraper::ElementRef;

use crate::parse::{clean_text, Error};
use crate::selector;

/// One storefront line from the locations-by-state story page, before
/// geocoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub state: String,
    pub city: String,
    pub name: String,
}

/// The full locations-by-state directory.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<DirectoryEntry>,
}

impl Directory {
    /// Walks each state heading in the story body and collects the entries of
    /// the list that follows it. A heading with no following list is skipped,
    /// as is any entry line that does not parse.
    pub fn from_html_element(element: ElementRef) -> Result<Self, Error> {
        selector!(CONTENT_SELECTOR <- "div.PageStoriesDetail_contentCopy__BRPDW");
        selector!(STATE_SELECTOR <- "h2");
        selector!(ENTRY_SELECTOR <- "li");

        let mut sections = element.select(&CONTENT_SELECTOR).peekable();
        if sections.peek().is_none() {
            return Err(Error::html_parse_error("story content element not found"));
        }

        let mut entries = Vec::new();
        for section in sections {
            for heading in section.select(&STATE_SELECTOR) {
                let state = clean_text(heading);

                // The state's storefronts are the <ul> between this heading
                // and the next one.
                let Some(list) = heading
                    .next_siblings()
                    .filter_map(ElementRef::wrap)
                    .take_while(|el| el.value().name() != "h2")
                    .find(|el| el.value().name() == "ul")
                else {
                    log::warn!("no storefront list under state heading {state:?}");
                    continue;
                };

                for item in list.select(&ENTRY_SELECTOR) {
                    let text = clean_text(item);
                    match parse_entry(&text) {
                        Some((city, name)) => entries.push(DirectoryEntry {
                            state: state.clone(),
                            city,
                            name,
                        }),
                        None => log::warn!("unrecognized directory entry {text:?}"),
                    }
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<DirectoryEntry> {
        self.entries
    }
}

/// Splits a line like `Culver's of Madison, WI - S Park St` into the city and
/// the storefront name. The city sits between `" of "` and the first comma;
/// the name is whatever follows the first dash after it, falling back to the
/// whole remainder when the line carries no dash.
fn parse_entry(text: &str) -> Option<(String, String)> {
    let (_, rest) = text.split_once(" of ")?;
    let (city, rest) = rest.split_once(',')?;
    let city = city.trim();
    if city.is_empty() {
        return None;
    }
    let name = match rest.split_once('-') {
        Some((_, name)) => name.trim(),
        None => rest.trim(),
    };
    Some((city.to_string(), name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_from_html_element() {
        let html = fs::read_to_string("./src/parse/html_examples/directory.html").unwrap();
        let document = scraper::Html::parse_document(&html);
        let directory = Directory::from_html_element(document.root_element())
            .expect("The example html should be valid");

        assert_eq!(directory.entries().len(), 3);
        assert_eq!(
            directory.entries()[0],
            DirectoryEntry {
                state: "Wisconsin".to_string(),
                city: "Madison".to_string(),
                name: "S Park St".to_string(),
            }
        );
        assert_eq!(directory.entries()[2].state, "Illinois");
        assert_eq!(directory.entries()[2].city, "Chicago");
    }

    #[test]
    fn test_missing_content_element_is_an_error() {
        let document = scraper::Html::parse_document("<html><body></body></html>");
        assert!(Directory::from_html_element(document.root_element()).is_err());
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            parse_entry("Culver\u{2019}s of Madison, WI - S Park St"),
            Some(("Madison".to_string(), "S Park St".to_string()))
        );
        // No street descriptor after the state abbreviation.
        assert_eq!(
            parse_entry("Culver\u{2019}s of Oconomowoc, WI"),
            Some(("Oconomowoc".to_string(), "WI".to_string()))
        );
        // Lines that do not follow the `of {City}, ...` shape are rejected.
        assert_eq!(parse_entry("Coming soon to a city near you"), None);
        assert_eq!(parse_entry("Culver\u{2019}s of , WI - Main St"), None);
    }
}
