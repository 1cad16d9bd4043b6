mod directory;
mod error;
mod flavor_page;
pub(crate) mod selector;

pub use directory::Directory;
pub use error::Error;
pub use flavor_page::Flavor;

use std::sync::OnceLock;

use regex::Regex;
use scraper::ElementRef;

/// Collects every text node under `element` into one string with whitespace
/// runs collapsed and the ends trimmed.
pub fn clean_text(element: ElementRef) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s\s+").expect("regex should be valid"));
    let raw: String = element.text().collect();
    re.replace_all(&raw, " ").trim().to_string()
}
