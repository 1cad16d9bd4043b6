use scraper::ElementRef;

use crate::parse::clean_text;
use crate::selector;

/// One day's posted flavor from a restaurant page's calendar panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flavor {
    pub day: String,
    pub name: String,
}

impl Flavor {
    /// Every calendar panel item on the page, in page order. Panels missing a
    /// heading or flavor link keep their slot with an Unknown placeholder;
    /// a page without a calendar yields an empty list.
    pub fn all_from_html_element(element: ElementRef) -> Vec<Self> {
        selector!(ITEM_SELECTOR <- "div.RestaurantCalendarPanel_containerItem__ZEQoq");
        selector!(DAY_SELECTOR <- "h3.RestaurantCalendarPanel_containerItemHeading__7lty1");
        selector!(FLAVOR_SELECTOR <- "a.RestaurantCalendarPanel_containerItemContentFlavorLink__Kvd0e");

        element
            .select(&ITEM_SELECTOR)
            .map(|item| {
                let day = item
                    .select(&DAY_SELECTOR)
                    .next()
                    .map(clean_text)
                    .unwrap_or_else(|| "Unknown Day".to_string());
                let name = item
                    .select(&FLAVOR_SELECTOR)
                    .next()
                    .map(clean_text)
                    .unwrap_or_else(|| "Unknown Flavor".to_string());
                Self { day, name }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_all_from_html_element() {
        let html = fs::read_to_string("./src/parse/html_examples/flavor_page.html").unwrap();
        let document = scraper::Html::parse_document(&html);
        let flavors = Flavor::all_from_html_element(document.root_element());

        assert_eq!(flavors.len(), 3);
        assert_eq!(
            flavors[0],
            Flavor {
                day: "Monday, June 2".to_string(),
                name: "Caramel Cashew".to_string(),
            }
        );
        assert_eq!(flavors[1].name, "Turtle");
        // The third panel has no flavor link posted.
        assert_eq!(flavors[2].day, "Wednesday, June 4");
        assert_eq!(flavors[2].name, "Unknown Flavor");
    }

    #[test]
    fn test_page_without_calendar_is_empty() {
        let document = scraper::Html::parse_document("<html><body><p>404</p></body></html>");
        assert!(Flavor::all_from_html_element(document.root_element()).is_empty());
    }
}
