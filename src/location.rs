/// A single storefront record, as persisted in the locations JSON file.
///
/// Latitude/longitude of `(0.0, 0.0)` means geocoding found nothing for the
/// city/state pair; the record is kept so a later scrape pass can be compared
/// against the directory.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Location {
    pub state: String,
    pub city: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn is_geocoded(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }

    pub fn matches(&self, state: &str, city: &str) -> bool {
        self.state.eq_ignore_ascii_case(state) && self.city.eq_ignore_ascii_case(city)
    }
}
