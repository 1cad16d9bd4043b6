use url::Url;

static RESTAURANTS_BASE: &str = "https://www.culvers.com/restaurants/";

/// Lowercase a display string into URL-slug form: ASCII alphanumerics kept,
/// whitespace runs become single dashes, everything else dropped.
pub fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() && !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Candidate restaurant-page URLs for a storefront, in probe order.
///
/// The site's slug scheme is undocumented, so this is guess-and-check: the
/// bare city slug first, then the city joined with the storefront name slug
/// truncated one character at a time down to a single character.
pub fn candidate_urls(city: &str, name: &str) -> Vec<Url> {
    let base = Url::parse(RESTAURANTS_BASE).expect("base url should be valid");
    let city = slugify(city);
    let name = slugify(name);

    let mut candidates = Vec::with_capacity(name.len() + 1);
    if let Ok(url) = base.join(&city) {
        candidates.push(url);
    }
    for len in (1..=name.len()).rev() {
        if let Ok(url) = base.join(&format!("{city}-{}", &name[..len])) {
            candidates.push(url);
        }
    }
    candidates
}
