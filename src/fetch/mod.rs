use std::{num::NonZeroU32, sync::OnceLock, time::Duration};

use governor::{
    clock::{QuantaClock, QuantaInstant},
    middleware::NoOpMiddleware,
    state::InMemoryState,
};
use reqwest::{Client, Error as RequestError, StatusCode};
use tracing::{instrument, Level};
use url::Url;

use crate::location::Location;
use crate::slug;

static DIRECTORY_URL: &str =
    "https://www.culvers.com/stories/signature-stories/culvers-locations-by-state";
static USER_AGENT: &str = concat!("flavor_scout/", env!("CARGO_PKG_VERSION"));

pub fn make_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .build()
        .expect("client creation should succeed")
}

// Nominatim's usage policy caps at one request per second; the same budget is
// applied to the probe loop to stay polite.
static RATE_LIMIT: u32 = 1;
static DELAY_JITTER: u64 = 1;
static RATE_LIMITER: OnceLock<
    governor::RateLimiter<
        governor::state::NotKeyed,
        InMemoryState,
        QuantaClock,
        NoOpMiddleware<QuantaInstant>,
    >,
> = OnceLock::new();

/// Waits until the shared request budget allows another outbound call.
pub async fn throttle() {
    let rate_limiter = RATE_LIMITER.get_or_init(|| {
        governor::RateLimiter::direct(governor::Quota::per_second(
            NonZeroU32::new(RATE_LIMIT).unwrap(),
        ))
    });
    let jitter = governor::Jitter::new(Duration::ZERO, Duration::from_secs(DELAY_JITTER));
    rate_limiter.until_ready_with_jitter(jitter).await;
}

#[instrument(skip(client), level = Level::TRACE)]
pub async fn directory_page(client: &Client) -> Result<String, RequestError> {
    throttle().await;
    let response = client.get(DIRECTORY_URL).send().await?;
    response.text().await
}

/// Fetches a restaurant page with the current-week calendar tab selected.
#[instrument(skip(client, url), fields(url = %url), level = Level::TRACE)]
pub async fn flavor_page(client: &Client, url: &Url) -> Result<String, RequestError> {
    throttle().await;
    let mut url = url.to_owned();
    url.query_pairs_mut().append_pair("tab", "current");
    let response = client.get(url).send().await?;
    response.text().await
}

/// Probes candidate restaurant URLs with HEAD until one answers 200.
///
/// Transport errors on a candidate are logged and the next one is tried;
/// `None` means every candidate was exhausted.
#[instrument(skip(client, location), fields(city = %location.city), level = Level::TRACE)]
pub async fn discover_address(client: &Client, location: &Location) -> Option<Url> {
    for url in slug::candidate_urls(&location.city, &location.name) {
        throttle().await;
        match client.head(url.clone()).send().await {
            Ok(response) if response.status() == StatusCode::OK => return Some(url),
            Ok(_) => {}
            Err(e) => log::warn!("error checking url {url}: {e}"),
        }
    }
    None
}
