use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::fetch;

static SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Resolves `"{city}, {state}"` to (latitude, longitude) through Nominatim.
///
/// `Ok(None)` means the service answered but had no match for the query.
pub async fn locate(client: &Client, city: &str, state: &str) -> crate::Result<Option<(f64, f64)>> {
    fetch::throttle().await;
    let query = format!("{city}, {state}");
    let url = Url::parse_with_params(SEARCH_URL, &[("q", query.as_str()), ("format", "geojson")])
        .expect("search url should be valid");

    let response = client.get(url).send().await?;
    let body = response.text().await?;
    Ok(coords_from_body(&body)?)
}

// The response body is parsed by hand; the client is built without reqwest's
// own json decoding.
fn coords_from_body(body: &str) -> serde_json::Result<Option<(f64, f64)>> {
    let json: Value = serde_json::from_str(body)?;
    Ok(json_to_coords(&json))
}

// geojson points are (lon, lat); the first feature is Nominatim's best match.
fn json_to_coords(json: &Value) -> Option<(f64, f64)> {
    let coords = &json["features"][0]["geometry"]["coordinates"];
    let lat = coords[1].as_f64()?;
    let lon = coords[0].as_f64()?;
    Some((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_to_coords_valid() {
        let json_response = r#"
{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": {
        "name": "Madison",
        "display_name": "Madison, Dane County, Wisconsin, United States"
      },
      "geometry": {
        "type": "Point",
        "coordinates": [-89.3837613, 43.074761]
      }
    },
    {
      "type": "Feature",
      "properties": {
        "name": "Madison",
        "display_name": "Madison, Morgan County, Georgia, United States"
      },
      "geometry": {
        "type": "Point",
        "coordinates": [-83.4790381, 33.5956794]
      }
    }
  ]
}
"#;
        let json = serde_json::from_str(json_response).unwrap();

        let coords = json_to_coords(&json).unwrap();

        assert_eq!(coords, (43.074761, -89.3837613));
    }

    #[test]
    fn test_json_to_coords_no_features() {
        let json = serde_json::from_str(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert!(json_to_coords(&json).is_none());
    }

    #[test]
    fn test_coords_from_body() {
        let body = r#"{"features": [{"geometry": {"coordinates": [-89.3837613, 43.074761]}}]}"#;
        let coords = coords_from_body(body).unwrap().unwrap();
        assert_eq!(coords, (43.074761, -89.3837613));
    }

    #[test]
    fn test_coords_from_malformed_body() {
        assert!(coords_from_body("<html>rate limited</html>").is_err());
    }
}
