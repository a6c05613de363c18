//! Overpass API client
//!
//! Queries the Overpass interpreter for named places matching a hobby's tag
//! filters, scoped to a city area. Each tag is queried independently;
//! failures are recorded per tag and never abort the remaining tags.

use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::hobby::{FilterTag, tags_for_hobby};
use super::{PoiError, Result};
use crate::config::TripAiConfig;
use crate::models::PointOfInterest;

/// Overpass interpreter client
pub struct OverpassClient {
    client: Client,
    base_url: String,
}

/// Result of one POI fetch across all tags of a hobby.
///
/// `pois` is truncated to the overall limit; `tags` records the outcome of
/// every tag that was tried, with the number of elements it contributed.
#[derive(Debug)]
pub struct PoiFetchReport {
    pub pois: Vec<PointOfInterest>,
    pub tags: Vec<TagOutcome>,
}

/// Outcome of a single tag query
#[derive(Debug)]
pub struct TagOutcome {
    pub tag: String,
    pub result: Result<usize>,
}

impl PoiFetchReport {
    /// True when every tag that was tried failed upstream.
    ///
    /// Distinguishes "the city has no matching POIs" from "the POI service
    /// was unreachable for this request".
    #[must_use]
    pub fn every_tag_failed(&self) -> bool {
        !self.tags.is_empty() && self.tags.iter().all(|t| t.result.is_err())
    }
}

/// Overpass JSON response body
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(default)]
    tags: HashMap<String, String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl OverpassClient {
    /// Create a new client
    pub fn new(config: &TripAiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.overpass.timeout_seconds.into()))
            .user_agent(concat!("TripAI/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.overpass.base_url.clone(),
        }
    }

    /// Fetch up to `limit` POIs for a city and hobby.
    ///
    /// Tries every tag mapped to the hobby, taking at most `limit` elements
    /// per tag and truncating the combined result to `limit`. Duplicates
    /// across tags are not deduplicated; first-seen order is preserved.
    pub async fn fetch_pois(&self, city: &str, hobby: &str, limit: usize) -> PoiFetchReport {
        let tags = tags_for_hobby(hobby);
        let mut pois = Vec::new();
        let mut outcomes = Vec::with_capacity(tags.len());

        for tag in tags {
            match self.fetch_tag(city, hobby, tag, limit).await {
                Ok(found) => {
                    outcomes.push(TagOutcome {
                        tag: (*tag).to_string(),
                        result: Ok(found.len()),
                    });
                    pois.extend(found);
                }
                Err(e) => {
                    warn!("Overpass fetch failed for tag {tag}: {e}");
                    outcomes.push(TagOutcome {
                        tag: (*tag).to_string(),
                        result: Err(e),
                    });
                }
            }
        }

        pois.truncate(limit);
        info!(
            "Collected {} POIs for city '{}' and hobby '{}'",
            pois.len(),
            city,
            hobby
        );

        PoiFetchReport {
            pois,
            tags: outcomes,
        }
    }

    async fn fetch_tag(
        &self,
        city: &str,
        hobby: &str,
        tag: &str,
        limit: usize,
    ) -> Result<Vec<PointOfInterest>> {
        let query = build_query(city, &FilterTag::parse(tag));
        debug!("Overpass query for tag {tag}: {query}");

        let response = self
            .client
            .post(&self.base_url)
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|e| PoiError::NetworkError(format!("Overpass request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PoiError::ApiError(format!(
                "Overpass error {status}: {error_text}"
            )));
        }

        let body: OverpassResponse = response
            .json()
            .await
            .map_err(|e| PoiError::ParseError(format!("Failed to parse Overpass response: {e}")))?;

        Ok(body
            .elements
            .into_iter()
            .take(limit)
            .map(|el| {
                PointOfInterest::new(
                    el.tags
                        .get("name")
                        .cloned()
                        .unwrap_or_else(|| "Unknown".to_string()),
                    el.lat,
                    el.lon,
                    hobby.to_string(),
                )
            })
            .collect())
    }
}

/// Build the Overpass QL query for one tag filter scoped to a city area.
#[must_use]
pub fn build_query(city: &str, filter: &FilterTag) -> String {
    let node = match &filter.value {
        Some(value) => format!("node[\"{}\"=\"{}\"]", filter.key, value),
        None => format!("node[\"{}\"]", filter.key),
    };
    format!(
        "[out:json][timeout:25];\narea[\"name\"=\"{city}\"]->.searchArea;\n{node}(area.searchArea);\nout center;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_with_value() {
        let query = build_query("Jaipur", &FilterTag::parse("amenity=restaurant"));
        assert!(query.contains("[out:json][timeout:25];"));
        assert!(query.contains("area[\"name\"=\"Jaipur\"]->.searchArea;"));
        assert!(query.contains("node[\"amenity\"=\"restaurant\"](area.searchArea);"));
        assert!(query.ends_with("out center;"));
    }

    #[test]
    fn test_build_query_wildcard_is_presence_filter() {
        let query = build_query("Jaipur", &FilterTag::parse("shop=*"));
        assert!(query.contains("node[\"shop\"](area.searchArea);"));
        assert!(!query.contains('*'));
    }

    #[test]
    fn test_decode_elements() {
        let body = r#"{
            "elements": [
                {"tags": {"name": "Hawa Mahal"}, "lat": 26.9239, "lon": 75.8267},
                {"tags": {}, "lat": 26.9, "lon": 75.8},
                {"lat": null, "lon": null}
            ]
        }"#;
        let decoded: OverpassResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.elements.len(), 3);
        assert_eq!(decoded.elements[0].tags.get("name").unwrap(), "Hawa Mahal");
        assert!(decoded.elements[2].tags.is_empty());
        assert!(decoded.elements[2].lat.is_none());
    }

    #[test]
    fn test_decode_missing_elements_key() {
        let decoded: OverpassResponse = serde_json::from_str("{}").unwrap();
        assert!(decoded.elements.is_empty());
    }

    #[test]
    fn test_report_every_tag_failed() {
        let report = PoiFetchReport {
            pois: vec![],
            tags: vec![
                TagOutcome {
                    tag: "tourism=museum".to_string(),
                    result: Err(PoiError::NetworkError("unreachable".to_string())),
                },
                TagOutcome {
                    tag: "historic=yes".to_string(),
                    result: Err(PoiError::NetworkError("unreachable".to_string())),
                },
            ],
        };
        assert!(report.every_tag_failed());
    }

    #[test]
    fn test_report_with_empty_success_is_not_failure() {
        let report = PoiFetchReport {
            pois: vec![],
            tags: vec![
                TagOutcome {
                    tag: "tourism=museum".to_string(),
                    result: Ok(0),
                },
                TagOutcome {
                    tag: "historic=yes".to_string(),
                    result: Err(PoiError::NetworkError("unreachable".to_string())),
                },
            ],
        };
        assert!(!report.every_tag_failed());
    }
}
