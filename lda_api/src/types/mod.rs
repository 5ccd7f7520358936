//! Response envelope for the LDA API's paginated list endpoints.

use serde::{Deserialize, Serialize};

/// One disclosure filing (or client/lobbyist directory entry) as returned by
/// the API. Filings are arbitrarily nested and their optional fields vary per
/// filing type, so they are kept as a raw JSON tree rather than a fixed
/// struct; the flattener and the preview layer pick out the keys they need.
pub type Filing = serde_json::Value;

/// A single page of results. The `next` URL, when present, points at the
/// following page and drives the pagination loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<Filing>,
}
