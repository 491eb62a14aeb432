use serde::{Deserialize, Serialize};

/// Summary entry from the `/countries` endpoint (one card in the list view).
///
/// The name doubles as the lookup key for the detail endpoint; the API
/// guarantees it is unique within one list response. Instances are never
/// mutated after decoding, only filtered/sorted into derived views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub name: String,
    /// Flag image URL.
    pub flag: String,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub region: Option<String>,
}

/// Full record from the `/countries/{name}` endpoint.
///
/// Superset of [`Country`] for one named entity. Fetched fresh per
/// detail-view visit; never cached across visits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryDetails {
    pub name: String,
    pub flag: String,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Surface area in km².
    #[serde(default)]
    pub area: Option<f64>,
    /// Short country code (e.g., "CA").
    #[serde(default)]
    pub code: Option<String>,
}

/// Payload of the `/health` liveness probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub status: String,
    pub service: String,
}
