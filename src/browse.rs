use crate::models::Country;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Bucket label for countries whose summary carries no region.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Sort/group mode applied to the list view after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    NameAsc,
    NameDesc,
    PopulationAsc,
    PopulationDesc,
    /// Group by region: regions alphabetical, countries alphabetical within
    /// each, missing regions in the [`UNKNOWN_REGION`] bucket.
    Region,
}

impl SortMode {
    /// True for the modes whose cards show an abbreviated population figure.
    pub fn shows_population(self) -> bool {
        matches!(self, SortMode::PopulationAsc | SortMode::PopulationDesc)
    }
}

/// A named group of countries sharing one region value.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionBucket {
    pub region: String,
    pub countries: Vec<Country>,
}

/// A derived, render-ready list: flat for the plain sort modes, grouped for
/// region mode.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayList {
    Flat(Vec<Country>),
    Grouped(Vec<RegionBucket>),
}

impl DisplayList {
    /// Post-filter, post-group country count (the figure the UI displays).
    pub fn len(&self) -> usize {
        match self {
            DisplayList::Flat(v) => v.len(),
            DisplayList::Grouped(buckets) => buckets.iter().map(|b| b.countries.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derive the visible list from the fetched summaries.
///
/// Filtering (case-insensitive substring match on the name) happens before
/// sorting/grouping. The computation is pure and recomputed on every render;
/// deriving twice from the same inputs yields the same output.
pub fn derive_view(countries: &[Country], search: &str, mode: SortMode) -> DisplayList {
    let term = search.to_lowercase();
    let mut visible: Vec<Country> = countries
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&term))
        .cloned()
        .collect();

    match mode {
        SortMode::NameAsc => {
            visible.sort_by(by_name);
            DisplayList::Flat(visible)
        }
        SortMode::NameDesc => {
            visible.sort_by(|a, b| by_name(b, a));
            DisplayList::Flat(visible)
        }
        SortMode::PopulationAsc => {
            visible.sort_by(|a, b| by_population(a, b).then_with(|| by_name(a, b)));
            DisplayList::Flat(visible)
        }
        SortMode::PopulationDesc => {
            visible.sort_by(|a, b| by_population(b, a).then_with(|| by_name(a, b)));
            DisplayList::Flat(visible)
        }
        SortMode::Region => group_by_region(visible),
    }
}

fn by_name(a: &Country, b: &Country) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

// Missing population orders as zero; the caller adds a name tiebreak so
// renders stay deterministic.
fn by_population(a: &Country, b: &Country) -> Ordering {
    a.population.unwrap_or(0).cmp(&b.population.unwrap_or(0))
}

fn group_by_region(visible: Vec<Country>) -> DisplayList {
    let mut buckets: BTreeMap<String, Vec<Country>> = BTreeMap::new();
    for c in visible {
        let region = c
            .region
            .clone()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_REGION.to_string());
        buckets.entry(region).or_default().push(c);
    }
    let groups = buckets
        .into_iter()
        .map(|(region, mut countries)| {
            countries.sort_by(by_name);
            RegionBucket { region, countries }
        })
        .collect();
    DisplayList::Grouped(groups)
}
