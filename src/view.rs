//! View state machines for the two screens.
//!
//! Both views move `Loading → {Failed | Ready}` and never back to `Loading`
//! except through an explicit reload or navigation. The machines are plain
//! data: callers (CLI, GUI) run the network calls, synchronously or on a
//! background thread, and feed outcomes back in, so the transitions stay
//! testable without a UI.

use crate::api::{ApiError, Client};
use crate::browse::{self, DisplayList, SortMode};
use crate::models::{Country, CountryDetails};

/// Render state of the list view.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Failed(String),
    Ready(Vec<Country>),
}

/// Run the list view's fetch sequence.
///
/// The health probe runs first and gates everything: when it fails, the
/// country fetch is never issued and the state carries backend-unreachable
/// wording. Otherwise the country list is fetched and failure maps to the
/// fetch error's message.
pub fn load_countries(client: &Client) -> ListState {
    if let Err(err) = client.check_health() {
        return ListState::Failed(format!(
            "Backend API is not available. Please make sure the server is running. ({err})"
        ));
    }
    match client.fetch_all_countries() {
        Ok(countries) => ListState::Ready(countries),
        Err(err) => ListState::Failed(format!("Failed to load countries: {err}")),
    }
}

/// The list screen: fetched summaries plus the two derived-view inputs.
#[derive(Debug)]
pub struct ListView {
    pub state: ListState,
    /// Free-text search term, matched case-insensitively against names.
    pub search: String,
    pub sort: SortMode,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
            search: String::new(),
            sort: SortMode::default(),
        }
    }

    /// User-triggered reload: back to `Loading`. Search and sort survive.
    pub fn begin_reload(&mut self) {
        self.state = ListState::Loading;
    }

    pub fn finish_load(&mut self, state: ListState) {
        self.state = state;
    }

    /// The derived view, recomputed on every call. Empty until `Ready`.
    pub fn visible(&self) -> DisplayList {
        match &self.state {
            ListState::Ready(countries) => browse::derive_view(countries, &self.search, self.sort),
            _ => DisplayList::Flat(Vec::new()),
        }
    }
}

/// Render state of the detail view.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    /// `not_found` selects the "not found" wording over the generic one.
    Failed { message: String, not_found: bool },
    Ready(CountryDetails),
}

/// The detail screen, keyed by the route name it was entered with.
#[derive(Debug)]
pub struct DetailView {
    name: String,
    pub state: DetailState,
}

impl DetailView {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: DetailState::Loading,
        }
    }

    /// The route name this view currently renders.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Route parameter changed: re-key, reset to `Loading`, drop any prior
    /// error.
    pub fn navigate(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.state = DetailState::Loading;
    }

    /// Install a fetch outcome.
    ///
    /// `for_name` is the name the request was issued for. Only the response
    /// matching the currently active name may update state; a result arriving
    /// for an abandoned name is discarded.
    pub fn apply(&mut self, for_name: &str, outcome: Result<CountryDetails, ApiError>) {
        if for_name != self.name {
            return;
        }
        self.state = match outcome {
            Ok(details) => DetailState::Ready(details),
            Err(err @ ApiError::NotFound { .. }) => DetailState::Failed {
                message: err.to_string(),
                not_found: true,
            },
            Err(err) => DetailState::Failed {
                message: format!("Failed to load country details: {err}"),
                not_found: false,
            },
        };
    }
}
