//! flagx_rs
//!
//! A lightweight Rust library for browsing countries and their flags through
//! the Flag Explorer backend API. Pairs with the `flagx` CLI and the
//! `flagx-gui` desktop app.
//!
//! ### Features
//! - Fetch the country summary list, one country's details, and the backend
//!   health probe, with a typed error per failure mode
//! - Derive filtered/sorted/region-grouped views from a fetched list
//! - Format populations and areas for display (abbreviations, separators,
//!   "N/A" fallbacks)
//! - Save a fetched list as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use flagx_rs::{Client, SortMode, browse};
//!
//! let client = Client::default();
//! client.check_health()?;
//! let countries = client.fetch_all_countries()?;
//! let visible = browse::derive_view(&countries, "ca", SortMode::PopulationDesc);
//! println!("{} countries match", visible.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod browse;
pub mod format;
pub mod models;
pub mod storage;
pub mod view;

pub use api::{ApiError, Client};
pub use browse::{DisplayList, RegionBucket, SortMode};
pub use models::{Country, CountryDetails, Health};
