//! quran-api - a read-only HTTP API over a static Quran dataset
//!
//! The dataset is loaded once at startup into an immutable [`types::Quran`]
//! and shared by every request handler. Three lookups are exposed: a whole
//! surah, a single ayah, and a uniformly random ayah.

pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod lookup;
pub mod types;

pub use error::{Error, Result};
