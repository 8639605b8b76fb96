//! Core types for quran-api

use serde::{Deserialize, Serialize};

/// Canonical number of surahs.
pub const SURAH_COUNT: usize = 114;

/// The whole dataset, in canonical surah order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Quran {
    #[serde(rename = "quran")]
    pub surahs: Vec<Surah>,
}

/// A single surah (chapter) with its ayahs in canonical order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    pub surah_number: usize,
    pub surah_name: String,
    pub ayahs: Vec<Ayah>,
}

/// A single ayah (verse)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ayah {
    pub ayah_number: usize,
    pub ayah_text: String,
}
