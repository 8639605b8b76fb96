//! Dataset loading and structural validation
//!
//! The dataset is read exactly once at startup. A load or validation failure
//! is fatal: the server has no degraded mode.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::config::DatasetSection;
use crate::types::{Quran, SURAH_COUNT};
use crate::{Error, Result};

impl Quran {
    /// Parse a dataset document from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read and parse the dataset file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Check that surahs are numbered `1..=114` by position, each with a
    /// non-blank name and at least one ayah. Ayahs must be numbered `1..=N`
    /// by position and carry non-blank text.
    pub fn validate(&self) -> Result<()> {
        if self.surahs.len() != SURAH_COUNT {
            return Err(Error::invalid_dataset(format!(
                "expected {} surahs, found {}",
                SURAH_COUNT,
                self.surahs.len()
            )));
        }

        for (idx, surah) in self.surahs.iter().enumerate() {
            let expected = idx + 1;
            if surah.surah_number != expected {
                return Err(Error::invalid_dataset(format!(
                    "surah at position {} has number {}",
                    expected, surah.surah_number
                )));
            }

            if surah.surah_name.trim().is_empty() {
                return Err(Error::invalid_dataset(format!(
                    "surah {} has an empty name",
                    surah.surah_number
                )));
            }

            if surah.ayahs.is_empty() {
                return Err(Error::invalid_dataset(format!(
                    "surah {} has no ayahs",
                    surah.surah_number
                )));
            }

            for (ayah_idx, ayah) in surah.ayahs.iter().enumerate() {
                if ayah.ayah_number != ayah_idx + 1 {
                    return Err(Error::invalid_dataset(format!(
                        "surah {} ayah at position {} has number {}",
                        surah.surah_number,
                        ayah_idx + 1,
                        ayah.ayah_number
                    )));
                }

                if ayah.ayah_text.trim().is_empty() {
                    return Err(Error::invalid_dataset(format!(
                        "surah {} ayah {} has empty text",
                        surah.surah_number, ayah.ayah_number
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Load the configured dataset, validating it unless disabled.
pub fn load(config: &DatasetSection) -> Result<Quran> {
    let quran = Quran::load(&config.path)?;

    if config.validate {
        quran.validate()?;
    } else {
        tracing::warn!(path = %config.path, "Dataset validation disabled");
    }

    tracing::info!(
        path = %config.path,
        surahs = quran.surahs.len(),
        ayahs = quran.ayah_count(),
        "Dataset loaded",
    );

    Ok(quran)
}
