//! Bounds-checked lookups over the loaded dataset
//!
//! Every lookup re-validates its indices and returns `None` (or 0 for
//! lengths) instead of panicking, even though the HTTP layer validates the
//! raw input first. Random selection relies on this to stay panic-free.

use fastrand::Rng;

use crate::types::{Ayah, Quran, Surah, SURAH_COUNT};

impl Quran {
    /// Surah `number` (1-based), or `None` outside `1..=114`.
    pub fn surah(&self, number: usize) -> Option<&Surah> {
        if !(1..=SURAH_COUNT).contains(&number) {
            return None;
        }
        self.surahs.get(number - 1)
    }

    /// Ayah `ayah_number` of surah `surah_number`, both 1-based.
    pub fn ayah(&self, surah_number: usize, ayah_number: usize) -> Option<&Ayah> {
        let surah = self.surah(surah_number)?;
        if ayah_number < 1 || ayah_number > surah.ayahs.len() {
            return None;
        }
        surah.ayahs.get(ayah_number - 1)
    }

    /// Number of ayahs in a surah, 0 for an invalid surah number.
    pub fn surah_length(&self, number: usize) -> usize {
        self.surah(number).map_or(0, |surah| surah.ayahs.len())
    }

    pub fn surah_name(&self, number: usize) -> Option<&str> {
        self.surah(number).map(|surah| surah.surah_name.as_str())
    }

    /// Total number of ayahs across all surahs.
    pub fn ayah_count(&self) -> usize {
        self.surahs.iter().map(|surah| surah.ayahs.len()).sum()
    }

    /// Pick a surah uniformly from `1..=114`, then an ayah uniformly within it.
    ///
    /// Returns `None` only when the chosen surah is missing or has no ayahs,
    /// which a validated dataset rules out.
    pub fn random_ayah(&self, rng: &mut Rng) -> Option<(&Surah, &Ayah)> {
        let surah_number = rng.usize(1..=SURAH_COUNT);
        let length = self.surah_length(surah_number);
        if length == 0 {
            return None;
        }

        let ayah_number = rng.usize(1..=length);
        let surah = self.surah(surah_number)?;
        let ayah = self.ayah(surah_number, ayah_number)?;
        Some((surah, ayah))
    }
}
