//! Shared fixtures for integration tests

#![allow(dead_code)]

use quran_api::types::{Ayah, Quran, Surah, SURAH_COUNT};

/// Ayah count for surah `n` in the generated dataset. Kept identical to
/// `lookup::tests::surah_len` in the library unit tests.
pub fn surah_len(n: usize) -> usize {
    if n == 2 {
        286
    } else {
        (n % 7) + 3
    }
}

/// A well-formed 114-surah dataset with predictable names and texts.
pub fn sample_quran() -> Quran {
    let surahs = (1..=SURAH_COUNT)
        .map(|n| Surah {
            surah_number: n,
            surah_name: format!("Surah {n}"),
            ayahs: (1..=surah_len(n))
                .map(|a| Ayah {
                    ayah_number: a,
                    ayah_text: format!("text {n}:{a}"),
                })
                .collect(),
        })
        .collect();

    Quran { surahs }
}
