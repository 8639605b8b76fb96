//! API handlers

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::Uri,
    response::{IntoResponse, Response},
    Json,
};
use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::api::{ApiError, AppState};
use crate::types::{Ayah, Surah, SURAH_COUNT};

/// Liveness check
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}

/// Fetch a whole surah
pub async fn get_surah(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let surah_number = match path {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            tracing::debug!(%uri, error = %rejection, "Falling back to lossy path decoding");
            lossy_segments(&uri).into_iter().next().unwrap_or_default()
        }
    };
    let surah_number = parse_surah_number(&surah_number)?;

    let surah = state
        .quran
        .surah(surah_number)
        .ok_or(ApiError::InvalidSurahNumber)?;

    Ok(Json(SurahResponse { surah }).into_response())
}

#[derive(Debug, Serialize)]
pub struct SurahResponse<'a> {
    pub surah: &'a Surah,
}

/// Fetch a single ayah together with the name of its surah
pub async fn get_ayah(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Response, ApiError> {
    let (surah_number, ayah_number) = match path {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            tracing::debug!(%uri, error = %rejection, "Falling back to lossy path decoding");
            let mut segments = lossy_segments(&uri).into_iter();
            (
                segments.next().unwrap_or_default(),
                segments.next().unwrap_or_default(),
            )
        }
    };
    let surah_number = parse_surah_number(&surah_number)?;

    let ayah_number = parse_number(&ayah_number)
        .filter(|n| (1..=state.quran.surah_length(surah_number)).contains(n))
        .ok_or_else(|| {
            tracing::debug!(surah_number, raw = %ayah_number, "Rejected ayah number");
            ApiError::InvalidAyahNumber
        })?;

    let ayah = state
        .quran
        .ayah(surah_number, ayah_number)
        .ok_or(ApiError::InvalidAyahNumber)?;
    let surah_name = state
        .quran
        .surah_name(surah_number)
        .ok_or(ApiError::InvalidSurahNumber)?;

    Ok(Json(AyahResponse { ayah, surah_name }).into_response())
}

/// Fetch a uniformly chosen ayah
pub async fn random_ayah(State(state): State<AppState>) -> Result<Response, ApiError> {
    let mut rng = fastrand::Rng::new();

    let (surah, ayah) = state.quran.random_ayah(&mut rng).ok_or_else(|| {
        tracing::error!("Random selection landed on a missing or empty surah");
        ApiError::Internal("dataset has a missing or empty surah".to_string())
    })?;

    Ok(Json(AyahResponse {
        ayah,
        surah_name: &surah.surah_name,
    })
    .into_response())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AyahResponse<'a> {
    pub ayah: &'a Ayah,
    pub surah_name: &'a str,
}

/// Parse a raw path segment as a surah number in `1..=114`.
fn parse_surah_number(raw: &str) -> Result<usize, ApiError> {
    parse_number(raw)
        .filter(|n| (1..=SURAH_COUNT).contains(n))
        .ok_or_else(|| {
            tracing::debug!(raw, "Rejected surah number");
            ApiError::InvalidSurahNumber
        })
}

/// Percent-decode every path segment, replacing invalid UTF-8.
///
/// Only used when axum refuses to decode the path itself, so that such
/// input still reaches the number parsers and fails there, surah first.
fn lossy_segments(uri: &Uri) -> Vec<String> {
    uri.path()
        .trim_start_matches('/')
        .split('/')
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        .collect()
}

/// Signed integer parse so that `-1` is rejected by range, not by syntax.
fn parse_number(raw: &str) -> Option<usize> {
    raw.parse::<i64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_surah_number() {
        assert_eq!(parse_surah_number("1").unwrap(), 1);
        assert_eq!(parse_surah_number("114").unwrap(), 114);
        assert_eq!(parse_surah_number("+7").unwrap(), 7);

        for raw in ["0", "115", "-1", "abc", "", "1.5", " 1", "99999999999999999999"] {
            assert!(
                matches!(parse_surah_number(raw), Err(ApiError::InvalidSurahNumber)),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_lossy_segments() {
        let uri: Uri = "/%31%FF/%32".parse().unwrap();
        assert_eq!(lossy_segments(&uri), vec!["1\u{FFFD}".to_string(), "2".to_string()]);

        let uri: Uri = "/%FF".parse().unwrap();
        let segments = lossy_segments(&uri);
        assert_eq!(segments.len(), 1);
        assert!(matches!(
            parse_surah_number(&segments[0]),
            Err(ApiError::InvalidSurahNumber)
        ));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42));
        assert_eq!(parse_number("-3"), None);
        assert_eq!(parse_number("x"), None);
    }
}
