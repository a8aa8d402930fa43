//! HTTP handlers for the passphrase endpoint.
use crate::{server::ServerState, Result, State};
use axum::{
    extract::{Extension, Query},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Json},
};
use dicepass_core::{estimate, passphrase, OsRandomSource};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Query parameters for passphrase generation.
#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    /// Number of words, defaults to the configured word count.
    pub words: Option<usize>,
    /// Include entropy statistics in the response.
    #[serde(default)]
    pub stats: bool,
}

/// Response body for a generated passphrase.
#[derive(Debug, Serialize, Deserialize)]
pub struct PassphraseResponse {
    /// The generated passphrase.
    pub passphrase: String,
    /// RFC 3339 timestamp of the moment of generation.
    pub timestamp: String,
    /// Entropy statistics when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<PassphraseStats>,
}

/// Entropy statistics for display.
#[derive(Debug, Serialize, Deserialize)]
pub struct PassphraseStats {
    /// Number of words in the passphrase.
    pub words: usize,
    /// Entropy in bits.
    pub entropy_bits: f64,
    /// Possible combinations formatted for display.
    pub combinations: String,
    /// Estimated average brute force duration.
    pub crack_time: String,
}

/// Generate a passphrase.
pub(crate) async fn generate(
    Extension(state): Extension<ServerState>,
    Query(query): Query<GenerateQuery>,
) -> impl IntoResponse {
    let words = query.words.unwrap_or(state.config.generate.words);
    if words < 1 || words > state.config.generate.max_words {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match generate_response(&state, words, query.stats) {
        Ok(body) => {
            (no_store_headers(), Json(body)).into_response()
        }
        Err(error) => {
            tracing::error!(%error, "handlers::generate");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn generate_response(
    state: &State,
    words: usize,
    stats: bool,
) -> Result<PassphraseResponse> {
    let source = OsRandomSource::new()?;
    let secret =
        passphrase::generate_with(source, &state.wordlist, words)?;
    let timestamp = OffsetDateTime::now_utc().format(&Rfc3339)?;

    let stats = if stats {
        let combinations = estimate::combinations(words);
        Some(PassphraseStats {
            words,
            entropy_bits: estimate::entropy_bits(words),
            combinations: estimate::format_combinations(combinations),
            crack_time: estimate::crack_time(
                combinations,
                estimate::DEFAULT_ATTEMPTS_PER_SECOND,
            ),
        })
    } else {
        None
    };

    Ok(PassphraseResponse {
        passphrase: secret.expose_secret().to_owned(),
        timestamp,
        stats,
    })
}

/// Cache-busting response headers; generated passphrases must never
/// be stored or replayed by an intermediary.
fn no_store_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(
            "no-cache, no-store, must-revalidate, private",
        ),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    headers
}

/// Home route for the server.
pub(crate) async fn home() -> impl IntoResponse {
    "dicepass-server"
}
