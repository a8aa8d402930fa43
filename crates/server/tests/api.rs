use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use dicepass_server::{PassphraseResponse, Server, ServerConfig, State};
use std::{io::Write, sync::Arc};
use time::format_description::well_known::Rfc3339;
use tower::util::ServiceExt;

const WORD_LIST_SIZE: usize = 7776;

fn test_router(dir: &tempfile::TempDir) -> Result<Router> {
    let wordlist_path = dir.path().join("words.txt");
    let mut file = std::fs::File::create(&wordlist_path)?;
    for i in 0..WORD_LIST_SIZE {
        writeln!(file, "w{i:05}")?;
    }

    let mut config = ServerConfig::default();
    config.wordlist.path = wordlist_path;
    let state = Arc::new(State::new(config)?);
    Ok(Server::router(state, Vec::new()))
}

#[tokio::test]
async fn api_generate_passphrase() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let app = test_router(&dir)?;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/passphrase")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(StatusCode::OK, response.status());
    let headers = response.headers();
    assert_eq!(
        "no-cache, no-store, must-revalidate, private",
        headers.get(header::CACHE_CONTROL).unwrap().to_str()?
    );
    assert_eq!(
        "no-cache",
        headers.get(header::PRAGMA).unwrap().to_str()?
    );
    assert_eq!("0", headers.get(header::EXPIRES).unwrap().to_str()?);

    let bytes =
        axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body: PassphraseResponse = serde_json::from_slice(&bytes)?;

    let words: Vec<&str> = body.passphrase.split('-').collect();
    assert_eq!(20, words.len());
    for word in words {
        assert!(word.starts_with('w'));
    }
    assert!(body.stats.is_none());

    // Timestamp parses back as RFC 3339.
    time::OffsetDateTime::parse(&body.timestamp, &Rfc3339)?;
    Ok(())
}

#[tokio::test]
async fn api_generate_with_stats() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let app = test_router(&dir)?;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/passphrase?words=6&stats=true")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(StatusCode::OK, response.status());

    let bytes =
        axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body: PassphraseResponse = serde_json::from_slice(&bytes)?;

    assert_eq!(6, body.passphrase.split('-').count());
    let stats = body.stats.expect("stats requested");
    assert_eq!(6, stats.words);
    assert!((stats.entropy_bits - 77.5489).abs() < 1e-4);
    assert!(!stats.combinations.is_empty());
    assert!(!stats.crack_time.is_empty());
    Ok(())
}

#[tokio::test]
async fn api_rejects_excessive_word_count() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let app = test_router(&dir)?;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/passphrase?words=65")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());
    Ok(())
}

#[tokio::test]
async fn api_rejects_zero_word_count() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let app = test_router(&dir)?;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/passphrase?words=0")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());
    Ok(())
}

#[tokio::test]
async fn api_home_route() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let app = test_router(&dir)?;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty())?)
        .await?;
    assert_eq!(StatusCode::OK, response.status());
    Ok(())
}

#[test]
fn server_refuses_corrupt_wordlist() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let wordlist_path = dir.path().join("words.txt");
    let mut file = std::fs::File::create(&wordlist_path)?;
    for i in 0..7000 {
        writeln!(file, "w{i:05}")?;
    }

    let mut config = ServerConfig::default();
    config.wordlist.path = wordlist_path;
    assert!(State::new(config).is_err());
    Ok(())
}
