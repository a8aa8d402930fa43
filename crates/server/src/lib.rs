//! HTTP service generating diceware passphrases.
//!
//! Exposes a single `GET /api/v1/passphrase` endpoint returning a
//! freshly generated passphrase and an RFC 3339 timestamp as JSON.
//! Responses always carry cache-busting headers since a passphrase
//! must never be cached or reused by an intermediary.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod handlers;
mod server;

pub use error::Error;

/// Result type for the server module.
#[doc(hidden)]
pub type Result<T> = std::result::Result<T, error::Error>;

pub use config::*;
pub use handlers::{PassphraseResponse, PassphraseStats};
pub use server::{Server, ServerState, State};
