use std::path::PathBuf;
use thiserror::Error;

/// Error thrown by the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a config file to write already exists.
    #[error("file {0} already exists")]
    FileExists(PathBuf),

    /// Error generated by the passphrase engine.
    #[error(transparent)]
    Core(#[from] dicepass_core::Error),

    /// Error generated by input/output.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error generated deserializing TOML.
    #[error(transparent)]
    TomlDeser(#[from] toml::de::Error),

    /// Error generated serializing TOML.
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    /// Error generated parsing a socket address.
    #[error(transparent)]
    AddrParse(#[from] std::net::AddrParseError),

    /// Error generated by an invalid header value.
    #[error(transparent)]
    HeaderValue(#[from] axum::http::header::InvalidHeaderValue),

    /// Error generated formatting a timestamp.
    #[error(transparent)]
    TimeFormat(#[from] time::error::Format),
}
