//! Server configuration.
use crate::Result;
use dicepass_core::DEFAULT_WORDS;
use serde::{Deserialize, Serialize};
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};
use url::Url;

/// Configuration for the passphrase server.
#[derive(Default, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Word list settings.
    pub wordlist: WordlistConfig,

    /// Passphrase generation settings.
    pub generate: GenerateConfig,

    /// Configuration for the network.
    pub net: NetworkConfig,

    /// Path the file was loaded from used to determine
    /// relative paths.
    #[serde(skip)]
    file: Option<PathBuf>,
}

impl ServerConfig {
    /// Load a server config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: ServerConfig = toml::from_str(&content)?;
        config.file = Some(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// Path to the word list, resolved relative to the directory of
    /// the config file when not absolute.
    pub fn wordlist_path(&self) -> PathBuf {
        if self.wordlist.path.is_absolute() {
            return self.wordlist.path.clone();
        }
        match self.file.as_ref().and_then(|file| file.parent()) {
            Some(dir) => dir.join(&self.wordlist.path),
            None => self.wordlist.path.clone(),
        }
    }

    /// Address the server binds to.
    pub fn bind_address(&self) -> &SocketAddr {
        &self.net.bind
    }

    /// Set the address the server binds to.
    pub fn set_bind_address(&mut self, addr: SocketAddr) {
        self.net.bind = addr;
    }
}

/// Word list configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordlistConfig {
    /// Path to a 7776 word diceware word list.
    pub path: PathBuf,
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("eff_large_wordlist.txt"),
        }
    }
}

/// Passphrase generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Number of words when the request does not specify one.
    pub words: usize,

    /// Upper bound on the per-request word count.
    pub max_words: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS,
            max_words: 64,
        }
    }
}

/// Server network configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Bind address for the server.
    pub bind: SocketAddr,

    /// SSL configuration.
    pub ssl: SslConfig,

    /// Configuration for CORS.
    pub cors: Option<CorsConfig>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::new(
                IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
                5057,
            ),
            ssl: Default::default(),
            cors: None,
        }
    }
}

/// Server SSL configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SslConfig {
    /// Default HTTP transport.
    #[default]
    None,
    /// Configuration for TLS certificate and private key.
    Tls(TlsConfig),
}

/// Certificate and key for TLS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Path to the certificate.
    pub cert: PathBuf,
    /// Path to the certificate key file.
    pub key: PathBuf,
}

/// Configuration for CORS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// List of additional CORS origins for the server.
    ///
    /// When empty every origin is allowed, matching the behavior
    /// of a public passphrase endpoint.
    pub origins: Vec<Url>,
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;
    use std::io::Write;

    #[test]
    fn config_default_round_trip() -> Result<()> {
        let config = ServerConfig::default();
        let content = toml::to_string_pretty(&config)?;
        let parsed: ServerConfig = toml::from_str(&content)?;
        assert_eq!(config.generate.words, parsed.generate.words);
        assert_eq!(config.net.bind, parsed.net.bind);
        assert_eq!(config.wordlist.path, parsed.wordlist.path);
        Ok(())
    }

    #[test]
    fn config_load_resolves_relative_wordlist() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&config_path)?;
        writeln!(file, "[wordlist]")?;
        writeln!(file, "path = \"words.txt\"")?;
        writeln!(file, "[generate]")?;
        writeln!(file, "words = 6")?;

        let config = ServerConfig::load(&config_path)?;
        assert_eq!(dir.path().join("words.txt"), config.wordlist_path());
        assert_eq!(6, config.generate.words);
        Ok(())
    }

    #[test]
    fn config_absolute_wordlist_unchanged() {
        let mut config = ServerConfig::default();
        config.wordlist.path = PathBuf::from("/opt/words.txt");
        assert_eq!(
            PathBuf::from("/opt/words.txt"),
            config.wordlist_path()
        );
    }
}
