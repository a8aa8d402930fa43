//! Web server implementation.
use crate::{
    config::{ServerConfig, SslConfig, TlsConfig},
    handlers, Result,
};
use axum::{
    extract::Extension,
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use axum_server::{tls_rustls::RustlsConfig, Handle};
use colored::Colorize;
use dicepass_core::{wordlist, WordList};
use std::{net::SocketAddr, sync::Arc};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Server state shared by all requests.
pub struct State {
    /// The server configuration.
    pub config: ServerConfig,
    /// Validated word list loaded at startup.
    pub wordlist: WordList,
}

impl State {
    /// Create server state, loading and validating the word list.
    ///
    /// A word list of the wrong length fails here so the server
    /// refuses to start rather than serving weaker passphrases.
    pub fn new(config: ServerConfig) -> Result<Self> {
        let wordlist = wordlist::load_file(config.wordlist_path())?;
        Ok(Self { config, wordlist })
    }
}

/// Shared state for the server.
///
/// The word list is immutable after startup so no lock is required;
/// every request draws from its own random source.
pub type ServerState = Arc<State>;

/// Web server implementation.
pub struct Server;

impl Server {
    /// Start the server.
    pub async fn start(
        &self,
        state: ServerState,
        handle: Handle,
    ) -> Result<()> {
        let origins = Server::read_origins(&state)?;
        let ssl = state.config.net.ssl.clone();
        let addr = *state.config.bind_address();

        match ssl {
            SslConfig::Tls(tls) => {
                self.run_tls(addr, state, handle, origins, tls).await
            }
            SslConfig::None => {
                self.run(addr, state, handle, origins).await
            }
        }
    }

    /// Start the server running on HTTPS.
    async fn run_tls(
        &self,
        addr: SocketAddr,
        state: ServerState,
        handle: Handle,
        origins: Vec<HeaderValue>,
        tls: TlsConfig,
    ) -> Result<()> {
        let tls = RustlsConfig::from_pem_file(&tls.cert, &tls.key).await?;
        let app = Server::router(Arc::clone(&state), origins);

        self.startup_message(&addr, true);

        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }

    /// Start the server running on HTTP.
    async fn run(
        &self,
        addr: SocketAddr,
        state: ServerState,
        handle: Handle,
        origins: Vec<HeaderValue>,
    ) -> Result<()> {
        let app = Server::router(Arc::clone(&state), origins);

        self.startup_message(&addr, false);

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }

    fn startup_message(&self, addr: &SocketAddr, tls: bool) {
        let now = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default();
        println!("Started        {}", now.yellow());
        println!("Listen         {}", addr.to_string().yellow());
        println!("TLS enabled    {}", tls.to_string().yellow());
    }

    fn read_origins(state: &State) -> Result<Vec<HeaderValue>> {
        let mut origins = Vec::new();
        if let Some(cors) = state.config.net.cors.as_ref() {
            for url in cors.origins.iter() {
                origins.push(HeaderValue::from_str(
                    url.as_str().trim_end_matches('/'),
                )?);
            }
        }
        Ok(origins)
    }

    /// Build the router for the server.
    pub fn router(
        state: ServerState,
        origins: Vec<HeaderValue>,
    ) -> Router {
        let cors = if origins.is_empty() {
            // Public endpoint, any origin may fetch a passphrase.
            CorsLayer::new()
                .allow_methods(vec![Method::GET])
                .allow_origin(Any)
        } else {
            CorsLayer::new()
                .allow_methods(vec![Method::GET])
                .allow_origin(origins)
        };

        let v1 = Router::new()
            .route("/passphrase", get(handlers::generate))
            .layer(cors)
            .layer(
                TraceLayer::new_for_http()
                    .on_request(DefaultOnRequest::new().level(Level::TRACE))
                    .on_response(
                        DefaultOnResponse::new().level(Level::TRACE),
                    ),
            )
            .layer(Extension(state));

        Router::new()
            .route("/", get(handlers::home))
            .nest_service("/api/v1", v1)
    }
}
