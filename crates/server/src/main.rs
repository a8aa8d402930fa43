use colored::Colorize;
use dicepass_server::Result;

#[tokio::main]
async fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "dicepass=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    if let Err(e) = cli::run().await {
        eprintln!("{} {}", "error:".red(), e);
        std::process::exit(1);
    }

    Ok(())
}

mod cli {
    use crate::Result;
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Parser, Debug)]
    #[clap(name = "dicepass-server", author, version, about, long_about = None)]
    pub struct DicepassServer {
        #[clap(subcommand)]
        cmd: Command,
    }

    #[derive(Debug, Subcommand)]
    pub enum Command {
        /// Create a configuration file.
        Init {
            /// Path to the word list file.
            #[clap(short, long)]
            wordlist: Option<PathBuf>,

            /// Config file to write.
            config: PathBuf,
        },
        /// Start a server.
        Start {
            /// Bind to host:port.
            #[clap(short, long)]
            bind: Option<String>,

            /// Config file to load.
            config: PathBuf,
        },
    }

    pub async fn run() -> Result<()> {
        let args = DicepassServer::parse();

        match args.cmd {
            Command::Init { config, wordlist } => {
                service::init(config, wordlist)?;
            }
            Command::Start { bind, config } => {
                service::start(bind, config).await?;
            }
        }

        Ok(())
    }

    mod service {
        use axum_server::Handle;
        use dicepass_server::{
            Error, Result, Server, ServerConfig, State, WordlistConfig,
        };
        use std::{net::SocketAddr, path::PathBuf, str::FromStr, sync::Arc};

        /// Initialize default server configuration.
        pub fn init(
            output: PathBuf,
            mut wordlist: Option<PathBuf>,
        ) -> Result<()> {
            if output.exists() {
                return Err(Error::FileExists(output));
            }

            let mut config: ServerConfig = Default::default();
            if let Some(path) = wordlist.take() {
                config.wordlist = WordlistConfig { path };
            }

            let content = toml::to_string_pretty(&config)?;
            std::fs::write(output, content.as_bytes())?;
            Ok(())
        }

        /// Start a web server.
        pub async fn start(
            bind: Option<String>,
            config: PathBuf,
        ) -> Result<()> {
            let mut config = ServerConfig::load(&config)?;

            if let Some(bind) = bind {
                let addr = SocketAddr::from_str(&bind)?;
                config.set_bind_address(addr);
            }

            let state = Arc::new(State::new(config)?);

            let handle = Handle::new();
            let server = Server;
            server.start(state, handle).await?;
            Ok(())
        }
    }
}
