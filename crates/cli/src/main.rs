//! Generate diceware passphrases on the command line.
use clap::Parser;
use colored::Colorize;
use dicepass_core::{estimate, passphrase, wordlist, Result};
use secrecy::ExposeSecret;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "dicepass", author, version, about, long_about = None)]
struct Dicepass {
    /// Path to a 7776 word diceware word list.
    #[clap(short = 'l', long, env = "DICEPASS_WORDLIST")]
    wordlist: PathBuf,

    /// Number of words in the passphrase.
    #[clap(short = 'w', long, default_value_t = passphrase::DEFAULT_WORDS)]
    words: usize,

    /// Number of passphrases to generate.
    #[clap(short, long, default_value_t = 1)]
    count: usize,

    /// Print entropy statistics.
    #[clap(short, long)]
    stats: bool,

    /// Attempts per second assumed by the crack time estimate.
    #[clap(long, default_value_t = estimate::DEFAULT_ATTEMPTS_PER_SECOND)]
    attempts_per_second: f64,
}

fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "dicepass=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    if let Err(e) = run() {
        eprintln!("{} {}", "error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Dicepass::parse();
    let word_list = wordlist::load_file(&args.wordlist)?;

    for _ in 0..args.count {
        let (secret, _) =
            passphrase::generate_passphrase_words(&word_list, args.words)?;
        println!("{}", secret.expose_secret());
    }

    if args.stats {
        let combinations = estimate::combinations(args.words);
        println!(
            "{} {:.1} bits",
            "Entropy       ".yellow(),
            estimate::entropy_bits(args.words)
        );
        println!(
            "{} {}",
            "Combinations  ".yellow(),
            estimate::format_combinations(combinations)
        );
        println!(
            "{} {}",
            "Crack time    ".yellow(),
            estimate::crack_time(combinations, args.attempts_per_second)
        );
    }

    Ok(())
}
