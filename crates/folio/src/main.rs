// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Folio - a portfolio assistant for the terminal.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod backend;
mod commands;
mod download;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use folio_config::FolioConfig;
use folio_contact::ContactForm;

/// Folio - a portfolio assistant for the terminal.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Chat with the assistant interactively.
    Chat,
    /// Ask a single question and print the reply.
    Ask {
        /// The question; multiple words are joined with spaces.
        #[arg(required = true)]
        utterance: Vec<String>,
    },
    /// Send a message through the contact form.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
    /// Validate the configuration and print a summary.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => folio_config::load_and_validate_path(path),
        None => folio_config::load_and_validate(),
    };
    let config: FolioConfig = match loaded {
        Ok(config) => config,
        Err(errors) => {
            folio_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.assistant.log_level);

    let result = match cli.command {
        Some(Commands::Chat) | None => shell::run_chat(config).await,
        Some(Commands::Ask { utterance }) => commands::run_ask(config, &utterance.join(" ")).await,
        Some(Commands::Contact { name, email, message }) => {
            commands::run_contact(config, ContactForm::new(name, email, message)).await
        }
        Some(Commands::Config) => {
            commands::run_config(&config);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// Logs go to stderr so replies on stdout stay clean.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("folio={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = folio_config::load_and_validate_str("").expect("default config should be valid");
        assert_eq!(config.assistant.name, "folio");
    }

    #[test]
    fn ask_joins_words() {
        let cli = Cli::parse_from(["folio", "ask", "what", "are", "your", "skills?"]);
        match cli.command {
            Some(Commands::Ask { utterance }) => assert_eq!(utterance.join(" "), "what are your skills?"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn contact_requires_all_fields() {
        assert!(Cli::try_parse_from(["folio", "contact", "--name", "Ada"]).is_err());
        assert!(
            Cli::try_parse_from(["folio", "contact", "--name", "Ada", "--email", "a@b.co", "--message", "hi"]).is_ok()
        );
    }
}
