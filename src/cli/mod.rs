use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;

pub mod ask;
pub mod chat;
pub mod history;
pub mod models;
pub mod quick;
pub mod reset;
pub mod show;

use crate::core::{AppConfig, logging};
use crate::store::{ChatStore, FileStorage, SharedStore};

#[derive(Subcommand)]
enum Command {
    /// Start an interactive chat session (the default)
    Chat {},
    /// Send one message in the current conversation and print the reply
    Ask {
        #[arg(long)]
        message: String,
        /// Route through web search (only for the turbo-capable model)
        #[arg(long, action, default_value = "false")]
        turbo: bool,
        /// Switch to this model key first
        #[arg(long)]
        model: Option<String>,
    },
    /// List previous conversations
    History {},
    /// Load a previous conversation and print it
    Show {
        #[arg(long)]
        id: String,
    },
    /// Ask the local model a one-off question outside any conversation
    Quick {
        #[arg(long)]
        message: String,
    },
    /// List the available models
    Models {},
    /// Forget the locally persisted chat state
    Reset {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the chat backend, overrides PARLEY_API_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Open the persisted store configured for this process
pub fn open_store(config: &AppConfig) -> Result<SharedStore> {
    let storage = Arc::new(FileStorage::new(config.storage_dir()));
    let store = ChatStore::with_storage(storage, &config.storage_name)
        .with_context(|| {
            format!(
                "Failed to load chat state from {}, run `parley reset` to start over",
                config.storage_path
            )
        })?;
    Ok(store.into_shared())
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    let mut config = AppConfig::default();
    if let Some(base_url) = &args.base_url {
        config = config.with_api_base_url(base_url);
    }

    let command = args.command.unwrap_or(Command::Chat {});

    // Keep the interactive session quiet unless asked otherwise
    let level = if matches!(command, Command::Chat {}) {
        "warn"
    } else {
        "info"
    };
    logging::init(level);
    tracing::debug!("Using backend at {}", config.api_base_url);

    // Handle each sub command
    match command {
        Command::Chat {} => {
            chat::run(&config).await?;
        }
        Command::Ask {
            message,
            turbo,
            model,
        } => {
            ask::run(&config, &message, turbo, model.as_deref()).await?;
        }
        Command::History {} => {
            history::run(&config).await?;
        }
        Command::Show { id } => {
            show::run(&config, &id).await?;
        }
        Command::Quick { message } => {
            quick::run(&config, &message).await?;
        }
        Command::Models {} => {
            models::run(&config)?;
        }
        Command::Reset {} => {
            reset::run(&config)?;
        }
    }

    Ok(())
}
