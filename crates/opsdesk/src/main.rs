// SPDX-FileCopyrightText: 2026 Opsdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Opsdesk - a back-office service-request tracker.
//!
//! This is the binary entry point. Requests live in a single JSON slot
//! on disk; the `sweep` command applies the escalation rule across the
//! whole collection.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use opsdesk_store::{JsonFileStorage, RequestStore};

mod commands;

/// Opsdesk - a back-office service-request tracker.
#[derive(Parser, Debug)]
#[command(name = "opsdesk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a new service request.
    Submit {
        /// Short description of the request.
        title: String,
        /// Who is asking.
        #[arg(long, default_value = "unknown")]
        requester: String,
    },
    /// List all requests, newest first.
    List,
    /// Show one request in full, including escalation audit fields.
    Show {
        /// Request id.
        id: String,
    },
    /// Change the status of a request.
    SetStatus {
        /// Request id.
        id: String,
        /// New status (e.g. Approved, InProgress, Completed, Rejected).
        status: String,
    },
    /// Delete a request.
    Remove {
        /// Request id.
        id: String,
    },
    /// Re-evaluate every request against the escalation rule.
    Sweep,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match opsdesk_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            opsdesk_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.desk.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    let policy = match config.escalation.to_policy() {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("opsdesk: {e}");
            return ExitCode::FAILURE;
        }
    };

    let storage = Arc::new(JsonFileStorage::new(config.storage.data_path.clone()));
    let mut store = RequestStore::open(storage, policy).await;

    match cli.command {
        Some(Commands::Submit { title, requester }) => {
            commands::submit(&mut store, title, requester).await
        }
        Some(Commands::List) => commands::list(&store),
        Some(Commands::Show { id }) => commands::show(&store, &id),
        Some(Commands::SetStatus { id, status }) => {
            commands::set_status(&mut store, &id, &status).await
        }
        Some(Commands::Remove { id }) => commands::remove(&mut store, &id).await,
        Some(Commands::Sweep) => commands::sweep(&mut store).await,
        None => {
            println!("opsdesk: use --help for available commands");
            ExitCode::SUCCESS
        }
    }
}
