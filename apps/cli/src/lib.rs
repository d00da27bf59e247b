//! Terminal front-end for cloze review: a JSON item store, authoring
//! commands and an interactive review loop.

pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod review;
pub mod store;

use std::io::{self, Write};

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use cloze_core::LadderScheduler;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{item_query, Cli, Commands};
use crate::commands::{ItemEdit, NewItem};
use crate::config::Config;
use crate::store::ItemStore;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.store);
    let scheduler = LadderScheduler::default();

    let mut store = ItemStore::open(&config.store_path)
        .with_context(|| format!("failed to open {}", config.store_path.display()))?;
    store.validate(scheduler.ladder())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let now = Utc::now();

    match cli.command {
        Commands::Add {
            title,
            body,
            clozes,
            auto,
        } => {
            let new = NewItem {
                title,
                body,
                clozes,
                auto,
            };
            commands::add(&mut store, &scheduler, new, &mut rand::thread_rng(), now, &mut out)?;
        }
        Commands::List {
            status,
            band,
            search,
            sort,
        } => {
            let query = item_query(status, band, search, sort);
            let count = commands::list(&store, &scheduler, &query, now, &mut out)?;
            if count == 0 {
                writeln!(out, "No items.")?;
            }
        }
        Commands::Show { id } => commands::show(&store, &scheduler, id, now, &mut out)?,
        Commands::Edit {
            id,
            title,
            body,
            toggles,
        } => {
            let changes = ItemEdit {
                title,
                body,
                toggles,
            };
            commands::edit(&mut store, &scheduler, id, changes, &mut out)?;
        }
        Commands::Delete { id } => commands::delete(&mut store, id, &mut out)?,
        Commands::Stats => {
            commands::stats(&store, now, &mut out)?;
        }
        Commands::Review => {
            let stdin = io::stdin();
            let summary = review::run(&mut store, &scheduler, stdin.lock(), &mut out, Utc::now)?;
            writeln!(
                out,
                "Reviewed {} ({} correct, {} missed).",
                summary.reviewed(),
                summary.correct,
                summary.incorrect
            )?;
        }
    }

    Ok(())
}
