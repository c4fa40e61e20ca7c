// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use spendlens::{cli, commands, mock, settings, store::TransactionStore};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn session_store(matches: &clap::ArgMatches) -> Result<TransactionStore> {
    let cfg = settings::load()?;
    let count = matches
        .get_one::<usize>("count")
        .copied()
        .unwrap_or(cfg.sample_size);
    let seed = matches
        .get_one::<u64>("seed")
        .copied()
        .or(cfg.seed)
        .unwrap_or_else(rand::random);
    info!(count, seed, "building session transaction log");
    Ok(mock::seeded_store(count, seed, chrono::Local::now().naive_local()))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("report", sub)) => commands::reports::handle(&session_store(&matches)?, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut session_store(&matches)?, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(&session_store(&matches)?, sub)?,
        Some(("settings", sub)) => commands::settings::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
