// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::print_stdout, clippy::print_stderr)]

//! `cubehub`: drive a headless cube from the terminal.
//!
//! Moves are clicked one animation apart; once input stops the idle trigger
//! unwinds them and the logo appears on the front face.

mod cli;
mod session;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use cubehub_app_core::config::ConfigService;
use cubehub_app_core::stopwatch::{format_time, SolveLog};
use cubehub_config_fs::FsConfigStore;
use cubehub_core::{parse_sequence, EngineConfig};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, EngineArgs};
use crate::session::{notation, run_session, scramble, turn_balance, Pace, SessionReport};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_target(false)
        .init();

    match &cli.command {
        Commands::Play { moves } => {
            let moves = parse_sequence(moves).context("could not parse moves")?;
            let config = effective_config(&cli.engine)?;
            let report = run_session(config, &moves, pace(&cli)).await?;
            print_report(&report, cli.json)
        }
        Commands::Scramble { moves, seed } => {
            let moves = scramble(*moves, *seed);
            let config = effective_config(&cli.engine)?;
            let report = run_session(config, &moves, pace(&cli)).await?;
            print_report(&report, cli.json)
        }
        Commands::Config { save } => {
            let config = effective_config(&cli.engine)?;
            if *save {
                ConfigService::new(open_store(&cli.engine)?)
                    .save_engine_config(&config)
                    .context("could not save engine config")?;
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Commands::Times { millis } => {
            print_times(millis);
            Ok(())
        }
    }
}

const fn pace(cli: &Cli) -> Pace {
    if cli.realtime {
        Pace::Realtime
    } else {
        Pace::Virtual
    }
}

fn open_store(args: &EngineArgs) -> Result<FsConfigStore> {
    let store = match &args.config_dir {
        Some(dir) => FsConfigStore::with_base(dir),
        None => FsConfigStore::new(),
    };
    store.context("could not open the config directory")
}

/// Stored config (or defaults when it is missing or unreadable) with the
/// command-line flags on top.
fn effective_config(args: &EngineArgs) -> Result<EngineConfig> {
    let stored = match open_store(args) {
        Ok(store) => ConfigService::new(store)
            .load_engine_config()
            .unwrap_or_else(|err| {
                warn!(%err, "stored engine config unusable; using defaults");
                EngineConfig::default()
            }),
        Err(err) => {
            warn!(%err, "using default engine config");
            EngineConfig::default()
        }
    };
    let config = args.apply(stored);
    config.validate().context("invalid engine configuration")?;
    Ok(config)
}

fn print_report(report: &SessionReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    let (positive, negative) = turn_balance(&report.played);
    println!(
        "played   {} ({positive} × +90°, {negative} × -90°)",
        notation(&report.played)
    );
    println!("replayed {}", notation(&report.replayed));
    println!(
        "at rest  {} ({})",
        format_time(Duration::from_millis(report.finished_ms)),
        if report.solved { "solved" } else { "NOT solved" }
    );
    for row in &report.front {
        println!("         {row}");
    }
    Ok(())
}

fn print_times(millis: &[u64]) {
    let mut log = SolveLog::new();
    for (i, ms) in millis.iter().enumerate() {
        let time = Duration::from_millis(*ms);
        log.record(time);
        println!("{:>3}. {}", i + 1, format_time(time));
    }
    let best = log.best().map_or_else(|| "-".to_string(), format_time);
    let ao5 = log.average_of_five().map_or_else(|| "-".to_string(), format_time);
    println!("best {best}  ao5 {ao5}");
}
