// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cubehub_core::EngineConfig;

#[derive(Parser, Debug)]
#[command(
    name = "cubehub",
    version,
    about = "Headless CubeHub: turn layers, then watch the idle auto-solve unwind them",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Sleep through animations and the idle timeout on the wall clock
    /// instead of a virtual one.
    #[arg(long, global = true)]
    pub realtime: bool,

    /// Print the session report as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Click the given moves in order, e.g. "R U R' U'".
    Play {
        /// Whitespace-separated face letters; a trailing `'` reverses the click direction.
        moves: String,
    },
    /// Click a pseudo-random sequence.
    Scramble {
        /// Number of clicks.
        #[arg(long, default_value_t = 20)]
        moves: usize,
        /// PRNG seed; the same seed always produces the same sequence.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Print the effective engine configuration.
    Config {
        /// Persist it to the config directory.
        #[arg(long)]
        save: bool,
    },
    /// Format solve times and compute the average of five.
    Times {
        /// Solve times in milliseconds, oldest first.
        #[arg(required = true)]
        millis: Vec<u64>,
    },
}

/// Engine overrides layered on top of the stored configuration.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct EngineArgs {
    /// Distance between cubie centres.
    #[arg(long, global = true)]
    pub spacing: Option<f32>,
    /// Animation duration per rotation, in milliseconds.
    #[arg(long, global = true)]
    pub animation_ms: Option<u64>,
    /// Quiet interval before the auto-solve, in milliseconds.
    #[arg(long = "idle-ms", global = true)]
    pub idle_timeout_ms: Option<u64>,
    /// Read and write configuration here instead of the platform config directory.
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}

impl EngineArgs {
    /// `base` with every flag that was given applied on top.
    pub fn apply(&self, base: EngineConfig) -> EngineConfig {
        EngineConfig {
            spacing: self.spacing.unwrap_or(base.spacing),
            animation_ms: self.animation_ms.unwrap_or(base.animation_ms),
            idle_timeout_ms: self.idle_timeout_ms.unwrap_or(base.idle_timeout_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_takes_notation_as_one_argument() {
        let cli = Cli::try_parse_from(["cubehub", "play", "R U R' U'"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Play {
                moves: "R U R' U'".into()
            }
        );
        assert!(!cli.realtime);
        assert_eq!(cli.engine, EngineArgs::default());
    }

    #[test]
    fn scramble_defaults() {
        let cli = Cli::try_parse_from(["cubehub", "scramble"]).unwrap();
        assert_eq!(cli.command, Commands::Scramble { moves: 20, seed: 0 });
    }

    #[test]
    fn engine_flags_work_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "cubehub",
            "scramble",
            "--moves",
            "5",
            "--idle-ms",
            "1000",
            "--animation-ms",
            "50",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        let config = cli.engine.apply(EngineConfig::default());
        assert_eq!(config.idle_timeout_ms, 1_000);
        assert_eq!(config.animation_ms, 50);
        assert!((config.spacing - 70.0).abs() < f32::EPSILON);
    }

    #[test]
    fn times_requires_values() {
        assert!(Cli::try_parse_from(["cubehub", "times"]).is_err());
        let cli = Cli::try_parse_from(["cubehub", "times", "1000", "2000"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Times {
                millis: vec![1_000, 2_000]
            }
        );
    }
}
