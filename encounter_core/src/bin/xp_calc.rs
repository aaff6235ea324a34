//! Command-line front end for the encounter XP engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use encounter_core::prelude::*;
use encounter_core::EngineConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use xp_tables_core::{init_rules, init_rules_default};

#[derive(Parser)]
#[command(name = "xp_calc", version, about = "Encounter XP budgets for the 2024 and 2014 rules")]
struct Cli {
    /// Engine configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate the total XP of an encounter
    Calculate {
        /// Ruleset: 2024 or 2014
        #[arg(long)]
        ruleset: String,
        /// Difficulty label valid for the ruleset
        #[arg(long)]
        difficulty: String,
        /// Comma-separated character levels
        #[arg(long, value_delimiter = ',', conflicts_with = "same_level")]
        levels: Vec<i32>,
        /// Level shared by every character
        #[arg(long)]
        same_level: Option<i32>,
        /// Number of characters at --same-level
        #[arg(long, default_value_t = 1, requires = "same_level")]
        count: i32,
        /// Number of monsters (2014 only)
        #[arg(long)]
        monsters: Option<i32>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the difficulties of a ruleset
    Difficulties { ruleset: String },
    /// List supported character levels
    Levels,
    /// Show the 2014 monster-count multipliers
    Multipliers,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load_from_path(path)
            .with_context(|| format!("loading engine config from {:?}", path))?,
        None => EngineConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &config.rules_path {
        Some(path) => init_rules(path)?,
        None => init_rules_default()?,
    }
    tracing::debug!("Rules tables initialized");

    let service = EncounterService::with_config(rules(), config);
    let queries = QueryHandler::new(rules());

    match cli.command {
        Command::Calculate {
            ruleset,
            difficulty,
            levels,
            same_level,
            count,
            monsters,
            json,
        } => {
            let composition = match same_level {
                Some(level) => PartyComposition::Same { level, count },
                None => PartyComposition::Different { levels },
            };
            service.validate_composition(&composition)?;

            let request = CalculateXpRequest {
                ruleset,
                party_mode: composition.mode().to_string(),
                difficulty,
                character_levels: composition.levels(service.config().max_party_size),
                num_monsters: monsters,
            };
            let result = service.calculate_xp(&request)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Ruleset:    {}", result.ruleset);
                println!(
                    "Party:      {} characters {:?}",
                    result.party_size, result.character_levels
                );
                println!("Total XP:   {}", result.total_xp);
                if let Some(difficulty) = result.calculated_difficulty {
                    println!("Difficulty: {}", difficulty);
                }
            }
        }
        Command::Difficulties { ruleset } => {
            for label in service.available_difficulties(&ruleset)? {
                println!("{}", label);
            }
        }
        Command::Levels => {
            for option in queries.level_options() {
                println!("{:>2}  {}", option.value, option.label);
            }
        }
        Command::Multipliers => {
            for band in queries.multiplier_ranges() {
                println!("up to {:>2} monsters  x{}", band.max_monsters, band.multiplier);
            }
        }
    }

    Ok(())
}
