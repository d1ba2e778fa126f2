//! Persisted-default handlers for `set` and `get`.

use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;

use crate::core::Config;

/// Execute the `set` command
pub fn execute_set(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("interval", sub_matches)) => {
            let interval = *sub_matches.get_one::<u64>("ms").expect("ms is required");

            let mut config = Config::load()?;
            config.set_refresh_interval(interval);
            config.save()?;

            println!("Refresh interval set to: {}", format!("{}ms", interval).cyan().bold());
        }
        Some(("feed", sub_matches)) => {
            let path = sub_matches.get_one::<String>("path").expect("path is required");

            if !std::path::Path::new(path).exists() {
                println!("Warning: Path '{}' does not exist", path);
            }

            let mut config = Config::load()?;
            config.set_feed_path(path.clone());
            config.save()?;

            println!("Observation feed set to: {}", path.cyan().bold());
        }
        _ => {
            println!("Use 'netlens set --help' for more information.");
        }
    }

    Ok(())
}

/// Execute the `get` command
pub fn execute_get(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("interval", _)) => {
            let config = Config::load()?;

            match config.get_refresh_interval() {
                Some(interval) => {
                    println!("{}", "Refresh interval:".white());
                    println!("{}", format!("{}ms", interval).cyan().bold());
                }
                None => {
                    println!("{}", "No refresh interval configured.".yellow());
                    println!();
                    println!("{}", "To set one, run:".white());
                    println!("  {}", "netlens set interval <ms>".cyan().bold());
                }
            }
        }
        Some(("feed", _)) => {
            let config = Config::load()?;

            match config.get_feed_path() {
                Some(path) => {
                    println!("{}", "Observation feed:".white());
                    println!("{}", path.cyan().bold());
                }
                None => {
                    println!("{}", "No observation feed configured (stdin is used).".yellow());
                    println!();
                    println!("{}", "To set one, run:".white());
                    println!("  {}", "netlens set feed <path>".cyan().bold());
                }
            }
        }
        _ => {
            println!("Use 'netlens get --help' for more information.");
        }
    }

    Ok(())
}
