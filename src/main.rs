use anyhow::Result;
use clap::{Arg, Command};

use netlens::commands;

fn main() -> Result<()> {
    netlens::init_logging();

    let matches = Command::new("netlens")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Netlens Contributors")
        .about("Passive network-activity telemetry monitor")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("monitor")
                .about("Watch the observation feed in a live dashboard")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .value_name("FILE")
                        .help("Tail URL entries from FILE instead of reading stdin"),
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .value_name("MS")
                        .help("Dashboard refresh interval in milliseconds")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Stream snapshots as JSON lines instead of the TUI")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("set")
                .about("Set configuration values (use 'netlens set --help' for subcommands)")
                .long_about("Set configuration values\n\nUSAGE:\n    netlens set <SUBCOMMAND>\n\nSUBCOMMANDS:\n    interval    Set default refresh interval\n    feed        Set default observation feed file\n\nFor more information try --help")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("interval")
                        .about("Set default refresh interval in milliseconds")
                        .arg(
                            Arg::new("ms")
                                .help("Refresh interval in milliseconds")
                                .value_parser(clap::value_parser!(u64))
                                .required(true)
                                .index(1),
                        ),
                )
                .subcommand(
                    Command::new("feed")
                        .about("Set default observation feed file")
                        .arg(
                            Arg::new("path")
                                .help("Path to the observation feed file")
                                .required(true)
                                .index(1),
                        ),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Get configuration values (use 'netlens get --help' for subcommands)")
                .long_about("Get configuration values\n\nUSAGE:\n    netlens get <SUBCOMMAND>\n\nSUBCOMMANDS:\n    interval    Get default refresh interval\n    feed        Get default observation feed file\n\nFor more information try --help")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("interval").about("Get default refresh interval"))
                .subcommand(Command::new("feed").about("Get default observation feed file")),
        )
        .subcommand(Command::new("version").about("Shows version information"))
        .get_matches();

    if matches.get_flag("version") {
        println!("netlens version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match matches.subcommand() {
        Some(("monitor", sub_matches)) => commands::monitor::execute(sub_matches),
        Some(("set", sub_matches)) => commands::config::execute_set(sub_matches),
        Some(("get", sub_matches)) => commands::config::execute_get(sub_matches),
        Some(("version", _)) => {
            println!("netlens version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            println!("Welcome to netlens!");
            println!("Use 'netlens --help' for more information.");
            Ok(())
        }
    }
}
