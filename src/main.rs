mod availability;
mod calendar;
mod clock;
mod commands;
pub mod config;
mod tui;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::availability::AvailabilityIndex;
use crate::clock::{Clock, SystemClock};

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "bookslot")]
#[command(
    about = "Terminal appointment booking",
    long_about = "Terminal appointment booking\n\nIf no command is specified, the program starts the interactive booking widget."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the calendar grid for a month
    Month {
        /// Month in YYYY-MM format (optional, defaults to the current month)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List free and booked time slots for a date
    Slots {
        /// Date in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!(
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    );
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("time_format: {}", cfg.time_format);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("booked_fg: {:?}", cfg.theme.booked_fg);
    println!(
        "unfocused_selection_fg: {:?}{}",
        cfg.theme.unfocused_selection_fg(),
        if cfg.theme.unfocused_selection_fg.is_none() {
            " (auto: 50% darker)"
        } else {
            ""
        }
    );
    println!();
    if cfg.booked.is_empty() {
        println!("booked: none configured (demo seed: today, 10:00 AM and 01:00 PM)");
    } else {
        for entry in &cfg.booked {
            println!("booked: {} -> {}", entry.date, entry.slots.join(", "));
        }
    }
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Build the availability index: configured entries, or the demo seed when
/// the config carries none.
fn build_availability(config: &config::Config, clock: &dyn Clock) -> AvailabilityIndex {
    if config.booked.is_empty() {
        AvailabilityIndex::seeded(clock.today())
    } else {
        AvailabilityIndex::from_entries(&config.booked)
    }
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(
    command: Commands,
    config: &config::Config,
    clock: &dyn Clock,
) -> anyhow::Result<()> {
    let availability = build_availability(config, clock);
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Month { date } => {
            let month = commands::parse_month(date, clock.today())?;
            commands::month::run(month, &availability, clock.today())
        }
        Commands::Slots { date } => {
            let date = commands::parse_date(date, clock.today())?;
            commands::slots::run(date, &availability)
        }
    }
}

fn main() {
    let config = config::read();
    let cli = Cli::parse();
    let clock = SystemClock;

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // If no subcommand, run the interactive widget
    if cli.command.is_none() {
        let availability = build_availability(&config, &clock);
        if let Err(e) = tui::run(config, availability, &clock) {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let command = match cli.command {
        Some(command) => command,
        None => return,
    };

    // Handle Config command separately (doesn't touch the clock)
    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    if let Err(e) = execute_command(command, &config, &clock) {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
