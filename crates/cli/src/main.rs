//! Value predictor trace replay CLI.
//!
//! This binary provides a single entry point for exercising the predictor. It performs:
//! 1. **Trace run:** Replay a value trace through an FCM predictor and report statistics.
//! 2. **Config dump:** Print the effective configuration as JSON.

use clap::{Parser, Subcommand};
use std::{fs, process};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vpsim_core::Simulator;
use vpsim_core::config::Config;
use vpsim_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "vpsim",
    author,
    version,
    about = "FCM value predictor trace replay",
    long_about = "Replay a value trace (one `<pc> <value>` record per line) through a Finite Context Method value predictor.\n\nExamples:\n  vpsim run -t traces/loop.trace\n  vpsim run -t traces/loop.trace --config fcm.json --json\n  vpsim config"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a value trace and print prediction statistics.
    Run {
        /// Value trace to replay.
        #[arg(short, long)]
        trace: String,

        /// JSON configuration file (defaults are used when omitted).
        #[arg(short, long)]
        config: Option<String>,

        /// Print statistics as JSON instead of the text report.
        #[arg(long)]
        json: bool,

        /// Report sections to print (summary, vpu); all when omitted.
        #[arg(long, value_delimiter = ',')]
        sections: Vec<String>,
    },

    /// Print the effective configuration as JSON.
    Config {
        /// JSON configuration file to validate and echo.
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            trace,
            config,
            json,
            sections,
        } => cmd_run(&trace, config.as_deref(), json, &sections),
        Commands::Config { config } => cmd_config(config.as_deref()),
    }
}

/// Prints `msg` as a fatal error and exits with status 1.
fn fatal(msg: impl std::fmt::Display) -> ! {
    eprintln!("[!] FATAL: {msg}");
    process::exit(1);
}

/// Loads the configuration at `path`, or the defaults when no path is given.
///
/// Exits the process if the file cannot be read or fails validation.
fn load_config(path: Option<&str>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| fatal(format!("Could not read config '{path}': {e}")));
    Config::from_json(&json).unwrap_or_else(|e| fatal(format!("{path}: {e}")))
}

/// Replays a trace through an FCM predictor and prints the statistics.
fn cmd_run(trace_path: &str, config_path: Option<&str>, json: bool, sections: &[String]) {
    let config = load_config(config_path);

    let records = loader::load_trace(trace_path)
        .unwrap_or_else(|e| fatal(format!("{trace_path}: {e}")));

    let mut sim = Simulator::from_config(&config).unwrap_or_else(|e| fatal(e));

    if !json {
        println!(
            "Configuration: history_length={} history_table_size={} vpt_size={} ctr_bits={}",
            config.vpu.history_length,
            config.vpu.history_table_size,
            config.vpu.value_predictor_table_size,
            config.vpu.ctr_bits
        );
        println!("[*] Trace: {} ({} records)", trace_path, records.len());
        println!();
    }

    info!(records = records.len(), trace = trace_path, "replaying trace");
    let stats = sim.run(&records);

    if json {
        match serde_json::to_string_pretty(stats) {
            Ok(out) => println!("{out}"),
            Err(e) => fatal(e),
        }
    } else {
        stats.print_sections(sections);
    }
}

/// Prints the effective configuration as JSON.
fn cmd_config(config_path: Option<&str>) {
    let config = load_config(config_path);
    match serde_json::to_string_pretty(&config) {
        Ok(out) => println!("{out}"),
        Err(e) => fatal(e),
    }
}
