use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use abacus::core::config::{self, AbacusConfig, CliOverrides};
use abacus::core::greeter::{GreetStyle, Greeter};
use abacus::core::utils::format_number;
use abacus::{Calculator, repl};

#[derive(Parser, Debug)]
#[command(name = "abacus", version, about = "Stateful calculator with an interactive shell")]
struct Args {
    /// Starting value of the session calculator
    #[arg(long, allow_negative_numbers = true)]
    initial: Option<f64>,

    /// Decimal places shown for results
    #[arg(long)]
    precision: Option<u32>,

    /// Keep at most this many history entries
    #[arg(long)]
    history_limit: Option<usize>,

    /// Evaluate one expression, print the result and exit
    #[arg(short, long, value_name = "EXPR", allow_hyphen_values = true)]
    eval: Option<String>,

    /// Print a greeting for NAME and exit
    #[arg(long, value_name = "NAME", conflicts_with = "eval")]
    greet: Option<String>,

    /// Greeting style used with --greet
    #[arg(long, default_value_t, value_enum)]
    style: GreetStyle,

    /// Skip the start-up banner
    #[arg(long)]
    no_banner: bool,

    /// Config file to use instead of ~/.abacus/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize file logger - writes to ~/.abacus/abacus.log so stdout stays clean for the shell
fn init_logging(verbose: bool) {
    let Some(dir) = config::config_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Ok(log_file) = File::create(dir.join("abacus.log")) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();
    init_logging(args.verbose);

    info!("Abacus {} starting up", env!("CARGO_PKG_VERSION"));

    if let Some(name) = args.greet {
        return match Greeter::new(name) {
            Ok(greeter) => {
                println!("{}", greeter.greet(args.style));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        warn!("{e}; falling back to defaults");
        eprintln!("warning: {e}; using defaults");
        AbacusConfig::default()
    });

    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            initial_value: args.initial,
            precision: args.precision,
            history_limit: args.history_limit,
            show_banner: args.no_banner.then_some(false),
        },
    );

    if let Some(expression) = args.eval {
        return match Calculator::compute(&expression) {
            Ok(value) => {
                println!("{}", format_number(value, resolved.calculator.precision));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match repl::run(&resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
