//! ecotrip: command-line front end for the EcoTrip emission estimator.
//!
//! ```text
//! ecotrip calc "São Paulo, SP" "Rio de Janeiro, RJ" --mode bus
//! ecotrip calc "Curitiba" "Sinop" --mode car --distance 2340 --json
//! ecotrip cities
//! ecotrip lookup "Brasilia, DF" "goiania, go"
//! ecotrip batch trips.csv --out ./out
//! ```
//!
//! Log level comes from `--verbose` or `ECOTRIP_LOG` (`error` … `trace`).

mod batch;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use et_calc::{CalculatorBuilder, NoopObserver, RawForm};
use et_output::messages::{PAY_STUB, ROUTE_NOT_FOUND, submit_message};
use et_output::{TextObserver, format_number};
use et_routes::RouteIndex;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about = "Estimate trip CO₂ emissions and carbon credit costs", long_about = None)]
struct Cli {
    /// Log debug output (overrides ECOTRIP_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level when --verbose is not given
    #[arg(long, env = "ECOTRIP_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the emissions of one trip
    Calc {
        origin:      String,
        destination: String,
        /// Transport mode: bicycle, car, bus, or truck
        #[arg(short, long)]
        mode:        Option<String>,
        /// Distance in km; implies --manual
        #[arg(short, long)]
        distance:    Option<String>,
        /// Use the given distance instead of the route table
        #[arg(long)]
        manual:      bool,
        /// Print the result as JSON
        #[arg(long)]
        json:        bool,
        /// Artificial delay before the result, in milliseconds
        #[arg(long, env = "ECOTRIP_LATENCY_MS", default_value_t = 0)]
        latency_ms:  u64,
    },
    /// List every city in the built-in route table
    Cities,
    /// Look up the road distance between two cities
    Lookup { origin: String, destination: String },
    /// Estimate every trip in a CSV file and export the results
    Batch {
        /// CSV with columns origin,destination,distance,mode,manual
        input: PathBuf,
        /// Directory for results.csv and comparison.csv
        #[arg(short, long, default_value = ".")]
        out:   PathBuf,
    },
    /// Buy carbon credits for a trip
    Pay,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        cli.log_level
            .parse()
            .map_err(|_| anyhow!("invalid log level '{}'", cli.log_level))?
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    match cli.command {
        Commands::Calc { origin, destination, mode, distance, manual, json, latency_ms } => {
            let manual = manual || distance.is_some();
            let mut form = RawForm::new(origin, destination, distance.unwrap_or_default(), mode.as_deref());
            if manual {
                form = form.manual();
            }
            calc(&form, Duration::from_millis(latency_ms), json)
        }
        Commands::Cities => {
            for city in RouteIndex::brazil().all_cities() {
                println!("{city}");
            }
            Ok(())
        }
        Commands::Lookup { origin, destination } => {
            match RouteIndex::brazil().find_distance(&origin, &destination) {
                Some(km) => {
                    println!("{origin} ➝ {destination}: {} km", format_number(km, 0));
                    Ok(())
                }
                None => Err(anyhow!(ROUTE_NOT_FOUND)),
            }
        }
        Commands::Batch { input, out } => batch::run(&input, &out),
        Commands::Pay => {
            println!("{PAY_STUB}");
            Ok(())
        }
    }
}

// ── Single trip ───────────────────────────────────────────────────────────────

fn calc(form: &RawForm, latency: Duration, json: bool) -> Result<()> {
    let calc = CalculatorBuilder::new().simulated_latency(latency).build()?;

    if json {
        let result = calc
            .submit(form, &mut NoopObserver)
            .map_err(|e| anyhow!(submit_message(&e)))?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let mut obs = TextObserver::new();
    let outcome = calc.submit(form, &mut obs);
    for msg in &obs.messages {
        eprintln!("{msg}");
    }
    match outcome {
        Ok(_) => {
            for report in &obs.reports {
                println!("{report}");
            }
            Ok(())
        }
        Err(e) => Err(anyhow!(submit_message(&e))),
    }
}
