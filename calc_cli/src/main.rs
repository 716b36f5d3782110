//! Reckon CLI - everyday calculators and unit conversion from the terminal
//!
//! # Commands
//!
//! - `reckon convert 10 km mi` - Convert a value between two units
//! - `reckon distance 51.47 -0.45 40.64 -73.78` - Great-circle distance
//! - `reckon notice 2024-01-31 1 --unit months` - Notice period end date
//! - `reckon run trip.json` - Evaluate a worksheet of calculations
//!
//! Every calculator subcommand builds a [`calc_core::CalculationItem`], so the
//! terminal and worksheets share one evaluation path.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod render;

use config::{CliConfig, OutputFormat};
pub use error::{CliError, Result};

/// Everyday calculators and unit converters
#[derive(Parser)]
#[command(name = "reckon")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "RECKON_CONFIG", default_value = "reckon.toml")]
    config: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Convert a value between two units (quantity inferred unless given)
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
        to: String,

        /// length, volume, speed, force, time, angle, flow_rate, data_rate, mass, area, temperature
        #[arg(short, long)]
        quantity: Option<String>,
    },

    /// List the units of a quantity, or convert one value to all of them
    Units {
        quantity: Option<String>,

        /// Value to express in every unit (requires --from)
        #[arg(long, allow_hyphen_values = true, requires = "from")]
        value: Option<f64>,

        #[arg(long)]
        from: Option<String>,
    },

    /// Great-circle distance between two latitude/longitude points
    Distance {
        #[arg(allow_hyphen_values = true)]
        lat1: f64,
        #[arg(allow_hyphen_values = true)]
        lon1: f64,
        #[arg(allow_hyphen_values = true)]
        lat2: f64,
        #[arg(allow_hyphen_values = true)]
        lon2: f64,

        /// Sphere radius in km (default from config)
        #[arg(long)]
        radius_km: Option<f64>,
    },

    /// Hiking time by Naismith's Rule
    Hike {
        distance_km: f64,
        #[arg(default_value_t = 0.0)]
        ascent_m: f64,

        #[arg(long, default_value_t = 5.0)]
        pace_kmh: f64,

        #[arg(long, default_value_t = 600.0)]
        ascent_rate: f64,
    },

    /// Solve |ax + b| = c
    AbsEq {
        #[arg(allow_hyphen_values = true)]
        a: f64,
        #[arg(allow_hyphen_values = true)]
        b: f64,
        #[arg(allow_hyphen_values = true)]
        c: f64,
    },

    /// Solve |ax + b| <op> c with op one of < <= > >=
    AbsIneq {
        #[arg(allow_hyphen_values = true)]
        a: f64,
        #[arg(allow_hyphen_values = true)]
        b: f64,
        op: String,
        #[arg(allow_hyphen_values = true)]
        c: f64,
    },

    /// Add, subtract or multiply two polynomials
    Poly {
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        second: String,

        /// add, subtract or multiply
        #[arg(short, long, default_value = "add")]
        op: String,

        /// Evaluate the result at this x
        #[arg(long, allow_hyphen_values = true)]
        at: Option<f64>,
    },

    /// Apply a percentage increase over N periods
    Compound {
        #[arg(allow_hyphen_values = true)]
        initial: f64,
        rate_percent: f64,
        periods: u32,
    },

    /// Doubling time for a growth rate
    Doubling { rate_percent: f64 },

    /// Savings between an original and a sale price
    Discount { original: f64, sale: f64 },

    /// Percentage questions
    Percent {
        #[command(subcommand)]
        mode: PercentMode,
    },

    /// Integer-order Bessel function J or Y
    Bessel {
        /// J or Y
        kind: String,
        #[arg(allow_hyphen_values = true)]
        order: i32,
        #[arg(allow_hyphen_values = true)]
        x: f64,
    },

    /// Days and nights of a trip (dates inclusive)
    Travel { start: String, end: String },

    /// Time between an arrival and a departure
    Layover {
        /// YYYY-MM-DDTHH:MM
        arrival: String,
        /// YYYY-MM-DDTHH:MM
        departure: String,

        /// Minimum connection time in minutes
        #[arg(long)]
        min: Option<u32>,
    },

    /// End date of a notice period
    Notice {
        start: String,
        length: u32,

        /// days, weeks, months or working_days
        #[arg(short, long, default_value = "days")]
        unit: String,
    },

    /// Day-by-day schedule of an on/off shift rotation
    Shift {
        /// First on-day of the rotation
        rotation_start: String,
        days_on: u32,
        days_off: u32,
        range_start: String,
        range_end: String,
    },

    /// What recurring spending would grow to if invested
    Opportunity {
        amount: f64,

        /// daily, weekly, monthly or yearly
        #[arg(short, long, default_value = "daily")]
        frequency: String,

        /// Expected annual return, percent
        #[arg(short, long, default_value_t = 7.0)]
        return_percent: f64,

        /// Comma-separated horizons in years (default from config)
        #[arg(long, value_delimiter = ',')]
        horizons: Vec<u32>,
    },

    /// Compound interest with optional periodic contributions
    Interest {
        principal: f64,
        annual_rate_percent: f64,
        years: f64,

        /// Compounding periods per year
        #[arg(short = 'n', long, default_value_t = 12)]
        compounds: u32,

        /// Deposit at the end of each period
        #[arg(long, default_value_t = 0.0)]
        contribution: f64,
    },

    /// Evaluate every calculation in a worksheet file
    Run {
        worksheet: PathBuf,

        /// Also write the JSON report here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub(crate) enum PercentMode {
    /// What is P% of B?
    Of {
        #[arg(allow_hyphen_values = true)]
        percent: f64,
        #[arg(allow_hyphen_values = true)]
        base: f64,
    },
    /// PART is what percent of WHOLE?
    What {
        #[arg(allow_hyphen_values = true)]
        part: f64,
        #[arg(allow_hyphen_values = true)]
        whole: f64,
    },
    /// Percent change from FROM to TO
    Change {
        #[arg(allow_hyphen_values = true)]
        from: f64,
        #[arg(allow_hyphen_values = true)]
        to: f64,
    },
    /// Percent difference between A and B
    Diff {
        #[arg(allow_hyphen_values = true)]
        a: f64,
        #[arg(allow_hyphen_values = true)]
        b: f64,
    },
}

/// Level comes from RUST_LOG, else the config, raised to debug by --verbose
fn init_tracing(config: &CliConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load_with_env_and_validate(&cli.config)?;
    if cli.json {
        config.format = OutputFormat::Json;
    }
    init_tracing(&config, cli.verbose);
    debug!(?config, path = %cli.config.display(), "configuration loaded");

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Units { quantity, value, from } => commands::units(&config, quantity.as_deref(), value, from),
        Commands::Run { worksheet, output } => commands::run_worksheet(&config, &worksheet, output.as_deref()),
        other => {
            let item = commands::build_item(other, &config)?;
            commands::evaluate(&config, &item)
        }
    }
}
