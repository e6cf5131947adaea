#![warn(clippy::pedantic)]
#![cfg_attr(feature = "precommit-checks", deny(warnings, clippy::pedantic, clippy::dbg_macro))]
#![allow(clippy::collapsible_else_if)] // this is usually intentional

use std::path::PathBuf;
use std::{fs, io};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod profile;

/// Performance and navigation calculator for light aircraft.
///
/// Results are printed as JSON.
/// Lengths are in feet, speeds in feet per second, weights in pounds,
/// fuel in US gallons and times in minutes.
#[derive(clap::Parser)]
#[clap(version, about)]
struct Options {
    /// Log more details to stderr. Repeat for more.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Pretty-print the JSON output.
    #[clap(long, global = true)]
    pretty:  bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Takeoff distances and go/no-go decision.
    Takeoff(commands::TakeoffArgs),
    /// Time, fuel and distance to climb.
    Climb(commands::ClimbArgs),
    /// Wind correction, headings and ground speed.
    Course(commands::CourseArgs),
    /// Cruise true airspeed and fuel flow.
    Cruise(commands::CruiseArgs),
    /// Climb, cruise and descent of a complete leg.
    Trip(commands::TripArgs),
    /// Load a profile and report its contents and problems.
    Profile {
        #[clap(flatten)]
        profile: profile::ProfileArg,
    },
    /// Write the JSON schema of profile files.
    Schema {
        /// Output file. Defaults to stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let options = Options::parse();
    init_logging(options.verbose);

    let pretty = options.pretty;
    match options.command {
        Command::Takeoff(args) => emit(&commands::takeoff(&args)?, pretty),
        Command::Climb(args) => emit(&commands::climb(&args)?, pretty),
        Command::Course(args) => emit(&commands::course(&args)?, pretty),
        Command::Cruise(args) => emit(&commands::cruise(&args)?, pretty),
        Command::Trip(args) => emit(&commands::trip(&args)?, pretty),
        Command::Profile { profile } => emit(&profile::Summary::new(&profile.load()?), pretty),
        Command::Schema { output } => write_schema(output.as_deref()),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn emit(value: &impl serde::Serialize, pretty: bool) -> Result<()> {
    let stdout = io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(stdout, value)
    } else {
        serde_json::to_writer(stdout, value)
    }
    .context("write output")?;
    println!();
    Ok(())
}

fn write_schema(output: Option<&std::path::Path>) -> Result<()> {
    let schema = schemars::schema_for!(store::ProfileFile);
    let writer: Box<dyn io::Write> = match output {
        Some(path) => Box::new(io::BufWriter::new(
            fs::File::create(path).with_context(|| format!("create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    serde_json::to_writer_pretty(writer, &schema).context("write schema")?;
    Ok(())
}
