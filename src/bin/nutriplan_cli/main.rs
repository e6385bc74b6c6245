// ABOUTME: Nutriplan CLI - command-line front end for the energy expenditure engine
// ABOUTME: Computes energy plans from JSON and runs the individual calculators from flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full plan from a request file (or `-` for stdin)
//! nutriplan-cli plan --input patient.json --pretty
//!
//! # BMR with a specific formula
//! nutriplan-cli bmr --formula harris_benedict_1984 --weight 80 --height 180 --age 30 --sex male
//!
//! # Age on a reference date
//! nutriplan-cli age --birth 1990-06-15 --reference 2024-06-14
//!
//! # Body mass index and waist-hip ratio
//! nutriplan-cli bmi --weight 70 --height 175
//! nutriplan-cli whr --waist 80 --hip 100
//!
//! # List supported formulas
//! nutriplan-cli formulas
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nutriplan::{config::EngineConfig, errors::AppResult, logging::LoggingConfig};
use std::process::ExitCode;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "Nutriplan energy expenditure calculator",
    long_about = "Command-line front end for the Nutriplan engine: BMR and TEE estimation, goal adjustment, macronutrient distribution, and body metrics."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a full energy plan from a JSON request
    Plan {
        /// Request file, or `-` for stdin
        #[arg(long, short = 'i')]
        input: String,
    },

    /// Estimate basal metabolic rate
    Bmr {
        /// Formula key (defaults to the configured formula)
        #[arg(long)]
        formula: Option<String>,

        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Height (cm)
        #[arg(long)]
        height: f64,

        /// Age (years)
        #[arg(long)]
        age: u32,

        /// Sex (male, female, other)
        #[arg(long)]
        sex: String,

        /// Fat-free mass (kg), required by katch_mcardle_1996
        #[arg(long)]
        ffm: Option<f64>,
    },

    /// Whole-year age from a birth date
    Age {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth: NaiveDate,

        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        reference: Option<NaiveDate>,
    },

    /// Body mass index and classification
    Bmi {
        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Height (cm)
        #[arg(long)]
        height: f64,
    },

    /// Waist-hip ratio and risk classification
    Whr {
        /// Waist circumference (cm)
        #[arg(long)]
        waist: f64,

        /// Hip circumference (cm)
        #[arg(long)]
        hip: f64,
    },

    /// List supported BMR formulas
    Formulas,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli.command, cli.pretty) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let status = u8::try_from(error.code.exit_status()).unwrap_or(1);
            helpers::display::print_error(error);
            ExitCode::from(status)
        }
    }
}

fn run(command: Command, pretty: bool) -> Result<()> {
    let config = EngineConfig::load()?;
    debug!(default_formula = %config.default_formula, "Engine configuration loaded");

    match command {
        Command::Plan { input } => commands::plan::run(&input, &config, pretty),
        Command::Bmr {
            formula,
            weight,
            height,
            age,
            sex,
            ffm,
        } => commands::calc::bmr(
            &config,
            &commands::calc::BmrArgs {
                formula,
                weight,
                height,
                age,
                sex,
                ffm,
            },
            pretty,
        ),
        Command::Age { birth, reference } => commands::calc::age(birth, reference, pretty),
        Command::Bmi { weight, height } => commands::calc::bmi(&config, weight, height, pretty),
        Command::Whr { waist, hip } => commands::calc::whr(&config, waist, hip, pretty),
        Command::Formulas => commands::calc::formulas(pretty),
    }
}
