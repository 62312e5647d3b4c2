use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pin_checker::config::{AppConfig, DEFAULT_DIGIT_LENGTH};
use pin_checker::mapper::{IntoExitCode, ToText};
use pin_checker::service::self_test;
use pin_checker::service::{CheckRequest, CheckServiceImpl, DateInputs};
use pin_domain::{PinChecker, PinError};

#[derive(Parser, Debug)]
#[command(name = "pin-checker", version, about = "Check PIN strength against common patterns and personal dates")]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "PIN_DIGIT_LENGTH",
        default_value_t = DEFAULT_DIGIT_LENGTH,
        help = "Number of digits in a PIN"
    )]
    digits: usize,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default)]
struct DateArgs {
    /// Holder's birth date (DD-MM-YYYY)
    #[arg(long)]
    dob: Option<String>,
    /// Spouse's birth date (DD-MM-YYYY)
    #[arg(long)]
    spouse_dob: Option<String>,
    /// Wedding anniversary (DD-MM-YYYY)
    #[arg(long)]
    anniversary: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check if a PIN is commonly used
    Common { pin: String },
    /// Classify a PIN and explain why it is weak
    Check {
        pin: String,
        #[command(flatten)]
        dates: DateArgs,
    },
    /// List the PINs derivable from a date
    Combinations { date: String },
    /// Suggest a random strong PIN
    Suggest {
        #[command(flatten)]
        dates: DateArgs,
    },
    /// Run the built-in reference cases
    SelfTest,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return e.into_exit_code();
        }
    };
    init_tracing(&config);
    debug!("Starting in {} mode", config.environment);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            match e.downcast::<PinError>() {
                Ok(pin_error) => pin_error.into_exit_code(),
                Err(_) => ExitCode::FAILURE,
            }
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.environment.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let digit_length = cli.digits;
    let checker = || -> anyhow::Result<CheckServiceImpl> {
        let checker = PinChecker::new(digit_length)
            .with_context(|| format!("Cannot configure a {}-digit checker", digit_length))?;
        Ok(CheckServiceImpl::new(Box::new(checker)))
    };

    match cli.command {
        Commands::Common { pin } => emit(&checker()?.common(&pin), cli.json)?,
        Commands::Check { pin, dates } => {
            let request = CheckRequest {
                pin,
                dates: date_inputs(dates),
            };
            emit(&checker()?.check(request), cli.json)?
        }
        Commands::Combinations { date } => emit(&checker()?.combinations(&date)?, cli.json)?,
        Commands::Suggest { dates } => emit(&checker()?.suggest(date_inputs(dates))?, cli.json)?,
        Commands::SelfTest => {
            let report = self_test::run(&self_test::default_cases());
            emit(&report, cli.json)?;
            if !report.all_passed() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn date_inputs(dates: DateArgs) -> DateInputs {
    DateInputs {
        birth_date: dates.dob,
        spouse_birth_date: dates.spouse_dob,
        wedding_date: dates.anniversary,
    }
}

fn emit<T>(value: &T, json: bool) -> anyhow::Result<()>
where
    T: Serialize + ToText,
{
    if json {
        let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{}", rendered);
    } else {
        println!("{}", value.to_text());
    }
    Ok(())
}
