pub mod commands;

use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};
use dealscope_core::config::{EngineConfig, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "dealscope",
    about = "Dealscope deal-intelligence CLI",
    long_about = "Derive portfolio rollups, stakeholder classifications, buying-committee \
                  analysis, timeline completion, and activity feeds from deal records.",
    after_help = "Examples:\n  dealscope portfolio\n  dealscope stakeholders --deal 1\n  dealscope timeline --deal 6"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Summarize the deal book: counts, at-risk deals, average progress, value")]
    Portfolio,
    #[command(about = "List per-deal derived signals: confidence, risk, attention flag")]
    Deals,
    #[command(about = "Classify a deal's stakeholders and build the seller sentiment matrix")]
    Stakeholders {
        #[arg(long, help = "Deal id to inspect")]
        deal: u32,
    },
    #[command(about = "Analyze the buying-committee org chart")]
    Org,
    #[command(about = "Show buyer-journey and sales-process completion for a deal")]
    Timeline {
        #[arg(long, help = "Deal id to inspect")]
        deal: u32,
    },
    #[command(about = "Build the contact-activity feed for a deal")]
    Activities {
        #[arg(long, help = "Deal id to inspect")]
        deal: u32,
    },
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
}

fn init_logging(config: &EngineConfig) {
    use dealscope_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match EngineConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            let result = commands::CommandResult::failure(
                "startup",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
            println!("{}", result.output);
            return ExitCode::from(result.exit_code);
        }
    };
    init_logging(&config);

    let today = Utc::now().date_naive();
    tracing::debug!(%today, "dispatching command");

    let result = match cli.command {
        Command::Portfolio => commands::portfolio::run(),
        Command::Deals => commands::deals::run(today),
        Command::Stakeholders { deal } => {
            commands::stakeholders::run(deal, &config.reachout, today)
        }
        Command::Org => commands::org::run(today),
        Command::Timeline { deal } => commands::timeline::run(deal),
        Command::Activities { deal } => commands::activities::run(deal),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
