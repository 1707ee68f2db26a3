//! Command-line interface for mutsite
//!
//! This is the embedding surface of the report pipeline: it binds
//! configuration, consults the report descriptor's skip gate, and maps
//! pipeline outcomes to exit status and styled terminal output.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
pub mod output;

pub use output::Output;

#[derive(Parser)]
#[command(
    name = "mutsite",
    version = env!("CARGO_PKG_VERSION"),
    about = "Package mutation testing results into project site reports",
    long_about = "Mutsite locates the raw results written by a prior mutation-analysis run, \
                  validates them, and packages them into a report tree under a project \
                  documentation site. It also answers attribution queries linking tests to \
                  the production classes they exercise."
)]
pub struct Cli {
    /// Use custom configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the site report from previously produced mutation results
    Generate(commands::generate::GenerateArgs),
    /// Validate the results directory and show which format would be selected
    Check(commands::check::CheckArgs),
    /// Query test-to-class attribution records
    Coverage(commands::coverage::CoverageArgs),
    /// Show version information
    Version,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);

        match self.command {
            Some(Commands::Generate(args)) => {
                commands::generate::execute(args, self.config.as_deref(), &output).await
            }
            Some(Commands::Check(args)) => {
                commands::check::execute(args, self.config.as_deref(), &output).await
            }
            Some(Commands::Coverage(args)) => commands::coverage::execute(args, &output).await,
            Some(Commands::Version) => commands::version::execute(&output).await,
            None => {
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
