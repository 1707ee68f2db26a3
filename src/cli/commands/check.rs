use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::Output;
use crate::config::MutsiteConfig;
use crate::report::{self, ReportDescriptor, ReportError, ReportGenerationManager};

#[derive(Parser, Clone)]
#[command(about = "Validate the results directory and show which format would be selected")]
pub struct CheckArgs {
    /// Directory containing the raw mutation results
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Accepted source format, in priority order (can be repeated)
    #[arg(long = "format", value_name = "FORMAT")]
    pub formats: Vec<String>,
}

/// Dry-run half of the pipeline: everything up to, but not including,
/// the transform. Performs no writes.
pub async fn execute(args: CheckArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = MutsiteConfig::load_with_custom_config(config_path)?;
    let mut settings = config.report_settings()?;

    if let Some(dir) = args.results_dir {
        settings.results_directory = dir;
    }
    if !args.formats.is_empty() {
        settings.source_formats = args.formats;
    }

    let descriptor = ReportDescriptor::from_settings(&settings);
    output.header(descriptor.name());
    output.key_value("description", descriptor.description(), false);
    output.key_value("entry point", &descriptor.output_name(), false);
    output.key_value(
        "results directory",
        &settings.results_directory.display().to_string(),
        false,
    );

    if !descriptor.can_generate_report() {
        output.info("report generation is skipped by configuration");
        return Ok(());
    }

    descriptor.source_encoding()?;
    descriptor.output_encoding()?;

    report::locator::validate(&settings.results_directory)?;
    output.success("results directory is valid");

    let manager = ReportGenerationManager::new();
    match manager.select(&settings.results_directory, descriptor.source_formats()) {
        Some(strategy) => {
            output.key_value("selected format", strategy.name(), true);
            Ok(())
        }
        None => {
            output.warning("no accepted source format has data present");
            for format in descriptor.source_formats() {
                output.list_item(format);
            }
            Err(ReportError::NoSupportedFormat(descriptor.source_formats().to_vec()).into())
        }
    }
}
