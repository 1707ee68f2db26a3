use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::Output;
use crate::config::MutsiteConfig;
use crate::report::{self, GenerationContext, ReportDescriptor, ReportGenerationManager};

#[derive(Parser, Clone)]
#[command(about = "Generate the site report from previously produced mutation results")]
pub struct GenerateArgs {
    /// Directory containing the raw mutation results
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Root directory of the generated site
    #[arg(long, value_name = "DIR")]
    pub site_root: Option<PathBuf>,

    /// Subdirectory of the site root that receives the report
    #[arg(long, value_name = "NAME")]
    pub report_dir: Option<String>,

    /// Accepted source format, in priority order (can be repeated)
    #[arg(long = "format", value_name = "FORMAT")]
    pub formats: Vec<String>,

    /// Skip report generation
    #[arg(long)]
    pub skip: bool,
}

pub async fn execute(args: GenerateArgs, config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = MutsiteConfig::load_with_custom_config(config_path)?;
    let mut settings = config.report_settings()?;

    // CLI flags win over every configuration layer
    if let Some(dir) = args.results_dir {
        settings.results_directory = dir;
    }
    if let Some(root) = args.site_root {
        settings.site_output_root = root;
    }
    if let Some(name) = args.report_dir {
        settings.site_directory = name;
    }
    if !args.formats.is_empty() {
        settings.source_formats = args.formats;
    }
    if args.skip {
        settings.skip = true;
    }

    let descriptor = ReportDescriptor::from_settings(&settings);
    if !descriptor.can_generate_report() {
        output.info("report generation is skipped by configuration");
        return Ok(());
    }

    // Surface bad encoding labels before touching the filesystem
    let source_encoding = descriptor.source_encoding()?;
    let output_encoding = descriptor.output_encoding()?;
    output.verbose(&format!(
        "encodings: source {}, output {}",
        source_encoding.name(),
        output_encoding.name()
    ));

    tracing::debug!("report generation starting");
    report::locator::validate(&settings.results_directory)?;

    let destination = settings.site_output_root.join(descriptor.site_directory());
    let mut context = GenerationContext::new(
        settings.locale.clone(),
        Box::new(io::sink()),
        settings.results_directory.clone(),
        destination.clone(),
        output,
        descriptor.source_formats().to_vec(),
    );

    let manager = ReportGenerationManager::new();
    let format = manager.generate(&mut context)?;
    tracing::debug!("report generation ending");

    output.success(&format!("{} written from {} data", descriptor.name(), format));
    output.key_value("report", &destination.display().to_string(), false);
    output.key_value("entry point", &descriptor.output_name(), false);
    Ok(())
}
