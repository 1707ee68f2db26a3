//! # Mutsite - Site reports for mutation testing results
//!
//! Mutsite packages the raw results of a prior mutation-analysis run into a
//! report tree under a project documentation site, and keeps the attribution
//! bookkeeping that links individual tests to the production classes they
//! exercise.
//!
//! ## Quick Start
//!
//! ```bash
//! # Install mutsite
//! cargo install mutsite
//!
//! # Package the results written by the analysis run
//! mutsite generate --results-dir target/mutation-reports
//!
//! # Check what would be generated, without writing anything
//! mutsite check
//!
//! # Ask which tests exercise a class
//! mutsite coverage --file attributions.json --class com.example.Widget
//! ```
//!
//! ## Library Usage
//!
//! The report pipeline can be driven directly:
//!
//! ```rust,no_run
//! use mutsite::config::MutsiteConfig;
//! use mutsite::report::{self, GenerationContext, ReportDescriptor, ReportGenerationManager};
//! use mutsite::cli::Output;
//!
//! let config = MutsiteConfig::load()?;
//! let settings = config.report_settings()?;
//! let descriptor = ReportDescriptor::from_settings(&settings);
//!
//! if descriptor.can_generate_report() {
//!     report::locator::validate(&settings.results_directory)?;
//!     let output = Output::new(false, true);
//!     let destination = settings.site_output_root.join(descriptor.site_directory());
//!     let mut context = GenerationContext::new(
//!         settings.locale.clone(),
//!         Box::new(std::io::sink()),
//!         settings.results_directory.clone(),
//!         destination,
//!         &output,
//!         descriptor.source_formats().to_vec(),
//!     );
//!     ReportGenerationManager::new().generate(&mut context)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod attribution;
pub mod cli;
pub mod config;
pub mod report;

pub use attribution::AttributionRecord;
pub use cli::Output;
pub use config::MutsiteConfig;
pub use report::{GenerationContext, ReportDescriptor, ReportError, ReportGenerationManager};

/// Result type alias for mutsite operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
