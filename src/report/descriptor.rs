//! Report descriptor facade
//!
//! Read-only accessors over configuration the embedding surface has
//! already bound and validated. `can_generate_report` is the sole gate
//! consulted before the pipeline runs: when it is false the pipeline
//! must not run and nothing is written, which is not a failure.

use std::path::PathBuf;

use encoding_rs::Encoding;

use crate::config::ReportSettings;

use super::encoding;
use super::error::ReportError;

pub struct ReportDescriptor {
    name: String,
    description: String,
    site_directory: String,
    skip: bool,
    source_formats: Vec<String>,
    source_encoding: Option<String>,
    output_encoding: Option<String>,
}

impl ReportDescriptor {
    pub fn from_settings(settings: &ReportSettings) -> Self {
        Self {
            name: settings.name.clone(),
            description: settings.description.clone(),
            site_directory: settings.site_directory.clone(),
            skip: settings.skip,
            source_formats: settings.source_formats.clone(),
            source_encoding: settings.source_encoding.clone(),
            output_encoding: settings.output_encoding.clone(),
        }
    }

    /// Report name shown under the site's project reports section
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Report description shown under the site's project reports section
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Subdirectory of the site output root that receives the report
    pub fn site_directory(&self) -> &str {
        &self.site_directory
    }

    /// Accepted source formats, in priority order
    pub fn source_formats(&self) -> &[String] {
        &self.source_formats
    }

    /// Entry point of the generated report, relative to the site root
    pub fn output_name(&self) -> String {
        PathBuf::from(&self.site_directory)
            .join("index")
            .display()
            .to_string()
    }

    pub fn can_generate_report(&self) -> bool {
        !self.skip
    }

    /// The generated artifact is an external file tree, not inline site
    /// content
    pub fn is_external_report(&self) -> bool {
        true
    }

    pub fn source_encoding(&self) -> Result<&'static Encoding, ReportError> {
        encoding::resolve(self.source_encoding.as_deref())
    }

    pub fn output_encoding(&self) -> Result<&'static Encoding, ReportError> {
        encoding::resolve(self.output_encoding.as_deref())
    }
}
