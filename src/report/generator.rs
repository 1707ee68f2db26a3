//! Format selection and dispatch
//!
//! A plain linear scan over the accepted formats, in caller order. The
//! first format with a registered strategy and data present wins; this
//! is a user-controllable priority, not a best-format heuristic.

use std::path::Path;

use super::context::GenerationContext;
use super::error::ReportError;
use super::html::HtmlReportStrategy;
use super::strategy::ReportFormatStrategy;

pub struct ReportGenerationManager {
    strategies: Vec<Box<dyn ReportFormatStrategy>>,
}

impl Default for ReportGenerationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerationManager {
    /// Manager with the built-in format registry
    pub fn new() -> Self {
        Self {
            strategies: vec![Box::new(HtmlReportStrategy)],
        }
    }

    /// Manager with a custom format registry. This is the extension
    /// point: new formats plug in here without touching the selection
    /// algorithm.
    pub fn with_strategies(strategies: Vec<Box<dyn ReportFormatStrategy>>) -> Self {
        Self { strategies }
    }

    /// Pick the first accepted format with a registered strategy and
    /// data present under `source`. No side effects, usable for
    /// dry-run inspection.
    pub fn select(&self, source: &Path, formats: &[String]) -> Option<&dyn ReportFormatStrategy> {
        for format in formats {
            let Some(strategy) = self
                .strategies
                .iter()
                .find(|s| s.name().eq_ignore_ascii_case(format))
            else {
                tracing::debug!("no strategy registered for source format {format}, skipping");
                continue;
            };
            if !strategy.data_present(source) {
                tracing::debug!(
                    "no {format} data present under {}, skipping",
                    source.display()
                );
                continue;
            }
            return Some(strategy.as_ref());
        }
        None
    }

    /// Select a format and run its transform. Returns the name of the
    /// format that produced the report.
    pub fn generate(&self, context: &mut GenerationContext<'_>) -> Result<&'static str, ReportError> {
        let selected = self
            .select(context.source_directory(), context.source_formats())
            .ok_or_else(|| ReportError::NoSupportedFormat(context.source_formats().to_vec()))?;

        let name = selected.name();
        tracing::debug!("selected source format {name}");
        selected.execute(context)?;
        Ok(name)
    }
}
