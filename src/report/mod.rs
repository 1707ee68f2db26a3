//! Report generation pipeline
//!
//! Turns the raw results of a prior mutation-analysis run into a report
//! tree under the project site. The flow is: validate the results
//! directory ([`locator`]), build a per-invocation [`GenerationContext`],
//! then let the [`ReportGenerationManager`] pick the first accepted source
//! format with data present and run its transform.

pub mod context;
pub mod descriptor;
pub mod encoding;
pub mod error;
pub mod generator;
pub mod html;
pub mod locator;
pub mod strategy;

pub use context::GenerationContext;
pub use descriptor::ReportDescriptor;
pub use error::ReportError;
pub use generator::ReportGenerationManager;
pub use html::HtmlReportStrategy;
pub use strategy::ReportFormatStrategy;
