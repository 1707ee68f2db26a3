//! Source format strategy interface
//!
//! New source formats register a presence predicate and a transform;
//! the selection algorithm in the generation manager never changes.

use std::path::Path;

use super::context::GenerationContext;
use super::error::ReportError;

pub trait ReportFormatStrategy {
    /// Format name, matched case-insensitively against the accepted list
    fn name(&self) -> &'static str;

    /// Does this format have raw data present under the source root?
    fn data_present(&self, source: &Path) -> bool;

    /// Produce the destination tree from the source tree
    fn execute(&self, context: &mut GenerationContext<'_>) -> Result<(), ReportError>;
}
