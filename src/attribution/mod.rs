//! Test-to-class attribution
//!
//! The analysis run records, for every executed test, which classes define
//! it and which production classes it exercises. This module carries that
//! record and the aggregation queries built on its identity semantics.

pub mod coverage;
pub mod record;

pub use record::AttributionRecord;
