//! Coverage aggregation over attribution records
//!
//! Records come out of the analysis run as a JSON array. Everything here
//! leans on the record's structural identity: duplicates collapse, and
//! grouping keys off testee membership.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::record::AttributionRecord;

/// Load attribution records from a JSON file written by the analysis run
pub fn load_records(path: &Path) -> Result<Vec<AttributionRecord>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read attribution file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("failed to parse attribution file {}", path.display()))
}

/// Drop duplicate records, keeping first-seen order
pub fn dedup(records: Vec<AttributionRecord>) -> Vec<AttributionRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.clone()))
        .collect()
}

/// Group records under every production class they directly hit.
///
/// Iteration order is sorted by class name, which keeps display output
/// stable across runs.
pub fn by_testee(records: &[AttributionRecord]) -> BTreeMap<&str, Vec<&AttributionRecord>> {
    let mut grouped: BTreeMap<&str, Vec<&AttributionRecord>> = BTreeMap::new();
    for record in records {
        for testee in record.testees() {
            grouped.entry(testee.as_str()).or_default().push(record);
        }
    }
    grouped
}

/// Records whose tests directly hit `class`
pub fn hitting<'a>(records: &'a [AttributionRecord], class: &str) -> Vec<&'a AttributionRecord> {
    records
        .iter()
        .filter(|record| record.directly_hits(class))
        .collect()
}

/// Summed execution time of a group of records, in milliseconds
pub fn total_time(records: &[&AttributionRecord]) -> u64 {
    records
        .iter()
        .map(|record| record.execution_time_millis())
        .sum()
}
