//! Attribution record value type

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One test's identity, execution time, the classes that define it, and the
/// production classes it is known to exercise ("testees").
///
/// Equality and hashing are structural over all four fields, so two records
/// are interchangeable in sets and maps iff every field matches exactly.
/// Downstream coverage aggregation deduplicates and groups records by this
/// identity, which is why the contract must be exact. The class collections
/// are order-insensitive sets; records are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributionRecord {
    name: String,
    execution_time_millis: u64,
    #[serde(default)]
    defining_classes: BTreeSet<String>,
    #[serde(default)]
    testees: BTreeSet<String>,
}

impl AttributionRecord {
    pub fn new(
        defining_classes: BTreeSet<String>,
        name: impl Into<String>,
        execution_time_millis: u64,
        testees: BTreeSet<String>,
    ) -> Self {
        Self {
            name: name.into(),
            execution_time_millis,
            defining_classes,
            testees,
        }
    }

    /// Test identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wall-clock execution time of the test, in milliseconds
    pub fn execution_time_millis(&self) -> u64 {
        self.execution_time_millis
    }

    /// True iff `target_class` is one of this test's testees.
    ///
    /// False for any class outside the set, including when the set is empty.
    pub fn directly_hits(&self, target_class: &str) -> bool {
        self.testees.contains(target_class)
    }

    /// Names of the classes that define this test.
    ///
    /// A test may be defined across multiple classes, e.g. inherited test
    /// methods. Each call yields a fresh iterator; order follows the set's
    /// ordering, not insertion order.
    pub fn defining_class_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.defining_classes.iter().map(String::as_str)
    }

    /// Production classes this test is known to exercise
    pub fn testees(&self) -> &BTreeSet<String> {
        &self.testees
    }
}

impl fmt::Display for AttributionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
