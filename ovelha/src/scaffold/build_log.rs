//! Build log sink
//!
//! The pipeline reports every artifact it writes or skips as a structured
//! record. Tests use [`MemoryLog`] to assert on emission coverage; the CLI uses
//! [`TracingLog`] to forward records as `tracing` events.

use std::path::PathBuf;

use super::layout::ArtifactKind;

/// Result of handling one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file was fully (over)written
    Written,
    /// The artifact was intentionally not emitted
    Skipped {
        /// Why it was skipped
        reason: String,
    },
}

/// One entry of the build log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRecord {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Class the artifact belongs to, `None` for project-level files
    pub class_name: Option<String>,
    /// Target path
    pub path: PathBuf,
    /// What happened
    pub outcome: Outcome,
}

impl BuildRecord {
    /// Whether the artifact was written
    #[must_use]
    pub const fn is_written(&self) -> bool {
        matches!(self.outcome, Outcome::Written)
    }
}

/// Sink for build records
pub trait BuildLog {
    /// Record one artifact outcome
    fn record(&mut self, record: BuildRecord);
}

/// Collects records in memory
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Vec<BuildRecord>,
}

impl MemoryLog {
    /// Create an empty log
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// All records in emission order
    #[must_use]
    pub fn records(&self) -> &[BuildRecord] {
        &self.records
    }

    /// Records that were written
    pub fn written(&self) -> impl Iterator<Item = &BuildRecord> {
        self.records.iter().filter(|record| record.is_written())
    }

    /// Records that were skipped
    pub fn skipped(&self) -> impl Iterator<Item = &BuildRecord> {
        self.records.iter().filter(|record| !record.is_written())
    }
}

impl BuildLog for MemoryLog {
    fn record(&mut self, record: BuildRecord) {
        self.records.push(record);
    }
}

/// Forwards records to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl BuildLog for TracingLog {
    fn record(&mut self, record: BuildRecord) {
        let class_name = record.class_name.as_deref().unwrap_or("-");
        match &record.outcome {
            Outcome::Written => tracing::debug!(
                kind = %record.kind,
                class = class_name,
                path = %record.path.display(),
                "Artifact written"
            ),
            Outcome::Skipped { reason } => tracing::warn!(
                kind = %record.kind,
                class = class_name,
                path = %record.path.display(),
                reason = %reason,
                "Artifact skipped"
            ),
        }
    }
}
