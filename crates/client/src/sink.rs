//! Consumers of refresh results.

use chrono::{DateTime, Utc};
use rush_core::Contest;
use rush_ingestion::{NormalizeIssue, Normalized};

/// Receiver of one refresh cycle: `start`, then exactly one of `success` or `failure`.
pub trait ContestSink {
    /// A fetch has begun.
    fn start(&mut self);

    /// The fetch succeeded. Skipped records and defaulted fields are listed
    /// in `normalized.issues`.
    fn success(&mut self, normalized: Normalized);

    /// The fetch failed; the message is meant for display.
    fn failure(&mut self, message: String);
}

/// In-memory contest store. The most recent outcome replaces the previous one.
#[derive(Debug, Clone, Default)]
pub struct ContestStore {
    /// A fetch is in flight.
    pub loading: bool,
    /// Records from the last successful fetch.
    pub contests: Vec<Contest>,
    /// Diagnostics from the last successful fetch.
    pub issues: Vec<NormalizeIssue>,
    /// Message from the last failed fetch, cleared on start.
    pub error: Option<String>,
    /// When the last outcome (either kind) arrived.
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContestStore {
    /// Look up a contest by id.
    pub fn get(&self, id: &str) -> Option<&Contest> {
        self.contests.iter().find(|c| c.id == id)
    }
}

impl ContestSink for ContestStore {
    fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn success(&mut self, normalized: Normalized) {
        self.loading = false;
        self.contests = normalized.contests;
        self.issues = normalized.issues;
        self.error = None;
        self.updated_at = Some(Utc::now());
    }

    fn failure(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
        self.updated_at = Some(Utc::now());
    }
}
