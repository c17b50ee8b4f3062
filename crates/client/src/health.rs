//! Upstream availability reports.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Reachability of the contest API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Online,
    Offline,
}

/// Result of one HEAD probe.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: ApiStatus,
    pub checked_at: DateTime<Utc>,
    /// Round trip in milliseconds, when a response arrived.
    pub latency_ms: Option<u64>,
    /// Why the probe counts as offline.
    pub detail: Option<String>,
}

impl HealthReport {
    pub fn is_online(&self) -> bool {
        self.status == ApiStatus::Online
    }
}

/// Outcome of a pass-through sync: the upstream listing untouched, plus a summary.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub data: Value,
}

impl SyncReport {
    pub(crate) fn synced(data: Value) -> Self {
        let count = data.as_array().map_or(0, Vec::len);
        Self {
            success: true,
            message: format!("Synced {} contests", count),
            data,
        }
    }

    pub(crate) fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
            data: Value::Null,
        }
    }
}
