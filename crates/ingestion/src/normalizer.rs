//! Contest normalization.
//!
//! Converts the upstream contest listing into canonical [`Contest`] records.
//! Explicit upstream values always win; anything missing is defaulted or
//! derived from the evaluation time. Records are isolated from each other: a
//! record that cannot be read is reported and skipped, the rest still come
//! through.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use rush_core::{
    AssetType, Contest, ContestStatus, ContestType, Error, NormalizerConfig, Result,
};

use crate::raw::{self, RawContest};
use crate::rules;

/// Length of the random part of a synthesized contest id.
const ID_SUFFIX_LEN: usize = 9;

/// A problem found while normalizing a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizeIssue {
    /// The payload was not a JSON array; nothing was normalized.
    #[error("upstream payload is not an array (found {found})")]
    NotASequence { found: &'static str },

    /// One element of the array was skipped.
    #[error("record {index} rejected: {reason}")]
    RecordRejected { index: usize, reason: String },

    /// A field of a kept record was unreadable and got its default.
    #[error("record {index} field {field} defaulted: {reason}")]
    FieldDefaulted {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

impl NormalizeIssue {
    /// Whether the issue cost a record (as opposed to a single field).
    pub fn is_fatal(&self) -> bool {
        !matches!(self, NormalizeIssue::FieldDefaulted { .. })
    }
}

/// Output of one normalization pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Normalized {
    /// Canonical records, in upstream order.
    pub contests: Vec<Contest>,
    /// Skipped records and defaulted fields, in upstream order.
    pub issues: Vec<NormalizeIssue>,
}

impl Normalized {
    /// True when every upstream record and field was read as given.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of upstream records that were skipped.
    pub fn rejected(&self) -> usize {
        self.issues.iter().filter(|issue| issue.is_fatal()).count()
    }

    /// Drop the diagnostics and keep the records.
    pub fn into_contests(self) -> Vec<Contest> {
        self.contests
    }
}

/// Normalizer for upstream contest listings.
pub struct ContestNormalizer {
    config: NormalizerConfig,
    /// Market local time zone for placeholder windows and naive timestamps.
    market_tz: FixedOffset,
    /// Sequence for synthesized ids.
    sequence: AtomicU64,
}

impl ContestNormalizer {
    /// Create a normalizer from configuration.
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        let market_tz = FixedOffset::east_opt(config.market_utc_offset_minutes * 60)
            .ok_or_else(|| {
                Error::config(format!(
                    "invalid market UTC offset: {} minutes",
                    config.market_utc_offset_minutes
                ))
            })?;

        Ok(Self {
            config,
            market_tz,
            sequence: AtomicU64::new(0),
        })
    }

    /// Normalize an upstream payload as of `now`.
    ///
    /// Never fails: a non-array payload yields no records and a
    /// [`NormalizeIssue::NotASequence`]; unreadable elements are skipped with
    /// a [`NormalizeIssue::RecordRejected`]; unreadable timestamps are
    /// defaulted with a [`NormalizeIssue::FieldDefaulted`].
    pub fn normalize(&self, payload: &Value, now: DateTime<Utc>) -> Normalized {
        let items = match payload.as_array() {
            Some(items) => items,
            None => {
                let issue = NormalizeIssue::NotASequence {
                    found: raw::json_kind(payload),
                };
                warn!(%issue, "discarding contest payload");
                return Normalized {
                    contests: Vec::new(),
                    issues: vec![issue],
                };
            }
        };

        let mut out = Normalized {
            contests: Vec::with_capacity(items.len()),
            issues: Vec::new(),
        };

        for (index, item) in items.iter().enumerate() {
            match self.normalize_record(index, item, now, &mut out.issues) {
                Ok(contest) => out.contests.push(contest),
                Err(reason) => {
                    let issue = NormalizeIssue::RecordRejected { index, reason };
                    warn!(%issue, "skipping contest record");
                    out.issues.push(issue);
                }
            }
        }

        debug!(
            received = items.len(),
            normalized = out.contests.len(),
            rejected = out.rejected(),
            defaulted = out.issues.len() - out.rejected(),
            "normalized contest payload"
        );
        out
    }

    /// Normalize the upstream element at `index`.
    ///
    /// Only a non-object element is an error. Field-level problems are pushed
    /// onto `issues` and the field is defaulted.
    fn normalize_record(
        &self,
        index: usize,
        item: &Value,
        now: DateTime<Utc>,
        issues: &mut Vec<NormalizeIssue>,
    ) -> std::result::Result<Contest, String> {
        let raw = RawContest::from_value(item)?;
        let tz = self.market_tz;

        let mut timestamp = |field: &'static str, value: Option<&Value>| {
            match raw::coerce_timestamp(field, value, tz) {
                Ok(ts) => ts,
                Err(reason) => {
                    let issue = NormalizeIssue::FieldDefaulted {
                        index,
                        field,
                        reason,
                    };
                    warn!(%issue, "defaulting contest field");
                    issues.push(issue);
                    None
                }
            }
        };
        let explicit_start = timestamp("startTime", raw.start_time.as_ref());
        let explicit_end = timestamp("endTime", raw.end_time.as_ref());
        let explicit_registration =
            timestamp("registrationDeadline", raw.registration_deadline.as_ref());
        let explicit_market_start = timestamp("marketStartTime", raw.market_start_time.as_ref());
        let explicit_market_end = timestamp("marketEndTime", raw.market_end_time.as_ref());

        let explicit_type = raw::coerce_text(raw.contest_type.as_ref())
            .and_then(|s| ContestType::parse(&s));

        // Windows
        let start_time = explicit_start.unwrap_or(now);
        let end_time = explicit_end.unwrap_or_else(|| {
            let days = explicit_type.map_or(1, ContestType::nominal_days);
            start_time + Duration::days(days)
        });
        let anchor = explicit_market_start.or(explicit_start);
        let market_start_time = anchor.unwrap_or_else(|| {
            rules::next_day_at(now, tz, self.config.market_open_minutes)
        });
        // Anchored windows keep their own length
        let market_end_time = explicit_market_end.or(explicit_end).unwrap_or_else(|| match anchor {
            Some(start) => start + (end_time - start_time),
            None => rules::next_day_at(now, tz, self.config.market_close_minutes),
        });
        let registration_deadline = explicit_registration.unwrap_or_else(|| match anchor {
            Some(start) => start,
            None => rules::next_day_at(now, tz, self.config.registration_close_minutes),
        });

        let status = raw::coerce_text(raw.status.as_ref())
            .and_then(|s| ContestStatus::parse(&s))
            .unwrap_or_else(|| {
                rules::derive_status(now, registration_deadline, market_start_time, market_end_time)
            });
        let contest_type = explicit_type
            .unwrap_or_else(|| ContestType::from_duration(end_time - start_time));

        let title = raw::coerce_text(raw.title.as_ref());
        let sector = raw::coerce_text(raw.sector_focus.as_ref());
        let asset_type = raw::coerce_text(raw.asset_type.as_ref())
            .and_then(|s| AssetType::parse(&s))
            .unwrap_or_else(|| rules::detect_asset_type(title.as_deref(), sector.as_deref()));
        let sector_focus = rules::resolve_sector(sector.as_deref(), title.as_deref());

        let (registration_open, selection_open, market_live) = rules::flags_for(status);

        Ok(Contest {
            id: raw::coerce_id(raw.id.as_ref()).unwrap_or_else(|| self.next_id()),
            title: title.unwrap_or_else(|| self.config.default_title.clone()),
            description: raw::coerce_text(raw.description.as_ref())
                .unwrap_or_else(|| self.config.default_description.clone()),
            entry_fee: raw::coerce_amount(raw.entry_fee.as_ref())
                .unwrap_or(self.config.default_entry_fee),
            prize_pool: raw::coerce_amount(raw.prize_pool.as_ref())
                .unwrap_or(self.config.default_prize_pool),
            start_time,
            end_time,
            registration_deadline,
            market_start_time,
            market_end_time,
            participants: raw::coerce_participants(raw.participants.as_ref()),
            max_participants: raw::coerce_count(raw.max_participants.as_ref())
                .unwrap_or(self.config.default_max_participants),
            status,
            contest_type,
            asset_type,
            virtual_cash: asset_type.virtual_cash(),
            is_registration_open: raw::coerce_flag(raw.is_registration_open.as_ref())
                .unwrap_or(registration_open),
            is_portfolio_selection_open: raw::coerce_flag(raw.is_portfolio_selection_open.as_ref())
                .unwrap_or(selection_open),
            is_market_live: raw::coerce_flag(raw.is_market_live.as_ref()).unwrap_or(market_live),
            sector_focus,
        })
    }

    /// Synthesize an id: monotonic sequence plus a random suffix.
    fn next_id(&self) -> String {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(ID_SUFFIX_LEN)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();
        format!("contest-{}-{}", seq, suffix)
    }
}

impl Default for ContestNormalizer {
    fn default() -> Self {
        let config = NormalizerConfig::default();
        let market_tz =
            FixedOffset::east_opt(config.market_utc_offset_minutes * 60).unwrap_or(Utc.fix());
        Self {
            config,
            market_tz,
            sequence: AtomicU64::new(0),
        }
    }
}

/// Normalize with default settings.
pub fn normalize_contests(payload: &Value, now: DateTime<Utc>) -> Vec<Contest> {
    ContestNormalizer::default().normalize(payload, now).into_contests()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;
    use rush_core::{ALL_SECTORS, CRYPTO_VIRTUAL_CASH, STOCK_VIRTUAL_CASH};
    use serde_json::json;
    use std::collections::HashSet;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn utc_normalizer() -> ContestNormalizer {
        let config = NormalizerConfig {
            market_utc_offset_minutes: 0,
            ..NormalizerConfig::default()
        };
        ContestNormalizer::new(config).unwrap()
    }

    fn assert_consistent(contest: &Contest) {
        assert!(!contest.id.is_empty());
        assert!(!contest.title.is_empty());
        assert!(!contest.description.is_empty());
        assert!(!contest.sector_focus.is_empty());
        assert_eq!(contest.virtual_cash, contest.asset_type.virtual_cash());
    }

    #[test]
    fn test_crypto_blitz_scenario() {
        let payload = json!([{
            "id": 7,
            "Contest_name": "Crypto Blitz",
            "Poolsize": 50000,
            "start_date": "2024-01-01T09:30:00Z",
            "end_date": "2024-01-01T15:30:00Z",
            "registration_ends_at": "2024-01-01T02:00:00Z"
        }]);

        let out = ContestNormalizer::default().normalize(&payload, at(2024, 1, 1, 10, 0));

        assert!(out.is_clean());
        assert_eq!(out.contests.len(), 1);
        let contest = &out.contests[0];
        assert_eq!(contest.id, "7");
        assert_eq!(contest.title, "Crypto Blitz");
        assert_eq!(contest.asset_type, AssetType::Crypto);
        assert_relative_eq!(contest.virtual_cash, 10_000_000.0);
        assert_relative_eq!(contest.prize_pool, 50_000.0);
        assert_eq!(contest.status, ContestStatus::Live);
        assert_eq!(contest.contest_type, ContestType::Daily);
        assert!(contest.is_market_live);
        assert!(!contest.is_registration_open);
        assert!(!contest.is_portfolio_selection_open);
        assert_eq!(contest.market_start_time, at(2024, 1, 1, 9, 30));
        assert_eq!(contest.market_end_time, at(2024, 1, 1, 15, 30));
        assert_eq!(contest.sector_focus, ALL_SECTORS);
        assert_consistent(contest);
    }

    #[test]
    fn test_non_array_payload_fails_closed() {
        let normalizer = ContestNormalizer::default();
        let now = at(2024, 1, 1, 0, 0);

        let out = normalizer.normalize(&json!({"results": []}), now);
        assert!(out.contests.is_empty());
        assert_eq!(out.issues, vec![NormalizeIssue::NotASequence { found: "object" }]);

        let out = normalizer.normalize(&json!(null), now);
        assert!(out.contests.is_empty());
        assert_eq!(out.issues.len(), 1);
    }

    #[test]
    fn test_same_length_output_for_valid_arrays() {
        let payload = json!([
            {},
            {"title": "Bank Sector Mega Contest"},
            {"id": "abc", "assetType": "crypto"},
            {"startDate": "2024-03-01T00:00:00Z", "endDate": "2024-03-20T00:00:00Z"}
        ]);
        let out = ContestNormalizer::default().normalize(&payload, at(2024, 3, 5, 0, 0));

        assert!(out.is_clean());
        assert_eq!(out.contests.len(), 4);
        for contest in &out.contests {
            assert_consistent(contest);
        }
    }

    #[test]
    fn test_explicit_asset_type_sets_virtual_cash() {
        let payload = json!([
            {"title": "Weekend Cup", "assetType": "crypto"},
            {"title": "Bitcoin in name only", "assetType": "stock"}
        ]);
        let contests = normalize_contests(&payload, at(2024, 1, 1, 0, 0));

        assert_eq!(contests[0].asset_type, AssetType::Crypto);
        assert_eq!(contests[0].virtual_cash, CRYPTO_VIRTUAL_CASH);
        assert_eq!(contests[1].asset_type, AssetType::Stock);
        assert_eq!(contests[1].virtual_cash, STOCK_VIRTUAL_CASH);
    }

    #[test]
    fn test_contest_type_from_duration() {
        let start = "2024-01-01T00:00:00Z";
        let payload = json!([
            {"startDate": start, "endDate": "2024-01-01T20:00:00Z"},
            {"startDate": start, "endDate": "2024-01-05T04:00:00Z"},
            {"startDate": start, "endDate": "2024-01-13T12:00:00Z"}
        ]);
        let contests = normalize_contests(&payload, at(2023, 12, 31, 0, 0));

        assert_eq!(contests[0].contest_type, ContestType::Daily);
        assert_eq!(contests[1].contest_type, ContestType::Weekly);
        assert_eq!(contests[2].contest_type, ContestType::Monthly);
    }

    #[test]
    fn test_explicit_contest_type_wins() {
        let payload = json!([{
            "contestType": "monthly",
            "startDate": "2024-01-01T00:00:00Z",
            "endDate": "2024-01-01T06:00:00Z"
        }]);
        let contests = normalize_contests(&payload, at(2024, 1, 1, 0, 0));
        assert_eq!(contests[0].contest_type, ContestType::Monthly);
    }

    #[test]
    fn test_portfolio_selection_window() {
        let payload = json!([{
            "registrationEndsAt": "2024-01-01T02:00:00Z",
            "startDate": "2024-01-01T09:30:00Z",
            "endDate": "2024-01-01T15:30:00Z"
        }]);
        let contests = normalize_contests(&payload, at(2024, 1, 1, 5, 0));

        assert_eq!(contests[0].status, ContestStatus::PortfolioSelection);
        assert!(contests[0].is_portfolio_selection_open);
        assert!(!contests[0].is_registration_open);
        assert!(!contests[0].is_market_live);
    }

    #[test]
    fn test_status_is_time_dependent() {
        let payload = json!([{
            "registrationEndsAt": "2024-01-01T02:00:00Z",
            "startDate": "2024-01-01T09:30:00Z",
            "endDate": "2024-01-01T15:30:00Z"
        }]);
        let normalizer = ContestNormalizer::default();

        let early = normalizer.normalize(&payload, at(2024, 1, 1, 1, 0));
        let late = normalizer.normalize(&payload, at(2024, 1, 1, 16, 0));

        assert_eq!(early.contests[0].status, ContestStatus::Registration);
        assert!(early.contests[0].is_registration_open);
        assert_eq!(late.contests[0].status, ContestStatus::Completed);
        assert!(!late.contests[0].is_market_live);
    }

    #[test]
    fn test_sector_inferred_from_title() {
        let payload = json!([{"title": "Bank Sector Mega Contest"}]);
        let contests = normalize_contests(&payload, at(2024, 1, 1, 0, 0));
        assert_eq!(contests[0].sector_focus, "Banking");
        assert_eq!(contests[0].asset_type, AssetType::Stock);
    }

    #[test]
    fn test_explicit_values_win_over_derived() {
        let payload = json!([{
            "title": "Flat Schema Contest",
            "status": "live",
            "isRegistrationOpen": true,
            "isPortfolioSelectionOpen": false,
            "isMarketLive": false,
            "sectorFocus": "Pharma",
            "entryFee": 250,
            "maxParticipants": "1000",
            "participants": ["u1", "u2"]
        }]);
        let contests = normalize_contests(&payload, at(2024, 1, 1, 0, 0));
        let contest = &contests[0];

        assert_eq!(contest.status, ContestStatus::Live);
        assert!(contest.is_registration_open);
        assert!(!contest.is_market_live);
        assert_eq!(contest.sector_focus, "Pharma");
        assert_relative_eq!(contest.entry_fee, 250.0);
        assert_eq!(contest.max_participants, 1000);
        assert_eq!(contest.participants, vec!["u1", "u2"]);
    }

    #[test]
    fn test_defaults_for_empty_record() {
        let now = at(2024, 1, 1, 12, 0);
        let contests = utc_normalizer().normalize(&json!([{}]), now).into_contests();
        let contest = &contests[0];

        assert_eq!(contest.title, "Unnamed Contest");
        assert_eq!(contest.description, "Join this exciting trading contest!");
        assert_relative_eq!(contest.entry_fee, 100.0);
        assert_relative_eq!(contest.prize_pool, 25_000.0);
        assert_eq!(contest.max_participants, 200);
        assert!(contest.participants.is_empty());
        assert!(contest.id.starts_with("contest-"));

        assert_eq!(contest.start_time, now);
        assert_eq!(contest.end_time, now + Duration::days(1));
        assert_eq!(contest.registration_deadline, at(2024, 1, 2, 2, 0));
        assert_eq!(contest.market_start_time, at(2024, 1, 2, 9, 30));
        assert_eq!(contest.market_end_time, at(2024, 1, 2, 15, 30));
        assert_eq!(contest.status, ContestStatus::Registration);
        assert!(contest.is_registration_open);
        assert_eq!(contest.contest_type, ContestType::Daily);
        assert_eq!(contest.asset_type, AssetType::Stock);
        assert_eq!(contest.sector_focus, ALL_SECTORS);
    }

    #[test]
    fn test_end_time_from_explicit_contest_type() {
        let now = at(2024, 1, 1, 12, 0);
        let payload = json!([{"contestType": "weekly"}, {"contestType": "yearly"}]);
        let contests = normalize_contests(&payload, now);

        assert_eq!(contests[0].end_time, now + Duration::days(7));
        assert_eq!(contests[0].contest_type, ContestType::Weekly);
        assert_eq!(contests[1].end_time, now + Duration::days(1));
        assert_eq!(contests[1].contest_type, ContestType::Daily);
    }

    #[test]
    fn test_non_numeric_amounts_fall_back() {
        let payload = json!([{"entryFee": "free", "prizePool": null, "maxParticipants": -3}]);
        let contests = normalize_contests(&payload, at(2024, 1, 1, 0, 0));

        assert_relative_eq!(contests[0].entry_fee, 100.0);
        assert_relative_eq!(contests[0].prize_pool, 25_000.0);
        assert_eq!(contests[0].max_participants, 200);
    }

    #[test]
    fn test_bad_record_does_not_abort_batch() {
        let payload = json!([
            {"id": 1, "title": "Good One"},
            "not a record",
            {"id": 3, "startDate": "someday"},
            {"id": 4, "title": "Good Two"}
        ]);
        let out = ContestNormalizer::default().normalize(&payload, at(2024, 1, 1, 0, 0));

        let ids: Vec<&str> = out.contests.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
        assert_eq!(out.issues.len(), 2);
        assert_eq!(out.rejected(), 1);
        assert!(matches!(out.issues[0], NormalizeIssue::RecordRejected { index: 1, .. }));
        assert!(matches!(
            out.issues[1],
            NormalizeIssue::FieldDefaulted { index: 2, field: "startTime", .. }
        ));
    }

    #[test]
    fn test_unreadable_timestamp_is_defaulted() {
        let now = at(2024, 1, 1, 12, 0);
        let payload = json!([{"id": 3, "startDate": true, "endDate": "someday"}]);
        let out = utc_normalizer().normalize(&payload, now);

        assert_eq!(out.contests.len(), 1);
        assert_eq!(out.rejected(), 0);
        assert_eq!(out.issues.len(), 2);
        assert!(!out.issues[0].is_fatal());

        let contest = &out.contests[0];
        assert_eq!(contest.start_time, now);
        assert_eq!(contest.end_time, now + Duration::days(1));
        assert_eq!(contest.market_start_time, at(2024, 1, 2, 9, 30));
        assert_eq!(contest.status, ContestStatus::Registration);
    }

    #[test]
    fn test_dual_spelling_records_are_kept() {
        let payload = json!([
            {"id": 1, "title": "Nifty Daily", "name": "nifty-daily"},
            {"id": 2, "prizePool": 50000, "Poolsize": 50000},
            {"id": 3, "startDate": "2024-01-01T09:30:00Z", "start_date": "2024-01-01T09:30:00Z"},
            {"id": 4, "sector": "Banking", "sectorFocus": "Pharma"}
        ]);
        let out = ContestNormalizer::default().normalize(&payload, at(2024, 1, 1, 0, 0));

        assert!(out.is_clean());
        assert_eq!(out.contests.len(), 4);
        assert_eq!(out.contests[0].title, "Nifty Daily");
        assert_relative_eq!(out.contests[1].prize_pool, 50_000.0);
        assert_eq!(out.contests[2].start_time, at(2024, 1, 1, 9, 30));
        assert_eq!(out.contests[3].sector_focus, "Pharma");
    }

    #[test]
    fn test_historical_start_only_contest_is_completed() {
        let payload = json!([{"id": 9, "startDate": "2024-01-01T09:30:00Z"}]);
        let contests = normalize_contests(&payload, at(2024, 6, 1, 12, 0));
        let contest = &contests[0];

        assert_eq!(contest.end_time, at(2024, 1, 2, 9, 30));
        assert_eq!(contest.market_start_time, at(2024, 1, 1, 9, 30));
        assert_eq!(contest.market_end_time, contest.end_time);
        assert_eq!(contest.registration_deadline, contest.market_start_time);
        assert_eq!(contest.status, ContestStatus::Completed);
        assert!(!contest.is_market_live);
        assert!(!contest.is_registration_open);
    }

    #[test]
    fn test_market_start_only_keeps_window_length() {
        let payload = json!([{"contestType": "weekly", "marketStartTime": "2024-01-10T09:30:00Z"}]);
        let contests = normalize_contests(&payload, at(2024, 1, 1, 0, 0));
        let contest = &contests[0];

        assert_eq!(contest.market_start_time, at(2024, 1, 10, 9, 30));
        assert_eq!(contest.market_end_time, at(2024, 1, 17, 9, 30));
        assert_eq!(contest.status, ContestStatus::Registration);
    }

    #[test]
    fn test_synthesized_ids_are_unique() {
        let payload = Value::Array(vec![json!({}); 500]);
        let out = ContestNormalizer::default().normalize(&payload, at(2024, 1, 1, 0, 0));

        let ids: HashSet<&str> = out.contests.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_rejects_invalid_offset() {
        let config = NormalizerConfig {
            market_utc_offset_minutes: 24 * 60,
            ..NormalizerConfig::default()
        };
        assert!(ContestNormalizer::new(config).is_err());
    }

    #[test]
    fn test_issue_serializes_with_kind() {
        let issue = NormalizeIssue::RecordRejected {
            index: 2,
            reason: "bad".to_string(),
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["kind"], "record_rejected");
        assert_eq!(json["index"], 2);
        assert_eq!(issue.to_string(), "record 2 rejected: bad");
    }
}
