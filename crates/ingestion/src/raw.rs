//! Loosely typed upstream contest record.
//!
//! The contest API has shipped two schemas: an older flat one with
//! pre-computed flags (`title`, `entryFee`, `isMarketLive`, ...) and a newer
//! one carrying names and timestamp pairs (`Contest_name`, `Poolsize`,
//! `start_date`, `registration_ends_at`, ...). `RawContest` accepts the union
//! of both. Every field is optional and kept as a JSON value; coercion to
//! concrete types happens in the `coerce_*` helpers so a badly typed field
//! falls back to its default instead of failing the record.
//!
//! A record may carry more than one spelling of a field. Each field has an
//! ordered key list and the first key present (and not null) wins.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde_json::{Map, Value};

/// Numeric timestamps below this are epoch seconds (1e11 s is year 5138).
pub const EPOCH_SECONDS_LIMIT: i64 = 100_000_000_000;

const ID_KEYS: &[&str] = &["id"];
const TITLE_KEYS: &[&str] = &["title", "Contest_name", "contest_name", "name"];
const DESCRIPTION_KEYS: &[&str] = &["description"];
const ENTRY_FEE_KEYS: &[&str] = &["entryFee", "entry_fee"];
const PRIZE_POOL_KEYS: &[&str] = &["prizePool", "prize_pool", "Poolsize", "pool_size"];
const MAX_PARTICIPANTS_KEYS: &[&str] = &["maxParticipants", "max_participants"];
const START_KEYS: &[&str] = &["startTime", "startDate", "start_date", "start_time"];
const END_KEYS: &[&str] = &["endTime", "endDate", "end_date", "end_time"];
const REGISTRATION_KEYS: &[&str] = &[
    "registrationDeadline",
    "registrationEndsAt",
    "registration_ends_at",
    "registration_deadline",
];
const MARKET_START_KEYS: &[&str] = &["marketStartTime", "market_start_time"];
const MARKET_END_KEYS: &[&str] = &["marketEndTime", "market_end_time"];
const PARTICIPANTS_KEYS: &[&str] = &["participants"];
const STATUS_KEYS: &[&str] = &["status"];
const CONTEST_TYPE_KEYS: &[&str] = &["contestType", "contest_type"];
const ASSET_TYPE_KEYS: &[&str] = &["assetType", "asset_type"];
const SECTOR_KEYS: &[&str] = &["sectorFocus", "sector_focus", "sector"];
const REGISTRATION_OPEN_KEYS: &[&str] = &["isRegistrationOpen", "is_registration_open"];
const SELECTION_OPEN_KEYS: &[&str] = &["isPortfolioSelectionOpen", "is_portfolio_selection_open"];
const MARKET_LIVE_KEYS: &[&str] = &["isMarketLive", "is_market_live"];

/// Upstream contest record, superset of every known schema version.
#[derive(Debug, Clone, Default)]
pub struct RawContest {
    pub id: Option<Value>,
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub entry_fee: Option<Value>,
    pub prize_pool: Option<Value>,
    pub max_participants: Option<Value>,
    pub start_time: Option<Value>,
    pub end_time: Option<Value>,
    pub registration_deadline: Option<Value>,
    pub market_start_time: Option<Value>,
    pub market_end_time: Option<Value>,
    pub participants: Option<Value>,
    pub status: Option<Value>,
    pub contest_type: Option<Value>,
    pub asset_type: Option<Value>,
    pub sector_focus: Option<Value>,
    pub is_registration_open: Option<Value>,
    pub is_portfolio_selection_open: Option<Value>,
    pub is_market_live: Option<Value>,
}

impl RawContest {
    /// Read one upstream array element.
    ///
    /// Only JSON objects are records. Unknown keys are ignored.
    pub fn from_value(item: &Value) -> Result<Self, String> {
        let map = item
            .as_object()
            .ok_or_else(|| format!("expected an object, found {}", json_kind(item)))?;
        Ok(Self::from_map(map))
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            id: pick(map, ID_KEYS),
            title: pick(map, TITLE_KEYS),
            description: pick(map, DESCRIPTION_KEYS),
            entry_fee: pick(map, ENTRY_FEE_KEYS),
            prize_pool: pick(map, PRIZE_POOL_KEYS),
            max_participants: pick(map, MAX_PARTICIPANTS_KEYS),
            start_time: pick(map, START_KEYS),
            end_time: pick(map, END_KEYS),
            registration_deadline: pick(map, REGISTRATION_KEYS),
            market_start_time: pick(map, MARKET_START_KEYS),
            market_end_time: pick(map, MARKET_END_KEYS),
            participants: pick(map, PARTICIPANTS_KEYS),
            status: pick(map, STATUS_KEYS),
            contest_type: pick(map, CONTEST_TYPE_KEYS),
            asset_type: pick(map, ASSET_TYPE_KEYS),
            sector_focus: pick(map, SECTOR_KEYS),
            is_registration_open: pick(map, REGISTRATION_OPEN_KEYS),
            is_portfolio_selection_open: pick(map, SELECTION_OPEN_KEYS),
            is_market_live: pick(map, MARKET_LIVE_KEYS),
        }
    }
}

/// First non-null value among `keys`, in order.
fn pick(map: &Map<String, Value>, keys: &[&str]) -> Option<Value> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !value.is_null())
        .cloned()
}

/// Short name of a JSON value's type, for diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Non-empty trimmed string.
pub fn coerce_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Identifier: strings and numbers are accepted, numbers keep their JSON spelling.
pub fn coerce_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(n) => Some(n.to_string()),
        other => coerce_text(Some(other)),
    }
}

/// Non-negative finite number from a JSON number or numeric string.
pub fn coerce_amount(value: Option<&Value>) -> Option<f64> {
    let amount = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok()?,
        _ => return None,
    };
    (amount.is_finite() && amount >= 0.0).then_some(amount)
}

/// Whole non-negative count that fits in a `u32`.
pub fn coerce_count(value: Option<&Value>) -> Option<u32> {
    let count = coerce_amount(value)?;
    (count.fract() == 0.0 && count <= u32::MAX as f64).then_some(count as u32)
}

/// Boolean, also accepting the strings "true" and "false".
pub fn coerce_flag(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Participant identifiers; entries that are neither strings nor numbers are dropped.
pub fn coerce_participants(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| coerce_id(Some(item)))
            .collect(),
        _ => Vec::new(),
    }
}

/// Timestamp field.
///
/// `Ok(None)` when absent. Strings may be RFC 3339 or naive
/// `YYYY-MM-DD[T ]HH:MM:SS` in market local time. Integers below
/// [`EPOCH_SECONDS_LIMIT`] are epoch seconds, larger ones epoch milliseconds.
/// Anything else present but unreadable is an error.
pub fn coerce_timestamp(
    field: &str,
    value: Option<&Value>,
    market_tz: FixedOffset,
) -> Result<Option<DateTime<Utc>>, String> {
    let value = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(v) => v,
    };

    match value {
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => parse_timestamp(s.trim(), market_tz)
            .map(Some)
            .ok_or_else(|| format!("{}: unparseable timestamp '{}'", field, s)),
        Value::Number(n) => n
            .as_i64()
            .and_then(from_epoch)
            .map(Some)
            .ok_or_else(|| format!("{}: epoch timestamp out of range: {}", field, n)),
        other => Err(format!("{}: expected a timestamp, found {}", field, json_kind(other))),
    }
}

fn from_epoch(n: i64) -> Option<DateTime<Utc>> {
    if n.abs() < EPOCH_SECONDS_LIMIT {
        DateTime::<Utc>::from_timestamp(n, 0)
    } else {
        DateTime::<Utc>::from_timestamp_millis(n)
    }
}

fn parse_timestamp(raw: &str, market_tz: FixedOffset) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| market_tz.from_local_datetime(&naive).single())
        .map(|ts| ts.with_timezone(&Utc))
}
