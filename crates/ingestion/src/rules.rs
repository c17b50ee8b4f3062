//! Derivation rules for contest fields that upstream does not supply.
//!
//! All functions here are pure: they take the evaluation time explicitly so
//! the same raw record can be re-derived at a later instant.

use chrono::{DateTime, Duration, FixedOffset, NaiveTime, TimeZone, Utc};

use rush_core::{AssetType, ContestStatus, ALL_SECTORS};

/// Keywords that mark a contest as crypto when found in its title or sector.
const CRYPTO_KEYWORDS: [&str; 2] = ["crypto", "bitcoin"];

/// How a sector keyword is matched against a lowercased title.
#[derive(Debug, Clone, Copy)]
enum Keyword {
    /// Whole word, delimited by non-alphanumeric characters.
    Word(&'static str),
    /// Anywhere in the title.
    Substring(&'static str),
}

impl Keyword {
    fn matches(self, title_lower: &str) -> bool {
        match self {
            Keyword::Word(word) => title_lower
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| token == word),
            Keyword::Substring(needle) => title_lower.contains(needle),
        }
    }
}

/// Ordered sector rules; the first rule with a matching keyword wins.
const SECTOR_RULES: &[(&[Keyword], &str)] = &[
    (&[Keyword::Word("it"), Keyword::Substring("tech")], "IT Services"),
    (&[Keyword::Substring("bank")], "Banking"),
    (&[Keyword::Substring("fmcg")], "FMCG"),
    (&[Keyword::Substring("small cap")], "Small Cap"),
];

/// Piecewise status by evaluation time. Each boundary belongs to the later phase.
pub fn derive_status(
    now: DateTime<Utc>,
    registration_deadline: DateTime<Utc>,
    market_start: DateTime<Utc>,
    market_end: DateTime<Utc>,
) -> ContestStatus {
    if now < registration_deadline {
        ContestStatus::Registration
    } else if now < market_start {
        ContestStatus::PortfolioSelection
    } else if now < market_end {
        ContestStatus::Live
    } else {
        ContestStatus::Completed
    }
}

/// Phase flags implied by a status: (registration open, portfolio selection open, market live).
pub fn flags_for(status: ContestStatus) -> (bool, bool, bool) {
    match status {
        ContestStatus::Registration => (true, false, false),
        ContestStatus::PortfolioSelection => (false, true, false),
        ContestStatus::Live => (false, false, true),
        ContestStatus::Completed => (false, false, false),
    }
}

/// Crypto when the title or sector mentions a crypto keyword, stock otherwise.
pub fn detect_asset_type(title: Option<&str>, sector: Option<&str>) -> AssetType {
    let mentions_crypto = |text: &str| {
        let lower = text.to_lowercase();
        CRYPTO_KEYWORDS.iter().any(|kw| lower.contains(kw))
    };

    if title.is_some_and(mentions_crypto) || sector.is_some_and(mentions_crypto) {
        AssetType::Crypto
    } else {
        AssetType::Stock
    }
}

/// Sector focus: an explicit sector wins unless it is the placeholder;
/// otherwise the first matching title rule; otherwise "All Sectors".
pub fn resolve_sector(explicit: Option<&str>, title: Option<&str>) -> String {
    if let Some(sector) = explicit.filter(|s| !s.is_empty() && *s != ALL_SECTORS) {
        return sector.to_string();
    }

    title
        .and_then(infer_sector)
        .unwrap_or(ALL_SECTORS)
        .to_string()
}

/// Sector implied by title keywords, if any.
pub fn infer_sector(title: &str) -> Option<&'static str> {
    let lower = title.to_lowercase();
    SECTOR_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| kw.matches(&lower)))
        .map(|(_, sector)| *sector)
}

/// Instant of the next market-local day at `minutes` past midnight.
pub fn next_day_at(now: DateTime<Utc>, market_tz: FixedOffset, minutes: u32) -> DateTime<Utc> {
    let tomorrow = now.with_timezone(&market_tz).date_naive() + Duration::days(1);
    let local = tomorrow.and_time(NaiveTime::default()) + Duration::minutes(minutes as i64);
    // A fixed offset has exactly one UTC instant per local time.
    Utc.from_utc_datetime(&(local - Duration::seconds(market_tz.local_minus_utc() as i64)))
}
