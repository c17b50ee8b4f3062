//! Canonical contest types shared by the ingestion and client crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Virtual cash handed to every participant of a crypto contest (1 crore).
pub const CRYPTO_VIRTUAL_CASH: f64 = 10_000_000.0;

/// Virtual cash handed to every participant of a stock contest (10 lakh).
pub const STOCK_VIRTUAL_CASH: f64 = 1_000_000.0;

/// Placeholder sector meaning "no particular focus".
pub const ALL_SECTORS: &str = "All Sectors";

/// Lifecycle phase of a contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContestStatus {
    /// Sign-ups are open.
    Registration,
    /// Registration closed, participants are picking portfolios.
    PortfolioSelection,
    /// Market window is running.
    Live,
    /// Market window has ended.
    Completed,
}

impl ContestStatus {
    /// Parse an upstream status string. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "registration" => Some(ContestStatus::Registration),
            "portfolio_selection" => Some(ContestStatus::PortfolioSelection),
            "live" => Some(ContestStatus::Live),
            "completed" => Some(ContestStatus::Completed),
            _ => None,
        }
    }
}

/// Contest length class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestType {
    Daily,
    Weekly,
    Monthly,
}

impl ContestType {
    /// Parse an upstream contest type string. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(ContestType::Daily),
            "weekly" => Some(ContestType::Weekly),
            "monthly" => Some(ContestType::Monthly),
            _ => None,
        }
    }

    /// Nominal contest length in days, used when upstream gives no end time.
    pub fn nominal_days(self) -> i64 {
        match self {
            ContestType::Daily => 1,
            ContestType::Weekly => 7,
            ContestType::Monthly => 30,
        }
    }

    /// Classify an elapsed duration: up to 24h is daily, up to 168h weekly.
    pub fn from_duration(duration: chrono::Duration) -> Self {
        if duration <= chrono::Duration::hours(24) {
            ContestType::Daily
        } else if duration <= chrono::Duration::hours(168) {
            ContestType::Weekly
        } else {
            ContestType::Monthly
        }
    }
}

/// Instrument class traded in a contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Stock,
    Crypto,
}

impl AssetType {
    /// Parse an upstream asset type string. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "stock" | "stocks" | "equity" => Some(AssetType::Stock),
            "crypto" => Some(AssetType::Crypto),
            _ => None,
        }
    }

    /// Starting virtual cash for this asset class.
    #[inline]
    pub fn virtual_cash(self) -> f64 {
        match self {
            AssetType::Crypto => CRYPTO_VIRTUAL_CASH,
            AssetType::Stock => STOCK_VIRTUAL_CASH,
        }
    }
}

/// A fully populated contest record.
///
/// Derived fields (`status`, the three phase flags) are valid for the
/// evaluation time the record was normalized at; re-normalize to refresh them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub entry_fee: f64,
    pub prize_pool: f64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub registration_deadline: DateTime<Utc>,
    pub market_start_time: DateTime<Utc>,
    pub market_end_time: DateTime<Utc>,
    pub participants: Vec<String>,
    pub max_participants: u32,
    pub status: ContestStatus,
    pub contest_type: ContestType,
    pub asset_type: AssetType,
    /// Always `asset_type.virtual_cash()`.
    pub virtual_cash: f64,
    pub is_registration_open: bool,
    pub is_portfolio_selection_open: bool,
    pub is_market_live: bool,
    pub sector_focus: String,
}
