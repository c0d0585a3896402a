use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One unprocessed search-result record as returned by the auction search
/// API. Every field is optional at this level; the extractor decides which
/// ones a usable listing actually needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawItem {
    pub item_id: Option<String>,
    pub title: Option<String>,
    pub price: Option<RawPrice>,
    pub end_time: Option<EndTimeValue>,
    pub url: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub condition: Option<String>,
    pub bid_count: Option<u32>,
    pub seller: Option<String>,
}

/// Price as it appears on the wire: the amount may be a bare string or a
/// JSON number, and the currency code is often absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPrice {
    pub value: serde_json::Value,
    pub currency: Option<String>,
}

/// End-time representations seen in practice. JSON payloads always carry a
/// string; the structured variants exist for callers that already hold a
/// parsed timestamp, with or without an offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndTimeValue {
    Text(String),
    Aware(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

/// Normalized representation of one auction search result. Immutable after
/// extraction; `end_time` is always an absolute UTC instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: Price,
    pub end_time: DateTime<Utc>,
    pub url: String,
    pub category: String,
    pub location: String,
    pub condition: String,
    pub bid_count: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Price {
    pub value: Decimal,
    pub currency: String,
}

/// Time range used to filter listings by auction end. The reference instant
/// of a relative window is injected by the caller, never read internally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeWindow {
    /// Closed interval `[now, now + duration]`.
    Relative {
        now: DateTime<Utc>,
        duration: Duration,
    },
    /// Half-open interval `[from, to)`.
    Absolute {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}

impl TimeWindow {
    pub fn ending_within(now: DateTime<Utc>, duration: Duration) -> Self {
        TimeWindow::Relative { now, duration }
    }

    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        TimeWindow::Absolute { from, to }
    }

    /// Whether an end time falls inside the window. A window with no extent
    /// (`duration <= 0` or `to <= from`) contains nothing.
    pub fn contains(&self, end_time: DateTime<Utc>) -> bool {
        match *self {
            TimeWindow::Relative { now, duration } => {
                duration > Duration::zero() && end_time >= now && end_time <= now + duration
            }
            TimeWindow::Absolute { from, to } => from <= end_time && end_time < to,
        }
    }

    /// Latest instant the window can select; used to derive the `EndTimeTo`
    /// filter of the upstream search request.
    pub fn upper_bound(&self) -> DateTime<Utc> {
        match *self {
            TimeWindow::Relative { now, duration } => now + duration,
            TimeWindow::Absolute { to, .. } => to,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub listings: Vec<Listing>,
    pub skipped: usize,
    pub csv_output: String,
}
