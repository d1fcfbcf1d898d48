//! User and API usage models.

use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// API usage statistics for the current key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiUsage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub today: ApiUsageToday,
    #[serde(rename = "rateLimit", default, deserialize_with = "null_as_default")]
    pub rate_limit: ApiUsageRateLimit,
    /// When the daily quota resets.
    #[serde(rename = "resetAt", default, deserialize_with = "null_as_default")]
    pub reset_at: String,
}

/// Requests made today against the daily quota.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiUsageToday {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub used: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub remaining: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub limit: i64,
}

/// Per-minute rate limit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiUsageRateLimit {
    #[serde(rename = "requestsPerMinute", default, deserialize_with = "null_as_default")]
    pub requests_per_minute: i64,
    #[serde(rename = "windowMs", default, deserialize_with = "null_as_default")]
    pub window_ms: i64,
}
