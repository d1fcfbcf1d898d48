//! User and API usage output formatting.

use ellie_api_rs::models::{ApiUsage, User};

/// Formats the current user as aligned key/value rows.
pub fn format_user(user: &User) -> String {
    format!(
        "Name:   {}\nEmail:  {}\nID:     {}",
        user.name, user.email, user.id
    )
}

/// Formats API usage as aligned key/value rows.
pub fn format_usage(usage: &ApiUsage) -> String {
    format!(
        "Date:      {}\nUsed:      {} / {} requests\nRemaining: {}\nResets:    {}\nRate:      {} req/min",
        usage.today.date,
        usage.today.used,
        usage.today.limit,
        usage.today.remaining,
        usage.reset_at,
        usage.rate_limit.requests_per_minute
    )
}
