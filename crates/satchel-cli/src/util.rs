use anyhow::Result;
use satchel_core::rules::validate_window_days;

/// Resolves a `--days` argument against the configured default and checks
/// the bounds.
pub fn resolve_window_days(days: Option<i64>, default: i64) -> Result<i64> {
    let days = days.unwrap_or(default);
    Ok(validate_window_days(days)?)
}
