use chrono::{DateTime, Utc};

const MS_PER_MINUTE: i64 = 60 * 1000;

/// Short relative age such as `5m ago`, `3h ago` or `12d ago`.
///
/// All steps floor. A timestamp in the future gives a negative count.
pub fn time_ago(bumped_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = now.signed_duration_since(bumped_at).num_milliseconds();
    let minutes = elapsed_ms.div_euclid(MS_PER_MINUTE);
    let hours = minutes.div_euclid(60);
    let days = hours.div_euclid(24);

    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{days}d ago")
}

/// Thousands are truncated, not rounded: 5999 -> `5k`.
pub fn view_count(views: u64) -> String {
    if views >= 1000 {
        format!("{}k", views / 1000)
    } else {
        views.to_string()
    }
}
