use chrono::{DateTime, Utc};

/// Compact "updated Xm ago" text for the status bar.
pub fn relative_time(dt: &DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(dt);

    if elapsed.num_seconds() < 60 {
        return "updated just now".to_string();
    }
    if elapsed.num_minutes() < 60 {
        return format!("updated {}m ago", elapsed.num_minutes());
    }
    if elapsed.num_hours() < 24 {
        return format!("updated {}h ago", elapsed.num_hours());
    }
    format!("updated {}d ago", elapsed.num_days())
}
