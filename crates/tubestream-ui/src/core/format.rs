//! Display formatting for durations, timestamps, counts, and avatars.

use chrono::{DateTime, Utc};

/// Avatar used when a channel has no picture.
pub const DEFAULT_AVATAR_URL: &str = "https://yt3.ggpht.com/ytc/AAUvwnjuH8xEZYYnXE9jY9MgHvOy-rQTjYZGXZIBSXny=s88-c-k-c0x00ffffff-no-rj";

/// `H:MM:SS` from one hour up, otherwise `M:SS`.
#[must_use]
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Badge text for a video length in (possibly fractional) seconds; `None` when there is no length.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn duration_badge(seconds: f64) -> Option<String> {
    (seconds.is_finite() && seconds > 0.0).then(|| format_duration(seconds.floor() as u64))
}

/// `N views • <relative time>` line under a video title.
#[must_use]
pub fn video_meta(views: u64, created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!("{} • {}", views_label(views), relative_time(created, now))
}

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1_440;
const MINUTES_PER_MONTH: i64 = 43_200;

/// Distance between `then` and `now` in words, e.g. "about 2 hours ago" or "in 3 days".
#[must_use]
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then).num_seconds();
    let phrase = distance_in_words(delta.unsigned_abs());
    if delta < 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

const fn rounded_div(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

fn distance_in_words(seconds: u64) -> String {
    let seconds = i64::try_from(seconds).unwrap_or(i64::MAX / 2);
    if seconds < 30 {
        return "less than a minute".to_string();
    }
    if seconds < 90 {
        return "1 minute".to_string();
    }
    let minutes = rounded_div(seconds, 60);
    if minutes < 45 {
        return format!("{minutes} minutes");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_PER_DAY {
        return format!("about {} hours", rounded_div(minutes, MINUTES_PER_HOUR));
    }
    if minutes < 2_520 {
        return "1 day".to_string();
    }
    if minutes < MINUTES_PER_MONTH {
        return format!("{} days", rounded_div(minutes, MINUTES_PER_DAY));
    }
    if minutes < 64_800 {
        return "about 1 month".to_string();
    }
    if minutes < 86_400 {
        return "about 2 months".to_string();
    }
    let months = minutes / MINUTES_PER_MONTH;
    if months < 12 {
        return format!("{months} months");
    }
    let years = months / 12;
    let remainder = months % 12;
    if remainder < 3 {
        format!("about {}", plural(years, "year", "years"))
    } else if remainder < 9 {
        format!("over {}", plural(years, "year", "years"))
    } else {
        format!("almost {} years", years + 1)
    }
}

fn plural(count: i64, singular: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {many}")
    }
}

/// `"1 <singular>"` or `"N <plural>"`.
#[must_use]
pub fn count_label(count: u64, singular: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {many}")
    }
}

/// "1 view" / "N views".
#[must_use]
pub fn views_label(count: u64) -> String {
    count_label(count, "view", "views")
}

/// "1 subscriber" / "N subscribers".
#[must_use]
pub fn subscribers_label(count: u64) -> String {
    count_label(count, "subscriber", "subscribers")
}

/// "1 video" / "N videos".
#[must_use]
pub fn videos_label(count: u64) -> String {
    count_label(count, "video", "videos")
}

/// "1 Comment" / "N Comments".
#[must_use]
pub fn comments_label(count: u64) -> String {
    count_label(count, "Comment", "Comments")
}

/// Byte size in megabytes with two decimals.
#[must_use]
pub fn format_megabytes(bytes: f64) -> String {
    format!("{:.2} MB", bytes / (1024.0 * 1024.0))
}

/// Upper-cased first letter of `username`, or `U`.
#[must_use]
pub fn avatar_initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map_or_else(|| "U".to_string(), |first| first.to_uppercase().collect())
}

/// Avatar URL or the shared default.
#[must_use]
pub fn avatar_url(picture: Option<&str>) -> &str {
    picture
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_AVATAR_URL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn badge_floors_fractional_seconds() {
        assert_eq!(duration_badge(125.9).as_deref(), Some("2:05"));
        assert_eq!(duration_badge(3_725.0).as_deref(), Some("1:02:05"));
        assert_eq!(duration_badge(0.4).as_deref(), Some("0:00"));
        assert_eq!(duration_badge(0.0), None);
        assert_eq!(duration_badge(f64::NAN), None);
    }

    #[test]
    fn meta_line_joins_views_and_age() {
        let now = Utc::now();
        let created = now - Duration::days(3);
        assert_eq!(video_meta(1, created, now), "1 view • 3 days ago");
    }

    fn at(seconds_ago: i64) -> String {
        let now = Utc
            .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        relative_time(now - Duration::seconds(seconds_ago), now)
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(125), "2:05");
        assert_eq!(format_duration(3599), "59:59");
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3725), "1:02:05");
    }

    #[test]
    fn relative_time_buckets() {
        assert_eq!(at(10), "less than a minute ago");
        assert_eq!(at(60), "1 minute ago");
        assert_eq!(at(5 * 60), "5 minutes ago");
        assert_eq!(at(60 * 60), "about 1 hour ago");
        assert_eq!(at(5 * 3600), "about 5 hours ago");
        assert_eq!(at(30 * 3600), "1 day ago");
        assert_eq!(at(5 * 86_400), "5 days ago");
        assert_eq!(at(35 * 86_400), "about 1 month ago");
        assert_eq!(at(50 * 86_400), "about 2 months ago");
        assert_eq!(at(150 * 86_400), "5 months ago");
        assert_eq!(at(365 * 86_400), "about 1 year ago");
        assert_eq!(at(2 * 365 * 86_400 + 180 * 86_400), "over 2 years ago");
        assert_eq!(at(2 * 365 * 86_400 + 300 * 86_400), "almost 3 years ago");
    }

    #[test]
    fn future_instants_use_in() {
        assert_eq!(at(-3 * 86_400), "in 3 days");
    }

    #[test]
    fn labels_pluralise() {
        assert_eq!(views_label(1), "1 view");
        assert_eq!(views_label(0), "0 views");
        assert_eq!(subscribers_label(2), "2 subscribers");
        assert_eq!(videos_label(1), "1 video");
        assert_eq!(comments_label(3), "3 Comments");
    }

    #[test]
    fn megabytes_and_initials() {
        assert_eq!(format_megabytes(5.0 * 1024.0 * 1024.0), "5.00 MB");
        assert_eq!(format_megabytes(1_572_864.0), "1.50 MB");
        assert_eq!(avatar_initial("alice"), "A");
        assert_eq!(avatar_initial(""), "U");
        assert_eq!(avatar_url(None), DEFAULT_AVATAR_URL);
        assert_eq!(avatar_url(Some("https://a/b.png")), "https://a/b.png");
    }
}
