/// Bucket a psychological title score for badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBucket {
    High,
    Medium,
    Low,
}

impl ScoreBucket {
    pub fn of(score: f64) -> Self {
        if score >= 70.0 {
            ScoreBucket::High
        } else if score >= 50.0 {
            ScoreBucket::Medium
        } else {
            ScoreBucket::Low
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ScoreBucket::High => "bg-green-100 text-green-800",
            ScoreBucket::Medium => "bg-yellow-100 text-yellow-800",
            ScoreBucket::Low => "bg-red-100 text-red-800",
        }
    }
}

// Compacts view counts each x1000 step
pub fn format_count(count: i64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Clock-style rendering of a duration given in seconds (the backend sends
/// it as a string). Zero or unparsable input has no meaningful duration.
pub fn format_duration_clock(seconds: &str) -> String {
    let total = seconds.trim().parse::<i64>().unwrap_or(0);
    if total <= 0 {
        return "N/A".to_string();
    }

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

pub fn format_run_started(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        return datetime.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(naive) = iso_date.parse::<chrono::NaiveDateTime>() {
        return naive.format("%Y-%m-%d %H:%M").to_string();
    }
    iso_date.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_buckets() {
        assert_eq!(ScoreBucket::of(95.0), ScoreBucket::High);
        assert_eq!(ScoreBucket::of(70.0), ScoreBucket::High);
        assert_eq!(ScoreBucket::of(69.9), ScoreBucket::Medium);
        assert_eq!(ScoreBucket::of(50.0), ScoreBucket::Medium);
        assert_eq!(ScoreBucket::of(49.9), ScoreBucket::Low);
        assert_eq!(ScoreBucket::of(0.0), ScoreBucket::Low);
    }

    #[test]
    fn count_suffixes() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(45_300), "45.3K");
        assert_eq!(format_count(999_999), "1000.0K");
        assert_eq!(format_count(1_000_000), "1.0M");
        assert_eq!(format_count(2_540_000), "2.5M");
    }

    #[test]
    fn duration_clock() {
        assert_eq!(format_duration_clock("0"), "N/A");
        assert_eq!(format_duration_clock(""), "N/A");
        assert_eq!(format_duration_clock("abc"), "N/A");
        assert_eq!(format_duration_clock("59"), "0:59");
        assert_eq!(format_duration_clock("307"), "5:07");
        assert_eq!(format_duration_clock("3600"), "1:00:00");
        assert_eq!(format_duration_clock("3725"), "1:02:05");
    }

    #[test]
    fn run_started_accepts_naive_timestamps() {
        assert_eq!(
            format_run_started("2025-06-01T09:30:12.123456"),
            "2025-06-01 09:30"
        );
        assert_eq!(format_run_started("20250601-093012"), "20250601-093012");
    }
}
