use crate::models::Video;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Score,
    Views,
    Recent,
}

impl SortKey {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Score => "Psychological score",
            SortKey::Views => "View count",
            SortKey::Recent => "Most recent",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![SortKey::Score, SortKey::Views, SortKey::Recent]
    }
}

// Keys used in <option value="..."> so we can reliably map back and forth.
pub fn sort_key_value(key: &SortKey) -> &'static str {
    match key {
        SortKey::Score => "score",
        SortKey::Views => "views",
        SortKey::Recent => "recent",
    }
}

pub fn sort_key_from_value(value: &str) -> Option<SortKey> {
    match value {
        "score" => Some(SortKey::Score),
        "views" => Some(SortKey::Views),
        "recent" => Some(SortKey::Recent),
        _ => None,
    }
}

// Helper to read "value" from any event target without HtmlSelectElement.
pub fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

/// Re-sort the already-fetched list without touching the network. Always
/// descending; recency falls back to epoch 0 for missing timestamps.
pub fn sort_videos(videos: &[Video], key: SortKey) -> Vec<Video> {
    let mut sorted = videos.to_vec();
    match key {
        SortKey::Score => sorted.sort_by(|a, b| b.score.total_cmp(&a.score)),
        SortKey::Views => sorted.sort_by(|a, b| b.views.cmp(&a.views)),
        SortKey::Recent => {
            sorted.sort_by_key(|v| std::cmp::Reverse(scraped_at_epoch(v)));
        }
    }
    sorted
}

fn scraped_at_epoch(video: &Video) -> i64 {
    let Some(raw) = video.scraped_at.as_deref() else {
        return 0;
    };
    if let Ok(datetime) = raw.parse::<chrono::DateTime<chrono::Utc>>() {
        return datetime.timestamp();
    }
    // The scraper writes naive local timestamps without an offset.
    if let Ok(naive) = raw.parse::<chrono::NaiveDateTime>() {
        return naive.and_utc().timestamp();
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(score: f64, views: i64, scraped_at: Option<&str>) -> Video {
        Video {
            title: format!("video-{}", score),
            channel: None,
            views,
            duration: None,
            published: None,
            country: None,
            url: None,
            features: Default::default(),
            score,
            scraped_at: scraped_at.map(str::to_string),
        }
    }

    #[test]
    fn sorts_by_score_descending() {
        let videos = vec![
            video(10.0, 0, None),
            video(90.0, 0, None),
            video(50.0, 0, None),
        ];
        let sorted = sort_videos(&videos, SortKey::Score);
        let scores: Vec<f64> = sorted.iter().map(|v| v.score).collect();
        assert_eq!(scores, vec![90.0, 50.0, 10.0]);
    }

    #[test]
    fn sorts_by_views_descending() {
        let videos = vec![
            video(0.0, 1_000, None),
            video(0.0, 5_000_000, None),
            video(0.0, 42, None),
        ];
        let sorted = sort_videos(&videos, SortKey::Views);
        let views: Vec<i64> = sorted.iter().map(|v| v.views).collect();
        assert_eq!(views, vec![5_000_000, 1_000, 42]);
    }

    #[test]
    fn recency_treats_missing_dates_as_epoch_zero() {
        let videos = vec![
            video(1.0, 0, None),
            video(2.0, 0, Some("2025-06-02T10:00:00.000000")),
            video(3.0, 0, Some("2025-06-01T10:00:00.000000")),
            video(4.0, 0, Some("not a date")),
        ];
        let sorted = sort_videos(&videos, SortKey::Recent);
        let scores: Vec<f64> = sorted.iter().map(|v| v.score).collect();
        assert_eq!(&scores[..2], &[2.0, 3.0]);
        // Both undated entries collapse to epoch 0 behind the dated ones.
        assert!(scores[2..].contains(&1.0));
        assert!(scores[2..].contains(&4.0));
    }

    #[test]
    fn sort_key_values_round_trip() {
        for key in SortKey::all_variants() {
            assert_eq!(sort_key_from_value(sort_key_value(&key)), Some(key));
        }
        assert_eq!(sort_key_from_value("relevance"), None);
    }
}
