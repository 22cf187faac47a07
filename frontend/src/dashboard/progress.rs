use crate::models::{ProgressSnapshot, ScrapeStatus};

/// What the progress bar and its caption should show. Both the 1-second
/// progress poll and the pushed progress events render through this one
/// type, so the modal does not care which transport fed it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub percent: u32,
    pub text: String,
}

impl Default for ProgressView {
    fn default() -> Self {
        progress_view(&ProgressSnapshot::default())
    }
}

/// Map raw counters to a percentage and caption. Country progress wins
/// over the items-only pseudo-progress; with neither available the view
/// stays at the initializing placeholder.
pub fn progress_view(snapshot: &ProgressSnapshot) -> ProgressView {
    if let Some(total) = snapshot.countries_total.filter(|&t| t > 0) {
        let done = snapshot.countries_done.unwrap_or(0);
        let items = snapshot.items_scraped.unwrap_or(0);
        let percent = (f64::from(done) / f64::from(total) * 100.0).round() as u32;
        return ProgressView {
            percent,
            text: format!("{}/{} countries - {} items", done, total, items),
        };
    }

    if let Some(items) = snapshot.items_scraped.filter(|&n| n > 0) {
        // No known total: bounded pseudo-progress that never reads as done.
        let percent = (items % 100).min(99) as u32;
        return ProgressView {
            percent,
            text: format!("{} items scraped", items),
        };
    }

    ProgressView {
        percent: 0,
        text: "Initializing...".to_string(),
    }
}

pub fn is_terminal(snapshot: &ProgressSnapshot) -> bool {
    snapshot.status.as_deref() == Some("finished")
}

/// Detail line under the status headline while a run is active.
pub fn status_detail(snapshot: &ProgressSnapshot) -> String {
    match snapshot.current_country.as_deref() {
        Some(country) if !country.is_empty() => format!("Country: {}", country),
        _ => "Collecting video data".to_string(),
    }
}

/// Message for the completion notification, if the finished run deserves
/// one (explicit terminal tag, or anything actually collected).
pub fn completion_notice(status: &ScrapeStatus) -> Option<String> {
    let items = status.progress.items_scraped.unwrap_or(0);
    if is_terminal(&status.progress) || items > 0 {
        Some(format!("Scraping finished: {} videos collected", items))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(
        countries_total: Option<u32>,
        countries_done: Option<u32>,
        items_scraped: Option<u64>,
    ) -> ProgressSnapshot {
        ProgressSnapshot {
            countries_total,
            countries_done,
            items_scraped,
            ..Default::default()
        }
    }

    #[test]
    fn country_counters_take_priority() {
        let view = progress_view(&snapshot(Some(10), Some(3), Some(50)));
        assert_eq!(view.percent, 30);
        assert!(view.text.contains("3/10"));
        assert!(view.text.contains("50"));
    }

    #[test]
    fn country_percent_rounds_to_nearest() {
        let view = progress_view(&snapshot(Some(3), Some(2), None));
        assert_eq!(view.percent, 67);
    }

    #[test]
    fn items_only_gives_bounded_pseudo_progress() {
        let view = progress_view(&snapshot(None, None, Some(150)));
        assert_eq!(view.percent, 50);
        assert!(view.text.contains("150"));

        // The modulo wrap may never claim completion.
        let view = progress_view(&snapshot(None, None, Some(99)));
        assert_eq!(view.percent, 99);
        let view = progress_view(&snapshot(None, None, Some(100)));
        assert_eq!(view.percent, 0);
    }

    #[test]
    fn empty_snapshot_is_the_placeholder() {
        let view = progress_view(&ProgressSnapshot::default());
        assert_eq!(view.percent, 0);
        assert_eq!(view.text, "Initializing...");

        // Zero items is still unknown progress, not pseudo-progress.
        let view = progress_view(&snapshot(None, None, Some(0)));
        assert_eq!(view.text, "Initializing...");
    }

    #[test]
    fn terminal_tag_is_transport_independent() {
        let mut snap = ProgressSnapshot::default();
        assert!(!is_terminal(&snap));
        snap.status = Some("running".to_string());
        assert!(!is_terminal(&snap));
        snap.status = Some("finished".to_string());
        assert!(is_terminal(&snap));
    }

    #[test]
    fn detail_prefers_current_country() {
        let mut snap = ProgressSnapshot::default();
        assert_eq!(status_detail(&snap), "Collecting video data");
        snap.current_country = Some("France".to_string());
        assert_eq!(status_detail(&snap), "Country: France");
    }

    #[test]
    fn completion_notice_needs_results_or_terminal_tag() {
        let mut status = ScrapeStatus::default();
        assert_eq!(completion_notice(&status), None);

        status.progress.items_scraped = Some(42);
        let notice = completion_notice(&status).unwrap();
        assert!(notice.contains("42"));

        let mut status = ScrapeStatus::default();
        status.progress.status = Some("finished".to_string());
        assert!(completion_notice(&status).is_some());
    }
}
