use crate::env_variable_utils::BACKEND_URL;
use crate::models::{
    ProgressSnapshot, RunInfo, ScrapeStatus, StartScrapeResponse, StatsSummary,
    StopScrapeResponse, Video, WaitScrapeRequest, WaitScrapeResponse,
};
use gloo_net::http::Request;

pub async fn fetch_stats() -> Result<StatsSummary, String> {
    let backend_url = &*BACKEND_URL;
    let url = format!("{}/api/stats", backend_url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<StatsSummary>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

pub async fn fetch_top_videos(n: usize) -> Result<Vec<Video>, String> {
    let backend_url = &*BACKEND_URL;
    let url = format!("{}/api/top/{}", backend_url, n);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<Vec<Video>>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

pub async fn start_scrape() -> Result<StartScrapeResponse, String> {
    let backend_url = &*BACKEND_URL;
    let url = format!("{}/api/scrape", backend_url);

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json::<StartScrapeResponse>()
        .await
        .map_err(|e| format!("JSON parse error: {}", e))
}

pub async fn fetch_scrape_status() -> Result<ScrapeStatus, String> {
    let backend_url = &*BACKEND_URL;
    let url = format!("{}/api/scrape/status", backend_url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<ScrapeStatus>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

pub async fn stop_scrape() -> Result<StopScrapeResponse, String> {
    let backend_url = &*BACKEND_URL;
    let url = format!("{}/api/scrape/stop", backend_url);

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    response
        .json::<StopScrapeResponse>()
        .await
        .map_err(|e| format!("JSON parse error: {}", e))
}

/// Long-lived request that resolves once the run finishes or the backend
/// gives up waiting. The stored operator token rides along when present.
pub async fn wait_for_scrape(
    timeout_secs: u32,
    token: Option<String>,
) -> Result<WaitScrapeResponse, String> {
    let backend_url = &*BACKEND_URL;
    let url = format!("{}/api/scrape/wait", backend_url);

    let mut builder = Request::post(&url).header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("X-Scrape-Token", &token);
    }

    let response = builder
        .json(&WaitScrapeRequest {
            timeout: timeout_secs,
        })
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<WaitScrapeResponse>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

pub async fn fetch_progress() -> Result<ProgressSnapshot, String> {
    let backend_url = &*BACKEND_URL;
    let url = format!("{}/api/scrape/progress", backend_url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<ProgressSnapshot>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

pub async fn fetch_runs() -> Result<Vec<RunInfo>, String> {
    let backend_url = &*BACKEND_URL;
    let url = format!("{}/api/runs", backend_url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<Vec<RunInfo>>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

pub fn scrape_logs_url() -> String {
    format!("{}/api/scrape/logs", &*BACKEND_URL)
}

pub fn run_logs_url(run_id: &str) -> String {
    format!("{}/api/runs/{}/logs", &*BACKEND_URL, urlencoding::encode(run_id))
}

pub fn run_progress_url(run_id: &str) -> String {
    format!(
        "{}/api/scrape/progress-sse?run={}",
        &*BACKEND_URL,
        urlencoding::encode(run_id)
    )
}

pub fn logs_download_url() -> String {
    format!("{}/api/scrape/logs/download", &*BACKEND_URL)
}
