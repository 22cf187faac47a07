use serde::{Deserialize, Serialize};

/// Per-title feature metrics computed by the scraper. The wire names are
/// fixed by the backend's storage format.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct TitleFeatures {
    #[serde(rename = "longueur", default)]
    pub length: i64,
    #[serde(rename = "nb_emojis", default)]
    pub emoji_count: i64,
    #[serde(rename = "nb_hashtags", default)]
    pub hashtag_count: i64,
    #[serde(rename = "nb_exclamations", default)]
    pub exclamation_count: i64,
    #[serde(rename = "nb_questions", default)]
    pub question_count: i64,
    #[serde(rename = "pourcentage_majuscules", default)]
    pub uppercase_percent: f64,
}

/// One scraped trending video. Identity is the rank inside the currently
/// loaded list, not a stable id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Video {
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(rename = "canal", default)]
    pub channel: Option<String>,
    #[serde(rename = "vues", default)]
    pub views: i64,
    #[serde(rename = "duree", default)]
    pub duration: Option<String>,
    #[serde(rename = "heure", default)]
    pub published: Option<String>,
    #[serde(rename = "pays", default)]
    pub country: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub features: TitleFeatures,
    #[serde(rename = "score_psychologique", default)]
    pub score: f64,
    #[serde(rename = "date_scraping", default)]
    pub scraped_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct FeatureAverages {
    #[serde(rename = "longueur", default)]
    pub length: f64,
    #[serde(rename = "emojis", default)]
    pub emojis: f64,
    #[serde(rename = "hashtags", default)]
    pub hashtags: f64,
    #[serde(rename = "exclamations", default)]
    pub exclamations: f64,
    #[serde(rename = "questions", default)]
    pub questions: f64,
    #[serde(rename = "majuscules", default)]
    pub uppercase: f64,
}

/// Aggregate metrics for the stats cards. `total == 0` means the backend
/// has no data yet and the dashboard shows its empty state instead.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct StatsSummary {
    #[serde(default)]
    pub total: u64,
    #[serde(rename = "avg_score", default)]
    pub avg_score: f64,
    #[serde(rename = "features_moyennes", default)]
    pub feature_averages: Option<FeatureAverages>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Progress counters shared by the status poll, the progress poll and the
/// progress event stream. Every field is optional; the scraper fills them
/// in as it learns about the run.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ProgressSnapshot {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub countries_total: Option<u32>,
    #[serde(default)]
    pub countries_done: Option<u32>,
    #[serde(default)]
    pub items_scraped: Option<u64>,
    #[serde(default)]
    pub current_country: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ScrapeStatus {
    #[serde(default)]
    pub scraping: bool,
    #[serde(default)]
    pub videos_count: Option<u64>,
    #[serde(flatten)]
    pub progress: ProgressSnapshot,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StartScrapeResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pid: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StopScrapeResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WaitScrapeRequest {
    pub timeout: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WaitScrapeResponse {
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub videos_count: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One past or active run, used only to pick which run's logs/progress to
/// attach to.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RunInfo {
    #[serde(rename = "run_id", alias = "run")]
    pub id: String,
    #[serde(default)]
    pub started_at: Option<String>,
}
