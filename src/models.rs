/// Wire types for the video processing backend
use serde::{Deserialize, Serialize};

/// Body of `POST /process_videos`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProcessRequest {
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProcessResponse {
    pub results: Vec<ResultItem>,
}

/// Error body the backend sends with non-2xx statuses
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CleanupResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Transcription {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoResult {
    pub title: String,
    pub thumbnail: Option<String>,
    pub duration: Option<f64>,
    pub video_id: String,
    pub transcription: Transcription,
    pub filename: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoFailure {
    pub error: String,
    pub url: String,
}

/// Per-URL outcome, dispatched on the boolean `success` field
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(from = "RawResultItem")]
pub enum ResultItem {
    Success(VideoResult),
    Failure(VideoFailure),
}

impl ResultItem {
    pub fn is_success(&self) -> bool {
        matches!(self, ResultItem::Success(_))
    }
}

#[derive(Debug, Deserialize)]
struct RawResultItem {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    video_id: Option<String>,
    #[serde(default)]
    transcription: Option<Transcription>,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl From<RawResultItem> for ResultItem {
    fn from(raw: RawResultItem) -> Self {
        if !raw.success {
            return ResultItem::Failure(VideoFailure {
                error: raw.error.unwrap_or_else(|| "Erro desconhecido".to_string()),
                url: raw.url.unwrap_or_default(),
            });
        }

        // Without an id there is nothing to download
        match raw.video_id.filter(|id| !id.is_empty()) {
            Some(video_id) => ResultItem::Success(VideoResult {
                title: raw.title.unwrap_or_default(),
                thumbnail: raw.thumbnail.filter(|t| !t.is_empty()),
                duration: raw.duration,
                video_id,
                transcription: raw.transcription.unwrap_or_default(),
                filename: raw.filename,
                url: raw.url,
            }),
            None => ResultItem::Failure(VideoFailure {
                error: "Resposta inválida do servidor".to_string(),
                url: raw.url.unwrap_or_default(),
            }),
        }
    }
}
