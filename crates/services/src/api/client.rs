use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use ainstien_core::model::{AnalysisResult, AnswerMap, Question};

use crate::api::config::ApiConfig;
use crate::error::ApiError;

/// Client-side view of the Ainstien backend.
///
/// The trait is the seam the UI and tests program against; `ApiClient` is the
/// reqwest-backed implementation.
#[async_trait]
pub trait AinstienApi: Send + Sync {
    /// Fetch a fresh personality question set.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoQuestions` when the server produced an empty set,
    /// `ApiError::Offline` when the AI backend reports itself unavailable,
    /// and transport/status errors otherwise.
    async fn fetch_questions(&self) -> Result<Vec<Question>, ApiError>;

    /// Submit a complete answer map and receive the analysis.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` with the same offline classification as
    /// `fetch_questions`.
    async fn request_analysis(&self, answers: &AnswerMap) -> Result<AnalysisResult, ApiError>;

    /// Send one chat message and receive the bot's reply text.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Offline` when the reply signals unavailability,
    /// and transport/status errors otherwise.
    async fn send_chat(&self, message: &str) -> Result<String, ApiError>;
}

/// HTTP client for the Ainstien backend.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait]
impl AinstienApi for ApiClient {
    async fn fetch_questions(&self) -> Result<Vec<Question>, ApiError> {
        let url = self.config.endpoint("/api/personality-questions");
        debug!(%url, "fetching personality questions");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        match response.json::<QuestionsResponse>().await {
            Ok(body) => questions_from_response(status, body),
            Err(err) if status.is_success() => Err(ApiError::Transport(err)),
            Err(_) => Err(ApiError::from_status(status)),
        }
        .inspect_err(|err| warn!(%status, error = %err, "question fetch failed"))
    }

    async fn request_analysis(&self, answers: &AnswerMap) -> Result<AnalysisResult, ApiError> {
        let url = self.config.endpoint("/api/personality-analysis");
        debug!(%url, "requesting personality analysis");

        let response = self
            .client
            .post(url)
            .json(&AnalysisRequest { answers })
            .send()
            .await?;
        let status = response.status();
        match response.json::<AnalysisResponse>().await {
            Ok(body) => analysis_from_response(status, body),
            Err(err) if status.is_success() => Err(ApiError::Transport(err)),
            Err(_) => Err(ApiError::from_status(status)),
        }
        .inspect_err(|err| warn!(%status, error = %err, "analysis request failed"))
    }

    async fn send_chat(&self, message: &str) -> Result<String, ApiError> {
        let url = self.config.endpoint("/api/chat");
        debug!(%url, "sending chat message");

        let response = self
            .client
            .post(url)
            .json(&ChatRequest { message })
            .send()
            .await?;
        let status = response.status();
        match response.json::<ChatResponse>().await {
            Ok(body) => reply_from_response(status, body),
            Err(err) if status.is_success() => Err(ApiError::Transport(err)),
            Err(_) => Err(ApiError::from_status(status)),
        }
        .inspect_err(|err| warn!(%status, error = %err, "chat request failed"))
    }
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct QuestionsResponse {
    #[serde(default)]
    questions: Vec<Question>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct AnalysisRequest<'a> {
    answers: &'a AnswerMap,
}

#[derive(Debug, Deserialize)]
struct AnalysisResponse {
    #[serde(default)]
    analysis: Option<AnalysisResult>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

fn questions_from_response(
    status: StatusCode,
    body: QuestionsResponse,
) -> Result<Vec<Question>, ApiError> {
    if let Some(message) = body.error {
        return Err(ApiError::from_server_message(status, &message));
    }
    if !status.is_success() {
        return Err(ApiError::from_status(status));
    }
    if body.questions.is_empty() {
        return Err(ApiError::NoQuestions);
    }
    Ok(body.questions)
}

fn analysis_from_response(
    status: StatusCode,
    body: AnalysisResponse,
) -> Result<AnalysisResult, ApiError> {
    if let Some(message) = body.error {
        return Err(ApiError::from_server_message(status, &message));
    }
    if !status.is_success() {
        return Err(ApiError::from_status(status));
    }
    body.analysis.ok_or(ApiError::EmptyResponse)
}

fn reply_from_response(status: StatusCode, body: ChatResponse) -> Result<String, ApiError> {
    // The chat endpoint reports failures inside `response` prose rather than
    // an `error` field, so unavailability is detected on the text itself.
    match ApiError::from_server_message(status, &body.response) {
        ApiError::Offline => Err(ApiError::Offline),
        err if !status.is_success() => Err(err),
        _ => Ok(body.response),
    }
}
