//! Intake client: submits a child profile to the storybook service and
//! turns the answer into something to show the user.

use crate::domain::story::{StoryRequest, StoryResponse};
use crate::error::ErrorResponse;
use std::future::Future;
use std::io::Write;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const BUSY_MESSAGE: &str = "Creating your personalized story...";
pub const GENERIC_ERROR: &str = "Error generating story. Please try again.";

/// What the service answered
#[derive(Debug, Clone, PartialEq)]
pub enum ClientOutcome {
    Story(String),
    Rejected { status: u16, message: Option<String> },
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Backend not reachable: {0}")]
    Unreachable(#[from] reqwest::Error),
}

impl ClientOutcome {
    /// Text shown to the user for a rejected request, if any
    pub fn error_message(&self) -> Option<String> {
        match self {
            ClientOutcome::Story(_) => None,
            ClientOutcome::Rejected {
                message: Some(message),
                ..
            } => Some(format!("{}\n{}", GENERIC_ERROR, message)),
            ClientOutcome::Rejected { message: None, .. } => Some(GENERIC_ERROR.to_string()),
        }
    }
}

pub struct StoryClient {
    api_base: String,
    http_client: reqwest::Client,
}

impl StoryClient {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/generate_story/", self.api_base)
    }

    /// POST the profile; non-success statuses are an outcome, not an error
    pub async fn submit(&self, request: &StoryRequest) -> Result<ClientOutcome, ClientError> {
        let response = self
            .http_client
            .post(self.endpoint())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let story: StoryResponse = response.json().await?;
            return Ok(ClientOutcome::Story(story.markdown_story));
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.message);

        Ok(ClientOutcome::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Print `message` and a dot per second to stderr until `fut` completes
pub async fn with_busy_indicator<F: Future>(message: &str, fut: F) -> F::Output {
    let mut stderr = std::io::stderr();
    let _ = write!(stderr, "{}", message);
    let _ = stderr.flush();

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.tick().await;

    tokio::pin!(fut);
    let output = loop {
        tokio::select! {
            output = &mut fut => break output,
            _ = ticker.tick() => {
                let _ = write!(stderr, ".");
                let _ = stderr.flush();
            }
        }
    };

    let _ = writeln!(stderr);
    output
}
