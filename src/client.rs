/// HTTP client for the Laterfeed entries endpoint

use crate::bookmark::BookmarkRequest;
use crate::settings::Settings;
use async_trait::async_trait;
use serde::Deserialize;

pub const ENTRIES_PATH: &str = "/entries";

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized. Check your auth token in settings.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Request rejected with status {status}")]
    Remote { status: u16, message: Option<String> },

    #[error("Connection failed: {0}")]
    Transport(String),
}

impl SubmitError {
    /// Text shown to the user in the popup
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
            SubmitError::Remote {
                message: Some(message),
                ..
            } => message.clone(),
            SubmitError::Remote { status, message: None } => format!("Error: {}", status),
            SubmitError::Transport(description) => format!("Connection failed: {}", description),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Map a finished response to the submission result
///
/// Any 2xx is a success and 401 means the token was refused. Other statuses
/// carry the body's `message` field when it is a non-empty string.
pub fn classify_response(status: u16, body: &str) -> Result<(), SubmitError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(SubmitError::Unauthorized),
        _ => {
            let message = serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|error| error.message)
                .filter(|message| !message.is_empty());

            Err(SubmitError::Remote { status, message })
        }
    }
}

/// Where bookmarks get created
#[async_trait(?Send)]
pub trait EntryApi {
    async fn create_entry(&self, request: &BookmarkRequest) -> Result<(), SubmitError>;
}

/// `EntryApi` over HTTP, authenticated with the configured bearer token
pub struct EntriesClient {
    http: reqwest::Client,
    settings: Settings,
}

impl EntriesClient {
    pub fn new(settings: Settings) -> Self {
        EntriesClient {
            http: reqwest::Client::new(),
            settings,
        }
    }

    pub fn entries_url(&self) -> String {
        format!("{}{}", self.settings.base_url, ENTRIES_PATH)
    }

    /// The `POST /entries` request for `request`, ready to execute
    pub fn build_request(&self, request: &BookmarkRequest) -> Result<reqwest::Request, SubmitError> {
        self.http
            .post(self.entries_url())
            .bearer_auth(&self.settings.auth_token)
            .json(request)
            .build()
            .map_err(|e| SubmitError::Transport(describe_error(&e)))
    }
}

/// An error and all of its sources, joined with ": "
///
/// reqwest's own `Display` stops at "error sending request"; the cause
/// (refused connection, failed fetch, timeout) sits further down the chain.
pub fn describe_error(error: &dyn std::error::Error) -> String {
    let mut description = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.ends_with(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }

    description
}

#[async_trait(?Send)]
impl EntryApi for EntriesClient {
    async fn create_entry(&self, request: &BookmarkRequest) -> Result<(), SubmitError> {
        log::debug!("POST {} url={}", self.entries_url(), request.url);

        let response = self
            .http
            .execute(self.build_request(request)?)
            .await
            .map_err(|e| SubmitError::Transport(describe_error(&e)))?;

        let status = response.status();
        let body = if status.is_success() {
            String::new()
        } else {
            response.text().await.unwrap_or_else(|e| {
                log::warn!("Failed to read error body: {}", describe_error(&e));
                String::new()
            })
        };

        classify_response(status.as_u16(), &body)
    }
}
