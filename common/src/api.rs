//! REST endpoint table and the error taxonomy of every remote call.

use thiserror::Error;
use url::Url;

/// Base URL used when none is given at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api/v1";

/// Message shown for failures the user can do nothing specific about.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Builds the URLs of the sites backend from a fixed base.
///
/// Record ids are pushed as single path segments, so reserved characters
/// in an id are percent-encoded instead of changing the path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url.trim())
            .map_err(|err| ApiError::Config(format!("{}: {}", base_url, err)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Config(format!("{}: not a base URL", base_url)));
        }
        Ok(Self { base })
    }

    /// Base URL captured from `ASTRAL_API_BASE_URL` when the crate was built.
    pub fn from_build_env() -> Result<Self, ApiError> {
        Self::new(option_env!("ASTRAL_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    fn join(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        // Checked in `new`: the base can carry path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }

    /// `GET /sites`
    pub fn list_sites(&self) -> String {
        self.join(&["sites"])
    }

    /// `GET /sites/{id}`
    pub fn site(&self, id: &str) -> String {
        self.join(&["sites", id])
    }

    /// `POST /admin/site`
    pub fn create_site(&self) -> String {
        self.join(&["admin", "site"])
    }

    /// `PUT /admin/site/{id}`
    pub fn update_site(&self, id: &str) -> String {
        self.join(&["admin", "site", id])
    }

    /// `DELETE /sites/{id}`
    ///
    /// Earlier backend revisions disagreed on this path; keep it in this one
    /// place.
    pub fn delete_site(&self, id: &str) -> String {
        self.join(&["sites", id])
    }
}

/// Why a request to the backend did not succeed.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status and no usable body.
    #[error("backend answered with status {0}")]
    Status(u16),

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The API base URL the admin was built with is unusable.
    #[error("invalid API base URL: {0}")]
    Config(String),

    /// The backend processed the request and reported `success: false`.
    #[error("backend rejected the request")]
    Rejected(Option<String>),
}

impl ApiError {
    /// Text for the error notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) | ApiError::Decode(_) | ApiError::Config(_) => {
                GENERIC_FAILURE.to_string()
            }
            ApiError::Status(status) => format!("The server answered with status {}.", status),
            ApiError::Rejected(Some(message)) if !message.trim().is_empty() => message.clone(),
            ApiError::Rejected(_) => "The server rejected the request.".to_string(),
        }
    }
}
