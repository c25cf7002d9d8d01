use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared_types::{
    ErrorBody, MessageBody, Profile, ProfileEnvelope, ProfileFields, MSG_PROFILE_NOT_FOUND,
};
use std::sync::OnceLock;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:3000
/// - In production: use same origin (the server sits behind the same host)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:3000".to_string()
    } else {
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Classify a non-2xx response. The server answers writes against an
    /// unknown id with 400, so the body message is checked as well as 404.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.trim().to_string());

        if status == 404 || message == MSG_PROFILE_NOT_FOUND {
            ApiError::NotFound(message)
        } else if status == 400 {
            ApiError::Validation(message)
        } else {
            ApiError::Transport(format!("HTTP error: {status}: {message}"))
        }
    }
}

/// The five profile operations, as seen from the UI.
///
/// Futures are not `Send`: the app runs on the single browser thread.
#[async_trait(?Send)]
pub trait ProfileApi {
    async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError>;
    async fn get_profile(&self, id: &str) -> Result<Profile, ApiError>;
    async fn create_profile(&self, fields: &ProfileFields) -> Result<Profile, ApiError>;
    async fn update_profile(&self, id: &str, fields: &ProfileFields)
        -> Result<Profile, ApiError>;
    async fn delete_profile(&self, id: &str) -> Result<(), ApiError>;
}

/// `ProfileApi` over HTTP with gloo-net.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpProfileApi {
    base: String,
}

impl HttpProfileApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client pointed at the server for the current browser location.
    pub fn from_location() -> Self {
        Self::new(api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl Default for HttpProfileApi {
    fn default() -> Self {
        Self::from_location()
    }
}

#[async_trait(?Send)]
impl ProfileApi for HttpProfileApi {
    async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        let response = Request::get(&self.url("/profiles"))
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    async fn get_profile(&self, id: &str) -> Result<Profile, ApiError> {
        let response = Request::get(&self.url(&format!("/profile/{id}")))
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    async fn create_profile(&self, fields: &ProfileFields) -> Result<Profile, ApiError> {
        let response = Request::post(&self.url("/profile"))
            .json(fields)
            .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {e}")))?
            .send()
            .await
            .map_err(transport)?;
        let envelope: ProfileEnvelope = read_json(response).await?;
        Ok(envelope.profile)
    }

    async fn update_profile(
        &self,
        id: &str,
        fields: &ProfileFields,
    ) -> Result<Profile, ApiError> {
        let response = Request::put(&self.url(&format!("/profile/{id}")))
            .json(fields)
            .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {e}")))?
            .send()
            .await
            .map_err(transport)?;
        let envelope: ProfileEnvelope = read_json(response).await?;
        Ok(envelope.profile)
    }

    async fn delete_profile(&self, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&format!("/profile/{id}")))
            .send()
            .await
            .map_err(transport)?;
        let _: MessageBody = read_json(response).await?;
        Ok(())
    }
}

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(format!("Request failed: {e}"))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to parse JSON: {e}")))
}
