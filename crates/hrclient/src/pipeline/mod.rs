mod refresh;
mod request;

pub use self::refresh::{RefreshCoordinator, SESSION_EXPIRED_MESSAGE};
pub use self::request::{FormPart, Payload, RequestSpec};

use reqwest::{Client, Response, StatusCode, multipart};
use serde::de::DeserializeOwned;
use shared::config::ApiConfig;
use shared::errors::{ClientError, extract_api_message};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

use crate::session::DynSessionManager;

pub type DynApiClient = Arc<ApiClient>;

/// Issues every backend call: attaches the stored bearer credential,
/// renews it once through the refresh coordinator when a first attempt
/// comes back 401, and normalizes every failure into one message.
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: DynSessionManager,
    refresh: RefreshCoordinator,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: DynSessionManager) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let refresh = RefreshCoordinator::new(http.clone(), &config.base_url, session.clone());

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session,
            refresh,
        })
    }

    /// Sends the spec and deserializes the successful body.
    pub async fn execute<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T, ClientError> {
        let response = self.send(&spec).await?;
        response.json::<T>().await.map_err(|e| {
            error!("Failed to decode response body: {e}");
            ClientError::from(e)
        })
    }

    /// Sends the spec and discards the successful body, for deletes and
    /// other endpoints that answer with nothing.
    pub async fn execute_empty(&self, spec: RequestSpec) -> Result<(), ClientError> {
        self.send(&spec).await.map(|_| ())
    }

    async fn send(&self, spec: &RequestSpec) -> Result<Response, ClientError> {
        let response = self.dispatch(spec, 0).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Self::into_checked(response).await;
        }

        // A 401 can only mean an expired access token when one was
        // attached. An anonymous call (login itself) reports its
        // failure as-is.
        if self.session.access_token().await.is_none() {
            return Self::into_checked(response).await;
        }

        debug!(
            "{} {} came back 401, attempting token renewal",
            spec.method, spec.path
        );
        self.refresh.renew().await?;

        let retried = self.dispatch(spec, 1).await?;
        Self::into_checked(retried).await
    }

    async fn dispatch(&self, spec: &RequestSpec, attempt: u32) -> Result<Response, ClientError> {
        let url = format!("{}{}", self.base_url, spec.path);
        let mut builder = self.http.request(spec.method.clone(), &url);

        if !spec.query.is_empty() {
            builder = builder.query(&spec.query);
        }

        builder = match &spec.payload {
            Payload::Empty => builder,
            Payload::Json(body) => builder.json(body),
            Payload::Form(parts) => builder.multipart(Self::build_form(parts)),
        };

        // Token state is re-read on every attempt, so a retry always sends
        // the credentials as of the retry decision.
        if let Some(token) = self.session.access_token().await {
            builder = builder.bearer_auth(token);
        }

        debug!("{} {} (attempt {attempt})", spec.method, spec.path);

        builder.send().await.map_err(|e| {
            error!("Transport failure for {} {}: {e}", spec.method, spec.path);
            ClientError::from(e)
        })
    }

    async fn into_checked(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status = status.as_u16();
        let body = response.bytes().await.unwrap_or_default();
        let message = extract_api_message(&body);
        error!("Request failed with status {status}: {message}");
        Err(ClientError::Api { status, message })
    }

    fn build_form(parts: &[FormPart]) -> multipart::Form {
        let mut form = multipart::Form::new();
        for part in parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name.clone(), value.clone()),
                FormPart::File { name, upload } => form.part(
                    name.clone(),
                    multipart::Part::bytes(upload.content.clone())
                        .file_name(upload.file_name.clone()),
                ),
            };
        }
        form
    }
}
