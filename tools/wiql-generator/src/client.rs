//! Chat completion clients.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use crate::{
    chat::{ChatRequest, ChatResponse},
    error::ClientError,
};

/// Sends a chat request and returns the first completion's text.
#[async_trait]
pub trait ChatCompletion {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ClientError>;
}

/// Connection settings for an Azure OpenAI deployment.
#[derive(Debug, Clone)]
pub struct AzureOpenAiConfig {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com/`.
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub deployment: String,
    pub api_version: String,
}

/// Client for the Azure OpenAI chat completions REST API.
#[derive(Debug, Clone)]
pub struct AzureOpenAiClient {
    http: Client,
    url: Url,
    api_key: String,
}

impl AzureOpenAiClient {
    /// Validates the configuration and resolves the completions URL.
    pub fn new(config: &AzureOpenAiConfig) -> Result<Self, ClientError> {
        let endpoint = config
            .endpoint
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or(ClientError::MissingEndpoint)?;
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ClientError::MissingApiKey)?;

        let url = completions_url(endpoint, &config.deployment, &config.api_version)?;

        Ok(Self {
            http: Client::builder().build()?,
            url,
            api_key,
        })
    }

    /// Fully resolved completions URL, including the api-version query.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Builds `{endpoint}/openai/deployments/{deployment}/chat/completions?api-version=..`.
fn completions_url(
    endpoint: &str,
    deployment: &str,
    api_version: &str,
) -> Result<Url, ClientError> {
    // Without a trailing slash `join` would replace the last path segment.
    let base = Url::parse(&format!("{}/", endpoint.trim_end_matches('/')))?;
    let mut url = base.join(&format!("openai/deployments/{deployment}/chat/completions"))?;
    url.query_pairs_mut().append_pair("api-version", api_version);
    Ok(url)
}

/// Error envelope returned by the service on non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    message: String,
}

fn api_error(status: u16, body: &str) -> ClientError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope {
            error: ErrorBody {
                code: Some(code),
                message,
            },
        }) if code != status.to_string() => format!("{code}: {message}"),
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "no response body".to_string(),
        Err(_) => body.trim().to_string(),
    };
    ClientError::Api { status, message }
}

#[async_trait]
impl ChatCompletion for AzureOpenAiClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ClientError> {
        debug!(
            url = %self.url,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let response = self
            .http
            .post(self.url.clone())
            .header("api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "chat completion response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }

        let body: ChatResponse = response.json().await?;
        body.first_text().ok_or(ClientError::EmptyResponse)
    }
}
