use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, Deserialize};

use crate::constants;

/// The remote LLM backends known to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderType {
    HuggingFace,
    LMStudio,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderType::HuggingFace => write!(f, "HuggingFace"),
            ProviderType::LMStudio => write!(f, "LMStudio"),
        }
    }
}

impl From<&str> for ProviderType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "huggingface" => ProviderType::HuggingFace,
            "lmstudio" => ProviderType::LMStudio,
            _ => panic!("Unknown provider: {}", s),
        }
    }
}

/// Catalog entry describing one model a provider exposes
///
/// `max_token_allowed` of 0 means the cap is not applicable, e.g. for
/// image-generation models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub label: String,
    pub provider: ProviderType,
    pub max_token_allowed: u32,
}

/// Opaque handle binding a model to a provider endpoint and credential
///
/// The handle carries everything an inference client needs to issue
/// generation requests: the resolved base URL, the API key, and a
/// pre-built HTTP client. It performs no requests itself and is not
/// cached between calls.
#[derive(Debug)]
pub struct ModelHandle {
    provider: ProviderType,
    model: String,
    base_url: String,
    api_key: String,
    client: Client,
}

impl ModelHandle {
    pub(crate) fn new(provider: ProviderType, model: String, base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(constants::HANDLE_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { provider, model, base_url, api_key, client }
    }

    /// Get the owning provider type
    pub fn provider(&self) -> ProviderType {
        self.provider
    }

    /// Get the model identifier this handle is bound to
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the endpoint base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the resolved API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the HTTP client instance
    pub fn client(&self) -> &Client {
        &self.client
    }
}
