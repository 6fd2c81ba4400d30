use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::{resolve_base_url_and_key, ProviderSettings, ResolverOptions};
use crate::constants;
use crate::errors::{LlmError, LlmResult};
use crate::providers::provider::LlmProvider;
use crate::providers::types::{ModelHandle, ModelInfo, ProviderType};

/// Registry entry for LM Studio (OpenAI-compatible local server)
///
/// The authoritative catalog lives on the local server, so unlike
/// HuggingFace the static list is not enforced when constructing handles;
/// callers are expected to pick names surfaced by `dynamic_models`.
pub struct LMStudioProvider {
    models: Vec<ModelInfo>,
    client: Client,
}

impl LMStudioProvider {
    /// Creates a new LM Studio registry entry
    pub fn new() -> Self {
        let models = vec![ModelInfo {
            name: "Qwen/Qwen2.5-Coder-32B-Instruct".to_string(),
            label: "Qwen2.5-Coder-32B-Instruct (LMStudio)".to_string(),
            provider: ProviderType::LMStudio,
            max_token_allowed: 8000,
        }];

        let client = Client::builder()
            .timeout(Duration::from_secs(constants::DISCOVERY_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { models, client }
    }

    /// Fetch the model listing from a resolved base URL
    async fn fetch_models(&self, base_url: &str) -> LlmResult<Vec<ModelInfo>> {
        let endpoint = models_endpoint(base_url)?;

        let response = self.client.get(&endpoint).send().await?;

        if !response.status().is_success() {
            return Err(LlmError::InferenceFailed(format!(
                "LMStudio models endpoint '{}' returned status {}",
                endpoint,
                response.status()
            )));
        }

        #[derive(Deserialize)]
        struct LMStudioModelsResponse {
            data: Vec<LMStudioModelInfo>,
        }

        #[derive(Deserialize)]
        struct LMStudioModelInfo {
            id: String,
        }

        let listing: LMStudioModelsResponse = response.json().await?;

        let models = listing
            .data
            .into_iter()
            .map(|m| ModelInfo {
                label: m.id.clone(),
                name: m.id,
                provider: ProviderType::LMStudio,
                max_token_allowed: constants::DEFAULT_MAX_TOKEN_ALLOWED,
            })
            .collect();

        Ok(models)
    }
}

impl Default for LMStudioProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a base URL to the OpenAI-compatible `/v1/` prefix.
///
/// `http://host`, `http://host/` and `http://host/v1` all resolve to
/// `http://host/v1/`.
fn chat_base_url(raw: &str) -> LlmResult<String> {
    Url::parse(raw).map_err(|e| {
        LlmError::ConfigError(format!("invalid LMStudio base URL '{}': {}", raw, e))
    })?;

    let trimmed = raw.trim_end_matches('/');
    if trimmed.ends_with("/v1") {
        Ok(format!("{}/", trimmed))
    } else {
        Ok(format!("{}/v1/", trimmed))
    }
}

/// The models-listing endpoint under a normalized base URL
fn models_endpoint(raw: &str) -> LlmResult<String> {
    Ok(format!("{}models", chat_base_url(raw)?))
}

#[async_trait]
impl LlmProvider for LMStudioProvider {
    fn name(&self) -> &str {
        "LMStudio"
    }

    fn api_token_key(&self) -> &str {
        constants::LMSTUDIO_API_KEY_ENV
    }

    fn base_url_key(&self) -> &str {
        constants::LMSTUDIO_BASE_URL_ENV
    }

    fn api_key_link(&self) -> Option<&str> {
        Some(constants::LMSTUDIO_API_KEY_LINK)
    }

    fn label_for_api_key(&self) -> Option<&str> {
        Some("Get LMStudio")
    }

    fn icon(&self) -> Option<&str> {
        Some("i-ph:cloud-arrow-down")
    }

    fn static_models(&self) -> &[ModelInfo] {
        &self.models
    }

    /// Lists the models loaded into the local server.
    ///
    /// Requires a resolvable base URL; without one, or on any network or
    /// parse failure, degrades to an empty list so the static catalog
    /// stays usable.
    async fn dynamic_models(
        &self,
        api_keys: Option<&HashMap<String, String>>,
        settings: Option<&ProviderSettings>,
        server_env: &HashMap<String, String>,
    ) -> Vec<ModelInfo> {
        let resolved = resolve_base_url_and_key(ResolverOptions {
            provider_name: self.name(),
            api_keys,
            settings,
            server_env,
            base_url_key: self.base_url_key(),
            api_token_key: "",
        });

        let Some(base_url) = resolved.base_url else {
            return Vec::new();
        };

        match self.fetch_models(&base_url).await {
            Ok(models) => models,
            Err(err) => {
                warn!("Error getting LMStudio models: {}", err);
                Vec::new()
            }
        }
    }

    /// Resolves the API key and base URL (falling back to the default
    /// localhost endpoint) and returns a handle bound to the `/v1/` API
    fn model_instance(
        &self,
        model: &str,
        server_env: &HashMap<String, String>,
        api_keys: Option<&HashMap<String, String>>,
        settings: Option<&ProviderSettings>,
    ) -> LlmResult<ModelHandle> {
        let resolved = resolve_base_url_and_key(ResolverOptions {
            provider_name: self.name(),
            api_keys,
            settings,
            server_env,
            base_url_key: self.base_url_key(),
            api_token_key: self.api_token_key(),
        });

        let api_key = resolved.api_key.ok_or_else(|| {
            LlmError::MissingCredential(format!(
                "missing API key for {} provider",
                self.name()
            ))
        })?;

        let base_url = chat_base_url(
            resolved
                .base_url
                .as_deref()
                .unwrap_or(constants::LMSTUDIO_DEFAULT_BASE_URL),
        )?;

        Ok(ModelHandle::new(
            ProviderType::LMStudio,
            model.to_string(),
            base_url,
            api_key,
        ))
    }
}
