use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ProviderSettings;
use crate::errors::LlmResult;
use crate::providers::huggingface::HuggingFaceProvider;
use crate::providers::lmstudio::LMStudioProvider;
use crate::providers::types::{ModelHandle, ModelInfo, ProviderType};

/// Common interface for all provider registry entries
///
/// A registry entry describes one remote LLM backend: its identity, the
/// configuration keys its credentials are resolved from, a fixed model
/// catalog, an optional dynamic catalog, and a constructor for
/// endpoint-and-credential-bound model handles.
#[async_trait]
pub trait LlmProvider {
    /// Get the display name of this provider
    fn name(&self) -> &str;

    /// Environment key naming this provider's API token
    fn api_token_key(&self) -> &str;

    /// Environment key naming this provider's base URL, empty if the
    /// endpoint is fixed
    fn base_url_key(&self) -> &str {
        ""
    }

    /// Where a user can obtain an API key for this provider
    fn api_key_link(&self) -> Option<&str> {
        None
    }

    /// Display label for the API key link
    fn label_for_api_key(&self) -> Option<&str> {
        None
    }

    /// Icon identifier for UI listings
    fn icon(&self) -> Option<&str> {
        None
    }

    /// Get the fixed model catalog. Pure, stable across calls.
    fn static_models(&self) -> &[ModelInfo];

    /// Fetch the dynamic model catalog from the provider's listing endpoint.
    ///
    /// Best-effort: providers without the capability, and any resolution,
    /// network, or parse failure, yield an empty list. Failures are logged,
    /// never propagated; the static catalog stays usable regardless.
    async fn dynamic_models(
        &self,
        api_keys: Option<&HashMap<String, String>>,
        settings: Option<&ProviderSettings>,
        server_env: &HashMap<String, String>,
    ) -> Vec<ModelInfo> {
        let _ = (api_keys, settings, server_env);
        Vec::new()
    }

    /// Construct a model handle bound to this provider's endpoint and the
    /// resolved credential.
    ///
    /// Fails with `UnknownModel` if the name is not in the catalog (for
    /// providers that enforce static-only catalogs) and `MissingCredential`
    /// if no API key is resolvable. No network call is made.
    fn model_instance(
        &self,
        model: &str,
        server_env: &HashMap<String, String>,
        api_keys: Option<&HashMap<String, String>>,
        settings: Option<&ProviderSettings>,
    ) -> LlmResult<ModelHandle>;
}

/// Factory function to create a registry entry based on type
pub fn create_provider(provider_type: ProviderType) -> Arc<dyn LlmProvider + Send + Sync> {
    match provider_type {
        ProviderType::HuggingFace => Arc::new(HuggingFaceProvider::new()),
        ProviderType::LMStudio => Arc::new(LMStudioProvider::new()),
    }
}

/// Registry of every built-in provider
///
/// Immutable after construction; entries are `Arc`ed so the registry is
/// cheap to share across concurrent callers.
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn LlmProvider + Send + Sync>>,
}

impl ProviderRegistry {
    /// Create a registry holding all built-in providers
    pub fn new() -> Self {
        let providers = vec![
            create_provider(ProviderType::HuggingFace),
            create_provider(ProviderType::LMStudio),
        ];
        Self { providers }
    }

    /// Look up a provider by name, case-insensitive
    pub fn get(&self, name: &str) -> Option<&Arc<dyn LlmProvider + Send + Sync>> {
        self.providers
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Get all registered providers
    pub fn providers(&self) -> &[Arc<dyn LlmProvider + Send + Sync>] {
        &self.providers
    }

    /// Concatenate every provider's static catalog
    pub fn all_static_models(&self) -> Vec<ModelInfo> {
        self.providers
            .iter()
            .flat_map(|p| p.static_models().iter().cloned())
            .collect()
    }

    /// Concatenate every provider's static catalog plus its dynamic
    /// catalog, fetched best-effort per provider.
    pub async fn all_models(
        &self,
        api_keys: Option<&HashMap<String, String>>,
        provider_settings: Option<&HashMap<String, ProviderSettings>>,
        server_env: &HashMap<String, String>,
    ) -> Vec<ModelInfo> {
        let mut models = Vec::new();
        for provider in &self.providers {
            let settings = provider_settings.and_then(|s| s.get(provider.name()));
            models.extend(provider.static_models().iter().cloned());
            models.extend(provider.dynamic_models(api_keys, settings, server_env).await);
        }
        models
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
