use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Serialize;

use crate::config::{resolve_base_url_and_key, ProviderSettings, ResolverOptions};
use crate::constants;
use crate::errors::{LlmError, LlmResult};
use crate::providers::provider::LlmProvider;
use crate::providers::types::{ModelHandle, ModelInfo, ProviderType};

/// Registry entry for the HuggingFace hosted inference API
///
/// Chat model handles bind to the OpenAI-compatible `/v1/` endpoint;
/// multimodal inference posts directly to `/models/{model}`. The catalog
/// is static only: an unknown model name is a hard failure.
pub struct HuggingFaceProvider {
    models: Vec<ModelInfo>,
    client: Client,
    inference_url_prefix: String,
}

/// JSON payload carried in the `inputs` field of a multimodal request
#[derive(Serialize)]
struct MultimodalInputs<'a> {
    text: &'a str,
}

/// Body of a multimodal inference request
///
/// Holds the serialized `inputs` field and the optional image bytes so the
/// request content can be inspected before it is turned into a multipart
/// form.
pub struct MultimodalRequest {
    inputs: String,
    image: Option<Vec<u8>>,
}

impl MultimodalRequest {
    /// Build the request body for a prompt and optional image
    pub fn new(prompt: &str, image: Option<Vec<u8>>) -> LlmResult<Self> {
        let inputs = serde_json::to_string(&MultimodalInputs { text: prompt })?;
        Ok(Self { inputs, image })
    }

    /// The serialized `inputs` field, `{"text": <prompt>}`
    pub fn inputs(&self) -> &str {
        &self.inputs
    }

    /// Whether an image part will be attached
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Convert into a multipart form with an `inputs` text field and, if
    /// present, an `image` part named `input.png`
    pub fn into_form(self) -> Form {
        let mut form = Form::new().text("inputs", self.inputs);
        if let Some(bytes) = self.image {
            form = form.part(
                "image",
                Part::bytes(bytes).file_name(constants::MULTIMODAL_IMAGE_FILENAME),
            );
        }
        form
    }
}

impl HuggingFaceProvider {
    /// Creates a new HuggingFace registry entry with its fixed catalog
    pub fn new() -> Self {
        let models = vec![
            ModelInfo {
                name: "Qwen/Qwen2.5-Coder-32B-Instruct".to_string(),
                label: "Qwen2.5-Coder-32B-Instruct (HuggingFace)".to_string(),
                provider: ProviderType::HuggingFace,
                max_token_allowed: 8000,
            },
            ModelInfo {
                name: "01-ai/Yi-1.5-34B-Chat".to_string(),
                label: "Yi-1.5-34B-Chat (HuggingFace)".to_string(),
                provider: ProviderType::HuggingFace,
                max_token_allowed: 8000,
            },
            ModelInfo {
                name: "meta-llama/Llama-3.1-70B-Instruct".to_string(),
                label: "Llama-3.1-70B-Instruct (HuggingFace)".to_string(),
                provider: ProviderType::HuggingFace,
                max_token_allowed: 8000,
            },
            ModelInfo {
                name: "bigcode/starcoder2-15b-instruct-v0.1".to_string(),
                label: "Starcoder2-15B-Instruct-v0.1 (HuggingFace)".to_string(),
                provider: ProviderType::HuggingFace,
                max_token_allowed: 8000,
            },
            ModelInfo {
                name: "Salesforce/blip2-opt-2.7b".to_string(),
                label: "BLIP-2 (Text + Image) (HuggingFace)".to_string(),
                provider: ProviderType::HuggingFace,
                max_token_allowed: 5000,
            },
            ModelInfo {
                name: "CompVis/stable-diffusion-v1-4".to_string(),
                label: "Stable Diffusion (Image Generation) (HuggingFace)".to_string(),
                provider: ProviderType::HuggingFace,
                // Token cap is not applicable to image generation
                max_token_allowed: 0,
            },
        ];

        let client = Client::builder()
            .timeout(Duration::from_secs(constants::HANDLE_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            models,
            client,
            inference_url_prefix: constants::HUGGINGFACE_INFERENCE_URL_PREFIX.to_string(),
        }
    }

    /// Override the multimodal inference endpoint, e.g. for a proxy
    pub fn with_inference_url(mut self, prefix: impl Into<String>) -> Self {
        self.inference_url_prefix = prefix.into();
        self
    }

    /// Generate a response from a multimodal model (text + optional image)
    ///
    /// Issues a single multipart POST to the provider's inference endpoint
    /// and returns the raw JSON response. Not retried; a non-success status
    /// surfaces as `InferenceFailed` with the response body logged rather
    /// than forwarded.
    pub async fn generate_multimodal(
        &self,
        model: &str,
        prompt: &str,
        image: Option<Vec<u8>>,
        api_key: &str,
    ) -> LlmResult<serde_json::Value> {
        if api_key.is_empty() {
            return Err(LlmError::MissingCredential(format!(
                "missing API key for {} provider",
                self.name()
            )));
        }
        if model.is_empty() {
            return Err(LlmError::UnknownModel(format!(
                "no {} model specified",
                self.name()
            )));
        }

        let request = MultimodalRequest::new(prompt, image)?;
        let url = format!("{}/{}", self.inference_url_prefix, model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .multipart(request.into_form())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(
                "HuggingFace multimodal call to '{}' failed ({}): {}",
                model, status, error_text
            );
            return Err(LlmError::InferenceFailed(format!(
                "HuggingFace returned status {} for model '{}'",
                status, model
            )));
        }

        Ok(response.json().await?)
    }
}

impl Default for HuggingFaceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmProvider for HuggingFaceProvider {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    fn api_token_key(&self) -> &str {
        constants::HUGGINGFACE_API_KEY_ENV
    }

    fn api_key_link(&self) -> Option<&str> {
        Some(constants::HUGGINGFACE_API_KEY_LINK)
    }

    fn static_models(&self) -> &[ModelInfo] {
        &self.models
    }

    /// Validates the model against the static catalog, resolves the API
    /// key, and returns a handle bound to the fixed inference endpoint
    fn model_instance(
        &self,
        model: &str,
        server_env: &HashMap<String, String>,
        api_keys: Option<&HashMap<String, String>>,
        settings: Option<&ProviderSettings>,
    ) -> LlmResult<ModelHandle> {
        if !self.models.iter().any(|m| m.name == model) {
            return Err(LlmError::UnknownModel(format!(
                "model '{}' is not supported by the {} provider",
                model,
                self.name()
            )));
        }

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

        Ok(ModelHandle::new(
            ProviderType::HuggingFace,
            model.to_string(),
            constants::HUGGINGFACE_API_BASE_URL.to_string(),
            api_key,
        ))
    }
}
