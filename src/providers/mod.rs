/// Module for provider registry entries
///
/// This module contains registry entries for the supported LLM backends:
/// - HuggingFace (hosted inference API, static catalog, multimodal call)
/// - LM Studio (OpenAI-compatible local server, dynamic catalog)
///
/// Each entry implements a common interface for listing models and
/// constructing endpoint-and-credential-bound model handles.

pub mod huggingface;
pub mod lmstudio;
pub mod provider;
pub mod types;

pub use types::{ProviderType, ModelInfo, ModelHandle};
pub use provider::{LlmProvider, ProviderRegistry, create_provider};
pub use huggingface::{HuggingFaceProvider, MultimodalRequest};
pub use lmstudio::LMStudioProvider;
