//! llmhub is a Rust library that provides a unified registry of LLM providers
//! for chat applications.
//!
//! It exposes each remote backend behind one interface: a fixed model
//! catalog, an optional dynamic catalog fetched from the provider's own
//! listing endpoint, and construction of endpoint-and-credential-bound
//! model handles with layered credential resolution.
//!
//! # Features
//!
//! - **Multi-provider registry**: HuggingFace and LM Studio entries behind
//!   a common trait
//! - **Static and dynamic catalogs**: compiled-in model tables, plus
//!   best-effort runtime listing where the provider supports it
//! - **Layered credential resolution**: explicit call-time keys, stored
//!   per-provider settings, then environment, first non-empty value wins
//! - **Multimodal inference**: a single multipart text+image call against
//!   HuggingFace-hosted multimodal models
//! - **Declarative app manifest**: the embedding application's dev/build
//!   manifest, parsed and validated from TOML
//!
//! # Example
//!
//! ```no_run
//! use llmhub::{LlmProvider, ProviderRegistry, server_env_from_process};
//!
//! let registry = ProviderRegistry::new();
//! let provider = registry.get("HuggingFace").expect("provider registered");
//!
//! let env = server_env_from_process();
//! let handle = provider
//!     .model_instance("Qwen/Qwen2.5-Coder-32B-Instruct", &env, None, None)
//!     .expect("model handle");
//!
//! println!("{} -> {}", handle.model(), handle.base_url());
//! ```

pub mod providers;
pub mod errors;
pub mod constants;
pub mod config;

pub use providers::{
    ProviderType,
    ModelInfo,
    ModelHandle,
    LlmProvider,
    ProviderRegistry,
    create_provider,
    HuggingFaceProvider,
    MultimodalRequest,
    LMStudioProvider,
};

pub use errors::{LlmError, LlmResult};

pub use config::{
    AppManifest,
    ProviderSettings,
    ResolvedCredentials,
    ResolverOptions,
    load_manifest,
    parse_manifest,
    resolve_base_url_and_key,
    server_env_from_process,
};

/// Initialize the logging system
///
/// This should be called at the start of your application in case
/// you want to activate the library's debug and info logging.
pub fn use_logging() {
    env_logger::init();
}
