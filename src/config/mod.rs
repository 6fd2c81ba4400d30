//! Configuration module: layered credential resolution and the
//! declarative application manifest.
//!
//! Credential resolution merges three precedence tiers — explicit
//! call-time API keys, stored per-provider settings, and an environment
//! snapshot — into a resolved base URL and API key for one
//! model-instantiation call.
//!
//! # Example Manifest File
//!
//! ```toml
//! ignored_route_files = ["**/.*"]
//! server_module_format = "esm"
//! server_build_path = "build/index.js"
//! server_dependencies_to_bundle = ["@huggingface/.*"]
//!
//! [future]
//! v2_error_boundary = true
//!
//! [dev]
//! port = 5173
//! ```

mod resolver;
mod manifest;

pub use resolver::{
    ProviderSettings, ResolverOptions, ResolvedCredentials,
    resolve_base_url_and_key, server_env_from_process,
};
pub use manifest::{AppManifest, DevSettings, load_manifest, parse_manifest};
