//! Layered credential resolution for provider registry entries.
//!
//! Every provider resolves its endpoint and API key through the same
//! ordered set of sources: explicit call-time API keys, stored per-provider
//! settings, then an environment snapshot. The first non-empty value per
//! field wins. The function is pure; callers decide what "environment"
//! means by passing a snapshot (see [`server_env_from_process`]).

use std::collections::HashMap;
use std::env;

use serde::{Serialize, Deserialize};

/// Stored per-provider override record
///
/// Owned and persisted by the embedding application; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            enabled: default_enabled(),
        }
    }
}

/// Inputs to a single credential resolution
pub struct ResolverOptions<'a> {
    /// Name of the provider being resolved, used to index `api_keys`
    pub provider_name: &'a str,
    /// Explicit call-time API keys, keyed by provider name
    pub api_keys: Option<&'a HashMap<String, String>>,
    /// Stored settings for this provider
    pub settings: Option<&'a ProviderSettings>,
    /// Environment snapshot, e.g. from [`server_env_from_process`]
    pub server_env: &'a HashMap<String, String>,
    /// Environment key naming the base URL, empty if the provider has a fixed endpoint
    pub base_url_key: &'a str,
    /// Environment key naming the API token, empty if the provider takes no token
    pub api_token_key: &'a str,
}

/// Result of one credential resolution, not retained between calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedCredentials {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

/// Resolve a provider's base URL and API key across configuration tiers.
///
/// Precedence per field, first non-empty value wins:
/// - `api_key`: explicit `api_keys[provider_name]`, then stored
///   `settings.api_key`, then `server_env[api_token_key]`
/// - `base_url`: stored `settings.base_url`, then `server_env[base_url_key]`
///
/// Empty strings are treated as absent. An empty key name disables the
/// environment tier for that field.
pub fn resolve_base_url_and_key(opts: ResolverOptions<'_>) -> ResolvedCredentials {
    let api_key = first_non_empty([
        opts.api_keys
            .and_then(|keys| keys.get(opts.provider_name))
            .map(String::as_str),
        opts.settings.and_then(|s| s.api_key.as_deref()),
        lookup_env(opts.server_env, opts.api_token_key),
    ]);

    let base_url = first_non_empty([
        opts.settings.and_then(|s| s.base_url.as_deref()),
        lookup_env(opts.server_env, opts.base_url_key),
    ]);

    ResolvedCredentials { base_url, api_key }
}

/// Snapshot the process environment for use as a resolver source
pub fn server_env_from_process() -> HashMap<String, String> {
    env::vars().collect()
}

fn lookup_env<'a>(server_env: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    if key.is_empty() {
        return None;
    }
    server_env.get(key).map(String::as_str)
}

fn first_non_empty<'a, I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
