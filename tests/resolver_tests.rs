//! Tests for layered credential resolution.

use std::collections::HashMap;

use llmhub::{resolve_base_url_and_key, server_env_from_process, ProviderSettings, ResolverOptions};

const PROVIDER: &str = "HuggingFace";
const TOKEN_KEY: &str = "HuggingFace_API_KEY";
const BASE_URL_KEY: &str = "HuggingFace_API_BASE_URL";

fn explicit_keys(key: &str) -> HashMap<String, String> {
    let mut keys = HashMap::new();
    keys.insert(PROVIDER.to_string(), key.to_string());
    keys
}

fn stored_settings(api_key: &str) -> ProviderSettings {
    ProviderSettings {
        api_key: Some(api_key.to_string()),
        ..Default::default()
    }
}

fn env_with(key: &str, value: &str) -> HashMap<String, String> {
    let mut env = HashMap::new();
    env.insert(key.to_string(), value.to_string());
    env
}

// ============================================================================
// API Key Precedence Tests
// ============================================================================

#[test]
fn test_explicit_key_wins_over_stored_and_env() {
    let keys = explicit_keys("A");
    let settings = stored_settings("B");
    let env = env_with(TOKEN_KEY, "C");

    let resolved = resolve_base_url_and_key(ResolverOptions {
        provider_name: PROVIDER,
        api_keys: Some(&keys),
        settings: Some(&settings),
        server_env: &env,
        base_url_key: BASE_URL_KEY,
        api_token_key: TOKEN_KEY,
    });

    assert_eq!(resolved.api_key.as_deref(), Some("A"));
}

#[test]
fn test_stored_key_wins_when_explicit_absent() {
    let settings = stored_settings("B");
    let env = env_with(TOKEN_KEY, "C");

    let resolved = resolve_base_url_and_key(ResolverOptions {
        provider_name: PROVIDER,
        api_keys: None,
        settings: Some(&settings),
        server_env: &env,
        base_url_key: BASE_URL_KEY,
        api_token_key: TOKEN_KEY,
    });

    assert_eq!(resolved.api_key.as_deref(), Some("B"));
}

#[test]
fn test_env_key_wins_when_explicit_and_stored_absent() {
    let env = env_with(TOKEN_KEY, "C");

    let resolved = resolve_base_url_and_key(ResolverOptions {
        provider_name: PROVIDER,
        api_keys: None,
        settings: None,
        server_env: &env,
        base_url_key: BASE_URL_KEY,
        api_token_key: TOKEN_KEY,
    });

    assert_eq!(resolved.api_key.as_deref(), Some("C"));
}

#[test]
fn test_no_sources_yields_no_credential() {
    let env = HashMap::new();

    let resolved = resolve_base_url_and_key(ResolverOptions {
        provider_name: PROVIDER,
        api_keys: None,
        settings: None,
        server_env: &env,
        base_url_key: BASE_URL_KEY,
        api_token_key: TOKEN_KEY,
    });

    assert_eq!(resolved.api_key, None);
    assert_eq!(resolved.base_url, None);
}

#[test]
fn test_empty_string_values_are_skipped() {
    let keys = explicit_keys("");
    let settings = stored_settings("B");
    let env = env_with(TOKEN_KEY, "C");

    let resolved = resolve_base_url_and_key(ResolverOptions {
        provider_name: PROVIDER,
        api_keys: Some(&keys),
        settings: Some(&settings),
        server_env: &env,
        base_url_key: BASE_URL_KEY,
        api_token_key: TOKEN_KEY,
    });

    assert_eq!(resolved.api_key.as_deref(), Some("B"));
}

#[test]
fn test_keys_for_other_providers_do_not_leak() {
    let mut keys = HashMap::new();
    keys.insert("LMStudio".to_string(), "other-key".to_string());
    let env = HashMap::new();

    let resolved = resolve_base_url_and_key(ResolverOptions {
        provider_name: PROVIDER,
        api_keys: Some(&keys),
        settings: None,
        server_env: &env,
        base_url_key: BASE_URL_KEY,
        api_token_key: TOKEN_KEY,
    });

    assert_eq!(resolved.api_key, None);
}

#[test]
fn test_empty_token_key_disables_env_tier() {
    let env = env_with("", "never-me");

    let resolved = resolve_base_url_and_key(ResolverOptions {
        provider_name: PROVIDER,
        api_keys: None,
        settings: None,
        server_env: &env,
        base_url_key: BASE_URL_KEY,
        api_token_key: "",
    });

    assert_eq!(resolved.api_key, None);
}

// ============================================================================
// Base URL Precedence Tests
// ============================================================================

#[test]
fn test_stored_base_url_wins_over_env() {
    let settings = ProviderSettings {
        base_url: Some("http://stored:1234".to_string()),
        ..Default::default()
    };
    let env = env_with(BASE_URL_KEY, "http://from-env:1234");

    let resolved = resolve_base_url_and_key(ResolverOptions {
        provider_name: PROVIDER,
        api_keys: None,
        settings: Some(&settings),
        server_env: &env,
        base_url_key: BASE_URL_KEY,
        api_token_key: TOKEN_KEY,
    });

    assert_eq!(resolved.base_url.as_deref(), Some("http://stored:1234"));
}

#[test]
fn test_env_base_url_used_when_settings_absent() {
    let env = env_with(BASE_URL_KEY, "http://from-env:1234");

    let resolved = resolve_base_url_and_key(ResolverOptions {
        provider_name: PROVIDER,
        api_keys: None,
        settings: None,
        server_env: &env,
        base_url_key: BASE_URL_KEY,
        api_token_key: TOKEN_KEY,
    });

    assert_eq!(resolved.base_url.as_deref(), Some("http://from-env:1234"));
}

#[test]
fn test_empty_base_url_key_disables_env_tier() {
    let env = env_with(BASE_URL_KEY, "http://from-env:1234");

    let resolved = resolve_base_url_and_key(ResolverOptions {
        provider_name: PROVIDER,
        api_keys: None,
        settings: None,
        server_env: &env,
        base_url_key: "",
        api_token_key: TOKEN_KEY,
    });

    assert_eq!(resolved.base_url, None);
}

// ============================================================================
// Settings and Environment Snapshot Tests
// ============================================================================

#[test]
fn test_provider_settings_default_is_enabled_and_empty() {
    let settings = ProviderSettings::default();
    assert!(settings.enabled);
    assert!(settings.api_key.is_none());
    assert!(settings.base_url.is_none());
}

#[test]
fn test_provider_settings_deserialize_defaults_enabled() {
    let settings: ProviderSettings =
        serde_json::from_str(r#"{"api_key": "k", "base_url": null}"#).unwrap();
    assert!(settings.enabled);
    assert_eq!(settings.api_key.as_deref(), Some("k"));
}

#[test]
fn test_server_env_from_process_reflects_process_env() {
    std::env::set_var("LLMHUB_RESOLVER_TEST_VAR", "present");
    let env = server_env_from_process();
    assert_eq!(
        env.get("LLMHUB_RESOLVER_TEST_VAR").map(String::as_str),
        Some("present")
    );
    std::env::remove_var("LLMHUB_RESOLVER_TEST_VAR");
}
