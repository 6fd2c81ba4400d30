//! Tests for application manifest loading and parsing.

use std::io::Write;

use tempfile::NamedTempFile;

use llmhub::{load_manifest, parse_manifest, LlmError};

// ============================================================================
// TOML Parsing Tests
// ============================================================================

#[test]
fn test_parse_full_manifest() {
    let toml = r#"
ignored_route_files = ["**/.*"]
server_module_format = "esm"
server_build_path = "build/index.js"
server_entry = "./server.ts"
app_directory = "app"
server_dependencies_to_bundle = [
    "@huggingface/.*",
    "tensorblock/Smaug-Llama-3-70B-Instruct-32K-GGUF",
]

[future]
v2_error_boundary = true
v2_meta = true
v2_normalize_form_method = true
v2_headers = true

[dev]
port = 5173
"#;

    let manifest = parse_manifest(toml).unwrap();
    assert_eq!(manifest.ignored_route_files, vec!["**/.*".to_string()]);
    assert_eq!(manifest.server_module_format, "esm");
    assert_eq!(manifest.server_build_path, "build/index.js");
    assert_eq!(manifest.server_entry, "./server.ts");
    assert_eq!(manifest.app_directory, "app");
    assert_eq!(manifest.dev.port, 5173);
    assert_eq!(manifest.future.len(), 4);
    assert_eq!(manifest.future.get("v2_error_boundary"), Some(&true));
    assert_eq!(manifest.server_dependencies_to_bundle.len(), 2);
}

#[test]
fn test_parse_partial_manifest_fills_defaults() {
    let toml = r#"
server_module_format = "cjs"

[dev]
port = 3000
"#;

    let manifest = parse_manifest(toml).unwrap();
    assert_eq!(manifest.server_module_format, "cjs");
    assert_eq!(manifest.dev.port, 3000);
    assert_eq!(manifest.ignored_route_files, vec!["**/.*".to_string()]);
    assert_eq!(manifest.server_build_path, "build/index.js");
    assert_eq!(manifest.app_directory, "app");
    assert!(manifest.future.is_empty());
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_unknown_module_format_is_rejected() {
    let result = parse_manifest(r#"server_module_format = "amd""#);
    assert!(matches!(result, Err(LlmError::ConfigError(_))));
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Unknown server module format"));
}

#[test]
fn test_zero_dev_port_is_rejected() {
    let toml = r#"
[dev]
port = 0
"#;
    let result = parse_manifest(toml);
    assert!(matches!(result, Err(LlmError::ConfigError(_))));
}

#[test]
fn test_invalid_bundle_pattern_is_rejected() {
    let result = parse_manifest(r#"server_dependencies_to_bundle = ["[unclosed"]"#);
    assert!(matches!(result, Err(LlmError::ConfigError(_))));
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Invalid bundle pattern"));
}

// ============================================================================
// Bundle Pattern Tests
// ============================================================================

#[test]
fn test_is_bundled_matches_literal_names() {
    let manifest = parse_manifest(
        r#"server_dependencies_to_bundle = ["tensorblock/Smaug-Llama-3-70B-Instruct-32K-GGUF"]"#,
    )
    .unwrap();

    assert!(manifest.is_bundled("tensorblock/Smaug-Llama-3-70B-Instruct-32K-GGUF"));
    assert!(!manifest.is_bundled("tensorblock/other-model"));
}

#[test]
fn test_is_bundled_matches_regex_patterns() {
    let manifest =
        parse_manifest(r#"server_dependencies_to_bundle = ["@huggingface/.*"]"#).unwrap();

    assert!(manifest.is_bundled("@huggingface/inference"));
    assert!(manifest.is_bundled("@huggingface/hub"));
    assert!(!manifest.is_bundled("@other/inference"));
}

#[test]
fn test_is_bundled_patterns_are_anchored() {
    let manifest = parse_manifest(r#"server_dependencies_to_bundle = ["react"]"#).unwrap();

    assert!(manifest.is_bundled("react"));
    assert!(!manifest.is_bundled("react-dom"));
    assert!(!manifest.is_bundled("preact"));
}

#[test]
fn test_is_bundled_with_empty_list() {
    let manifest = parse_manifest("").unwrap();
    assert!(!manifest.is_bundled("anything"));
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_load_manifest_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
server_build_path = "dist/server.js"

[dev]
port = 8080
"#
    )
    .unwrap();

    let manifest = load_manifest(file.path()).unwrap();
    assert_eq!(manifest.server_build_path, "dist/server.js");
    assert_eq!(manifest.dev.port, 8080);
}

#[test]
fn test_load_manifest_missing_file() {
    let result = load_manifest("/nonexistent/app.toml");
    assert!(matches!(result, Err(LlmError::ConfigError(_))));
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to read manifest file"));
}
