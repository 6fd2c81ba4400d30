//! Declarative application manifest for the embedding chat application.
//!
//! The manifest describes the dev/build pipeline: which route files to
//! ignore, the server module format, routing feature flags, build output
//! locations, the dev server port, and which dependency names must be
//! bundled into the server build instead of being externalized. It carries
//! no behavior beyond [`AppManifest::is_bundled`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::errors::{LlmError, LlmResult};

/// Root manifest structure
#[derive(Debug, Deserialize)]
pub struct AppManifest {
    /// Glob patterns of route files excluded from routing
    #[serde(default = "default_ignored_route_files")]
    pub ignored_route_files: Vec<String>,

    /// Module format of the server build: "esm" or "cjs"
    #[serde(default = "default_server_module_format")]
    pub server_module_format: String,

    /// Routing/runtime feature flags, keyed by flag name
    #[serde(default)]
    pub future: HashMap<String, bool>,

    /// Output path of the server build
    #[serde(default = "default_server_build_path")]
    pub server_build_path: String,

    /// Entry module of the server
    #[serde(default = "default_server_entry")]
    pub server_entry: String,

    /// Application source directory
    #[serde(default = "default_app_directory")]
    pub app_directory: String,

    /// Dev server settings
    #[serde(default)]
    pub dev: DevSettings,

    /// Dependency-name patterns that must be bundled into the server build.
    /// Each entry is either a literal package name or an anchored regular
    /// expression.
    #[serde(default)]
    pub server_dependencies_to_bundle: Vec<String>,
}

/// Dev server settings
#[derive(Debug, Deserialize)]
pub struct DevSettings {
    #[serde(default = "default_dev_port")]
    pub port: u16,
}

impl Default for DevSettings {
    fn default() -> Self {
        Self { port: default_dev_port() }
    }
}

fn default_ignored_route_files() -> Vec<String> {
    vec!["**/.*".to_string()]
}

fn default_server_module_format() -> String {
    "esm".to_string()
}

fn default_server_build_path() -> String {
    "build/index.js".to_string()
}

fn default_server_entry() -> String {
    "./server.ts".to_string()
}

fn default_app_directory() -> String {
    "app".to_string()
}

fn default_dev_port() -> u16 {
    5173
}

impl AppManifest {
    /// Check whether a dependency name must be bundled into the server build.
    ///
    /// A pattern matches if it equals the name literally or if, compiled as
    /// an anchored regular expression, it matches the whole name.
    pub fn is_bundled(&self, name: &str) -> bool {
        self.server_dependencies_to_bundle.iter().any(|pattern| {
            if pattern == name {
                return true;
            }
            match anchored_regex(pattern) {
                Ok(re) => re.is_match(name),
                Err(_) => false,
            }
        })
    }
}

fn anchored_regex(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})$", pattern))
}

/// Load and parse a TOML manifest file.
///
/// # Arguments
/// * `path` - Path to the TOML manifest file
///
/// # Returns
/// * `LlmResult<AppManifest>` - Parsed and validated manifest
///
/// # Example
/// ```no_run
/// use llmhub::config::load_manifest;
///
/// let manifest = load_manifest("app.toml").unwrap();
/// ```
pub fn load_manifest<P: AsRef<Path>>(path: P) -> LlmResult<AppManifest> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        LlmError::ConfigError(format!(
            "Failed to read manifest file '{}': {}",
            path.display(),
            e
        ))
    })?;

    parse_manifest(&content)
}

/// Parse a TOML manifest string.
pub fn parse_manifest(content: &str) -> LlmResult<AppManifest> {
    let manifest: AppManifest = toml::from_str(content).map_err(|e| {
        LlmError::ConfigError(format!("Failed to parse manifest TOML: {}", e))
    })?;

    validate_manifest(&manifest)?;

    Ok(manifest)
}

/// Validate the manifest for consistency.
fn validate_manifest(manifest: &AppManifest) -> LlmResult<()> {
    let valid_formats = ["esm", "cjs"];
    if !valid_formats.contains(&manifest.server_module_format.as_str()) {
        return Err(LlmError::ConfigError(format!(
            "Unknown server module format '{}'\n  \
             → Valid formats: {}",
            manifest.server_module_format,
            valid_formats.join(", ")
        )));
    }

    if manifest.dev.port == 0 {
        return Err(LlmError::ConfigError(
            "Dev server port must be non-zero".to_string(),
        ));
    }

    for (idx, pattern) in manifest.server_dependencies_to_bundle.iter().enumerate() {
        if let Err(e) = anchored_regex(pattern) {
            return Err(LlmError::ConfigError(format!(
                "Invalid bundle pattern '{}' in server_dependencies_to_bundle[{}]: {}",
                pattern, idx, e
            )));
        }
    }

    Ok(())
}
