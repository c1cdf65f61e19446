//! Engine settings: the static configuration surface the core consumes.
//!
//! Owned and loaded by the CLI (file + env + defaults); the core only ever
//! reads it. Namespaces and paths describe the *generated* application's
//! layering; marker names feed symbol classification.

use serde::{Deserialize, Serialize};

use crate::domain::MarkerNames;

/// Namespace prefixes for each architectural layer of the generated
/// application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerNamespaces {
    /// Where domain types live; seed lookups are constrained to it.
    pub domain: String,
    pub infrastructure: String,
    pub contracts: String,
    pub commands: String,
    pub queries: String,
}

impl Default for LayerNamespaces {
    fn default() -> Self {
        Self {
            domain: "Domain".into(),
            infrastructure: "Infrastructure".into(),
            contracts: "Contracts".into(),
            commands: "Application.Commands".into(),
            queries: "Application.Queries".into(),
        }
    }
}

/// Relative output directories per architectural layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerPaths {
    pub infrastructure: String,
    pub contracts: String,
    pub queries: String,
}

impl Default for LayerPaths {
    fn default() -> Self {
        Self {
            infrastructure: "Infrastructure".into(),
            contracts: "Contracts".into(),
            queries: "Queries".into(),
        }
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub namespaces: LayerNamespaces,
    pub paths: LayerPaths,
    pub markers: MarkerNames,
    /// File extension of emitted artifacts. The default targets a C#
    /// application; the engine itself is text-out and does not care.
    pub artifact_extension: String,
}

impl EngineSettings {
    pub fn artifact_extension_or_default(&self) -> &str {
        if self.artifact_extension.is_empty() {
            "cs"
        } else {
            &self.artifact_extension
        }
    }
}
