//! Grammar metadata shipped alongside the compiled table.
//!
//! Host tooling uses the manifest to route files to a grammar and to report
//! what the grammar can produce. The miod manifest is embedded in the crate;
//! hosts may also parse manifests for grammars they install themselves.

use serde::Deserialize;
use thiserror::Error;

/// Embedded manifest for the miod grammar.
pub const MIOD_MANIFEST_JSON: &str = include_str!("../grammars/miod.json");

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to parse grammar manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Descriptive metadata for one grammar.
#[derive(Debug, Clone, Deserialize)]
pub struct GrammarManifest {
    /// Registry name; matches the exported handle's name.
    pub name: String,
    pub version: String,
    /// File extensions (without the dot) routed to this grammar.
    #[serde(rename = "file-types", default)]
    pub file_types: Vec<String>,
    /// Named node kinds the compiled grammar produces.
    #[serde(rename = "node-kinds", default)]
    pub node_kinds: Vec<String>,
}

impl GrammarManifest {
    /// Parse a manifest from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The embedded miod manifest.
    pub fn miod() -> Result<Self, ManifestError> {
        Self::from_json(MIOD_MANIFEST_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_manifest_parses() {
        let manifest = GrammarManifest::miod().unwrap();
        assert_eq!(manifest.name, "miod");
        assert!(manifest.file_types.iter().any(|ext| ext == "miod"));
    }

    #[test]
    fn test_embedded_manifest_lists_node_kinds() {
        let manifest = GrammarManifest::miod().unwrap();
        for kind in ["source_file", "unit_header", "unit_name", "doc_comment"] {
            assert!(
                manifest.node_kinds.iter().any(|k| k == kind),
                "missing node kind {kind}"
            );
        }
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let manifest =
            GrammarManifest::from_json(r#"{"name": "other", "version": "0.0.1"}"#).unwrap();
        assert!(manifest.file_types.is_empty());
        assert!(manifest.node_kinds.is_empty());
    }

    #[test]
    fn test_malformed_manifest_is_a_parse_error() {
        let err = GrammarManifest::from_json("{not json").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn test_manifest_loaded_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("miod.json");
        std::fs::write(&path, MIOD_MANIFEST_JSON).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let manifest = GrammarManifest::from_json(&content).unwrap();
        assert_eq!(manifest.name, "miod");
    }
}
