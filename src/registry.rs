//! Host-side registry mapping grammar names and file extensions to handles.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::handle::GrammarHandle;
use crate::manifest::GrammarManifest;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("grammar `{name}` is already registered")]
    Duplicate { name: String },
}

/// Registry of exported grammar handles.
///
/// Names register exactly once; a duplicate registration is rejected and the
/// original mapping survives, matching the exporter's exactly-once
/// publication.
#[derive(Default)]
pub struct GrammarRegistry {
    by_name: HashMap<String, Arc<GrammarHandle>>,
    /// Extension -> grammar name. First registration of an extension wins.
    extensions: HashMap<String, String>,
}

impl GrammarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle under its manifest's name and file types.
    pub fn register(
        &mut self,
        manifest: &GrammarManifest,
        handle: Arc<GrammarHandle>,
    ) -> Result<(), RegistryError> {
        if self.by_name.contains_key(&manifest.name) {
            tracing::warn!(grammar = %manifest.name, "rejected duplicate grammar registration");
            return Err(RegistryError::Duplicate {
                name: manifest.name.clone(),
            });
        }

        for ext in &manifest.file_types {
            let ext = ext.trim_start_matches('.');
            self.extensions
                .entry(ext.to_string())
                .or_insert_with(|| manifest.name.clone());
        }

        tracing::info!(
            grammar = %manifest.name,
            extensions = manifest.file_types.len(),
            "registered grammar"
        );
        self.by_name.insert(manifest.name.clone(), handle);
        Ok(())
    }

    pub fn find_by_name(&self, name: &str) -> Option<Arc<GrammarHandle>> {
        self.by_name.get(name).map(Arc::clone)
    }

    /// Route a file to a grammar by its extension.
    pub fn find_for_file(&self, path: &Path) -> Option<Arc<GrammarHandle>> {
        let ext = path.extension()?.to_str()?;
        let name = self.extensions.get(ext)?;
        self.find_by_name(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
