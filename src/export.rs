//! The export protocol: wrapping the compiled table into a host-visible
//! handle, exactly once per surface.
//!
//! An `ExportSurface` has two states, uninitialized and published. The first
//! successful `publish` constructs the one `GrammarHandle`, wraps it through
//! the host's object model, and pins it; every later call returns the same
//! wrapped handle without consulting the grammar source again. A failed wrap
//! leaves the surface uninitialized, so nothing partially constructed is
//! ever observable.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::handle::GrammarHandle;
use crate::table::GrammarSource;

/// Failure to publish a handle. Allocation of the wrapping object is the
/// only runtime failure the protocol admits; it is fatal for the caller's
/// load sequence.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("host object model failed to allocate the grammar handle: {reason}")]
    Allocation { reason: String },
}

/// The host runtime's allocator for the wrapping object.
///
/// Production hosts wrap with `ProcessHostModel`; tests substitute a failing
/// model to exercise the out-of-memory path.
pub trait HostObjectModel {
    fn wrap(&self, handle: GrammarHandle) -> Result<Arc<GrammarHandle>, ExportError>;
}

/// Default host model: plain in-process allocation.
pub struct ProcessHostModel;

impl HostObjectModel for ProcessHostModel {
    fn wrap(&self, handle: GrammarHandle) -> Result<Arc<GrammarHandle>, ExportError> {
        Ok(Arc::new(handle))
    }
}

/// A module export surface holding at most one published grammar handle.
pub struct ExportSurface {
    cell: OnceCell<Arc<GrammarHandle>>,
}

impl ExportSurface {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Publish the grammar handle onto this surface.
    ///
    /// On the first successful call this binds the table from `source`,
    /// constructs the handle, and wraps it through `host`. Later calls
    /// return the already-published handle; neither `source` nor `host` is
    /// consulted again. If `host` fails, the surface stays uninitialized
    /// and the error is returned.
    pub fn publish(
        &self,
        source: &dyn GrammarSource,
        host: &dyn HostObjectModel,
    ) -> Result<Arc<GrammarHandle>, ExportError> {
        let published = self.cell.get_or_try_init(|| {
            let handle = GrammarHandle::new(source.grammar_table());
            let wrapped = host.wrap(handle)?;
            tracing::debug!(grammar = handle.name(), "published grammar handle");
            Ok(wrapped)
        })?;
        Ok(Arc::clone(published))
    }

    /// The published handle, if any.
    pub fn get(&self) -> Option<Arc<GrammarHandle>> {
        self.cell.get().map(Arc::clone)
    }

    pub fn is_published(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for ExportSurface {
    fn default() -> Self {
        Self::new()
    }
}

/// The crate's own export surface, mirroring a module-level export table.
static EXPORT: ExportSurface = ExportSurface::new();

/// Export the miod grammar handle for this process.
///
/// Idempotent: every call in one process returns the same wrapped handle,
/// bound to whichever source won the first call.
pub fn export(source: &dyn GrammarSource) -> Result<Arc<GrammarHandle>, ExportError> {
    EXPORT.publish(source, &ProcessHostModel)
}
