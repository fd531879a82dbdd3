//! Export protocol for the compiled miod grammar.
//!
//! The grammar's lexical and syntactic rules live in a pre-compiled, opaque
//! table linked into the host process. This crate wraps that table into an
//! immutable [`GrammarHandle`] (name `"miod"` plus the borrowed table
//! pointer) and publishes it exactly once per [`ExportSurface`], so an
//! incremental-parsing host can attach it to a parser. No parsing happens
//! here; the table and the engine that consumes it are black boxes.
//!
//! ```
//! use miod_grammar::{export, StaticGrammarSource};
//! # use core::ptr::NonNull;
//! # static TABLE: u8 = 0;
//! # fn compiled_table() -> NonNull<miod_grammar::GrammarTable> {
//! #     NonNull::from(&TABLE).cast()
//! # }
//!
//! // `compiled_table` is the host's accessor for the linked grammar table.
//! let source = StaticGrammarSource::new(compiled_table);
//! let handle = export(&source).expect("grammar handle");
//! assert_eq!(handle.name(), "miod");
//! ```

pub mod export;
pub mod handle;
pub mod manifest;
pub mod registry;
pub mod table;

pub use export::{export, ExportError, ExportSurface, HostObjectModel, ProcessHostModel};
pub use handle::{GrammarHandle, GRAMMAR_NAME};
pub use manifest::{GrammarManifest, ManifestError, MIOD_MANIFEST_JSON};
pub use registry::{GrammarRegistry, RegistryError};
pub use table::{GrammarSource, GrammarTable, GrammarTableFn, StaticGrammarSource};
