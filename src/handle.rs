//! The grammar handle: the single value this crate exists to export.

use core::ptr::NonNull;

use crate::table::GrammarTable;

/// Name under which host tooling discovers the grammar.
pub const GRAMMAR_NAME: &str = "miod";

/// An immutable descriptor for the compiled miod grammar.
///
/// Carries a borrowed, process-lifetime reference to the compiled table plus
/// the grammar's name. Consumers must treat the table pointer as opaque: no
/// dereferencing, no arithmetic, no ownership transfer. There is no way to
/// change either field after construction.
///
/// Equality is identity: two handles are equal when they name the same
/// grammar and point at the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarHandle {
    name: &'static str,
    table: NonNull<GrammarTable>,
}

// The table lives in static storage, is read-only, and is never dereferenced
// through this type, so sharing the pointer across threads is sound.
unsafe impl Send for GrammarHandle {}
unsafe impl Sync for GrammarHandle {}

impl GrammarHandle {
    /// Bind a handle to a compiled table. Called once per publication by the
    /// export surface.
    pub(crate) fn new(table: NonNull<GrammarTable>) -> Self {
        Self {
            name: GRAMMAR_NAME,
            table,
        }
    }

    /// The grammar's registry name, always `"miod"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The opaque compiled table this handle wraps.
    pub fn table(&self) -> NonNull<GrammarTable> {
        self.table
    }
}

impl std::fmt::Display for GrammarHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "grammar `{}`", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::test_support::{fake_table, other_table};

    #[test]
    fn test_handle_carries_grammar_name() {
        let handle = GrammarHandle::new(fake_table());
        assert_eq!(handle.name(), "miod");
    }

    #[test]
    fn test_handle_preserves_table_pointer() {
        let handle = GrammarHandle::new(fake_table());
        assert_eq!(handle.table(), fake_table());
    }

    #[test]
    fn test_equality_is_table_identity() {
        let a = GrammarHandle::new(fake_table());
        let b = GrammarHandle::new(fake_table());
        let c = GrammarHandle::new(other_table());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_names_the_grammar() {
        let handle = GrammarHandle::new(fake_table());
        assert_eq!(handle.to_string(), "grammar `miod`");
    }
}
