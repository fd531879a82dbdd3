//! The opaque compiled grammar table and the seam through which it enters
//! the crate.
//!
//! The table is produced by an external grammar compiler and linked into the
//! host process; this crate only ever carries a pointer to it. `GrammarSource`
//! abstracts over where that pointer comes from so the export protocol can be
//! exercised against a test double instead of a real compiled table.

use core::ptr::NonNull;

/// A compiled grammar table, owned by static storage for the process
/// lifetime. Opaque: never constructed, dereferenced, or freed here.
#[repr(C)]
pub struct GrammarTable {
    _opaque: [u8; 0],
}

/// Shape of a link-time table accessor: no arguments, returns a non-null
/// pointer to the same table on every call, no side effects.
pub type GrammarTableFn = fn() -> NonNull<GrammarTable>;

/// Supplies the compiled grammar table to the export protocol.
///
/// Implementations must return a pointer that stays valid for the rest of
/// the process and must return the same table on repeated calls.
pub trait GrammarSource {
    fn grammar_table(&self) -> NonNull<GrammarTable>;
}

/// A `GrammarSource` backed by a plain accessor function, the usual adapter
/// for a table reached through a linked symbol.
pub struct StaticGrammarSource {
    accessor: GrammarTableFn,
}

impl StaticGrammarSource {
    pub fn new(accessor: GrammarTableFn) -> Self {
        Self { accessor }
    }
}

impl GrammarSource for StaticGrammarSource {
    fn grammar_table(&self) -> NonNull<GrammarTable> {
        (self.accessor)()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{fake_table, other_table};
    use super::*;

    #[test]
    fn test_static_source_forwards_to_accessor() {
        let source = StaticGrammarSource::new(fake_table);
        assert_eq!(source.grammar_table(), fake_table());
    }

    #[test]
    fn test_static_source_is_idempotent() {
        let source = StaticGrammarSource::new(fake_table);
        let first = source.grammar_table();
        let second = source.grammar_table();
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_tables_compare_unequal() {
        assert_ne!(fake_table(), other_table());
    }
}
