//! Fixed symbol table and the validated index into it.

use crate::config::{SYMBOLS, SYMBOL_COUNT};

/// A printable glyph. Lives for the whole program.
pub type Symbol = &'static str;

/// The glyph table used by the firmware.
pub static SYMBOL_TABLE: SymbolTable<SYMBOL_COUNT> = SymbolTable::new(SYMBOLS);

/// Position inside a table of `N` symbols.
///
/// Only values in `0..N` can be constructed, so table lookups never fail.
/// There is no index at all for `N == 0`; naming [`FIRST`](Self::FIRST) on
/// such a type is rejected at compile time:
///
/// ```compile_fail
/// let _ = symbol_select::SymbolIndex::<0>::FIRST;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SymbolIndex<const N: usize>(usize);

impl<const N: usize> SymbolIndex<N> {
    /// The first entry. Every selection starts here.
    pub const FIRST: Self = {
        assert!(N > 0, "symbol table must not be empty");
        Self(0)
    };

    /// Validate a raw position. Returns `None` when `raw >= N`.
    pub const fn new(raw: usize) -> Option<Self> {
        if raw < N {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Raw position in `0..N`.
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Immutable, ordered, non-empty sequence of symbols.
#[derive(Debug)]
pub struct SymbolTable<const N: usize> {
    symbols: [Symbol; N],
}

impl<const N: usize> SymbolTable<N> {
    /// Build a table.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`. In a `static` or `const` initializer that panic is
    /// a compile error.
    pub const fn new(symbols: [Symbol; N]) -> Self {
        assert!(N > 0, "symbol table must not be empty");
        Self { symbols }
    }

    /// Symbol at `index`.
    pub fn get(&self, index: SymbolIndex<N>) -> Symbol {
        self.symbols[index.get()]
    }

    /// Number of entries (always `N`).
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`; tables are never empty.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Symbols in table order, paired with their index.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolIndex<N>, Symbol)> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| (SymbolIndex(i), *symbol))
    }
}
