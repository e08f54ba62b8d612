//! Text-console renderer for the symbol library.
//!
//! Everything is written through `core::fmt::Write`, so the same code drives
//! the UART on target and a string buffer in host tests. Console writes are
//! fire-and-forget: a failed write is dropped and never surfaces.

use core::fmt::Write;

use crate::config::{CURSOR_HOME_CLEAR_LINE, INDEX_TRACE_PREFIX, LIBRARY_LABEL, REPORT_PREFIX};
use crate::symbols::{Symbol, SymbolIndex, SymbolTable};

/// Draws the symbol library and the one-line announcements on a console.
pub struct DisplayRenderer<'t, W, const N: usize> {
    table: &'t SymbolTable<N>,
    console: W,
}

impl<'t, W: Write, const N: usize> DisplayRenderer<'t, W, N> {
    pub fn new(table: &'t SymbolTable<N>, console: W) -> Self {
        Self { table, console }
    }

    /// Redraw line 1 with the whole library, bracketing `selected`.
    ///
    /// `Symbol Library: π [∑] µ Ω ∫ `
    pub fn render(&mut self, selected: SymbolIndex<N>) {
        let _ = self.console.write_str(CURSOR_HOME_CLEAR_LINE);
        let _ = self.console.write_str(LIBRARY_LABEL);

        for (index, symbol) in self.table.iter() {
            let _ = if index == selected {
                write!(self.console, "[{}] ", symbol)
            } else {
                write!(self.console, "{} ", symbol)
            };
        }
    }

    /// Print the "current selection" announcement for a Report press.
    pub fn report(&mut self, symbol: Symbol) {
        self.line(REPORT_PREFIX, symbol);
    }

    /// Print the index trace line shown at startup and after each advance.
    pub fn trace_index(&mut self, symbol: Symbol) {
        self.line(INDEX_TRACE_PREFIX, symbol);
    }

    fn line(&mut self, prefix: &str, symbol: Symbol) {
        let _ = writeln!(self.console, "{}{}", prefix, symbol);
    }

    pub fn table(&self) -> &'t SymbolTable<N> {
        self.table
    }

    pub fn console(&self) -> &W {
        &self.console
    }
}
