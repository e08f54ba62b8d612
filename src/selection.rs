//! Current-symbol state.
//!
//! [`SelectionState`] owns the selected index and the renderer it refreshes.
//! The dispatcher task is its only writer, so it is used through `&mut self`.
//! [`SharedSelection`] wraps one in a blocking mutex for designs where a
//! second task also needs to read or move the selection.

use core::cell::RefCell;
use core::fmt::Write;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::symbols::{Symbol, SymbolIndex, SymbolTable};
use crate::ui::display::DisplayRenderer;
use crate::ui::input_logic::select_next;

/// Selected position in a symbol table plus the display that shows it.
pub struct SelectionState<'t, W, const N: usize> {
    index: SymbolIndex<N>,
    display: DisplayRenderer<'t, W, N>,
}

impl<'t, W: Write, const N: usize> SelectionState<'t, W, N> {
    /// Start at the first symbol. Nothing is drawn until the first
    /// [`set_index`](Self::set_index).
    pub fn new(table: &'t SymbolTable<N>, console: W) -> Self {
        Self {
            index: SymbolIndex::FIRST,
            display: DisplayRenderer::new(table, console),
        }
    }

    pub fn current_index(&self) -> SymbolIndex<N> {
        self.index
    }

    pub fn current_symbol(&self) -> Symbol {
        self.display.table().get(self.index)
    }

    /// Select `raw` and redraw the library.
    ///
    /// Out-of-range values are ignored: no state change, no redraw.
    pub fn set_index(&mut self, raw: usize) {
        if let Some(index) = SymbolIndex::new(raw) {
            self.index = index;
            self.display.render(index);
        }
    }

    /// Move to the next symbol, wrapping after the last one.
    pub fn advance(&mut self) {
        self.set_index(select_next(self.index.get(), N));
    }

    pub fn display_mut(&mut self) -> &mut DisplayRenderer<'t, W, N> {
        &mut self.display
    }

    pub fn console(&self) -> &W {
        self.display.console()
    }
}

/// [`SelectionState`] behind a blocking mutex.
///
/// Each call holds the lock for the whole operation, so a reader never sees
/// a half-finished `advance` and two writers never interleave. The handle takes
/// no closures, so nothing can call back into it while the lock is held.
pub struct SharedSelection<'t, M: RawMutex, W, const N: usize> {
    inner: Mutex<M, RefCell<SelectionState<'t, W, N>>>,
}

impl<'t, M: RawMutex, W: Write, const N: usize> SharedSelection<'t, M, W, N> {
    pub fn new(state: SelectionState<'t, W, N>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(state)),
        }
    }

    pub fn current_index(&self) -> SymbolIndex<N> {
        self.inner.lock(|state| state.borrow().current_index())
    }

    pub fn current_symbol(&self) -> Symbol {
        self.inner.lock(|state| state.borrow().current_symbol())
    }

    pub fn set_index(&self, raw: usize) {
        self.inner.lock(|state| state.borrow_mut().set_index(raw));
    }

    pub fn advance(&self) {
        self.inner.lock(|state| state.borrow_mut().advance());
    }

    pub fn into_inner(self) -> SelectionState<'t, W, N> {
        self.inner.into_inner().into_inner()
    }
}
