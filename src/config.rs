//! Application-wide constants and compile-time configuration.
//!
//! The symbol table, console protocol strings, pin assignments and timing
//! parameters live here so they can be tuned in one place.

// Symbol table

/// Number of selectable symbols.
pub const SYMBOL_COUNT: usize = 5;

/// Glyphs offered by the picker, in display order.
pub const SYMBOLS: [&str; SYMBOL_COUNT] = ["π", "∑", "µ", "Ω", "∫"];

// Console protocol

/// Cursor to row 1 / column 1, then clear to end of line.
pub const CURSOR_HOME_CLEAR_LINE: &str = "\x1b[1;1H\x1b[K";

/// Label printed in front of the symbol library line.
pub const LIBRARY_LABEL: &str = "Symbol Library: ";

/// Prefix of the message printed on a Report press.
pub const REPORT_PREFIX: &str = "\nYour Current Symbol Is: ";

/// Prefix of the trace line printed at startup and after every advance.
pub const INDEX_TRACE_PREFIX: &str = "\nSYMBOL_IDX: ";

// GPIO pin assignments (nRF52840-DK defaults)
//
//   Button 1 (ADVANCE) → P0.11
//   Button 2 (REPORT)  → P0.12
//   UART TX (VCOM)     → P0.06

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u32 = 50;

// Tasks

/// Depth of the input → dispatcher event queue.
///
/// A button task blocks when the queue is full, so events are never dropped.
pub const EVENT_QUEUE_DEPTH: usize = 4;
