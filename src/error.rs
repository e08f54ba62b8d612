//! Unified error type for symbol-select.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

use core::fmt;

/// Top-level error type used across the application.
///
/// Every variant is fatal: the firmware has no supervisor that could restart
/// a failed task, so callers halt with a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The input wait primitive reported an error instead of a button press.
    InputWait,

    /// The bootstrap could not hand a task to the executor.
    Spawn,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputWait => f.write_str("input wait failed"),
            Error::Spawn => f.write_str("task spawn failed"),
        }
    }
}
