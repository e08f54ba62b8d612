//! Library interface for symbol-select.
//!
//! The selection state, console renderer and dispatcher loop are pure logic
//! and build on the host, so they are tested without hardware.
//!
//! Usage: `cargo test --lib --tests`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! The UART console is only compiled with the `embedded` feature; the button
//! adapter is generic over `embedded-hal` traits and is tested on the host.

#![cfg_attr(not(test), no_std)]

pub mod config;
#[cfg(feature = "embedded")]
pub mod console;
pub mod error;
pub mod selection;
pub mod symbols;
pub mod ui;

pub use error::Error;
pub use selection::{SelectionState, SharedSelection};
pub use symbols::{Symbol, SymbolIndex, SymbolTable, SYMBOL_TABLE};
pub use ui::dispatcher::{EventSource, InputDispatcher};
pub use ui::display::DisplayRenderer;
pub use ui::{EventQueue, InputEvent, InputResult};
