//! User interface subsystem - UART console + two physical buttons.
//!
//! The dispatcher task owns the selection state and reacts to button
//! events, redrawing the symbol library on the console.
//!
//! ## Components
//!
//! - **Display**: ANSI text console (line 1 holds the symbol library)
//! - **Buttons**: 2 tactile switches with debouncing (ADVANCE, REPORT)

pub mod buttons;
pub mod dispatcher;
pub mod display;
pub mod input_logic;

use embassy_sync::channel::Channel;

use crate::error::Error;

/// Physical button events (after debouncing).
///
///   - ADVANCE: select the next symbol, wrapping at the end of the table
///   - REPORT: announce the selected symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    Advance,
    Report,
}

/// One wait on the input primitive: the button that fired, or why the wait
/// failed.
pub type InputResult = Result<InputEvent, Error>;

/// Queue between the button tasks and the dispatcher.
pub type EventQueue<M, const N: usize> = Channel<M, InputResult, N>;
