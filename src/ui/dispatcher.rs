//! Dispatcher loop - the single writer of the selection state.
//!
//! The dispatcher pulls one [`InputEvent`] at a time from an
//! [`EventSource`] and applies it. On target the source is the receiving
//! end of the button queue; tests substitute scripted sources.

use core::convert::Infallible;
use core::fmt::Write;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Receiver;

use super::{InputEvent, InputResult};
use crate::error::Error;
use crate::selection::SelectionState;

/// Blocking wait for the next button event.
#[allow(async_fn_in_trait)]
pub trait EventSource {
    /// Suspend until exactly one event arrives, or the wait fails.
    async fn next_event(&mut self) -> InputResult;
}

impl<M: RawMutex, const N: usize> EventSource for Receiver<'_, M, InputResult, N> {
    async fn next_event(&mut self) -> InputResult {
        self.receive().await
    }
}

pub struct InputDispatcher<'t, W, const N: usize> {
    state: SelectionState<'t, W, N>,
}

impl<'t, W: Write, const N: usize> InputDispatcher<'t, W, N> {
    pub fn new(state: SelectionState<'t, W, N>) -> Self {
        Self { state }
    }

    /// Select the first symbol, draw the library and print the index trace.
    pub fn start(&mut self) {
        self.state.set_index(0);
        self.trace_selection();
    }

    /// Apply one event to the selection.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Advance => {
                self.state.advance();
                self.trace_selection();
            }
            InputEvent::Report => {
                let symbol = self.state.current_symbol();
                self.state.display_mut().report(symbol);
            }
        }
    }

    /// Wait for one event and handle it.
    ///
    /// A failed wait is returned untouched and leaves the selection as it was.
    pub async fn dispatch_next<S: EventSource>(
        &mut self,
        source: &mut S,
    ) -> Result<InputEvent, Error> {
        let event = source.next_event().await?;
        self.handle(event);
        Ok(event)
    }

    /// [`start`](Self::start), then dispatch events until the source fails.
    ///
    /// Only ever returns an error; the caller is expected to halt on it.
    pub async fn run<S: EventSource>(&mut self, source: &mut S) -> Result<Infallible, Error> {
        self.start();
        loop {
            self.dispatch_next(source).await?;
        }
    }

    pub fn state(&self) -> &SelectionState<'t, W, N> {
        &self.state
    }

    pub fn into_state(self) -> SelectionState<'t, W, N> {
        self.state
    }

    fn trace_selection(&mut self) {
        let symbol = self.state.current_symbol();
        self.state.display_mut().trace_index(symbol);
    }
}
