//! GPIO button input with async debouncing.
//!
//! Two physical buttons (active-low with internal pull-up):
//!   - ADVANCE - select the next symbol
//!   - REPORT  - announce the selected symbol
//!
//! Each button is handled by its own task that waits for a falling edge,
//! debounces it, and sends one `InputEvent` to the dispatcher queue. Both
//! tasks share the queue's sender, so a press on one button is seen even
//! while the other is held down.

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::error::Error;
use crate::ui::{InputEvent, InputResult};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Sender;
use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;

#[cfg(feature = "defmt")]
use defmt::{debug, info, warn};

/// Run a single button polling loop.
pub async fn button_task<P, D, M, const N: usize>(
    mut pin: P,
    event: InputEvent,
    mut delay: D,
    tx: Sender<'_, M, InputResult, N>,
) -> !
where
    P: InputPin + Wait,
    D: DelayNs,
    M: RawMutex,
{
    #[cfg(feature = "defmt")]
    info!("Button task started: {}", event);

    loop {
        press_cycle(&mut pin, event, &mut delay, &tx).await;
    }
}

/// One press of `pin`.
///
/// Waits for the pin to go low (pressed), debounces, sends `event`, then
/// waits for release so a held button is reported once. A pin error is
/// sent as `Err(Error::InputWait)`, which the dispatcher treats as fatal.
pub async fn press_cycle<P, D, M, const N: usize>(
    pin: &mut P,
    event: InputEvent,
    delay: &mut D,
    tx: &Sender<'_, M, InputResult, N>,
) where
    P: InputPin + Wait,
    D: DelayNs,
    M: RawMutex,
{
    // Wait for falling edge (button press, active-low).
    if pin.wait_for_falling_edge().await.is_err() {
        #[cfg(feature = "defmt")]
        warn!("Button {}: edge wait failed", event);
        tx.send(Err(Error::InputWait)).await;
        return;
    }

    // Debounce: wait and re-check.
    delay.delay_ms(BUTTON_DEBOUNCE_MS).await;

    match pin.is_low() {
        Ok(true) => {
            #[cfg(feature = "defmt")]
            debug!("Button: {}", event);
            tx.send(Ok(event)).await;

            // Wait for release to avoid repeat triggers.
            if pin.wait_for_high().await.is_err() {
                tx.send(Err(Error::InputWait)).await;
                return;
            }
            delay.delay_ms(BUTTON_DEBOUNCE_MS).await;
        }
        Ok(false) => {
            #[cfg(feature = "defmt")]
            debug!("Button {}: bounce ignored", event);
        }
        Err(_) => {
            #[cfg(feature = "defmt")]
            warn!("Button {}: level read failed", event);
            tx.send(Err(Error::InputWait)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::EventQueue;
    use embassy_futures::block_on;
    use embassy_futures::select::{select, Either};
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use embassy_sync::channel::Channel;
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use std::collections::VecDeque;

    #[derive(Debug)]
    struct PinFault;

    impl embedded_hal::digital::Error for PinFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Scripted switch: edge results and post-debounce levels are replayed
    /// in order. A `held` pin never reports release.
    #[derive(Default)]
    struct FakeButton {
        edges: VecDeque<Result<(), PinFault>>,
        low_after_debounce: VecDeque<Result<bool, PinFault>>,
        held: bool,
        release_waits: usize,
    }

    impl FakeButton {
        fn press() -> Self {
            Self {
                edges: VecDeque::from([Ok(())]),
                low_after_debounce: VecDeque::from([Ok(true)]),
                ..Self::default()
            }
        }
    }

    impl ErrorType for FakeButton {
        type Error = PinFault;
    }

    impl InputPin for FakeButton {
        fn is_high(&mut self) -> Result<bool, PinFault> {
            self.is_low().map(|low| !low)
        }

        fn is_low(&mut self) -> Result<bool, PinFault> {
            self.low_after_debounce.pop_front().unwrap_or(Ok(false))
        }
    }

    impl Wait for FakeButton {
        async fn wait_for_high(&mut self) -> Result<(), PinFault> {
            self.release_waits += 1;
            if self.held {
                core::future::pending::<()>().await;
            }
            Ok(())
        }

        async fn wait_for_low(&mut self) -> Result<(), PinFault> {
            Ok(())
        }

        async fn wait_for_rising_edge(&mut self) -> Result<(), PinFault> {
            Ok(())
        }

        async fn wait_for_falling_edge(&mut self) -> Result<(), PinFault> {
            match self.edges.pop_front() {
                Some(edge) => edge,
                None => core::future::pending().await,
            }
        }

        async fn wait_for_any_edge(&mut self) -> Result<(), PinFault> {
            Ok(())
        }
    }

    /// Records requested delays instead of sleeping.
    #[derive(Default)]
    struct FakeDelay(Vec<u32>);

    impl DelayNs for FakeDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.0.push(ns / 1_000_000);
        }
    }

    fn drain(queue: &EventQueue<NoopRawMutex, 4>) -> Vec<InputResult> {
        core::iter::from_fn(|| queue.try_receive().ok()).collect()
    }

    #[test]
    fn press_sends_one_event_then_waits_for_release() {
        let queue: EventQueue<NoopRawMutex, 4> = Channel::new();
        let mut pin = FakeButton::press();
        let mut delay = FakeDelay::default();

        block_on(press_cycle(&mut pin, InputEvent::Advance, &mut delay, &queue.sender()));

        assert_eq!(drain(&queue), [Ok(InputEvent::Advance)]);
        assert_eq!(pin.release_waits, 1);
        assert_eq!(delay.0, [BUTTON_DEBOUNCE_MS, BUTTON_DEBOUNCE_MS]);
    }

    #[test]
    fn bounce_released_before_recheck_sends_nothing() {
        let queue: EventQueue<NoopRawMutex, 4> = Channel::new();
        let mut pin = FakeButton {
            edges: VecDeque::from([Ok(())]),
            low_after_debounce: VecDeque::from([Ok(false)]),
            ..FakeButton::default()
        };

        block_on(press_cycle(
            &mut pin,
            InputEvent::Report,
            &mut FakeDelay::default(),
            &queue.sender(),
        ));

        assert!(queue.is_empty());
        assert_eq!(pin.release_waits, 0);
    }

    #[test]
    fn edge_wait_error_is_forwarded_as_input_wait() {
        let queue: EventQueue<NoopRawMutex, 4> = Channel::new();
        let mut pin = FakeButton {
            edges: VecDeque::from([Err(PinFault)]),
            ..FakeButton::default()
        };

        block_on(press_cycle(
            &mut pin,
            InputEvent::Advance,
            &mut FakeDelay::default(),
            &queue.sender(),
        ));

        assert_eq!(drain(&queue), [Err(Error::InputWait)]);
    }

    #[test]
    fn level_read_error_is_forwarded_as_input_wait() {
        let queue: EventQueue<NoopRawMutex, 4> = Channel::new();
        let mut pin = FakeButton {
            edges: VecDeque::from([Ok(())]),
            low_after_debounce: VecDeque::from([Err(PinFault)]),
            ..FakeButton::default()
        };

        block_on(press_cycle(
            &mut pin,
            InputEvent::Report,
            &mut FakeDelay::default(),
            &queue.sender(),
        ));

        assert_eq!(drain(&queue), [Err(Error::InputWait)]);
        assert_eq!(pin.release_waits, 0);
    }

    #[test]
    fn report_press_is_delivered_while_advance_is_held() {
        let queue: EventQueue<NoopRawMutex, 4> = Channel::new();
        let sender = queue.sender();
        let mut advance = FakeButton {
            held: true,
            ..FakeButton::press()
        };
        let mut report = FakeButton::press();
        let (mut advance_delay, mut report_delay) = (FakeDelay::default(), FakeDelay::default());

        let finished = block_on(select(
            press_cycle(&mut advance, InputEvent::Advance, &mut advance_delay, &sender),
            press_cycle(&mut report, InputEvent::Report, &mut report_delay, &sender),
        ));

        assert!(matches!(finished, Either::Second(())));
        assert_eq!(
            drain(&queue),
            [Ok(InputEvent::Advance), Ok(InputEvent::Report)]
        );
        assert_eq!(advance.release_waits, 1);
    }
}
