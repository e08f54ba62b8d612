//! UART console - the text display the symbol library is drawn on.
//!
//! UARTE0 drives the nRF52840-DK's virtual COM port (TX on P0.06).
//! Writes block until the bytes are clocked out; at 115200 baud a full
//! library line takes about 3 ms.

use core::fmt;

use defmt::info;
use embassy_nrf::uarte::{self, UarteTx};
use embassy_nrf::{bind_interrupts, peripherals};

bind_interrupts!(struct Irqs {
    UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
});

/// Transmit-only console. Implements `core::fmt::Write`.
pub struct Console {
    tx: UarteTx<'static, peripherals::UARTE0>,
}

/// Bring up UARTE0 as a 115200 8N1 console on `txd`.
pub fn init(uarte: peripherals::UARTE0, txd: peripherals::P0_06) -> Console {
    let mut config = uarte::Config::default();
    config.parity = uarte::Parity::EXCLUDED;
    config.baudrate = uarte::Baudrate::BAUD115200;

    let tx = UarteTx::new(uarte, Irqs, txd, config);
    info!("Console ready at 115200 baud");

    Console { tx }
}

impl fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // `blocking_write` copies flash-resident literals into RAM for EasyDMA.
        self.tx.blocking_write(s.as_bytes()).map_err(|_| fmt::Error)
    }
}
