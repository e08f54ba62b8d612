//! symbol-select firmware - nRF52840-DK.
//!
//! The start task brings up the console and both buttons, spawns the
//! dispatcher and one task per button, then returns. Neither worker runs until
//! the start task has finished, so no input is consumed before setup
//! completes.
//!
//! Button 1 advances through the symbol library, button 2 reports the
//! current symbol. Output goes to the J-Link virtual COM port at 115200 8N1.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::Delay;
use symbol_select::config::EVENT_QUEUE_DEPTH;
use symbol_select::console::{self, Console};
use symbol_select::ui::buttons::button_task;
use symbol_select::{
    Error, EventQueue, InputDispatcher, InputEvent, SelectionState, SYMBOL_TABLE,
};
use {defmt_rtt as _, panic_probe as _};

/// Button tasks → dispatcher task.
static EVENTS: EventQueue<CriticalSectionRawMutex, EVENT_QUEUE_DEPTH> = Channel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("symbol-select starting");

    if let Err(e) = start(spawner) {
        defmt::panic!("Start-up failed: {}", e);
    }

    info!("Start task done");
}

fn start(spawner: Spawner) -> Result<(), Error> {
    let p = embassy_nrf::init(Default::default());

    let console = console::init(p.UARTE0, p.P0_06);
    let advance = Input::new(p.P0_11, Pull::Up);
    let report = Input::new(p.P0_12, Pull::Up);

    spawner
        .spawn(dispatcher_task(console))
        .map_err(|_| Error::Spawn)?;
    spawner
        .spawn(input_task(advance, InputEvent::Advance))
        .map_err(|_| Error::Spawn)?;
    spawner
        .spawn(input_task(report, InputEvent::Report))
        .map_err(|_| Error::Spawn)?;

    Ok(())
}

#[embassy_executor::task]
async fn dispatcher_task(console: Console) {
    info!("Dispatcher task started");

    let mut dispatcher = InputDispatcher::new(SelectionState::new(&SYMBOL_TABLE, console));
    let mut events = EVENTS.receiver();

    match dispatcher.run(&mut events).await {
        Ok(never) => match never {},
        Err(e) => defmt::panic!("Dispatcher halted: {}", e),
    }
}

/// One instance per button; both feed the same queue.
#[embassy_executor::task(pool_size = 2)]
async fn input_task(pin: Input<'static>, event: InputEvent) {
    button_task(pin, event, Delay, EVENTS.sender()).await
}
