//! smartcart firmware - keypad point-of-sale register on nRF52840.
//!
//! The keypad task scans the matrix and queues keys; the main task owns
//! the session and handles one key per tick: dispatch it through the
//! input router, then redraw the display as the response asks.

#![no_std]
#![no_main]

mod board;

use defmt::{debug, info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::rng::{self, Rng};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};
use embassy_time::{Duration, Timer};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use smartcart::config::{KEY_QUEUE_DEPTH, NOTICE_DURATION_MS};
use smartcart::ui::{self, DisplaySink, Frame, Screen};
use smartcart::{InputRouter, Key, Session};
use {defmt_rtt as _, panic_probe as _};

use crate::board::display::OledDisplay;
use crate::board::keypad::{self, Matrix};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    RNG => rng::InterruptHandler<peripherals::RNG>;
});

/// Keypad → main loop.
static KEYS: Channel<CriticalSectionRawMutex, Key, KEY_QUEUE_DEPTH> = Channel::new();

#[embassy_executor::task]
async fn keypad_runner(
    matrix: Matrix,
    tx: Sender<'static, CriticalSectionRawMutex, Key, KEY_QUEUE_DEPTH>,
) {
    keypad::keypad_task(matrix, tx).await
}

/// Present a frame; display errors are logged and otherwise ignored.
fn show(display: &mut impl DisplaySink, frame: &Frame) {
    if let Err(e) = ui::present(display, frame) {
        warn!("Display: {}", e);
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("smartcart starting");

    let p = embassy_nrf::init(Default::default());

    // Seed the transaction-ID generator once from the hardware RNG.
    let mut seed = [0u8; 8];
    Rng::new(p.RNG, Irqs).blocking_fill_bytes(&mut seed);
    let mut rng = SmallRng::seed_from_u64(u64::from_le_bytes(seed));

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut display = OledDisplay::new(i2c);

    let rows = [
        Output::new(p.P0_03, Level::High, OutputDrive::Standard),
        Output::new(p.P0_04, Level::High, OutputDrive::Standard),
        Output::new(p.P0_28, Level::High, OutputDrive::Standard),
        Output::new(p.P0_29, Level::High, OutputDrive::Standard),
    ];
    let cols = [
        Input::new(p.P0_30, Pull::Up),
        Input::new(p.P0_31, Pull::Up),
        Input::new(p.P1_01, Pull::Up),
        Input::new(p.P1_02, Pull::Up),
    ];
    if spawner
        .spawn(keypad_runner(Matrix::new(rows, cols), KEYS.sender()))
        .is_err()
    {
        warn!("Keypad task could not be spawned");
    }

    let mut session = Session::new();
    let mut router = InputRouter::new();
    show(
        &mut display,
        &ui::compose(Screen::Prompt, &session, router.pending()),
    );
    info!("Ready");

    loop {
        let key = KEYS.receive().await;
        debug!("Key: {}", key.symbol());

        let response = router.dispatch(key, &mut session, &mut rng);
        if let Some(rejection) = response.rejected {
            warn!("Key {} rejected: {}", key.symbol(), rejection.as_str());
        }

        if let Some(notice) = response.notice {
            info!("{}", notice.text());
            show(&mut display, &ui::notice_frame(notice));
            Timer::after(Duration::from_millis(NOTICE_DURATION_MS)).await;
        }
        if let Some(screen) = response.screen {
            show(
                &mut display,
                &ui::compose(screen, &session, router.pending()),
            );
        }

        debug!(
            "Cart: {} entries, total Rs.{}, cursor {}",
            session.cart.len(),
            session.cart.total(),
            session.viewport.cursor()
        );
    }
}
