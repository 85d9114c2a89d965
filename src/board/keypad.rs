//! 4×4 matrix keypad scanner with debouncing.
//!
//! Rows are outputs idling high; columns are inputs with internal
//! pull-ups.  A row is driven low in turn and any column reading low
//! marks a pressed key at (row, col).
//!
//! The scan task debounces each press, decodes it through the key map
//! and sends a `Key` to the control loop channel.

use smartcart::config::{
    KEYPAD_COLS, KEYPAD_ROWS, KEYPAD_ROW_SETTLE_US, KEYPAD_SCAN_INTERVAL_MS, KEY_DEBOUNCE_MS,
    KEY_QUEUE_DEPTH,
};
use defmt::{debug, warn};
use embassy_nrf::gpio::{Input, Output};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};
use smartcart::Key;

/// Keypad matrix wiring.
pub struct Matrix {
    rows: [Output<'static>; KEYPAD_ROWS],
    cols: [Input<'static>; KEYPAD_COLS],
}

impl Matrix {
    pub fn new(rows: [Output<'static>; KEYPAD_ROWS], cols: [Input<'static>; KEYPAD_COLS]) -> Self {
        let mut matrix = Self { rows, cols };
        for row in &mut matrix.rows {
            row.set_high();
        }
        matrix
    }

    /// Scan every row once; returns the first pressed position.
    async fn scan(&mut self) -> Option<(usize, usize)> {
        let mut found = None;
        for (r, row) in self.rows.iter_mut().enumerate() {
            row.set_low();
            Timer::after(Duration::from_micros(KEYPAD_ROW_SETTLE_US)).await;
            let col = self.cols.iter().position(|c| c.is_low());
            row.set_high();

            if let Some(c) = col {
                found = Some((r, c));
                break;
            }
        }
        found
    }
}

/// Run the keypad polling loop.
///
/// Waits for a press, debounces, sends the decoded key, then waits for
/// release before repeating.
pub async fn keypad_task(
    mut matrix: Matrix,
    tx: Sender<'static, CriticalSectionRawMutex, Key, KEY_QUEUE_DEPTH>,
) -> ! {
    loop {
        let Some(pos) = matrix.scan().await else {
            Timer::after(Duration::from_millis(KEYPAD_SCAN_INTERVAL_MS)).await;
            continue;
        };

        // Debounce: wait and re-check the same position.
        Timer::after(Duration::from_millis(KEY_DEBOUNCE_MS)).await;
        if matrix.scan().await != Some(pos) {
            continue;
        }

        match Key::at(pos.0, pos.1) {
            Some(key) => {
                debug!("Keypad: {} at {}", key.symbol(), pos);
                tx.send(key).await;
            }
            None => warn!("Keypad: no key mapped at {}", pos),
        }

        // Wait for release to avoid repeat triggers.
        while matrix.scan().await.is_some() {
            Timer::after(Duration::from_millis(KEYPAD_SCAN_INTERVAL_MS)).await;
        }
        Timer::after(Duration::from_millis(KEY_DEBOUNCE_MS)).await;
    }
}
