//! Scroll cursor over the cart and the 2-line window it selects.
//!
//! The cursor indexes the cart's display sequence (line items plus any
//! summary entries) and names the entry drawn on the top row.

use core::fmt::Write;

use heapless::String;

use crate::cart::{Cart, Entry, LineItem};
use crate::config::{DISPLAY_COLS, DISPLAY_ROWS};

/// One display row, hard-limited to the display width.
pub type Line = String<DISPLAY_COLS>;

/// The rows drawn for one cursor position.
pub type Window = [Line; DISPLAY_ROWS];

/// Scratch size for a line item before truncation
/// ("24:Britannia Biscuits (4294967295)" is 34).
const ITEM_SCRATCH_LEN: usize = 48;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Viewport {
    cursor: usize,
}

impl Viewport {
    pub const fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Index of the entry on the top row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Advance one entry, wrapping to the top after the last one.
    ///
    /// Wraps even when the whole sequence already fits on screen.
    pub fn scroll_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Pull the cursor back into range after the sequence shrank.
    pub fn clamp_after_removal(&mut self, new_len: usize) {
        if self.cursor >= new_len {
            self.cursor = tail_start(new_len);
        }
    }

    /// Show the last two entries.
    pub fn jump_to_tail(&mut self, len: usize) {
        self.cursor = tail_start(len);
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Render the rows starting at the cursor; rows past the end are blank.
    pub fn render_window(&self, cart: &Cart) -> Window {
        core::array::from_fn(|row| {
            cart.get(self.cursor + row)
                .map(render_entry)
                .unwrap_or_default()
        })
    }
}

fn tail_start(len: usize) -> usize {
    len.saturating_sub(DISPLAY_ROWS)
}

/// Render a single entry, truncated to [`DISPLAY_COLS`].
pub fn render_entry(entry: &Entry) -> Line {
    match entry {
        Entry::Item(item) => render_item(item),
        Entry::Total(text) | Entry::TransactionId(text) => truncate(text),
    }
}

fn render_item(item: &LineItem) -> Line {
    let mut scratch: String<ITEM_SCRATCH_LEN> = String::new();
    let _ = write!(
        scratch,
        "{}:{} ({})",
        item.code(),
        item.name(),
        item.quantity()
    );
    truncate(&scratch)
}

/// Keep the first [`DISPLAY_COLS`] characters of `text`.
pub fn truncate(text: &str) -> Line {
    let mut line = Line::new();
    for c in text.chars() {
        if line.push(c).is_err() {
            break;
        }
    }
    line
}
