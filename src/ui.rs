//! What goes on the 16×2 display.
//!
//! The control loop never draws directly: the input router answers each
//! key with a [`Response`](crate::input::Response) naming a [`Screen`] and
//! optionally a transient [`Notice`].  [`compose`] turns those into a
//! [`Frame`] and [`present`] pushes it through a [`DisplaySink`].

use crate::config::DISPLAY_ROWS;
use crate::error::Error;
use crate::session::Session;
use crate::viewport::{truncate, Line, Window};

/// The rows handed to the display in one refresh.
pub type Frame = Window;

/// Prompt shown at boot, after a reset and while editing a code.
pub const PROMPT: &str = "Enter Code:";

/// Screens (views) the display can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// "Enter Code:" with the pending digits underneath.
    Prompt,
    /// Two-row window over the cart at the viewport cursor.
    CartList,
}

/// Transient message shown for
/// [`NOTICE_DURATION_MS`](crate::config::NOTICE_DURATION_MS) before the
/// follow-up screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notice {
    ItemRemoved,
    CannotRemove,
    Resetting,
}

impl Notice {
    pub const fn text(&self) -> &'static str {
        match self {
            Notice::ItemRemoved => "Item Removed",
            Notice::CannotRemove => "Cannot Remove",
            Notice::Resetting => "Resetting...",
        }
    }
}

/// Character display the frames are drawn on.
///
/// Implemented by the SSD1306 wrapper on target and by recorders in tests.
pub trait DisplaySink {
    /// Blank the whole display.
    fn clear(&mut self) -> Result<(), Error>;

    /// Write `text` at column 0 of `row`.
    fn write_line(&mut self, row: usize, text: &str) -> Result<(), Error>;

    /// Push buffered content to the panel.
    fn flush(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

/// Build the frame for `screen`.
pub fn compose(screen: Screen, session: &Session, pending: &str) -> Frame {
    match screen {
        Screen::Prompt => [truncate(PROMPT), truncate(pending)],
        Screen::CartList => session.window(),
    }
}

/// Frame for a notice: the message on the top row, the rest blank.
pub fn notice_frame(notice: Notice) -> Frame {
    core::array::from_fn(|row| {
        if row == 0 {
            truncate(notice.text())
        } else {
            Line::new()
        }
    })
}

/// Clear the display and draw every non-blank row of `frame`.
pub fn present<D: DisplaySink + ?Sized>(sink: &mut D, frame: &Frame) -> Result<(), Error> {
    sink.clear()?;
    for (row, line) in frame.iter().enumerate().take(DISPLAY_ROWS) {
        if !line.is_empty() {
            sink.write_line(row, line)?;
        }
    }
    sink.flush()
}
