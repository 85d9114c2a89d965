//! Error types for smartcart.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Why the cart refused to change.
///
/// None of these are fatal: the input loop absorbs every rejection,
/// logs it and keeps polling the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rejection {
    /// The keyed-in code has no catalog entry (price 0).
    UnknownCode,

    /// A new line item would exceed the cart capacity.
    CartFull,

    /// Index does not address an entry (also covers the empty cart).
    OutOfRange,

    /// Entry at the index is a Total / Txn ID summary, which cannot be removed.
    NotRemovable,
}

impl Rejection {
    /// Short diagnostic for the log sink.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Rejection::UnknownCode => "invalid code",
            Rejection::CartFull => "max limit reached",
            Rejection::OutOfRange => "no entry at cursor",
            Rejection::NotRemovable => "summary entry",
        }
    }
}

/// Display-side error type (hardware wrappers and sinks).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// I²C transaction to the display failed.
    Display,

    /// Row index beyond the display height.
    InvalidRow,

    /// Text longer than the display width.
    BufferOverflow,
}
