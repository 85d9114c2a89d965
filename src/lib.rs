//! Host-testable core of the smartcart keypad register.
//!
//! Everything that decides *what* happens when a key is pressed lives
//! here: the catalog, the cart state machine, the scrolling viewport,
//! the key router and frame composition.  None of it touches hardware,
//! so it builds for the host and runs under `cargo test --lib`.
//!
//! The embedded binary (`main.rs`, feature `embedded`) adds the keypad
//! matrix scanner, the SSD1306 display and the RNG seed on top.

#![cfg_attr(not(test), no_std)]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod session;
pub mod ui;
pub mod viewport;

pub use cart::{Added, Cart, Entry, Finalized, LineItem};
pub use error::{Error, Rejection};
pub use input::{InputRouter, Key, Response};
pub use session::Session;
pub use ui::{DisplaySink, Frame, Notice, Screen};
pub use viewport::Viewport;
