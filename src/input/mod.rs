//! Keypad symbols and the router that turns them into cart operations.
//!
//! ## Key map (4×4 membrane keypad)
//!
//! ```text
//!        col0 col1 col2 col3
//! row0    1    2    3    A      A: remove entry at cursor
//! row1    4    5    6    B      B: scroll
//! row2    7    8    9    C      C: reset cart
//! row3    *    0    #    D      *: finalize   #: add code   D: backspace
//! ```
//!
//! The router's only memory is the pending code (up to two digits);
//! every other key is interpreted the same way regardless of history.


use heapless::String;
use rand::RngCore;

use crate::config::{CODE_MAX_DIGITS, KEYPAD_COLS, KEYPAD_ROWS};
use crate::error::Rejection;
use crate::session::Session;
use crate::ui::{Notice, Screen};

/// Printed symbol at each matrix position, `[row][col]`.
pub const KEYMAP: [[char; KEYPAD_COLS]; KEYPAD_ROWS] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

/// A decoded key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// `0`-`9`: extend the pending code.
    Digit(char),
    /// `#`: add the pending code to the cart.
    Commit,
    /// `A`: remove the entry under the cursor.
    Remove,
    /// `B`: scroll one entry.
    Scroll,
    /// `C`: start a new cart.
    Reset,
    /// `D`: erase the last pending digit.
    Backspace,
    /// `*`: append total and transaction ID.
    Finalize,
}

impl Key {
    /// Decode a keypad symbol. Anything outside the keypad set is `None`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0'..='9' => Some(Key::Digit(symbol)),
            '#' => Some(Key::Commit),
            'A' => Some(Key::Remove),
            'B' => Some(Key::Scroll),
            'C' => Some(Key::Reset),
            'D' => Some(Key::Backspace),
            '*' => Some(Key::Finalize),
            _ => None,
        }
    }

    /// Key at a matrix position.
    pub fn at(row: usize, col: usize) -> Option<Self> {
        KEYMAP
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .and_then(Key::from_symbol)
    }

    /// The symbol printed on the key.
    pub const fn symbol(&self) -> char {
        match self {
            Key::Digit(d) => *d,
            Key::Commit => '#',
            Key::Remove => 'A',
            Key::Scroll => 'B',
            Key::Reset => 'C',
            Key::Backspace => 'D',
            Key::Finalize => '*',
        }
    }
}

/// How the display should react to one key.
///
/// `screen: None` leaves the display untouched.  A notice, when present,
/// is shown first and `screen` follows it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Response {
    pub notice: Option<Notice>,
    pub screen: Option<Screen>,
    /// Why the cart refused the key, for the log.
    pub rejected: Option<Rejection>,
}

impl Response {
    const fn unchanged() -> Self {
        Self {
            notice: None,
            screen: None,
            rejected: None,
        }
    }

    const fn show(screen: Screen) -> Self {
        Self {
            notice: None,
            screen: Some(screen),
            rejected: None,
        }
    }

    const fn rejected(rejection: Rejection) -> Self {
        Self {
            notice: None,
            screen: None,
            rejected: Some(rejection),
        }
    }

    const fn notice_then(notice: Notice, screen: Screen) -> Self {
        Self {
            notice: Some(notice),
            screen: Some(screen),
            rejected: None,
        }
    }
}

/// Maps key presses onto the session, accumulating item-code digits.
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    pending: String<CODE_MAX_DIGITS>,
}

impl InputRouter {
    pub const fn new() -> Self {
        Self {
            pending: String::new(),
        }
    }

    /// Digits keyed in since the last commit / reset.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Apply one key to `session`.
    ///
    /// `rng` is only drawn from on finalize.
    pub fn dispatch<R: RngCore + ?Sized>(
        &mut self,
        key: Key,
        session: &mut Session,
        rng: &mut R,
    ) -> Response {
        match key {
            Key::Digit(d) => {
                // Extra digits past the limit are dropped.
                let _ = self.pending.push(d);
                Response::unchanged()
            }
            Key::Commit => self.commit(session),
            Key::Remove => remove_at_cursor(session),
            Key::Scroll => {
                if session.cart.is_empty() {
                    return Response::unchanged();
                }
                session.viewport.scroll_next(session.cart.len());
                Response::show(Screen::CartList)
            }
            Key::Backspace => match self.pending.pop() {
                Some(_) => Response::show(Screen::Prompt),
                None => Response::unchanged(),
            },
            Key::Finalize => {
                session.cart.finalize(rng);
                session.viewport.jump_to_tail(session.cart.len());
                Response::show(Screen::CartList)
            }
            Key::Reset => {
                session.reset();
                self.pending.clear();
                Response::notice_then(Notice::Resetting, Screen::Prompt)
            }
        }
    }

    fn commit(&mut self, session: &mut Session) -> Response {
        let result = session.cart.add_or_increment(&self.pending);
        self.pending.clear();

        match result {
            Ok(_) => {
                session.viewport.jump_to_tail(session.cart.len());
                Response::show(Screen::CartList)
            }
            Err(rejection) => Response::rejected(rejection),
        }
    }
}

fn remove_at_cursor(session: &mut Session) -> Response {
    match session.cart.remove_at(session.viewport.cursor()) {
        Ok(_) => {
            session.viewport.clamp_after_removal(session.cart.len());
            Response::notice_then(Notice::ItemRemoved, Screen::CartList)
        }
        Err(rejection) => Response {
            rejected: Some(rejection),
            ..Response::notice_then(Notice::CannotRemove, Screen::CartList)
        },
    }
}
