//! State of the transaction in progress.

use crate::cart::Cart;
use crate::viewport::{Viewport, Window};

/// Cart plus the viewport scrolling over it.
///
/// Owned by the control loop and lent to the input router for each key.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub cart: Cart,
    pub viewport: Viewport,
}

impl Session {
    pub const fn new() -> Self {
        Self {
            cart: Cart::new(),
            viewport: Viewport::new(),
        }
    }

    /// Empty the cart and scroll back to the top.
    pub fn reset(&mut self) {
        self.cart.reset();
        self.viewport.reset();
    }

    /// Rows currently visible on the cart list.
    pub fn window(&self) -> Window {
        self.viewport.render_window(&self.cart)
    }
}
