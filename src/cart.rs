//! Cart state - the ordered sequence of line items and summary entries.
//!
//! The cart is a plain data structure: it has no notion of keys or
//! screens.  Every mutation either succeeds and keeps the running total
//! in step, or is rejected with no state change.
//!
//! Sequence layout:
//!   - Line items are appended the first time their code is entered.
//!   - Finalize appends a `Total` and a `TransactionId` summary entry.
//!     Summaries share the same slots as line items and count against
//!     [`CART_CAPACITY`], but never contribute to the total.
//!   - Removal closes the gap, so later entries shift one slot left.

use core::fmt::Write;

use heapless::{String, Vec};
use rand::{Rng, RngCore};

use crate::catalog::{self, CatalogEntry};
use crate::config::{CART_CAPACITY, TXN_ID_ALPHABET, TXN_ID_LEN};
use crate::error::Rejection;

/// Maximum length of a summary line ("Total: Rs.4294967295" is 20).
pub const SUMMARY_LEN: usize = 24;

/// Pre-rendered text of a summary entry.
pub type SummaryText = String<SUMMARY_LEN>;

/// Transaction identifier, e.g. `"K7Q"`.
pub type TransactionId = String<TXN_ID_LEN>;

/// One catalog product and how many of it are in the cart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineItem {
    entry: &'static CatalogEntry,
    quantity: u32,
}

impl LineItem {
    pub fn code(&self) -> &'static str {
        self.entry.code
    }

    pub fn name(&self) -> &'static str {
        self.entry.name
    }

    pub fn price(&self) -> u32 {
        self.entry.price
    }

    /// Always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price × quantity`.
    pub fn subtotal(&self) -> u32 {
        self.entry.price.saturating_mul(self.quantity)
    }
}

/// A slot in the cart's display sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Entry {
    /// A catalog product with its quantity.
    Item(LineItem),
    /// "Total: Rs.<total>" snapshot taken at finalize time.
    Total(SummaryText),
    /// "Txn ID: <id>" generated at finalize time.
    TransactionId(SummaryText),
}

impl Entry {
    /// `true` for Total / Txn ID entries.
    pub fn is_summary(&self) -> bool {
        !matches!(self, Entry::Item(_))
    }

    pub fn line_item(&self) -> Option<&LineItem> {
        match self {
            Entry::Item(item) => Some(item),
            _ => None,
        }
    }
}

/// Result of a successful [`Cart::add_or_increment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Added {
    /// A new line item was appended with quantity 1.
    NewLine,
    /// An existing line item's quantity went up by one (new quantity).
    Incremented(u32),
}

/// What [`Cart::finalize`] managed to append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Finalized {
    /// Both the Total and the Txn ID entry.
    Both,
    /// Only one slot was free: Total was appended, Txn ID dropped.
    TotalOnly,
    /// Cart was full, nothing appended.
    Nothing,
}

/// The cart of one transaction.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    entries: Vec<Entry, CART_CAPACITY>,
    total: u32,
}

impl Cart {
    /// Create an empty cart.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            total: 0,
        }
    }

    /// Number of occupied slots (line items + summaries).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Running total in whole rupees.
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Line items only, in sequence order.
    pub fn line_items(&self) -> impl Iterator<Item = &LineItem> {
        self.entries.iter().filter_map(Entry::line_item)
    }

    /// Add one unit of `code`.
    ///
    /// Increments an existing line if there is one (never capacity
    /// checked), otherwise appends a new line if a slot is free.
    pub fn add_or_increment(&mut self, code: &str) -> Result<Added, Rejection> {
        let product = catalog::lookup(code).ok_or(Rejection::UnknownCode)?;

        let existing = self.entries.iter_mut().find_map(|e| match e {
            Entry::Item(item) if item.entry.code == product.code => Some(item),
            _ => None,
        });

        let added = match existing {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                Added::Incremented(item.quantity)
            }
            None => {
                let line = LineItem {
                    entry: product,
                    quantity: 1,
                };
                self.entries
                    .push(Entry::Item(line))
                    .map_err(|_| Rejection::CartFull)?;
                Added::NewLine
            }
        };

        self.total = self.total.saturating_add(product.price);
        Ok(added)
    }

    /// Remove the whole line item at `index`, whatever its quantity.
    pub fn remove_at(&mut self, index: usize) -> Result<LineItem, Rejection> {
        let item = match self.entries.get(index) {
            None => return Err(Rejection::OutOfRange),
            Some(Entry::Item(item)) => *item,
            Some(_) => return Err(Rejection::NotRemovable),
        };

        self.entries.remove(index);
        self.total = self.total.saturating_sub(item.subtotal());
        Ok(item)
    }

    /// Drop every entry and zero the total.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.total = 0;
    }

    /// Append the Total summary and, if a slot is still free, a fresh
    /// transaction ID drawn from `rng`.
    ///
    /// The two capacity checks are independent: with exactly one free
    /// slot the Total lands and the ID is dropped.
    pub fn finalize<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Finalized {
        let mut total_line = SummaryText::new();
        let _ = write!(total_line, "Total: Rs.{}", self.total);
        if self.entries.push(Entry::Total(total_line)).is_err() {
            return Finalized::Nothing;
        }

        if self.is_full() {
            return Finalized::TotalOnly;
        }

        let id = generate_transaction_id(rng);
        let mut id_line = SummaryText::new();
        let _ = write!(id_line, "Txn ID: {}", id);
        // Slot availability checked above.
        let _ = self.entries.push(Entry::TransactionId(id_line));
        Finalized::Both
    }
}

/// Draw a [`TXN_ID_LEN`]-character identifier uniformly from [A-Z0-9].
pub fn generate_transaction_id<R: RngCore + ?Sized>(rng: &mut R) -> TransactionId {
    let mut id = TransactionId::new();
    for _ in 0..TXN_ID_LEN {
        let c = TXN_ID_ALPHABET[rng.gen_range(0..TXN_ID_ALPHABET.len())];
        let _ = id.push(c as char);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    fn recomputed_total(cart: &Cart) -> u32 {
        cart.line_items().map(LineItem::subtotal).sum()
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn add_appends_then_increments() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_or_increment("1"), Ok(Added::NewLine));
        assert_eq!(cart.total(), 25);

        assert_eq!(cart.add_or_increment("1"), Ok(Added::Incremented(2)));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), 50);

        let item = cart.get(0).and_then(Entry::line_item).unwrap();
        assert_eq!(item.code(), "1");
        assert_eq!(item.quantity(), 2);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = Cart::new();
        for code in ["7", "12", "0", "7"] {
            cart.add_or_increment(code).unwrap();
        }
        let codes: std::vec::Vec<_> = cart.line_items().map(LineItem::code).collect();
        assert_eq!(codes, ["7", "12", "0"]);
        assert_eq!(cart.total(), 120 * 2 + 90 + 10);
    }

    #[test]
    fn unknown_code_is_rejected_without_change() {
        let mut cart = Cart::new();
        cart.add_or_increment("3").unwrap();
        for code in ["", "25", "01", "99"] {
            assert_eq!(cart.add_or_increment(code), Err(Rejection::UnknownCode));
        }
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), 45);
    }

    #[test]
    fn capacity_blocks_new_lines_but_not_increments() {
        let mut cart = Cart::new();
        for i in 0..CART_CAPACITY {
            let mut code = String::<2>::new();
            write!(code, "{}", i).unwrap();
            assert_eq!(cart.add_or_increment(&code), Ok(Added::NewLine));
        }
        let before = cart.total();

        assert_eq!(cart.add_or_increment("20"), Err(Rejection::CartFull));
        assert_eq!(cart.len(), CART_CAPACITY);
        assert_eq!(cart.total(), before);

        assert_eq!(cart.add_or_increment("19"), Ok(Added::Incremented(2)));
        assert_eq!(cart.total(), before + 55);
        assert_eq!(cart.total(), recomputed_total(&cart));
    }

    #[test]
    fn remove_deletes_whole_line_and_shifts() {
        let mut cart = Cart::new();
        for code in ["1", "2", "2", "2", "3"] {
            cart.add_or_increment(code).unwrap();
        }
        assert_eq!(cart.total(), 25 + 90 + 45);

        let removed = cart.remove_at(1).unwrap();
        assert_eq!(removed.code(), "2");
        assert_eq!(removed.quantity(), 3);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 70);
        assert_eq!(cart.get(1).and_then(Entry::line_item).unwrap().code(), "3");
    }

    #[test]
    fn remove_out_of_range_is_rejected() {
        let mut cart = Cart::new();
        assert_eq!(cart.remove_at(0), Err(Rejection::OutOfRange));
        cart.add_or_increment("5").unwrap();
        assert_eq!(cart.remove_at(1), Err(Rejection::OutOfRange));
        assert_eq!(cart.total(), 60);
    }

    #[test]
    fn summaries_cannot_be_removed() {
        let mut cart = Cart::new();
        cart.add_or_increment("9").unwrap();
        assert_eq!(cart.finalize(&mut rng()), Finalized::Both);

        assert_eq!(cart.remove_at(1), Err(Rejection::NotRemovable));
        assert_eq!(cart.remove_at(2), Err(Rejection::NotRemovable));
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.total(), 80);
    }

    #[test]
    fn finalize_appends_total_and_id() {
        let mut cart = Cart::new();
        cart.add_or_increment("17").unwrap();
        assert_eq!(cart.finalize(&mut rng()), Finalized::Both);

        match cart.get(1) {
            Some(Entry::Total(text)) => assert_eq!(text.as_str(), "Total: Rs.100"),
            other => panic!("expected total, got {other:?}"),
        }
        match cart.get(2) {
            Some(Entry::TransactionId(text)) => {
                let id = text.strip_prefix("Txn ID: ").unwrap();
                assert_eq!(id.len(), TXN_ID_LEN);
                assert!(id.bytes().all(|b| TXN_ID_ALPHABET.contains(&b)));
            }
            other => panic!("expected txn id, got {other:?}"),
        }
        // Summaries do not count towards the total.
        assert_eq!(cart.total(), 100);
    }

    #[test]
    fn finalize_twice_appends_two_pairs() {
        let mut cart = Cart::new();
        cart.add_or_increment("17").unwrap();
        let mut rng = rng();
        cart.finalize(&mut rng);
        cart.finalize(&mut rng);
        assert_eq!(cart.len(), 5);
        assert!(matches!(cart.get(3), Some(Entry::Total(t)) if t.as_str() == "Total: Rs.100"));
        assert!(matches!(cart.get(4), Some(Entry::TransactionId(_))));
    }

    #[test]
    fn finalize_with_one_free_slot_adds_total_only() {
        let mut cart = Cart::new();
        for i in 0..CART_CAPACITY - 1 {
            let mut code = String::<2>::new();
            write!(code, "{}", i).unwrap();
            cart.add_or_increment(&code).unwrap();
        }
        assert_eq!(cart.finalize(&mut rng()), Finalized::TotalOnly);
        assert!(cart.is_full());
        assert!(matches!(cart.entries().last(), Some(Entry::Total(_))));

        assert_eq!(cart.finalize(&mut rng()), Finalized::Nothing);
        assert_eq!(cart.len(), CART_CAPACITY);
    }

    #[test]
    fn finalize_on_empty_cart_reports_zero() {
        let mut cart = Cart::new();
        cart.finalize(&mut rng());
        assert!(matches!(cart.get(0), Some(Entry::Total(t)) if t.as_str() == "Total: Rs.0"));
    }

    #[test]
    fn items_added_after_finalize_land_behind_summaries() {
        let mut cart = Cart::new();
        cart.add_or_increment("1").unwrap();
        cart.finalize(&mut rng());
        cart.add_or_increment("2").unwrap();
        cart.add_or_increment("1").unwrap();

        assert_eq!(cart.len(), 4);
        assert!(matches!(cart.get(3), Some(Entry::Item(i)) if i.code() == "2"));
        assert_eq!(cart.total(), 80);
    }

    #[test]
    fn reset_clears_everything() {
        let mut cart = Cart::new();
        cart.add_or_increment("4").unwrap();
        cart.finalize(&mut rng());
        cart.reset();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn transaction_ids_vary() {
        let mut rng = rng();
        let a = generate_transaction_id(&mut rng);
        let b = generate_transaction_id(&mut rng);
        let c = generate_transaction_id(&mut rng);
        assert!(a != b || b != c);
    }
}
