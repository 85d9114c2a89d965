//! Fixed product catalog.
//!
//! Item codes are the short digit strings keyed in on the keypad
//! ("0".."24").  They are matched as strings, so "01" is not "1".
//! Unknown codes resolve to price 0 / name "Unknown"; a price of 0
//! doubles as the "invalid code" sentinel at input time.

/// Name reported for codes with no catalog entry.
pub const UNKNOWN_NAME: &str = "Unknown";

/// One product in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CatalogEntry {
    /// Code as keyed in on the keypad.
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Unit price in whole rupees.
    pub price: u32,
}

const fn entry(code: &'static str, name: &'static str, price: u32) -> CatalogEntry {
    CatalogEntry { code, name, price }
}

/// The product table, ordered by code.
pub static CATALOG: [CatalogEntry; 25] = [
    entry("0", "Biscuit", 10),
    entry("1", "Amul Milk", 25),
    entry("2", "Modern Bread", 30),
    entry("3", "Sunshine Eggs", 45),
    entry("4", "Lays Chips", 20),
    entry("5", "Dawat Rice", 60),
    entry("6", "Medimix Soap", 15),
    entry("7", "Gemini Oil", 120),
    entry("8", "Sugar", 35),
    entry("9", "Dove Shampoo", 80),
    entry("10", "Amul Butter", 50),
    entry("11", "Amul Cheese", 70),
    entry("12", "Real Juice", 90),
    entry("13", "Gokul Milk", 40),
    entry("14", "Britannia Biscuits", 150),
    entry("15", "Maggi Noodles", 30),
    entry("16", "Parle-G Biscuits", 200),
    entry("17", "Red Label Tea", 100),
    entry("18", "Dabur Honey", 120),
    entry("19", "Lays Chips", 55),
    entry("20", "Amul Butter", 90),
    entry("21", "Nestle Milk", 70),
    entry("22", "Nescafe Coffee", 110),
    entry("23", "Surf Excel", 180),
    entry("24", "Maggi Masala", 40),
];

/// Look up the catalog entry for a keyed-in code.
pub fn lookup(code: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.code == code)
}

/// Unit price for `code`, or 0 if the code is unknown.
pub fn price(code: &str) -> u32 {
    lookup(code).map_or(0, |e| e.price)
}

/// Display name for `code`, or [`UNKNOWN_NAME`].
pub fn name(code: &str) -> &'static str {
    lookup(code).map_or(UNKNOWN_NAME, |e| e.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(price("1"), 25);
        assert_eq!(name("1"), "Amul Milk");
        assert_eq!(price("0"), 10);
        assert_eq!(name("0"), "Biscuit");
        assert_eq!(price("24"), 40);
        assert_eq!(name("14"), "Britannia Biscuits");
    }

    #[test]
    fn unknown_codes_use_sentinels() {
        for code in ["", "25", "99", "01", "A", "123"] {
            assert_eq!(price(code), 0, "code {code:?}");
            assert_eq!(name(code), UNKNOWN_NAME);
            assert!(lookup(code).is_none());
        }
    }

    #[test]
    fn every_entry_has_a_positive_price_and_unique_code() {
        for (i, e) in CATALOG.iter().enumerate() {
            assert!(e.price > 0, "{} has zero price", e.code);
            assert!(CATALOG[i + 1..].iter().all(|o| o.code != e.code));
        }
    }

    #[test]
    fn table_is_indexed_by_code() {
        for (i, e) in CATALOG.iter().enumerate() {
            assert_eq!(e.code.parse::<usize>().ok(), Some(i));
        }
    }
}
