//! # Cart
//!
//! The shopper's working set of items before checkout.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu Action              Cart Call                 State Change        │
//! │  ───────────              ─────────                 ────────────        │
//! │                                                                         │
//! │  Add ABC ×2 ────────────► add_or_increment() ─────► lines.push(ABC, 2) │
//! │  Add ABC ×3 ────────────► add_or_increment() ─────► ABC qty 2 → 5      │
//! │  View cart ─────────────► lines(), total() ───────► (read only)        │
//! │  Checkout ──────────────► clear() ────────────────► lines.clear()      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::money::Money;

/// A line in the cart or in an order snapshot.
///
/// Holds its own copy of the item data so an order keeps showing what was
/// bought regardless of where the item came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Item id at time of adding.
    pub id: String,

    /// Item name at time of adding.
    pub name: String,

    /// Unit price at time of adding.
    pub unit_price: Money,

    /// Always 1 or more.
    pub quantity: u64,
}

impl CartLine {
    /// Creates a line from a catalog item and a quantity.
    pub fn from_item(item: &Item, quantity: u64) -> Self {
        CartLine {
            id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by item id ignoring ASCII case (adding the same item
///   sums quantities)
/// - Lines keep first-insertion order
/// - Every quantity is 1 or more; the caller validates before adding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds an item to the cart or increases its quantity if already present.
    ///
    /// `quantity` must already be validated as 1 or more
    /// (see [`crate::validation::validate_quantity`]).
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{Cart, Catalog};
    ///
    /// let catalog = Catalog::standard();
    /// let apple = catalog.find_by_id("ABC").unwrap();
    ///
    /// let mut cart = Cart::new();
    /// cart.add_or_increment(apple, 2);
    /// cart.add_or_increment(apple, 3);
    ///
    /// assert_eq!(cart.lines().len(), 1);
    /// assert_eq!(cart.lines()[0].quantity, 5);
    /// assert_eq!(cart.total().to_fixed(1), "1250.0");
    /// ```
    pub fn add_or_increment(&mut self, item: &Item, quantity: u64) {
        debug_assert!(quantity >= 1, "cart quantities start at 1");

        if let Some(line) = self.lines.iter_mut().find(|l| item.matches_id(&l.id)) {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }

        self.lines.push(CartLine::from_item(item, quantity));
    }

    /// Read-only view of the lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of every line total.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Number of distinct items.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across every line.
    pub fn total_quantity(&self) -> u64 {
        self.lines
            .iter()
            .fold(0_u64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn test_item(id: &str, price_cents: i64) -> Item {
        Item::new(id, format!("Item {}", id), Money::from_cents(price_cents))
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        cart.add_or_increment(&test_item("A", 25000), 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total().cents(), 50000);
    }

    #[test]
    fn test_cart_add_same_item_sums_quantity() {
        let mut cart = Cart::new();
        let item = test_item("A", 999);

        for qty in [1, 4, 7, 2] {
            cart.add_or_increment(&item, qty);
        }

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 14);
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();

        for id in ["STU", "ABC", "MNO", "ABC"] {
            cart.add_or_increment(catalog.find_by_id(id).unwrap(), 1);
        }

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["STU", "ABC", "MNO"]);
    }

    #[test]
    fn test_cart_total_is_sum_of_lines() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();

        cart.add_or_increment(catalog.find_by_id("ABC").unwrap(), 2); // 500.00
        cart.add_or_increment(catalog.find_by_id("YZ").unwrap(), 3); // 897.00
        cart.add_or_increment(catalog.find_by_id("DEF").unwrap(), 1); // 150.00

        let expected: i64 = cart
            .lines()
            .iter()
            .map(|l| l.unit_price.cents() * l.quantity as i64)
            .sum();
        assert_eq!(cart.total().cents(), expected);
        assert_eq!(cart.total().to_fixed(2), "1547.00");
    }

    #[test]
    fn test_apple_example_totals() {
        let catalog = Catalog::standard();
        let apple = catalog.find_by_id("ABC").unwrap();
        let mut cart = Cart::new();

        cart.add_or_increment(apple, 2);
        assert_eq!(cart.total().to_fixed(1), "500.0");

        cart.add_or_increment(apple, 3);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.total().to_fixed(1), "1250.0");
    }

    #[test]
    fn test_cart_clear_behaves_like_fresh_cart() {
        let mut cart = Cart::new();
        let item = test_item("A", 999);

        cart.add_or_increment(&item, 2);
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());

        cart.add_or_increment(&item, 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_cart_merges_ids_differing_in_case() {
        let mut cart = Cart::new();

        cart.add_or_increment(&test_item("ABC", 25000), 2);
        cart.add_or_increment(&test_item("abc", 25000), 3);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].id, "ABC");
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_cart_clear_resets_created_at() {
        let mut cart = Cart::new();
        let first = cart.created_at();

        cart.add_or_increment(&test_item("A", 100), 1);
        cart.clear();

        assert!(cart.created_at() >= first);
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::default();
        assert!(cart.total().is_zero());
        assert_eq!(cart.total_quantity(), 0);
    }
}
