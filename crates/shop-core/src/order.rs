//! # Orders
//!
//! Immutable, sequence-numbered records of completed checkouts, and the
//! history that hands out the sequence numbers.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart [ABC×5]                                                           │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  OrderHistory::checkout(&mut cart) ← snapshot lines                     │
//! │      │                              ← sequence = next_sequence++        │
//! │      │                              ← orders.push(order)                │
//! │      │                              ← cart.clear()                      │
//! │      ▼                                                                  │
//! │  &Order { sequence: 1, lines: [ABC×5], total: 1250.00 }                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};
use crate::money::Money;

// =============================================================================
// Order
// =============================================================================

/// A placed order.
///
/// Only [`OrderHistory::checkout`] creates orders, so every sequence number
/// is unique within a history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    sequence: u64,
    lines: Vec<CartLine>,
    placed_at: DateTime<Utc>,
}

impl Order {
    fn from_snapshot(sequence: u64, lines: Vec<CartLine>) -> Self {
        Order {
            sequence,
            lines,
            placed_at: Utc::now(),
        }
    }

    /// Sequence number, starting at 1.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Lines frozen at checkout.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Recomputed from the snapshot every time.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// When checkout happened.
    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}

// =============================================================================
// Order History
// =============================================================================

/// Every order placed during a session, oldest first.
///
/// ## Invariants
/// - Only grows
/// - `next_sequence` starts at 1 and is never handed out twice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHistory {
    orders: Vec<Order>,
    next_sequence: u64,
}

impl OrderHistory {
    /// Creates an empty history whose first order will be #1.
    pub fn new() -> Self {
        OrderHistory {
            orders: Vec::new(),
            next_sequence: 1,
        }
    }

    /// Turns the cart into an order, records it, and empties the cart.
    ///
    /// An empty cart still produces an order (with no lines and a zero
    /// total).
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{Cart, Catalog, OrderHistory};
    ///
    /// let catalog = Catalog::standard();
    /// let mut cart = Cart::new();
    /// let mut history = OrderHistory::new();
    ///
    /// cart.add_or_increment(catalog.find_by_id("ABC").unwrap(), 5);
    /// let order = history.checkout(&mut cart);
    ///
    /// assert_eq!(order.sequence(), 1);
    /// assert_eq!(order.total().to_string(), "1250.00");
    /// assert!(cart.is_empty());
    /// ```
    pub fn checkout(&mut self, cart: &mut Cart) -> &Order {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.orders
            .push(Order::from_snapshot(sequence, cart.lines().to_vec()));
        cart.clear();

        &self.orders[self.orders.len() - 1]
    }

    /// Orders in creation order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Sequence number the next checkout will get.
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    /// Number of orders placed.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Checks if no order has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderHistory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
