//! # shop-core: Pure Business Logic for the Console Shop
//!
//! Catalog lookup, cart math and order records with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Console Shop Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 shop-console (menu loop)                        │   │
//! │  │    Menu ──► Browse catalog ──► View cart ──► View orders        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │   order   │  │   money   │  │   │
//! │  │   │  Item     │  │  Cart     │  │  Order    │  │  Money    │  │   │
//! │  │   │  Catalog  │  │  CartLine │  │  History  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Items and the fixed catalog
//! - [`cart`] - Cart and cart lines
//! - [`order`] - Orders and the order history
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Input and catalog validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::{Cart, Catalog, OrderHistory};
//!
//! let catalog = Catalog::standard();
//! let mut cart = Cart::new();
//! let mut history = OrderHistory::new();
//!
//! let apple = catalog.find_by_id("abc").expect("apple is stocked");
//! cart.add_or_increment(apple, 2);
//! assert_eq!(cart.total().to_fixed(1), "500.0");
//!
//! let order = history.checkout(&mut cart);
//! assert_eq!(order.sequence(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Item};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderHistory};
