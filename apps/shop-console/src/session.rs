//! # Session Loop
//!
//! The menu-driven state machine that owns the cart and the order history.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │             ┌──────── 1 ───────► BrowsingCatalog ──┐                    │
//! │             │                                      │                    │
//! │  MenuShown ─┼──────── 2 ───────► ViewingCart ──────┤                    │
//! │      ▲      │                                      │                    │
//! │      │      ├──────── 3 ───────► ViewingOrders ────┤                    │
//! │      │      │                                      │                    │
//! │      │      ├──── other n ─────► "Invalid choice" ─┤                    │
//! │      │      │                                      │                    │
//! │      │      └──────── 4 ───────► Exited (terminal) │                    │
//! │      │                                             │                    │
//! │      └──────────────── pause() ◄───────────────────┘                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every shopper mistake is handled on screen. Only terminal failures and
//! closed input leave [`Session::run`] early.

use shop_core::validation::{normalize_item_id, validate_quantity};
use shop_core::{Cart, Catalog, OrderHistory};
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::{ShopError, ShopResult};
use crate::prompt::{read_int, read_text, read_yes_no};
use crate::render;
use crate::terminal::Terminal;

/// A choice typed at the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    BrowseCatalog,
    ViewCart,
    ViewOrders,
    Exit,
    Invalid(i32),
}

impl From<i32> for MenuChoice {
    fn from(value: i32) -> Self {
        match value {
            1 => MenuChoice::BrowseCatalog,
            2 => MenuChoice::ViewCart,
            3 => MenuChoice::ViewOrders,
            4 => MenuChoice::Exit,
            other => MenuChoice::Invalid(other),
        }
    }
}

/// Whether the loop goes back to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One shopper's session: catalog, cart and order history.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    catalog: Catalog,
    cart: Cart,
    history: OrderHistory,
}

impl Session {
    /// Starts with an empty cart and no orders.
    pub fn new(config: SessionConfig, catalog: Catalog) -> Self {
        Session {
            config,
            catalog,
            cart: Cart::new(),
            history: OrderHistory::new(),
        }
    }

    /// The cart as it stands now.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Every order placed in this session.
    pub fn history(&self) -> &OrderHistory {
        &self.history
    }

    /// Runs the menu loop until the shopper exits or input closes.
    ///
    /// ## Errors
    /// Only terminal I/O failures. Closed input ends the session normally.
    pub fn run<T: Terminal + ?Sized>(&mut self, term: &mut T) -> ShopResult<()> {
        info!(items = self.catalog.len(), "Session started");

        loop {
            match self.step(term) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(ShopError::InputClosed) => {
                    warn!("Input closed, ending session");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        info!(orders = self.history.len(), "Session ended");
        Ok(())
    }

    /// One pass: menu, one action, pause.
    fn step<T: Terminal + ?Sized>(&mut self, term: &mut T) -> ShopResult<Flow> {
        term.clear()?;
        term.write(&render::menu(&self.config.title))?;
        let choice = MenuChoice::from(read_int(term, "  Enter choice: ")?);
        term.write("\n")?;
        debug!(?choice, "Menu choice");

        match choice {
            MenuChoice::BrowseCatalog => self.browse_catalog(term)?,
            MenuChoice::ViewCart => self.view_cart(term)?,
            MenuChoice::ViewOrders => term.write(&render::order_history(&self.history))?,
            MenuChoice::Exit => {
                term.write("\nExiting...\n")?;
                return Ok(Flow::Exit);
            }
            MenuChoice::Invalid(_) => term.write("Invalid choice. Please try again.\n")?,
        }

        term.write("\n")?;
        term.pause()?;
        Ok(Flow::Continue)
    }

    fn browse_catalog<T: Terminal + ?Sized>(&mut self, term: &mut T) -> ShopResult<()> {
        term.write(&render::catalog_table(self.catalog.list_all()))?;

        loop {
            self.add_attempt(term)?;
            if !read_yes_no(term, "\n  Add more? (Y/N): ")? {
                return Ok(());
            }
        }
    }

    /// Asks for one item and quantity; any mistake only skips this attempt.
    fn add_attempt<T: Terminal + ?Sized>(&mut self, term: &mut T) -> ShopResult<()> {
        let raw = read_text(
            term,
            "\n  Enter the ID of the product you want to add to the shopping cart: ",
        )?;
        let id = normalize_item_id(&raw);

        let Some(item) = self.catalog.find_by_id(&id) else {
            debug!(%id, "Item not found");
            return term.write("  Product not found.\n").map_err(Into::into);
        };

        let requested = read_int(term, "  Enter quantity: ")?;
        match validate_quantity(i64::from(requested)) {
            Ok(quantity) => {
                self.cart.add_or_increment(item, quantity);
                debug!(id = %item.id, quantity, lines = self.cart.line_count(), "Added to cart");
                term.write("  Product added successfully!\n")?;
            }
            Err(err) => {
                debug!(%err, requested, "Quantity rejected");
                term.write("  Input 1 or more.\n")?;
            }
        }
        Ok(())
    }

    fn view_cart<T: Terminal + ?Sized>(&mut self, term: &mut T) -> ShopResult<()> {
        term.write(&render::cart_view(&self.cart))?;

        if !read_yes_no(term, "\n  Do you want to checkout all the products? (Y/N): ")? {
            return Ok(());
        }

        let order = self.history.checkout(&mut self.cart);
        info!(
            sequence = order.sequence(),
            lines = order.lines().len(),
            total = %order.total(),
            "Order placed"
        );
        term.write(&render::checkout_receipt(order))?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
