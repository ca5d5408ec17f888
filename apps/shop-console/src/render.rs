//! # Screen Rendering
//!
//! Pure string builders for every screen. Columns are right-aligned with
//! fixed widths:
//!
//! ```text
//!      Product ID       Products     Price     Quantity
//! |<---- 15 ---->|<---- 15 ---->|<- 10 ->|<--- 13 --->|
//! ```
//!
//! Unit prices show one decimal; totals show two.

use std::fmt::Write;

use shop_core::{Cart, CartLine, Item, Order, OrderHistory};

const ID_WIDTH: usize = 15;
const NAME_WIDTH: usize = 15;
const PRICE_WIDTH: usize = 10;
const QTY_WIDTH: usize = 13;

/// The main menu under the store title.
pub fn menu(title: &str) -> String {
    format!(
        "\t   {title}\n\n  1. View Products\n  2. View Shopping Cart\n  3. View Orders\n  4. Exit\n"
    )
}

/// Every catalog item with its price.
pub fn catalog_table(items: &[Item]) -> String {
    let mut out = format!(
        "{:>ID_WIDTH$}{:>NAME_WIDTH$}{:>PRICE_WIDTH$}\n\n",
        "Product ID", "Products", "Price"
    );
    for item in items {
        let _ = writeln!(
            out,
            "{:>ID_WIDTH$}{:>NAME_WIDTH$}{:>PRICE_WIDTH$}",
            item.id,
            item.name,
            item.unit_price.to_fixed(1)
        );
    }
    out
}

fn line_table(id_header: &str, lines: &[CartLine]) -> String {
    let mut out = format!(
        "{:>ID_WIDTH$}{:>NAME_WIDTH$}{:>PRICE_WIDTH$}{:>QTY_WIDTH$}\n",
        id_header, "Product", "Price", "Quantity"
    );
    for line in lines {
        let _ = writeln!(
            out,
            "{:>ID_WIDTH$}{:>NAME_WIDTH$}{:>PRICE_WIDTH$}{:>QTY_WIDTH$}",
            line.id,
            line.name,
            line.unit_price.to_fixed(1),
            line.quantity
        );
    }
    out
}

/// Cart lines followed by the running total.
pub fn cart_view(cart: &Cart) -> String {
    let mut out = line_table("Product ID", cart.lines());
    let _ = write!(out, "\n  Total Amount: {}\n", cart.total());
    out
}

/// One order: sequence, total, then its lines.
pub fn order_details(order: &Order) -> String {
    let mut out = format!(
        "\tOrder ID: {}\n\tTotal Amount: {}\n",
        order.sequence(),
        order.total()
    );
    out.push_str(&line_table("ID", order.lines()));
    out
}

/// The confirmation shown right after checkout.
pub fn checkout_receipt(order: &Order) -> String {
    format!(
        "\n       ================== ORDER ==================\n\n{}\n  You have successfully checked out the products!\n",
        order_details(order)
    )
}

/// Every order placed so far, oldest first.
pub fn order_history(history: &OrderHistory) -> String {
    let mut out = String::from("\n       ================== ORDERS ==================\n\n");
    for order in history.orders() {
        out.push_str(&order_details(order));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::Catalog;

    #[test]
    fn test_menu_lists_four_options() {
        let text = menu("SHOP");
        assert!(text.starts_with("\t   SHOP\n\n"));
        for option in ["1. View Products", "2. View Shopping Cart", "3. View Orders", "4. Exit"] {
            assert!(text.contains(option), "missing {option}");
        }
    }

    #[test]
    fn test_catalog_row_widths() {
        let catalog = Catalog::standard();
        let table = catalog_table(catalog.list_all());
        let rows: Vec<&str> = table.lines().collect();

        assert_eq!(rows[0], "     Product ID       Products     Price");
        assert_eq!(rows[1], "");
        assert_eq!(rows[2], "            ABC          Apple     250.0");
        assert_eq!(rows.len(), 2 + catalog.len());
    }

    #[test]
    fn test_cart_view_shows_lines_and_total() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        cart.add_or_increment(catalog.find_by_id("ABC").unwrap(), 5);

        let view = cart_view(&cart);
        let rows: Vec<&str> = view.lines().collect();
        assert_eq!(rows[0], "     Product ID        Product     Price     Quantity");
        assert_eq!(rows[1], "            ABC          Apple     250.0            5");
        assert!(view.ends_with("  Total Amount: 1250.00\n"));
    }

    #[test]
    fn test_order_details() {
        let catalog = Catalog::standard();
        let mut cart = Cart::new();
        let mut history = OrderHistory::new();
        cart.add_or_increment(catalog.find_by_id("YZ").unwrap(), 2);
        let order = history.checkout(&mut cart);

        let text = order_details(order);
        assert!(text.starts_with("\tOrder ID: 1\n\tTotal Amount: 598.00\n"));
        assert!(text.contains("             ID        Product"));
        assert!(text.contains("             YZ      Pineapple     299.0            2"));
    }

    #[test]
    fn test_empty_history_has_only_banner() {
        let text = order_history(&OrderHistory::new());
        assert!(text.contains("ORDERS"));
        assert!(!text.contains("Order ID"));
    }
}
