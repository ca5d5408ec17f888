//! # Catalog
//!
//! The fixed, session-wide set of purchasable items.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog (built once, read-only afterwards)                             │
//! │                                                                         │
//! │   list_all() ──────────► [ABC Apple 250.0] [DEF Banana 150.0] ...       │
//! │                                                                         │
//! │   find_by_id("abc") ───► Some(ABC Apple 250.0)   (case-insensitive)     │
//! │   find_by_id("XYZ") ───► None                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_item_id, validate_item_name, validate_price};

// =============================================================================
// Item
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Business identifier, unique ignoring case.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price of one unit.
    pub unit_price: Money,
}

impl Item {
    /// Creates an item. Validation happens when it joins a [`Catalog`].
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Money) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            unit_price,
        }
    }

    /// Checks whether `id` names this item, ignoring ASCII case.
    #[inline]
    pub fn matches_id(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id)
    }
}

/// The stock list every session starts with: (id, name, whole price).
const STANDARD_ITEMS: [(&str, &str, i64); 9] = [
    ("ABC", "Apple", 250),
    ("DEF", "Banana", 150),
    ("GHI", "Strawberry", 330),
    ("JKL", "Grapes", 200),
    ("MNO", "Mango", 399),
    ("PQR", "Orange", 350),
    ("STU", "Watermelon", 240),
    ("VWX", "Melon", 190),
    ("YZ", "Pineapple", 299),
];

// =============================================================================
// Catalog
// =============================================================================

/// An ordered, immutable list of items.
///
/// ## Invariants
/// - Ids are unique ignoring ASCII case
/// - Every id, name and price passed validation
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog, validating every item.
    ///
    /// ## Errors
    /// - Any id, name or price fails validation
    /// - Two items share an id (`ValidationError::Duplicate`)
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::{Catalog, Item, Money};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Item::new("ABC", "Apple", Money::from_major_minor(250, 0)),
    ///     Item::new("abc", "Another apple", Money::zero()),
    /// ]);
    /// assert!(catalog.is_err());
    /// ```
    pub fn new(items: Vec<Item>) -> CoreResult<Self> {
        for (index, item) in items.iter().enumerate() {
            validate_item_id(&item.id)?;
            validate_item_name(&item.name)?;
            validate_price(item.unit_price)?;

            if items[..index].iter().any(|seen| seen.matches_id(&item.id)) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: item.id.clone(),
                }
                .into());
            }
        }

        Ok(Catalog { items })
    }

    /// The nine-item fruit catalog the shop ships with.
    pub fn standard() -> Self {
        let items = STANDARD_ITEMS
            .iter()
            .map(|&(id, name, price)| Item::new(id, name, Money::from_major_minor(price, 0)))
            .collect();

        Catalog { items }
    }

    /// All items in catalog order.
    pub fn list_all(&self) -> &[Item] {
        &self.items
    }

    /// Looks an item up by id, ignoring case.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::Catalog;
    ///
    /// let catalog = Catalog::standard();
    /// assert_eq!(catalog.find_by_id("abc").map(|i| i.name.as_str()), Some("Apple"));
    /// assert!(catalog.find_by_id("NOPE").is_none());
    /// ```
    pub fn find_by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.matches_id(id))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 9);

        let ids: Vec<&str> = catalog.list_all().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            ["ABC", "DEF", "GHI", "JKL", "MNO", "PQR", "STU", "VWX", "YZ"]
        );

        let mango = catalog.find_by_id("MNO").unwrap();
        assert_eq!(mango.name, "Mango");
        assert_eq!(mango.unit_price.cents(), 39900);
    }

    #[test]
    fn test_standard_catalog_passes_validation() {
        let rebuilt = Catalog::new(Catalog::standard().list_all().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_find_by_id_is_case_insensitive() {
        let catalog = Catalog::standard();
        let upper = catalog.find_by_id("ABC").unwrap();
        let lower = catalog.find_by_id("abc").unwrap();
        let mixed = catalog.find_by_id("aBc").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn test_find_by_id_miss() {
        let catalog = Catalog::standard();
        assert!(catalog.find_by_id("XYZ").is_none());
        assert!(catalog.find_by_id("").is_none());
        assert!(catalog.find_by_id("AB").is_none());
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            Item::new("ABC", "Apple", Money::from_cents(100)),
            Item::new("Abc", "Apricot", Money::from_cents(200)),
        ]);
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_new_rejects_invalid_items() {
        assert!(Catalog::new(vec![Item::new("", "Nameless", Money::zero())]).is_err());
        assert!(Catalog::new(vec![Item::new("ID", "", Money::zero())]).is_err());
        assert!(Catalog::new(vec![Item::new("ID", "Debt", Money::from_cents(-1))]).is_err());
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.find_by_id("ABC").is_none());
    }
}
