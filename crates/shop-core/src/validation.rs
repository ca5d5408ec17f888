//! # Validation Module
//!
//! Input validation utilities for the shop.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: Prompt (shop-console)                                        │
//! │  └── Text must parse as an integer, otherwise re-prompt                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Quantity must be 1 or more                                        │
//! │  └── Catalog items must have sane ids, names, prices                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart / Catalog                                               │
//! │  └── Trust validated input, no re-checks                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::validation::{normalize_item_id, validate_quantity};
//!
//! assert_eq!(normalize_item_id("  abc  "), "ABC");
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of an item id.
pub const MAX_ITEM_ID_LEN: usize = 50;

/// Maximum length of an item name.
pub const MAX_ITEM_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog item id.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ITEM_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ITEM_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates an item display name (non-empty, at most 200 characters).
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Turns whatever the shopper typed into a lookup id.
///
/// Only the first whitespace-separated token counts, ASCII-uppercased to
/// match [`crate::Item::matches_id`].
pub fn normalize_item_id(raw: &str) -> String {
    raw.split_whitespace()
        .next()
        .unwrap_or_default()
        .to_ascii_uppercase()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity typed by the shopper.
///
/// ## User Workflow
/// ```text
/// Enter quantity: 0
///      │
///      ▼
/// validate_quantity(0) ← THIS FUNCTION
///      │
///      ├── qty < 1? → MustBePositive → "Input 1 or more."
///      │
///      └── OK → Cart::add_or_increment
/// ```
///
/// There is deliberately no upper bound: stock is unlimited.
///
/// ## Returns
/// The quantity as the unsigned type the cart stores.
pub fn validate_quantity(qty: i64) -> ValidationResult<u64> {
    if qty < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    u64::try_from(qty).map_err(|_| ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 1,
        max: i64::MAX,
    })
}

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("ABC").is_ok());
        assert!(validate_item_id("YZ").is_ok());
        assert!(validate_item_id("item_1-b").is_ok());

        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("   ").is_err());
        assert!(validate_item_id("has space").is_err());
        assert!(validate_item_id(&"A".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Watermelon").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_normalize_item_id() {
        assert_eq!(normalize_item_id("abc"), "ABC");
        assert_eq!(normalize_item_id("  yz  "), "YZ");
        assert_eq!(normalize_item_id("def ghi"), "DEF");
        assert_eq!(normalize_item_id("   "), "");
        assert_eq!(normalize_item_id("straße"), "STRAßE");
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(1).ok(), Some(1));
        assert_eq!(validate_quantity(1_000_000).ok(), Some(1_000_000));

        assert!(matches!(
            validate_quantity(0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_quantity(-3),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(25000)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }
}
