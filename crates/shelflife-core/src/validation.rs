//! # Validation Module
//!
//! Field invariants for product records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: UI shell                                                  │
//! │  ├── Required inputs, number pickers with min=1                     │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  ├── Re-checks every construction / import path                     │
//! │  └── Typed ValidationError per field                                │
//! │                                                                     │
//! │  Layer 3: Type system                                               │
//! │  └── Category is a closed enum: unknown labels can't exist          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use uuid::Uuid;

use crate::error::{ValidationError, ValidationResult};
use crate::types::Product;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
///
/// ## Example
/// ```rust
/// use shelflife_core::validation::validate_name;
///
/// assert!(validate_name("Süt 1L").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be >= 1 (no zero or negative stock)
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty
/// - Must parse as a UUID
pub fn validate_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Record Validator
// =============================================================================

/// Validates all field invariants of one product record.
///
/// Category needs no check: the closed enum makes unknown categories
/// unrepresentable. Barcode is intentionally free-form.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_id(&product.id)?;
    validate_name(&product.name)?;
    validate_quantity(product.quantity)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample() -> Product {
        Product::new(
            "8690000001",
            "Süt 1L",
            Category::DairyBreakfast,
            NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
            1,
            None,
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Süt 1L").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(99).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_id("").is_err());
        assert!(validate_id("not-a-uuid").is_err());
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&sample()).is_ok());

        let mut empty_name = sample();
        empty_name.name.clear();
        assert!(validate_product(&empty_name).is_err());

        let mut zero_stock = sample();
        zero_stock.quantity = 0;
        assert!(validate_product(&zero_stock).is_err());
    }
}
