//! # Validation Module
//!
//! Input validation for caller-supplied fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: HTTP deserialization (axum + serde)                       │
//! │  ├── Type validation (numbers, enums, timestamps)                   │
//! │  └── Missing required fields                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - field rules                                 │
//! │  ├── Required-after-trim, length caps, numeric sanity               │
//! │  └── Runs before any row is written                                 │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  ├── NOT NULL / UNIQUE constraints                                  │
//! │  └── Foreign key constraints                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{CustomerDraft, CustomerPatch, ParcelDraft};
use crate::{MAX_ADDRESS_LEN, MAX_CUSTOMER_NAME_LEN, MAX_LOCATION_LEN, MAX_NOTE_LEN, MAX_PHONE_LEN};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_CUSTOMER_NAME_LEN`] characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    require_bounded("name", name, MAX_CUSTOMER_NAME_LEN)
}

/// Validates an optional phone number. `None` is always fine.
pub fn validate_phone(phone: Option<&str>) -> ValidationResult<()> {
    match phone {
        None => Ok(()),
        Some(phone) if phone.len() > MAX_PHONE_LEN => Err(ValidationError::TooLong {
            field: "phone".to_string(),
            max: MAX_PHONE_LEN,
        }),
        Some(_) => Ok(()),
    }
}

/// Validates an origin or destination address line.
///
/// `field` names which one failed in the error message.
pub fn validate_address(field: &str, addr: &str) -> ValidationResult<()> {
    require_bounded(field, addr, MAX_ADDRESS_LEN)
}

/// Validates a scan location.
pub fn validate_location(location: &str) -> ValidationResult<()> {
    require_bounded("location", location, MAX_LOCATION_LEN)
}

/// Validates an optional scan note. `None` is always fine.
pub fn validate_note(note: Option<&str>) -> ValidationResult<()> {
    match note {
        None => Ok(()),
        Some(note) if note.len() > MAX_NOTE_LEN => Err(ValidationError::TooLong {
            field: "note".to_string(),
            max: MAX_NOTE_LEN,
        }),
        Some(_) => Ok(()),
    }
}

/// Validates a parcel weight.
///
/// ## Rules
/// - Must be finite (NaN and infinities are deserialization garbage)
/// - Must not be negative; zero is allowed (weight unknown at creation)
pub fn validate_weight_kg(weight_kg: f64) -> ValidationResult<()> {
    if !weight_kg.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "weight_kg".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if weight_kg < 0.0 {
        return Err(ValidationError::Negative {
            field: "weight_kg".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Draft Validators
// =============================================================================

/// Validates a whole customer draft before insert.
pub fn validate_customer_draft(draft: &CustomerDraft) -> ValidationResult<()> {
    validate_customer_name(&draft.name)?;
    validate_phone(draft.phone.as_deref())?;
    Ok(())
}

/// Validates the provided fields of a customer patch.
///
/// Absent fields are not validated - they will not be written.
pub fn validate_customer_patch(patch: &CustomerPatch) -> ValidationResult<()> {
    if let Some(name) = &patch.name {
        validate_customer_name(name)?;
    }
    validate_phone(patch.phone.as_deref())?;
    Ok(())
}

/// Validates a whole parcel draft before insert.
pub fn validate_parcel_draft(draft: &ParcelDraft) -> ValidationResult<()> {
    validate_address("addr_from", &draft.addr_from)?;
    validate_address("addr_to", &draft.addr_to)?;
    validate_weight_kg(draft.weight_kg)?;
    Ok(())
}

// =============================================================================
// Shared Helpers
// =============================================================================

/// Required-after-trim with a length cap. Length is measured in characters
/// so multi-byte names are not penalized.
fn require_bounded(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
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
    fn test_validate_customer_name() {
        assert!(validate_customer_name("ACME SRL").is_ok());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(81)).is_err());
        assert!(validate_customer_name(&"A".repeat(80)).is_ok());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone(None).is_ok());
        assert!(validate_phone(Some("+40 712 345 678")).is_ok());
        assert!(validate_phone(Some(&"9".repeat(40))).is_err());
    }

    #[test]
    fn test_validate_address_names_the_field() {
        let err = validate_address("addr_to", "").unwrap_err();
        assert_eq!(err.to_string(), "addr_to is required");
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight_kg(0.0).is_ok());
        assert!(validate_weight_kg(2.5).is_ok());
        assert!(validate_weight_kg(-0.1).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert!(validate_weight_kg(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_note() {
        assert!(validate_note(None).is_ok());
        assert!(validate_note(Some("left at reception")).is_ok());
        assert!(validate_note(Some(&"x".repeat(201))).is_err());
    }

    #[test]
    fn test_validate_parcel_draft() {
        let draft = ParcelDraft {
            customer_id: 1,
            weight_kg: 1.2,
            addr_from: "North depot, 1 A St".to_string(),
            addr_to: "12 Harbor St".to_string(),
        };
        assert!(validate_parcel_draft(&draft).is_ok());

        let bad = ParcelDraft {
            addr_to: String::new(),
            ..draft
        };
        assert!(validate_parcel_draft(&bad).is_err());
    }

    #[test]
    fn test_validate_customer_patch_skips_absent_fields() {
        let patch = CustomerPatch::default();
        assert!(validate_customer_patch(&patch).is_ok());

        let patch = CustomerPatch {
            name: Some(String::new()),
            phone: None,
        };
        assert!(validate_customer_patch(&patch).is_err());
    }
}
