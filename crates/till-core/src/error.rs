//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Cart, catalog and checkout failures             │
//! │  ├── ValidationError  - Field-level catalog validation                  │
//! │  └── NotifyError      - Notification strategy failures (never fatal)    │
//! │                                                                         │
//! │  till-cli errors (in app)                                              │
//! │  └── AppError         - Startup failures (config, catalog file)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → menu loop logs it and continues   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, amount, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every variant is recoverable at the menu loop

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// None of these are fatal: the session reports them through the log and the
/// menu loop carries on.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this identifier exists in the catalog (or cart).
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Quantity is not a positive integer.
    ///
    /// ## When This Occurs
    /// ```text
    /// Quantity prompt: "abc"  ──► InvalidQuantity { input: "abc" }
    /// Quantity prompt: "0"    ──► InvalidQuantity { input: "0" }
    /// Quantity prompt: ""     ──► 1 (default, not an error)
    /// ```
    #[error("Invalid quantity: {input:?} is not a positive integer")]
    InvalidQuantity { input: String },

    /// Line quantity would exceed the per-line maximum.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Cart has reached the maximum number of distinct lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Adding the line would push the cart total past what `Money` can hold.
    #[error("Cart total would exceed the largest representable amount")]
    AmountOverflow,

    /// Checkout attempted while the cart total is zero.
    #[error("Cart is empty")]
    EmptyCart,

    /// The payment strategy rejected the amount.
    ///
    /// The cart is left untouched so the customer can retry.
    #[error("Payment of {amount} declined for order {order_id}")]
    PaymentDeclined { order_id: String, amount: Money },

    /// Catalog JSON could not be parsed.
    #[error("Invalid catalog format: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
///
/// Raised while loading a catalog, before any product reaches a cart.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., product id with spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., duplicate product id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Notify Error
// =============================================================================

/// Failures raised by a notification strategy.
///
/// The checkout workflow logs these and keeps the order paid.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The order has no usable recipient.
    #[error("No recipient for order {order_id}")]
    MissingRecipient { order_id: String },

    /// The channel refused or failed to deliver the message.
    #[error("{channel} delivery failed: {reason}")]
    Delivery { channel: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PaymentDeclined {
            order_id: "ord-1".to_string(),
            amount: Money::from_minor(25000),
        };
        assert_eq!(err.to_string(), "Payment of 25000 declined for order ord-1");

        let err = CoreError::InvalidQuantity {
            input: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid quantity: \"abc\" is not a positive integer"
        );

        assert_eq!(CoreError::EmptyCart.to_string(), "Cart is empty");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id is required");

        let err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "A".to_string(),
        };
        assert_eq!(err.to_string(), "id 'A' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_notify_error_messages() {
        let err = NotifyError::Delivery {
            channel: "email".to_string(),
            reason: "mailbox full".to_string(),
        };
        assert_eq!(err.to_string(), "email delivery failed: mailbox full");
    }
}
