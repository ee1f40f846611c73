//! # Domain Types
//!
//! Core domain types used throughout Till POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Order      │   │  OrderStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (key)       │   │  id (UUID)      │   │  Open           │       │
//! │  │  name           │   │  customer_name  │   │  Paid           │       │
//! │  │  price          │   │  total          │   │  Failed         │       │
//! │  └─────────────────┘   │  status         │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │ PaymentMethod   │   │  NotifierKind   │   chosen at composition     │
//! │  │  Cash / Debit / │   │  Log / Email /  │   time by the front-end     │
//! │  │  Credit         │   │  None           │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Immutable once loaded into a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog key, matched case-insensitively.
    pub id: String,

    /// Display name shown in listings and on the receipt.
    pub name: String,

    /// Unit price in the smallest currency unit.
    pub price: Money,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order during one checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Created from the cart, payment not yet attempted.
    #[default]
    Open,
    /// Payment strategy reported success.
    Paid,
    /// Payment strategy rejected the amount.
    Failed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Open => "open",
            OrderStatus::Paid => "paid",
            OrderStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order produced for a single checkout attempt.
///
/// Orders are transient: nothing stores them once the attempt is over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub total: Money,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates an open order with a fresh UUID.
    pub fn open(customer_name: impl Into<String>, total: Money) -> Self {
        Order {
            id: Uuid::new_v4().to_string(),
            customer_name: customer_name.into(),
            total,
            status: OrderStatus::Open,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// Which payment strategy the front-end should wire in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    #[default]
    Cash,
    /// Debit card, declined above the configured balance limit.
    DebitCard,
    /// Credit card on an external terminal.
    CreditCard,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::DebitCard => "debit",
            PaymentMethod::CreditCard => "credit",
        };
        f.write_str(s)
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "debit" | "debit-card" | "debit_card" => Ok(PaymentMethod::DebitCard),
            "credit" | "credit-card" | "credit_card" | "card" => Ok(PaymentMethod::CreditCard),
            _ => Err(ValidationError::NotAllowed {
                field: "payment method".to_string(),
                allowed: vec!["cash".into(), "debit".into(), "credit".into()],
            }),
        }
    }
}

// =============================================================================
// Notifier Kind
// =============================================================================

/// Which notification strategy the front-end should wire in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifierKind {
    /// Confirmation written to the log.
    #[default]
    Log,
    /// Simulated e-mail confirmation.
    Email,
    /// No confirmation at all.
    None,
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NotifierKind::Log => "log",
            NotifierKind::Email => "email",
            NotifierKind::None => "none",
        };
        f.write_str(s)
    }
}

impl FromStr for NotifierKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" | "console" => Ok(NotifierKind::Log),
            "email" | "mail" => Ok(NotifierKind::Email),
            "none" | "off" => Ok(NotifierKind::None),
            _ => Err(ValidationError::NotAllowed {
                field: "notifier".to_string(),
                allowed: vec!["log".into(), "email".into(), "none".into()],
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_open_defaults() {
        let order = Order::open("Andi", Money::from_minor(500000));
        assert_eq!(order.status, OrderStatus::Open);
        assert_eq!(order.customer_name, "Andi");
        assert!(!order.is_paid());
        assert!(Uuid::parse_str(&order.id).is_ok());
    }

    #[test]
    fn test_order_ids_are_unique() {
        let a = Order::open("Andi", Money::from_minor(1));
        let b = Order::open("Andi", Money::from_minor(1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_order_status_display_and_serde() {
        assert_eq!(OrderStatus::Paid.to_string(), "paid");
        assert_eq!(OrderStatus::default(), OrderStatus::Open);
        let json = serde_json::to_string(&OrderStatus::Failed).unwrap();
        assert_eq!(json, "\"failed\"");
    }

    #[test]
    fn test_payment_method_from_str() {
        assert_eq!("cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!(" Debit ".parse::<PaymentMethod>().unwrap(), PaymentMethod::DebitCard);
        assert_eq!("card".parse::<PaymentMethod>().unwrap(), PaymentMethod::CreditCard);
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_notifier_kind_from_str() {
        assert_eq!("EMAIL".parse::<NotifierKind>().unwrap(), NotifierKind::Email);
        assert_eq!("none".parse::<NotifierKind>().unwrap(), NotifierKind::None);
        assert!("pigeon".parse::<NotifierKind>().is_err());
    }

    #[test]
    fn test_product_deserializes_from_catalog_json() {
        let product: Product =
            serde_json::from_str(r#"{"id":"K01","name":"Kopi Tubruk","price":8000}"#).unwrap();
        assert_eq!(product, Product::new("K01", "Kopi Tubruk", Money::from_minor(8000)));
    }
}
