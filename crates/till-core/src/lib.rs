//! # till-core: Domain Logic for Till POS
//!
//! This crate is the **heart** of Till POS. It owns the shopping cart, the
//! checkout workflow and the two strategy contracts the workflow is built on.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Till POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    till-cli (terminal menu)                     │   │
//! │  │    list products ──► add item ──► checkout ──► receipt          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PosSession                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │ checkout  │  │ payment / │  │   │
//! │  │   │  Product  │  │ LineItem  │  │  Service  │  │ notifier  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO STDIN • NO FILES • STRATEGIES ARE INJECTED                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, OrderStatus, PaymentMethod)
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Input and catalog validation
//! - [`catalog`] - Read-only product store
//! - [`cart`] - Cart and line items
//! - [`payment`] - Payment strategy contract and stock strategies
//! - [`notification`] - Notification strategy contract and stock notifiers
//! - [`checkout`] - Checkout state machine and receipts
//! - [`session`] - One register session (catalog + cart + checkout)
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{
//!     Catalog, CashPayment, CheckoutService, Money, NoopNotifier, PosSession, Product,
//! };
//!
//! let catalog = Catalog::from_products(vec![
//!     Product::new("A", "Apple", Money::from_minor(10000)),
//!     Product::new("B", "Banana", Money::from_minor(5000)),
//! ])
//! .unwrap();
//!
//! let checkout = CheckoutService::new(Box::new(CashPayment), Box::new(NoopNotifier));
//! let mut session = PosSession::new(catalog, checkout);
//!
//! session.add_to_cart("a", 2).unwrap();
//! session.add_to_cart("b", 1).unwrap();
//! assert_eq!(session.cart().total_price(), Money::from_minor(25000));
//!
//! let receipt = session.checkout("Andi").unwrap();
//! assert_eq!(receipt.lines(), vec!["Apple x2 = 20000", "Banana x1 = 5000"]);
//! assert!(session.cart().is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod notification;
pub mod payment;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use till_core::Money` instead of
// `use till_core::money::Money`

pub use cart::{Cart, LineItem};
pub use catalog::Catalog;
pub use checkout::{CheckoutService, CheckoutState, Receipt, ReceiptLine};
pub use error::{CoreError, CoreResult, NotifyError, ValidationError};
pub use money::Money;
pub use notification::{EmailNotifier, LogNotifier, NoopNotifier, Notifier};
pub use payment::{CashPayment, CreditCardPayment, DebitCardPayment, PaymentProcessor};
pub use session::PosSession;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line in the cart.
///
/// Guards against typing 1000 instead of 10 at the quantity prompt.
pub const MAX_ITEM_QUANTITY: i64 = 999;
