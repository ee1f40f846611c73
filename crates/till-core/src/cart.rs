//! # Cart
//!
//! The in-memory shopping cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Menu Action              Session call             Cart State Change    │
//! │  ───────────              ────────────             ─────────────────    │
//! │                                                                         │
//! │  Add item ───────────────► add_to_cart() ────────► push or merge line  │
//! │                                                                         │
//! │  Checkout (paid) ────────► checkout() ───────────► cart = Cart::new()  │
//! │                                                                         │
//! │  Checkout (declined) ────► checkout() ───────────► (unchanged)         │
//! │                                                                         │
//! │  NOTE: Validation happens before mutation. A rejected add leaves       │
//! │        item count and total exactly as they were.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{validate_cart_size, validate_price, validate_quantity};
use crate::MAX_ITEM_QUANTITY;

/// A line in the cart.
///
/// ## Design Notes
/// The product is copied in when the line is created, so the receipt shows
/// the name and price the customer saw even if the catalog is swapped later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub product: Product,
    pub quantity: i64,
}

impl LineItem {
    /// Unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by product id (adding the same product merges quantity)
/// - Quantity is always ≥ 1
/// - At most 100 lines, at most 999 units per line
/// - Unit prices are non-negative and the total always fits in `Money`
/// - Insertion order is display order
///
/// Lines only enter through [`add_item`](Cart::add_item), so the cart has no
/// serde derives.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Errors
    /// - `InvalidQuantity` if `quantity <= 0`
    /// - `QuantityTooLarge` if the line would exceed 999 units
    /// - `CartTooLarge` if a new line would exceed 100 lines
    /// - `Validation` if a new line has a negative price
    /// - `AmountOverflow` if the new total would not fit in `Money`
    ///
    /// Returns the line as it stands after the add. The cart is unchanged on
    /// every error.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<&LineItem> {
        validate_quantity(quantity)?;

        let position = self.items.iter().position(|i| i.product.id == product.id);
        let unit_price = match position {
            Some(idx) => {
                let new_qty = self.items[idx].quantity + quantity;
                if new_qty > MAX_ITEM_QUANTITY {
                    return Err(CoreError::QuantityTooLarge {
                        requested: new_qty,
                        max: MAX_ITEM_QUANTITY,
                    });
                }
                // merged lines keep the price they were added at
                self.items[idx].product.price
            }
            None => {
                validate_cart_size(self.items.len())?;
                validate_price(product.price)?;
                product.price
            }
        };

        unit_price
            .checked_multiply_quantity(quantity)
            .and_then(|added| self.total_price().checked_add(added))
            .ok_or(CoreError::AmountOverflow)?;

        let idx = match position {
            Some(idx) => {
                let item = &mut self.items[idx];
                item.quantity += quantity;
                debug!(product_id = %product.id, quantity = item.quantity, "Cart line merged");
                idx
            }
            None => {
                self.items.push(LineItem {
                    product: product.clone(),
                    quantity,
                });
                debug!(product_id = %product.id, quantity, "Cart line added");
                self.items.len() - 1
            }
        };
        Ok(&self.items[idx])
    }

    /// Removes a line by product id.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product.id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::ProductNotFound(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// An owned snapshot of the lines, in insertion order.
    pub fn items(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of all line subtotals; zero for an empty cart.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
