//! # POS Session
//!
//! One register session: a catalog, the current cart and a checkout service
//! with its strategies already injected.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart  ┌──────────┐  checkout ok  ┌──────────────┐ │
//! │  │  Empty   │──────────────►│ In Cart  │──────────────►│ Fresh empty  │ │
//! │  │  Cart    │               │          │               │ Cart::new()  │ │
//! │  └──────────┘               └──────────┘               └──────────────┘ │
//! │                                  ▲   │ declined                         │
//! │                                  └───┘ (contents kept for a retry)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use crate::cart::{Cart, LineItem};
use crate::catalog::Catalog;
use crate::checkout::{CheckoutService, CheckoutState, Receipt};
use crate::error::CoreResult;
use crate::types::Product;

#[derive(Debug)]
pub struct PosSession {
    catalog: Catalog,
    cart: Cart,
    checkout: CheckoutService,
}

impl PosSession {
    /// Starts a session with an empty cart.
    pub fn new(catalog: Catalog, checkout: CheckoutService) -> Self {
        info!(products = catalog.len(), "POS session initialized");
        PosSession {
            catalog,
            cart: Cart::new(),
            checkout,
        }
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        self.catalog.all()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// State of the most recent checkout attempt.
    pub fn checkout_state(&self) -> CheckoutState {
        self.checkout.state()
    }

    /// Looks the product up and adds it to the cart.
    ///
    /// Returns the cart line as it stands after the add.
    pub fn add_to_cart(&mut self, product_id: &str, quantity: i64) -> CoreResult<LineItem> {
        let product = self.catalog.get(product_id)?;
        Self::add_line(&mut self.cart, product, quantity)
    }

    /// Adds a product already resolved from [`catalog`](Self::catalog).
    ///
    /// Lets a caller look the id up once, prompt for a quantity, then add.
    pub fn add_product(&mut self, product: &Product, quantity: i64) -> CoreResult<LineItem> {
        Self::add_line(&mut self.cart, product, quantity)
    }

    fn add_line(cart: &mut Cart, product: &Product, quantity: i64) -> CoreResult<LineItem> {
        let line = cart.add_item(product, quantity)?.clone();
        info!(product = %line.product.name, quantity = line.quantity, "Added to cart");
        Ok(line)
    }

    /// Checks out the current cart.
    ///
    /// On success the cart is replaced with a brand-new instance. On any
    /// error the cart is left exactly as it was.
    pub fn checkout(&mut self, customer_name: &str) -> CoreResult<Receipt> {
        let receipt = self.checkout.checkout(&self.cart, customer_name)?;
        self.cart = Cart::new();
        Ok(receipt)
    }
}
