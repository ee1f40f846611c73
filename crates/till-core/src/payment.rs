//! # Payment Strategies
//!
//! The payment capability contract and the strategies shipped with Till.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CheckoutService                                                       │
//! │       │                                                                 │
//! │       │ process(total) ──► true  → order Paid                          │
//! │       │                └─► false → order Failed, cart kept            │
//! │       ▼                                                                 │
//! │  ┌────────────┐  ┌──────────────────┐  ┌────────────────────┐          │
//! │  │ CashPayment│  │ DebitCardPayment │  │ CreditCardPayment  │  any     │
//! │  │ always ok  │  │ ok if ≤ limit    │  │ always authorized  │  Fn(Money)│
//! │  └────────────┘  └──────────────────┘  └────────────────────┘  -> bool │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The workflow calls `process` exactly once per attempt and trusts the
//! answer. Retrying is a strategy's own business.

#[cfg(test)]
use mockall::automock;
use tracing::{info, warn};

use crate::money::Money;

/// Collects payment for an amount.
#[cfg_attr(test, automock)]
pub trait PaymentProcessor {
    /// Attempts to collect `amount`. Returns `true` on success.
    fn process(&self, amount: Money) -> bool;
}

/// Plain functions and closures work as payment strategies.
impl<F> PaymentProcessor for F
where
    F: Fn(Money) -> bool,
{
    fn process(&self, amount: Money) -> bool {
        self(amount)
    }
}

/// Cash at the counter. Always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct CashPayment;

impl PaymentProcessor for CashPayment {
    fn process(&self, amount: Money) -> bool {
        info!(%amount, "Cash payment received");
        true
    }
}

/// Debit card with a simulated account balance.
///
/// Amounts above `limit` are declined as insufficient funds.
#[derive(Debug, Clone, Copy)]
pub struct DebitCardPayment {
    limit: Money,
}

impl DebitCardPayment {
    pub fn new(limit: Money) -> Self {
        DebitCardPayment { limit }
    }

    pub fn limit(&self) -> Money {
        self.limit
    }
}

impl PaymentProcessor for DebitCardPayment {
    fn process(&self, amount: Money) -> bool {
        if amount > self.limit {
            warn!(%amount, limit = %self.limit, "Debit card declined: insufficient balance");
            return false;
        }
        info!(%amount, "Debit card payment approved");
        true
    }
}

/// Credit card on an external terminal. Always authorized.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardPayment;

impl PaymentProcessor for CreditCardPayment {
    fn process(&self, amount: Money) -> bool {
        info!(%amount, "Credit card payment authorized");
        true
    }
}
