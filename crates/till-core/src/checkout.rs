//! # Checkout Workflow
//!
//! Coordinates cart → payment → notification → receipt.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────┐  total > 0   ┌─────────────────┐   process() = true ┌──────┐│
//! │   │ Idle │─────────────►│ AwaitingPayment │───────────────────►│ Paid ││
//! │   └──────┘              └─────────────────┘                    └──────┘│
//! │      │ total == 0                │ process() = false              │    │
//! │      ▼                           ▼                                ▼    │
//! │   EmptyCart               ┌────────┐                   notify, receipt,│
//! │   (payment never          │ Failed │ no notify,        session resets  │
//! │    invoked)               └────────┘ cart kept         its cart        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service holds no cart. Each call works on the snapshot it is given, so
//! two sessions may share a service only behind external locking.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::cart::{Cart, LineItem};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::notification::Notifier;
use crate::payment::PaymentProcessor;
use crate::types::{Order, OrderStatus};

/// Where the most recent checkout attempt ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutState {
    #[default]
    Idle,
    AwaitingPayment,
    Paid,
    Failed,
}

/// One printed receipt line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: i64,
    pub subtotal: Money,
}

impl From<&LineItem> for ReceiptLine {
    fn from(item: &LineItem) -> Self {
        ReceiptLine {
            name: item.product.name.clone(),
            quantity: item.quantity,
            subtotal: item.subtotal(),
        }
    }
}

/// Receipt for a paid order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// `yymmdd-HHMMSS-<first 8 chars of the order id>`
    pub number: String,
    pub order: Order,
    pub items: Vec<ReceiptLine>,
    pub total: Money,
}

impl Receipt {
    fn new(order: Order, items: Vec<ReceiptLine>) -> Self {
        let short_id: String = order.id.chars().take(8).collect();
        let number = format!("{}-{}", order.created_at.format("%y%m%d-%H%M%S"), short_id);
        let total = items.iter().map(|l| l.subtotal).sum();
        Receipt {
            number,
            order,
            items,
            total,
        }
    }

    /// Lines as `<name> x<quantity> = <subtotal>` with plain amounts.
    pub fn lines(&self) -> Vec<String> {
        self.render_with(|m| m.to_string())
    }

    /// Lines rendered with a caller-supplied amount format.
    pub fn render_with<F>(&self, format_amount: F) -> Vec<String>
    where
        F: Fn(Money) -> String,
    {
        self.items
            .iter()
            .map(|l| format!("{} x{} = {}", l.name, l.quantity, format_amount(l.subtotal)))
            .collect()
    }
}

/// The checkout workflow.
///
/// ## Usage
/// ```rust
/// use till_core::{Cart, CashPayment, CheckoutService, CheckoutState, LogNotifier, Money, Product};
///
/// let mut service = CheckoutService::new(Box::new(CashPayment), Box::new(LogNotifier));
///
/// let mut cart = Cart::new();
/// cart.add_item(&Product::new("A", "Apple", Money::from_minor(10000)), 2).unwrap();
///
/// let receipt = service.checkout(&cart, "Andi").unwrap();
/// assert_eq!(receipt.total, Money::from_minor(20000));
/// assert_eq!(service.state(), CheckoutState::Paid);
/// ```
pub struct CheckoutService {
    payment: Box<dyn PaymentProcessor>,
    notifier: Box<dyn Notifier>,
    state: CheckoutState,
}

impl CheckoutService {
    pub fn new(payment: Box<dyn PaymentProcessor>, notifier: Box<dyn Notifier>) -> Self {
        CheckoutService {
            payment,
            notifier,
            state: CheckoutState::Idle,
        }
    }

    /// State reached by the most recent attempt.
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Checks out the given cart snapshot.
    ///
    /// ## Errors
    /// - `EmptyCart` when the total is zero; payment is not attempted
    /// - `PaymentDeclined` when the payment strategy returns `false`
    ///
    /// The cart itself is never touched here. Resetting it after a paid
    /// checkout is the owner's job (see [`PosSession`](crate::PosSession)).
    pub fn checkout(&mut self, cart: &Cart, customer_name: &str) -> CoreResult<Receipt> {
        self.state = CheckoutState::Idle;

        let total = cart.total_price();
        if total.is_zero() {
            debug!("Checkout aborted: cart is empty");
            return Err(CoreError::EmptyCart);
        }

        let items: Vec<ReceiptLine> = cart.items().iter().map(ReceiptLine::from).collect();
        let mut order = Order::open(customer_name, total);

        if self.run_checkout(&mut order) {
            Ok(Receipt::new(order, items))
        } else {
            Err(CoreError::PaymentDeclined {
                order_id: order.id,
                amount: order.total,
            })
        }
    }

    /// Pays for and confirms an order built elsewhere.
    ///
    /// Returns `true` when the order ends up paid. A zero or negative total is
    /// refused without calling the payment strategy. Notification failures
    /// are logged and do not change the result.
    pub fn run_checkout(&mut self, order: &mut Order) -> bool {
        if !order.total.is_positive() {
            warn!(order_id = %order.id, total = %order.total, "Checkout aborted: nothing to pay");
            self.state = CheckoutState::Idle;
            return false;
        }

        info!(
            order_id = %order.id,
            customer = %order.customer_name,
            total = %order.total,
            "Starting checkout"
        );
        self.state = CheckoutState::AwaitingPayment;

        if !self.payment.process(order.total) {
            order.status = OrderStatus::Failed;
            self.state = CheckoutState::Failed;
            error!(order_id = %order.id, total = %order.total, "Payment failed, transaction cancelled");
            return false;
        }

        order.status = OrderStatus::Paid;
        self.state = CheckoutState::Paid;

        if let Err(err) = self.notifier.send(order) {
            warn!(order_id = %order.id, error = %err, "Notification failed, order remains paid");
        }

        info!(order_id = %order.id, status = %order.status, "Checkout succeeded");
        true
    }
}

impl std::fmt::Debug for CheckoutService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutService")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::error::NotifyError;
    use crate::notification::MockNotifier;
    use crate::payment::MockPaymentProcessor;
    use crate::types::Product;

    fn scenario_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(&Product::new("A", "A", Money::from_minor(10000)), 2)
            .unwrap();
        cart.add_item(&Product::new("B", "B", Money::from_minor(5000)), 1)
            .unwrap();
        cart
    }

    fn paying(times: usize, result: bool) -> MockPaymentProcessor {
        let mut payment = MockPaymentProcessor::new();
        payment.expect_process().times(times).return_const(result);
        payment
    }

    #[test]
    fn test_successful_checkout_pays_and_notifies_once() {
        let mut payment = MockPaymentProcessor::new();
        payment
            .expect_process()
            .with(eq(Money::from_minor(25000)))
            .times(1)
            .return_const(true);

        let mut notifier = MockNotifier::new();
        notifier
            .expect_send()
            .withf(|order: &Order| order.status == OrderStatus::Paid && order.customer_name == "Andi")
            .times(1)
            .returning(|_| Ok(()));

        let mut service = CheckoutService::new(Box::new(payment), Box::new(notifier));
        let receipt = service.checkout(&scenario_cart(), "Andi").unwrap();

        assert_eq!(service.state(), CheckoutState::Paid);
        assert_eq!(receipt.order.status, OrderStatus::Paid);
        assert_eq!(receipt.lines(), vec!["A x2 = 20000", "B x1 = 5000"]);
        assert_eq!(receipt.total.to_string(), "25000");
    }

    #[test]
    fn test_empty_cart_never_invokes_payment() {
        let mut notifier = MockNotifier::new();
        notifier.expect_send().never();

        let mut service = CheckoutService::new(Box::new(paying(0, true)), Box::new(notifier));
        let result = service.checkout(&Cart::new(), "Andi");

        assert!(matches!(result, Err(CoreError::EmptyCart)));
        assert_eq!(service.state(), CheckoutState::Idle);
    }

    #[test]
    fn test_zero_total_cart_is_treated_as_empty() {
        let mut cart = Cart::new();
        cart.add_item(&Product::new("FREE", "Sample", Money::zero()), 3)
            .unwrap();

        let mut notifier = MockNotifier::new();
        notifier.expect_send().never();
        let mut service = CheckoutService::new(Box::new(paying(0, true)), Box::new(notifier));

        assert!(matches!(
            service.checkout(&cart, "Andi"),
            Err(CoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_declined_payment_never_notifies() {
        let mut notifier = MockNotifier::new();
        notifier.expect_send().never();

        let mut service = CheckoutService::new(Box::new(paying(1, false)), Box::new(notifier));
        let cart = scenario_cart();
        let result = service.checkout(&cart, "Andi");

        match result {
            Err(CoreError::PaymentDeclined { amount, .. }) => {
                assert_eq!(amount, Money::from_minor(25000))
            }
            other => panic!("expected PaymentDeclined, got {:?}", other),
        }
        assert_eq!(service.state(), CheckoutState::Failed);
        assert_eq!(cart.total_price(), Money::from_minor(25000));
    }

    #[test]
    fn test_notification_failure_does_not_reverse_payment() {
        let mut notifier = MockNotifier::new();
        notifier.expect_send().times(1).returning(|order| {
            Err(NotifyError::Delivery {
                channel: "email".to_string(),
                reason: format!("relay down for {}", order.id),
            })
        });

        let mut service = CheckoutService::new(Box::new(paying(1, true)), Box::new(notifier));
        let receipt = service.checkout(&scenario_cart(), "Andi").unwrap();

        assert!(receipt.order.is_paid());
        assert_eq!(service.state(), CheckoutState::Paid);
    }

    #[test]
    fn test_run_checkout_on_prebuilt_order() {
        let mut notifier = MockNotifier::new();
        notifier.expect_send().times(1).returning(|_| Ok(()));
        let mut service = CheckoutService::new(Box::new(paying(1, true)), Box::new(notifier));

        let mut order = Order::open("Andi", Money::from_minor(500000));
        assert!(service.run_checkout(&mut order));
        assert_eq!(order.status, OrderStatus::Paid);
    }

    #[test]
    fn test_run_checkout_marks_failed_order() {
        let mut notifier = MockNotifier::new();
        notifier.expect_send().never();
        let mut service = CheckoutService::new(Box::new(paying(1, false)), Box::new(notifier));

        let mut order = Order::open("Andi", Money::from_minor(500000));
        assert!(!service.run_checkout(&mut order));
        assert_eq!(order.status, OrderStatus::Failed);
    }

    #[test]
    fn test_run_checkout_refuses_non_positive_total() {
        let mut notifier = MockNotifier::new();
        notifier.expect_send().never();
        let mut service = CheckoutService::new(Box::new(paying(0, true)), Box::new(notifier));

        for amount in [0, -8_446_744_073_709_551_616] {
            let mut order = Order::open("Andi", Money::from_minor(amount));
            assert!(!service.run_checkout(&mut order));
            assert_eq!(order.status, OrderStatus::Open);
            assert_eq!(service.state(), CheckoutState::Idle);
        }
    }

    #[test]
    fn test_receipt_number_and_custom_rendering() {
        let mut notifier = MockNotifier::new();
        notifier.expect_send().returning(|_| Ok(()));
        let mut service = CheckoutService::new(Box::new(paying(1, true)), Box::new(notifier));
        let receipt = service.checkout(&scenario_cart(), "Andi").unwrap();

        assert!(receipt.number.ends_with(&receipt.order.id[..8]));
        assert_eq!(
            receipt.render_with(|m| format!("Rp{}", m)),
            vec!["A x2 = Rp20000", "B x1 = Rp5000"]
        );
    }
}
