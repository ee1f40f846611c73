//! End-to-end checkout through a `PosSession` with counting strategies.

use std::cell::RefCell;
use std::rc::Rc;

use till_core::{
    Catalog, CheckoutService, CheckoutState, CoreError, Money, Order, OrderStatus, PosSession,
    Product,
};

/// Records every call the workflow makes to the injected strategies.
#[derive(Default)]
struct Calls {
    payments: Vec<Money>,
    notifications: Vec<Order>,
}

fn session(approve: bool) -> (PosSession, Rc<RefCell<Calls>>) {
    let calls = Rc::new(RefCell::new(Calls::default()));

    let pay_calls = Rc::clone(&calls);
    let payment = move |amount: Money| {
        pay_calls.borrow_mut().payments.push(amount);
        approve
    };

    let notify_calls = Rc::clone(&calls);
    let notifier = move |order: &Order| {
        notify_calls.borrow_mut().notifications.push(order.clone());
    };

    let catalog = Catalog::from_products(vec![
        Product::new("A", "A", Money::from_minor(10000)),
        Product::new("B", "B", Money::from_minor(5000)),
    ])
    .expect("valid catalog");

    let service = CheckoutService::new(Box::new(payment), Box::new(notifier));
    (PosSession::new(catalog, service), calls)
}

#[test]
fn paid_checkout_produces_receipt_and_fresh_cart() {
    let (mut session, calls) = session(true);

    session.add_to_cart("A", 2).unwrap();
    session.add_to_cart("B", 1).unwrap();
    assert_eq!(session.cart().total_price(), Money::from_minor(25000));

    let receipt = session.checkout("Andi").unwrap();

    assert_eq!(receipt.order.status, OrderStatus::Paid);
    assert_eq!(receipt.lines(), vec!["A x2 = 20000", "B x1 = 5000"]);
    assert_eq!(receipt.total.to_string(), "25000");

    assert_eq!(session.cart().total_price(), Money::zero());
    assert_eq!(session.cart().item_count(), 0);
    assert_eq!(session.checkout_state(), CheckoutState::Paid);

    let calls = calls.borrow();
    assert_eq!(calls.payments, vec![Money::from_minor(25000)]);
    assert_eq!(calls.notifications.len(), 1);
    assert_eq!(calls.notifications[0].status, OrderStatus::Paid);
    assert_eq!(calls.notifications[0].id, receipt.order.id);
}

#[test]
fn declined_checkout_keeps_cart_and_skips_notification() {
    let (mut session, calls) = session(false);

    session.add_to_cart("A", 2).unwrap();
    session.add_to_cart("B", 1).unwrap();

    let err = session.checkout("Andi").unwrap_err();
    assert!(matches!(err, CoreError::PaymentDeclined { .. }));

    assert_eq!(session.cart().total_price(), Money::from_minor(25000));
    assert_eq!(session.cart().item_count(), 2);
    assert_eq!(session.checkout_state(), CheckoutState::Failed);

    let calls = calls.borrow();
    assert_eq!(calls.payments.len(), 1);
    assert!(calls.notifications.is_empty());
}

#[test]
fn retry_after_decline_goes_through_the_same_cart() {
    let calls = Rc::new(RefCell::new(0u32));
    let attempts = Rc::clone(&calls);
    // Declines the first attempt, approves the second.
    let flaky = move |_: Money| {
        *attempts.borrow_mut() += 1;
        *attempts.borrow() > 1
    };

    let service = CheckoutService::new(Box::new(flaky), Box::new(|_: &Order| {}));
    let mut session = PosSession::new(Catalog::default(), service);
    session.add_to_cart("N01", 1).unwrap();

    assert!(session.checkout("Budi").is_err());
    let receipt = session.checkout("Budi").unwrap();
    assert_eq!(receipt.lines(), vec!["Nasi Goreng x1 = 25000"]);
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn empty_cart_never_reaches_payment() {
    let (mut session, calls) = session(true);

    assert!(matches!(session.checkout("Andi"), Err(CoreError::EmptyCart)));
    assert!(session.add_to_cart("A", 0).is_err());
    assert!(matches!(session.checkout("Andi"), Err(CoreError::EmptyCart)));

    assert!(calls.borrow().payments.is_empty());
    assert!(calls.borrow().notifications.is_empty());
    assert_eq!(session.checkout_state(), CheckoutState::Idle);
}
