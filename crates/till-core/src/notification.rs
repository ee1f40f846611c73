//! # Notification Strategies
//!
//! Order confirmations sent after a successful payment.
//!
//! A notifier may fail. The checkout workflow logs the failure and keeps the
//! order paid, so a broken mail relay never reverses a sale.

#[cfg(test)]
use mockall::automock;
use tracing::info;

use crate::error::NotifyError;
use crate::types::Order;

/// Sends a confirmation for a paid order.
#[cfg_attr(test, automock)]
pub trait Notifier {
    fn send(&self, order: &Order) -> Result<(), NotifyError>;
}

/// Closures taking the order are infallible notifiers.
impl<F> Notifier for F
where
    F: Fn(&Order),
{
    fn send(&self, order: &Order) -> Result<(), NotifyError> {
        self(order);
        Ok(())
    }
}

/// Writes the confirmation to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send(&self, order: &Order) -> Result<(), NotifyError> {
        info!(
            order_id = %order.id,
            customer = %order.customer_name,
            total = %order.total,
            status = %order.status,
            "Order confirmation"
        );
        Ok(())
    }
}

/// Simulated e-mail confirmation.
///
/// The recipient address is derived from the customer name, e.g.
/// `Andi Wijaya` → `andi.wijaya@<domain>`.
#[derive(Debug, Clone)]
pub struct EmailNotifier {
    domain: String,
}

impl EmailNotifier {
    pub fn new(domain: impl Into<String>) -> Self {
        EmailNotifier {
            domain: domain.into(),
        }
    }

    /// Address the confirmation would go to, if the order has a customer.
    pub fn recipient(&self, order: &Order) -> Option<String> {
        let local = order
            .customer_name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(".");
        if local.is_empty() {
            None
        } else {
            Some(format!("{}@{}", local, self.domain))
        }
    }
}

impl Notifier for EmailNotifier {
    fn send(&self, order: &Order) -> Result<(), NotifyError> {
        let to = self
            .recipient(order)
            .ok_or_else(|| NotifyError::MissingRecipient {
                order_id: order.id.clone(),
            })?;
        info!(order_id = %order.id, %to, total = %order.total, "Confirmation e-mail sent");
        Ok(())
    }
}

/// Sends nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn send(&self, _order: &Order) -> Result<(), NotifyError> {
        Ok(())
    }
}
