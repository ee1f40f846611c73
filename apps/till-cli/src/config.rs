//! # Configuration
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--payment`, `--catalog`, ...)
//! 2. Environment variables (`TILL_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only once the menu loop starts.

use std::path::PathBuf;

use till_core::{Money, NotifierKind, PaymentMethod};

use crate::args::Args;
use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Store name (printed on receipts)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Digit grouping separator, `None` for no grouping
    pub thousands_separator: Option<char>,

    /// Payment strategy to inject
    pub payment_method: PaymentMethod,

    /// Simulated debit card balance
    pub debit_card_limit: Money,

    /// Notification strategy to inject
    pub notifier: NotifierKind,

    /// Domain used by the e-mail notifier
    pub email_domain: String,

    /// Catalog file; the demo catalog is used when unset
    pub catalog_path: Option<PathBuf>,

    /// Customer name used for orders
    pub customer_name: String,
}

impl Default for AppConfig {
    /// Development defaults: Rupiah without decimals, cash, log notifier.
    fn default() -> Self {
        AppConfig {
            store_name: "Till POS Demo Store".to_string(),
            currency_symbol: "Rp".to_string(),
            currency_decimals: 0,
            thousands_separator: Some(','),
            payment_method: PaymentMethod::Cash,
            debit_card_limit: Money::from_minor(1_000_000),
            notifier: NotifierKind::Log,
            email_domain: "till.example".to_string(),
            catalog_path: None,
            customer_name: "Guest".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `TILL_*` environment variables.
    ///
    /// ## Environment Variables
    /// - `TILL_STORE_NAME`, `TILL_CURRENCY_SYMBOL`, `TILL_CUSTOMER`
    /// - `TILL_PAYMENT_METHOD` (`cash` | `debit` | `credit`)
    /// - `TILL_NOTIFIER` (`log` | `email` | `none`)
    /// - `TILL_CARD_LIMIT` (integer amount)
    /// - `TILL_CATALOG_PATH`
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(name) = lookup("TILL_STORE_NAME") {
            config.store_name = name;
        }

        if let Some(symbol) = lookup("TILL_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(customer) = lookup("TILL_CUSTOMER") {
            config.customer_name = customer;
        }

        if let Some(method) = lookup("TILL_PAYMENT_METHOD") {
            config.payment_method = method
                .parse()
                .map_err(|e: till_core::ValidationError| {
                    AppError::config("TILL_PAYMENT_METHOD", e.to_string())
                })?;
        }

        if let Some(kind) = lookup("TILL_NOTIFIER") {
            config.notifier = kind.parse().map_err(|e: till_core::ValidationError| {
                AppError::config("TILL_NOTIFIER", e.to_string())
            })?;
        }

        if let Some(limit) = lookup("TILL_CARD_LIMIT") {
            let amount: i64 = limit
                .trim()
                .parse()
                .map_err(|_| AppError::config("TILL_CARD_LIMIT", format!("{:?} is not an integer", limit)))?;
            config.debit_card_limit = Money::from_minor(amount);
        }

        if let Some(path) = lookup("TILL_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Applies command-line overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(method) = args.payment {
            self.payment_method = method;
        }
        if let Some(kind) = args.notifier {
            self.notifier = kind;
        }
        if let Some(path) = &args.catalog {
            self.catalog_path = Some(path.clone());
        }
        if let Some(customer) = &args.customer {
            self.customer_name = customer.clone();
        }
        if let Some(limit) = args.card_limit {
            self.debit_card_limit = Money::from_minor(limit);
        }
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use till_cli::config::AppConfig;
    /// use till_core::Money;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_minor(25000)), "Rp25,000");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.amount();
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = (cents / divisor).unsigned_abs();
        let frac = (cents % divisor).unsigned_abs();

        let whole = group_digits(whole, self.thousands_separator);
        let sign = if cents < 0 { "-" } else { "" };

        if self.currency_decimals > 0 {
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.currency_symbol,
                whole,
                frac,
                width = self.currency_decimals as usize
            )
        } else {
            format!("{}{}{}", sign, self.currency_symbol, whole)
        }
    }
}

fn group_digits(value: u64, separator: Option<char>) -> String {
    let digits = value.to_string();
    let Some(sep) = separator else {
        return digits;
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_format_currency_grouped() {
        let config = AppConfig::default();
        assert_eq!(config.format_currency(Money::from_minor(0)), "Rp0");
        assert_eq!(config.format_currency(Money::from_minor(5000)), "Rp5,000");
        assert_eq!(config.format_currency(Money::from_minor(999)), "Rp999");
        assert_eq!(
            config.format_currency(Money::from_minor(1234567)),
            "Rp1,234,567"
        );
        assert_eq!(config.format_currency(Money::from_minor(-25000)), "-Rp25,000");
    }

    #[test]
    fn test_format_currency_with_decimals() {
        let config = AppConfig {
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            thousands_separator: None,
            ..AppConfig::default()
        };
        assert_eq!(config.format_currency(Money::from_minor(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_minor(1)), "$0.01");
        assert_eq!(config.format_currency(Money::from_minor(-1234)), "-$12.34");
        assert_eq!(config.format_currency(Money::from_minor(123456789)), "$1234567.89");
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.payment_method, PaymentMethod::Cash);
        assert_eq!(config.notifier, NotifierKind::Log);
        assert_eq!(config.customer_name, "Guest");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("TILL_PAYMENT_METHOD", "debit"),
            ("TILL_NOTIFIER", "email"),
            ("TILL_CARD_LIMIT", "75000"),
            ("TILL_CATALOG_PATH", "/tmp/menu.json"),
            ("TILL_CUSTOMER", "Andi"),
        ]))
        .unwrap();
        assert_eq!(config.payment_method, PaymentMethod::DebitCard);
        assert_eq!(config.notifier, NotifierKind::Email);
        assert_eq!(config.debit_card_limit, Money::from_minor(75000));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/menu.json")));
        assert_eq!(config.customer_name, "Andi");
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("TILL_CARD_LIMIT", "lots")])),
            Err(AppError::Config { .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup_from(&[("TILL_PAYMENT_METHOD", "barter")])),
            Err(AppError::Config { .. })
        ));
    }

    #[test]
    fn test_args_override_environment() {
        let mut config = AppConfig::from_lookup(lookup_from(&[("TILL_PAYMENT_METHOD", "debit")]))
            .unwrap();
        let args = Args {
            payment: Some(PaymentMethod::CreditCard),
            notifier: Some(NotifierKind::None),
            catalog: None,
            customer: Some("Budi".to_string()),
            card_limit: Some(10),
            verbose: false,
        };
        config.apply_args(&args);
        assert_eq!(config.payment_method, PaymentMethod::CreditCard);
        assert_eq!(config.notifier, NotifierKind::None);
        assert_eq!(config.customer_name, "Budi");
        assert_eq!(config.debit_card_limit, Money::from_minor(10));
    }
}
