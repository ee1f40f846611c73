//! # Till CLI Library
//!
//! Composition root for the `till` register.
//! Everything here wires `till-core` to a terminal; no business rules live here.
//!
//! ## Module Organization
//! ```text
//! till_cli/
//! ├── lib.rs          ◄─── You are here (startup & wiring)
//! ├── args.rs         ◄─── Command-line flags (clap)
//! ├── config.rs       ◄─── TILL_* environment + defaults
//! ├── menu.rs         ◄─── Interactive menu loop
//! └── error.rs        ◄─── Startup/terminal error type
//! ```
//!
//! ## Strategy Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppConfig.payment_method          AppConfig.notifier                  │
//! │  ────────────────────────          ──────────────────                  │
//! │  cash   ──► CashPayment            log   ──► LogNotifier               │
//! │  debit  ──► DebitCardPayment       email ──► EmailNotifier             │
//! │  credit ──► CreditCardPayment      none  ──► NoopNotifier              │
//! │                                                                         │
//! │                 └──────────┬───────────┘                               │
//! │                            ▼                                            │
//! │                 CheckoutService::new(payment, notifier)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod menu;

use std::io;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use till_core::{
    CashPayment, Catalog, CheckoutService, CreditCardPayment, DebitCardPayment, EmailNotifier,
    LogNotifier, NoopNotifier, Notifier, NotifierKind, PaymentMethod, PaymentProcessor,
    PosSession,
};

use args::Args;
use config::AppConfig;
use error::{AppError, AppResult};
use menu::Menu;

/// Runs the register against stdin/stdout.
///
/// ## Startup Sequence
/// 1. Parse flags
/// 2. Initialize logging (stderr)
/// 3. Load configuration (`TILL_*`, then flags)
/// 4. Load the catalog (file or built-in demo menu)
/// 5. Build the checkout service from the configured strategies
/// 6. Enter the menu loop
pub fn run() -> AppResult<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    info!("Starting Till POS");

    let mut config = AppConfig::from_env()?;
    config.apply_args(&args);
    debug!(?config, "Configuration loaded");

    let catalog = load_catalog(&config)?;
    info!(products = catalog.len(), "Catalog loaded");

    let mut session = PosSession::new(catalog, build_checkout(&config));

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut session, &config, stdin.lock(), stdout.lock()).run()
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=till_core=trace` - Trace the domain crate only
/// - Default: INFO, or `till*` at DEBUG with `--verbose`
///
/// Logs go to stderr so they never interleave with receipts on stdout.
fn init_tracing(verbose: bool) {
    let default = if verbose { "info,till=debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

/// Reads the configured catalog file, or falls back to the demo menu.
pub fn load_catalog(config: &AppConfig) -> AppResult<Catalog> {
    let Some(path) = &config.catalog_path else {
        return Ok(Catalog::default());
    };

    let json = std::fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
        path: path.clone(),
        source,
    })?;
    Ok(Catalog::from_json(&json)?)
}

/// Builds the checkout service with the configured strategies.
pub fn build_checkout(config: &AppConfig) -> CheckoutService {
    let payment: Box<dyn PaymentProcessor> = match config.payment_method {
        PaymentMethod::Cash => Box::new(CashPayment),
        PaymentMethod::DebitCard => Box::new(DebitCardPayment::new(config.debit_card_limit)),
        PaymentMethod::CreditCard => Box::new(CreditCardPayment),
    };

    let notifier: Box<dyn Notifier> = match config.notifier {
        NotifierKind::Log => Box::new(LogNotifier),
        NotifierKind::Email => Box::new(EmailNotifier::new(config.email_domain.clone())),
        NotifierKind::None => Box::new(NoopNotifier),
    };

    CheckoutService::new(payment, notifier)
}
