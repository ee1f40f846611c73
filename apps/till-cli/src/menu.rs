//! # Menu Loop
//!
//! The interactive register: list products, add to cart, checkout, exit.
//!
//! ## Output Channels
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  output (stdout)                 tracing (stderr)                      │
//! │  ───────────────                 ────────────────                      │
//! │  menu, prompts                   INFO  added to cart, checkout ok      │
//! │  product listing                 WARN  unknown product, empty cart     │
//! │  total, receipt                  ERROR bad quantity, payment declined  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every domain error is reported and the loop continues. Only terminal I/O
//! failures end the loop early.

use std::io::{BufRead, Write};

use tracing::{debug, error, info, warn};

use till_core::validation::parse_quantity;
use till_core::{CoreError, PosSession, Receipt};

use crate::config::AppConfig;
use crate::error::AppResult;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListProducts,
    AddItem,
    Checkout,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::ListProducts),
            "2" => Some(MenuChoice::AddItem),
            "3" => Some(MenuChoice::Checkout),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Drives a [`PosSession`] from line-based input.
pub struct Menu<'a, R, W> {
    session: &'a mut PosSession,
    config: &'a AppConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(session: &'a mut PosSession, config: &'a AppConfig, input: R, output: W) -> Self {
        Menu {
            session,
            config,
            input,
            output,
        }
    }

    /// Runs until the user picks Exit or input ends.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Choose an option (1-4): ")? else {
                info!("Input closed, stopping");
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::ListProducts) => self.list_products()?,
                Some(MenuChoice::AddItem) => self.add_item()?,
                Some(MenuChoice::Checkout) => self.checkout()?,
                Some(MenuChoice::Exit) => {
                    info!("Application stopped");
                    return Ok(());
                }
                None => warn!(choice = %line.trim(), "Invalid option"),
            }
        }
    }

    fn print_menu(&mut self) -> AppResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Main Menu:")?;
        writeln!(self.output, "1. List Products")?;
        writeln!(self.output, "2. Add to Cart")?;
        writeln!(self.output, "3. Checkout")?;
        writeln!(self.output, "4. Exit")?;
        Ok(())
    }

    /// Writes a prompt and reads one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn list_products(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- PRODUCTS ---")?;
        for product in self.session.products() {
            writeln!(
                self.output,
                "[{}] {} - {}",
                product.id,
                product.name,
                self.config.format_currency(product.price)
            )?;
        }
        Ok(())
    }

    fn add_item(&mut self) -> AppResult<()> {
        let Some(id) = self.prompt("Product ID: ")? else {
            return Ok(());
        };
        let product = match self.session.catalog().get(&id) {
            Ok(product) => product.clone(),
            Err(err) => {
                report(&err);
                return Ok(());
            }
        };

        let Some(qty_input) = self.prompt("Quantity (default 1): ")? else {
            return Ok(());
        };

        let result =
            parse_quantity(&qty_input).and_then(|qty| self.session.add_product(&product, qty));
        match result {
            Ok(line) => {
                writeln!(
                    self.output,
                    "{} x{} in cart ({})",
                    line.product.name,
                    line.quantity,
                    self.config.format_currency(line.subtotal())
                )?;
            }
            Err(err) => report(&err),
        }
        Ok(())
    }

    fn checkout(&mut self) -> AppResult<()> {
        let total = self.session.cart().total_price();
        if !total.is_zero() {
            writeln!(self.output, "\nTotal: {}", self.config.format_currency(total))?;
        }

        match self.session.checkout(&self.config.customer_name) {
            Ok(receipt) => {
                info!(receipt = %receipt.number, "Transaction succeeded");
                if let Ok(json) = serde_json::to_string(&receipt.order) {
                    debug!(order = %json, "Paid order");
                }
                self.print_receipt(&receipt)?;
            }
            Err(err) => report(&err),
        }
        Ok(())
    }

    fn print_receipt(&mut self, receipt: &Receipt) -> AppResult<()> {
        let config = self.config;
        writeln!(self.output, "\n--- RECEIPT ---")?;
        writeln!(self.output, "{}", config.store_name)?;
        writeln!(self.output, "No. {}", receipt.number)?;
        for line in receipt.render_with(|m| config.format_currency(m)) {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output, "-----------------------")?;
        writeln!(self.output, "TOTAL: {}", config.format_currency(receipt.total))?;
        writeln!(self.output, "-----------------------")?;
        Ok(())
    }
}

/// Logs a domain error at the severity the user should see it with.
fn report(err: &CoreError) {
    match err {
        CoreError::ProductNotFound(id) => warn!(product_id = %id, "Product not found"),
        CoreError::EmptyCart => warn!("Cart is empty"),
        CoreError::InvalidQuantity { .. }
        | CoreError::QuantityTooLarge { .. }
        | CoreError::CartTooLarge { .. }
        | CoreError::AmountOverflow => error!(error = %err, "Cannot add to cart"),
        CoreError::PaymentDeclined { .. } => error!(error = %err, "Transaction failed"),
        other => error!(error = %other, "Operation failed"),
    }
}
