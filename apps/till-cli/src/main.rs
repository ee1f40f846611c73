//! # Till POS Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            till (binary)                                │
//! │                                                                         │
//! │  main.rs ────► exit code only                                          │
//! │  lib.rs ─────► flags, logging, config, catalog, strategies             │
//! │  menu.rs ────► list / add / checkout / exit                            │
//! │                                                                         │
//! │  till-core ──► Cart, CheckoutService, PosSession                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // Setup lives in lib.rs for testability
    match till_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Till POS stopped");
            eprintln!("till: {err}");
            ExitCode::FAILURE
        }
    }
}
