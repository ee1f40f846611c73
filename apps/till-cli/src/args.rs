use std::path::PathBuf;

use clap::Parser;
use till_core::{NotifierKind, PaymentMethod};

/// Interactive point-of-sale checkout.
///
/// Flags override the matching `TILL_*` environment variables.
#[derive(Debug, Parser)]
#[command(name = "till")]
#[command(about = "Interactive point-of-sale checkout")]
#[command(version)]
pub struct Args {
    /// Payment method: cash, debit or credit
    #[arg(short, long)]
    pub payment: Option<PaymentMethod>,

    /// Order confirmation channel: log, email or none
    #[arg(short, long)]
    pub notifier: Option<NotifierKind>,

    /// JSON catalog file (array of {id, name, price})
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Customer name printed on orders
    #[arg(long)]
    pub customer: Option<String>,

    /// Debit card balance, in the smallest currency unit
    #[arg(long)]
    pub card_limit: Option<i64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
