use anyhow::{bail, Context, Result};
use std::env;

use wallet_methods::{FeeCalculator, MethodAggregator, TransferMethodType, WalletSnapshot};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("list") => run_list(&args[2..])?,
        Some("fee") => run_fee(&args[2..])?,
        _ => print_usage(),
    }

    Ok(())
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  wallet-methods list <snapshot.json>");
    eprintln!("  wallet-methods fee <balance-cents> <instant|ach> [schedule.json]");
}

/// Print the aggregated payment method list for a wallet snapshot
fn run_list(args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        bail!("list needs a snapshot path");
    };

    let snapshot = WalletSnapshot::from_file(path)?;
    let methods = snapshot.payment_methods(&MethodAggregator::new())?;

    tracing::info!(count = methods.len(), "Built payment method list");

    let output = serde_json::json!({
        "hasExpensifyPaymentMethod": snapshot.has_expensify_payment_method(),
        "paymentMethods": methods,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Print the fee quote for withdrawing a balance
fn run_fee(args: &[String]) -> Result<()> {
    let (Some(balance), Some(method)) = (args.first(), args.get(1)) else {
        bail!("fee needs a balance in cents and a transfer method");
    };

    let balance: i64 = balance
        .parse()
        .with_context(|| format!("Invalid balance: {}", balance))?;
    if balance < 0 {
        bail!("Balance must not be negative, got {}", balance);
    }

    let calculator = match args.get(2) {
        Some(schedule_path) => FeeCalculator::from_file(schedule_path)?,
        None => FeeCalculator::new(),
    };

    let quote = calculator.quote(balance, TransferMethodType::from(method.as_str()));
    println!("{}", serde_json::to_string_pretty(&quote)?);

    Ok(())
}
