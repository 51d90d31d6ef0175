// 💸 Wallet Transfer Fees - what it costs to move the balance out
//
// Formula per tier:
//   fee = max(ceil(balance * rate / 100), minimum_fee)
//
// All amounts are integer cents. The percentage part always rounds UP so we
// never undercharge by a fraction of a cent.

use anyhow::{bail, Context as AnyhowContext, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// TRANSFER METHOD TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMethodType {
    /// Arrives in minutes, charged the instant tier
    Instant,

    /// Standard bank transfer (everything that isn't instant)
    Ach,
}

impl TransferMethodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferMethodType::Instant => "instant",
            TransferMethodType::Ach => "ach",
        }
    }
}

impl From<&str> for TransferMethodType {
    /// Only "instant" selects the instant tier; anything else is standard
    fn from(value: &str) -> Self {
        if value == "instant" {
            TransferMethodType::Instant
        } else {
            TransferMethodType::Ach
        }
    }
}

// ============================================================================
// FEE TIERS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeTier {
    /// Percentage, 0-100 (1.5 means 1.5%)
    pub rate: Decimal,

    /// Floor for the fee, in cents
    pub minimum_fee: i64,
}

impl FeeTier {
    /// Unchecked; `FeeCalculator` only accepts tiers that pass validation
    /// (rate 0-100, minimum fee >= 0)
    pub fn new(rate: Decimal, minimum_fee: i64) -> Self {
        FeeTier { rate, minimum_fee }
    }

    /// Fee in cents for moving `balance` cents through this tier
    pub fn fee_for(&self, balance: i64) -> i64 {
        let percentage = (Decimal::from(balance) * self.rate / dec!(100)).ceil();

        // |percentage| <= |balance| while rate is within 0-100, so it fits in i64
        let raw = percentage
            .to_i64()
            .unwrap_or(if percentage.is_sign_negative() { i64::MIN } else { i64::MAX });
        raw.max(self.minimum_fee)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.rate < Decimal::ZERO || self.rate > dec!(100) {
            bail!("{} fee rate must be between 0 and 100, got {}", name, self.rate);
        }
        if self.minimum_fee < 0 {
            bail!("{} minimum fee must not be negative, got {}", name, self.minimum_fee);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub instant: FeeTier,
    pub ach: FeeTier,
}

impl FeeSchedule {
    pub fn tier(&self, method: TransferMethodType) -> &FeeTier {
        match method {
            TransferMethodType::Instant => &self.instant,
            TransferMethodType::Ach => &self.ach,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.instant.validate("instant")?;
        self.ach.validate("ach")
    }
}

impl Default for FeeSchedule {
    /// Instant: 1.5%, at least 25¢. Standard: free.
    fn default() -> Self {
        FeeSchedule {
            instant: FeeTier::new(dec!(1.5), 25),
            ach: FeeTier::new(Decimal::ZERO, 0),
        }
    }
}

// ============================================================================
// TRANSFER QUOTE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferQuote {
    pub method: TransferMethodType,
    pub balance: i64,
    pub fee: i64,
    /// What actually lands in the destination account
    pub transfer_amount: i64,
}

impl TransferQuote {
    /// Something is left to send after the fee
    pub fn is_transferable(&self) -> bool {
        self.transfer_amount > 0
    }
}

// ============================================================================
// FEE CALCULATOR
// ============================================================================

pub struct FeeCalculator {
    schedule: FeeSchedule,
}

impl FeeCalculator {
    pub fn new() -> Self {
        FeeCalculator {
            schedule: FeeSchedule::default(),
        }
    }

    /// Calculator for a custom schedule; rejects out-of-range tiers
    pub fn with_schedule(schedule: FeeSchedule) -> Result<Self> {
        schedule.validate()?;
        Ok(FeeCalculator { schedule })
    }

    /// Load fee schedule from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read fee schedule file: {:?}", path.as_ref()))?;

        let schedule: FeeSchedule = serde_json::from_str(&content)
            .context("Failed to parse fee schedule JSON")?;
        let calculator = FeeCalculator::with_schedule(schedule)?;

        tracing::info!(
            instant_rate = %schedule.instant.rate,
            instant_minimum = schedule.instant.minimum_fee,
            ach_rate = %schedule.ach.rate,
            ach_minimum = schedule.ach.minimum_fee,
            "Loaded fee schedule"
        );

        Ok(calculator)
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Fee in cents for withdrawing `current_balance` cents
    ///
    /// Zero and negative balances go through the same formula; callers
    /// should not ask about balances they can't withdraw.
    pub fn calculate_wallet_transfer_balance_fee(
        &self,
        current_balance: i64,
        method: TransferMethodType,
    ) -> i64 {
        self.schedule.tier(method).fee_for(current_balance)
    }

    pub fn quote(&self, current_balance: i64, method: TransferMethodType) -> TransferQuote {
        let fee = self.calculate_wallet_transfer_balance_fee(current_balance, method);
        TransferQuote {
            method,
            balance: current_balance,
            fee,
            transfer_amount: current_balance.saturating_sub(fee),
        }
    }
}

impl Default for FeeCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Fee under the default schedule
pub fn calculate_wallet_transfer_balance_fee(current_balance: i64, method: TransferMethodType) -> i64 {
    FeeSchedule::default().tier(method).fee_for(current_balance)
}

// ============================================================================
// TESTS
// ============================================================================
