//! Counter-proposal model and related enums.
//!
//! This module defines the CounterProposal struct together with the
//! strategy selector, risk level, and market-position label types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The retention strategy selected for a counter proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Budget-friendly response, targets 75-85% of the offer increase.
    Conservative,
    /// Market-aligned response, targets 85-95% of the offer increase.
    Competitive,
    /// Match or exceed the offer, considering a promotion.
    Aggressive,
    /// Manual adjustments through the custom editor.
    Custom,
}

/// The retention risk carried by a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// The package is strong enough that the employee is likely to stay.
    Low,
    /// A balanced package with moderate retention risk.
    Medium,
    /// The package trails the competing offer; the employee may leave.
    High,
}

/// Where a base salary sits relative to its market band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketPosition {
    /// Compa-ratio below 80.
    #[serde(rename = "Below Market")]
    BelowMarket,
    /// Compa-ratio in [80, 90).
    #[serde(rename = "Below Mid-Market")]
    BelowMidMarket,
    /// Compa-ratio in [90, 110).
    #[serde(rename = "Market Competitive")]
    MarketCompetitive,
    /// Compa-ratio in [110, 120).
    #[serde(rename = "Above Market")]
    AboveMarket,
    /// Compa-ratio at or above 120.
    #[serde(rename = "Premium Market")]
    PremiumMarket,
    /// No usable range to position against.
    #[serde(rename = "Unknown")]
    Unknown,
}

impl MarketPosition {
    /// Returns the display label for the position.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketPosition::BelowMarket => "Below Market",
            MarketPosition::BelowMidMarket => "Below Mid-Market",
            MarketPosition::MarketCompetitive => "Market Competitive",
            MarketPosition::AboveMarket => "Above Market",
            MarketPosition::PremiumMarket => "Premium Market",
            MarketPosition::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for MarketPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A retention counter proposal with its derived metrics.
///
/// Proposals are recomputed whenever any input changes and are never
/// persisted. A proposal with `ctc == 0` is the placeholder for the
/// missing-preconditions state; see [`CounterProposal::placeholder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterProposal {
    /// Proposed annual base pay.
    pub base_pay: Decimal,
    /// Proposed annual variable pay.
    pub variable_pay: Decimal,
    /// Proposed variable pay as a percentage of base pay.
    pub variable_percentage: Decimal,
    /// Proposed total cost-to-company (base + variable).
    pub ctc: Decimal,
    /// Business justification for the proposal.
    pub rationale: String,
    /// Retention risk carried by the proposal.
    pub risk_level: RiskLevel,
    /// Confidence score in [0, 100].
    pub confidence: u8,
    /// Proposed base pay against the range midpoint, as a percentage.
    pub compa_ratio: Decimal,
    /// Normalized position within the range, clamped to [0, 100].
    pub range_position: Decimal,
    /// Market-position label for the proposed base pay.
    pub market_position: MarketPosition,
}

impl CounterProposal {
    /// Returns the zeroed placeholder shown while preconditions are unmet.
    ///
    /// Display layers render this record when no employee is selected or
    /// no competing offer has been entered. Callers must check
    /// `ctc > 0` (or hold a real proposal through `Option`) before
    /// treating a proposal as actionable.
    pub fn placeholder() -> Self {
        Self {
            base_pay: Decimal::ZERO,
            variable_pay: Decimal::ZERO,
            variable_percentage: Decimal::ZERO,
            ctc: Decimal::ZERO,
            rationale: String::new(),
            risk_level: RiskLevel::Medium,
            confidence: 0,
            compa_ratio: Decimal::ZERO,
            range_position: Decimal::ZERO,
            market_position: MarketPosition::Unknown,
        }
    }

    /// Returns the proposal's CTC increase over a current CTC, in percent.
    ///
    /// A non-positive current CTC reads as a 0% increase rather than an
    /// undefined ratio.
    pub fn increase_over(&self, current_ctc: Decimal) -> Decimal {
        if current_ctc <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.ctc - current_ctc) / current_ctc * Decimal::ONE_HUNDRED
    }
}
