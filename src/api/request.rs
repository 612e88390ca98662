//! Request types for the Counter-Proposal Engine API.
//!
//! This module defines the JSON request structures for the `/proposal`
//! and `/proposal/custom` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::ProposalField;
use crate::models::{CounterProposal, MarketPosition, OfferInputs, RiskLevel, Strategy};

/// Request body for the `/proposal` endpoint.
///
/// Identifies the employee, carries the raw competing-offer entry, and
/// selects the strategy to compute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalRequest {
    /// The id of the employee being analyzed.
    pub employee_id: String,
    /// The raw competing-offer entry.
    #[serde(default)]
    pub offer: OfferInputs,
    /// The retention strategy to compute.
    pub strategy: Strategy,
    /// Job title of the promotion range to apply, if one is selected.
    #[serde(default)]
    pub promotion_job_title: Option<String>,
}

/// The editable slice of a custom proposal carried between edits.
///
/// The remaining proposal fields (CTC, positioning, risk, rationale) are
/// re-derived on every edit, so clients only round-trip the three linked
/// pay fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalState {
    /// Annual base pay.
    pub base_pay: Decimal,
    /// Annual variable pay.
    pub variable_pay: Decimal,
    /// Variable pay as a percentage of base pay.
    pub variable_percentage: Decimal,
}

impl ProposalState {
    /// Rebuilds an editable proposal from the carried fields.
    pub fn into_proposal(self) -> CounterProposal {
        CounterProposal {
            ctc: self.base_pay + self.variable_pay,
            base_pay: self.base_pay,
            variable_pay: self.variable_pay,
            variable_percentage: self.variable_percentage,
            rationale: String::new(),
            risk_level: RiskLevel::Medium,
            confidence: 70,
            compa_ratio: Decimal::ZERO,
            range_position: Decimal::ZERO,
            market_position: MarketPosition::Unknown,
        }
    }
}

/// Request body for the `/proposal/custom` endpoint.
///
/// Applies one field edit to a custom proposal. Without a carried
/// `proposal` state the edit starts from the employee's current
/// compensation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomProposalRequest {
    /// The id of the employee being analyzed.
    pub employee_id: String,
    /// The proposal state carried from the previous edit, if any.
    #[serde(default)]
    pub proposal: Option<ProposalState>,
    /// The field being edited.
    pub field: ProposalField,
    /// The new value for the field.
    pub value: Decimal,
    /// Free-text rationale override, if the analyst entered one.
    #[serde(default)]
    pub rationale: Option<String>,
}
