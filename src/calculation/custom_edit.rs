//! Custom proposal editing.
//!
//! This module maintains the manually edited counter proposal: one
//! editable record seeded from the employee's current compensation, with
//! base pay, variable percentage, and variable pay kept cross-consistent
//! as the analyst changes any one of them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CompensationRange, CounterProposal, Employee, MarketPosition, RiskLevel};

use super::calculate_positioning;

/// The editable fields of a custom counter proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalField {
    /// Annual base pay.
    BasePay,
    /// Variable pay as a percentage of base pay.
    VariablePercentage,
    /// Annual variable pay.
    VariablePay,
}

/// Seeds a custom proposal from the employee's current compensation.
///
/// The seed carries the current package unchanged, medium risk, and a
/// starting confidence of 70. Positioning is left zeroed until the first
/// edit recomputes it.
pub fn seed_proposal(employee: &Employee, rationale_override: Option<&str>) -> CounterProposal {
    CounterProposal {
        base_pay: employee.current_salary,
        variable_pay: employee.variable_pay,
        variable_percentage: employee.variable_percentage,
        ctc: employee.ctc,
        rationale: rationale_override
            .map(str::to_string)
            .unwrap_or_else(|| "Custom proposal based on specific circumstances".to_string()),
        risk_level: RiskLevel::Medium,
        confidence: 70,
        compa_ratio: Decimal::ZERO,
        range_position: Decimal::ZERO,
        market_position: MarketPosition::Unknown,
    }
}

/// Applies one field edit to a custom proposal.
///
/// The three linked fields stay cross-consistent:
/// - a base pay edit recomputes variable pay from the current percentage;
/// - a percentage edit recomputes variable pay from the current base;
/// - a variable pay edit recomputes the percentage from the current base
///   (zero when base pay is zero).
///
/// After every edit the CTC is `base_pay + variable_pay`, positioning is
/// recomputed against the current range, and risk is re-derived from the
/// CTC increase over the employee's current package: under 10% is high
/// risk, under 20% medium, 20% or more low. The rationale is the supplied
/// override, or an auto-generated sentence naming the increase.
///
/// # Examples
///
/// ```
/// use retention_engine::calculation::{apply_edit, seed_proposal, ProposalField};
/// use retention_engine::models::{CompensationRange, Employee};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "1".to_string(),
///     name: "Priya Sharma".to_string(),
///     email: "priya.sharma@company.com".to_string(),
///     department: "Engineering".to_string(),
///     job_title: "Senior Software Engineer".to_string(),
///     job_family: "Technology".to_string(),
///     job_sub_family: "Software Development".to_string(),
///     level: "4".to_string(),
///     current_salary: Decimal::new(2_000_000, 0),
///     variable_pay: Decimal::new(200_000, 0),
///     variable_percentage: Decimal::new(10, 0),
///     ctc: Decimal::new(2_200_000, 0),
///     hire_date: NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
/// };
/// let range = CompensationRange {
///     job_title: "Senior Software Engineer".to_string(),
///     job_family: "Technology".to_string(),
///     job_sub_family: "Software Development".to_string(),
///     level: "4".to_string(),
///     min_salary: Decimal::new(2_000_000, 0),
///     mid_salary: Decimal::new(2_500_000, 0),
///     max_salary: Decimal::new(3_000_000, 0),
///     variable_percentage: Decimal::new(12, 0),
/// };
///
/// let seed = seed_proposal(&employee, None);
/// let edited = apply_edit(
///     &seed,
///     ProposalField::BasePay,
///     Decimal::new(2_500_000, 0),
///     &employee,
///     &range,
///     None,
/// );
/// assert_eq!(edited.variable_pay, Decimal::new(250_000, 0));
/// assert_eq!(edited.ctc, Decimal::new(2_750_000, 0));
/// ```
pub fn apply_edit(
    current: &CounterProposal,
    field: ProposalField,
    value: Decimal,
    employee: &Employee,
    range: &CompensationRange,
    rationale_override: Option<&str>,
) -> CounterProposal {
    let mut proposal = current.clone();

    match field {
        ProposalField::BasePay => {
            proposal.base_pay = value;
            proposal.variable_pay =
                value * proposal.variable_percentage / Decimal::ONE_HUNDRED;
        }
        ProposalField::VariablePercentage => {
            proposal.variable_percentage = value;
            proposal.variable_pay = proposal.base_pay * value / Decimal::ONE_HUNDRED;
        }
        ProposalField::VariablePay => {
            proposal.variable_pay = value;
            proposal.variable_percentage = if proposal.base_pay > Decimal::ZERO {
                value / proposal.base_pay * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
        }
    }

    proposal.ctc = proposal.base_pay + proposal.variable_pay;

    let positioning = calculate_positioning(proposal.base_pay, Some(range));
    proposal.compa_ratio = positioning.compa_ratio;
    proposal.range_position = positioning.range_position;
    proposal.market_position = positioning.market_position;

    let increase = proposal.increase_over(employee.ctc);
    proposal.risk_level = risk_for_increase(increase);

    proposal.rationale = match rationale_override {
        Some(rationale) if !rationale.is_empty() => rationale.to_string(),
        _ => format!(
            "Custom proposal with {:.1}% increase over current compensation",
            increase
        ),
    };

    proposal
}

/// Derives retention risk from a CTC increase percentage.
fn risk_for_increase(increase: Decimal) -> RiskLevel {
    if increase < Decimal::new(10, 0) {
        RiskLevel::High
    } else if increase < Decimal::new(20, 0) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
