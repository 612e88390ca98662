//! Rationale sentence generation.
//!
//! This module produces the ordered list of candidate justification
//! sentences for a counter proposal. Conditions are evaluated
//! independently; each matching sentence is appended in a fixed order and
//! consumers pick a prefix (the strategy engine takes the first two).

use chrono::NaiveDate;

use crate::models::{CompensationRange, CompetingOffer, Employee, Strategy};
use rust_decimal::Decimal;

use super::calculate_positioning;

/// Generates candidate rationale sentences for a retention case.
///
/// The list always contains at least the retention-cost sentence and at
/// most seven entries. The function is pure and deterministic given its
/// inputs and the `as_of` date used for tenure.
///
/// # Arguments
///
/// * `employee` - The employee being retained
/// * `current_range` - The band for the employee's current role, if any
/// * `promotion_range` - The next-level band under consideration, if any
/// * `offer` - The competing external offer
/// * `strategy` - The selected retention strategy
/// * `as_of` - The date tenure is measured against
pub fn rationale_suggestions(
    employee: &Employee,
    current_range: Option<&CompensationRange>,
    promotion_range: Option<&CompensationRange>,
    offer: &CompetingOffer,
    strategy: Strategy,
    as_of: NaiveDate,
) -> Vec<String> {
    let mut suggestions = Vec::new();
    let tenure_years = employee.tenure_years(as_of);
    let current_positioning = calculate_positioning(employee.current_salary, current_range);
    let offer_increase = offer.increase_over(employee.ctc);

    if current_positioning.compa_ratio < Decimal::new(90, 0) {
        suggestions.push(
            "Employee is currently below market midpoint, adjustment needed to align with market standards"
                .to_string(),
        );
    }

    if tenure_years >= 3 {
        suggestions.push(format!(
            "Recognizing {} years of dedicated service and institutional knowledge",
            tenure_years
        ));
    }

    if offer_increase > Decimal::new(30, 0) {
        suggestions.push(
            "Significant market pressure requires competitive response to retain critical talent"
                .to_string(),
        );
    }

    if employee.department == "Engineering" {
        suggestions.push(
            "Critical technical skills in high demand, retention essential for product delivery"
                .to_string(),
        );
    }

    if promotion_range.is_some() && strategy == Strategy::Aggressive {
        suggestions.push(
            "Promotion to next level justified by expanded responsibilities and market benchmarking"
                .to_string(),
        );
    }

    suggestions.push(
        "Retention investment significantly lower than replacement costs and knowledge transfer risks"
            .to_string(),
    );

    if employee.is_senior() {
        suggestions.push(
            "Senior contributor with mentoring responsibilities, loss would impact team productivity"
                .to_string(),
        );
    }

    suggestions
}
