//! Per-strategy counter-proposal computation.
//!
//! This module implements the strategy engine: given an employee, their
//! current band, an optional promotion band, and a competing offer, it
//! computes the proposed package for the selected retention strategy
//! together with risk, confidence, positioning, and a composed rationale.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    CompensationRange, CompetingOffer, CounterProposal, Employee, RiskLevel, Strategy,
};

use super::{calculate_positioning, rationale_suggestions};

/// Rounds a monetary amount to whole currency units, half away from zero.
fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes the recommended counter proposal for a strategy.
///
/// The three computed strategies target the competing offer differently:
/// - `Conservative`: 80% of the offer increase capped at 15%, staying
///   under 95% of the current band maximum;
/// - `Competitive`: 90% of the offer increase capped at 25%, allowed up
///   to 110% of the band maximum;
/// - `Aggressive`: matches the offer base (with a promotion band when one
///   is selected) to secure the employee.
///
/// `Custom` produces the baseline insight: the employee's current package
/// positioned against the band, for display next to the manual editor.
///
/// Confidence starts from the strategy's base score and is adjusted by
/// context (proposed compa-ratio in [90, 110] +10, tenure over three
/// years +5, Engineering department +5, offer increase over 40% -10),
/// then clamped to [0, 100]. Monetary outputs are rounded to whole
/// currency units and the proposal CTC is the sum of the rounded
/// components.
///
/// Returns `None` while preconditions are unmet: no positive offer CTC,
/// or no positive current CTC to measure the increase against. Callers
/// render [`CounterProposal::placeholder`] in that state.
///
/// # Examples
///
/// ```
/// use retention_engine::calculation::recommend;
/// use retention_engine::models::{
///     CompensationRange, CompetingOffer, Employee, OfferInputs, Strategy,
/// };
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
/// // Offer CTC is 40% over current; the competitive cap holds the
/// // increase to 25%.
/// let offer = CompetingOffer::from_inputs(&OfferInputs {
///     base_pay: Decimal::new(2_800_000, 0),
///     ctc: Decimal::new(3_080_000, 0),
///     variable_percentage: Decimal::ZERO,
/// });
/// let as_of = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
///
/// let proposal = recommend(&employee, &range, None, &offer, Strategy::Competitive, as_of)
///     .unwrap();
/// assert_eq!(proposal.base_pay, Decimal::new(2_500_000, 0));
/// assert_eq!(proposal.ctc, Decimal::new(2_800_000, 0));
/// assert_eq!(proposal.confidence, 100);
/// ```
pub fn recommend(
    employee: &Employee,
    current_range: &CompensationRange,
    promotion_range: Option<&CompensationRange>,
    offer: &CompetingOffer,
    strategy: Strategy,
    as_of: NaiveDate,
) -> Option<CounterProposal> {
    if !offer.is_entered() || employee.ctc <= Decimal::ZERO {
        return None;
    }

    let offer_increase = offer.increase_over(employee.ctc);
    let tenure_years = employee.tenure_years(as_of);

    let (target_base, variable_percentage, risk_level, base_confidence, lead) = match strategy {
        Strategy::Conservative => {
            let increase = (offer_increase * Decimal::new(8, 1)).min(Decimal::new(15, 0));
            let target = (employee.current_salary
                * (Decimal::ONE + increase / Decimal::ONE_HUNDRED))
                .min(current_range.max_salary * Decimal::new(95, 2));
            let variable_pct = current_range
                .variable_percentage
                .min(employee.variable_percentage + Decimal::ONE);
            (
                target,
                variable_pct,
                RiskLevel::High,
                65,
                format!(
                    "Conservative {:.1}% increase maintaining budget discipline while addressing market pressure",
                    increase
                ),
            )
        }
        Strategy::Competitive => {
            let increase = (offer_increase * Decimal::new(9, 1)).min(Decimal::new(25, 0));
            let target = (employee.current_salary
                * (Decimal::ONE + increase / Decimal::ONE_HUNDRED))
                .min(current_range.max_salary * Decimal::new(11, 1));
            (
                target,
                current_range.variable_percentage,
                RiskLevel::Medium,
                85,
                format!(
                    "Market-competitive {:.1}% increase balancing retention risk with cost management",
                    increase
                ),
            )
        }
        Strategy::Aggressive => {
            let target = match promotion_range {
                Some(promotion) => promotion
                    .mid_salary
                    .min(offer.base_pay * Decimal::new(105, 2)),
                None => (current_range.max_salary * Decimal::new(12, 1))
                    .min(offer.base_pay * Decimal::new(102, 2)),
            };
            let variable_pct = promotion_range
                .map(|p| p.variable_percentage)
                .unwrap_or(current_range.variable_percentage + Decimal::TWO);
            (
                target,
                variable_pct,
                RiskLevel::Low,
                90,
                "Aggressive retention strategy matching external market to secure critical talent"
                    .to_string(),
            )
        }
        Strategy::Custom => (
            employee.current_salary,
            employee.variable_percentage,
            RiskLevel::Medium,
            50,
            String::new(),
        ),
    };

    let base_pay = round_currency(target_base);
    let variable_pay = round_currency(base_pay * variable_percentage / Decimal::ONE_HUNDRED);
    let ctc = base_pay + variable_pay;
    let positioning = calculate_positioning(base_pay, Some(current_range));

    let mut confidence: i32 = base_confidence;
    if positioning.compa_ratio >= Decimal::new(90, 0)
        && positioning.compa_ratio <= Decimal::new(110, 0)
    {
        confidence += 10;
    }
    if tenure_years > 3 {
        confidence += 5;
    }
    if employee.department == "Engineering" {
        confidence += 5;
    }
    if offer_increase > Decimal::new(40, 0) {
        confidence -= 10;
    }
    let confidence = confidence.clamp(0, 100) as u8;

    let suggestions = rationale_suggestions(
        employee,
        Some(current_range),
        promotion_range,
        offer,
        strategy,
        as_of,
    );
    let tail = suggestions
        .iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join(". ");
    let rationale = if lead.is_empty() {
        format!("{}.", tail)
    } else {
        format!("{}. {}.", lead, tail)
    };

    Some(CounterProposal {
        base_pay,
        variable_pay,
        variable_percentage,
        ctc,
        rationale,
        risk_level,
        confidence,
        compa_ratio: positioning.compa_ratio,
        range_position: positioning.range_position,
        market_position: positioning.market_position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MarketPosition, OfferInputs};
    use proptest::prelude::*;
    use super::Strategy;

    fn dec(v: i64) -> Decimal {
        Decimal::new(v, 0)
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
    }

    fn create_test_employee() -> Employee {
        Employee {
            id: "1".to_string(),
            name: "Priya Sharma".to_string(),
            email: "priya.sharma@company.com".to_string(),
            department: "Engineering".to_string(),
            job_title: "Senior Software Engineer".to_string(),
            job_family: "Technology".to_string(),
            job_sub_family: "Software Development".to_string(),
            level: "4".to_string(),
            current_salary: dec(2_000_000),
            variable_pay: dec(200_000),
            variable_percentage: dec(10),
            ctc: dec(2_200_000),
            hire_date: NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
        }
    }

    fn create_test_range() -> CompensationRange {
        CompensationRange {
            job_title: "Senior Software Engineer".to_string(),
            job_family: "Technology".to_string(),
            job_sub_family: "Software Development".to_string(),
            level: "4".to_string(),
            min_salary: dec(2_000_000),
            mid_salary: dec(2_500_000),
            max_salary: dec(3_000_000),
            variable_percentage: dec(12),
        }
    }

    fn create_promotion_range() -> CompensationRange {
        CompensationRange {
            job_title: "Staff Software Engineer".to_string(),
            job_family: "Technology".to_string(),
            job_sub_family: "Software Development".to_string(),
            level: "5".to_string(),
            min_salary: dec(2_800_000),
            mid_salary: dec(3_000_000),
            max_salary: dec(4_200_000),
            variable_percentage: dec(15),
        }
    }

    /// Offer with CTC 40% over the test employee's current CTC.
    fn forty_percent_offer() -> CompetingOffer {
        CompetingOffer::from_inputs(&OfferInputs {
            base_pay: dec(2_800_000),
            ctc: dec(3_080_000),
            variable_percentage: Decimal::ZERO,
        })
    }

    #[test]
    fn test_competitive_caps_increase_at_25_percent() {
        let proposal = recommend(
            &create_test_employee(),
            &create_test_range(),
            None,
            &forty_percent_offer(),
            Strategy::Competitive,
            as_of(),
        )
        .unwrap();

        // 40% * 0.9 = 36%, capped at 25%: base = min(2,500,000, 3,300,000)
        assert_eq!(proposal.base_pay, dec(2_500_000));
        assert_eq!(proposal.variable_percentage, dec(12));
        assert_eq!(proposal.variable_pay, dec(300_000));
        assert_eq!(proposal.ctc, dec(2_800_000));
        assert_eq!(proposal.risk_level, RiskLevel::Medium);
        assert!(proposal.rationale.starts_with("Market-competitive 25.0% increase"));
    }

    #[test]
    fn test_competitive_confidence_adjustments() {
        let proposal = recommend(
            &create_test_employee(),
            &create_test_range(),
            None,
            &forty_percent_offer(),
            Strategy::Competitive,
            as_of(),
        )
        .unwrap();

        // 85 base, +10 compa at 100, +5 tenure over 3 years,
        // +5 Engineering, no -10 (increase is exactly 40, not over)
        assert_eq!(proposal.confidence, 100);
        assert_eq!(proposal.compa_ratio, dec(100));
        assert_eq!(proposal.market_position, MarketPosition::MarketCompetitive);
    }

    #[test]
    fn test_conservative_caps_increase_at_15_percent() {
        let proposal = recommend(
            &create_test_employee(),
            &create_test_range(),
            None,
            &forty_percent_offer(),
            Strategy::Conservative,
            as_of(),
        )
        .unwrap();

        // 40% * 0.8 = 32%, capped at 15%:
        // base = min(2,300,000, 2,850,000) = 2,300,000
        assert_eq!(proposal.base_pay, dec(2_300_000));
        // variable % = min(range 12, employee 10 + 1) = 11
        assert_eq!(proposal.variable_percentage, dec(11));
        assert_eq!(proposal.variable_pay, dec(253_000));
        assert_eq!(proposal.ctc, dec(2_553_000));
        assert_eq!(proposal.risk_level, RiskLevel::High);
        // 65 base, +10 compa at 92, +5 tenure, +5 Engineering
        assert_eq!(proposal.confidence, 85);
        assert!(proposal.rationale.starts_with("Conservative 15.0% increase"));
    }

    #[test]
    fn test_aggressive_with_promotion_range() {
        let promotion = create_promotion_range();
        let proposal = recommend(
            &create_test_employee(),
            &create_test_range(),
            Some(&promotion),
            &forty_percent_offer(),
            Strategy::Aggressive,
            as_of(),
        )
        .unwrap();

        // base = min(promo mid 3,000,000, offer base * 1.05 = 2,940,000)
        assert_eq!(proposal.base_pay, dec(2_940_000));
        assert_eq!(proposal.variable_percentage, dec(15));
        assert_eq!(proposal.variable_pay, dec(441_000));
        assert_eq!(proposal.ctc, dec(3_381_000));
        assert_eq!(proposal.risk_level, RiskLevel::Low);
        // compa 117.6 sits outside [90, 110]: 90 + 5 + 5 = 100
        assert_eq!(proposal.confidence, 100);
        assert_eq!(proposal.market_position, MarketPosition::AboveMarket);
        assert!(proposal.rationale.starts_with("Aggressive retention strategy"));
        assert!(proposal.rationale.contains("Recognizing 5 years"));
    }

    #[test]
    fn test_aggressive_without_promotion_range() {
        let proposal = recommend(
            &create_test_employee(),
            &create_test_range(),
            None,
            &forty_percent_offer(),
            Strategy::Aggressive,
            as_of(),
        )
        .unwrap();

        // base = min(range max * 1.2 = 3,600,000, offer base * 1.02 = 2,856,000)
        assert_eq!(proposal.base_pay, dec(2_856_000));
        // variable % = range 12 + 2
        assert_eq!(proposal.variable_percentage, dec(14));
        assert_eq!(proposal.variable_pay, dec(399_840));
        assert_eq!(proposal.ctc, dec(3_255_840));
    }

    #[test]
    fn test_custom_mode_produces_baseline_insight() {
        let proposal = recommend(
            &create_test_employee(),
            &create_test_range(),
            None,
            &forty_percent_offer(),
            Strategy::Custom,
            as_of(),
        )
        .unwrap();

        // Baseline carries the current package positioned against the band
        assert_eq!(proposal.base_pay, dec(2_000_000));
        assert_eq!(proposal.variable_percentage, dec(10));
        assert_eq!(proposal.ctc, dec(2_200_000));
        assert_eq!(proposal.risk_level, RiskLevel::Medium);
        // 50 base, compa 80 outside [90, 110], +5 tenure, +5 Engineering
        assert_eq!(proposal.confidence, 60);
        assert_eq!(proposal.market_position, MarketPosition::BelowMidMarket);
        // No lead sentence in baseline mode
        assert!(proposal.rationale.starts_with("Employee is currently below market midpoint"));
    }

    #[test]
    fn test_confidence_penalty_above_40_percent_increase() {
        let offer = CompetingOffer::from_inputs(&OfferInputs {
            base_pay: dec(3_000_000),
            ctc: dec(3_300_000), // +50%
            variable_percentage: Decimal::ZERO,
        });

        let proposal = recommend(
            &create_test_employee(),
            &create_test_range(),
            None,
            &offer,
            Strategy::Competitive,
            as_of(),
        )
        .unwrap();

        // 85 base, +10 compa at 100, +5 tenure, +5 Engineering, -10 over 40%
        assert_eq!(proposal.confidence, 95);
    }

    #[test]
    fn test_no_offer_entered_returns_none() {
        let proposal = recommend(
            &create_test_employee(),
            &create_test_range(),
            None,
            &CompetingOffer::default(),
            Strategy::Competitive,
            as_of(),
        );

        assert!(proposal.is_none());
    }

    #[test]
    fn test_zero_current_ctc_returns_none() {
        let mut employee = create_test_employee();
        employee.ctc = Decimal::ZERO;

        let proposal = recommend(
            &employee,
            &create_test_range(),
            None,
            &forty_percent_offer(),
            Strategy::Competitive,
            as_of(),
        );

        assert!(proposal.is_none());
    }

    #[test]
    fn test_rounding_keeps_ctc_invariant() {
        let mut employee = create_test_employee();
        employee.current_salary = dec(2_272_755);
        employee.ctc = dec(2_500_030);

        let proposal = recommend(
            &employee,
            &create_test_range(),
            None,
            &forty_percent_offer_for(dec(2_500_030)),
            Strategy::Conservative,
            as_of(),
        )
        .unwrap();

        // 2,272,755 * 1.15 = 2,613,668.25 rounds to 2,613,668
        assert_eq!(proposal.base_pay, dec(2_613_668));
        assert!(proposal.base_pay.fract().is_zero());
        assert!(proposal.variable_pay.fract().is_zero());
        assert_eq!(proposal.ctc, proposal.base_pay + proposal.variable_pay);
    }

    fn forty_percent_offer_for(current_ctc: Decimal) -> CompetingOffer {
        CompetingOffer::from_inputs(&OfferInputs {
            base_pay: dec(2_800_000),
            ctc: current_ctc * Decimal::new(14, 1),
            variable_percentage: Decimal::ZERO,
        })
    }

    proptest! {
        #[test]
        fn prop_confidence_always_in_bounds(offer_ctc in 1i64..20_000_000) {
            let offer = CompetingOffer::from_inputs(&OfferInputs {
                base_pay: dec(offer_ctc),
                ctc: dec(offer_ctc),
                variable_percentage: Decimal::ZERO,
            });
            for strategy in [
                Strategy::Conservative,
                Strategy::Competitive,
                Strategy::Aggressive,
                Strategy::Custom,
            ] {
                let proposal = recommend(
                    &create_test_employee(),
                    &create_test_range(),
                    None,
                    &offer,
                    strategy,
                    as_of(),
                )
                .unwrap();
                prop_assert!(proposal.confidence <= 100);
            }
        }

        #[test]
        fn prop_ctc_is_sum_of_rounded_components(offer_ctc in 1i64..20_000_000) {
            let offer = CompetingOffer::from_inputs(&OfferInputs {
                base_pay: dec(offer_ctc),
                ctc: dec(offer_ctc),
                variable_percentage: Decimal::ZERO,
            });
            let proposal = recommend(
                &create_test_employee(),
                &create_test_range(),
                None,
                &offer,
                Strategy::Competitive,
                as_of(),
            )
            .unwrap();
            prop_assert_eq!(proposal.ctc, proposal.base_pay + proposal.variable_pay);
        }
    }
}
