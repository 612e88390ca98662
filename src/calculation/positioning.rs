//! Market positioning against compensation ranges.
//!
//! This module converts a base salary and a salary band into the
//! compa-ratio / range-position / market-position triple used throughout
//! the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CompensationRange, MarketPosition};

/// The positioning of a base salary against a compensation range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Positioning {
    /// Salary over the range midpoint, as a percentage.
    pub compa_ratio: Decimal,
    /// Normalized position within the band, clamped to [0, 100].
    pub range_position: Decimal,
    /// Threshold label derived from the compa-ratio.
    pub market_position: MarketPosition,
}

impl Positioning {
    /// The zeroed triple reported when no usable range exists.
    pub fn unknown() -> Self {
        Self {
            compa_ratio: Decimal::ZERO,
            range_position: Decimal::ZERO,
            market_position: MarketPosition::Unknown,
        }
    }
}

/// Positions a base salary against a compensation range.
///
/// Computes `compa_ratio = salary / mid * 100` and
/// `range_position = (salary - min) / (max - min) * 100` clamped to
/// [0, 100], and labels the result by compa-ratio threshold. This is a
/// total function: a missing range, or a degenerate one (zero midpoint or
/// zero band width), yields the zeroed "Unknown" triple.
///
/// # Examples
///
/// ```
/// use retention_engine::calculation::calculate_positioning;
/// use retention_engine::models::{CompensationRange, MarketPosition};
/// use rust_decimal::Decimal;
///
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
/// let positioning = calculate_positioning(Decimal::new(2_000_000, 0), Some(&range));
/// assert_eq!(positioning.compa_ratio, Decimal::new(80, 0));
/// assert_eq!(positioning.market_position, MarketPosition::BelowMidMarket);
/// ```
pub fn calculate_positioning(
    salary: Decimal,
    range: Option<&CompensationRange>,
) -> Positioning {
    let Some(range) = range else {
        return Positioning::unknown();
    };
    if !range.is_well_formed() {
        return Positioning::unknown();
    }

    let compa_ratio = salary / range.mid_salary * Decimal::ONE_HUNDRED;
    let range_position = ((salary - range.min_salary)
        / (range.max_salary - range.min_salary)
        * Decimal::ONE_HUNDRED)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);

    Positioning {
        compa_ratio,
        range_position,
        market_position: market_position_for(compa_ratio),
    }
}

/// Labels a compa-ratio by threshold.
fn market_position_for(compa_ratio: Decimal) -> MarketPosition {
    if compa_ratio < Decimal::new(80, 0) {
        MarketPosition::BelowMarket
    } else if compa_ratio < Decimal::new(90, 0) {
        MarketPosition::BelowMidMarket
    } else if compa_ratio < Decimal::new(110, 0) {
        MarketPosition::MarketCompetitive
    } else if compa_ratio < Decimal::new(120, 0) {
        MarketPosition::AboveMarket
    } else {
        MarketPosition::PremiumMarket
    }
}
