//! Compensation range model.
//!
//! This module defines the CompensationRange struct representing a market
//! salary band for a (job title, family, sub-family, level) tuple.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Employee;

/// A market-benchmarked salary band for a role at a specific level.
///
/// Ranges are static reference data from the compensation taxonomy. An
/// employee's *current range* is the range matching their own job
/// attributes; a *promotion range* is any range one level up within the
/// same job family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationRange {
    /// The job title this range applies to.
    pub job_title: String,
    /// The job family grouping.
    pub job_family: String,
    /// The job sub-family grouping.
    pub job_sub_family: String,
    /// The job level (e.g., "4").
    pub level: String,
    /// The minimum base salary for the band.
    pub min_salary: Decimal,
    /// The market midpoint base salary for the band.
    pub mid_salary: Decimal,
    /// The maximum base salary for the band.
    pub max_salary: Decimal,
    /// The standard variable pay percentage for the band.
    pub variable_percentage: Decimal,
}

impl CompensationRange {
    /// Returns true if this range is the band for the given employee's
    /// job attributes (exact title, family, sub-family, and level match).
    pub fn matches_employee(&self, employee: &Employee) -> bool {
        self.job_title == employee.job_title
            && self.job_family == employee.job_family
            && self.job_sub_family == employee.job_sub_family
            && self.level == employee.level
    }

    /// Returns true if the band has a usable width and midpoint.
    ///
    /// Positioning metrics divide by the midpoint and the band width, so
    /// a band with `mid_salary <= 0` or `max_salary <= min_salary` cannot
    /// be positioned against.
    pub fn is_well_formed(&self) -> bool {
        self.mid_salary > Decimal::ZERO && self.max_salary > self.min_salary
    }

    /// Returns the numeric job level, if the level string parses.
    ///
    /// Promotion lookups step to `level + 1`; ranges with non-numeric
    /// levels have no promotion successors.
    pub fn numeric_level(&self) -> Option<u32> {
        self.level.parse().ok()
    }
}
