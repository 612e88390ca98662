//! Search and lookup operations over the datasets.
//!
//! This module implements the employee search filter and the range
//! matching rules: an employee's current band is the exact match on
//! their job tuple, and promotion candidates are the bands one numeric
//! level up within the same job family.

use crate::models::{CompensationRange, Employee};

/// Filters the employee directory by a search query.
///
/// Matches case-insensitively against name, email, or department. An
/// empty query returns no matches (the dashboard shows no dropdown until
/// something is typed).
pub fn search_employees<'a>(employees: &'a [Employee], query: &str) -> Vec<&'a Employee> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    employees
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&query)
                || e.email.to_lowercase().contains(&query)
                || e.department.to_lowercase().contains(&query)
        })
        .collect()
}

/// Finds the range matching an employee's job attributes exactly.
pub fn current_range_for<'a>(
    ranges: &'a [CompensationRange],
    employee: &Employee,
) -> Option<&'a CompensationRange> {
    ranges.iter().find(|r| r.matches_employee(employee))
}

/// Finds the promotion candidates one level up from a current range.
///
/// Candidates are the ranges in the same job family at numeric
/// `level + 1`. A current range with a non-numeric level has no
/// candidates.
pub fn promotion_ranges_for<'a>(
    ranges: &'a [CompensationRange],
    current: &CompensationRange,
) -> Vec<&'a CompensationRange> {
    let Some(current_level) = current.numeric_level() else {
        return Vec::new();
    };
    let next_level = current_level + 1;

    ranges
        .iter()
        .filter(|r| {
            r.job_family == current.job_family && r.numeric_level() == Some(next_level)
        })
        .collect()
}
