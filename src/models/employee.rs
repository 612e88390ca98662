//! Employee model.
//!
//! This module defines the Employee struct representing a worker's
//! current compensation snapshot as loaded from the HR directory.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee with their current compensation snapshot.
///
/// Employee records are immutable once loaded from the directory; the
/// engine only reads them when computing counter proposals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The employee's work email address.
    pub email: String,
    /// The department the employee belongs to (e.g., "Engineering").
    pub department: String,
    /// The employee's job title (e.g., "Senior Software Engineer").
    pub job_title: String,
    /// The job family grouping (e.g., "Technology").
    pub job_family: String,
    /// The job sub-family grouping (e.g., "Software Development").
    pub job_sub_family: String,
    /// The job level as recorded in the taxonomy (e.g., "4").
    pub level: String,
    /// Current annual base salary.
    pub current_salary: Decimal,
    /// Current annual variable pay.
    pub variable_pay: Decimal,
    /// Current variable pay as a percentage of base salary.
    pub variable_percentage: Decimal,
    /// Current total cost-to-company (base + variable).
    pub ctc: Decimal,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
}

impl Employee {
    /// Returns the employee's tenure in whole years as of the given date.
    ///
    /// Tenure is the difference between calendar years, matching how the
    /// dashboard credits a year of service from the first January after
    /// hiring.
    ///
    /// # Examples
    ///
    /// ```
    /// use retention_engine::models::Employee;
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
    ///     current_salary: Decimal::new(2_272_755, 0),
    ///     variable_pay: Decimal::new(227_275, 0),
    ///     variable_percentage: Decimal::new(10, 0),
    ///     ctc: Decimal::new(2_500_030, 0),
    ///     hire_date: NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
    /// };
    /// let as_of = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
    /// assert_eq!(employee.tenure_years(as_of), 5);
    /// ```
    pub fn tenure_years(&self, as_of: NaiveDate) -> i32 {
        as_of.year() - self.hire_date.year()
    }

    /// Returns true if the employee sits at a senior contributor level.
    ///
    /// Levels "4" and "5" carry mentoring responsibilities in the job
    /// taxonomy.
    pub fn is_senior(&self) -> bool {
        self.level == "4" || self.level == "5"
    }
}
