//! Dataset loading functionality.
//!
//! This module provides the [`Directory`] type for loading the employee
//! directory and compensation range taxonomy from YAML files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationRange, Employee};

/// Employees dataset file structure.
#[derive(Debug, Deserialize)]
struct EmployeesFile {
    employees: Vec<Employee>,
}

/// Ranges dataset file structure.
#[derive(Debug, Deserialize)]
struct RangesFile {
    ranges: Vec<CompensationRange>,
}

/// Loads and provides access to the static reference datasets.
///
/// The `Directory` reads YAML dataset files from a directory and holds
/// the already-validated employee and range lists the engine works over.
/// In a production deployment these datasets would come from an external
/// HR and compensation data provider.
///
/// # Directory Structure
///
/// The data directory should have the following structure:
/// ```text
/// data/retention/
/// ├── employees.yaml   # Employee directory dump
/// └── ranges.yaml      # Compensation range taxonomy
/// ```
///
/// # Example
///
/// ```no_run
/// use retention_engine::directory::Directory;
///
/// let directory = Directory::load("./data/retention").unwrap();
/// let employee = directory.get_employee("1").unwrap();
/// println!("Selected: {}", employee.name);
/// ```
#[derive(Debug, Clone)]
pub struct Directory {
    employees: Vec<Employee>,
    ranges: Vec<CompensationRange>,
}

impl Directory {
    /// Creates a directory from in-memory datasets.
    pub fn new(employees: Vec<Employee>, ranges: Vec<CompensationRange>) -> Self {
        Self { employees, ranges }
    }

    /// Loads the datasets from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the data directory (e.g., "./data/retention")
    ///
    /// # Returns
    ///
    /// Returns a `Directory` instance on success, or an error if either
    /// file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let employees_path = path.join("employees.yaml");
        let employees_file = Self::load_yaml::<EmployeesFile>(&employees_path)?;

        let ranges_path = path.join("ranges.yaml");
        let ranges_file = Self::load_yaml::<RangesFile>(&ranges_path)?;

        Ok(Self::new(employees_file.employees, ranges_file.ranges))
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::DatasetNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::DatasetParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the employee directory.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the compensation range taxonomy.
    pub fn ranges(&self) -> &[CompensationRange] {
        &self.ranges
    }

    /// Looks up an employee by id.
    pub fn get_employee(&self, id: &str) -> EngineResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }
}
