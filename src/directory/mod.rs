//! Directory layer over the static employee and range datasets.
//!
//! This module loads the employee directory and the compensation range
//! taxonomy from YAML files and provides the search and lookup
//! operations the analysis flow is built on.
//!
//! # Example
//!
//! ```no_run
//! use retention_engine::directory::Directory;
//!
//! let directory = Directory::load("./data/retention").unwrap();
//! println!("Loaded {} employees", directory.employees().len());
//! ```

mod loader;
mod search;

pub use loader::Directory;
pub use search::{current_range_for, promotion_ranges_for, search_employees};
