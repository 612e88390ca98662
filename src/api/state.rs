//! Application state for the Counter-Proposal Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::directory::Directory;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded directory datasets and the optional pinned as-of date used for
/// tenure calculations (tests pin it; production uses today).
#[derive(Clone)]
pub struct AppState {
    directory: Arc<Directory>,
    as_of: Option<NaiveDate>,
}

impl AppState {
    /// Creates a new application state with the given directory.
    pub fn new(directory: Directory) -> Self {
        Self {
            directory: Arc::new(directory),
            as_of: None,
        }
    }

    /// Creates an application state with a pinned as-of date.
    pub fn with_as_of(directory: Directory, as_of: NaiveDate) -> Self {
        Self {
            directory: Arc::new(directory),
            as_of: Some(as_of),
        }
    }

    /// Returns a reference to the directory.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Returns the date tenure is measured against.
    pub fn as_of(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Utc::now().date_naive())
    }
}
