//! Counter-Proposal Engine for employee retention analysis.
//!
//! This crate computes retention counter proposals for employees facing
//! competing external offers, positioning every package against market
//! salary bands and deriving risk and confidence metrics per strategy.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod directory;
pub mod error;
pub mod models;
pub mod session;
