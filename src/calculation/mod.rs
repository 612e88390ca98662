//! Calculation logic for the Counter-Proposal Engine.
//!
//! This module contains all the calculation functions for building
//! retention counter proposals, including market positioning against
//! salary bands, rationale sentence generation, per-strategy proposal
//! computation with confidence scoring, the field-linked custom proposal
//! editor, and fixed-rate currency conversion for display.

mod currency;
mod custom_edit;
mod positioning;
mod rationale;
mod strategy;

pub use currency::{INR_PER_USD, to_usd};
pub use custom_edit::{ProposalField, apply_edit, seed_proposal};
pub use positioning::{Positioning, calculate_positioning};
pub use rationale::rationale_suggestions;
pub use strategy::recommend;
