//! HTTP API module for the Counter-Proposal Engine.
//!
//! This module provides the REST API endpoints through which the
//! presentation layer reads the directory and requests counter
//! proposals.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CustomProposalRequest, ProposalRequest, ProposalState};
pub use response::{ApiError, ProposalResponse, UsdSummary};
pub use state::AppState;
