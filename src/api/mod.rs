//! HTTP API module for the Site Labor Ledger.
//!
//! This module exposes pay period generation, aggregation, time card
//! updates and per-project reports as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AggregateRequest, PeriodRequest, ReportRequest, UpdateEntryRequest};
pub use response::{ApiError, PeriodResponse, ProjectReport, TimeCardsResponse};
pub use state::AppState;
