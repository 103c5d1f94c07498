//! Handlers for the dashboard endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/stats` | Headline counters over the whole collection |
//! | `GET`  | `/activity` | Newest first; optional `?limit=` (default 5) |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use campus_core::{
  event::EventProposal,
  query::{DashboardStats, recent},
  store::CampusStore,
};
use serde::Deserialize;

/// `GET /stats`
pub async fn handler<S>(State(store): State<Arc<S>>) -> Json<DashboardStats>
where
  S: CampusStore,
{
  Json(DashboardStats::compute(&store.events()))
}

#[derive(Debug, Deserialize)]
pub struct ActivityParams {
  pub limit: Option<usize>,
}

/// `GET /activity[?limit=<n>]`
pub async fn activity<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ActivityParams>,
) -> Json<Vec<Arc<EventProposal>>>
where
  S: CampusStore,
{
  Json(recent(&store.events(), params.limit.unwrap_or(5)))
}
