//! Handlers for `/events` and `/registrations` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/events` | Filters: see [`EventQuery`] |
//! | `POST` | `/events` | Organizers only; body: [`EventForm`]; 201 |
//! | `GET`  | `/events/:id` | 404 if not found |
//! | `POST` | `/events/:id/approve` | Administrators only |
//! | `POST` | `/events/:id/reject` | Administrators only; [`RejectBody`] |
//! | `POST` | `/events/:id/status` | Admins and management; [`StatusBody`] |
//! | `POST` | `/events/:id/register` | Participants only; 409 when refused |
//! | `GET`  | `/registrations` | Participants only; event ids in order |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use campus_core::{
  draft::EventForm,
  event::{EventId, EventProposal, EventStatus, Registration},
  query::EventQuery,
  store::CampusStore,
  user::Role,
};
use serde::Deserialize;

use crate::{error::ApiError, require_role};

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /events[?view=pending|upcoming|completed|explore][&search=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(query): Query<EventQuery>,
) -> Json<Vec<Arc<EventProposal>>>
where
  S: CampusStore,
{
  Json(query.apply(&store.events()))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /events/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<EventId>,
) -> Result<Json<Arc<EventProposal>>, ApiError>
where
  S: CampusStore,
{
  let event = store
    .event(&id)
    .ok_or_else(|| ApiError::NotFound(format!("event {id} not found")))?;
  Ok(Json(event))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /events` — returns 201 + the stored [`EventProposal`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(form): Json<EventForm>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CampusStore,
{
  let organizer = require_role(store.as_ref(), &[Role::Organizer])?;
  let draft = form.into_draft(Some(&organizer))?;
  let event = store.add_event(draft);
  Ok((StatusCode::CREATED, Json(event)))
}

// ─── Status changes ──────────────────────────────────────────────────────────

fn apply_status<S>(
  store: &S,
  id: &EventId,
  status: EventStatus,
  reason: Option<String>,
) -> Result<Json<Arc<EventProposal>>, ApiError>
where
  S: CampusStore + ?Sized,
{
  store
    .update_event_status(id, status, reason)
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("event {id} not found")))
}

/// `POST /events/:id/approve`
pub async fn approve<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<EventId>,
) -> Result<Json<Arc<EventProposal>>, ApiError>
where
  S: CampusStore,
{
  require_role(store.as_ref(), &[Role::Administrator])?;
  apply_status(store.as_ref(), &id, EventStatus::Approved, None)
}

#[derive(Debug, Deserialize)]
pub struct RejectBody {
  pub reason: String,
}

/// `POST /events/:id/reject` — body: `{"reason":"..."}`.
pub async fn reject<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<EventId>,
  Json(body): Json<RejectBody>,
) -> Result<Json<Arc<EventProposal>>, ApiError>
where
  S: CampusStore,
{
  require_role(store.as_ref(), &[Role::Administrator])?;
  if body.reason.trim().is_empty() {
    return Err(ApiError::BadRequest("a rejection needs a reason".into()));
  }
  apply_status(store.as_ref(), &id, EventStatus::Rejected, Some(body.reason))
}

/// JSON body accepted by `POST /events/:id/status`.
#[derive(Debug, Deserialize)]
pub struct StatusBody {
  pub status: EventStatus,
  pub reason: Option<String>,
}

/// `POST /events/:id/status` — any transition; the store does not police
/// the lifecycle.
pub async fn set_status<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<EventId>,
  Json(body): Json<StatusBody>,
) -> Result<Json<Arc<EventProposal>>, ApiError>
where
  S: CampusStore,
{
  require_role(store.as_ref(), &[Role::Administrator, Role::Management])?;
  apply_status(store.as_ref(), &id, body.status, body.reason)
}

// ─── Registration ────────────────────────────────────────────────────────────

/// `POST /events/:id/register` — returns 201 + the [`Registration`].
pub async fn register<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<EventId>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CampusStore,
{
  let participant = require_role(store.as_ref(), &[Role::Participant])?;
  let registration: Registration = store.register(&id, &participant.id)?;
  Ok((StatusCode::CREATED, Json(registration)))
}

/// `GET /registrations`
pub async fn my_registrations<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<EventId>>, ApiError>
where
  S: CampusStore,
{
  let participant = require_role(store.as_ref(), &[Role::Participant])?;
  Ok(Json(store.registrations_for(&participant.id)))
}
