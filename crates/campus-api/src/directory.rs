//! Handlers for the institution and organizer directories.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/institutions` | Management only; optional `search` |
//! | `POST` | `/institutions` | Management only; body: [`Enrollment`]; 201 |
//! | `GET`  | `/institutions/overview` | Management only; [`DirectoryStats`] |
//! | `GET`  | `/organizers` | Administrators only; optional `search` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use campus_core::{
  directory::{Enrollment, FacultyOrganizer, Institution},
  query::{
    DirectoryQuery, DirectoryStats, search_institutions, search_organizers,
  },
  store::CampusStore,
  user::Role,
};

use crate::{error::ApiError, require_role};

/// `GET /institutions[?search=...]`
pub async fn institutions<S>(
  State(store): State<Arc<S>>,
  Query(query): Query<DirectoryQuery>,
) -> Result<Json<Vec<Arc<Institution>>>, ApiError>
where
  S: CampusStore,
{
  require_role(store.as_ref(), &[Role::Management])?;
  let all = store.institutions();
  Ok(Json(search_institutions(&all, query.search.as_deref())))
}

/// `POST /institutions` — returns 201 + the pending [`Institution`].
pub async fn enroll<S>(
  State(store): State<Arc<S>>,
  Json(enrollment): Json<Enrollment>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CampusStore,
{
  require_role(store.as_ref(), &[Role::Management])?;
  let institution = store.enroll_institution(enrollment)?;
  Ok((StatusCode::CREATED, Json(institution)))
}

/// `GET /institutions/overview`
pub async fn overview<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<DirectoryStats>, ApiError>
where
  S: CampusStore,
{
  require_role(store.as_ref(), &[Role::Management])?;
  Ok(Json(DirectoryStats::compute(&store.institutions())))
}

/// `GET /organizers[?search=...]`
pub async fn organizers<S>(
  State(store): State<Arc<S>>,
  Query(query): Query<DirectoryQuery>,
) -> Result<Json<Vec<FacultyOrganizer>>, ApiError>
where
  S: CampusStore,
{
  require_role(store.as_ref(), &[Role::Administrator])?;
  let roster = store.organizers();
  Ok(Json(search_organizers(&roster, query.search.as_deref())))
}
