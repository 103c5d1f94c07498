//! Handlers for `/session` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/session` | Current user (or `null`) plus navigation |
//! | `POST` | `/session/login` | Body: [`LoginBody`]; 401 on unknown email |
//! | `POST` | `/session/logout` | 204 |
//! | `POST` | `/session/profile` | Participants only; body: [`ProfileBody`] |

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use campus_core::{
  login::{Session, login as sign_in, logout as sign_out},
  nav::{NavItem, navigation},
  store::CampusStore,
  user::{AcademicRecord, Role, User},
};
use serde::{Deserialize, Serialize};

use crate::{check_role, error::ApiError, not_logged_in};

// ─── Current ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionView {
  pub user:       Option<User>,
  pub navigation: &'static [NavItem],
}

/// `GET /session`
pub async fn current<S>(State(store): State<Arc<S>>) -> Json<SessionView>
where
  S: CampusStore,
{
  let user = store.current_user();
  let navigation = navigation(user.as_ref().map(User::role));
  Json(SessionView { user, navigation })
}

// ─── Login / logout ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub email:    String,
  #[serde(default)]
  pub password: String,
}

/// `POST /session/login`
pub async fn login<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<LoginBody>,
) -> Result<Json<Session>, ApiError>
where
  S: CampusStore,
{
  let session = sign_in(store.as_ref(), &body.email, &body.password)?;
  Ok(Json(session))
}

/// `POST /session/logout`
pub async fn logout<S>(State(store): State<Arc<S>>) -> StatusCode
where
  S: CampusStore,
{
  sign_out(store.as_ref());
  StatusCode::NO_CONTENT
}

// ─── Profile ─────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /session/profile`.
#[derive(Debug, Deserialize)]
pub struct ProfileBody {
  pub name:        Option<String>,
  pub email:       Option<String>,
  pub institution: String,
  pub district:    String,
  pub department:  String,
  pub year:        String,
  pub roll_number: String,
  pub phone:       Option<String>,
}

fn completed(current: &User, body: ProfileBody) -> User {
  let mut user = current.with_academic_record(
    body.institution,
    body.district,
    AcademicRecord {
      department:  body.department,
      year:        body.year,
      roll_number: body.roll_number,
      phone:       body.phone,
    },
  );
  if let Some(name) = body.name {
    user.name = name;
  }
  if let Some(email) = body.email {
    user.email = email;
  }
  user
}

/// `POST /session/profile` — fills in the participant's academic record and
/// marks the profile complete.
///
/// The role check runs against the user being rewritten, under the same
/// store guard as the write.
pub async fn complete_profile<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<ProfileBody>,
) -> Result<Json<User>, ApiError>
where
  S: CampusStore,
{
  let mut checked = Err(not_logged_in());
  let updated = store.update_current_user(|current| {
    checked = check_role(current, &[Role::Participant]);
    checked.is_ok().then(|| completed(current, body))
  });
  checked?;
  updated.map(Json).ok_or_else(not_logged_in)
}
