//! JSON REST API for CampusSync.
//!
//! Exposes an axum [`Router`] backed by any
//! [`campus_core::store::CampusStore`].
//! There is a single session per store, mirroring the portal: whoever logged
//! in last is the current user for every request. TLS and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", campus_api::api_router(store.clone()))
//! ```

pub mod directory;
pub mod error;
pub mod events;
pub mod session;
pub mod stats;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use campus_core::{
  store::CampusStore,
  user::{Role, User},
};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: CampusStore + 'static,
{
  Router::new()
    // Session
    .route("/session", get(session::current::<S>))
    .route("/session/login", post(session::login::<S>))
    .route("/session/logout", post(session::logout::<S>))
    .route("/session/profile", post(session::complete_profile::<S>))
    // Events
    .route("/events", get(events::list::<S>).post(events::create::<S>))
    .route("/events/{id}", get(events::get_one::<S>))
    .route("/events/{id}/approve", post(events::approve::<S>))
    .route("/events/{id}/reject", post(events::reject::<S>))
    .route("/events/{id}/status", post(events::set_status::<S>))
    .route("/events/{id}/register", post(events::register::<S>))
    .route("/registrations", get(events::my_registrations::<S>))
    // Dashboard
    .route("/stats", get(stats::handler::<S>))
    .route("/activity", get(stats::activity::<S>))
    // Directories
    .route(
      "/institutions",
      get(directory::institutions::<S>).post(directory::enroll::<S>),
    )
    .route("/institutions/overview", get(directory::overview::<S>))
    .route("/organizers", get(directory::organizers::<S>))
    .with_state(store)
}

/// The current user, if their role is one of `allowed`.
///
/// No session is a 401; a session with the wrong role is a 403.
pub(crate) fn require_role<S>(
  store: &S,
  allowed: &[Role],
) -> Result<User, ApiError>
where
  S: CampusStore + ?Sized,
{
  let user = store.current_user().ok_or_else(not_logged_in)?;
  check_role(&user, allowed)?;
  Ok(user)
}

pub(crate) fn not_logged_in() -> ApiError {
  ApiError::Unauthorized("not logged in".into())
}

pub(crate) fn check_role(
  user: &User,
  allowed: &[Role],
) -> Result<(), ApiError> {
  if allowed.contains(&user.role()) {
    Ok(())
  } else {
    Err(ApiError::Forbidden(format!("{} may not do this", user.role())))
  }
}

#[cfg(test)]
mod tests;
