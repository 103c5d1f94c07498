//! The `CampusStore` trait and its change notifications.
//!
//! The trait is implemented by storage backends (e.g. `campus-store-memory`).
//! Higher layers (`campus-api`, `campus-server`) depend on this abstraction,
//! not on any concrete backend.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::broadcast;

use crate::{
  Result,
  directory::{Enrollment, FacultyOrganizer, Institution, InstitutionId},
  event::{EventDraft, EventId, EventProposal, EventStatus, Registration},
  user::{User, UserId},
};

// ─── Notifications ───────────────────────────────────────────────────────────

/// What changed. Sent to every subscriber after each successful mutation, in
/// mutation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", content = "id", rename_all = "snake_case")]
pub enum StoreChange {
  UserChanged,
  EventUpdated(EventId),
  EventAdded(EventId),
  Registered(EventId),
  InstitutionEnrolled(InstitutionId),
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// The single source of truth for the session identity and the event
/// collection, and the only way to mutate either.
///
/// Every method runs as one atomic unit: no caller can observe a partially
/// applied change. Snapshots hand out `Arc`s so records a mutation did not
/// touch keep their identity across calls.
pub trait CampusStore: Send + Sync {
  // ── Session ───────────────────────────────────────────────────────────

  fn current_user(&self) -> Option<User>;

  /// Replace the session identity wholesale and return the one it replaced.
  /// `None` logs out.
  fn set_current_user(&self, user: Option<User>) -> Option<User>;

  /// Rewrite the signed-in user in place.
  ///
  /// `update` sees the current user and returns its replacement, or `None`
  /// to leave the session alone. Reading and writing happen under one guard,
  /// so a login racing with the update is either seen by `update` or lands
  /// after it. Returns the installed user; with no session `update` is not
  /// called.
  fn update_current_user<F>(&self, update: F) -> Option<User>
  where
    F: FnOnce(&User) -> Option<User>;

  // ── Events — reads ────────────────────────────────────────────────────

  /// All records in insertion order.
  fn events(&self) -> Vec<Arc<EventProposal>>;

  fn event(&self, id: &EventId) -> Option<Arc<EventProposal>>;

  // ── Events — writes ───────────────────────────────────────────────────

  /// Replace the status (and rejection reason) of the record with `id`.
  ///
  /// Returns the updated record, or `None` when no record matches, in which
  /// case the collection is left untouched and nobody is notified.
  fn update_event_status(
    &self,
    id: &EventId,
    status: EventStatus,
    reason: Option<String>,
  ) -> Option<Arc<EventProposal>>;

  /// Append a new proposal built from `draft` and return it. The store
  /// assigns the id, the creation time, `Pending` status and a zero
  /// registration count.
  fn add_event(&self, draft: EventDraft) -> Arc<EventProposal>;

  // ── Registrations ─────────────────────────────────────────────────────

  /// Take a seat at an upcoming event.
  ///
  /// Fails if the event does not exist, is not approved or active, already
  /// holds a registration for `user_id`, or is full.
  fn register(&self, event_id: &EventId, user_id: &UserId)
  -> Result<Registration>;

  /// Events `user_id` registered for, in registration order.
  fn registrations_for(&self, user_id: &UserId) -> Vec<EventId>;

  // ── Directories ───────────────────────────────────────────────────

  /// Enrolled institutions in enrollment order.
  fn institutions(&self) -> Vec<Arc<Institution>>;

  /// Enroll a new institution. It is appended as `Pending` with the next
  /// `TN-` id.
  ///
  /// Fails with [`crate::Error::InvalidField`] when the form is incomplete;
  /// nothing is stored or announced in that case.
  fn enroll_institution(
    &self,
    enrollment: Enrollment,
  ) -> Result<Arc<Institution>>;

  /// The faculty organizer roster.
  fn organizers(&self) -> Vec<FacultyOrganizer>;

  // ── Subscriptions ─────────────────────────────────────────────────────

  fn subscribe(&self) -> broadcast::Receiver<StoreChange>;
}
