//! [`MemoryStore`] — the in-process implementation of [`CampusStore`].

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tokio::sync::broadcast;
use tracing::{debug, info};

use campus_core::{
  Error, Result,
  directory::{Enrollment, FacultyOrganizer, Institution, InstitutionId},
  event::{EventDraft, EventId, EventProposal, EventStatus, Registration},
  seed::{demo_events, demo_institutions, demo_organizers},
  store::{CampusStore, StoreChange},
  user::{User, UserId},
};

/// Subscribers that fall further behind than this miss notifications.
const CHANGE_BUFFER: usize = 64;

type Events = Vec<Arc<EventProposal>>;

#[derive(Default)]
struct State {
  current_user:  Option<User>,
  events:        Events,
  registrations: Vec<Registration>,
  institutions:  Vec<Arc<Institution>>,
  organizers:    Vec<FacultyOrganizer>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A CampusSync store living entirely in process memory.
///
/// Share it behind an `Arc`; all methods take `&self`.
pub struct MemoryStore {
  state:   RwLock<State>,
  changes: broadcast::Sender<StoreChange>,
}

impl MemoryStore {
  /// A store holding `events` in the given order, no session and empty
  /// directories.
  pub fn new(events: Vec<EventProposal>) -> Self {
    let (changes, _) = broadcast::channel(CHANGE_BUFFER);
    Self {
      state: RwLock::new(State {
        events: events.into_iter().map(Arc::new).collect(),
        ..State::default()
      }),
      changes,
    }
  }

  /// A store holding the demo dataset: eight events, five institutions and
  /// the faculty organizer roster.
  pub fn seeded() -> Self {
    Self::new(demo_events())
      .with_directory(demo_institutions(), demo_organizers())
  }

  /// Replace both directories.
  pub fn with_directory(
    mut self,
    institutions: Vec<Institution>,
    organizers: Vec<FacultyOrganizer>,
  ) -> Self {
    let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
    state.institutions = institutions.into_iter().map(Arc::new).collect();
    state.organizers = organizers;
    self
  }

  fn read(&self) -> RwLockReadGuard<'_, State> {
    self.state.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, State> {
    self.state.write().unwrap_or_else(PoisonError::into_inner)
  }

  /// Sent while the caller still holds the write guard, so subscribers see
  /// changes in the order they were applied. Having no subscribers is fine.
  fn notify(&self, change: StoreChange) {
    let _ = self.changes.send(change);
  }

  /// Replace the whole collection with a function of the previous one.
  ///
  /// `update` returns `None` to leave the collection as it is, in which case
  /// nobody is notified. Returns whether a replacement happened.
  pub(crate) fn set_events_with<F>(
    &self,
    change: StoreChange,
    update: F,
  ) -> bool
  where
    F: FnOnce(&[Arc<EventProposal>]) -> Option<Events>,
  {
    let mut state = self.write();
    let Some(next) = update(&state.events) else {
      return false;
    };
    state.events = next;
    debug!(count = state.events.len(), ?change, "event collection replaced");
    self.notify(change);
    true
  }
}

fn position(events: &[Arc<EventProposal>], id: &EventId) -> Option<usize> {
  events.iter().position(|e| &e.id == id)
}

// ─── CampusStore impl ────────────────────────────────────────────────────────

impl CampusStore for MemoryStore {
  // ── Session ───────────────────────────────────────────────────────────────

  fn current_user(&self) -> Option<User> { self.read().current_user.clone() }

  fn set_current_user(&self, user: Option<User>) -> Option<User> {
    let mut state = self.write();
    let previous = std::mem::replace(&mut state.current_user, user);
    self.notify(StoreChange::UserChanged);
    previous
  }

  fn update_current_user<F>(&self, update: F) -> Option<User>
  where
    F: FnOnce(&User) -> Option<User>,
  {
    let mut state = self.write();
    let next = update(state.current_user.as_ref()?)?;
    debug!(user = %next.id, "session user updated");
    state.current_user = Some(next.clone());
    self.notify(StoreChange::UserChanged);
    Some(next)
  }

  // ── Events — reads ────────────────────────────────────────────────────────

  fn events(&self) -> Vec<Arc<EventProposal>> { self.read().events.clone() }

  fn event(&self, id: &EventId) -> Option<Arc<EventProposal>> {
    let state = self.read();
    position(&state.events, id).map(|i| Arc::clone(&state.events[i]))
  }

  // ── Events — writes ───────────────────────────────────────────────────────

  fn update_event_status(
    &self,
    id: &EventId,
    status: EventStatus,
    reason: Option<String>,
  ) -> Option<Arc<EventProposal>> {
    let mut updated = None;
    self.set_events_with(StoreChange::EventUpdated(id.clone()), |prev| {
      let i = position(prev, id)?;
      let record = Arc::new(prev[i].with_status(status, reason));
      updated = Some(Arc::clone(&record));
      let mut next = prev.to_vec();
      next[i] = record;
      Some(next)
    });

    match &updated {
      Some(_) => info!(%id, %status, "event status updated"),
      None => debug!(%id, "status update for unknown event ignored"),
    }
    updated
  }

  fn add_event(&self, draft: EventDraft) -> Arc<EventProposal> {
    let event = Arc::new(EventProposal::from_draft(
      EventId::generate(),
      draft,
      Utc::now(),
    ));
    self.set_events_with(StoreChange::EventAdded(event.id.clone()), |prev| {
      let mut next = prev.to_vec();
      next.push(Arc::clone(&event));
      Some(next)
    });
    info!(id = %event.id, title = %event.title, "event proposed");
    event
  }

  // ── Registrations ─────────────────────────────────────────────────────────

  fn register(
    &self,
    event_id: &EventId,
    user_id: &UserId,
  ) -> Result<Registration> {
    let mut state = self.write();
    let i = position(&state.events, event_id)
      .ok_or_else(|| Error::EventNotFound(event_id.clone()))?;

    let event = &state.events[i];
    if !event.status.is_upcoming() {
      return Err(Error::RegistrationClosed(event_id.clone()));
    }
    if state
      .registrations
      .iter()
      .any(|r| &r.event_id == event_id && &r.user_id == user_id)
    {
      return Err(Error::AlreadyRegistered(event_id.clone()));
    }
    if event.current_registrations >= event.capacity {
      return Err(Error::CapacityReached(event_id.clone()));
    }

    let mut next = EventProposal::clone(event);
    next.current_registrations += 1;
    state.events[i] = Arc::new(next);

    let registration = Registration {
      event_id:      event_id.clone(),
      user_id:       user_id.clone(),
      registered_at: Utc::now(),
    };
    state.registrations.push(registration.clone());
    info!(event = %event_id, user = %user_id, "registered");
    self.notify(StoreChange::Registered(event_id.clone()));
    Ok(registration)
  }

  fn registrations_for(&self, user_id: &UserId) -> Vec<EventId> {
    self
      .read()
      .registrations
      .iter()
      .filter(|r| &r.user_id == user_id)
      .map(|r| r.event_id.clone())
      .collect()
  }

  // ── Directories ───────────────────────────────────────────────────────────

  fn institutions(&self) -> Vec<Arc<Institution>> {
    self.read().institutions.clone()
  }

  fn enroll_institution(
    &self,
    enrollment: Enrollment,
  ) -> Result<Arc<Institution>> {
    let mut state = self.write();
    let id = InstitutionId::nth(state.institutions.len());
    let institution =
      Arc::new(Institution::from_enrollment(id, enrollment)?);
    state.institutions.push(Arc::clone(&institution));
    info!(
      id = %institution.id,
      name = %institution.name,
      "institution enrolled"
    );
    self.notify(StoreChange::InstitutionEnrolled(institution.id.clone()));
    Ok(institution)
  }

  fn organizers(&self) -> Vec<FacultyOrganizer> {
    self.read().organizers.clone()
  }

  // ── Subscriptions ─────────────────────────────────────────────────────────

  fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
    self.changes.subscribe()
  }
}
