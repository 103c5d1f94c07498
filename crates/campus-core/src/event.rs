//! Event proposals — the records the store owns.
//!
//! A proposal is created by an organizer, reviewed by an administrator, and
//! eventually run and closed out with outcomes. The store never removes one.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::user::UserId;

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// Identifier of an [`EventProposal`].
///
/// Seeded records use short numeric strings (`"1"`..`"8"`); records created
/// through [`crate::store::CampusStore::add_event`] get a v4 UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
  pub fn generate() -> Self { Self(Uuid::new_v4().to_string()) }
}

impl fmt::Display for EventId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for EventId {
  fn from(s: &str) -> Self { Self(s.to_string()) }
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// Lifecycle stage of a proposal. The store does not validate transitions.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EventStatus {
  #[default]
  Pending,
  Approved,
  Rejected,
  Active,
  Completed,
}

impl EventStatus {
  /// Approved and active events are listed as upcoming and take
  /// registrations.
  pub fn is_upcoming(self) -> bool {
    matches!(self, Self::Approved | Self::Active)
  }
}

// ─── Organizer ───────────────────────────────────────────────────────────────

/// Who proposed the event and where they sit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
  pub id:          UserId,
  pub name:        String,
  pub department:  String,
  pub institution: String,
  pub district:    String,
}

// ─── Proposal ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventProposal {
  pub id:                    EventId,
  pub title:                 String,
  pub description:           String,
  /// Free-form, e.g. "Technical" or "Cultural".
  pub category:              String,
  pub date:                  NaiveDate,
  pub time:                  NaiveTime,
  pub venue:                 String,
  pub organizer:             Organizer,
  pub budget:                Option<u64>,
  pub expected_participants: u32,
  pub objectives:            Vec<String>,
  pub status:                EventStatus,
  /// Only ever set while `status` is [`EventStatus::Rejected`].
  pub rejection_reason:      Option<String>,
  /// Store-assigned; never changes after creation.
  pub created_at:            DateTime<Utc>,
  pub current_registrations: u32,
  pub capacity:              u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub outcomes:              Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub winners:               Option<Vec<String>>,
}

impl EventProposal {
  /// Build the stored record for `draft`. Status starts at
  /// [`EventStatus::Pending`] and the registration counter at zero.
  pub fn from_draft(
    id: EventId,
    draft: EventDraft,
    created_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      title: draft.title,
      description: draft.description,
      category: draft.category,
      date: draft.date,
      time: draft.time,
      venue: draft.venue,
      organizer: draft.organizer,
      budget: draft.budget,
      expected_participants: draft.expected_participants,
      objectives: draft.objectives,
      status: EventStatus::Pending,
      rejection_reason: None,
      created_at,
      current_registrations: 0,
      capacity: draft.capacity,
      outcomes: draft.outcomes,
      winners: draft.winners,
    }
  }

  /// A copy with `status` replaced. The rejection reason is kept only when
  /// the new status is [`EventStatus::Rejected`].
  pub fn with_status(
    &self,
    status: EventStatus,
    reason: Option<String>,
  ) -> Self {
    Self {
      status,
      rejection_reason: match status {
        EventStatus::Rejected => reason,
        _ => None,
      },
      ..self.clone()
    }
  }

  pub fn seats_left(&self) -> u32 {
    self.capacity.saturating_sub(self.current_registrations)
  }
}

// ─── Draft ───────────────────────────────────────────────────────────────────

/// Input to [`crate::store::CampusStore::add_event`]: every proposal field
/// except the four the store assigns (id, status, creation time, registration
/// counter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
  pub title:                 String,
  pub description:           String,
  pub category:              String,
  pub date:                  NaiveDate,
  pub time:                  NaiveTime,
  pub venue:                 String,
  pub organizer:             Organizer,
  pub budget:                Option<u64>,
  pub expected_participants: u32,
  pub objectives:            Vec<String>,
  pub capacity:              u32,
  #[serde(default)]
  pub outcomes:              Option<Vec<String>>,
  #[serde(default)]
  pub winners:               Option<Vec<String>>,
}

// ─── Registration ────────────────────────────────────────────────────────────

/// A participant's seat at an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
  pub event_id:      EventId,
  pub user_id:       UserId,
  pub registered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use super::*;

  fn draft() -> EventDraft {
    EventDraft {
      title:                 "Robotics Expo".into(),
      description:           "Student-built robots on display.".into(),
      category:              "Technical".into(),
      date:                  NaiveDate::from_ymd_opt(2024, 8, 2).unwrap(),
      time:                  NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
      venue:                 "Main Auditorium".into(),
      organizer:             Organizer {
        id:          "o1".into(),
        name:        "Dr. Sarah Wilson".into(),
        department:  "Computer Science".into(),
        institution: "Anna University".into(),
        district:    "Chennai".into(),
      },
      budget:                Some(40_000),
      expected_participants: 150,
      objectives:            vec!["Hands-on demos".into()],
      capacity:              150,
      outcomes:              None,
      winners:               None,
    }
  }

  #[test]
  fn from_draft_assigns_store_fields() {
    let now = Utc::now();
    let event = EventProposal::from_draft("x".into(), draft(), now);
    assert_eq!(event.status, EventStatus::Pending);
    assert_eq!(event.current_registrations, 0);
    assert_eq!(event.created_at, now);
    assert_eq!(event.title, "Robotics Expo");
    assert_eq!(event.budget, Some(40_000));
    assert!(event.rejection_reason.is_none());
  }

  #[test]
  fn with_status_keeps_reason_only_for_rejected() {
    let event = EventProposal::from_draft("x".into(), draft(), Utc::now());

    let rejected = event
      .with_status(EventStatus::Rejected, Some("Over budget".into()));
    assert_eq!(rejected.rejection_reason.as_deref(), Some("Over budget"));

    let reopened = rejected.with_status(EventStatus::Pending, None);
    assert!(reopened.rejection_reason.is_none());

    let approved =
      event.with_status(EventStatus::Approved, Some("ignored".into()));
    assert!(approved.rejection_reason.is_none());
    assert_eq!(approved.title, event.title);
  }

  #[test]
  fn status_string_forms() {
    assert_eq!(EventStatus::Completed.to_string(), "completed");
    assert_eq!(EventStatus::from_str("active").unwrap(), EventStatus::Active);
    assert_eq!(
      serde_json::to_value(EventStatus::Rejected).unwrap(),
      serde_json::json!("rejected")
    );
  }

  #[test]
  fn seats_left_saturates() {
    let mut event = EventProposal::from_draft("x".into(), draft(), Utc::now());
    event.current_registrations = 310;
    event.capacity = 250;
    assert_eq!(event.seats_left(), 0);
  }

  #[test]
  fn generated_ids_are_distinct() {
    assert_ne!(EventId::generate(), EventId::generate());
  }
}
