//! Session identity.
//!
//! A [`User`] carries the fields every role shares; everything that only makes
//! sense for one role lives in that role's [`Profile`] variant.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Stable identifier for a user, e.g. `"o1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for UserId {
  fn from(s: &str) -> Self { Self(s.to_string()) }
}

/// The closed set of roles a session can hold.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
  Administrator,
  Organizer,
  Participant,
  Management,
}

// ─── Profiles ────────────────────────────────────────────────────────────────

/// Academic details a participant fills in on their profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicRecord {
  pub department:  String,
  /// Year of study as entered, e.g. `"3"` or `"Final"`.
  pub year:        String,
  pub roll_number: String,
  pub phone:       Option<String>,
}

/// Role-specific attributes. The variant is the user's role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Profile {
  Administrator {
    institution: String,
    district:    String,
  },
  Organizer {
    department:  String,
    institution: String,
    district:    String,
  },
  Participant {
    institution:       String,
    district:          String,
    #[serde(default)]
    profile_completed: bool,
    academic:          Option<AcademicRecord>,
  },
  Management,
}

impl Profile {
  pub fn role(&self) -> Role {
    match self {
      Self::Administrator { .. } => Role::Administrator,
      Self::Organizer { .. } => Role::Organizer,
      Self::Participant { .. } => Role::Participant,
      Self::Management => Role::Management,
    }
  }

  /// Home department, where the role has one.
  pub fn department(&self) -> Option<&str> {
    match self {
      Self::Organizer { department, .. } => Some(department),
      Self::Participant {
        academic: Some(academic),
        ..
      } => Some(&academic.department),
      _ => None,
    }
  }

  /// Home institution, where the role has one.
  pub fn institution(&self) -> Option<&str> {
    match self {
      Self::Administrator { institution, .. }
      | Self::Organizer { institution, .. }
      | Self::Participant { institution, .. } => Some(institution),
      Self::Management => None,
    }
  }

  /// Home district, where the role has one.
  pub fn district(&self) -> Option<&str> {
    match self {
      Self::Administrator { district, .. }
      | Self::Organizer { district, .. }
      | Self::Participant { district, .. } => Some(district),
      Self::Management => None,
    }
  }
}

// ─── User ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:      UserId,
  pub name:    String,
  pub email:   String,
  #[serde(flatten)]
  pub profile: Profile,
}

impl User {
  pub fn role(&self) -> Role { self.profile.role() }

  /// Returns a copy with the participant profile filled in and marked
  /// complete. Users of any other role are returned unchanged.
  pub fn with_academic_record(
    &self,
    institution: String,
    district: String,
    academic: AcademicRecord,
  ) -> Self {
    let mut next = self.clone();
    if let Profile::Participant { .. } = next.profile {
      next.profile = Profile::Participant {
        institution,
        district,
        profile_completed: true,
        academic: Some(academic),
      };
    }
    next
  }
}
