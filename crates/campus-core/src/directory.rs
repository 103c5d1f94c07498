//! The institution and organizer directories.
//!
//! Institutions are enrolled by management and listed on their dashboard;
//! the organizer directory is the faculty roster administrators authorize to
//! host events. Neither is tied to the demo login accounts.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{Error, Result};

// ─── Institutions ────────────────────────────────────────────────────────────

/// Identifier of an [`Institution`]: `TN-` followed by a sequence number
/// starting at 1001, in enrollment order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstitutionId(pub String);

impl InstitutionId {
  /// The id of the `n`th institution enrolled, counting from zero.
  pub fn nth(n: usize) -> Self { Self(format!("TN-{}", 1001 + n)) }
}

impl fmt::Display for InstitutionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for InstitutionId {
  fn from(s: &str) -> Self { Self(s.to_string()) }
}

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
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InstitutionKind {
  University,
  #[default]
  Engineering,
  ArtsAndScience,
  Medical,
  Agriculture,
  Polytechnic,
}

/// Whether an institution has been verified. Fresh enrollments wait in
/// `Pending`.
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
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EnrollmentStatus {
  Active,
  Pending,
}

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
)]
pub enum NaacGrade {
  #[serde(rename = "A++")]
  #[strum(serialize = "A++")]
  APlusPlus,
  #[serde(rename = "A+")]
  #[strum(serialize = "A+")]
  APlus,
  #[default]
  A,
  #[serde(rename = "B++")]
  #[strum(serialize = "B++")]
  BPlusPlus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
  pub id:             InstitutionId,
  pub name:           String,
  /// Contact address of the institution's administrator.
  pub admin:          String,
  pub district:       String,
  #[serde(rename = "type")]
  pub kind:           InstitutionKind,
  pub status:         EnrollmentStatus,
  /// Enrolled students.
  pub students:       u32,
  pub autonomous:     bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub naac_grade:     Option<NaacGrade>,
  pub nba_accredited: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub website:        Option<String>,
}

fn default_district() -> String { "Chennai".into() }

/// The enrollment form management submits for a new institution.
#[derive(Debug, Clone, Deserialize)]
pub struct Enrollment {
  pub college_name:   String,
  #[serde(default = "default_district")]
  pub district:       String,
  #[serde(rename = "type", default)]
  pub kind:           InstitutionKind,
  #[serde(default)]
  pub autonomous:     bool,
  #[serde(default)]
  pub naac_grade:     NaacGrade,
  #[serde(default)]
  pub nba_accredited: bool,
  pub contact_email:  String,
  #[serde(default)]
  pub website:        Option<String>,
}

impl Institution {
  /// A pending institution built from `enrollment`.
  ///
  /// The college name must not be blank and the contact email must look
  /// like one. The contact becomes the institution's admin; it starts with
  /// no students.
  pub fn from_enrollment(
    id: InstitutionId,
    enrollment: Enrollment,
  ) -> Result<Self> {
    let name = enrollment.college_name.trim();
    if name.is_empty() {
      return Err(Error::InvalidField {
        field: "college_name",
        value: enrollment.college_name,
      });
    }
    let email = enrollment.contact_email.trim();
    if !email.contains('@') {
      return Err(Error::InvalidField {
        field: "contact_email",
        value: enrollment.contact_email,
      });
    }

    Ok(Self {
      id,
      name: name.to_string(),
      admin: email.to_string(),
      district: enrollment.district,
      kind: enrollment.kind,
      status: EnrollmentStatus::Pending,
      students: 0,
      autonomous: enrollment.autonomous,
      naac_grade: Some(enrollment.naac_grade),
      nba_accredited: enrollment.nba_accredited,
      website: enrollment
        .website
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty()),
    })
  }
}

// ─── Organizer directory ─────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrganizerStatus {
  Active,
  Inactive,
}

/// A faculty member on the organizer roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyOrganizer {
  pub id:            String,
  pub name:          String,
  pub email:         String,
  pub department:    String,
  /// Academic title, e.g. "Professor" or "HOD".
  pub title:         String,
  pub status:        OrganizerStatus,
  pub events_hosted: u32,
}
