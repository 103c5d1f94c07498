//! Turning the raw "create event" form into an [`EventDraft`].

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::{
  Error, Result,
  event::{EventDraft, Organizer},
  user::User,
};

fn default_category() -> String { "Technical".into() }

/// The create-event form exactly as submitted. Every field is text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventForm {
  pub title:                 String,
  pub description:           String,
  #[serde(default = "default_category")]
  pub category:              String,
  /// `YYYY-MM-DD`.
  pub date:                  String,
  /// `HH:MM`, with or without seconds.
  pub time:                  String,
  pub venue:                 String,
  pub budget:                String,
  pub expected_participants: String,
  /// One objective per line.
  pub objectives:            String,
}

/// Leading-digit integer parse with an optional `+` sign. Anything without
/// leading digits, including a negative number, is zero; digit runs too long
/// for a `u64` saturate.
pub fn coerce_count(raw: &str) -> u64 {
  let raw = raw.trim_start();
  let unsigned = raw.strip_prefix('+').unwrap_or(raw);
  unsigned
    .chars()
    .map_while(|c| c.to_digit(10))
    .fold(0u64, |n, d| n.saturating_mul(10).saturating_add(u64::from(d)))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
    Error::InvalidField {
      field: "date",
      value: raw.to_string(),
    }
  })
}

fn parse_time(raw: &str) -> Result<NaiveTime> {
  let raw_trimmed = raw.trim();
  NaiveTime::parse_from_str(raw_trimmed, "%H:%M")
    .or_else(|_| NaiveTime::parse_from_str(raw_trimmed, "%H:%M:%S"))
    .map_err(|_| Error::InvalidField {
      field: "time",
      value: raw.to_string(),
    })
}

/// The organizer block for a draft submitted by `user`. Fields the user's
/// profile lacks fall back to placeholders.
pub fn organizer_for(user: Option<&User>) -> Organizer {
  let profile = user.map(|u| &u.profile);
  Organizer {
    id:          user.map_or_else(|| "unknown".into(), |u| u.id.clone()),
    name:        user.map_or_else(|| "Anonymous".into(), |u| u.name.clone()),
    department:  profile
      .and_then(|p| p.department())
      .unwrap_or("General")
      .to_string(),
    institution: profile
      .and_then(|p| p.institution())
      .unwrap_or("Institutional")
      .to_string(),
    district:    profile
      .and_then(|p| p.district())
      .unwrap_or("General")
      .to_string(),
  }
}

impl EventForm {
  /// Build the draft `user` is submitting.
  ///
  /// Budget and expected participants never fail: malformed input becomes
  /// zero. Capacity is the expected participant count. Date and time must
  /// parse.
  pub fn into_draft(self, user: Option<&User>) -> Result<EventDraft> {
    let date = parse_date(&self.date)?;
    let time = parse_time(&self.time)?;
    let expected =
      u32::try_from(coerce_count(&self.expected_participants))
        .unwrap_or(u32::MAX);

    Ok(EventDraft {
      title: self.title,
      description: self.description,
      category: self.category,
      date,
      time,
      venue: self.venue,
      organizer: organizer_for(user),
      budget: Some(coerce_count(&self.budget)),
      expected_participants: expected,
      objectives: self
        .objectives
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect(),
      capacity: expected,
      outcomes: None,
      winners: None,
    })
  }
}
