//! Read-side filters and counters over a store snapshot.
//!
//! Nothing here touches the store; every function takes the slice returned by
//! [`crate::store::CampusStore::events`] (or one of the directory reads) and
//! hands back clones, so `Arc` results keep the identity of the records they
//! came from.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
  directory::{EnrollmentStatus, FacultyOrganizer, Institution},
  event::{EventProposal, EventStatus},
  user::UserId,
};

/// Which slice of the collection a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Listing {
  #[default]
  All,
  /// The approval queue.
  Pending,
  /// Approved or active.
  Upcoming,
  Completed,
  /// What participants browse: approved only.
  Explore,
}

/// Parameters for [`EventQuery::apply`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventQuery {
  #[serde(default)]
  pub view:        Listing,
  /// Case-insensitive substring match. Upcoming and completed listings search
  /// title and department; everything else searches title and institution.
  pub search:      Option<String>,
  /// Exact category match.
  pub category:    Option<String>,
  pub district:    Option<String>,
  pub institution: Option<String>,
  /// Only events proposed by this organizer.
  pub organizer:   Option<UserId>,
}

impl EventQuery {
  pub fn listing(view: Listing) -> Self {
    Self {
      view,
      ..Self::default()
    }
  }

  pub fn matches(&self, event: &EventProposal) -> bool {
    let in_view = match self.view {
      Listing::All => true,
      Listing::Pending => event.status == EventStatus::Pending,
      Listing::Upcoming => event.status.is_upcoming(),
      Listing::Completed => event.status == EventStatus::Completed,
      Listing::Explore => event.status == EventStatus::Approved,
    };

    in_view
      && self.matches_search(event)
      && same(&self.category, &event.category)
      && same(&self.district, &event.organizer.district)
      && same(&self.institution, &event.organizer.institution)
      && self.organizer.as_ref().is_none_or(|id| id == &event.organizer.id)
  }

  fn matches_search(&self, event: &EventProposal) -> bool {
    let Some(term) = self.search.as_deref().map(str::to_lowercase) else {
      return true;
    };
    let secondary = match self.view {
      Listing::Upcoming | Listing::Completed => &event.organizer.department,
      _ => &event.organizer.institution,
    };
    event.title.to_lowercase().contains(&term)
      || secondary.to_lowercase().contains(&term)
  }

  /// Matching records, in collection order.
  pub fn apply(
    &self,
    events: &[Arc<EventProposal>],
  ) -> Vec<Arc<EventProposal>> {
    events.iter().filter(|e| self.matches(e)).cloned().collect()
  }
}

fn same(filter: &Option<String>, value: &str) -> bool {
  filter.as_deref().is_none_or(|f| f == value)
}

/// The last `n` records, most recent first.
pub fn recent(
  events: &[Arc<EventProposal>],
  n: usize,
) -> Vec<Arc<EventProposal>> {
  events.iter().rev().take(n).cloned().collect()
}

// ─── Dashboard ───────────────────────────────────────────────────────────────

/// Headline counters for the dashboards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
  pub total_events:        usize,
  pub pending:             usize,
  pub approved:            usize,
  pub rejected:            usize,
  pub completed:           usize,
  /// Sum of `current_registrations` across every record.
  pub total_registrations: u64,
  /// Sum of budgets, saturating; records without one count as zero.
  pub total_budget:        u64,
}

impl DashboardStats {
  pub fn compute(events: &[Arc<EventProposal>]) -> Self {
    let mut stats = Self {
      total_events: events.len(),
      ..Self::default()
    };
    for e in events {
      match e.status {
        EventStatus::Pending => stats.pending += 1,
        EventStatus::Approved => stats.approved += 1,
        EventStatus::Rejected => stats.rejected += 1,
        EventStatus::Completed => stats.completed += 1,
        EventStatus::Active => {}
      }
      stats.total_registrations += u64::from(e.current_registrations);
      stats.total_budget =
        stats.total_budget.saturating_add(e.budget.unwrap_or(0));
    }
    stats
  }
}

// ─── Directories ─────────────────────────────────────────────────────────────

/// Query string for the directory listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryQuery {
  pub search: Option<String>,
}

fn contains_ci(haystack: &str, term: &str) -> bool {
  haystack.to_lowercase().contains(term)
}

/// Institutions whose name, admin or district contains `term`, ignoring
/// case. No term matches everything.
pub fn search_institutions(
  institutions: &[Arc<Institution>],
  term: Option<&str>,
) -> Vec<Arc<Institution>> {
  let term = term.map(str::to_lowercase).unwrap_or_default();
  institutions
    .iter()
    .filter(|i| {
      contains_ci(&i.name, &term)
        || contains_ci(&i.admin, &term)
        || contains_ci(&i.district, &term)
    })
    .cloned()
    .collect()
}

/// Organizers whose name or department contains `term`, ignoring case.
pub fn search_organizers(
  organizers: &[FacultyOrganizer],
  term: Option<&str>,
) -> Vec<FacultyOrganizer> {
  let term = term.map(str::to_lowercase).unwrap_or_default();
  organizers
    .iter()
    .filter(|o| {
      contains_ci(&o.name, &term) || contains_ci(&o.department, &term)
    })
    .cloned()
    .collect()
}

/// Totals for the management overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
  pub total_institutions: usize,
  pub active:             usize,
  pub pending:            usize,
  pub total_students:     u64,
}

impl DirectoryStats {
  pub fn compute(institutions: &[Arc<Institution>]) -> Self {
    let mut stats = Self {
      total_institutions: institutions.len(),
      ..Self::default()
    };
    for i in institutions {
      match i.status {
        EnrollmentStatus::Active => stats.active += 1,
        EnrollmentStatus::Pending => stats.pending += 1,
      }
      stats.total_students += u64::from(i.students);
    }
    stats
  }
}
