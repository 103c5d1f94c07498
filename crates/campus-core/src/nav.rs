//! Role-specific navigation.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::user::Role;

/// A named screen of the portal.
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
pub enum View {
  Dashboard,
  Approvals,
  Upcoming,
  Active,
  Completed,
  Reports,
  Organizers,
  Settings,
  Create,
  Certificates,
  Explore,
  Registered,
  Profile,
  Institutions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
  pub label: &'static str,
  pub view:  View,
}

const fn item(label: &'static str, view: View) -> NavItem {
  NavItem { label, view }
}

const ADMINISTRATOR: &[NavItem] = &[
  item("Dashboard", View::Dashboard),
  item("Event Approvals", View::Approvals),
  item("Upcoming Events", View::Upcoming),
  item("Completed Events", View::Completed),
  item("Reports & Exports", View::Reports),
  item("Organizers", View::Organizers),
  item("Settings", View::Settings),
];

const ORGANIZER: &[NavItem] = &[
  item("My Dashboard", View::Dashboard),
  item("Create Event", View::Create),
  item("Active Events", View::Active),
  item("Completed", View::Completed),
  item("Certificates", View::Certificates),
  item("Accreditation Reports", View::Reports),
];

const PARTICIPANT: &[NavItem] = &[
  item("Explore Events", View::Explore),
  item("My Registered", View::Registered),
  item("My Certificates", View::Certificates),
  item("Profile", View::Profile),
];

const MANAGEMENT: &[NavItem] = &[
  item("Overview", View::Dashboard),
  item("Institutions", View::Institutions),
];

/// Navigation entries for `role`, in display order. No session, no entries.
pub fn navigation(role: Option<Role>) -> &'static [NavItem] {
  match role {
    Some(Role::Administrator) => ADMINISTRATOR,
    Some(Role::Organizer) => ORGANIZER,
    Some(Role::Participant) => PARTICIPANT,
    Some(Role::Management) => MANAGEMENT,
    None => &[],
  }
}

/// Where a freshly logged-in user lands.
pub fn landing_view(role: Role) -> View {
  match role {
    Role::Participant => View::Explore,
    _ => View::Dashboard,
  }
}
