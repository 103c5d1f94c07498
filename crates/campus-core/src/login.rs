//! The demo login surface.
//!
//! Four fixed accounts, matched by email alone. The password is accepted but
//! never checked; there is no credential store behind this.

use serde::Serialize;
use tracing::{info, warn};

use crate::{
  Error, Result,
  nav::{View, landing_view},
  store::CampusStore,
  user::{Profile, User},
};

/// A successful login: who is now signed in and where they should land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
  pub user:    User,
  pub landing: View,
}

fn account(id: &str, name: &str, email: &str, profile: Profile) -> User {
  User {
    id: id.into(),
    name: name.into(),
    email: email.into(),
    profile,
  }
}

/// The canned users behind the demo emails.
pub fn demo_accounts() -> Vec<User> {
  vec![
    account("a1", "Dr. Principal", "admin@college.edu", Profile::Administrator {
      institution: "Anna University".into(),
      district:    "Chennai".into(),
    }),
    account(
      "o1",
      "Dr. Sarah Wilson",
      "organizer@college.edu",
      Profile::Organizer {
        department:  "Computer Science".into(),
        institution: "Anna University".into(),
        district:    "Chennai".into(),
      },
    ),
    account("s1", "John Student", "student@college.edu", Profile::Participant {
      institution:       "Anna University".into(),
      district:          "Chennai".into(),
      profile_completed: false,
      academic:          None,
    }),
    account(
      "m1",
      "Management Office",
      "management@college.edu",
      Profile::Management,
    ),
  ]
}

/// Look up the demo account for `email`. Surrounding whitespace is ignored;
/// the comparison is otherwise exact.
pub fn lookup(email: &str) -> Option<User> {
  let email = email.trim();
  demo_accounts().into_iter().find(|u| u.email == email)
}

/// Sign in as the demo account for `email` and install it as the store's
/// current user.
///
/// An unknown email fails with [`Error::InvalidCredentials`] and leaves the
/// current session as it was.
pub fn login<S>(store: &S, email: &str, _password: &str) -> Result<Session>
where
  S: CampusStore + ?Sized,
{
  let Some(user) = lookup(email) else {
    warn!(email, "login rejected: unknown account");
    return Err(Error::InvalidCredentials);
  };

  info!(user = %user.id, role = %user.role(), "logged in");
  let landing = landing_view(user.role());
  store.set_current_user(Some(user.clone()));
  Ok(Session { user, landing })
}

/// Clear the current session.
pub fn logout<S>(store: &S)
where
  S: CampusStore + ?Sized,
{
  if let Some(user) = store.set_current_user(None) {
    info!(user = %user.id, "logged out");
  }
}
