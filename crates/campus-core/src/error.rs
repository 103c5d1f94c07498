//! Error types for `campus-core`.

use thiserror::Error;

use crate::event::EventId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("Invalid email or password")]
  InvalidCredentials,

  #[error("event not found: {0}")]
  EventNotFound(EventId),

  #[error("event {0} is not open for registration")]
  RegistrationClosed(EventId),

  #[error("already registered for event {0}")]
  AlreadyRegistered(EventId),

  #[error("event {0} has reached its capacity")]
  CapacityReached(EventId),

  #[error("invalid {field}: {value:?}")]
  InvalidField { field: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
