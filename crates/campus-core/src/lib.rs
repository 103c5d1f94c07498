//! Core types and trait definitions for the CampusSync event portal.
//!
//! This crate is deliberately free of HTTP dependencies. The store backend and
//! the API layer depend on it; it depends on nothing proprietary.

pub mod directory;
pub mod draft;
pub mod error;
pub mod event;
pub mod login;
pub mod nav;
pub mod query;
pub mod seed;
pub mod store;
pub mod user;

pub use error::{Error, Result};
