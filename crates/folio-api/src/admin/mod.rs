//! Authenticated write endpoints behind the admin panel.
//!
//! Every handler here takes [`AdminState`](crate::AdminState). Authentication
//! is layered on by the server; these handlers assume the caller is trusted.

pub mod dashboard;
pub mod experiences;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod uploads;
