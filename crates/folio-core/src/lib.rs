//! Core types and trait definitions for the Folio portfolio service.
//!
//! Holds the static catalog, the row → presentation normaliser and the
//! reconciler that merges the two. Free of HTTP and database dependencies.

// Native `async fn` in traits; the returned futures carry explicit `Send`
// bounds in the trait signatures.
#![allow(async_fn_in_trait)]

pub mod catalog;
pub mod content;
pub mod error;
pub mod media;
pub mod normalize;
pub mod page;
pub mod position;
pub mod reconcile;
pub mod row;
pub mod store;

pub use error::{Error, Result};
