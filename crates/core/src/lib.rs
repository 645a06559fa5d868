//! Domain types for the plinth API base layer.
//!
//! Pure logic only: error kinds and validation violation types, with no
//! HTTP or I/O dependencies. The `plinth-api` crate maps these onto the
//! wire.

pub mod error;
pub mod validation;
