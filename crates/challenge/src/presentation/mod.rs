//! Presentation Layer
//!
//! Read-only view projection of the session plus the adapter seam that
//! frontends implement. Nothing here mutates state.

pub mod adapter;
pub mod view;
