//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Wall-clock abstraction (swappable for tests)
//! - Countdown duration formatting
//! - Uniform random selection helpers

pub mod clock;
pub mod duration;
pub mod pick;
