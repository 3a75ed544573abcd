//! Infrastructure Layer - Repository implementations

pub mod memory;
