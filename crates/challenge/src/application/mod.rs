//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic, the countdown ticker, and the
//! presentation adapter. Contains the session service and its config.

pub mod config;
pub mod service;
pub mod ticker;
