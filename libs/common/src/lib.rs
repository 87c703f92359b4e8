//! Common library for the Flow streaming platform
//!
//! This crate provides shared functionality used across the streaming
//! services, including database connectivity and error handling.

pub mod database;
pub mod error;
