//! Common test utilities and helpers
//!
//! - Custom assertion macros
//! - Capture of `tracing` events emitted by the code under test


pub use logs::*;
