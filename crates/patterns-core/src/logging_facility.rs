//! Structured logging facility
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Library code only emits events; installing a subscriber is left to the
//! binary (or to a test via `init_test_capture`).
//!
//! # Usage
//!
//! ```rust
//! use patterns_core::logging_facility::{init, LogProfile};
//!
//! // Initialize once at application startup
//! init(LogProfile::Development);
//! ```
//!
//! # Logging Macros
//!
//! - `log_op_start!(op, ...)` - Log operation start
//! - `log_op_end!(op, duration_ms = ...)` - Log operation end
//! - `log_op_error!(op, err, duration_ms = ...)` - Log operation error

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, LogProfile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
