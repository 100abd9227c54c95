//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of an
//! audit run:
//! - HTTP client (timeouts, redirect cap, User-Agent)
//! - Logger

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
