//! Shared utilities for the suara workspace.

pub mod fmt;
pub mod logging;

pub use fmt::short_hash;
pub use logging::init_tracing;
