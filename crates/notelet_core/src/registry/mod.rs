//! Application-level state registry.
//!
//! # Responsibility
//! - Compose the concrete stores consumed by the application.
//! - Keep construction explicit so initialization order and test isolation
//!   stay visible at call sites.
//!
//! # See also
//! - docs/architecture/state-layer.md

pub mod state_registry;
