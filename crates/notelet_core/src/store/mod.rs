//! Reactive state container primitives.
//!
//! # Responsibility
//! - Provide the generic observable value holder used by the registry.
//! - Keep observer bookkeeping explicit and framework-free.
//!
//! # Invariants
//! - Containers never fail: every operation is total over well-typed input.
//! - Notification delivery is synchronous on the caller's thread of control.
//!
//! # See also
//! - docs/architecture/state-layer.md

pub mod value_store;
