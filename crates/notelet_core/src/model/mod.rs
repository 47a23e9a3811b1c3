//! Domain data model distributed through the state layer.
//!
//! # Responsibility
//! - Define the auth and note shapes shared by UI and external collaborators.
//! - Mirror the persisted document field names on the wire.
//!
//! # Invariants
//! - Identity and persistence handles are opaque: minted externally, passed
//!   through unchanged, never parsed here.
//! - State values are replaced wholesale, never partially mutated in place.
//!
//! # See also
//! - docs/architecture/state-layer.md

pub mod auth;
pub mod note;
