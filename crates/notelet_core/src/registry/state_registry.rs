//! Application state registry.
//!
//! # Responsibility
//! - Own the reactive stores for authentication and notes state.
//! - Guard the application bootstrap path to one construction per process.
//!
//! # Invariants
//! - `bootstrap` succeeds at most once per process.
//! - A fresh registry starts signed out with an empty notes collection.
//!
//! # See also
//! - docs/architecture/state-layer.md

use crate::model::auth::AuthState;
use crate::model::note::NotesCollection;
use crate::store::value_store::ValueStore;
use log::{info, warn};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};

static BOOTSTRAP_GUARD: OnceCell<()> = OnceCell::new();

/// Registry construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The process-wide registry was already constructed.
    AlreadyBootstrapped,
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyBootstrapped => {
                write!(f, "state registry already bootstrapped in this process")
            }
        }
    }
}

impl Error for RegistryError {}

/// Owner of the application state stores.
///
/// The registry is constructed explicitly and passed to whatever consumes it.
/// External collaborators write through the `_mut` accessors: the identity
/// provider replaces auth state on sign-in/sign-out, the document-store
/// collaborator replaces the notes collection after fetches and mutations.
#[derive(Debug, Default)]
pub struct StateRegistry {
    auth: ValueStore<AuthState>,
    notes: ValueStore<NotesCollection>,
}

impl StateRegistry {
    /// Creates an unguarded registry, signed out and with no notes.
    ///
    /// Intended for dependency injection and test isolation. Application
    /// entry points should call [`StateRegistry::bootstrap`] instead.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the one process-wide registry.
    ///
    /// # Errors
    /// - Returns [`RegistryError::AlreadyBootstrapped`] on every call after
    ///   the first, whatever became of the first instance.
    pub fn bootstrap() -> Result<Self, RegistryError> {
        if BOOTSTRAP_GUARD.set(()).is_err() {
            warn!(
                "event=registry_bootstrap module=registry status=rejected reason=already_bootstrapped"
            );
            return Err(RegistryError::AlreadyBootstrapped);
        }

        info!("event=registry_bootstrap module=registry status=ok stores=auth,notes");
        Ok(Self::new())
    }

    /// Read access to the authentication store.
    pub fn auth(&self) -> &ValueStore<AuthState> {
        &self.auth
    }

    /// Write/subscribe access to the authentication store.
    pub fn auth_mut(&mut self) -> &mut ValueStore<AuthState> {
        &mut self.auth
    }

    /// Read access to the notes store.
    pub fn notes(&self) -> &ValueStore<NotesCollection> {
        &self.notes
    }

    /// Write/subscribe access to the notes store.
    pub fn notes_mut(&mut self) -> &mut ValueStore<NotesCollection> {
        &mut self.notes
    }
}
