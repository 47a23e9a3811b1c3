//! Note document model.
//!
//! # Responsibility
//! - Define the note shape shared by UI consumers and the document-store
//!   collaborator.
//! - Carry the persistence handle of each fetched note unchanged.
//!
//! # Invariants
//! - `DocumentRef` addresses a persisted record; only the document-store
//!   collaborator may interpret it.
//! - `author_id` references an identity minted by the identity provider.
//! - Collection order mirrors the source query; duplicates are the caller's
//!   concern.
//!
//! # See also
//! - docs/architecture/state-layer.md

use crate::model::auth::UserId;
use serde::{Deserialize, Serialize};

/// Opaque persistence capability minted by the document-store collaborator.
///
/// The state layer passes this handle through byte-for-byte; callers hand it
/// back to the collaborator to re-fetch, update or delete the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentRef(String);

impl DocumentRef {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token, for hand-back to the minting collaborator.
    pub fn token(&self) -> &str {
        &self.0
    }
}

/// Editable note content as shown and persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Short user-facing heading.
    pub title: String,
    /// Serialized as `note` to match the persisted document field.
    #[serde(rename = "note")]
    pub body: String,
    /// Identity that owns this note.
    pub author_id: UserId,
    /// Favorite marker toggled from the UI.
    pub liked: bool,
}

impl Note {
    /// Creates a note that starts unliked.
    pub fn new(title: impl Into<String>, body: impl Into<String>, author_id: UserId) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            author_id,
            liked: false,
        }
    }

    /// Flips the favorite marker.
    pub fn toggle_liked(&mut self) {
        self.liked = !self.liked;
    }
}

/// A note joined with the handle addressing its persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDocument {
    /// Content fields, flattened into the document body on the wire.
    #[serde(flatten)]
    pub note: Note,
    /// Serialized as `ref` to match the persisted document field.
    #[serde(rename = "ref")]
    pub doc_ref: DocumentRef,
}

impl NoteDocument {
    pub fn new(note: Note, doc_ref: DocumentRef) -> Self {
        Self { note, doc_ref }
    }
}

/// Ordered working set of fetched notes.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NotesCollection = Vec<NoteDocument>;
