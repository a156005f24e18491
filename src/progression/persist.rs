//! Versioned persistence document.
//!
//! The store performs no I/O itself — hosts load a document at startup and
//! save from the store's on-change callback (debounced or not, their
//! call). The document is the progression record plus a schema version,
//! flattened into one JSON object.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::level_engine::models::ALL_SUBJECTS;
use crate::progression::state::Progression;

/// Bump on any breaking change to the persisted shape.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct SaveDocument {
    version: u32,
    #[serde(flatten)]
    progression: Progression,
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("could not parse save document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("save document version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Encode the current state for storage.
pub fn to_json(progression: &Progression) -> String {
    let doc = SaveDocument {
        version: SCHEMA_VERSION,
        progression: progression.clone(),
    };
    serde_json::to_string(&doc).expect("progression state always serializes")
}

/// Decode a stored document.
///
/// Documents written by a newer app version are rejected rather than
/// half-read; older documents pick up defaults for missing fields.
pub fn from_json(raw: &str) -> Result<Progression, PersistError> {
    let doc: SaveDocument = serde_json::from_str(raw)?;
    if doc.version > SCHEMA_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: doc.version,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(normalize(doc.progression))
}

/// Backfill anything an older document may be missing.
fn normalize(mut progression: Progression) -> Progression {
    for subject in ALL_SUBJECTS {
        progression
            .per_subject_stats
            .entry(subject.key().to_string())
            .or_default();
    }
    progression
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_state() {
        let mut state = Progression::default();
        state.stars = 42;
        state.badges.push("First Star".to_string());
        let restored = from_json(&to_json(&state)).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn newer_version_is_rejected() {
        let raw = to_json(&Progression::default()).replace("\"version\":1", "\"version\":99");
        match from_json(&raw) {
            Err(PersistError::UnsupportedVersion { found: 99, .. }) => {}
            other => panic!("expected UnsupportedVersion, got {other:?}"),
        }
    }

    #[test]
    fn missing_subject_keys_are_backfilled() {
        let raw = r#"{"version":1,"stars":7}"#;
        let restored = from_json(raw).unwrap();
        assert_eq!(restored.stars, 7);
        assert_eq!(restored.per_subject_stats.len(), 11);
    }
}
