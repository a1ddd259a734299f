//! Chord dictionary mapping chord names to fingering diagrams.
//!
//! The built-in table ships with the library as JSON and is parsed once on
//! first use. Hosts may load their own table from a string or a file.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{DictionaryError, RenderError};
use crate::model::ChordDefinition;

const BUILTIN_CHORDS: &str = include_str!("../assets/chords.json");

/// Immutable lookup table from chord name (`"C#m7"`) to its diagram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChordDictionary {
    chords: BTreeMap<String, ChordDefinition>,
}

impl ChordDictionary {
    /// The dictionary bundled with the library.
    pub fn builtin() -> &'static ChordDictionary {
        static BUILTIN: OnceLock<ChordDictionary> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            ChordDictionary::from_json(BUILTIN_CHORDS).unwrap_or_else(|err| {
                tracing::error!(%err, "built-in chord dictionary failed to parse");
                ChordDictionary::default()
            })
        })
    }

    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let dict: ChordDictionary = serde_json::from_str(json)?;
        tracing::debug!(chords = dict.len(), "chord dictionary loaded");
        Ok(dict)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn get(&self, name: &str) -> Option<&ChordDefinition> {
        self.chords.get(name)
    }

    /// Like [`get`](Self::get), but a missing entry is an error.
    pub fn lookup(&self, name: &str) -> Result<&ChordDefinition, RenderError> {
        self.get(name)
            .ok_or_else(|| RenderError::MissingChordDefinition(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.chords.contains_key(name)
    }

    /// Chord names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.chords.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

impl FromIterator<(String, ChordDefinition)> for ChordDictionary {
    fn from_iter<I: IntoIterator<Item = (String, ChordDefinition)>>(iter: I) -> Self {
        Self { chords: iter.into_iter().collect() }
    }
}
