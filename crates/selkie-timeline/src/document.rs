//! Persisted timeline documents.
//!
//! The canvas stores its keyframes inside the project document; this module
//! decodes and structurally validates that section. Date strings are
//! deliberately *not* validated here: legacy documents carry malformed dates
//! and must keep loading, so [`crate::date::DateScale`] recovers per value at
//! interpolation time instead.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::date;
use crate::keyframe::Keyframe;

pub type Result<T> = std::result::Result<T, TimelineError>;

#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("Invalid timeline JSON: {message}")]
    InvalidJson { message: String },

    #[error("Duplicate keyframe id: {id}")]
    DuplicateKeyframeId { id: String },

    #[error("Keyframe at index {index} has an empty id")]
    EmptyKeyframeId { index: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineDocument {
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

impl TimelineDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: Self = serde_json::from_str(text).map_err(|err| TimelineError::InvalidJson {
            message: err.to_string(),
        })?;
        doc.validate()?;
        Ok(doc)
    }

    /// Structural validation: ids must be present and unique. Malformed dates
    /// only warn.
    pub fn validate(&self) -> Result<()> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for (index, frame) in self.keyframes.iter().enumerate() {
            if frame.id.is_empty() {
                return Err(TimelineError::EmptyKeyframeId { index });
            }
            if !seen.insert(frame.id.as_str()) {
                return Err(TimelineError::DuplicateKeyframeId {
                    id: frame.id.clone(),
                });
            }
            if !date::is_valid(&frame.date) {
                tracing::warn!(
                    keyframe = frame.id.as_str(),
                    date = frame.date.as_str(),
                    "keyframe has a malformed date, it will fall back to the current year"
                );
            }
        }
        Ok(())
    }
}
