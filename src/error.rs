//! Error types for the morphology engine.

use crate::core::types::{Stem, SubjectAgreement, Tense, VerbType};
use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating, analyzing or exporting forms.
#[derive(Debug, Error)]
pub enum Error {
    /// A character outside the supported Ethiopic syllable range.
    #[error("unknown character {ch:?}")]
    UnknownCharacter { ch: char },

    /// A vowel order the consonant's block does not encode. Indicates a
    /// template or table bug, never bad user input.
    #[error("order {order} is not encoded for radical {radical}")]
    InvalidOrder { radical: char, order: u8 },

    /// Wrong radical count or non-consonant input.
    #[error("invalid root: {0}")]
    InvalidRoot(String),

    /// The verb type has no template for this stem/tense/subject slot.
    #[error("no {tense} {stem} form for a {verb_type} verb with subject {agreement}")]
    UnsupportedCombination {
        verb_type: VerbType,
        stem: Stem,
        tense: Tense,
        agreement: SubjectAgreement,
    },

    /// The verb type does not form this stem productively.
    #[error("{verb_type} verbs have no {stem} stem")]
    UnsupportedStemForType { verb_type: VerbType, stem: Stem },

    /// A stem, tense or subject name that does not parse.
    #[error("unknown feature name: {0}")]
    UnknownFeature(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

impl Error {
    /// True for the "no such form" outcomes that enumerators skip rather
    /// than propagate.
    pub fn is_not_applicable(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedCombination { .. } | Error::UnsupportedStemForType { .. }
        )
    }
}
