// File: src/core/stem.rs
use crate::core::classifier::classify;
use crate::core::types::{Radical, Root, Stem, VerbType};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const TE: Radical = Radical::new_unchecked('ተ');
pub const ALEF: Radical = Radical::new_unchecked('አ');
pub const SAT: Radical = Radical::new_unchecked('ሰ');

/// The consonants of a stem before any vowel is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsonantSkeleton {
    /// Grammatical consonants prepended by the stem, in writing order.
    pub affixes: Vec<Radical>,
    /// The root radicals, unchanged and in order.
    pub radicals: Vec<Radical>,
    /// Reciprocal stems lengthen C1 and need their own vowel template.
    pub reciprocal_pattern: bool,
}

impl ConsonantSkeleton {
    pub fn consonants(&self) -> impl Iterator<Item = Radical> + '_ {
        self.affixes.iter().chain(self.radicals.iter()).copied()
    }

    pub fn len(&self) -> usize {
        self.affixes.len() + self.radicals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Whether `verb_type` forms `stem` at all.
pub fn supports(verb_type: VerbType, stem: Stem) -> bool {
    match (verb_type, stem) {
        (VerbType::Quadriliteral, Stem::Reciprocal) => false,
        (
            VerbType::PrefixedQuadriliteral,
            Stem::Passive | Stem::CausativePassive | Stem::Reciprocal,
        ) => false,
        (VerbType::LongVowel, Stem::Reciprocal) => false,
        _ => true,
    }
}

/// Consonants the stem writes before the root.
pub fn affixes(stem: Stem) -> &'static [Radical] {
    match stem {
        Stem::Basic => &[],
        Stem::Passive | Stem::Reciprocal => &[TE],
        Stem::Causative => &[ALEF],
        Stem::CausativePassive => &[ALEF, SAT, TE],
    }
}

/// Applies the stem's affix rule to a root.
pub fn derive_skeleton(root: &Root, stem: Stem) -> Result<ConsonantSkeleton> {
    derive_classified(root, classify(root), stem)
}

pub(crate) fn derive_classified(
    root: &Root,
    verb_type: VerbType,
    stem: Stem,
) -> Result<ConsonantSkeleton> {
    if !supports(verb_type, stem) {
        return Err(Error::UnsupportedStemForType { verb_type, stem });
    }
    Ok(ConsonantSkeleton {
        affixes: affixes(stem).to_vec(),
        radicals: root.radicals().to_vec(),
        reciprocal_pattern: stem == Stem::Reciprocal,
    })
}
