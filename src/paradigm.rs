// File: src/paradigm.rs
//! One conjugation slot across roots of different verb types.

use crate::core::classifier::classify;
use crate::core::conjugator::generate;
use crate::core::types::{Root, SlotNote, Stem, SubjectAgreement, Tense, VerbType, VowelOrder};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One exemplar root per verb type, in variant order.
const REFERENCE_ROOTS: [&str; 8] = [
    "ቀተለ", "ቀደሰ", "በረከ", "ወለደ", "ሰተየ", "ሰአለ", "ደንገጸ", "ተንበለ",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParadigmRow {
    pub root: Root,
    pub verb_type: VerbType,
    /// `None` when the slot has no form for this root.
    pub surface: Option<String>,
    pub root_orders: Vec<Option<VowelOrder>>,
    /// Overrides that fired on any slot, in slot order.
    pub notes: Vec<SlotNote>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParadigmTable {
    pub stem: Stem,
    pub tense: Tense,
    pub agreement: SubjectAgreement,
    pub rows: Vec<ParadigmRow>,
}

pub struct ParadigmComparator;

impl ParadigmComparator {
    /// Runs the slot against each root, in the order given.
    pub fn compare(
        roots: &[Root],
        stem: Stem,
        tense: Tense,
        agreement: SubjectAgreement,
    ) -> Result<ParadigmTable> {
        let mut rows = Vec::with_capacity(roots.len());
        for root in roots {
            let row = match generate(root, stem, tense, agreement) {
                Ok(form) => ParadigmRow {
                    root: root.clone(),
                    verb_type: form.verb_type,
                    root_orders: form.root_orders(),
                    notes: form.slots.iter().flat_map(|s| s.notes.iter().copied()).collect(),
                    surface: Some(form.surface),
                },
                Err(e) if e.is_not_applicable() => ParadigmRow {
                    root: root.clone(),
                    verb_type: classify(root),
                    surface: None,
                    root_orders: Vec::new(),
                    notes: Vec::new(),
                },
                Err(e) => return Err(e),
            };
            rows.push(row);
        }
        Ok(ParadigmTable { stem, tense, agreement, rows })
    }

    pub fn reference_roots() -> Vec<Root> {
        REFERENCE_ROOTS
            .iter()
            .filter_map(|s| Root::parse(s).ok())
            .collect()
    }
}
