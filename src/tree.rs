// File: src/tree.rs
//! Full conjugation tree of one root.

use crate::core::classifier::classify;
use crate::core::conjugator::generate;
use crate::core::types::{ConjugatedForm, Root, Stem, SubjectAgreement, Tense, VerbType};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One cell of the tree: a form, or the reason none exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Form(ConjugatedForm),
    NotApplicable(String),
}

impl Cell {
    pub fn form(&self) -> Option<&ConjugatedForm> {
        match self {
            Cell::Form(form) => Some(form),
            Cell::NotApplicable(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub stem: Stem,
    pub tense: Tense,
    pub agreement: SubjectAgreement,
    pub cell: Cell,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootTree {
    pub root: Root,
    pub verb_type: VerbType,
    /// Stem-major, then tense, then agreement, in variant order.
    pub entries: Vec<TreeEntry>,
}

impl RootTree {
    pub fn forms(&self) -> impl Iterator<Item = &ConjugatedForm> {
        self.entries.iter().filter_map(|e| e.cell.form())
    }

    pub fn get(&self, stem: Stem, tense: Tense, agreement: SubjectAgreement) -> Option<&Cell> {
        self.entries
            .iter()
            .find(|e| e.stem == stem && e.tense == tense && e.agreement == agreement)
            .map(|e| &e.cell)
    }

    pub fn not_applicable_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.cell, Cell::NotApplicable(_)))
            .count()
    }
}

pub struct RootTreeBuilder;

impl RootTreeBuilder {
    /// Generates every (stem, tense, agreement) cell. Unsupported cells are
    /// recorded; any other failure aborts the build.
    pub fn build(root: &Root) -> Result<RootTree> {
        let mut entries =
            Vec::with_capacity(Stem::ALL.len() * Tense::ALL.len() * SubjectAgreement::ALL.len());
        for stem in Stem::ALL {
            for tense in Tense::ALL {
                for agreement in SubjectAgreement::ALL {
                    let cell = match generate(root, stem, tense, agreement) {
                        Ok(form) => Cell::Form(form),
                        Err(e) if e.is_not_applicable() => Cell::NotApplicable(e.to_string()),
                        Err(e) => return Err(e),
                    };
                    entries.push(TreeEntry { stem, tense, agreement, cell });
                }
            }
        }
        let tree = RootTree { root: root.clone(), verb_type: classify(root), entries };
        debug!(
            %root,
            forms = tree.forms().count(),
            not_applicable = tree.not_applicable_count(),
            "expanded root"
        );
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_slot() {
        let tree = RootTreeBuilder::build(&Root::parse("ቀተለ").unwrap()).unwrap();
        assert_eq!(tree.entries.len(), 5 * 5 * 10);
        // Only the six non-second-person imperatives per stem are missing.
        assert_eq!(tree.not_applicable_count(), 5 * 6);
        let cell = tree.get(Stem::Basic, Tense::Imperfective, SubjectAgreement::ThirdMascSg);
        assert_eq!(cell.and_then(Cell::form).map(|f| f.surface.as_str()), Some("ይቀትል"));
    }

    #[test]
    fn unsupported_stems_become_cells() {
        let tree = RootTreeBuilder::build(&Root::parse("ተንበለ").unwrap()).unwrap();
        assert_eq!(tree.verb_type, VerbType::PrefixedQuadriliteral);
        let cell = tree.get(Stem::Passive, Tense::Perfective, SubjectAgreement::ThirdMascSg);
        assert!(matches!(cell, Some(Cell::NotApplicable(_))));
        assert!(tree.forms().count() > 0);
    }
}
