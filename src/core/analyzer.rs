// File: src/core/analyzer.rs
//! Analysis ("X-ray"): surface word → ranked (root, stem, tense, subject)
//! hypotheses.
//!
//! The hypothesis space is the product of the closed variant sets, so the
//! search is exhaustive. Every surviving candidate has been regenerated
//! and reproduces the input exactly.

use crate::core::classifier::classify;
use crate::core::conjugator::{generate, glide_for_vowel};
use crate::core::stem;
use crate::core::syllabary;
use crate::core::templates::{self, AffixOrder};
use crate::core::trie::{AffixTrie, FrameId};
use crate::core::types::{
    AnalysisCandidate, Radical, Root, Stem, SubjectAgreement, Tense, VerbType, VowelOrder,
};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, error, trace};

const WE: Radical = Radical::new_unchecked('ወ');

/// The affixes one (stem, tense, subject) slot puts around a root.
#[derive(Debug, Clone)]
struct Frame {
    stem: Stem,
    tense: Tense,
    agreement: SubjectAgreement,
    prefix: String,
    tail: Vec<char>,
}

struct FrameIndex {
    frames: Vec<Frame>,
    trie: AffixTrie,
}

static FRAMES: LazyLock<FrameIndex> = LazyLock::new(FrameIndex::build);

impl FrameIndex {
    fn build() -> Self {
        let mut frames = Vec::new();
        let mut trie = AffixTrie::new();
        for stem in Stem::ALL {
            for tense in Tense::ALL {
                for agreement in SubjectAgreement::ALL {
                    let Some(suffix) = templates::subject_suffix(tense, agreement) else {
                        continue;
                    };
                    let prefix = match frame_prefix(stem, tense, agreement) {
                        Ok(prefix) => prefix,
                        Err(e) => {
                            error!(%stem, %tense, %agreement, error = %e, "skipping affix frame");
                            continue;
                        }
                    };
                    let id: FrameId = frames.len();
                    trie.insert(&prefix, id);
                    frames.push(Frame {
                        stem,
                        tense,
                        agreement,
                        prefix,
                        tail: suffix.tail().chars().collect(),
                    });
                }
            }
        }
        debug!(frames = frames.len(), nodes = trie.node_count(), "affix frame index built");
        Self { frames, trie }
    }
}

/// Written subject prefix plus stem affixes; independent of the root.
fn frame_prefix(stem: Stem, tense: Tense, agreement: SubjectAgreement) -> Result<String> {
    let mut prefix = String::new();
    if let Some(consonant) = templates::subject_prefix(tense, agreement) {
        let order = VowelOrder::of(templates::subject_prefix_order(stem));
        prefix.push(syllabary::with_order(consonant, order)?);
    }
    for (&consonant, &affix) in stem::affixes(stem)
        .iter()
        .zip(templates::stem_affix_orders(stem, tense))
    {
        if let AffixOrder::Written(order) = affix {
            prefix.push(syllabary::with_order(consonant, VowelOrder::of(order))?);
        }
    }
    Ok(prefix)
}

/// Analyzer settings.
#[derive(Debug, Clone, Default)]
pub struct WordAnalyzer {
    /// Keep at most this many candidates after ranking.
    pub max_candidates: Option<usize>,
}

impl WordAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_candidates(max_candidates: Option<usize>) -> Self {
        Self { max_candidates }
    }

    /// Every decomposition that regenerates `word`, best first. An empty
    /// list means the word is unanalyzable, not that the input was bad.
    pub fn analyze(&self, word: &str) -> Result<Vec<AnalysisCandidate>> {
        let word = word.trim();
        // 1. Non-Ethiopic input is an error; Ethiopic letters outside the
        // modeled rows (ቐ, ሟ, punctuation) just have no analysis.
        if let Some(ch) = word.chars().find(|&c| !syllabary::is_ethiopic(c)) {
            return Err(Error::UnknownCharacter { ch });
        }
        let Ok(syllables) = word
            .chars()
            .map(syllabary::decompose)
            .collect::<Result<Vec<_>>>()
        else {
            debug!(word, "unmodeled syllable");
            return Ok(vec![]);
        };
        let chars: Vec<char> = word.chars().collect();

        let index = &*FRAMES;
        let mut candidates = Vec::new();
        let mut seen = HashSet::new();

        // 2. Strip every subject+stem prefix the word starts with.
        for (prefix_len, frame_ids) in index.trie.prefixes_of(word) {
            for &id in frame_ids {
                let frame = &index.frames[id];

                // 3. Strip the subject suffix tail.
                if !chars[prefix_len..].ends_with(&frame.tail) {
                    continue;
                }
                let end = chars.len() - frame.tail.len();
                if end < prefix_len {
                    continue;
                }
                let residue = &syllables[prefix_len..end];
                let observed: Vec<VowelOrder> = residue.iter().map(|&(_, o)| o).collect();

                // 4. Try every verb type's way of reading the residue.
                for verb_type in VerbType::ALL {
                    let Some(root) = reconstruct(verb_type, residue) else {
                        continue;
                    };
                    if classify(&root) != verb_type {
                        continue;
                    }
                    let form = match generate(&root, frame.stem, frame.tense, frame.agreement) {
                        Ok(form) => form,
                        Err(e) if e.is_not_applicable() => continue,
                        Err(e) => return Err(e),
                    };
                    let expected: Vec<VowelOrder> =
                        form.root_orders().into_iter().flatten().collect();
                    if expected != observed || form.surface != word {
                        continue;
                    }
                    trace!(%root, stem = %frame.stem, tense = %frame.tense, agreement = %frame.agreement, "candidate");

                    let key = (root.clone(), frame.stem, frame.tense, frame.agreement);
                    if !seen.insert(key) {
                        continue;
                    }
                    candidates.push(AnalysisCandidate {
                        score: specificity(frame, verb_type),
                        root,
                        verb_type,
                        stem: frame.stem,
                        tense: frame.tense,
                        agreement: frame.agreement,
                        prefix: frame.prefix.clone(),
                        suffix: frame.tail.iter().collect(),
                        observed_orders: observed.clone(),
                    });
                }
            }
        }

        // 5. Rank: longer affixes and marked stems/types first, then a
        // fixed order so equal scores never shuffle between runs.
        candidates.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.root.to_string().cmp(&b.root.to_string()))
                .then_with(|| a.stem.cmp(&b.stem))
                .then_with(|| a.tense.cmp(&b.tense))
                .then_with(|| a.agreement.cmp(&b.agreement))
        });
        if let Some(max) = self.max_candidates {
            candidates.truncate(max);
        }
        debug!(word, candidates = candidates.len(), "analyzed");
        Ok(candidates)
    }
}

/// Recovers the root a verb type would have written as `residue`.
fn reconstruct(verb_type: VerbType, residue: &[(Radical, VowelOrder)]) -> Option<Root> {
    let bases: Vec<Radical> = residue.iter().map(|&(r, _)| r).collect();
    if bases.len() == verb_type.radical_count() {
        return Root::new(bases).ok();
    }
    let &[(c1, _), (c2, c2_order)] = residue else {
        return None;
    };
    let radicals = match verb_type {
        VerbType::Geminate => vec![c1, c2, c2],
        VerbType::WeakFinal => vec![c1, c2, glide_for_vowel(c2_order)?],
        VerbType::OInitial => vec![WE, c1, c2],
        VerbType::StrongTriradical
        | VerbType::LongVowel
        | VerbType::Laryngeal
        | VerbType::Quadriliteral
        | VerbType::PrefixedQuadriliteral => return None,
    };
    Root::new(radicals).ok()
}

fn specificity(frame: &Frame, verb_type: VerbType) -> u32 {
    let affix_chars = frame.prefix.chars().count() + frame.tail.len();
    let mut score = affix_chars as u32 * 10;
    if frame.stem != Stem::Basic {
        score += 5;
    }
    if verb_type != VerbType::StrongTriradical {
        score += 1;
    }
    score
}

/// Analyzes with default settings.
pub fn analyze(word: &str) -> Result<Vec<AnalysisCandidate>> {
    WordAnalyzer::default().analyze(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_prefixes_fuse_with_stem_affixes() {
        use SubjectAgreement::*;
        let p = |stem, tense, agr| frame_prefix(stem, tense, agr).unwrap();
        assert_eq!(p(Stem::Basic, Tense::Imperfective, ThirdMascSg), "ይ");
        assert_eq!(p(Stem::Passive, Tense::Imperfective, ThirdMascSg), "ይት");
        assert_eq!(p(Stem::Causative, Tense::Jussive, FirstPl), "ና");
        assert_eq!(p(Stem::CausativePassive, Tense::Imperfective, ThirdMascSg), "ያስተ");
        assert_eq!(p(Stem::CausativePassive, Tense::Perfective, ThirdMascSg), "አስተ");
        assert_eq!(p(Stem::Basic, Tense::Gerund, FirstSg), "");
    }

    #[test]
    fn every_defined_slot_has_a_frame() {
        // 5 stems × (10 + 10 + 10 + 4 + 10) subject slots.
        assert_eq!(FRAMES.frames.len(), 5 * 44);
    }

    #[test]
    fn two_syllable_residues_reconstruct_per_type() {
        let syl = |c| syllabary::decompose(c).unwrap();
        let residue = [syl('ሰ'), syl('ቲ')];
        let root = reconstruct(VerbType::WeakFinal, &residue).unwrap();
        assert_eq!(root.to_string(), "ሰተየ");
        let root = reconstruct(VerbType::OInitial, &[syl('ል'), syl('ድ')]).unwrap();
        assert_eq!(root.to_string(), "ወለደ");
        assert!(reconstruct(VerbType::StrongTriradical, &residue).is_none());
        // Only 2nd/3rd order C2 can hide a glide.
        assert!(reconstruct(VerbType::WeakFinal, &[syl('ሰ'), syl('ት')]).is_none());
    }
}
