// File: src/core/templates.rs
//! Vowel-order templates and subject affixes.
//!
//! Root templates list one order per radical (C1..Cn). The last entry is
//! the base order of the final radical, which the subject suffix may
//! then replace or fuse into.

use crate::core::types::{Radical, Stem, SubjectAgreement, Tense, VerbType};

const YE: Radical = Radical::new_unchecked('የ');
const TE: Radical = Radical::new_unchecked('ተ');
const ALEF: Radical = Radical::new_unchecked('አ');
const NE: Radical = Radical::new_unchecked('ነ');

/// Template family shared by several verb types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Triliteral,
    DoubledMiddle,
    Quadriliteral,
    PrefixedQuadriliteral,
}

pub fn family(verb_type: VerbType) -> Family {
    match verb_type {
        VerbType::StrongTriradical
        | VerbType::LongVowel
        | VerbType::OInitial
        | VerbType::WeakFinal
        | VerbType::Laryngeal => Family::Triliteral,
        VerbType::Geminate => Family::DoubledMiddle,
        VerbType::Quadriliteral => Family::Quadriliteral,
        VerbType::PrefixedQuadriliteral => Family::PrefixedQuadriliteral,
    }
}

/// Per-radical orders for a (type, stem, tense) slot, or `None` when the
/// slot has no rule.
pub fn root_template(verb_type: VerbType, stem: Stem, tense: Tense) -> Option<&'static [u8]> {
    use Tense::*;
    let by_tense = |rows: &'static [&'static [u8]; 5]| -> &'static [u8] {
        match tense {
            Perfective => rows[0],
            Imperfective => rows[1],
            Jussive => rows[2],
            Imperative => rows[3],
            Gerund => rows[4],
        }
    };

    let rows: &'static [&'static [u8]; 5] = match (family(verb_type), stem) {
        (Family::DoubledMiddle, Stem::Basic) => {
            &[&[1, 1, 1], &[5, 6, 6], &[1, 6, 6], &[1, 6, 6], &[1, 3, 7]]
        }
        (Family::Triliteral, Stem::Basic) => {
            &[&[1, 1, 1], &[1, 6, 6], &[6, 6, 6], &[6, 6, 6], &[1, 3, 7]]
        }
        (Family::Triliteral | Family::DoubledMiddle, Stem::Passive) => {
            &[&[1, 6, 1], &[1, 1, 6], &[1, 1, 6], &[1, 1, 6], &[1, 3, 7]]
        }
        (Family::Triliteral | Family::DoubledMiddle, Stem::Causative) => {
            &[&[6, 1, 1], &[1, 6, 6], &[6, 6, 6], &[6, 6, 6], &[6, 3, 7]]
        }
        (Family::Triliteral | Family::DoubledMiddle, Stem::CausativePassive) => {
            &[&[1, 6, 1], &[1, 6, 6], &[6, 6, 6], &[6, 6, 6], &[1, 3, 7]]
        }
        (Family::Triliteral | Family::DoubledMiddle, Stem::Reciprocal) => {
            &[&[4, 1, 1], &[4, 1, 6], &[4, 1, 6], &[4, 1, 6], &[4, 3, 7]]
        }
        (Family::Quadriliteral, Stem::Basic | Stem::Causative) => &[
            &[1, 6, 1, 1],
            &[1, 1, 6, 6],
            &[1, 6, 6, 6],
            &[1, 6, 6, 6],
            &[1, 6, 3, 7],
        ],
        (Family::Quadriliteral, Stem::Passive | Stem::CausativePassive) => &[
            &[1, 6, 1, 1],
            &[1, 6, 1, 6],
            &[1, 6, 1, 6],
            &[1, 6, 1, 6],
            &[1, 6, 3, 7],
        ],
        (Family::PrefixedQuadriliteral, Stem::Basic | Stem::Causative) => &[
            &[1, 6, 1, 1],
            &[1, 6, 1, 6],
            &[1, 6, 6, 6],
            &[1, 6, 6, 6],
            &[1, 6, 3, 7],
        ],
        (Family::Quadriliteral, Stem::Reciprocal)
        | (
            Family::PrefixedQuadriliteral,
            Stem::Passive | Stem::CausativePassive | Stem::Reciprocal,
        ) => return None,
    };
    Some(by_tense(rows))
}

/// How a stem consonant is realized once a tense is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixOrder {
    Written(u8),
    /// Merged into the subject prefix (ይ + አ → ያ).
    Absorbed,
}

/// Orders for the stem's prepended consonants, parallel to the skeleton.
pub fn stem_affix_orders(stem: Stem, tense: Tense) -> &'static [AffixOrder] {
    use AffixOrder::*;
    let prefixed = tense.takes_subject_prefix();
    match stem {
        Stem::Basic => &[],
        Stem::Passive | Stem::Reciprocal if prefixed => &[Written(6)],
        Stem::Passive | Stem::Reciprocal => &[Written(1)],
        Stem::Causative if prefixed => &[Absorbed],
        Stem::Causative => &[Written(1)],
        Stem::CausativePassive if prefixed => &[Absorbed, Written(6), Written(1)],
        Stem::CausativePassive => &[Written(1), Written(6), Written(1)],
    }
}

/// Subject prefix consonant for prefixing tenses.
pub fn subject_prefix(tense: Tense, agreement: SubjectAgreement) -> Option<Radical> {
    use SubjectAgreement::*;
    if !tense.takes_subject_prefix() {
        return None;
    }
    Some(match agreement {
        ThirdMascSg | ThirdMascPl | ThirdFemPl => YE,
        ThirdFemSg | SecondMascSg | SecondFemSg | SecondMascPl | SecondFemPl => TE,
        FirstSg => ALEF,
        FirstPl => NE,
    })
}

/// The subject prefix takes the causative ʔa as its own vowel.
pub fn subject_prefix_order(stem: Stem) -> u8 {
    match stem {
        Stem::Causative | Stem::CausativePassive => 4,
        Stem::Basic | Stem::Passive | Stem::Reciprocal => 6,
    }
}

/// Subject vowel suffixes that merge into a sixth-order final radical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FusingVowel {
    U,
    A,
    I,
}

impl FusingVowel {
    pub fn fused_order(self) -> u8 {
        match self {
            FusingVowel::U => 2,
            FusingVowel::A => 4,
            FusingVowel::I => 3,
        }
    }

    /// Written form when there is nothing to fuse with.
    pub fn letter(self) -> char {
        match self {
            FusingVowel::U => 'ኡ',
            FusingVowel::A => 'ኣ',
            FusingVowel::I => 'ኢ',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixRule {
    /// No subject suffix.
    Bare,
    /// Fuses into the final radical.
    Fuse(FusingVowel),
    /// Sets the final radical's order and appends a tail.
    Final(u8, &'static str),
}

impl SuffixRule {
    pub fn tail(self) -> &'static str {
        match self {
            SuffixRule::Final(_, tail) => tail,
            SuffixRule::Bare | SuffixRule::Fuse(_) => "",
        }
    }
}

/// Subject suffix for a tense, `None` when the tense has no such person.
pub fn subject_suffix(tense: Tense, agreement: SubjectAgreement) -> Option<SuffixRule> {
    use FusingVowel::*;
    use SubjectAgreement::*;
    use SuffixRule::*;
    let rule = match tense {
        Tense::Perfective => match agreement {
            ThirdMascSg => Final(1, ""),
            ThirdFemSg => Final(1, "ት"),
            SecondMascSg => Final(6, "ከ"),
            SecondFemSg => Final(6, "ኪ"),
            FirstSg => Final(6, "ኩ"),
            ThirdMascPl => Final(2, ""),
            ThirdFemPl => Final(4, ""),
            SecondMascPl => Final(6, "ክሙ"),
            SecondFemPl => Final(6, "ክን"),
            FirstPl => Final(6, "ነ"),
        },
        Tense::Imperfective | Tense::Jussive => match agreement {
            ThirdMascSg | ThirdFemSg | SecondMascSg | FirstSg | FirstPl => Bare,
            SecondFemSg => Fuse(I),
            ThirdMascPl | SecondMascPl => Fuse(U),
            ThirdFemPl | SecondFemPl => Fuse(A),
        },
        Tense::Imperative => match agreement {
            SecondMascSg => Bare,
            SecondFemSg => Fuse(I),
            SecondMascPl => Fuse(U),
            SecondFemPl => Fuse(A),
            ThirdMascSg | ThirdFemSg | FirstSg | ThirdMascPl | ThirdFemPl | FirstPl => {
                return None
            }
        },
        Tense::Gerund => match agreement {
            ThirdMascSg => Final(7, ""),
            ThirdFemSg => Final(4, ""),
            SecondMascSg => Final(1, "ከ"),
            SecondFemSg => Final(1, "ኪ"),
            FirstSg => Final(6, "የ"),
            ThirdMascPl => Final(7, "ሙ"),
            ThirdFemPl => Final(7, "ን"),
            SecondMascPl => Final(1, "ክሙ"),
            SecondFemPl => Final(1, "ክን"),
            FirstPl => Final(1, "ነ"),
        },
    };
    Some(rule)
}
