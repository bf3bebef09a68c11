// File: src/core/classifier.rs
//! Structural classification of roots into verb types.

use crate::core::types::{Radical, Root, VerbType};

/// Glides that weaken a final radical.
pub const GLIDES: [char; 2] = ['ወ', 'የ'];

/// Gutturals.
pub const LARYNGEALS: [char; 5] = ['ሀ', 'ሐ', 'ኀ', 'አ', 'ዐ'];

/// C1 radicals that yield o/u-colored initial syllables.
pub const O_INITIALS: [char; 5] = ['ወ', 'ቈ', 'ኈ', 'ኰ', 'ጐ'];

/// C1 radicals of the t-/n- prefixed quadriliterals (ተንበለ).
pub const QUADRILITERAL_PREFIXES: [char; 2] = ['ተ', 'ነ'];

/// Roots whose middle radical is doubled throughout (ቀደሰ "to sanctify").
const DOUBLED_MIDDLE_ROOTS: [&str; 5] = ["ቀደሰ", "ፈጸመ", "ዘመረ", "ከሠተ", "ገሠጸ"];

/// Roots that carry a fixed long vowel on C2.
const LONG_VOWEL_ROOTS: [&str; 2] = ["በረከ", "መሰነ"];

pub fn is_glide(r: Radical) -> bool {
    GLIDES.contains(&r.as_char())
}

pub fn is_laryngeal(r: Radical) -> bool {
    LARYNGEALS.contains(&r.as_char())
}

fn is_lexically(root: &Root, list: &[&str]) -> bool {
    let spelled = root.to_string();
    list.iter().any(|&entry| entry == spelled)
}

/// Assigns the one verb type a root belongs to.
///
/// Several features can co-occur, so the checks run in a fixed priority
/// and the first match wins.
pub fn classify(root: &Root) -> VerbType {
    let has = |position: usize, class: &[char]| class.contains(&root.c(position).as_char());

    if root.is_quadriliteral() {
        return if has(1, &QUADRILITERAL_PREFIXES) {
            VerbType::PrefixedQuadriliteral
        } else {
            VerbType::Quadriliteral
        };
    }
    if is_glide(root.c(3)) {
        return VerbType::WeakFinal;
    }
    if is_laryngeal(root.c(1)) || is_laryngeal(root.c(2)) {
        return VerbType::Laryngeal;
    }
    if root.c(2) == root.c(3) || is_lexically(root, &DOUBLED_MIDDLE_ROOTS) {
        return VerbType::Geminate;
    }
    if has(1, &O_INITIALS) {
        return VerbType::OInitial;
    }
    if is_lexically(root, &LONG_VOWEL_ROOTS) {
        return VerbType::LongVowel;
    }
    VerbType::StrongTriradical
}
