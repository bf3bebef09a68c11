//! Property-based tests for generation and analysis.
//!
//! These verify invariants that must hold for every input:
//! - Syllables decompose and recompose exactly
//! - Classification is total and stable
//! - Generation is deterministic
//! - Regular verbs analyze back to the features that generated them

use morph_core::core::classifier::classify;
use morph_core::core::conjugator::generate;
use morph_core::core::syllabary;
use morph_core::{Radical, Root, Stem, SubjectAgreement, Tense, VerbType, WordAnalyzer};
use proptest::prelude::*;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

/// Consonants with no weak, laryngeal or labialized behaviour.
const PLAIN: [char; 15] = [
    'ለ', 'መ', 'ረ', 'ሰ', 'ቀ', 'በ', 'ተ', 'ነ', 'ከ', 'ዘ', 'ደ', 'ገ', 'ጠ', 'ጸ', 'ፈ',
];

fn any_radical() -> impl Strategy<Value = Radical> {
    let radicals: Vec<Radical> = syllabary::table().radicals().collect();
    prop::sample::select(radicals)
}

fn any_root() -> impl Strategy<Value = Root> {
    prop::collection::vec(any_radical(), 3..=4).prop_map(|r| Root::new(r).unwrap())
}

fn strong_root() -> impl Strategy<Value = Root> {
    prop::collection::vec(prop::sample::select(PLAIN.to_vec()), 3)
        .prop_map(|cs| Root::parse(&cs.into_iter().collect::<String>()).unwrap())
        .prop_filter("strong triradical", |root| {
            classify(root) == VerbType::StrongTriradical
        })
}

fn slot() -> impl Strategy<Value = (Stem, Tense, SubjectAgreement)> {
    (
        prop::sample::select(Stem::ALL.to_vec()),
        prop::sample::select(Tense::ALL.to_vec()),
        prop::sample::select(SubjectAgreement::ALL.to_vec()),
    )
}

// =============================================================================
// SYLLABARY PROPERTIES
// =============================================================================

proptest! {
    /// Any syllable that decomposes recomposes to itself
    #[test]
    fn decompose_then_compose_is_identity(code in 0x1200u32..0x1380) {
        let c = char::from_u32(code).unwrap();
        if let Ok((radical, order)) = syllabary::decompose(c) {
            prop_assert_eq!(syllabary::with_order(radical, order).unwrap(), c);
            prop_assert_eq!(syllabary::base_order_of(c).unwrap(), radical);
        }
    }

    /// Every order a block supports maps back to the block's radical
    #[test]
    fn base_order_round_trip(radical in any_radical()) {
        for order in syllabary::table().supported_orders(radical) {
            let c = syllabary::with_order(radical, order).unwrap();
            prop_assert_eq!(syllabary::base_order_of(c).unwrap(), radical);
            prop_assert_eq!(syllabary::decompose(c).unwrap().1, order);
        }
    }
}

// =============================================================================
// GENERATION PROPERTIES
// =============================================================================

proptest! {
    /// classify never panics and depends only on the root
    #[test]
    fn classification_is_total_and_stable(root in any_root()) {
        let first = classify(&root);
        prop_assert_eq!(first, classify(&root.clone()));
        prop_assert_eq!(first.radical_count(), root.len());
    }

    /// Identical arguments give identical forms or identical errors
    #[test]
    fn generation_is_deterministic(root in any_root(), (stem, tense, agr) in slot()) {
        match (generate(&root, stem, tense, agr), generate(&root, stem, tense, agr)) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => {
                prop_assert!(a.is_not_applicable());
                prop_assert_eq!(a.to_string(), b.to_string());
            }
            _ => prop_assert!(false, "outcome changed between runs"),
        }
    }
}

// =============================================================================
// ANALYSIS PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// analyze(generate(x)) contains x for regular verbs
    #[test]
    fn strong_verbs_round_trip(root in strong_root(), (stem, tense, agr) in slot()) {
        let Ok(form) = generate(&root, stem, tense, agr) else {
            return Ok(());
        };
        let candidates = WordAnalyzer::new().analyze(&form.surface).unwrap();
        prop_assert!(
            candidates.iter().any(|c| c.matches(&root, stem, tense, agr)),
            "{} from {} {} {} {} not recovered",
            form.surface, root, stem, tense, agr
        );
    }
}
