// File: src/core/conjugator.rs
//! Generation: root + stem + tense + subject → vocalized surface word.

use crate::core::classifier::{classify, is_laryngeal};
use crate::core::stem::{derive_classified, ConsonantSkeleton};
use crate::core::syllabary;
use crate::core::templates::{self, AffixOrder, SuffixRule};
use crate::core::types::{
    ConjugatedForm, Radical, Root, SlotAssignment, SlotKind, SlotNote, Stem, SubjectAgreement,
    Tense, VerbType, VowelOrder,
};
use crate::error::{Error, Result};
use tracing::trace;

const WE: char = 'ወ';
const YE: char = 'የ';

/// Produces the surface form and its per-slot breakdown.
///
/// Pure: identical arguments always yield an identical `ConjugatedForm`.
pub fn generate(
    root: &Root,
    stem: Stem,
    tense: Tense,
    agreement: SubjectAgreement,
) -> Result<ConjugatedForm> {
    let verb_type = classify(root);
    let skeleton = derive_classified(root, verb_type, stem)?;
    let unsupported = || Error::UnsupportedCombination {
        verb_type,
        stem,
        tense,
        agreement,
    };
    let template = templates::root_template(verb_type, stem, tense).ok_or_else(unsupported)?;
    let suffix = templates::subject_suffix(tense, agreement).ok_or_else(unsupported)?;

    let mut slots = prefix_slots(&skeleton, stem, tense, agreement);
    let mut radicals = radical_slots(&skeleton, template);
    let tail = attach_suffix(&mut radicals, suffix);
    apply_type_overrides(verb_type, stem, tense, suffix, &mut radicals);
    apply_laryngeal_phonotactics(&mut radicals);
    if verb_type == VerbType::Geminate {
        geminate(&mut radicals);
    }
    slots.extend(radicals);
    fit_to_blocks(&mut slots);

    let mut surface = String::new();
    for slot in &slots {
        if let Some(order) = slot.realized {
            surface.push(syllabary::with_order(slot.consonant, order)?);
        }
    }
    surface.push_str(&tail);

    trace!(%root, %verb_type, %stem, %tense, %agreement, %surface, "generated");
    Ok(ConjugatedForm {
        surface,
        root: root.clone(),
        verb_type,
        stem,
        tense,
        agreement,
        slots,
        suffix: tail,
    })
}

fn written(kind: SlotKind, consonant: Radical, order: u8) -> SlotAssignment {
    let order = VowelOrder::of(order);
    SlotAssignment {
        kind,
        consonant,
        template_order: order,
        realized: Some(order),
        notes: Vec::new(),
    }
}

fn prefix_slots(
    skeleton: &ConsonantSkeleton,
    stem: Stem,
    tense: Tense,
    agreement: SubjectAgreement,
) -> Vec<SlotAssignment> {
    let mut slots = Vec::with_capacity(skeleton.affixes.len() + 1);
    if let Some(consonant) = templates::subject_prefix(tense, agreement) {
        let order = templates::subject_prefix_order(stem);
        slots.push(written(SlotKind::SubjectPrefix, consonant, order));
    }
    for (&consonant, &affix) in skeleton
        .affixes
        .iter()
        .zip(templates::stem_affix_orders(stem, tense))
    {
        slots.push(match affix {
            AffixOrder::Written(order) => written(SlotKind::StemAffix, consonant, order),
            AffixOrder::Absorbed => SlotAssignment {
                kind: SlotKind::StemAffix,
                consonant,
                template_order: VowelOrder::GEEZ,
                realized: None,
                notes: vec![SlotNote::Absorbed],
            },
        });
    }
    slots
}

fn radical_slots(skeleton: &ConsonantSkeleton, template: &[u8]) -> Vec<SlotAssignment> {
    let mut slots: Vec<_> = skeleton
        .radicals
        .iter()
        .zip(template)
        .enumerate()
        .map(|(i, (&consonant, &order))| written(SlotKind::Radical(i as u8 + 1), consonant, order))
        .collect();
    if skeleton.reciprocal_pattern {
        if let Some(c1) = slots.first_mut() {
            c1.notes.push(SlotNote::Pinned);
        }
    }
    slots
}

/// Applies the subject suffix to the final radical and returns the text
/// written after it.
fn attach_suffix(radicals: &mut [SlotAssignment], suffix: SuffixRule) -> String {
    let Some(last) = radicals.last_mut() else {
        return String::new();
    };
    match suffix {
        SuffixRule::Bare => String::new(),
        SuffixRule::Final(order, tail) => {
            last.realized = Some(VowelOrder::of(order));
            tail.to_string()
        }
        SuffixRule::Fuse(vowel) if last.realized == Some(VowelOrder::SADIS) => {
            last.realized = Some(VowelOrder::of(vowel.fused_order()));
            last.notes.push(SlotNote::Fused);
            String::new()
        }
        SuffixRule::Fuse(vowel) => vowel.letter().to_string(),
    }
}

fn apply_type_overrides(
    verb_type: VerbType,
    stem: Stem,
    tense: Tense,
    suffix: SuffixRule,
    radicals: &mut [SlotAssignment],
) {
    match verb_type {
        VerbType::LongVowel => {
            radicals[1].realized = Some(VowelOrder::RABI);
            radicals[1].notes.push(SlotNote::Pinned);
        }
        VerbType::WeakFinal => {
            let unsuffixed = suffix == SuffixRule::Bare;
            let drops = matches!(tense, Tense::Imperfective | Tense::Jussive | Tense::Imperative);
            if unsuffixed && drops {
                let glide_vowel = match radicals[2].consonant.as_char() {
                    WE => VowelOrder::KAIB,
                    _ => VowelOrder::SALIS,
                };
                radicals[2].realized = None;
                radicals[2].notes.push(SlotNote::Dropped);
                radicals[1].realized = Some(glide_vowel);
                radicals[1].notes.push(SlotNote::GlideVowel);
            }
        }
        VerbType::OInitial => {
            let c1_is_we = radicals[0].consonant.as_char() == WE;
            let drops = stem == Stem::Basic && matches!(tense, Tense::Jussive | Tense::Imperative);
            if c1_is_we && drops {
                radicals[0].realized = None;
                radicals[0].notes.push(SlotNote::Dropped);
            }
        }
        VerbType::StrongTriradical
        | VerbType::Geminate
        | VerbType::Laryngeal
        | VerbType::Quadriliteral
        | VerbType::PrefixedQuadriliteral => {}
    }
}

/// A laryngeal cannot close a syllable inside the root: a sixth order on
/// a non-final laryngeal radical becomes fourth.
fn apply_laryngeal_phonotactics(radicals: &mut [SlotAssignment]) {
    let Some((_, inner)) = radicals.split_last_mut() else {
        return;
    };
    for slot in inner {
        if is_laryngeal(slot.consonant) && slot.realized == Some(VowelOrder::SADIS) {
            slot.realized = Some(VowelOrder::RABI);
            slot.notes.push(SlotNote::Substituted);
        }
    }
}

/// Marks the doubled middle radical; identical C2/C3 are written once,
/// carrying the final radical's vowel.
fn geminate(radicals: &mut [SlotAssignment]) {
    let [_, c2, c3] = radicals else {
        return;
    };
    c2.notes.push(SlotNote::Geminated);
    if c2.consonant == c3.consonant {
        c2.realized = c3.realized;
        c2.notes.extend(c3.notes.iter().copied());
        c2.notes.push(SlotNote::Collapsed);
        c3.realized = None;
        c3.notes.push(SlotNote::Collapsed);
    }
}

/// Irregular blocks encode fewer orders; move to the nearest one encoded.
fn fit_to_blocks(slots: &mut [SlotAssignment]) {
    let table = syllabary::table();
    for slot in slots {
        if let Some(order) = slot.realized {
            let fitted = table.nearest_supported(slot.consonant, order);
            if fitted != order {
                slot.realized = Some(fitted);
                slot.notes.push(SlotNote::Substituted);
            }
        }
    }
}

/// Glide restored from the vowel it left on C2, for analysis.
pub(crate) fn glide_for_vowel(order: VowelOrder) -> Option<Radical> {
    match order.get() {
        2 => Some(Radical::new_unchecked(WE)),
        3 => Some(Radical::new_unchecked(YE)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SubjectAgreement::*;

    fn form(root: &str, stem: Stem, tense: Tense, agr: SubjectAgreement) -> ConjugatedForm {
        generate(&Root::parse(root).unwrap(), stem, tense, agr).unwrap()
    }

    fn word(root: &str, stem: Stem, tense: Tense, agr: SubjectAgreement) -> String {
        form(root, stem, tense, agr).surface
    }

    #[test]
    fn strong_perfective_paradigm() {
        let expected = [
            (ThirdMascSg, "ቀተለ"),
            (ThirdFemSg, "ቀተለት"),
            (SecondMascSg, "ቀተልከ"),
            (SecondFemSg, "ቀተልኪ"),
            (FirstSg, "ቀተልኩ"),
            (ThirdMascPl, "ቀተሉ"),
            (ThirdFemPl, "ቀተላ"),
            (SecondMascPl, "ቀተልክሙ"),
            (SecondFemPl, "ቀተልክን"),
            (FirstPl, "ቀተልነ"),
        ];
        for (agr, surface) in expected {
            assert_eq!(word("ቀተለ", Stem::Basic, Tense::Perfective, agr), surface, "{agr}");
        }
    }

    #[test]
    fn strong_imperfective_and_jussive() {
        let f = form("ቀተለ", Stem::Basic, Tense::Imperfective, ThirdMascSg);
        assert_eq!(f.surface, "ይቀትል");
        assert_eq!(
            f.root_orders(),
            vec![Some(VowelOrder::GEEZ), Some(VowelOrder::SADIS), Some(VowelOrder::SADIS)]
        );
        assert_eq!(word("ቀተለ", Stem::Basic, Tense::Imperfective, ThirdMascPl), "ይቀትሉ");
        assert_eq!(word("ቀተለ", Stem::Basic, Tense::Imperfective, SecondFemSg), "ትቀትሊ");
        assert_eq!(word("ቀተለ", Stem::Basic, Tense::Jussive, ThirdMascSg), "ይቅትል");
        assert_eq!(word("ቀተለ", Stem::Basic, Tense::Imperative, SecondMascSg), "ቅትል");
        assert_eq!(word("ቀተለ", Stem::Basic, Tense::Gerund, ThirdMascSg), "ቀቲሎ");
    }

    #[test]
    fn derived_stems() {
        assert_eq!(word("ቀተለ", Stem::Passive, Tense::Perfective, ThirdMascSg), "ተቀትለ");
        assert_eq!(word("ቀተለ", Stem::Passive, Tense::Imperfective, ThirdMascSg), "ይትቀተል");
        assert_eq!(word("ቀተለ", Stem::Causative, Tense::Perfective, ThirdMascSg), "አቅተለ");
        assert_eq!(word("ቀተለ", Stem::Causative, Tense::Imperfective, ThirdMascSg), "ያቀትል");
        assert_eq!(word("ቀተለ", Stem::Reciprocal, Tense::Perfective, ThirdMascSg), "ተቃተለ");
        assert_eq!(
            word("ቀተለ", Stem::CausativePassive, Tense::Perfective, ThirdMascSg),
            "አስተቀትለ"
        );
    }

    #[test]
    fn causative_passive_imperfective_keeps_both_affixes() {
        let f = form("ቀተለ", Stem::CausativePassive, Tense::Imperfective, ThirdMascSg);
        assert_eq!(f.surface, "ያስተቀትል");
        let stem_affixes: Vec<char> = f
            .slots
            .iter()
            .filter(|s| s.kind == SlotKind::StemAffix)
            .map(|s| s.consonant.as_char())
            .collect();
        assert_eq!(stem_affixes, vec!['አ', 'ሰ', 'ተ']);
    }

    #[test]
    fn doubled_middle_root() {
        let f = form("ቀደሰ", Stem::Basic, Tense::Imperfective, ThirdMascSg);
        assert_eq!(f.surface, "ይቄድስ");
        let c2 = f.slot(SlotKind::Radical(2)).unwrap();
        assert!(c2.notes.contains(&SlotNote::Geminated));
    }

    #[test]
    fn identical_c2_c3_written_once() {
        let f = form("ጸለለ", Stem::Basic, Tense::Imperfective, ThirdMascSg);
        assert_eq!(f.surface, "ይጼል");
        assert_eq!(f.root_orders(), vec![Some(VowelOrder::HAMIS), Some(VowelOrder::SADIS), None]);
        let c3 = f.slot(SlotKind::Radical(3)).unwrap();
        assert!(c3.notes.contains(&SlotNote::Collapsed));
    }

    #[test]
    fn weak_final_glide_becomes_vowel() {
        assert_eq!(word("ሰተየ", Stem::Basic, Tense::Imperfective, ThirdMascSg), "ይሰቲ");
        assert_eq!(word("ፈነወ", Stem::Basic, Tense::Imperfective, ThirdMascSg), "ይፈኑ");
        // A vowel suffix keeps the glide.
        assert_eq!(word("ሰተየ", Stem::Basic, Tense::Imperfective, ThirdMascPl), "ይሰትዩ");
        assert_eq!(word("ሰተየ", Stem::Basic, Tense::Perfective, ThirdMascSg), "ሰተየ");
    }

    #[test]
    fn laryngeal_radical_avoids_sixth_order() {
        let f = form("ሰአለ", Stem::Basic, Tense::Imperfective, ThirdMascSg);
        assert_eq!(f.surface, "ይሰኣል");
        assert!(f.slot(SlotKind::Radical(2)).unwrap().notes.contains(&SlotNote::Substituted));
    }

    #[test]
    fn long_vowel_is_pinned_in_every_tense() {
        for tense in [Tense::Perfective, Tense::Imperfective, Tense::Jussive, Tense::Gerund] {
            let f = form("በረከ", Stem::Basic, tense, ThirdMascSg);
            assert_eq!(f.root_orders()[1], Some(VowelOrder::RABI), "{tense}");
        }
    }

    #[test]
    fn w_initial_drops_in_jussive() {
        assert_eq!(word("ወለደ", Stem::Basic, Tense::Jussive, ThirdMascSg), "ይልድ");
        assert_eq!(word("ወለደ", Stem::Basic, Tense::Imperative, SecondMascSg), "ልድ");
        assert_eq!(word("ወለደ", Stem::Basic, Tense::Imperfective, ThirdMascSg), "ይወልድ");
    }

    #[test]
    fn labialized_radical_moves_to_encoded_order() {
        // ጐ has no seventh order; the gerund's 3ms -o lands on the 4th.
        let f = form("ደለጐ", Stem::Basic, Tense::Gerund, ThirdMascSg);
        assert_eq!(f.surface, "ደሊጓ");
    }

    #[test]
    fn quadriliterals() {
        assert_eq!(word("ደንገጸ", Stem::Basic, Tense::Perfective, ThirdMascSg), "ደንገጸ");
        assert_eq!(word("ደንገጸ", Stem::Basic, Tense::Imperfective, ThirdMascSg), "ይደነግጽ");
        assert_eq!(word("ተንበለ", Stem::Basic, Tense::Perfective, ThirdMascSg), "ተንበለ");
    }

    #[test]
    fn unsupported_slots_are_errors_not_panics() {
        let qtl = Root::parse("ቀተለ").unwrap();
        let err = generate(&qtl, Stem::Basic, Tense::Imperative, ThirdMascSg).unwrap_err();
        assert!(matches!(err, Error::UnsupportedCombination { .. }));
        let tnbl = Root::parse("ተንበለ").unwrap();
        let err = generate(&tnbl, Stem::Reciprocal, Tense::Perfective, ThirdMascSg).unwrap_err();
        assert!(matches!(err, Error::UnsupportedStemForType { .. }));
    }
}
