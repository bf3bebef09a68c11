use morph_core::{
    Cell, Error, MorphEngine, ParadigmComparator, Root, RootTreeBuilder, Stem, SubjectAgreement,
    Tense, VerbType,
};

#[test]
fn expand_two_radicals_is_invalid_root() {
    let err = MorphEngine::new().expand("ቀተ").unwrap_err();
    assert!(matches!(err, Error::InvalidRoot(_)));
    let err = MorphEngine::new().expand("ቀተለመነ").unwrap_err();
    assert!(matches!(err, Error::InvalidRoot(_)));
}

#[test]
fn expand_skips_unsupported_cells() {
    let engine = MorphEngine::new();
    for r in ["ቀተለ", "ቀደሰ", "በረከ", "ወለደ", "ሰተየ", "ሰአለ", "ደንገጸ", "ተንበለ", "ጸለለ", "ደለጐ"] {
        let tree = engine.expand(r).unwrap();
        assert_eq!(tree.entries.len(), Stem::ALL.len() * Tense::ALL.len() * 10, "{r}");
        assert!(tree.forms().count() > 0, "{r}");
    }
}

#[test]
fn not_applicable_cells_carry_a_reason() {
    let tree = RootTreeBuilder::build(&Root::parse("በረከ").unwrap()).unwrap();
    assert_eq!(tree.verb_type, VerbType::LongVowel);
    match tree.get(Stem::Reciprocal, Tense::Perfective, SubjectAgreement::ThirdMascSg) {
        Some(Cell::NotApplicable(reason)) => assert!(reason.contains("reciprocal")),
        other => panic!("expected a not-applicable cell, got {other:?}"),
    }
}

#[test]
fn every_form_in_a_tree_analyzes_back() {
    let engine = MorphEngine::new();
    let tree = engine.expand("ቀተለ").unwrap();
    for entry in &tree.entries {
        let Cell::Form(form) = &entry.cell else {
            continue;
        };
        let candidates = engine.analyze(&form.surface).unwrap();
        assert!(
            candidates
                .iter()
                .any(|c| c.matches(&tree.root, entry.stem, entry.tense, entry.agreement)),
            "{} ({} {} {}) not recovered",
            form.surface,
            entry.stem,
            entry.tense,
            entry.agreement
        );
    }
}

#[test]
fn compare_defaults_to_one_root_per_type() {
    let table = MorphEngine::new()
        .compare(&[], Stem::Basic, Tense::Imperfective, SubjectAgreement::ThirdMascSg)
        .unwrap();
    assert_eq!(table.rows.len(), VerbType::ALL.len());
    let surfaces: Vec<Option<&str>> = table.rows.iter().map(|r| r.surface.as_deref()).collect();
    assert_eq!(surfaces[0], Some("ይቀትል"));
    assert_eq!(surfaces[1], Some("ይቄድስ"));
    assert!(surfaces.iter().all(Option::is_some));
}

#[test]
fn compare_keeps_caller_order() {
    let roots = vec![Root::parse("ሰአለ").unwrap(), Root::parse("ቀተለ").unwrap()];
    let table = ParadigmComparator::compare(
        &roots,
        Stem::Basic,
        Tense::Imperfective,
        SubjectAgreement::ThirdMascSg,
    )
    .unwrap();
    assert_eq!(table.rows[0].verb_type, VerbType::Laryngeal);
    assert_eq!(table.rows[0].surface.as_deref(), Some("ይሰኣል"));
    assert_eq!(table.rows[1].verb_type, VerbType::StrongTriradical);
}
