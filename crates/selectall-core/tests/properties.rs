//! Property tests for selection and scoring.
//!
//! Catalogs are small generated name lists; selections are arbitrary toggle
//! sequences that may include names outside the catalog.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use selectall_core::catalog::ReferenceCatalog;
use selectall_core::model::{DocumentedItem, LocalizedText};
use selectall_core::scoring::{self, ScoringPolicy};
use selectall_core::selection::Selection;
use selectall_core::shuffle::shuffled;

fn documented(name: &str) -> DocumentedItem {
    DocumentedItem {
        name: name.into(),
        description: LocalizedText::new(name, name),
        specification_url: format!("https://html.spec.whatwg.org/#{name}"),
        reference_url: LocalizedText::new(
            format!("https://developer.mozilla.org/ja/{name}"),
            format!("https://developer.mozilla.org/en-US/{name}"),
        ),
    }
}

/// `r0..r{n}` are real, `d0..d{m}` are decoys, `u*` are in neither list.
fn catalog(real: usize, decoys: usize) -> ReferenceCatalog {
    ReferenceCatalog::new(
        (0..real).map(|i| documented(&format!("r{i}"))).collect(),
        (0..decoys).map(|i| format!("d{i}")).collect(),
    )
}

fn toggles() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[rdu][0-9]", 0..60)
}

proptest! {
    #[test]
    fn selection_size_counts_odd_toggles(names in toggles()) {
        let selection: Selection = names.iter().collect();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for n in &names {
            *counts.entry(n.as_str()).or_default() += 1;
        }
        let odd = counts.values().filter(|c| *c % 2 == 1).count();
        prop_assert_eq!(selection.len(), odd);
    }

    #[test]
    fn double_toggle_restores_selection(names in toggles(), extra in "[rdu][0-9]") {
        let mut selection: Selection = names.iter().collect();
        let before = selection.clone();
        selection.toggle(&extra);
        selection.toggle(&extra);
        prop_assert_eq!(selection, before);
    }

    #[test]
    fn scores_match_formulas(names in toggles(), real in 0usize..10, decoys in 0usize..10) {
        let catalog = catalog(real, decoys);
        let selection: Selection = names.iter().collect();

        let correct = selection.iter().filter(|n| catalog.is_real(n)).count();
        let wrong = selection.iter().filter(|n| catalog.is_decoy(n)).count();

        let strict = scoring::score(&selection, &catalog, ScoringPolicy::Strict);
        let lenient = scoring::score(&selection, &catalog, ScoringPolicy::Lenient);
        prop_assert_eq!(strict as i64, (correct as i64 - wrong as i64).max(0));
        prop_assert_eq!(lenient, correct);
        prop_assert!(strict <= lenient);
        prop_assert!(lenient <= catalog.total_real());
    }

    #[test]
    fn unselected_correct_partitions_real(names in toggles(), real in 0usize..10) {
        let catalog = catalog(real, 3);
        let selection: Selection = names.iter().collect();

        let unselected: HashSet<&str> = scoring::unselected_correct(&selection, &catalog)
            .into_iter()
            .map(|i| i.name.as_str())
            .collect();
        let picked: HashSet<&str> = selection.iter().filter(|n| catalog.is_real(n)).collect();
        let all: HashSet<&str> = catalog.real().iter().map(|i| i.name.as_str()).collect();

        prop_assert!(unselected.is_disjoint(&picked));
        prop_assert_eq!(
            unselected.union(&picked).copied().collect::<HashSet<_>>(),
            all
        );
    }

    #[test]
    fn selected_decoys_are_selected_and_decoys(names in toggles()) {
        let catalog = catalog(10, 10);
        let selection: Selection = names.iter().collect();
        let decoys = scoring::selected_decoys(&selection, &catalog);
        for name in &decoys {
            prop_assert!(selection.contains(name));
            prop_assert!(catalog.is_decoy(name));
        }

        // Every selected decoy is reported, in pick order.
        let picked: Vec<&str> = selection.iter().filter(|n| catalog.is_decoy(n)).collect();
        prop_assert_eq!(decoys, picked);
    }

    #[test]
    fn shuffle_is_a_permutation(input in prop::collection::vec(any::<u16>(), 0..50), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut out = shuffled(&input, &mut rng);
        let mut expected = input.clone();
        out.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(out, expected);
    }
}

#[test]
fn select_everything_scenario() {
    let catalog = catalog(5, 2);
    let selection: Selection = catalog
        .real()
        .iter()
        .map(|i| i.name.clone())
        .chain(catalog.decoys().iter().cloned())
        .collect();
    assert_eq!(scoring::score(&selection, &catalog, ScoringPolicy::Strict), 3);
    assert_eq!(scoring::score(&selection, &catalog, ScoringPolicy::Lenient), 5);
    assert!(scoring::unselected_correct(&selection, &catalog).is_empty());
    assert_eq!(scoring::selected_decoys(&selection, &catalog), ["d0", "d1"]);
}
