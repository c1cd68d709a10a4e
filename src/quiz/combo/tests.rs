use super::*;
use crate::dataset::Entry;

fn entry(shabda: &str, vibhakti: &str, eka: &str, dvi: &str, bahu: &str) -> Entry {
    Entry {
        shabda: shabda.to_owned(),
        linga: "पुं".to_owned(),
        anta: "अ".to_owned(),
        vibhakti: vibhakti.to_owned(),
        eka: eka.to_owned(),
        dvi: dvi.to_owned(),
        bahu: bahu.to_owned(),
    }
}

fn rama_index() -> DatasetIndex {
    DatasetIndex::new(vec![
        entry("राम", "प्रथमा", "रामः", "रामौ", "रामाः"),
        entry("राम", "द्वितीया", "रामम्", "रामौ", "रामान्"),
        entry("राम", "तृतीया", "रामेण", "रामाभ्याम्", "रामैः"),
        entry("राम", "चतुर्थी", "रामाय", "रामाभ्याम्", "रामेभ्यः"),
        entry("राम", "पञ्चमी", "रामात्", "रामाभ्याम्", "रामेभ्यः"),
        entry("राम", "संबोधन", "रामः / हे राम", "रामौ", "रामाः"),
        entry("देव", "प्रथमा", "देवः", "देवौ", "देवाः"),
    ])
    .unwrap()
}

fn resolve(index: &DatasetIndex, seed: usize, vacana: Vacana) -> EquivalenceClass {
    let seed = &index.entries()[seed];
    let variants = seed.variants(vacana);
    resolve_equivalence_class(index, seed, vacana, &variants)
}

#[test]
fn resolves_case_syncretism() {
    let index = rama_index();
    let class = resolve(&index, 0, Vacana::Eka);
    let vibhaktis: Vec<&str> = class.combos().iter().map(|c| c.vibhakti.as_str()).collect();
    assert_eq!(vibhaktis, ["प्रथमा", "संबोधन"]);
    assert!(class.combos().iter().all(|c| c.vacana == Vacana::Eka));
}

#[test]
fn resolves_dual_syncretism_across_three_cases() {
    let index = rama_index();
    let class = resolve(&index, 2, Vacana::Dvi);
    assert_eq!(
        class.vibhaktis().into_iter().collect::<Vec<_>>(),
        ["चतुर्थी", "तृतीया", "पञ्चमी"]
    );
}

#[test]
fn unique_form_resolves_to_seed_only() {
    let index = rama_index();
    let class = resolve(&index, 2, Vacana::Eka);
    assert_eq!(class.len(), 1);
    assert_eq!(class.combos()[0], Combo::new(&index.entries()[2], Vacana::Eka));
}

#[test]
fn always_contains_seed() {
    let index = rama_index();
    for (position, seed) in index.entries().iter().enumerate() {
        for vacana in seed.populated_vacanas() {
            let class = resolve(&index, position, vacana);
            assert!(class.contains(&Combo::new(seed, vacana)));
        }
    }
}

#[test]
fn ignores_other_paradigms_with_same_spelling() {
    let mut homograph = entry("राम", "प्रथमा", "रामः", "", "");
    homograph.linga = "नपुं".to_owned();
    let index = DatasetIndex::new(vec![entry("राम", "प्रथमा", "रामः", "", ""), homograph]).unwrap();
    let class = resolve(&index, 0, Vacana::Eka);
    assert_eq!(class.len(), 1);
    assert_eq!(class.combos()[0].linga, "पुं");
}

#[test]
fn deduplicates_repeated_rows() {
    let index = DatasetIndex::new(vec![
        entry("राम", "प्रथमा", "रामः", "", ""),
        entry("राम", "प्रथमा", "रामः", "", ""),
        entry("राम", "संबोधन", "रामः", "", ""),
    ])
    .unwrap();
    let class = resolve(&index, 0, Vacana::Eka);
    assert_eq!(class.len(), 2);
    let unique: std::collections::HashSet<&Combo> = class.combos().iter().collect();
    assert_eq!(unique.len(), class.len());
}

#[test]
fn matches_through_normalization() {
    let index = DatasetIndex::new(vec![
        entry("राम", "प्रथमा", "रा मः", "", ""),
        entry("राम", "संबोधन", " रामः", "", ""),
    ])
    .unwrap();
    let class = resolve(&index, 0, Vacana::Eka);
    assert_eq!(class.len(), 2);
}

#[test]
fn falls_back_to_seed_when_nothing_matches() {
    let index = rama_index();
    let seed = &index.entries()[0];
    let foreign = VariantSet::extract("लता");
    let class = resolve_equivalence_class(&index, seed, Vacana::Eka, &foreign);
    assert_eq!(class.combos(), [Combo::new(seed, Vacana::Eka)]);
}

#[test]
fn finds_primary_combo_by_case_and_number() {
    let index = rama_index();
    let seed = &index.entries()[5];
    let class = resolve(&index, 5, Vacana::Eka);
    let primary = class.find_primary(seed, Vacana::Eka).unwrap();
    assert_eq!(primary.vibhakti, "संबोधन");
    assert!(class.find_primary(seed, Vacana::Bahu).is_none());
}

#[test]
fn blank_stem_ending_is_a_class_value() {
    let index = DatasetIndex::new(vec![Entry {
        anta: String::new(),
        ..entry("राम", "प्रथमा", "रामः", "", "")
    }])
    .unwrap();
    let class = resolve(&index, 0, Vacana::Eka);
    assert_eq!(class.values(Attribute::Anta), [""]);
    assert_eq!(class.values(Attribute::Linga), ["पुं"]);
}
