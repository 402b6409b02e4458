use pio_core::{Document, MergedConfig, Section};
use proptest::prelude::*;

fn section_strategy() -> impl Strategy<Value = Section> {
    (
        prop::sample::select(vec!["platformio", "common", "env:a", "env:b", "env:c"]),
        prop::collection::vec((prop::sample::select(vec!["k1", "k2", "k3"]), "[a-z]{1,4}"), 0..4),
    )
        .prop_map(|(name, entries)| {
            entries
                .into_iter()
                .fold(Section::new(name), |section, (key, value)| section.with(key, value))
        })
}

fn documents_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(
        prop::collection::vec(section_strategy(), 0..4).prop_map(Document::from_sections),
        1..5,
    )
}

proptest! {
    #[test]
    fn sections_keep_first_seen_order(docs in documents_strategy()) {
        let mut expected: Vec<String> = Vec::new();
        for doc in &docs {
            for name in doc.section_names() {
                if !expected.iter().any(|n| n == name) {
                    expected.push(name.to_string());
                }
            }
        }

        let merged = MergedConfig::from_documents(docs);
        let names: Vec<String> = merged.section_names().map(str::to_string).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn last_definition_wins(docs in documents_strategy()) {
        let merged = MergedConfig::from_documents(docs.clone());

        for section in merged.sections() {
            for (key, value) in section.iter() {
                let last = docs
                    .iter()
                    .rev()
                    .find_map(|doc| doc.section(section.name())?.get(key))
                    .cloned();
                prop_assert_eq!(Some(value.clone()), last);
            }
        }
    }

    #[test]
    fn keys_keep_first_seen_position(docs in documents_strategy()) {
        let merged = MergedConfig::from_documents(docs.clone());

        for section in merged.sections() {
            let mut expected: Vec<&str> = Vec::new();
            for doc in &docs {
                if let Some(s) = doc.section(section.name()) {
                    for key in s.keys() {
                        if !expected.contains(&key) {
                            expected.push(key);
                        }
                    }
                }
            }
            let keys: Vec<&str> = section.keys().collect();
            prop_assert_eq!(keys, expected);
        }
    }
}
