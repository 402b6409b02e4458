//! Cross-crate scenarios built in temporary project directories

use pio_core::{DocumentSource, Error, ProjectConfig};
use pio_ini::Document;
use pio_test_utils::TestProject;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashMap;

fn no_env() -> HashMap<String, String> {
    HashMap::new()
}

#[test]
fn fs_and_injected_sources_agree() {
    let project = TestProject::extends();
    let from_disk = ProjectConfig::builder()
        .with_env(no_env())
        .load(project.root_conf())
        .unwrap();

    let source = |path: &str| -> pio_core::Result<Vec<Document>> {
        let text = match path {
            "extra_envs.ini" => pio_test_utils::fixtures::EXTRA_ENVS_CONFIG,
            "extra_debug.ini" => pio_test_utils::fixtures::EXTRA_DEBUG_CONFIG,
            other => {
                return Err(Error::MissingSource {
                    path: other.to_string(),
                });
            }
        };
        Ok(vec![Document::parse(text)?])
    };
    let in_memory = ProjectConfig::builder()
        .with_env(no_env())
        .with_source(source)
        .parse(pio_test_utils::fixtures::ROOT_CONFIG)
        .unwrap();

    assert_eq!(from_disk.merged(), in_memory.merged());
    assert_eq!(from_disk.to_json().unwrap(), in_memory.to_json().unwrap());
}

#[test]
fn one_entry_may_yield_several_documents() {
    struct Glob;

    impl DocumentSource for Glob {
        fn resolve(&self, path: &str) -> pio_core::Result<Vec<Document>> {
            assert_eq!(path, "envs/*.ini");
            Ok(vec![
                Document::parse("[env:b]\nboard = b\n")?,
                Document::parse("[env:a]\nboard = a\n[env:b]\nboard = b2\n")?,
            ])
        }
    }

    let config = ProjectConfig::builder()
        .with_env(no_env())
        .with_source(Glob)
        .parse("[platformio]\nextra_configs = envs/*.ini\n")
        .unwrap();

    assert_eq!(config.envs(), vec!["b", "a"]);
    assert_eq!(config.get("env:b", "board").unwrap(), "b2");
}

#[rstest]
#[case::first("a.ini, missing.ini")]
#[case::only("missing.ini")]
fn construction_is_all_or_nothing(#[case] extra_configs: &str) {
    let project = TestProject::new();
    project.write(
        "platformio.ini",
        &format!("[platformio]\nextra_configs = {extra_configs}\n"),
    );
    project.write("a.ini", "[env:a]\n");

    let err = ProjectConfig::load(project.root_conf()).unwrap_err();
    assert!(matches!(err, Error::MissingSource { .. }));
}

#[test]
fn duplicate_key_in_one_document_is_rejected() {
    let project = TestProject::new();
    project.write("platformio.ini", "[env:a]\nboard = x\nboard = y\n");

    let err = ProjectConfig::load(project.root_conf()).unwrap_err();
    assert!(err.is_parse_error());
}

#[test]
fn same_key_across_documents_is_an_override() {
    let project = TestProject::new();
    project.write(
        "platformio.ini",
        "[platformio]\nextra_configs = b.ini\n[env:a]\nboard = x\nspeed = 1\n",
    );
    project.write("b.ini", "[env:a]\nboard = y\n");

    let config = ProjectConfig::builder()
        .with_env(no_env())
        .load(project.root_conf())
        .unwrap();
    assert_eq!(config.options(None, Some("a")).unwrap(), vec!["board", "speed"]);
    assert_eq!(config.get("env:a", "board").unwrap(), "y");
}

#[test]
fn override_reaches_earlier_references() {
    let project = TestProject::new();
    project.write(
        "platformio.ini",
        "[platformio]\nextra_configs = late.ini\n[common]\nopt = -O2\n[env:a]\nflags = ${common.opt}\n",
    );
    project.write("late.ini", "[common]\nopt = -O0\n");

    let config = ProjectConfig::builder()
        .with_env(no_env())
        .load(project.root_conf())
        .unwrap();
    assert_eq!(config.get("env:a", "flags").unwrap(), "-O0");
}
