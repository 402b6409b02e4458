//! Golden projects under `test-fixtures/projects`
//!
//! Each fixture is loaded straight from the repository with an explicit
//! environment map, so the results do not depend on the host environment.

use pio_core::{Error, ProjectConfig, Value};
use pio_fs::NormalizedPath;
use pio_test_utils::fixtures::EXTRA_FLAGS_VAR;
use pretty_assertions::assert_eq;
use std::collections::HashMap;

fn fixture(name: &str) -> NormalizedPath {
    NormalizedPath::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/projects")
        .join(name)
        .join("platformio.ini")
}

fn load(name: &str, vars: &[(&str, &str)]) -> ProjectConfig {
    let env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ProjectConfig::builder()
        .with_env(env)
        .load(fixture(name))
        .unwrap()
}

// ============================================================================
// extends: three documents, overrides in the last one
// ============================================================================

#[test]
fn extends_sections_envs_and_defaults() {
    let config = load("extends", &[]);
    assert_eq!(
        config.sections(),
        vec![
            "platformio",
            "common",
            "env:esp-wrover-kit",
            "env:esp32dev",
            "env:lolin32"
        ]
    );
    assert_eq!(config.envs(), vec!["esp-wrover-kit", "esp32dev", "lolin32"]);
    assert_eq!(config.default_envs(), vec!["esp32dev", "lolin32"]);
}

#[test]
fn extends_unset_sysenv_is_empty() {
    let config = load("extends", &[]);
    assert_eq!(config.get("common", "extra_flags").unwrap(), "");
    assert_eq!(config.get("env:esp-wrover-kit", "build_flags").unwrap(), "-D DEBUG=1 ");
}

#[test]
fn extends_resolved_values() {
    let config = load("extends", &[(EXTRA_FLAGS_VAR, "-L /usr/local/lib")]);
    assert_eq!(config.get("common", "debug_flags").unwrap(), "-D DEBUG=1");
    assert_eq!(config.get("env:esp32dev", "build_flags").unwrap(), "-lc -lm -D DEBUG=1");
    assert_eq!(config.get("env:lolin32", "build_flags").unwrap(), "-Og");
    assert_eq!(
        config.get("env:esp-wrover-kit", "build_flags").unwrap(),
        "-D DEBUG=1 -L /usr/local/lib"
    );
}

#[test]
fn extends_json_dump() {
    let config = load("extends", &[(EXTRA_FLAGS_VAR, "-L /usr/local/lib")]);
    let json = config.to_json().unwrap();
    assert_eq!(
        json[1],
        serde_json::json!([
            "common",
            [
                ["debug_flags", "-D DEBUG=1"],
                ["lib_flags", "-lc -lm"],
                ["extra_flags", "-L /usr/local/lib"]
            ]
        ])
    );
    assert_eq!(
        json[0][1][1],
        serde_json::json!(["extra_configs", ["extra_envs.ini", "extra_debug.ini"]])
    );
}

// ============================================================================
// lists: multi-line values, inline comments, `default_envs` spelling
// ============================================================================

#[test]
fn lists_default_envs_spelling() {
    let config = load("lists", &[]);
    assert_eq!(config.envs(), vec!["release", "debug"]);
    assert_eq!(config.default_envs(), vec!["release", "debug"]);
}

#[test]
fn lists_elements_resolve_independently() {
    let config = load("lists", &[("PIO_FIXTURE_VERSION", "7")]);
    assert_eq!(
        config.get_value("common", "build_flags").unwrap(),
        Value::list(["-Wall", "-DVERSION=7"])
    );
    assert_eq!(
        config.get_list("env:debug", "build_flags").unwrap(),
        vec!["-Wall", "-DVERSION=7", "-Og"]
    );
}

#[test]
fn lists_inline_comment_is_dropped() {
    let config = load("lists", &[("PIO_FIXTURE_VERSION", "7")]);
    assert_eq!(
        config.get("env:release", "build_flags").unwrap(),
        "-Wall\n-DVERSION=7"
    );
}

#[test]
fn lists_cross_document_references() {
    let config = load("lists", &[]);
    assert_eq!(
        config.get_list("env:debug", "lib_deps").unwrap(),
        vec!["bblanchon/ArduinoJson @ ^6.21", "paulstoffregen/OneWire"]
    );
    assert_eq!(
        config.options(None, Some("debug")).unwrap(),
        vec!["platform", "board", "build_type", "build_flags", "lib_deps"]
    );
}

#[test]
fn lists_validate() {
    let config = load("lists", &[]);
    assert!(config.validate(&["release"]).is_ok());
    assert!(matches!(
        config.validate(&["uno"]),
        Err(Error::UnknownEnvironments { .. })
    ));
}
