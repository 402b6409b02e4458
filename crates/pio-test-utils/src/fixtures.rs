//! The three-document project used across the workspace test suites.
//!
//! The root declares two secondary documents. The second one overrides
//! `common.debug_flags` and `env:lolin32.build_flags`.

/// Name of the environment variable read by `common.extra_flags`.
pub const EXTRA_FLAGS_VAR: &str = "__PIO_TEST_CNF_EXTRA_FLAGS";

pub const ROOT_CONFIG: &str = r#"
[platformio]
env_default = esp32dev, lolin32
extra_configs =
  extra_envs.ini
  extra_debug.ini

[common]
debug_flags = -D RELEASE
lib_flags = -lc -lm
extra_flags = ${sysenv.__PIO_TEST_CNF_EXTRA_FLAGS}

[env:esp-wrover-kit]
platform = espressif32
framework = espidf
board = esp-wrover-kit
build_flags = ${common.debug_flags} ${common.extra_flags}
"#;

pub const EXTRA_ENVS_CONFIG: &str = r#"
[env:esp32dev]
platform = espressif32
framework = espidf
board = esp32dev
build_flags = ${common.lib_flags} ${common.debug_flags}

[env:lolin32]
platform = espressif32
framework = espidf
board = lolin32
build_flags = ${common.debug_flags} ${common.extra_flags}
"#;

pub const EXTRA_DEBUG_CONFIG: &str = r#"
# Override base "common.debug_flags"
[common]
debug_flags = -D DEBUG=1

[env:lolin32]
build_flags = -Og
"#;
