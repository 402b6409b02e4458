//! Project configuration resolution
//!
//! This module merges a root `platformio.ini` with the secondary documents it
//! names and answers reads against the result.
//!
//! # Merge order
//!
//! Documents are folded left to right: the root first, then each entry of
//! `[platformio] extra_configs` in listed order. Sections keep the order in
//! which their names were first seen. A key redefined by a later document
//! replaces the earlier value outright but keeps its position.
//!
//! # Interpolation
//!
//! Values may contain `${section.option}` and `${sysenv.NAME}` tokens. They
//! are resolved on every read, never at build time:
//!
//! - `${section.option}` resolves the referenced value recursively
//! - `${sysenv.NAME}` reads the environment provider; unset means empty
//!
//! # Example
//!
//! ```ignore
//! use pio_core::ProjectConfig;
//!
//! let config = ProjectConfig::load("platformio.ini")?;
//! for env in config.default_envs() {
//!     let flags = config.get(&format!("env:{env}"), "build_flags")?;
//!     println!("{env}: {flags}");
//! }
//! ```

pub mod envs;
mod interpolate;
mod merge;
mod project;
mod source;
mod values;

pub use envs::{ENV_PREFIX, env_of_section, section_for_env};
pub use interpolate::{Interpolator, SYSENV_NAMESPACE};
pub use merge::{EXTRA_CONFIGS_OPTION, FoldStats, MergedConfig, PLATFORMIO_SECTION};
pub use project::{ProjectConfig, ProjectConfigBuilder, Selector};
pub use source::{DocumentSource, FsSource, NoSource, load_document};
pub use values::parse_multi_values;
