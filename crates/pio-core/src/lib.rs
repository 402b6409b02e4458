//! Core configuration engine for PlatformIO projects
//!
//! This crate turns a root project file plus its secondary documents into a
//! single ordered configuration, implementing:
//!
//! - **Merging**: first-seen section order, in-place key overrides
//! - **Interpolation**: lazy `${section.option}` / `${sysenv.NAME}` expansion
//!   with circular-reference detection
//! - **Environments**: `env:*` sections and the default-environment subset
//!
//! # Architecture
//!
//! ```text
//!          pio-cli
//!             |
//!         pio-core
//!             |
//!      +------+------+
//!      |             |
//!   pio-fs        pio-ini
//! ```

pub mod config;
pub mod env;
pub mod error;

pub use config::{
    DocumentSource, FsSource, Interpolator, MergedConfig, NoSource, ProjectConfig,
    ProjectConfigBuilder, Selector,
};
pub use env::{EnvProvider, ProcessEnv};
pub use error::{Error, Result};
pub use pio_ini::{Document, Section, Value};
