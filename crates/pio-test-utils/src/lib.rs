//! Shared test utilities for the pio-config workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`](project::TestProject) builder for on-disk projects
//! - [`fixtures`]: document texts for the canonical three-file project

pub mod fixtures;
pub mod project;

pub use project::TestProject;
