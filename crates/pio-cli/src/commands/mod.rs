//! Command implementations for pio-cli

pub mod config;

pub use config::{
    load_project, run_default_envs, run_dump, run_envs, run_get, run_items, run_options,
    run_sections, run_validate,
};
