//! INI document model for PlatformIO project files
//!
//! A [`Document`] is an ordered list of [`Section`]s, each an ordered list of
//! key/[`Value`] entries. Order is preserved exactly as written so that
//! higher layers can reason about first-seen positions.
//!
//! # Example
//!
//! ```
//! use pio_ini::{Document, Value};
//!
//! let doc = Document::parse("[env:uno]\nboard = uno\n").unwrap();
//! let env = doc.section("env:uno").unwrap();
//! assert_eq!(env.get("board"), Some(&Value::scalar("uno")));
//! ```

pub mod document;
pub mod error;
mod parser;

pub use document::{Document, Section, Value};
pub use error::{Error, Result};
