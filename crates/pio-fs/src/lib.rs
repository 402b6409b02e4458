//! Filesystem layer for PlatformIO project configuration
//!
//! Provides platform-neutral path handling and the text reads used to load
//! project documents.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::NormalizedPath;
