//! Platform-specific abstractions.
//!
//! - [`clipboard`] - Cross-platform clipboard access
//!
//! Browser opening goes straight through the `open` crate and needs no
//! wrapper here.

pub mod clipboard;
