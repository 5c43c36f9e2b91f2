//! Crate-wide constants.

/// Nesting limit applied by [`crate::JsonOptions::default`].
pub const DEFAULT_JSON_DEPTH: usize = 512;

/// Indentation used when pretty-printing JSON.
pub const PRETTY_INDENT: &[u8] = b"    ";
