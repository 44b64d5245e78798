//! # sdef-reader
//!
//! A reader for macOS scripting definition (.sdef) dictionaries.
//! Extracts the classes, types, properties, enumerators, and commands an
//! application exposes to automation, each carrying its four-char code,
//! and reports them to a caller-supplied delegate.
//!
//! **Note:** Retrieving the sdef bytes from an application bundle
//! (`OSACopyScriptingDefinition`) is left to the caller; this crate only
//! consumes already-loaded XML bytes.
pub mod sdef;

// Re-export the main types for convenience
pub use sdef::{
    error::{Result, SdefError},
    fourcc::{four_char_string, parse_eight_char_code, parse_four_char_code, OsType},
    models::{ClassTerm, CommandTerm, KeywordKind, KeywordTerm},
    SdefDelegate, SdefParser, TermCollector,
};
