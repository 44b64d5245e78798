//! Custom error types for the sdef-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum SdefError {
    /// The sdef bytes are not valid UTF-8.
    #[error("Sdef data is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The sdef bytes are not well-formed XML (this also covers a document
    /// with no root `dictionary` element, which roxmltree rejects outright).
    #[error("Malformed sdef XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A required `name` or `code` attribute is absent, or `name` is empty,
    /// on an element that mandates both.
    #[error("Missing 'name'/'code' attribute on <{0}> element")]
    MissingNameCode(String),

    /// A `synonym` element carries neither a `name` nor a `code` attribute.
    #[error("Missing 'name'/'code' attribute for synonym")]
    MissingSynonymNameCode,

    /// A `class-extension` element has no `extends` attribute.
    #[error("Missing 'extends' attribute for class-extension")]
    MissingExtends,

    /// A code string has the wrong length for any accepted form.
    #[error("Invalid four-char code (wrong length): {0:?}")]
    CodeWrongLength(String),

    /// A `0x`-prefixed code string contains non-hexadecimal digits.
    #[error("Invalid four-char code (bad representation): {0:?}")]
    CodeBadDigits(String),

    /// A code string contains a character with no Mac Roman encoding.
    #[error("Invalid four-char code (bad encoding): {0:?}")]
    CodeNotMacRoman(String),

    /// A `class-extension` extends a class name never seen in this parse.
    #[error("class-extension extends unknown class '{0}'")]
    UnknownClass(String),
}

/// A convenience `Result` type alias using the crate's `SdefError` type.
pub type Result<T> = std::result::Result<T, SdefError>;
