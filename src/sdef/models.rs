//! Data structures representing extracted sdef vocabulary terms.

use std::fmt;

use super::fourcc::{four_char_string, OsType};

/// What role a [`KeywordTerm`] plays in the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    Type,
    Enumerator,
    Property,
    Parameter,
}

impl fmt::Display for KeywordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            KeywordKind::Type => "type",
            KeywordKind::Enumerator => "enumerator",
            KeywordKind::Property => "property",
            KeywordKind::Parameter => "parameter",
        };
        f.write_str(label)
    }
}

/// A named, coded leaf vocabulary item: a type, enumerator, property, or
/// command parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeywordTerm {
    pub name: String,
    pub code: OsType,
    pub kind: KeywordKind,
    pub description: Option<String>,
}

impl KeywordTerm {
    pub fn new(
        name: String,
        code: OsType,
        kind: KeywordKind,
        description: Option<String>,
    ) -> Self {
        Self {
            name,
            code,
            kind,
            description,
        }
    }
}

impl fmt::Display for KeywordTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<KeywordTerm={}:{}={}>",
            self.kind,
            self.name,
            four_char_string(self.code)
        )
    }
}

/// A scriptable class or type.
///
/// `inherits_from_name` names the parent class as written in the document;
/// the parser never checks that such a class exists. Resolution is the
/// consumer's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassTerm {
    pub name: String,
    /// Explicit `plural` attribute, or inferred from the singular name.
    pub plural_name: String,
    pub code: OsType,
    pub inherits_from_name: Option<String>,
    pub description: Option<String>,
}

impl fmt::Display for ClassTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<ClassTerm {}={}>",
            self.name,
            four_char_string(self.code)
        )
    }
}

/// A command (or event), identified by its `(event_class, event_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandTerm {
    pub name: String,
    pub event_class: OsType,
    pub event_id: OsType,
    pub description: Option<String>,
    parameters: Vec<KeywordTerm>,
}

impl CommandTerm {
    pub fn new(
        name: String,
        event_class: OsType,
        event_id: OsType,
        description: Option<String>,
    ) -> Self {
        Self {
            name,
            event_class,
            event_id,
            description,
            parameters: Vec::new(),
        }
    }

    /// Append a parameter in declaration order.
    pub fn add_parameter(&mut self, name: String, code: OsType, description: Option<String>) {
        self.parameters.push(KeywordTerm::new(
            name,
            code,
            KeywordKind::Parameter,
            description,
        ));
    }

    /// The command's parameters, in declaration order.
    pub fn parameters(&self) -> &[KeywordTerm] {
        &self.parameters
    }
}

impl fmt::Display for CommandTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .parameters
            .iter()
            .map(|p| format!("{}={}", p.name, four_char_string(p.code)))
            .collect::<Vec<_>>()
            .join(",");
        write!(
            f,
            "<Command:{}={}{}({})>",
            self.name,
            four_char_string(self.event_class),
            four_char_string(self.event_id),
            params
        )
    }
}
