//! Core sdef parsing module

pub mod error;
pub mod fourcc;
pub mod models;

use std::collections::HashMap;

use log::{debug, info};
use roxmltree::{Document, Node, ParsingOptions};

pub use error::{Result, SdefError};
use fourcc::OsType;
use models::{ClassTerm, CommandTerm, KeywordKind, KeywordTerm};

/// Receives terms as the parser discovers them.
///
/// The parser only reports; accumulation policy (lookup maps, dedup,
/// filtering) belongs entirely to the implementation. [`TermCollector`] is
/// a ready-made implementation that keeps everything in vectors.
pub trait SdefDelegate {
    fn add_type(&mut self, term: KeywordTerm);
    fn add_class(&mut self, term: ClassTerm);
    fn add_property(&mut self, term: KeywordTerm);
    fn add_enumerator(&mut self, term: KeywordTerm);

    /// Called once per `command`/`event` element, including duplicates.
    ///
    /// Dictionaries can define the same command name more than once
    /// (e.g. `path to`). Convention for consumers that need one winner:
    /// keep the last definition when the codes match, otherwise keep the
    /// first. The parser takes no position and reports every occurrence.
    fn add_command(&mut self, term: CommandTerm);
}

/// A [`SdefDelegate`] that accumulates every reported term into vectors,
/// in the order the parser emitted them.
#[derive(Debug, Default)]
pub struct TermCollector {
    pub types: Vec<KeywordTerm>,
    pub classes: Vec<ClassTerm>,
    pub properties: Vec<KeywordTerm>,
    pub enumerators: Vec<KeywordTerm>,
    pub commands: Vec<CommandTerm>,
}

impl SdefDelegate for TermCollector {
    fn add_type(&mut self, term: KeywordTerm) {
        self.types.push(term);
    }
    fn add_class(&mut self, term: ClassTerm) {
        self.classes.push(term);
    }
    fn add_property(&mut self, term: KeywordTerm) {
        self.properties.push(term);
    }
    fn add_enumerator(&mut self, term: KeywordTerm) {
        self.enumerators.push(term);
    }
    fn add_command(&mut self, term: CommandTerm) {
        self.commands.push(term);
    }
}

/// The parser for sdef dictionary documents.
///
/// Walks the `suite` elements of the dictionary, interprets each
/// definition element, and reports the resulting terms to the delegate.
/// The first malformed definition aborts the whole parse.
pub struct SdefParser<'d, D: SdefDelegate> {
    delegate: &'d mut D,
    /// Class (and record/value type) names seen so far in this parse,
    /// used to resolve `class-extension` targets.
    codes_for_class_names: HashMap<String, OsType>,
}

impl<'d, D: SdefDelegate> SdefParser<'d, D> {
    pub fn new(delegate: &'d mut D) -> Self {
        Self {
            delegate,
            codes_for_class_names: HashMap::new(),
        }
    }

    /// Parse the given sdef XML bytes, reporting terms to the delegate.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The bytes are not UTF-8 or not well-formed XML
    /// - A definition element lacks a mandatory `name`/`code` attribute
    /// - A code string is not a valid four-char or hex code
    /// - A `class-extension` extends a class not seen earlier in the
    ///   document
    pub fn parse(&mut self, sdef: &[u8]) -> Result<()> {
        self.codes_for_class_names.clear();

        let text = std::str::from_utf8(sdef)?;
        // real sdef files declare a DOCTYPE pointing at sdef.dtd
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(text, options)?;
        let dictionary = doc.root_element();

        info!(
            "Parsing sdef dictionary: title={:?}",
            dictionary.attribute("title").unwrap_or("")
        );
        for suite in dictionary.children().filter(|n| n.has_tag_name("suite")) {
            debug!("Parsing suite {:?}", suite.attribute("name").unwrap_or(""));
            for node in suite.children().filter(Node::is_element) {
                self.parse_definition(node)?;
            }
        }
        Ok(())
    }

    /// Interpret one definition element of a suite. Unrecognized tags are
    /// skipped, not rejected.
    fn parse_definition(&mut self, element: Node) -> Result<()> {
        match element.tag_name().name() {
            "class" => {
                let (name, code) = self.parse_type_element(element)?;
                self.parse_properties(element)?;
                // Use the plural class name as the elements name. The sdef
                // spec says to append "s" when the plural attribute is
                // absent; that reads badly for names already ending in "s"
                // (e.g. "print settings") and for "text", so those keep the
                // singular form.
                let plural = element.attribute("plural").map(str::to_string);
                let plural = plural.unwrap_or_else(|| {
                    if name == "text" || name.ends_with('s') {
                        name.clone()
                    } else {
                        format!("{}s", name)
                    }
                });
                self.delegate.add_class(ClassTerm {
                    name,
                    plural_name: plural,
                    code,
                    inherits_from_name: element.attribute("inherits").map(str::to_string),
                    description: description_of(element),
                });
            }
            "class-extension" => {
                let name = element
                    .attribute("extends")
                    .ok_or(SdefError::MissingExtends)?;
                let code = *self
                    .codes_for_class_names
                    .get(name)
                    .ok_or_else(|| SdefError::UnknownClass(name.to_string()))?;
                self.parse_properties(element)?;
                self.parse_synonyms(element, name, code)?;
            }
            "record-type" => {
                let _ = self.parse_type_element(element)?;
                self.parse_properties(element)?;
            }
            "value-type" => {
                let _ = self.parse_type_element(element)?;
            }
            "enumeration" => {
                for child in element.children().filter(|n| n.has_tag_name("enumerator")) {
                    let (name, code) = parse_name_code(child)?;
                    self.delegate.add_enumerator(KeywordTerm::new(
                        name,
                        code,
                        KeywordKind::Enumerator,
                        description_of(child),
                    ));
                }
            }
            "command" | "event" => {
                let (name, event_class, event_id) = parse_command_ids(element)?;
                let mut command =
                    CommandTerm::new(name, event_class, event_id, description_of(element));
                for child in element.children().filter(|n| n.has_tag_name("parameter")) {
                    let (name, code) = parse_name_code(child)?;
                    command.add_parameter(name, code, description_of(child));
                }
                self.delegate.add_command(command);
            }
            _ => {}
        }
        Ok(())
    }

    /// Shared handling for `class`, `record-type`, and `value-type`:
    /// report the type term, register the name for class-extension lookup,
    /// and process synonyms.
    fn parse_type_element(&mut self, element: Node) -> Result<(String, OsType)> {
        let (name, code) = parse_name_code(element)?;
        self.delegate.add_type(KeywordTerm::new(
            name.clone(),
            code,
            KeywordKind::Type,
            description_of(element),
        ));
        self.codes_for_class_names.insert(name.clone(), code);
        self.parse_synonyms(element, &name, code)?;
        Ok((name, code))
    }

    /// Report each `synonym` child as an additional type term. A synonym
    /// may give its own name and/or code; whatever it omits is taken from
    /// the owning element.
    fn parse_synonyms(&mut self, element: Node, name: &str, code: OsType) -> Result<()> {
        for child in element.children().filter(|n| n.has_tag_name("synonym")) {
            let syn_name = child.attribute("name").filter(|n| !n.is_empty());
            let syn_code = child
                .attribute("code")
                .map(fourcc::parse_four_char_code)
                .transpose()?;
            let (name, code) = match (syn_name, syn_code) {
                (Some(n), Some(c)) => (n.to_string(), c),
                (Some(n), None) => (n.to_string(), code),
                (None, Some(c)) => (name.to_string(), c),
                (None, None) => return Err(SdefError::MissingSynonymNameCode),
            };
            self.delegate.add_type(KeywordTerm::new(
                name,
                code,
                KeywordKind::Type,
                description_of(child),
            ));
        }
        Ok(())
    }

    /// Report each `property` child of a class/class-extension/record-type.
    fn parse_properties(&mut self, element: Node) -> Result<()> {
        for child in element.children().filter(|n| n.has_tag_name("property")) {
            let (name, code) = parse_name_code(child)?;
            self.delegate.add_property(KeywordTerm::new(
                name,
                code,
                KeywordKind::Property,
                description_of(child),
            ));
        }
        Ok(())
    }
}

/// Extract the mandatory `name` and `code` attributes of a definition
/// element; the name must be non-empty.
fn parse_name_code(element: Node) -> Result<(String, OsType)> {
    let name = element.attribute("name").filter(|n| !n.is_empty());
    match (name, element.attribute("code")) {
        (Some(name), Some(code)) => {
            Ok((name.to_string(), fourcc::parse_four_char_code(code)?))
        }
        _ => Err(SdefError::MissingNameCode(
            element.tag_name().name().to_string(),
        )),
    }
}

/// Extract the mandatory `name` and dual eventClass/eventID `code`
/// attributes of a `command`/`event` element.
fn parse_command_ids(element: Node) -> Result<(String, OsType, OsType)> {
    let name = element.attribute("name").filter(|n| !n.is_empty());
    match (name, element.attribute("code")) {
        (Some(name), Some(code)) => {
            let (event_class, event_id) = fourcc::parse_eight_char_code(code)?;
            Ok((name.to_string(), event_class, event_id))
        }
        _ => Err(SdefError::MissingNameCode(
            element.tag_name().name().to_string(),
        )),
    }
}

fn description_of(element: Node) -> Option<String> {
    element.attribute("description").map(str::to_string)
}
