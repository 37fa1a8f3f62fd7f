//! Structural check of generated QTI items.
//!
//! This is not schema validation. It re-parses the document and confirms the
//! elements a choice item cannot work without are present.

use std::fmt;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::{Deserialize, Serialize};

/// One structural problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlIssue {
    pub message: String,
}

impl XmlIssue {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for XmlIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Open/closed state of the first occurrence of a tracked element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tracked {
    Absent,
    Open(usize),
    Closed,
}

impl Tracked {
    fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }

    fn is_seen(self) -> bool {
        !matches!(self, Self::Absent)
    }

    fn open(&mut self, depth: usize) {
        if *self == Self::Absent {
            *self = Self::Open(depth);
        }
    }

    fn close(&mut self, depth: usize) {
        if *self == Self::Open(depth) {
            *self = Self::Closed;
        }
    }
}

#[derive(Debug)]
struct Scan {
    root: Option<String>,
    has_xmlns: bool,
    has_identifier: bool,
    response_declaration: Tracked,
    correct_response: bool,
    item_body: Tracked,
    choice_interaction: Tracked,
    simple_choices: usize,
}

impl Scan {
    fn new() -> Self {
        Self {
            root: None,
            has_xmlns: false,
            has_identifier: false,
            response_declaration: Tracked::Absent,
            correct_response: false,
            item_body: Tracked::Absent,
            choice_interaction: Tracked::Absent,
            simple_choices: 0,
        }
    }

    fn enter(&mut self, element: &BytesStart<'_>, depth: usize) {
        let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
        if depth == 0 {
            if self.root.is_none() {
                for attr in element.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"xmlns" => self.has_xmlns = true,
                        b"identifier" => self.has_identifier = true,
                        _ => {}
                    }
                }
                self.root = Some(name);
            }
            return;
        }

        match name.as_str() {
            "responseDeclaration" => self.response_declaration.open(depth),
            "correctResponse" if self.response_declaration.is_open() => {
                self.correct_response = true;
            }
            "itemBody" => self.item_body.open(depth),
            "choiceInteraction" if self.item_body.is_open() => {
                self.choice_interaction.open(depth);
            }
            "simpleChoice" if self.choice_interaction.is_open() => self.simple_choices += 1,
            _ => {}
        }
    }

    fn leave(&mut self, depth: usize) {
        self.response_declaration.close(depth);
        self.item_body.close(depth);
        self.choice_interaction.close(depth);
    }

    fn into_issues(self) -> Vec<XmlIssue> {
        let Some(root) = self.root else {
            return vec![XmlIssue::new("Root element not found")];
        };
        if root != "assessmentItem" {
            return vec![XmlIssue::new(format!(
                "Expected root element 'assessmentItem', got '{root}'"
            ))];
        }

        let mut issues = Vec::new();
        if !self.has_xmlns {
            issues.push(XmlIssue::new("Missing required attribute: xmlns"));
        }
        if !self.has_identifier {
            issues.push(XmlIssue::new("Missing required attribute: identifier"));
        }
        if !self.response_declaration.is_seen() {
            issues.push(XmlIssue::new("Missing required element: responseDeclaration"));
        }
        if !self.item_body.is_seen() {
            issues.push(XmlIssue::new("Missing required element: itemBody"));
        }
        if self.response_declaration.is_seen() && !self.correct_response {
            issues.push(XmlIssue::new(
                "Missing correctResponse in responseDeclaration",
            ));
        }
        if self.item_body.is_seen() {
            if !self.choice_interaction.is_seen() {
                issues.push(XmlIssue::new("Missing choiceInteraction in itemBody"));
            } else if self.simple_choices < 2 {
                issues.push(XmlIssue::new(format!(
                    "At least 2 options required, found {}",
                    self.simple_choices
                )));
            }
        }
        issues
    }
}

/// Checks that `xml` is a well-formed single-choice `assessmentItem`.
///
/// Returns every problem found; an empty list means the document passed.
/// A parse failure is reported on its own.
pub fn validate_xml(xml: &str) -> Vec<XmlIssue> {
    let mut reader = Reader::from_str(xml);
    let mut scan = Scan::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) => {
                scan.enter(&element, depth);
                depth += 1;
            }
            Ok(Event::Empty(element)) => {
                scan.enter(&element, depth);
                scan.leave(depth);
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                scan.leave(depth);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return vec![XmlIssue::new(format!(
                    "Malformed XML: {err} (at byte {})",
                    reader.error_position()
                ))];
            }
        }
    }

    if depth > 0 {
        return vec![XmlIssue::new(format!(
            "Malformed XML: {depth} unclosed element(s) at end of document"
        ))];
    }

    scan.into_issues()
}
