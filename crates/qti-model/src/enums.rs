//! Question type enumerations.
//!
//! Two related types live here:
//!
//! - [`QuestionType`] is what the classifier reports for a raw row. A type
//!   column may hold anything, so unknown values are preserved verbatim in
//!   [`QuestionType::Other`].
//! - [`QuestionKind`] is the closed set carried by a canonical
//!   [`Question`](crate::Question) handed to the codec.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Detected question type for a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QuestionType {
    /// Multiple choice, single correct answer.
    Mcq,
    /// Multiple select, one or more correct answers.
    Msq,
    TrueFalse,
    /// Free text or numeric answer.
    ShortAnswer,
    /// Ordering interaction.
    Order,
    /// A caller-declared type with no type-specific rules.
    Other(String),
}

impl QuestionType {
    /// Parses a declared type (already lowercased and trimmed by the caller
    /// or not; both work). Never fails.
    pub fn from_declared(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "mcq" => Self::Mcq,
            "msq" => Self::Msq,
            "truefalse" => Self::TrueFalse,
            "shortanswer" | "textentry" => Self::ShortAnswer,
            "order" => Self::Order,
            _ => Self::Other(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Mcq => "mcq",
            Self::Msq => "msq",
            Self::TrueFalse => "truefalse",
            Self::ShortAnswer => "shortanswer",
            Self::Order => "order",
            Self::Other(raw) => raw,
        }
    }

    /// Canonical kind, or `None` for unrecognized declared types.
    pub fn kind(&self) -> Option<QuestionKind> {
        match self {
            Self::Mcq => Some(QuestionKind::Mcq),
            Self::Msq => Some(QuestionKind::Msq),
            Self::TrueFalse => Some(QuestionKind::TrueFalse),
            Self::ShortAnswer => Some(QuestionKind::ShortAnswer),
            Self::Order => Some(QuestionKind::Order),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for QuestionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_declared(&raw))
    }
}

/// Closed set of question kinds accepted by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "MCQ")]
    Mcq,
    #[serde(rename = "MSQ")]
    Msq,
    TrueFalse,
    ShortAnswer,
    #[serde(rename = "OrderInteraction")]
    Order,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Mcq => "MCQ",
            QuestionKind::Msq => "MSQ",
            QuestionKind::TrueFalse => "TrueFalse",
            QuestionKind::ShortAnswer => "ShortAnswer",
            QuestionKind::Order => "OrderInteraction",
        }
    }

    /// The lowercase type name used in rows and JSON exports.
    pub fn type_name(&self) -> &'static str {
        match self {
            QuestionKind::Mcq => "mcq",
            QuestionKind::Msq => "msq",
            QuestionKind::TrueFalse => "truefalse",
            QuestionKind::ShortAnswer => "shortanswer",
            QuestionKind::Order => "order",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MCQ" => Ok(QuestionKind::Mcq),
            "MSQ" => Ok(QuestionKind::Msq),
            "TRUEFALSE" => Ok(QuestionKind::TrueFalse),
            "SHORTANSWER" | "TEXTENTRY" => Ok(QuestionKind::ShortAnswer),
            "ORDER" | "ORDERINTERACTION" => Ok(QuestionKind::Order),
            _ => Err(format!("Unknown question kind: {s}")),
        }
    }
}
