//! Row-to-item conversion and multi-type QTI rendering.
//!
//! Unlike the strict MCQ builder this path accepts every question kind and
//! both QTI 2.1 and 2.2. It converts a spreadsheet row into a [`QtiItem`],
//! which can then be rendered as XML or collected into a JSON document.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use qti_model::answer::{ROW_LABEL_LIMIT, choice_identifier, single_char_choice_index};
use qti_model::{QuestionKind, RoleMapping, Row};
use serde::{Deserialize, Serialize};

use crate::error::BuildError;
use crate::writer::QtiWriter;

const TITLE_CHARS: usize = 100;
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Target QTI version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QtiVersion {
    #[default]
    #[serde(rename = "2.1")]
    V2_1,
    #[serde(rename = "2.2")]
    V2_2,
}

impl QtiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V2_1 => "2.1",
            Self::V2_2 => "2.2",
        }
    }

    pub fn namespace(&self) -> &'static str {
        match self {
            Self::V2_1 => "http://www.imsglobal.org/xsd/imsqti_v2p1",
            Self::V2_2 => "http://www.imsglobal.org/xsd/imsqti_v2p2",
        }
    }

    pub fn schema_location(&self) -> &'static str {
        match self {
            Self::V2_1 => {
                "http://www.imsglobal.org/xsd/imsqti_v2p1 http://www.imsglobal.org/xsd/qti/qtiv2p1/imsqti_v2p1.xsd"
            }
            Self::V2_2 => {
                "http://www.imsglobal.org/xsd/imsqti_v2p2 http://www.imsglobal.org/xsd/qti/qtiv2p2/imsqti_v2p2.xsd"
            }
        }
    }

    /// Response processing template URI.
    pub fn template(&self) -> &'static str {
        match self {
            Self::V2_1 => "http://www.imsglobal.org/xsd/imsqti_v2p1/imsqti_v2p1_outcomes_v1p0.xml",
            Self::V2_2 => "http://www.imsglobal.org/xsd/imsqti_v2p2/imsqti_v2p2_outcomes_v2p0.xml",
        }
    }
}

impl fmt::Display for QtiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QtiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2.1" => Ok(Self::V2_1),
            "2.2" => Ok(Self::V2_2),
            other => Err(format!("Unsupported QTI version: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QtiOption {
    pub id: String,
    pub label: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
}

/// Intermediate item built from one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QtiItem {
    pub id: String,
    #[serde(rename = "type", with = "kind_name")]
    pub kind: QuestionKind,
    pub title: String,
    pub question_text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QtiOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

/// Items carry the lowercase type name (`mcq`, `order`, ...) in JSON.
mod kind_name {
    use qti_model::QuestionKind;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(kind: &QuestionKind, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(kind.type_name())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<QuestionKind, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

impl QtiItem {
    /// Identifiers of the options marked correct, in option order.
    pub fn correct_ids(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|option| option.correct == Some(true))
            .map(|option| option.id.as_str())
            .collect()
    }
}

/// Converts a row into an item of the given kind.
///
/// Option identifiers follow the position of each non-empty option cell, so
/// they line up with the answer resolution used by row validation.
pub fn convert_row(row: &Row, kind: QuestionKind, mapping: &RoleMapping) -> QtiItem {
    let id = match row.id.trim() {
        "" => "item".to_string(),
        trimmed => trimmed.to_string(),
    };
    let question_text = row
        .text(mapping.question())
        .map(Cow::into_owned)
        .unwrap_or_default();
    let title = if question_text.is_empty() {
        format!("Question {id}")
    } else {
        question_text.chars().take(TITLE_CHARS).collect()
    };

    let mut metadata = BTreeMap::new();
    for (key, column) in [("subject", mapping.subject()), ("topic", mapping.topic())] {
        if let Some(value) = row.text(column) {
            metadata.insert(key.to_string(), value.into_owned());
        }
    }

    let mut item = QtiItem {
        id,
        kind,
        title,
        question_text,
        options: Vec::new(),
        correct_answer: None,
        explanation: row.text(mapping.solution()).map(Cow::into_owned),
        points: mapping.points().and_then(|column| row.get(column).as_number()),
        difficulty: row.text(mapping.difficulty()).map(Cow::into_owned),
        metadata,
    };

    let answer = row.text(mapping.answer()).map(Cow::into_owned);
    match kind {
        QuestionKind::Mcq => {
            item.options = letter_options(row, mapping);
            let correct = answer
                .as_deref()
                .and_then(resolve_label)
                .filter(|id| item.options.iter().any(|option| &option.id == id));
            if let Some(correct) = correct {
                mark_correct(&mut item.options, &[correct.as_str()]);
                item.correct_answer = Some(correct);
            }
        }
        QuestionKind::Msq => {
            item.options = letter_options(row, mapping);
            let correct: Vec<String> = answer
                .as_deref()
                .map(|answer| answer.split(',').filter_map(resolve_label).collect())
                .unwrap_or_default();
            if !correct.is_empty() {
                let ids: Vec<&str> = correct.iter().map(String::as_str).collect();
                mark_correct(&mut item.options, &ids);
                item.correct_answer = Some(correct.join(","));
            }
        }
        QuestionKind::TrueFalse => {
            item.options = vec![
                plain_option("T", "True", "True"),
                plain_option("F", "False", "False"),
            ];
            if let Some(answer) = answer {
                let correct = match answer.to_lowercase().as_str() {
                    "true" | "t" | "yes" | "y" => "T",
                    _ => "F",
                };
                mark_correct(&mut item.options, &[correct]);
                item.correct_answer = Some(correct.to_string());
            }
        }
        QuestionKind::ShortAnswer => item.correct_answer = answer,
        QuestionKind::Order => {
            let sequence = row.text(mapping.order()).map(Cow::into_owned);
            item.options = sequence
                .as_deref()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .enumerate()
                .map(|(index, entry)| {
                    let id = format!("ITEM_{}", index + 1);
                    plain_option(&id, &format!("Item {}", index + 1), entry)
                })
                .collect();
            if !item.options.is_empty() {
                let order: Vec<&str> = item.options.iter().map(|o| o.id.as_str()).collect();
                item.correct_answer = Some(order.join(","));
            }
        }
    }
    item
}

fn letter_options(row: &Row, mapping: &RoleMapping) -> Vec<QtiOption> {
    mapping
        .option_cols
        .iter()
        .filter_map(|column| row.get(column).text())
        .take(ROW_LABEL_LIMIT)
        .enumerate()
        .filter_map(|(index, content)| {
            let id = choice_identifier(index)?.to_string();
            let label = format!("Option {id}");
            Some(QtiOption {
                correct: Some(false),
                ..plain_option(&id, &label, &content)
            })
        })
        .collect()
}

fn plain_option(id: &str, label: &str, content: &str) -> QtiOption {
    QtiOption {
        id: id.to_string(),
        label: label.to_string(),
        content: content.to_string(),
        correct: None,
    }
}

fn mark_correct(options: &mut [QtiOption], correct: &[&str]) {
    for option in options {
        option.correct = Some(correct.contains(&option.id.as_str()));
    }
}

/// `A`-`H` or `1`-`8` as an option letter.
fn resolve_label(label: &str) -> Option<String> {
    single_char_choice_index(label, ROW_LABEL_LIMIT)
        .and_then(choice_identifier)
        .map(String::from)
}

fn format_score(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Renders an item as a QTI 2.1 or 2.2 `assessmentItem`.
pub fn render_item(item: &QtiItem, version: QtiVersion) -> Result<String, BuildError> {
    let mut xml = QtiWriter::new()?;
    xml.start(
        "assessmentItem",
        &[
            ("xmlns", version.namespace()),
            ("xmlns:xsi", XSI_NS),
            ("xsi:schemaLocation", version.schema_location()),
            ("identifier", item.id.as_str()),
            ("title", item.title.as_str()),
            ("adaptive", "false"),
            ("timeDependent", "false"),
        ],
    )?;

    write_response_declaration(&mut xml, item)?;

    let default_score = match version {
        QtiVersion::V2_1 => "0".to_string(),
        QtiVersion::V2_2 => format_score(item.points.filter(|p| *p != 0.0).unwrap_or(1.0)),
    };
    xml.start(
        "outcomeDeclaration",
        &[
            ("identifier", "SCORE"),
            ("cardinality", "single"),
            ("baseType", "float"),
        ],
    )?;
    xml.start("defaultValue", &[])?;
    xml.text_element("value", &[], &default_score)?;
    xml.end("defaultValue")?;
    xml.end("outcomeDeclaration")?;

    xml.start("itemBody", &[])?;
    xml.start("div", &[])?;
    xml.text_element("p", &[], &item.question_text)?;
    write_interaction(&mut xml, item)?;
    xml.end("div")?;
    if let Some(explanation) = &item.explanation {
        xml.start(
            "feedbackBlock",
            &[
                ("identifier", "fb1"),
                ("outcomeIdentifier", "ANSWER_FEEDBACK"),
                ("showHide", "show"),
            ],
        )?;
        xml.text_element("p", &[], explanation)?;
        xml.end("feedbackBlock")?;
    }
    xml.end("itemBody")?;

    xml.empty("responseProcessing", &[("template", version.template())])?;
    xml.end("assessmentItem")?;
    xml.finish()
}

fn write_response_declaration(xml: &mut QtiWriter, item: &QtiItem) -> Result<(), BuildError> {
    let (cardinality, base_type, values): (&str, &str, Vec<&str>) = match item.kind {
        QuestionKind::Mcq | QuestionKind::TrueFalse => (
            "single",
            "identifier",
            item.correct_answer.as_deref().into_iter().collect(),
        ),
        QuestionKind::Msq => ("multiple", "identifier", item.correct_ids()),
        QuestionKind::ShortAnswer => (
            "single",
            "string",
            item.correct_answer.as_deref().into_iter().collect(),
        ),
        QuestionKind::Order => (
            "ordered",
            "identifier",
            item.options.iter().map(|o| o.id.as_str()).collect(),
        ),
    };

    xml.start(
        "responseDeclaration",
        &[
            ("identifier", "RESPONSE"),
            ("cardinality", cardinality),
            ("baseType", base_type),
        ],
    )?;
    if !values.is_empty() {
        xml.start("correctResponse", &[])?;
        for value in values {
            xml.text_element("value", &[], value)?;
        }
        xml.end("correctResponse")?;
    }
    xml.end("responseDeclaration")
}

fn write_interaction(xml: &mut QtiWriter, item: &QtiItem) -> Result<(), BuildError> {
    let (element, attrs): (&str, Vec<(&str, &str)>) = match item.kind {
        QuestionKind::ShortAnswer => {
            return xml.empty(
                "textEntryInteraction",
                &[("responseIdentifier", "RESPONSE"), ("expectedLength", "20")],
            );
        }
        QuestionKind::Mcq | QuestionKind::TrueFalse => (
            "choiceInteraction",
            vec![
                ("responseIdentifier", "RESPONSE"),
                ("shuffle", "false"),
                ("maxChoices", "1"),
            ],
        ),
        QuestionKind::Msq => (
            "choiceInteraction",
            vec![
                ("responseIdentifier", "RESPONSE"),
                ("shuffle", "false"),
                ("maxChoices", "0"),
            ],
        ),
        QuestionKind::Order => (
            "orderInteraction",
            vec![("responseIdentifier", "RESPONSE"), ("shuffle", "true")],
        ),
    };

    xml.start(element, &attrs)?;
    for option in &item.options {
        xml.text_element(
            "simpleChoice",
            &[("identifier", option.id.as_str())],
            &option.content,
        )?;
    }
    xml.end(element)
}
