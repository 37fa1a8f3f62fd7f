//! Strict QTI 2.1 builder for single-answer multiple choice.

use qti_model::answer::{BUILDER_LABEL_LIMIT, choice_identifier, choice_index};
use qti_model::{GenerationError, GenerationErrorCode, Question};
use tracing::{debug, warn};

use crate::error::BuildError;
use crate::structure::{XmlIssue, validate_xml};
use crate::writer::QtiWriter;

/// QTI 2.1 namespace.
pub const QTI_V2P1_NS: &str = "http://www.imsglobal.org/xsd/imsqti_v2p1";

/// Maximum title length, in characters.
const TITLE_CHARS: usize = 100;

/// Builds QTI XML for one question kind.
pub trait ItemBuilder {
    /// Checks the question and renders it, or reports why it cannot.
    fn generate(&self, question: &Question) -> Result<String, BuildError>;

    /// Structural problems in a rendered document.
    fn validate(&self, xml: &str) -> Vec<XmlIssue> {
        validate_xml(xml)
    }
}

/// Single-answer multiple choice (`choiceInteraction`, `maxChoices="1"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct McqBuilder;

impl McqBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Runs every pre-generation check and returns the answer letter.
    fn check(question: &Question) -> Result<char, BuildError> {
        if question.identifier.trim().is_empty() {
            return Err(BuildError::MissingIdentifier);
        }
        if question.stem.trim().is_empty() {
            return Err(BuildError::MissingStem);
        }
        if question.options.len() < 2 {
            return Err(BuildError::TooFewOptions {
                found: question.options.len(),
            });
        }
        if question.options.len() > BUILDER_LABEL_LIMIT {
            return Err(BuildError::TooManyOptions {
                found: question.options.len(),
            });
        }
        let answer = question.correct_answer.trim().to_uppercase();
        if answer.is_empty() {
            return Err(BuildError::MissingAnswer);
        }

        let index = choice_index(&answer, BUILDER_LABEL_LIMIT)
            .ok_or_else(|| BuildError::InvalidAnswerFormat(answer.clone()))?;
        if index >= question.options.len() {
            return Err(BuildError::AnswerOutOfRange {
                answer,
                options: question.options.len(),
            });
        }
        choice_identifier(index).ok_or(BuildError::InvalidAnswerFormat(answer))
    }
}

impl ItemBuilder for McqBuilder {
    fn generate(&self, question: &Question) -> Result<String, BuildError> {
        let answer = Self::check(question)?;
        let title: String = question.stem.chars().take(TITLE_CHARS).collect();

        let mut xml = QtiWriter::new()?;
        xml.start(
            "assessmentItem",
            &[
                ("xmlns", QTI_V2P1_NS),
                ("identifier", question.identifier.as_str()),
                ("title", title.as_str()),
                ("adaptive", "false"),
                ("timeDependent", "false"),
            ],
        )?;

        xml.start(
            "responseDeclaration",
            &[
                ("identifier", "RESPONSE"),
                ("cardinality", "single"),
                ("baseType", "identifier"),
            ],
        )?;
        xml.start("correctResponse", &[])?;
        xml.text_element("value", &[], &answer.to_string())?;
        xml.end("correctResponse")?;
        xml.end("responseDeclaration")?;

        xml.start("itemBody", &[])?;
        xml.start(
            "choiceInteraction",
            &[
                ("responseIdentifier", "RESPONSE"),
                ("shuffle", "true"),
                ("maxChoices", "1"),
            ],
        )?;
        xml.text_element("prompt", &[], &question.stem)?;
        for (option, identifier) in question.options.iter().zip('A'..='Z') {
            xml.text_element(
                "simpleChoice",
                &[("identifier", identifier.to_string().as_str())],
                option,
            )?;
        }
        xml.end("choiceInteraction")?;
        xml.end("itemBody")?;
        xml.end("assessmentItem")?;

        let output = xml.finish()?;
        debug!(
            identifier = %question.identifier,
            options = question.options.len(),
            bytes = output.len(),
            "generated MCQ item"
        );
        Ok(output)
    }
}

/// Renders a multiple-choice question, failing on the first pre-check.
pub fn generate_mcq_xml(question: &Question) -> Result<String, BuildError> {
    McqBuilder::new().generate(question)
}

/// Renders and structurally checks a multiple-choice question.
///
/// Builder refusals become `MCQ_GENERATION_ERROR`; structural failures of the
/// rendered document become `XML_VALIDATION_FAILED` with the issues in
/// `details`.
pub fn generate_and_validate_mcq(question: &Question) -> Result<String, GenerationError> {
    let builder = McqBuilder::new();
    let xml = builder.generate(question)?;
    let issues = builder.validate(&xml);
    if issues.is_empty() {
        return Ok(xml);
    }

    let details = issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    warn!(identifier = %question.identifier, %details, "generated XML failed structural check");
    Err(GenerationError::new(
        GenerationErrorCode::XmlValidationFailed,
        "Generated XML failed validation",
    )
    .with_details(details))
}
