//! QTI item generation.
//!
//! Two paths produce items:
//!
//! - The strict builder ([`McqBuilder`]) renders QTI 2.1 single-answer
//!   multiple choice from a canonical [`Question`](qti_model::Question) and
//!   refuses anything it cannot represent exactly.
//! - The row converter ([`convert_row`] + [`render_item`]) accepts every
//!   question kind and targets QTI 2.1 or 2.2; [`export_json`] collects the
//!   same items into a JSON document.
//!
//! [`validate_xml`] re-parses a rendered item and reports structural gaps.

mod error;
mod escape;
mod json;
mod legacy;
mod mcq;
mod structure;
mod writer;

pub use error::BuildError;
pub use escape::escape_xml;
pub use json::{JSON_FORMAT_VERSION, JsonDocument, export_json};
pub use legacy::{QtiItem, QtiOption, QtiVersion, convert_row, render_item};
pub use mcq::{
    ItemBuilder, McqBuilder, QTI_V2P1_NS, generate_and_validate_mcq, generate_mcq_xml,
};
pub use structure::{XmlIssue, validate_xml};
