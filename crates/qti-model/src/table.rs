use std::borrow::Cow;
use std::collections::BTreeMap;

/// A single spreadsheet cell.
///
/// Rows coming out of spreadsheet decoders carry text, numbers, or nothing;
/// every rule reads cells through [`CellValue::text`] so the three shapes are
/// handled uniformly.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Returns the trimmed textual form, or `None` when the cell is blank.
    pub fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            CellValue::Text(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Cow::Borrowed(trimmed))
                }
            }
            CellValue::Number(value) if value.is_finite() => Some(Cow::Owned(format_number(*value))),
            CellValue::Number(_) | CellValue::Missing => None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.text().is_some()
    }

    /// True when the cell holds a number or text that parses as one.
    pub fn is_numeric(&self) -> bool {
        match self {
            CellValue::Number(value) => value.is_finite(),
            CellValue::Text(value) => parse_finite(value.trim()).is_some(),
            CellValue::Missing => false,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) if value.is_finite() => Some(*value),
            CellValue::Text(value) => parse_finite(value.trim()),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

static MISSING: CellValue = CellValue::Missing;

/// One question row keyed by raw column name.
///
/// `id` is assigned at ingestion when the source has none; it is kept apart
/// from `cells` so the identifier rule can check it independently.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub id: String,
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: BTreeMap::new(),
        }
    }

    /// Returns a copy of this row with `column` set to `value`.
    #[must_use]
    pub fn with_cell(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(column.into(), value.into());
        self
    }

    /// Cell lookup; unknown columns read as [`CellValue::Missing`].
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&MISSING)
    }

    /// Trimmed, non-empty text of a role-mapped column.
    pub fn text(&self, column: Option<&str>) -> Option<Cow<'_, str>> {
        column.and_then(|name| self.get(name).text())
    }

    pub fn has_value(&self, column: Option<&str>) -> bool {
        self.text(column).is_some()
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }
}
