use serde::{Deserialize, Serialize};

/// Correspondence between raw spreadsheet columns and question fields.
///
/// Produced by column detection and consumed read-only by validation and the
/// codec. Callers may build or edit one by hand (for example to add a custom
/// option column); it is recomputed from the column list, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMapping {
    pub question_col: Option<String>,
    pub answer_col: Option<String>,
    pub type_col: Option<String>,
    pub difficulty_col: Option<String>,
    pub solution_col: Option<String>,
    pub points_col: Option<String>,
    pub subject_col: Option<String>,
    pub topic_col: Option<String>,
    pub tolerance_col: Option<String>,
    pub order_col: Option<String>,
    #[serde(default)]
    pub option_cols: Vec<String>,
}

impl RoleMapping {
    pub fn question(&self) -> Option<&str> {
        self.question_col.as_deref()
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer_col.as_deref()
    }

    pub fn question_type(&self) -> Option<&str> {
        self.type_col.as_deref()
    }

    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty_col.as_deref()
    }

    pub fn solution(&self) -> Option<&str> {
        self.solution_col.as_deref()
    }

    pub fn points(&self) -> Option<&str> {
        self.points_col.as_deref()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject_col.as_deref()
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic_col.as_deref()
    }

    pub fn tolerance(&self) -> Option<&str> {
        self.tolerance_col.as_deref()
    }

    pub fn order(&self) -> Option<&str> {
        self.order_col.as_deref()
    }

    /// Every column claimed by at least one role, in role order.
    pub fn claimed_columns(&self) -> Vec<&str> {
        let singles = [
            self.question(),
            self.answer(),
            self.question_type(),
            self.difficulty(),
            self.solution(),
            self.points(),
            self.subject(),
            self.topic(),
            self.tolerance(),
            self.order(),
        ];
        let mut claimed: Vec<&str> = singles.into_iter().flatten().collect();
        claimed.extend(self.option_cols.iter().map(String::as_str));
        claimed
    }

    /// Role label and column for each resolved single-column role.
    pub fn resolved_roles(&self) -> Vec<(&'static str, &str)> {
        [
            ("question", self.question()),
            ("answer", self.answer()),
            ("type", self.question_type()),
            ("difficulty", self.difficulty()),
            ("solution", self.solution()),
            ("points", self.points()),
            ("subject", self.subject()),
            ("topic", self.topic()),
            ("tolerance", self.tolerance()),
            ("order", self.order()),
        ]
        .into_iter()
        .filter_map(|(role, column)| column.map(|column| (role, column)))
        .collect()
    }
}
