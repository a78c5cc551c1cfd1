use serde::{Deserialize, Serialize};

/// A student record as the backend stores it. Ids are assigned by the
/// backend; the daemon never invents one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub grade: String,
}

/// A pending form submission. `id` is present only in edit mode; `age` is
/// `None` when the form field was left empty (the validator reports it, the
/// draft just carries what the UI sent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub id: Option<i64>,
    pub name: String,
    pub age: Option<i64>,
    pub grade: String,
}

/// Grade filter with the `"all"` sentinel the UI uses for "no filter".
/// A literal grade named "all" is indistinguishable from the sentinel; the
/// source UI has the same property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GradeFilter {
    All,
    Grade(String),
}

impl Default for GradeFilter {
    fn default() -> Self {
        GradeFilter::All
    }
}

impl From<String> for GradeFilter {
    fn from(s: String) -> Self {
        if s == "all" {
            GradeFilter::All
        } else {
            GradeFilter::Grade(s)
        }
    }
}

impl From<GradeFilter> for String {
    fn from(f: GradeFilter) -> Self {
        match f {
            GradeFilter::All => "all".to_string(),
            GradeFilter::Grade(g) => g,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Age,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Current search / filter / sort selection. Ephemeral UI state; the daemon
/// holds the single authoritative copy and recomputes the projection from it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewParams {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub grade_filter: GradeFilter,
    #[serde(default)]
    pub sort_key: SortKey,
    #[serde(default)]
    pub sort_direction: SortDirection,
}
