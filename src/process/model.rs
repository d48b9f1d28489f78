use serde::{Deserialize, Serialize};

/// Completion state of one process step. Upstream cells carry free text;
/// anything outside the two recognized triads collapses to `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepStatus {
    Completed,
    InProgress,
    NotStarted,
}

impl StepStatus {
    /// Map a raw status cell to its canonical state. Both the English triad
    /// and the sheet's Korean triad are accepted; unknown strings and blanks
    /// default to `NotStarted`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "Completed" | "완료" => StepStatus::Completed,
            "In Progress" | "진행중" => StepStatus::InProgress,
            _ => StepStatus::NotStarted,
        }
    }
}

impl Default for StepStatus {
    fn default() -> Self {
        StepStatus::NotStarted
    }
}

/// One stage of the content-production pipeline for a single unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub name: String,
    pub status: StepStatus,
    /// Planned completion date, verbatim from the sheet. Only the
    /// long/normalized export carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
}

/// A tracked unit: a product model in the wide export, a content type
/// (Gallery, Dimension, …) in the long export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelUnit {
    pub name: String,
    /// WBS maturity indicator, descriptive metadata rather than a step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wbs_level: Option<String>,
    pub steps: Vec<StepRecord>,
}

/// All units tracked for one country within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryGroup {
    pub name: String,
    pub units: Vec<ModelUnit>,
}

impl CountryGroup {
    /// Every step under this country, in unit order.
    pub fn all_steps(&self) -> impl Iterator<Item = &StepRecord> {
        self.units.iter().flat_map(|u| u.steps.iter())
    }
}

/// Top-level product grouping (TV, Monitor, …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    /// Rollout target for the category; defaults to 200 when the sheet
    /// omits the column or the cell does not parse.
    pub total_models: u32,
    pub countries: Vec<CountryGroup>,
}

impl CategoryGroup {
    /// Every step under every country and unit of this category.
    pub fn all_steps(&self) -> impl Iterator<Item = &StepRecord> {
        self.countries.iter().flat_map(|c| c.all_steps())
    }
}

/// The complete transformed tree for one load, plus the resolved step-name
/// sequence the presentation layer lays columns out with. Rebuilt from
/// scratch on every fetch; never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectData {
    pub categories: Vec<CategoryGroup>,
    pub process_steps: Vec<String>,
}

impl ProjectData {
    /// Every step in the tree, in category/country/unit order.
    pub fn all_steps(&self) -> impl Iterator<Item = &StepRecord> {
        self.categories.iter().flat_map(|c| c.all_steps())
    }
}
