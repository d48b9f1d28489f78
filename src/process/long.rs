use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::process::group::{TreeAccumulator, DEFAULT_TOTAL_MODELS};
use crate::process::model::{ModelUnit, ProjectData, StepRecord, StepStatus};
use crate::process::parse::RawTable;

/// Canonical content-production pipeline, in display order. Step rows
/// outside this sequence are kept but sort after it.
pub const CANONICAL_PROCESS_STEPS: &[&str] = &[
    "Asset Collection",
    "Content Creation",
    "Internal Review",
    "Localization",
    "Publishing",
];

static STEP_RANK: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    CANONICAL_PROCESS_STEPS
        .iter()
        .enumerate()
        .map(|(rank, name)| (*name, rank))
        .collect()
});

fn canonical_rank(name: &str) -> usize {
    STEP_RANK.get(name).copied().unwrap_or(usize::MAX)
}

/// Build the progress tree from the long/normalized sheet layout: one row
/// per (category, country, content-type, step), all columns explicit.
///
/// Rows without a `Category` value are dropped as incomplete. A content
/// unit is created on first sight of its (category, country, content)
/// triple and collects one step per subsequent row. Steps are stably
/// sorted into canonical pipeline order; names outside the canon keep
/// their insertion order after it.
pub fn build_long(table: &RawTable) -> ProjectData {
    let mut acc = TreeAccumulator::new();
    let mut extra_steps: Vec<String> = Vec::new();

    for row in &table.rows {
        let category = match row.get("Category").filter(|v| !v.is_empty()) {
            Some(c) => c.clone(),
            None => {
                debug!("dropping step row without a category");
                continue;
            }
        };

        let total_models = row
            .get("TotalModels")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_TOTAL_MODELS);
        let country = nonempty(row, "Country").unwrap_or_else(|| "Unknown Country".to_string());
        let content = nonempty(row, "ContentType").unwrap_or_else(|| "Uncategorized".to_string());

        let step_name = row.get("StepName").cloned().unwrap_or_default();
        if canonical_rank(&step_name) == usize::MAX && !extra_steps.contains(&step_name) {
            extra_steps.push(step_name.clone());
        }

        let step = StepRecord {
            name: step_name,
            status: row
                .get("Status")
                .map(|v| StepStatus::from_raw(v))
                .unwrap_or_default(),
            target_date: nonempty(row, "TargetDate"),
        };

        let units = acc.units(&category, total_models, &country);
        match units.iter_mut().find(|u| u.name == content) {
            Some(unit) => unit.steps.push(step),
            None => units.push(ModelUnit {
                name: content,
                wbs_level: None,
                steps: vec![step],
            }),
        }
    }

    let process_steps = CANONICAL_PROCESS_STEPS
        .iter()
        .map(|s| s.to_string())
        .chain(extra_steps)
        .collect();

    let mut data = acc.into_project_data(process_steps);
    for category in &mut data.categories {
        for country in &mut category.countries {
            for unit in &mut country.units {
                unit.steps.sort_by_key(|s| canonical_rank(&s.name));
            }
        }
    }
    data
}

fn nonempty(row: &HashMap<String, String>, key: &str) -> Option<String> {
    row.get(key).filter(|v| !v.is_empty()).cloned()
}
