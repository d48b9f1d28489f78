use std::collections::HashMap;

use crate::process::columns::{
    classify_columns, find_metadata_header, process_step_headers, MetadataKind,
};
use crate::process::group::{TreeAccumulator, DEFAULT_TOTAL_MODELS};
use crate::process::model::{ModelUnit, ProjectData, StepRecord, StepStatus};
use crate::process::parse::RawTable;

/// WBS placeholder used when the sheet has no `WBS Level` column or leaves
/// the cell blank.
pub const DEFAULT_WBS_LEVEL: &str = "Not Started";

/// Build the progress tree from the wide/pivoted sheet layout: one row per
/// (country, category, model), process steps as columns.
///
/// Columns 0..3 are country, category, and model name regardless of their
/// header text; remaining headers are classified into metadata vs. step
/// columns. Each row contributes one [`ModelUnit`] with one step per
/// inferred step column, statuses defaulting to `NotStarted` for blank or
/// missing cells.
pub fn build_wide(table: &RawTable) -> ProjectData {
    if table.rows.is_empty() {
        return ProjectData::default();
    }

    let roles = classify_columns(&table.headers);
    let step_headers = process_step_headers(&roles);
    let total_models_header =
        find_metadata_header(&table.headers, &roles, MetadataKind::TotalModels);
    let wbs_header = find_metadata_header(&table.headers, &roles, MetadataKind::WbsLevel);

    let mut acc = TreeAccumulator::new();
    for row in &table.rows {
        let country = positional_cell(row, &table.headers, 0, "Unknown Country");
        let category = positional_cell(row, &table.headers, 1, "Uncategorized");
        let model = positional_cell(row, &table.headers, 2, "Unknown Model");

        let total_models = total_models_header
            .and_then(|h| row.get(h))
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_TOTAL_MODELS);

        let wbs_level = wbs_header
            .and_then(|h| row.get(h))
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_WBS_LEVEL.to_string());

        let steps = step_headers
            .iter()
            .map(|name| StepRecord {
                name: name.clone(),
                status: row
                    .get(name)
                    .map(|v| StepStatus::from_raw(v))
                    .unwrap_or_default(),
                target_date: None,
            })
            .collect();

        acc.units(&category, total_models, &country).push(ModelUnit {
            name: model,
            wbs_level: Some(wbs_level),
            steps,
        });
    }

    acc.into_project_data(step_headers)
}

/// Cell for one of the three positional columns, falling back to `default`
/// when the cell is blank or the row is short.
fn positional_cell(
    row: &HashMap<String, String>,
    headers: &[String],
    idx: usize,
    default: &str,
) -> String {
    headers
        .get(idx)
        .and_then(|h| row.get(h))
        .filter(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(|| default.to_string())
}
