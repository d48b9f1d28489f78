pub mod columns;
pub mod group;
pub mod long;
pub mod model;
pub mod parse;
pub mod wide;

use serde::{Deserialize, Serialize};

pub use model::{CategoryGroup, CountryGroup, ModelUnit, ProjectData, StepRecord, StepStatus};
pub use parse::{parse_csv, RawTable};

/// Layout of the upstream sheet tab. Selected by configuration per
/// deployment, never auto-detected from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    /// One row per (country, category, model); process steps are columns.
    Wide,
    /// One row per (category, country, content-type, step); all columns
    /// explicit.
    Long,
}

/// Build the hierarchical progress tree from a parsed table. The input is
/// borrowed and never mutated; every call produces a fresh tree.
pub fn build(table: &RawTable, shape: TableShape) -> ProjectData {
    match shape {
        TableShape::Wide => wide::build_wide(table),
        TableShape::Long => long::build_long(table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_shape() {
        let wide = parse_csv("TR,제품군,제품명,Review\nUK,TV,X,완료\n");
        let data = build(&wide, TableShape::Wide);
        assert_eq!(data.categories[0].category, "TV");

        let long = parse_csv(
            "Category,TotalModels,Country,ContentType,StepName,Status,TargetDate\n\
             TV,200,UK,Gallery,Asset Collection,Completed,\n",
        );
        let data = build(&long, TableShape::Long);
        assert_eq!(data.categories[0].category, "TV");
    }

    #[test]
    fn build_does_not_mutate_the_input_table() {
        let table = parse_csv("TR,제품군,제품명,Review\nUK,TV,X,완료\n");
        let before = table.clone();
        let _ = build(&table, TableShape::Wide);
        assert_eq!(table, before);
    }

    #[test]
    fn shape_names_deserialize_lowercase() {
        assert_eq!(
            serde_yaml::from_str::<TableShape>("wide").unwrap(),
            TableShape::Wide
        );
        assert_eq!(
            serde_yaml::from_str::<TableShape>("long").unwrap(),
            TableShape::Long
        );
    }
}
