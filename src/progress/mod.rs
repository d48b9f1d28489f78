use std::collections::HashSet;

use serde::Serialize;

use crate::process::model::{
    CategoryGroup, CountryGroup, ModelUnit, ProjectData, StepRecord, StepStatus,
};

/// Percentage of completed steps, rounded half-up to an integer 0..=100.
/// An empty sequence is 0% rather than a divide-by-zero.
pub fn completion_percent<'a>(steps: impl IntoIterator<Item = &'a StepRecord>) -> u8 {
    let mut total = 0usize;
    let mut completed = 0usize;
    for step in steps {
        total += 1;
        if step.status == StepStatus::Completed {
            completed += 1;
        }
    }
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

pub fn unit_progress(unit: &ModelUnit) -> u8 {
    completion_percent(&unit.steps)
}

pub fn country_progress(country: &CountryGroup) -> u8 {
    completion_percent(country.all_steps())
}

/// Progress across every step under every country and unit of a category.
pub fn category_progress(category: &CategoryGroup) -> u8 {
    completion_percent(category.all_steps())
}

/// Aggregate metrics for the summary cards. The presentation layer consumes
/// these as-is and does not re-derive them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardTotals {
    pub overall_percent: u8,
    pub completed_steps: usize,
    pub total_steps: usize,
    pub category_count: usize,
    /// Distinct country names across the whole tree; a country appearing
    /// under several categories counts once.
    pub country_count: usize,
    /// Sum of each category's rollout target, each category counted once.
    pub total_models: u32,
}

pub fn summarize(data: &ProjectData) -> DashboardTotals {
    let mut total_steps = 0usize;
    let mut completed_steps = 0usize;
    for step in data.all_steps() {
        total_steps += 1;
        if step.status == StepStatus::Completed {
            completed_steps += 1;
        }
    }

    let countries: HashSet<&str> = data
        .categories
        .iter()
        .flat_map(|cat| cat.countries.iter().map(|c| c.name.as_str()))
        .collect();

    let mut seen_categories: HashSet<&str> = HashSet::new();
    let mut total_models = 0u32;
    for category in &data.categories {
        if seen_categories.insert(category.category.as_str()) {
            total_models += category.total_models;
        }
    }

    DashboardTotals {
        overall_percent: completion_percent(data.all_steps()),
        completed_steps,
        total_steps,
        category_count: data.categories.len(),
        country_count: countries.len(),
        total_models,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{build, parse_csv, TableShape};

    fn steps(statuses: &[StepStatus]) -> Vec<StepRecord> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| StepRecord {
                name: format!("step {}", i),
                status: *status,
                target_date: None,
            })
            .collect()
    }

    #[test]
    fn empty_sequence_is_zero_percent() {
        assert_eq!(completion_percent(&[]), 0);
    }

    #[test]
    fn rounds_half_up() {
        use StepStatus::*;
        assert_eq!(completion_percent(&steps(&[Completed, NotStarted])), 50);
        assert_eq!(
            completion_percent(&steps(&[Completed, NotStarted, NotStarted])),
            33
        );
        assert_eq!(
            completion_percent(&steps(&[Completed, Completed, NotStarted])),
            67
        );
        assert_eq!(
            completion_percent(&steps(&[Completed, NotStarted, NotStarted, NotStarted, NotStarted, NotStarted, NotStarted, NotStarted])),
            13
        );
    }

    #[test]
    fn in_progress_does_not_count_as_completed() {
        use StepStatus::*;
        assert_eq!(completion_percent(&steps(&[InProgress, InProgress])), 0);
    }

    #[test]
    fn percent_is_monotonic_in_completed_count() {
        let n = 7;
        let mut last = 0;
        for k in 0..=n {
            let statuses: Vec<StepStatus> = (0..n)
                .map(|i| {
                    if i < k {
                        StepStatus::Completed
                    } else {
                        StepStatus::NotStarted
                    }
                })
                .collect();
            let pct = completion_percent(&steps(&statuses));
            assert!(pct >= last, "progress dropped from {} to {}", last, pct);
            last = pct;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn category_progress_matches_worked_scenario() {
        let text = "Category,TotalModels,Country,ContentType,StepName,Status,TargetDate\n\
                    TV,200,UK,Gallery,Asset Collection,Completed,2025-07-09\n\
                    TV,200,UK,Gallery,Content Creation,In Progress,2025-07-14\n";
        let data = build(&parse_csv(text), TableShape::Long);
        assert_eq!(category_progress(&data.categories[0]), 50);

        let totals = summarize(&data);
        assert_eq!(totals.overall_percent, 50);
        assert_eq!(totals.completed_steps, 1);
        assert_eq!(totals.total_steps, 2);
        assert_eq!(totals.category_count, 1);
        assert_eq!(totals.country_count, 1);
        assert_eq!(totals.total_models, 200);
    }

    #[test]
    fn duplicate_country_names_across_categories_count_once() {
        let text = "Category,TotalModels,Country,ContentType,StepName,Status,TargetDate\n\
                    TV,200,UK,Gallery,Asset Collection,Completed,\n\
                    Monitor,40,UK,Gallery,Asset Collection,Not Started,\n\
                    Monitor,40,DE,Gallery,Asset Collection,Not Started,\n";
        let totals = summarize(&build(&parse_csv(text), TableShape::Long));
        assert_eq!(totals.country_count, 2);
        assert_eq!(totals.category_count, 2);
        assert_eq!(totals.total_models, 240);
    }

    #[test]
    fn header_only_input_yields_zero_totals_not_an_error() {
        let table = parse_csv("TR,제품군,제품명,Asset Collection\n");
        let totals = summarize(&build(&table, TableShape::Wide));
        assert_eq!(totals.total_steps, 0);
        assert_eq!(totals.overall_percent, 0);
        assert_eq!(totals.category_count, 0);
    }

    #[test]
    fn empty_tree_summarizes_to_zeros() {
        let totals = summarize(&ProjectData::default());
        assert_eq!(totals.overall_percent, 0);
        assert_eq!(totals.completed_steps, 0);
        assert_eq!(totals.total_steps, 0);
        assert_eq!(totals.category_count, 0);
        assert_eq!(totals.country_count, 0);
        assert_eq!(totals.total_models, 0);
    }

    #[test]
    fn per_unit_and_per_country_use_the_same_rule() {
        let text = "TR,제품군,제품명,Asset Collection,Publishing\n\
                    UK,TV,OLED55,완료,미진행\n\
                    UK,TV,OLED65,완료,완료\n";
        let data = build(&parse_csv(text), TableShape::Wide);
        let country = &data.categories[0].countries[0];
        assert_eq!(unit_progress(&country.units[0]), 50);
        assert_eq!(unit_progress(&country.units[1]), 100);
        assert_eq!(country_progress(country), 75);
    }
}
