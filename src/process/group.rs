use std::collections::HashMap;

use crate::process::model::{CategoryGroup, CountryGroup, ModelUnit, ProjectData};

/// Fallback rollout target when the sheet omits `TotalModels` or the cell
/// does not parse as an integer.
pub const DEFAULT_TOTAL_MODELS: u32 = 200;

struct CategoryEntry {
    total_models: u32,
    country_order: Vec<String>,
    countries: HashMap<String, Vec<ModelUnit>>,
}

/// Grouping state threaded through one pass over the row stream.
///
/// Categories, countries, and units come out in first-insertion order; the
/// first occurrence of a category fixes its `total_models`, and a repeated
/// (category, country) pair reuses the existing group rather than creating
/// a duplicate key.
#[derive(Default)]
pub struct TreeAccumulator {
    category_order: Vec<String>,
    categories: HashMap<String, CategoryEntry>,
}

impl TreeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to the unit list for (category, country), creating
    /// both groups on first sight.
    pub fn units(
        &mut self,
        category: &str,
        total_models: u32,
        country: &str,
    ) -> &mut Vec<ModelUnit> {
        if !self.categories.contains_key(category) {
            self.category_order.push(category.to_string());
            self.categories.insert(
                category.to_string(),
                CategoryEntry {
                    total_models,
                    country_order: Vec::new(),
                    countries: HashMap::new(),
                },
            );
        }
        let entry = self
            .categories
            .get_mut(category)
            .expect("category entry just ensured");
        if !entry.countries.contains_key(country) {
            entry.country_order.push(country.to_string());
            entry.countries.insert(country.to_string(), Vec::new());
        }
        entry
            .countries
            .get_mut(country)
            .expect("country entry just ensured")
    }

    /// Flatten the accumulated maps into the final ordered tree.
    pub fn into_project_data(mut self, process_steps: Vec<String>) -> ProjectData {
        let mut categories = Vec::with_capacity(self.category_order.len());
        for category in self.category_order {
            let mut entry = self
                .categories
                .remove(&category)
                .expect("ordered category must exist");
            let mut countries = Vec::with_capacity(entry.country_order.len());
            for country in entry.country_order {
                let units = entry
                    .countries
                    .remove(&country)
                    .expect("ordered country must exist");
                countries.push(CountryGroup {
                    name: country,
                    units,
                });
            }
            categories.push(CategoryGroup {
                category,
                total_models: entry.total_models,
                countries,
            });
        }
        ProjectData {
            categories,
            process_steps,
        }
    }
}
