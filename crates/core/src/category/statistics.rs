//! Pure aggregate statistics over a list of categories.

use serde::{Deserialize, Serialize};

use super::types::Category;

/// Summary of the category names currently stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryStatistics {
    pub total_count: usize,
    /// Mean name length in characters.
    pub average_name_length: f64,
    pub longest_name: String,
    pub shortest_name: String,
}

fn name_length(category: &Category) -> usize {
    category.name().chars().count()
}

/// Computes statistics for the given categories.
///
/// Ties for longest and shortest name resolve to the first category
/// encountered. An empty slice yields zero counts and empty names.
pub fn calculate_statistics(categories: &[Category]) -> CategoryStatistics {
    let Some(first) = categories.first() else {
        return CategoryStatistics::default();
    };

    let mut longest = first;
    let mut shortest = first;
    let mut total_length = 0usize;

    for category in categories {
        let length = name_length(category);
        total_length += length;
        if length > name_length(longest) {
            longest = category;
        }
        if length < name_length(shortest) {
            shortest = category;
        }
    }

    CategoryStatistics {
        total_count: categories.len(),
        average_name_length: total_length as f64 / categories.len() as f64,
        longest_name: longest.name().to_string(),
        shortest_name: shortest.name().to_string(),
    }
}
