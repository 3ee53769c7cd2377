//! Insight reporting stage
//!
//! Descriptive statistics over the flat table, printed to the console.
//! Purely observational: the table is borrowed and never modified.
//!
//! Coordinates are stored as text; values that fail to parse as `f64` are
//! excluded from the range, and a range over zero numeric values is `None`
//! (printed as `n/a`) rather than an error.

use crate::model::FlatUser;
use std::collections::HashSet;

/// Summary statistics over a flat user table
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub total_users: usize,
    pub unique_cities: usize,
    pub unique_companies: usize,
    pub latitude_range: Option<(f64, f64)>,
    pub longitude_range: Option<(f64, f64)>,
}

/// Compute summary statistics over the flat table
pub fn compute(users: &[FlatUser]) -> Insights {
    let unique_cities: HashSet<&str> = users.iter().filter_map(|u| u.city.as_deref()).collect();
    let unique_companies: HashSet<&str> = users
        .iter()
        .filter_map(|u| u.company_name.as_deref())
        .collect();

    Insights {
        total_users: users.len(),
        unique_cities: unique_cities.len(),
        unique_companies: unique_companies.len(),
        latitude_range: numeric_range(users.iter().map(|u| u.latitude.as_deref())),
        longitude_range: numeric_range(users.iter().map(|u| u.longitude.as_deref())),
    }
}

/// Print the five-line human-readable summary
pub fn report(insights: &Insights) {
    println!("\n--- DATA INSIGHTS ---");
    println!("Total users: {}", insights.total_users);
    println!("Unique cities: {}", insights.unique_cities);
    println!("Unique companies: {}", insights.unique_companies);
    println!("Latitude range: {}", format_range(insights.latitude_range));
    println!("Longitude range: {}", format_range(insights.longitude_range));
}

/// Min/max over the values that parse as f64, `None` when there are none
fn numeric_range<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for value in values.flatten() {
        if let Ok(n) = value.trim().parse::<f64>() {
            range = Some(match range {
                Some((min, max)) => (min.min(n), max.max(n)),
                None => (n, n),
            });
        }
    }
    range
}

fn format_range(range: Option<(f64, f64)>) -> String {
    match range {
        Some((min, max)) => format!("{} to {}", min, max),
        None => "n/a".to_string(),
    }
}
