// src/analysis/sales.rs
use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Deserialize};

use crate::data::Transaction;

// The published result of one aggregation run: the filtered rows plus the two
// grouped sums the charts are built from. Replaced wholesale on every valid
// filter change; never updated in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub filtered: Vec<Transaction>,
    /// Product line -> sum of Total, sorted ascending by sum.
    pub sales_by_product_line: Vec<(String, f64)>,
    /// Hour of day -> sum of Total, ordered by hour.
    pub sales_by_hour: Vec<(u32, f64)>,
}

// Pure and deterministic: filters the dataset against the three selection
// sets, then groups the matching rows by product line and by hour. Zero
// matching rows is a valid outcome and yields empty tables. Callers are
// responsible for rejecting empty selection sets before invoking this.
pub fn filter_sales(
    dataset: &[Transaction],
    cities: &[String],
    customer_types: &[String],
    genders: &[String],
) -> Snapshot {
    let filtered: Vec<Transaction> = dataset
        .iter()
        .filter(|t| {
            cities.contains(&t.city)
                && customer_types.contains(&t.customer_type)
                && genders.contains(&t.gender)
        })
        .cloned()
        .collect();

    let mut line_sums: HashMap<&str, f64> = HashMap::new();
    for transaction in &filtered {
        *line_sums.entry(transaction.product_line.as_str()).or_insert(0.0) += transaction.total;
    }
    let mut sales_by_product_line: Vec<(String, f64)> = line_sums
        .into_iter()
        .map(|(line, sum)| (line.to_string(), sum))
        .collect();
    sales_by_product_line
        .sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut hour_sums: BTreeMap<u32, f64> = BTreeMap::new();
    for transaction in &filtered {
        *hour_sums.entry(transaction.hour).or_insert(0.0) += transaction.total;
    }
    let sales_by_hour: Vec<(u32, f64)> = hour_sums.into_iter().collect();

    Snapshot { filtered, sales_by_product_line, sales_by_hour }
}

pub fn total_sales(rows: &[Transaction]) -> f64 {
    rows.iter().map(|t| t.total).sum()
}

pub fn average_sales(rows: &[Transaction]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    Some(total_sales(rows) / rows.len() as f64)
}

pub fn average_rating(rows: &[Transaction]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    Some(rows.iter().map(|t| t.rating).sum::<f64>() / rows.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn transaction(
        city: &str,
        customer_type: &str,
        gender: &str,
        product_line: &str,
        total: f64,
        hour: u32,
    ) -> Transaction {
        Transaction {
            city: city.to_string(),
            customer_type: customer_type.to_string(),
            gender: gender.to_string(),
            product_line: product_line.to_string(),
            total,
            rating: 7.0,
            time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            hour,
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn sample_dataset() -> Vec<Transaction> {
        vec![
            transaction("A", "Member", "M", "Food", 10.0, 9),
            transaction("A", "Normal", "F", "Food", 5.0, 9),
            transaction("B", "Member", "M", "Drinks", 20.0, 14),
        ]
    }

    #[test]
    fn filter_matches_all_three_dimensions() {
        let dataset = sample_dataset();
        let snapshot = filter_sales(
            &dataset,
            &strings(&["A"]),
            &strings(&["Member", "Normal"]),
            &strings(&["M", "F"]),
        );

        assert_eq!(snapshot.filtered, dataset[..2].to_vec());
        assert_eq!(snapshot.sales_by_product_line, vec![("Food".to_string(), 15.0)]);
        assert_eq!(snapshot.sales_by_hour, vec![(9, 15.0)]);
    }

    #[test]
    fn single_row_selection() {
        let dataset = sample_dataset();
        let snapshot = filter_sales(
            &dataset,
            &strings(&["A"]),
            &strings(&["Member"]),
            &strings(&["M"]),
        );

        assert_eq!(snapshot.filtered, vec![dataset[0].clone()]);
        assert_eq!(total_sales(&snapshot.filtered), 10.0);
        assert_eq!(average_sales(&snapshot.filtered), Some(10.0));
        assert_eq!(snapshot.sales_by_product_line, vec![("Food".to_string(), 10.0)]);
    }

    #[test]
    fn no_match_yields_empty_tables_not_an_error() {
        let dataset = sample_dataset();
        let snapshot = filter_sales(
            &dataset,
            &strings(&["C"]),
            &strings(&["Member"]),
            &strings(&["M"]),
        );

        assert!(snapshot.filtered.is_empty());
        assert!(snapshot.sales_by_product_line.is_empty());
        assert!(snapshot.sales_by_hour.is_empty());
        assert_eq!(average_sales(&snapshot.filtered), None);
        assert_eq!(average_rating(&snapshot.filtered), None);
    }

    #[test]
    fn grouped_sums_conserve_the_filtered_total() {
        let dataset = vec![
            transaction("A", "Member", "M", "Food", 10.5, 9),
            transaction("A", "Member", "M", "Drinks", 20.25, 14),
            transaction("A", "Member", "M", "Food", 4.25, 14),
            transaction("B", "Member", "M", "Health", 99.0, 10),
        ];
        let snapshot = filter_sales(
            &dataset,
            &strings(&["A"]),
            &strings(&["Member"]),
            &strings(&["M"]),
        );

        let filtered_total = total_sales(&snapshot.filtered);
        let line_total: f64 = snapshot.sales_by_product_line.iter().map(|(_, s)| s).sum();
        let hour_total: f64 = snapshot.sales_by_hour.iter().map(|(_, s)| s).sum();

        assert_eq!(filtered_total, 35.0);
        assert!((line_total - filtered_total).abs() < 1e-9);
        assert!((hour_total - filtered_total).abs() < 1e-9);
    }

    #[test]
    fn product_line_sums_sorted_ascending_and_hours_in_order() {
        let dataset = vec![
            transaction("A", "Member", "M", "Health", 50.0, 19),
            transaction("A", "Member", "M", "Food", 10.0, 9),
            transaction("A", "Member", "M", "Drinks", 30.0, 12),
        ];
        let snapshot = filter_sales(
            &dataset,
            &strings(&["A"]),
            &strings(&["Member"]),
            &strings(&["M"]),
        );

        let sums: Vec<f64> = snapshot.sales_by_product_line.iter().map(|(_, s)| *s).collect();
        assert_eq!(sums, vec![10.0, 30.0, 50.0]);

        let hours: Vec<u32> = snapshot.sales_by_hour.iter().map(|(h, _)| *h).collect();
        assert_eq!(hours, vec![9, 12, 19]);
    }

    #[test]
    fn every_matching_row_appears_exactly_once() {
        // Two identical rows must both survive the filter.
        let dataset = vec![
            transaction("A", "Member", "M", "Food", 10.0, 9),
            transaction("A", "Member", "M", "Food", 10.0, 9),
        ];
        let snapshot = filter_sales(
            &dataset,
            &strings(&["A"]),
            &strings(&["Member"]),
            &strings(&["M"]),
        );

        assert_eq!(snapshot.filtered.len(), 2);
        assert_eq!(snapshot.sales_by_product_line, vec![("Food".to_string(), 20.0)]);
    }
}
