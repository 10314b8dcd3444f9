// src/data/mod.rs
use chrono::NaiveTime;
use serde::{Serialize, Deserialize};

pub mod loader;

// One retail transaction row from the source workbook. The hour column is
// derived once at load time from the Time field; the record never changes
// after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub city: String,
    pub customer_type: String,
    pub gender: String,
    pub product_line: String,
    pub total: f64,
    pub rating: f64,
    pub time: NaiveTime,
    pub hour: u32,
}

// Everything the dashboard needs from the source file: the loaded rows plus
// the distinct category values that seed the filter dropdowns. Built once at
// startup and passed to the controller, read-only from then on.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    pub dataset: Vec<Transaction>,
    pub cities: Vec<String>,
    pub customer_types: Vec<String>,
    pub genders: Vec<String>,
}

impl DashboardContext {
    pub fn new(dataset: Vec<Transaction>) -> Self {
        let mut cities: Vec<String> = Vec::new();
        let mut customer_types: Vec<String> = Vec::new();
        let mut genders: Vec<String> = Vec::new();

        // Distinct values in first-seen order, matching the row order of the
        // source file.
        for transaction in &dataset {
            if !cities.contains(&transaction.city) {
                cities.push(transaction.city.clone());
            }
            if !customer_types.contains(&transaction.customer_type) {
                customer_types.push(transaction.customer_type.clone());
            }
            if !genders.contains(&transaction.gender) {
                genders.push(transaction.gender.clone());
            }
        }

        Self { dataset, cities, customer_types, genders }
    }
}
