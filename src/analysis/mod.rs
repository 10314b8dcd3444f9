// src/analysis/mod.rs
pub mod sales;

// Re-export commonly used functions and types
pub use sales::{
    average_rating,
    average_sales,
    filter_sales,
    total_sales,
    Snapshot,
};
