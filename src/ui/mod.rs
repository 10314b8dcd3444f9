// src/ui/mod.rs
pub mod charts;
pub mod filters;
pub mod kpi;
pub mod table;
