// src/state/mod.rs
use crate::analysis::{filter_sales, Snapshot};
use crate::data::DashboardContext;

pub const EMPTY_FILTER_MESSAGE: &str = "No result found. Check the filters.";

// The three multi-select sets driving the dashboard. Each is a subset of the
// distinct values the loader observed for that column; the UI may empty one
// transiently, but the controller refuses to recompute until all three are
// non-empty again.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub cities: Vec<String>,
    pub customer_types: Vec<String>,
    pub genders: Vec<String>,
}

impl FilterSelection {
    // The startup selection: everything selected, i.e. no filtering.
    pub fn all(context: &DashboardContext) -> Self {
        Self {
            cities: context.cities.clone(),
            customer_types: context.customer_types.clone(),
            genders: context.genders.clone(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.cities.is_empty() && !self.customer_types.is_empty() && !self.genders.is_empty()
    }
}

// Fire-and-forget user-facing message, surfaced by the UI as a modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into() }
    }

    pub fn title(&self) -> &'static str {
        match self.severity {
            Severity::Error => "Error",
        }
    }
}

pub type SnapshotObserver = Box<dyn FnMut(&Snapshot)>;

// Holds the current selection and the last valid snapshot. Every selection
// change goes through refresh(): an empty set is rejected with a notification
// and the published snapshot stays at the last valid result; otherwise the
// aggregation runs and the snapshot is replaced in one step, after which all
// registered observers see the new value.
pub struct FilterController {
    pub context: DashboardContext,
    pub selection: FilterSelection,
    snapshot: Snapshot,
    observers: Vec<SnapshotObserver>,
}

impl FilterController {
    // Computes the first snapshot (no filtering) before any interaction.
    pub fn new(context: DashboardContext) -> Self {
        let selection = FilterSelection::all(&context);
        let snapshot = filter_sales(
            &context.dataset,
            &selection.cities,
            &selection.customer_types,
            &selection.genders,
        );

        Self {
            context,
            selection,
            snapshot,
            observers: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn subscribe(&mut self, observer: SnapshotObserver) {
        self.observers.push(observer);
    }

    // Recomputes the snapshot for the current selection. Returns the
    // notification to surface when the selection is rejected; the previously
    // published snapshot is deliberately left in place in that case.
    pub fn refresh(&mut self) -> Option<Notification> {
        if !self.selection.is_valid() {
            return Some(Notification::error(EMPTY_FILTER_MESSAGE));
        }

        self.snapshot = filter_sales(
            &self.context.dataset,
            &self.selection.cities,
            &self.selection.customer_types,
            &self.selection.genders,
        );
        for observer in &mut self.observers {
            observer(&self.snapshot);
        }

        None
    }
}
