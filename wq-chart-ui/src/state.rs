//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wq_data::annual::{AnnualSeries, FilterSummary};

/// Shared application state for the water quality charts.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the dataset is still being fetched
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Annual means, once fetched and aggregated
    pub series: Signal<Option<AnnualSeries>>,
    /// How many records were kept or dropped
    pub summary: Signal<Option<FilterSummary>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            series: Signal::new(None),
            summary: Signal::new(None),
        }
    }
}
