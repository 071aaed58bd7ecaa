//! Reusable Dioxus RSX components for the water quality charts.

mod chart_canvas;
mod chart_header;
mod chart_modal;
mod fetch_error;
mod fetch_status;

pub use chart_canvas::ChartCanvas;
pub use chart_header::ChartHeader;
pub use chart_modal::ChartModal;
pub use fetch_error::FetchError;
pub use fetch_status::FetchStatus;
