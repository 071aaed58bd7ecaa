//! Error box for a failed or empty dataset load.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows `AppState::error_msg`, plus the filter counts when records did
/// arrive but none were usable. Renders nothing without an error.
#[component]
pub fn FetchError() -> Element {
    let state = use_context::<AppState>();
    let Some(message) = state.error_msg.read().clone() else {
        return rsx! {};
    };
    let summary = *state.summary.read();
    let detail = summary.map(|s| {
        format!(
            "Records: {} received, {} missing a field, {} non-numeric, {} with a bad date.",
            s.total, s.missing_field, s.not_numeric, s.invalid_date
        )
    });

    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Water quality data unavailable: " }
            "{message}"
            if let Some(detail) = detail {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px;",
                    "{detail}"
                }
            }
        }
    }
}
