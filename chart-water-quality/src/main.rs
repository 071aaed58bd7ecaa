//! Annual Water Quality Charts
//!
//! Shows yearly mean dissolved oxygen, and oxygen next to turbidity, as two
//! Chart.js bar charts. Clicking either chart opens it enlarged in an overlay.
//!
//! Data flow:
//! 1. On mount: fetch the dataset JSON from the open-data endpoint.
//! 2. Validate and average it per local calendar year (`wq_data::pipeline`).
//! 3. Once a series exists: build both chart configs and draw them through
//!    a `ChartBoard`, which also owns the enlarge overlay.

use dioxus::prelude::*;
use wq_chart_ui::board::ChartBoard;
use wq_chart_ui::components::{ChartCanvas, ChartHeader, ChartModal, FetchError, FetchStatus};
use wq_chart_ui::js_bridge::{self, JsChartRenderer};
use wq_chart_ui::renderer::ChartKind;
use wq_chart_ui::state::AppState;
use wq_data::pipeline::aggregate_response;
use wq_socrata::endpoint::Endpoint;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("water-quality-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut board: Signal<Option<ChartBoard<JsChartRenderer>>> = use_signal(|| None);

    // ─── Effect 1: fetch and aggregate once on mount ───
    use_effect(move || {
        spawn(async move {
            let url = Endpoint::default().url();
            let body = match js_bridge::fetch_text(&url).await {
                Ok(body) => body,
                Err(e) => {
                    log::error!("Failed to fetch {}: {}", url, e);
                    state
                        .error_msg
                        .set(Some(format!("request failed: {}", e)));
                    state.loading.set(false);
                    return;
                }
            };

            match aggregate_response(&body, &chrono::Local) {
                Ok(aggregation) if aggregation.series.is_empty() => {
                    state
                        .error_msg
                        .set(Some("no record carries a usable reading".to_string()));
                    state.summary.set(Some(aggregation.summary));
                }
                Ok(aggregation) => {
                    state.summary.set(Some(aggregation.summary));
                    state.series.set(Some(aggregation.series));
                }
                Err(e) => {
                    log::error!("Failed to decode water quality data: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("unreadable response: {}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    // ─── Effect 2: draw both charts whenever a series arrives ───
    use_effect(move || {
        let Some(series) = state.series.read().clone() else {
            return;
        };
        if let Some(previous) = board.write().take() {
            previous.teardown();
        }
        board.set(Some(ChartBoard::render(JsChartRenderer::new(), &series)));
    });

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            FetchError {}

            if *state.loading.read() {
                FetchStatus { endpoint: Endpoint::default() }
            } else if state.series.read().is_some() {
                for kind in ChartKind::ALL {
                    div {
                        key: "{kind.canvas_id()}",
                        style: "margin-bottom: 24px;",
                        ChartHeader { kind }
                        ChartCanvas {
                            id: kind.canvas_id().to_string(),
                            onclick: move |_| {
                                if let Some(b) = board.write().as_mut() {
                                    b.enlarge(kind);
                                }
                            },
                        }
                    }
                }

                if let Some(summary) = state.summary.read().as_ref() {
                    p {
                        style: "font-size: 11px; color: #888; text-align: center; margin-top: 4px;",
                        "Annual means per local calendar year; {summary}."
                    }
                }
            }

            ChartModal {
                onclose: move |_| {
                    if let Some(b) = board.write().as_mut() {
                        b.close_overlay();
                    }
                },
            }
        }
    }
}
