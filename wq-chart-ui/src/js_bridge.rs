//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js is loaded by the host page. The bridge functions in
//! `assets/js/bar-chart.js` are evaluated as globals once Chart.js is
//! available and exposed via `window.*`. This module serializes chart
//! configurations and calls those globals; it also wraps the browser
//! `fetch` used to load the dataset.

use crate::chart_config::ChartConfig;
use crate::renderer::{ChartRenderer, OVERLAY_ID};
use std::sync::atomic::{AtomicU32, Ordering};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wq_socrata::error::{Result, SocrataError};

// Embed the bridge JS at compile time
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

// Instance ids are page-global so a re-render never reuses one.
static NEXT_CHART_ID: AtomicU32 = AtomicU32::new(0);

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WQ JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the bridge scripts with a wait-for-Chart.js polling loop.
///
/// The bridge functions are `function` declarations; they are evaluated at
/// global scope via indirect eval once `Chart` exists, then promoted to
/// `window.*` explicitly. Safe to call more than once.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__wqChartScripts && !window.__wqChartsReady) {{ window.__wqChartScripts = {}; }}",
        serde_json::to_string(BAR_CHART_JS).unwrap_or_default()
    );
    call_js(&store_js);

    let init_js = r#"
        (function() {
            var waitForChartJs = setInterval(function() {
                if (window.__wqChartsReady) {
                    clearInterval(waitForChartJs);
                    return;
                }
                if (typeof Chart !== 'undefined' && window.__wqChartScripts) {
                    clearInterval(waitForChartJs);
                    (0, eval)(window.__wqChartScripts);
                    delete window.__wqChartScripts;
                    if (typeof renderWqChart !== 'undefined') window.renderWqChart = renderWqChart;
                    if (typeof destroyWqChart !== 'undefined') window.destroyWqChart = destroyWqChart;
                    window.__wqChartsReady = true;
                    console.log('WQ charts initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// Render a bar chart into `canvas_id` under the instance id `chart_id`.
///
/// Uses a polling loop to wait for Chart.js, the bridge scripts and the
/// canvas to exist. A chart destroyed before it was drawn is skipped.
pub fn render_bar_chart(chart_id: u32, canvas_id: &str, config_json: &str) {
    call_js(&render_bar_chart_js(chart_id, canvas_id, config_json));
}

// The id stays in `__wqPending` only while its poll is running.
fn render_bar_chart_js(chart_id: u32, canvas_id: &str, config_json: &str) -> String {
    format!(
        r#"
        (function() {{
            window.__wqPending = window.__wqPending || {{}};
            window.__wqPending[{chart_id}] = true;
            var poll = setInterval(function() {{
                if (window.__wqDestroyed && window.__wqDestroyed[{chart_id}]) {{
                    clearInterval(poll);
                    delete window.__wqDestroyed[{chart_id}];
                    delete window.__wqPending[{chart_id}];
                    return;
                }}
                if (window.__wqChartsReady &&
                    typeof window.renderWqChart !== 'undefined' &&
                    document.getElementById('{canvas_id}')) {{
                    clearInterval(poll);
                    delete window.__wqPending[{chart_id}];
                    try {{
                        window.renderWqChart({chart_id}, '{canvas_id}', {config_json});
                    }} catch(e) {{ console.error('[WQ] renderWqChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Destroy a chart instance and release its canvas.
///
/// A chart still waiting to be drawn is cancelled instead; an id that was
/// never drawn and is not waiting leaves no trace.
pub fn destroy_chart(chart_id: u32) {
    call_js(&destroy_chart_js(chart_id));
}

fn destroy_chart_js(chart_id: u32) -> String {
    format!(
        r#"
        if (window.__wqCharts && window.__wqCharts[{chart_id}]) {{
            window.destroyWqChart({chart_id});
        }} else if (window.__wqPending && window.__wqPending[{chart_id}]) {{
            window.__wqDestroyed = window.__wqDestroyed || {{}};
            window.__wqDestroyed[{chart_id}] = true;
        }}
        "#,
    )
}

/// Set the CSS `display` of an element.
pub fn set_display(element_id: &str, display: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.style.display = '{}';",
        element_id, display
    ));
}

/// GET `url` with the browser's `fetch` and return the body text.
pub async fn fetch_text(url: &str) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| SocrataError::Fetch("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: web_sys::Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(SocrataError::HttpStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }
    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| SocrataError::Fetch("response body is not text".to_string()))
}

fn js_error(value: JsValue) -> SocrataError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    SocrataError::Fetch(message)
}

/// Chart instance id on the JS side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(u32);

/// [`ChartRenderer`] backed by Chart.js.
#[derive(Debug)]
pub struct JsChartRenderer {
    _private: (),
}

impl JsChartRenderer {
    /// Make sure the bridge scripts are (being) loaded.
    pub fn new() -> Self {
        init_charts();
        Self { _private: () }
    }
}

impl Default for JsChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for JsChartRenderer {
    type Handle = ChartHandle;

    fn create(&mut self, canvas_id: &str, config: &ChartConfig) -> ChartHandle {
        let id = NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed);
        match config.to_json() {
            Ok(config_json) => render_bar_chart(id, canvas_id, &config_json),
            Err(e) => log::error!("Failed to serialize chart config for {}: {}", canvas_id, e),
        }
        ChartHandle(id)
    }

    fn destroy(&mut self, handle: ChartHandle) {
        destroy_chart(handle.0);
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        set_display(OVERLAY_ID, if visible { "flex" } else { "none" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destroy_flags_only_pending_charts() {
        let js = destroy_chart_js(7);
        assert!(js.contains("window.destroyWqChart(7)"));
        let cancel = js.find("window.__wqDestroyed[7] = true").unwrap();
        let guard = js.find("} else if (window.__wqPending && window.__wqPending[7])").unwrap();
        assert!(guard < cancel);
        assert!(!js.contains("} else {"));
    }

    #[test]
    fn test_render_clears_pending_on_every_exit() {
        let js = render_bar_chart_js(3, "oxygen-chart", r#"{"type":"bar"}"#);
        assert!(js.contains("window.__wqPending[3] = true;"));
        assert_eq!(js.matches("delete window.__wqPending[3];").count(), 2);
        assert_eq!(js.matches("clearInterval(poll);").count(), 2);
        assert!(js.contains(r#"window.renderWqChart(3, 'oxygen-chart', {"type":"bar"});"#));
    }
}
