//! The seam between chart state and whatever draws the charts.

use crate::chart_config::ChartConfig;

/// DOM id of the overlay container.
pub const OVERLAY_ID: &str = "chart-modal";
/// DOM id of the canvas inside the overlay.
pub const MODAL_CANVAS_ID: &str = "modal-chart";

/// The two persistent charts on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Annual mean dissolved oxygen
    Oxygen,
    /// Oxygen vs turbidity, grouped bars
    Comparison,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Oxygen, ChartKind::Comparison];

    /// DOM id of the chart's canvas.
    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartKind::Oxygen => "oxygen-chart",
            ChartKind::Comparison => "comparison-chart",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Oxygen => "Dissolved Oxygen by Year",
            ChartKind::Comparison => "Dissolved Oxygen vs Turbidity",
        }
    }

    /// What the bars measure, with units.
    pub fn units(&self) -> &'static str {
        match self {
            ChartKind::Oxygen => "Dissolved oxygen, mg/L",
            ChartKind::Comparison => "Dissolved oxygen in mg/L next to turbidity in NTU",
        }
    }
}

/// Creates and releases chart instances and toggles the overlay.
///
/// `ChartBoard` drives this; the browser implementation lives in
/// `js_bridge::JsChartRenderer`.
pub trait ChartRenderer {
    type Handle;

    /// Draw `config` onto the canvas with id `canvas_id`.
    fn create(&mut self, canvas_id: &str, config: &ChartConfig) -> Self::Handle;

    /// Release a chart instance and its rendering resources.
    fn destroy(&mut self, handle: Self::Handle);

    /// Show (`display: flex`) or hide (`display: none`) the overlay.
    fn set_overlay_visible(&mut self, visible: bool);
}


#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Event {
        Create {
            id: u32,
            canvas: String,
            series: Vec<String>,
        },
        Destroy(u32),
        Overlay(bool),
    }

    /// Records every call; tracks which instances are alive.
    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub events: Vec<Event>,
        pub live: Vec<(u32, String, ChartConfig)>,
        pub overlay_visible: bool,
        next_id: u32,
    }

    impl RecordingRenderer {
        /// Configs currently drawn on `canvas`.
        pub fn live_on(&self, canvas: &str) -> Vec<&ChartConfig> {
            self.live
                .iter()
                .filter(|(_, c, _)| c == canvas)
                .map(|(_, _, config)| config)
                .collect()
        }
    }

    impl ChartRenderer for RecordingRenderer {
        type Handle = u32;

        fn create(&mut self, canvas_id: &str, config: &ChartConfig) -> u32 {
            let id = self.next_id;
            self.next_id += 1;
            self.events.push(Event::Create {
                id,
                canvas: canvas_id.to_string(),
                series: config.data.datasets.iter().map(|d| d.label.clone()).collect(),
            });
            self.live.push((id, canvas_id.to_string(), config.clone()));
            id
        }

        fn destroy(&mut self, handle: u32) {
            self.events.push(Event::Destroy(handle));
            self.live.retain(|(id, _, _)| *id != handle);
        }

        fn set_overlay_visible(&mut self, visible: bool) {
            self.events.push(Event::Overlay(visible));
            self.overlay_visible = visible;
        }
    }
}
