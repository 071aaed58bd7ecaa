//! Canvas for a persistent chart; clicking it asks for the enlarged view.

use dioxus::prelude::*;

/// Props for ChartCanvas
#[derive(Props, Clone, PartialEq)]
pub struct ChartCanvasProps {
    /// The DOM id of the canvas (Chart.js will render into this)
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 320)]
    pub min_height: u32,
    /// Fired on a click anywhere on the chart
    pub onclick: EventHandler<MouseEvent>,
}

/// A container with a clickable canvas for Chart.js.
#[component]
pub fn ChartCanvas(props: ChartCanvasProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; cursor: zoom-in;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            canvas {
                id: "{props.id}",
                onclick: move |evt| props.onclick.call(evt),
            }
        }
    }
}
