//! Overlay that hosts the enlarged chart.

use crate::renderer::{MODAL_CANVAS_ID, OVERLAY_ID};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartModalProps {
    /// Fired on a click on the overlay background
    pub onclose: EventHandler<MouseEvent>,
}

/// Full-screen overlay, hidden until a chart is enlarged.
///
/// Visibility is toggled by the renderer (`display: flex` / `none`), not by
/// this component, so the enlarged canvas keeps its Chart.js instance.
#[component]
pub fn ChartModal(props: ChartModalProps) -> Element {
    rsx! {
        div {
            id: OVERLAY_ID,
            style: "display: none; position: fixed; inset: 0; z-index: 1000; background: rgba(0, 0, 0, 0.6); align-items: center; justify-content: center;",
            onclick: move |evt| props.onclose.call(evt),
            div {
                style: "width: 90vw; height: 80vh; background: #fff; border-radius: 6px; padding: 16px; box-sizing: border-box;",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                canvas { id: MODAL_CANVAS_ID }
            }
        }
    }
}
