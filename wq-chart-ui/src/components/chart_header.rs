//! Title block above each chart.

use crate::renderer::ChartKind;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub kind: ChartKind,
}

/// Title, units and the enlarge hint for one chart.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let title = props.kind.title();
    let units = props.kind.units();
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 8px;",
            div {
                h3 {
                    style: "margin: 0 0 4px 0; font-size: 16px;",
                    "{title}"
                }
                span {
                    style: "font-size: 12px; color: #666;",
                    "{units}"
                }
            }
            span {
                style: "font-size: 11px; color: #999;",
                "Click to enlarge"
            }
        }
    }
}
