//! Shared Dioxus components and Chart.js bridge for water quality charts.
//!
//! This crate provides:
//! - `chart_config`: typed Chart.js configurations built from an annual series
//! - `renderer`, `modal`, `board`: chart instance ownership and the enlarge overlay
//! - `js_bridge`: Rust wrappers for the Chart.js bridge and browser fetch
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (canvases, overlay, status boxes)

pub mod board;
pub mod chart_config;
pub mod components;
pub mod js_bridge;
pub mod modal;
pub mod renderer;
pub mod state;
