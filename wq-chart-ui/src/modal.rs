//! Click-to-enlarge overlay.
//!
//! One overlay and one enlarged-chart slot are shared by every chart. Opening
//! replaces whatever was enlarged before; closing only hides the overlay and
//! leaves the stale instance for the next open to release.

use crate::chart_config::ChartConfig;
use crate::renderer::{ChartKind, ChartRenderer, MODAL_CANVAS_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(ChartKind),
}

#[derive(Debug)]
pub struct ModalController<H> {
    state: OverlayState,
    enlarged: Option<H>,
}

impl<H> Default for ModalController<H> {
    fn default() -> Self {
        Self {
            state: OverlayState::Closed,
            enlarged: None,
        }
    }
}

impl<H> ModalController<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open(_))
    }

    /// Whether an enlarged instance is alive (shown or stale).
    pub fn has_enlarged(&self) -> bool {
        self.enlarged.is_some()
    }

    /// Show the overlay and draw `config` into it.
    pub fn open<R>(&mut self, renderer: &mut R, kind: ChartKind, config: &ChartConfig)
    where
        R: ChartRenderer<Handle = H>,
    {
        renderer.set_overlay_visible(true);
        if let Some(stale) = self.enlarged.take() {
            renderer.destroy(stale);
        }
        self.enlarged = Some(renderer.create(MODAL_CANVAS_ID, config));
        self.state = OverlayState::Open(kind);
    }

    /// Hide the overlay. The enlarged instance survives until the next open.
    pub fn close<R>(&mut self, renderer: &mut R)
    where
        R: ChartRenderer<Handle = H>,
    {
        renderer.set_overlay_visible(false);
        self.state = OverlayState::Closed;
    }

    /// Destroy the enlarged instance, if any.
    pub fn release<R>(&mut self, renderer: &mut R)
    where
        R: ChartRenderer<Handle = H>,
    {
        if let Some(handle) = self.enlarged.take() {
            renderer.destroy(handle);
        }
    }
}
