//! The two persistent charts and their shared overlay, owned in one place.

use crate::chart_config::ChartConfig;
use crate::modal::{ModalController, OverlayState};
use crate::renderer::{ChartKind, ChartRenderer};
use log::info;
use wq_data::annual::AnnualSeries;

struct LiveChart<H> {
    config: ChartConfig,
    handle: H,
}

/// Owns the renderer, both persistent chart instances and the modal.
pub struct ChartBoard<R: ChartRenderer> {
    renderer: R,
    oxygen: LiveChart<R::Handle>,
    comparison: LiveChart<R::Handle>,
    modal: ModalController<R::Handle>,
}

impl<R: ChartRenderer> ChartBoard<R> {
    /// Build both chart configurations from `series` and draw them.
    pub fn render(mut renderer: R, series: &AnnualSeries) -> Self {
        info!("Rendering water quality charts for {} years", series.len());
        let oxygen = draw(&mut renderer, ChartKind::Oxygen, ChartConfig::annual_oxygen(series));
        let comparison = draw(
            &mut renderer,
            ChartKind::Comparison,
            ChartConfig::oxygen_vs_turbidity(series),
        );
        Self {
            renderer,
            oxygen,
            comparison,
            modal: ModalController::new(),
        }
    }

    pub fn config(&self, kind: ChartKind) -> &ChartConfig {
        match kind {
            ChartKind::Oxygen => &self.oxygen.config,
            ChartKind::Comparison => &self.comparison.config,
        }
    }

    pub fn overlay(&self) -> OverlayState {
        self.modal.state()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// A click on a chart's canvas: show it enlarged in the overlay.
    pub fn enlarge(&mut self, kind: ChartKind) {
        let config = self.config(kind).enlarged();
        self.modal.open(&mut self.renderer, kind, &config);
    }

    /// A click on the overlay background.
    pub fn close_overlay(&mut self) {
        self.modal.close(&mut self.renderer);
    }

    /// Destroy every live instance and hand the renderer back.
    pub fn teardown(mut self) -> R {
        self.modal.release(&mut self.renderer);
        self.renderer.destroy(self.oxygen.handle);
        self.renderer.destroy(self.comparison.handle);
        self.renderer
    }
}

fn draw<R: ChartRenderer>(renderer: &mut R, kind: ChartKind, config: ChartConfig) -> LiveChart<R::Handle> {
    let handle = renderer.create(kind.canvas_id(), &config);
    LiveChart { config, handle }
}
