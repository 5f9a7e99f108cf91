use tracing::{debug, trace};

use crate::api::{ChartView, GestureConfig};
use crate::core::{DataRange, PlotArea, ScreenPoint};

use super::click::{click_effects, is_click};
use super::{DragDirection, GestureEffect, GestureEffects, PreviousOverlay, ZoomOverlay};

/// Dominant axis of a zoom drag. The vertical threshold is `vertical_bias`
/// times the horizontal one.
#[must_use]
pub fn classify_drag_direction(delta: ScreenPoint, vertical_bias: f64) -> DragDirection {
    if delta.x.abs() < delta.y.abs() / vertical_bias {
        DragDirection::Vertical
    } else {
        DragDirection::Horizontal
    }
}

/// Clips `[a, b]` (in either order) to `[min, max]`. Returns `None` when the
/// clipped interval is empty.
fn clip_span(a: f64, b: f64, min: f64, max: f64) -> Option<(f64, f64)> {
    let low = a.min(b).max(min);
    let high = a.max(b).min(max);
    (low < high).then_some((low, high))
}

/// Scratch state of an active rectangle zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    drag_start: ScreenPoint,
    drag_end: Option<ScreenPoint>,
    direction: Option<DragDirection>,
    moved: bool,
    previous: Option<PreviousOverlay>,
}

impl ZoomState {
    pub(crate) fn start(origin: ScreenPoint) -> Self {
        debug!(start_x = origin.x, start_y = origin.y, "zoom started");
        Self {
            drag_start: origin,
            drag_end: None,
            direction: None,
            moved: false,
            previous: None,
        }
    }

    #[must_use]
    pub fn drag_start(&self) -> ScreenPoint {
        self.drag_start
    }

    #[must_use]
    pub fn drag_end(&self) -> Option<ScreenPoint> {
        self.drag_end
    }

    #[must_use]
    pub fn direction(&self) -> Option<DragDirection> {
        self.direction
    }

    #[must_use]
    pub fn moved(&self) -> bool {
        self.moved
    }

    pub(crate) fn drag_to(&mut self, position: ScreenPoint, config: &GestureConfig) -> GestureEffects {
        self.moved = true;
        self.drag_end = Some(position);
        let direction = classify_drag_direction(
            position.delta_from(self.drag_start),
            config.tuning.vertical_bias,
        );
        self.direction = Some(direction);

        let overlay = ZoomOverlay {
            direction,
            start: self.drag_start,
            end: position,
            previous: self.previous,
        };
        self.previous = Some(PreviousOverlay {
            direction,
            end: position,
        });
        trace!(?direction, end_x = position.x, end_y = position.y, "zoom overlay");

        let mut effects = GestureEffects::new();
        effects.push(GestureEffect::DrawZoomOverlay(overlay));
        effects
    }

    /// Pointer left the surface: drop the overlay and end tracking, keep the
    /// gesture alive.
    pub(crate) fn leave(&mut self) -> GestureEffects {
        self.drag_end = None;
        let mut effects = GestureEffects::new();
        effects.push(GestureEffect::ClearZoomOverlay);
        effects
    }

    /// Ends the zoom at `position`. The flag reports whether a new window was
    /// committed.
    pub(crate) fn finish<V: ChartView + ?Sized>(
        self,
        position: ScreenPoint,
        view: &V,
        config: &GestureConfig,
    ) -> (GestureEffects, bool) {
        let mut effects = GestureEffects::new();

        if is_click(self.drag_start, position, view, config) {
            click_effects(position, view, config, &mut effects);
        }

        let area = view.plot_area();
        let committed = match self.direction {
            Some(DragDirection::Horizontal) => {
                self.commit_horizontal(position, area, view, config, &mut effects)
            }
            Some(DragDirection::Vertical) => {
                self.commit_vertical(position, area, view, config, &mut effects)
            }
            None => false,
        };

        if !committed && self.moved {
            effects.push(GestureEffect::ClearZoomOverlay);
        }
        debug!(end_x = position.x, end_y = position.y, committed, "zoom ended");
        (effects, committed)
    }

    fn commit_horizontal<V: ChartView + ?Sized>(
        &self,
        position: ScreenPoint,
        area: PlotArea,
        view: &V,
        config: &GestureConfig,
        effects: &mut GestureEffects,
    ) -> bool {
        let Some((left, right)) = clip_span(self.drag_start.x, position.x, area.x, area.right())
        else {
            return false;
        };
        if right - left < config.tuning.zoom_min_extent_px {
            return false;
        }

        let window = DataRange::new(view.pixel_to_data_x(left), view.pixel_to_data_x(right));
        debug!(low = window.low, high = window.high, "zoom x committed");
        effects.push(GestureEffect::CommitXWindow(window));
        effects.push(GestureEffect::Redraw);
        if config.callbacks.zoom_complete {
            effects.push(GestureEffect::ZoomCompleted {
                x: window,
                y: view.y_ranges(),
            });
        }
        true
    }

    fn commit_vertical<V: ChartView + ?Sized>(
        &self,
        position: ScreenPoint,
        area: PlotArea,
        view: &V,
        config: &GestureConfig,
        effects: &mut GestureEffects,
    ) -> bool {
        let Some((top, bottom)) = clip_span(self.drag_start.y, position.y, area.y, area.bottom())
        else {
            return false;
        };
        if bottom - top < config.tuning.zoom_min_extent_px {
            return false;
        }

        let windows: Vec<DataRange> = (0..view.y_axis_count())
            .map(|axis| {
                DataRange::new(
                    view.pixel_to_data_y(bottom, axis),
                    view.pixel_to_data_y(top, axis),
                )
            })
            .collect();
        for (axis, window) in windows.iter().enumerate() {
            effects.push(GestureEffect::CommitYWindow {
                axis,
                window: *window,
            });
        }
        debug!(top, bottom, axes = windows.len(), "zoom y committed");
        effects.push(GestureEffect::Redraw);
        if config.callbacks.zoom_complete {
            effects.push(GestureEffect::ZoomCompleted {
                x: view.x_range(),
                y: windows,
            });
        }
        true
    }
}
