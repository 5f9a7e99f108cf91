use tracing::{debug, trace};

use crate::api::{ChartView, GestureConfig};
use crate::core::geometry::{fit_window_from_high, fit_window_from_low};
use crate::core::{DataRange, LOG_SCALE_BASE, ScreenPoint};

use super::click::{click_effects, is_click};
use super::{GestureEffect, GestureEffects};

/// Per-axis snapshot taken when a 2D-capable pan starts.
///
/// For log-scale axes every value here lives in `log10` space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPanState {
    pub initial_top_value: f64,
    pub drag_value_range: f64,
    pub units_per_pixel: f64,
    pub log_scale: bool,
    /// Edge bound for this axis, present only when edge panning is enabled.
    pub bounds: Option<DataRange>,
}

impl AxisPanState {
    fn window_for_drag(self, pixels_dragged: f64) -> DataRange {
        let units_dragged = pixels_dragged * self.units_per_pixel;
        let window = fit_window_from_high(
            self.initial_top_value + units_dragged,
            self.drag_value_range,
            self.bounds,
        );
        if self.log_scale {
            window.map(|value| LOG_SCALE_BASE.powf(value))
        } else {
            window
        }
    }
}

/// Scratch state of an active pan.
#[derive(Debug, Clone, PartialEq)]
pub struct PanState {
    drag_start: ScreenPoint,
    drag_end: ScreenPoint,
    initial_leftmost: f64,
    date_range: f64,
    x_units_per_pixel: f64,
    bounded_dates: Option<DataRange>,
    axes: Vec<AxisPanState>,
    is_2d: bool,
}

impl PanState {
    pub(crate) fn start<V: ChartView + ?Sized>(
        origin: ScreenPoint,
        view: &V,
        config: &GestureConfig,
    ) -> Self {
        let area = view.plot_area();
        let x_range = view.x_range();
        let date_range = x_range.span();
        let (widget_width, widget_height) = view.widget_size();
        let edge_fraction = config.active_edge_fraction();

        let bounded_dates = edge_fraction.map(|fraction| {
            let max_x_px = widget_width * fraction;
            let extremes = view.x_extremes();
            DataRange::new(
                view.pixel_to_data_x(view.data_to_pixel_x(extremes.low) - max_x_px),
                view.pixel_to_data_x(view.data_to_pixel_x(extremes.high) + max_x_px),
            )
        });

        let mut axes = Vec::new();
        let mut is_2d = false;
        if config.allow_2d_pan {
            for axis in 0..view.y_axis_count() {
                let log_scale = view.is_log_scale(axis);
                let y_range = view.y_range(axis);
                let y_range = if log_scale {
                    y_range.map(f64::log10)
                } else {
                    y_range
                };
                let bounds = edge_fraction.map(|fraction| {
                    let bound = value_bound(view, axis, widget_height * fraction);
                    if log_scale {
                        bound.map(f64::log10)
                    } else {
                        bound
                    }
                });
                axes.push(AxisPanState {
                    initial_top_value: y_range.high,
                    drag_value_range: y_range.span(),
                    units_per_pixel: y_range.span() / (area.height - 1.0),
                    log_scale,
                    bounds,
                });
                if view.has_explicit_y_window(axis) {
                    is_2d = true;
                }
            }
        }

        let state = Self {
            drag_start: origin,
            drag_end: origin,
            initial_leftmost: x_range.low,
            date_range,
            x_units_per_pixel: date_range / (area.width - 1.0),
            bounded_dates,
            axes,
            is_2d,
        };
        debug!(
            start_x = origin.x,
            start_y = origin.y,
            x_units_per_pixel = state.x_units_per_pixel,
            bounded = state.bounded_dates.is_some(),
            is_2d = state.is_2d,
            "pan started"
        );
        state
    }

    #[must_use]
    pub fn drag_start(&self) -> ScreenPoint {
        self.drag_start
    }

    #[must_use]
    pub fn drag_end(&self) -> ScreenPoint {
        self.drag_end
    }

    #[must_use]
    pub fn x_units_per_pixel(&self) -> f64 {
        self.x_units_per_pixel
    }

    #[must_use]
    pub fn bounded_dates(&self) -> Option<DataRange> {
        self.bounded_dates
    }

    #[must_use]
    pub fn axes(&self) -> &[AxisPanState] {
        &self.axes
    }

    #[must_use]
    pub fn is_2d(&self) -> bool {
        self.is_2d
    }

    /// X window for the current drag end, width preserved.
    #[must_use]
    pub fn x_window(&self) -> DataRange {
        let min_date =
            self.initial_leftmost - (self.drag_end.x - self.drag_start.x) * self.x_units_per_pixel;
        fit_window_from_low(min_date, self.date_range, self.bounded_dates)
    }

    pub(crate) fn drag_to(&mut self, position: ScreenPoint) -> GestureEffects {
        self.drag_end = position;

        let mut effects = GestureEffects::new();
        let x_window = self.x_window();
        trace!(low = x_window.low, high = x_window.high, "pan x window");
        effects.push(GestureEffect::CommitXWindow(x_window));

        if self.is_2d {
            let pixels_dragged = self.drag_end.y - self.drag_start.y;
            for (axis, state) in self.axes.iter().enumerate() {
                effects.push(GestureEffect::CommitYWindow {
                    axis,
                    window: state.window_for_drag(pixels_dragged),
                });
            }
        }

        effects.push(GestureEffect::Redraw);
        effects
    }

    pub(crate) fn finish<V: ChartView + ?Sized>(
        mut self,
        position: ScreenPoint,
        view: &V,
        config: &GestureConfig,
    ) -> GestureEffects {
        self.drag_end = position;
        let mut effects = GestureEffects::new();

        if is_click(self.drag_start, position, view, config) {
            click_effects(position, view, config, &mut effects);
        }

        let tolerance = config.tuning.click_tolerance_px;
        let moved = (position.x - self.drag_start.x).abs() >= tolerance
            || (position.y - self.drag_start.y).abs() >= tolerance;
        if config.callbacks.pan_complete && moved {
            effects.push(GestureEffect::PanCompleted {
                x: view.last_highlighted_x(),
                y: view.last_highlighted_y(),
            });
        }

        debug!(end_x = position.x, end_y = position.y, moved, "pan ended");
        effects
    }
}

/// Value window one axis may be panned within, `fraction_px` beyond its
/// extremes on screen.
fn value_bound<V: ChartView + ?Sized>(view: &V, axis: usize, fraction_px: f64) -> DataRange {
    let extremes = view.y_extremes(axis);
    let lower_px = view.data_to_pixel_y(extremes.low, axis) + fraction_px;
    let upper_px = view.data_to_pixel_y(extremes.high, axis) - fraction_px;
    DataRange::new(
        view.pixel_to_data_y(lower_px, axis),
        view.pixel_to_data_y(upper_px, axis),
    )
}
