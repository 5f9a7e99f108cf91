use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, DataRange, PlotArea};
use crate::error::GestureResult;
use crate::interaction::GestureEffect;

/// Data point currently under the x crosshair, with its canvas position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightedPoint {
    pub series_index: usize,
    pub canvas_x: f64,
    pub canvas_y: f64,
    pub point: DataPoint,
}

/// Read-only capabilities the gesture state machine needs from the chart.
///
/// Implementors own plot geometry, axis windows and highlight state; the
/// state machine never mutates them directly. Y-axis methods take an axis
/// index in `0..y_axis_count()`.
pub trait ChartView {
    /// Full widget size in pixels, used to scale edge-fraction bounds.
    fn widget_size(&self) -> (f64, f64);
    fn plot_area(&self) -> PlotArea;

    fn pixel_to_data_x(&self, px: f64) -> f64;
    fn data_to_pixel_x(&self, value: f64) -> f64;
    fn pixel_to_data_y(&self, py: f64, axis: usize) -> f64;
    fn data_to_pixel_y(&self, value: f64, axis: usize) -> f64;

    /// Currently visible x window.
    fn x_range(&self) -> DataRange;
    /// Currently visible window of one y-axis.
    fn y_range(&self, axis: usize) -> DataRange;
    /// Full data extent of the x axis.
    fn x_extremes(&self) -> DataRange;
    /// Full data extent of one y-axis.
    fn y_extremes(&self, axis: usize) -> DataRange;

    fn y_axis_count(&self) -> usize;
    fn is_log_scale(&self, axis: usize) -> bool;
    /// Whether the axis currently carries an explicit (non-auto) value window.
    fn has_explicit_y_window(&self, axis: usize) -> bool;

    fn highlighted_points(&self) -> &[HighlightedPoint];
    fn last_highlighted_x(&self) -> Option<f64>;
    fn last_highlighted_y(&self) -> Option<f64>;

    /// All y windows in axis order.
    fn y_ranges(&self) -> Vec<DataRange> {
        (0..self.y_axis_count()).map(|axis| self.y_range(axis)).collect()
    }
}

/// Executes effects produced by gesture transitions.
pub trait EffectSink {
    fn apply_effect(&mut self, effect: GestureEffect) -> GestureResult<()>;
}

/// A chart host that can both answer gesture queries and execute effects.
pub trait ChartHost: ChartView + EffectSink {}

impl<T: ChartView + EffectSink> ChartHost for T {}
