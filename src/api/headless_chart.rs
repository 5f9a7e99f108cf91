use crate::core::{AxisScale, DataRange, PlotArea};
use crate::error::{GestureError, GestureResult};
use crate::interaction::{GestureEffect, ZoomOverlay};

use super::{ChartView, EffectSink, HighlightedPoint};

#[derive(Debug, Clone, Copy, PartialEq)]
struct HeadlessAxis {
    extremes: DataRange,
    window: Option<DataRange>,
    log_scale: bool,
}

impl HeadlessAxis {
    fn visible(self) -> DataRange {
        self.window.unwrap_or(self.extremes)
    }

    fn scale(self) -> GestureResult<AxisScale> {
        AxisScale::new(self.visible(), self.log_scale)
    }
}

/// In-memory chart host used by tests and headless consumers.
///
/// Keeps axis windows, highlight state and the zoom overlay, and records
/// every callback effect it receives so callers can inspect them.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessChart {
    widget_width: f64,
    widget_height: f64,
    plot_area: PlotArea,
    x_axis: HeadlessAxis,
    y_axes: Vec<HeadlessAxis>,
    highlighted: Vec<HighlightedPoint>,
    last_x: Option<f64>,
    last_y: Option<f64>,
    overlay: Option<ZoomOverlay>,
    redraw_count: usize,
    callbacks: Vec<GestureEffect>,
}

impl HeadlessChart {
    /// Creates a chart with one linear y-axis spanning `y_extremes`.
    pub fn new(
        widget_size: (f64, f64),
        plot_area: PlotArea,
        x_extremes: DataRange,
        y_extremes: DataRange,
    ) -> GestureResult<Self> {
        let (widget_width, widget_height) = widget_size;
        if !widget_width.is_finite()
            || !widget_height.is_finite()
            || widget_width <= 0.0
            || widget_height <= 0.0
        {
            return Err(GestureError::InvalidData(
                "widget size must be finite and > 0".to_owned(),
            ));
        }
        let plot_area = plot_area.validate()?;
        let x_extremes = x_extremes.validate("x extremes")?;
        let y_extremes = y_extremes.validate("y extremes")?;

        Ok(Self {
            widget_width,
            widget_height,
            plot_area,
            x_axis: HeadlessAxis {
                extremes: x_extremes,
                window: None,
                log_scale: false,
            },
            y_axes: vec![HeadlessAxis {
                extremes: y_extremes,
                window: None,
                log_scale: false,
            }],
            highlighted: Vec::new(),
            last_x: None,
            last_y: None,
            overlay: None,
            redraw_count: 0,
            callbacks: Vec::new(),
        })
    }

    /// Adds another y-axis.
    pub fn with_y_axis(mut self, extremes: DataRange, log_scale: bool) -> GestureResult<Self> {
        let axis = HeadlessAxis {
            extremes: extremes.validate("y extremes")?,
            window: None,
            log_scale,
        };
        axis.scale()?;
        self.y_axes.push(axis);
        Ok(self)
    }

    pub fn set_log_scale(&mut self, axis: usize, log_scale: bool) -> GestureResult<()> {
        let count = self.y_axes.len();
        let entry = self
            .y_axes
            .get_mut(axis)
            .ok_or(GestureError::AxisOutOfRange { index: axis, count })?;
        let candidate = HeadlessAxis { log_scale, ..*entry };
        candidate.scale()?;
        *entry = candidate;
        Ok(())
    }

    pub fn set_x_window(&mut self, window: Option<DataRange>) -> GestureResult<()> {
        let window = window.map(|w| w.validate("x window")).transpose()?;
        self.x_axis.window = window;
        Ok(())
    }

    pub fn set_y_window(&mut self, axis: usize, window: Option<DataRange>) -> GestureResult<()> {
        let count = self.y_axes.len();
        let entry = self
            .y_axes
            .get_mut(axis)
            .ok_or(GestureError::AxisOutOfRange { index: axis, count })?;
        let candidate = HeadlessAxis {
            window: window.map(|w| w.validate("y window")).transpose()?,
            ..*entry
        };
        candidate.scale()?;
        *entry = candidate;
        Ok(())
    }

    /// Replaces the crosshair highlight state.
    pub fn set_highlight(
        &mut self,
        points: Vec<HighlightedPoint>,
        last_x: Option<f64>,
        last_y: Option<f64>,
    ) {
        self.highlighted = points;
        self.last_x = last_x;
        self.last_y = last_y;
    }

    #[must_use]
    pub fn x_window(&self) -> Option<DataRange> {
        self.x_axis.window
    }

    #[must_use]
    pub fn y_window(&self, axis: usize) -> Option<DataRange> {
        self.y_axes.get(axis).and_then(|entry| entry.window)
    }

    #[must_use]
    pub fn overlay(&self) -> Option<ZoomOverlay> {
        self.overlay
    }

    #[must_use]
    pub fn redraw_count(&self) -> usize {
        self.redraw_count
    }

    /// Callback effects received so far, in order.
    #[must_use]
    pub fn callbacks(&self) -> &[GestureEffect] {
        &self.callbacks
    }

    pub fn take_callbacks(&mut self) -> Vec<GestureEffect> {
        std::mem::take(&mut self.callbacks)
    }

    fn axis(&self, axis: usize) -> HeadlessAxis {
        self.y_axes.get(axis).copied().unwrap_or(self.y_axes[0])
    }

    fn x_fraction_scale(&self) -> Option<AxisScale> {
        self.x_axis.scale().ok()
    }

    fn y_fraction_scale(&self, axis: usize) -> Option<AxisScale> {
        self.axis(axis).scale().ok()
    }
}

impl ChartView for HeadlessChart {
    fn widget_size(&self) -> (f64, f64) {
        (self.widget_width, self.widget_height)
    }

    fn plot_area(&self) -> PlotArea {
        self.plot_area
    }

    fn pixel_to_data_x(&self, px: f64) -> f64 {
        self.x_fraction_scale().map_or(f64::NAN, |scale| {
            scale.fraction_to_value((px - self.plot_area.x) / self.plot_area.width)
        })
    }

    fn data_to_pixel_x(&self, value: f64) -> f64 {
        self.x_fraction_scale().map_or(f64::NAN, |scale| {
            self.plot_area.x + scale.value_to_fraction(value) * self.plot_area.width
        })
    }

    fn pixel_to_data_y(&self, py: f64, axis: usize) -> f64 {
        self.y_fraction_scale(axis).map_or(f64::NAN, |scale| {
            scale.fraction_to_value(1.0 - (py - self.plot_area.y) / self.plot_area.height)
        })
    }

    fn data_to_pixel_y(&self, value: f64, axis: usize) -> f64 {
        self.y_fraction_scale(axis).map_or(f64::NAN, |scale| {
            self.plot_area.y + (1.0 - scale.value_to_fraction(value)) * self.plot_area.height
        })
    }

    fn x_range(&self) -> DataRange {
        self.x_axis.visible()
    }

    fn y_range(&self, axis: usize) -> DataRange {
        self.axis(axis).visible()
    }

    fn x_extremes(&self) -> DataRange {
        self.x_axis.extremes
    }

    fn y_extremes(&self, axis: usize) -> DataRange {
        self.axis(axis).extremes
    }

    fn y_axis_count(&self) -> usize {
        self.y_axes.len()
    }

    fn is_log_scale(&self, axis: usize) -> bool {
        self.axis(axis).log_scale
    }

    fn has_explicit_y_window(&self, axis: usize) -> bool {
        self.axis(axis).window.is_some()
    }

    fn highlighted_points(&self) -> &[HighlightedPoint] {
        &self.highlighted
    }

    fn last_highlighted_x(&self) -> Option<f64> {
        self.last_x
    }

    fn last_highlighted_y(&self) -> Option<f64> {
        self.last_y
    }
}

impl EffectSink for HeadlessChart {
    fn apply_effect(&mut self, effect: GestureEffect) -> GestureResult<()> {
        match effect {
            GestureEffect::CommitXWindow(window) => self.set_x_window(Some(window)),
            GestureEffect::CommitYWindow { axis, window } => self.set_y_window(axis, Some(window)),
            GestureEffect::Redraw => {
                self.overlay = None;
                self.redraw_count += 1;
                Ok(())
            }
            GestureEffect::DrawZoomOverlay(overlay) => {
                self.overlay = Some(overlay);
                Ok(())
            }
            GestureEffect::ClearZoomOverlay => {
                self.overlay = None;
                Ok(())
            }
            GestureEffect::ResetViewport => {
                self.x_axis.window = None;
                for axis in &mut self.y_axes {
                    axis.window = None;
                }
                self.overlay = None;
                self.redraw_count += 1;
                Ok(())
            }
            callback => {
                self.callbacks.push(callback);
                Ok(())
            }
        }
    }
}
