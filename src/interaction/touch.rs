use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::api::{ChartView, GestureConfig, GestureTuning};
use crate::core::geometry::{folded_angle_degrees, midpoint};
use crate::core::{DataPoint, DataRange, LOG_SCALE_BASE, ScreenPoint};

use super::{GestureEffect, GestureEffects};

/// Pinches within this many degrees of an axis only zoom that axis.
const SINGLE_AXIS_SWATH_DEGREES: f64 = 45.0 / 2.0;

/// Screen position of a touch with its data-space projection.
///
/// `data.y` is in `log10` space when the primary y-axis is logarithmic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchAnchor {
    pub screen: ScreenPoint,
    pub data: DataPoint,
}

/// Axes a touch gesture is allowed to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchDirections {
    pub x: bool,
    pub y: bool,
}

impl TouchDirections {
    /// Classifies a pinch by the folded angle of its first touch around the
    /// center. Near-diagonal pinches (the overlap of both swaths) zoom both
    /// axes.
    #[must_use]
    pub fn from_angle(folded_degrees: f64) -> Self {
        Self {
            x: folded_degrees < 90.0 - SINGLE_AXIS_SWATH_DEGREES,
            y: folded_degrees > SINGLE_AXIS_SWATH_DEGREES,
        }
    }
}

/// Clamps a raw per-axis pinch scale to the tuned bounds.
///
/// A `0 / 0` ratio (both fingers aligned on that axis at start and now)
/// carries no scale information and yields `1.0`.
#[must_use]
pub fn clamp_pinch_scale(raw: f64, tuning: &GestureTuning) -> f64 {
    if raw.is_nan() {
        return 1.0;
    }
    raw.clamp(tuning.pinch_scale_min, tuning.pinch_scale_max)
}

/// Snapshot of a touch sequence, taken at touch start.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchState {
    initial_touches: SmallVec<[TouchAnchor; 2]>,
    initial_center: TouchAnchor,
    directions: TouchDirections,
    initial_x: DataRange,
    initial_y: Option<DataRange>,
    y_log: bool,
}

impl TouchState {
    /// Starts a touch sequence. Returns `None` when no finger is down.
    ///
    /// With three or more fingers only the first two shape the pinch.
    pub(crate) fn start<V: ChartView + ?Sized>(touches: &[ScreenPoint], view: &V) -> Option<Self> {
        let first = *touches.first()?;
        let has_y = view.y_axis_count() > 0;
        let y_log = has_y && view.is_log_scale(0);

        let initial_touches: SmallVec<[TouchAnchor; 2]> = touches
            .iter()
            .map(|touch| anchor(*touch, view, has_y, y_log))
            .collect();

        let (initial_center, directions) = match touches.get(1) {
            None => (
                initial_touches[0],
                TouchDirections { x: true, y: true },
            ),
            Some(second) => {
                let center = midpoint(first, *second);
                let angle = folded_angle_degrees(center, first);
                (
                    anchor(center, view, has_y, y_log),
                    TouchDirections::from_angle(angle),
                )
            }
        };

        let initial_y = has_y.then(|| {
            let range = view.y_range(0);
            if y_log { range.map(f64::log10) } else { range }
        });

        debug!(
            touches = touches.len(),
            x = directions.x,
            y = directions.y,
            "touch started"
        );
        Some(Self {
            initial_touches,
            initial_center,
            directions,
            initial_x: view.x_range(),
            initial_y,
            y_log,
        })
    }

    #[must_use]
    pub fn initial_touches(&self) -> &[TouchAnchor] {
        &self.initial_touches
    }

    #[must_use]
    pub fn initial_center(&self) -> TouchAnchor {
        self.initial_center
    }

    #[must_use]
    pub fn directions(&self) -> TouchDirections {
        self.directions
    }

    /// Clamped `(x, y)` scale factors for the current touches.
    #[must_use]
    pub fn scale_factors(&self, touches: &[ScreenPoint], tuning: &GestureTuning) -> (f64, f64) {
        let (Some(initial_second), Some(second)) = (self.initial_touches.get(1), touches.get(1))
        else {
            return (1.0, 1.0);
        };
        let center = midpoint(touches[0], *second);
        let initial_center = self.initial_center.screen;

        let raw_x = (second.x - center.x) / (initial_second.screen.x - initial_center.x);
        let raw_y = (second.y - center.y) / (initial_second.screen.y - initial_center.y);
        (
            clamp_pinch_scale(raw_x, tuning),
            clamp_pinch_scale(raw_y, tuning),
        )
    }

    pub(crate) fn drag_to<V: ChartView + ?Sized>(
        &self,
        touches: &[ScreenPoint],
        view: &V,
        config: &GestureConfig,
    ) -> GestureEffects {
        let mut effects = GestureEffects::new();
        let Some(first) = touches.first() else {
            return effects;
        };

        let center_now = match touches.get(1) {
            None => *first,
            Some(second) => midpoint(*first, *second),
        };
        let swipe = center_now.delta_from(self.initial_center.screen);
        let area = view.plot_area();
        let (x_scale, y_scale) = self.scale_factors(touches, &config.tuning);
        let center = self.initial_center.data;

        let mut new_x = None;
        if self.directions.x {
            let swipe_data = swipe.x / area.width * self.initial_x.span();
            let window = self
                .initial_x
                .map(|bound| center.x - swipe_data + (bound - center.x) / x_scale);
            effects.push(GestureEffect::CommitXWindow(window));
            new_x = Some(window);
        }

        let mut new_y = None;
        if let (true, Some(initial_y)) = (self.directions.y, self.initial_y) {
            // Screen y grows downward, so the data height is negative.
            let swipe_data = swipe.y / area.height * (initial_y.low - initial_y.high);
            let window = initial_y.map(|bound| center.y - swipe_data + (bound - center.y) / y_scale);
            let window = if self.y_log {
                window.map(|value| LOG_SCALE_BASE.powf(value))
            } else {
                window
            };
            effects.push(GestureEffect::CommitYWindow { axis: 0, window });
            new_y = Some(window);
        }

        effects.push(GestureEffect::Redraw);
        trace!(
            touches = touches.len(),
            x_scale,
            y_scale,
            swipe_x = swipe.x,
            swipe_y = swipe.y,
            "touch moved"
        );

        let zoomed = new_x.is_some() || new_y.is_some();
        if zoomed && touches.len() > 1 && config.callbacks.zoom_complete {
            let mut y_ranges = view.y_ranges();
            if let (Some(window), Some(primary)) = (new_y, y_ranges.first_mut()) {
                *primary = window;
            }
            effects.push(GestureEffect::ZoomCompleted {
                x: new_x.unwrap_or_else(|| view.x_range()),
                y: y_ranges,
            });
        }
        effects
    }
}

fn anchor<V: ChartView + ?Sized>(
    screen: ScreenPoint,
    view: &V,
    has_y: bool,
    y_log: bool,
) -> TouchAnchor {
    let y = if has_y {
        let value = view.pixel_to_data_y(screen.y, 0);
        if y_log { value.log10() } else { value }
    } else {
        0.0
    };
    TouchAnchor {
        screen,
        data: DataPoint::new(view.pixel_to_data_x(screen.x), y),
    }
}
