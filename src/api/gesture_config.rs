use serde::{Deserialize, Serialize};

use crate::error::GestureResult;

use super::gesture_validation::{validate_gesture_config, validate_gesture_tuning};

/// Selects how raw input events map onto gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InteractionModel {
    /// Drag zooms, modifier-drag pans, double-press resets, touch pinches.
    #[default]
    Default,
    /// Only drag-as-click detection; the viewport never changes.
    NonInteractive,
    /// Every primary drag pans (range-selector style).
    DragIsPan,
}

/// Which host callbacks are configured.
///
/// Callback effects are only emitted for enabled entries, so hosts without a
/// given callback pay nothing for nearest-point searches or payload copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GestureCallbacks {
    #[serde(default)]
    pub point_click: bool,
    #[serde(default)]
    pub click: bool,
    #[serde(default)]
    pub pan_complete: bool,
    #[serde(default)]
    pub zoom_complete: bool,
}

impl GestureCallbacks {
    #[must_use]
    pub fn all() -> Self {
        Self {
            point_click: true,
            click: true,
            pan_complete: true,
            zoom_complete: true,
        }
    }
}

/// Pixel and timing thresholds used by gesture classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureTuning {
    /// Drags shorter than this on both axes are treated as clicks.
    pub click_tolerance_px: f64,
    /// Minimum clipped extent of a zoom rectangle before it commits.
    pub zoom_min_extent_px: f64,
    /// A zoom drag is vertical when `|dx| < |dy| / vertical_bias`.
    pub vertical_bias: f64,
    pub pinch_scale_min: f64,
    pub pinch_scale_max: f64,
    /// Two taps closer in time than this may form a double-tap.
    pub double_tap_window_ms: i64,
    /// Two taps closer than this on both axes may form a double-tap.
    pub double_tap_radius_px: f64,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            click_tolerance_px: 2.0,
            zoom_min_extent_px: 10.0,
            vertical_bias: 2.0,
            pinch_scale_min: 0.125,
            pinch_scale_max: 8.0,
            double_tap_window_ms: 500,
            double_tap_radius_px: 50.0,
        }
    }
}

impl GestureTuning {
    pub fn validated(self) -> GestureResult<Self> {
        validate_gesture_tuning(self)
    }
}

fn default_highlight_radius_px() -> f64 {
    3.0
}

/// Host-configurable gesture behavior.
///
/// Serializable so hosts can persist it next to their own chart options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    #[serde(default)]
    pub interaction_model: InteractionModel,
    /// Fraction of the widget size the viewport may be panned past the data
    /// extremes. `None` (or zero) disables edge bounds.
    #[serde(default)]
    pub pan_edge_fraction: Option<f64>,
    /// Lets pans also move y windows of axes that carry an explicit window.
    #[serde(default)]
    pub allow_2d_pan: bool,
    /// Radius of highlight circles; clicks within `radius + 2` px hit a point.
    #[serde(default = "default_highlight_radius_px")]
    pub highlight_radius_px: f64,
    #[serde(default)]
    pub callbacks: GestureCallbacks,
    #[serde(default)]
    pub tuning: GestureTuning,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            interaction_model: InteractionModel::Default,
            pan_edge_fraction: None,
            allow_2d_pan: false,
            highlight_radius_px: default_highlight_radius_px(),
            callbacks: GestureCallbacks::default(),
            tuning: GestureTuning::default(),
        }
    }
}

impl GestureConfig {
    #[must_use]
    pub fn with_interaction_model(mut self, model: InteractionModel) -> Self {
        self.interaction_model = model;
        self
    }

    #[must_use]
    pub fn with_pan_edge_fraction(mut self, fraction: f64) -> Self {
        self.pan_edge_fraction = Some(fraction);
        self
    }

    #[must_use]
    pub fn with_2d_pan(mut self, allow: bool) -> Self {
        self.allow_2d_pan = allow;
        self
    }

    #[must_use]
    pub fn with_highlight_radius_px(mut self, radius: f64) -> Self {
        self.highlight_radius_px = radius;
        self
    }

    #[must_use]
    pub fn with_callbacks(mut self, callbacks: GestureCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: GestureTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn validated(self) -> GestureResult<Self> {
        validate_gesture_config(self)
    }

    /// Edge fraction when edge-bounded panning is active.
    #[must_use]
    pub(crate) fn active_edge_fraction(&self) -> Option<f64> {
        self.pan_edge_fraction.filter(|fraction| *fraction != 0.0)
    }
}
