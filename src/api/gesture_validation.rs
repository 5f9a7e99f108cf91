use crate::error::{GestureError, GestureResult};

use super::{GestureConfig, GestureTuning};

pub(super) fn validate_gesture_tuning(tuning: GestureTuning) -> GestureResult<GestureTuning> {
    if !tuning.click_tolerance_px.is_finite() || tuning.click_tolerance_px < 0.0 {
        return Err(GestureError::InvalidConfig(
            "click_tolerance_px must be finite and >= 0".to_owned(),
        ));
    }
    if !tuning.zoom_min_extent_px.is_finite() || tuning.zoom_min_extent_px <= 0.0 {
        return Err(GestureError::InvalidConfig(
            "zoom_min_extent_px must be finite and > 0".to_owned(),
        ));
    }
    if !tuning.vertical_bias.is_finite() || tuning.vertical_bias <= 0.0 {
        return Err(GestureError::InvalidConfig(
            "vertical_bias must be finite and > 0".to_owned(),
        ));
    }
    if !tuning.pinch_scale_min.is_finite()
        || !tuning.pinch_scale_max.is_finite()
        || tuning.pinch_scale_min <= 0.0
        || tuning.pinch_scale_min > tuning.pinch_scale_max
    {
        return Err(GestureError::InvalidConfig(
            "pinch scale bounds must be finite with 0 < min <= max".to_owned(),
        ));
    }
    if tuning.double_tap_window_ms <= 0 {
        return Err(GestureError::InvalidConfig(
            "double_tap_window_ms must be > 0".to_owned(),
        ));
    }
    if !tuning.double_tap_radius_px.is_finite() || tuning.double_tap_radius_px <= 0.0 {
        return Err(GestureError::InvalidConfig(
            "double_tap_radius_px must be finite and > 0".to_owned(),
        ));
    }
    Ok(tuning)
}

pub(super) fn validate_gesture_config(config: GestureConfig) -> GestureResult<GestureConfig> {
    if let Some(fraction) = config.pan_edge_fraction {
        if !fraction.is_finite() || fraction < 0.0 {
            return Err(GestureError::InvalidConfig(
                "pan_edge_fraction must be finite and >= 0".to_owned(),
            ));
        }
    }
    if !config.highlight_radius_px.is_finite() || config.highlight_radius_px < 0.0 {
        return Err(GestureError::InvalidConfig(
            "highlight_radius_px must be finite and >= 0".to_owned(),
        ));
    }
    validate_gesture_tuning(config.tuning)?;
    Ok(config)
}
