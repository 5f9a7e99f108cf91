use crate::core::types::{DataRange, ScreenPoint};

/// Builds `[low, low + span]`, pushing it right to honor `bound.low` and then
/// left so it does not exceed `bound.high`. The span is never altered.
///
/// When the bound is narrower than the span the lower edge loses: the window
/// ends exactly at `bound.high`.
#[must_use]
pub fn fit_window_from_low(low: f64, span: f64, bound: Option<DataRange>) -> DataRange {
    let Some(bound) = bound else {
        return DataRange::new(low, low + span);
    };
    let mut low = low.max(bound.low);
    let mut high = low + span;
    if high > bound.high {
        low -= high - bound.high;
        high = low + span;
    }
    DataRange::new(low, high)
}

/// Builds `[high - span, high]`, pulling it down to honor `bound.high` and
/// then up so it does not fall below `bound.low`. The span is never altered.
#[must_use]
pub fn fit_window_from_high(high: f64, span: f64, bound: Option<DataRange>) -> DataRange {
    let Some(bound) = bound else {
        return DataRange::new(high - span, high);
    };
    let mut high = high.min(bound.high);
    let mut low = high - span;
    if low < bound.low {
        high -= low - bound.low;
        low = high - span;
    }
    DataRange::new(low, high)
}

#[must_use]
pub fn squared_distance(a: ScreenPoint, b: ScreenPoint) -> f64 {
    (a.x - b.x).powi(2) + (a.y - b.y).powi(2)
}

#[must_use]
pub fn midpoint(a: ScreenPoint, b: ScreenPoint) -> ScreenPoint {
    ScreenPoint::new(0.5 * (a.x + b.x), 0.5 * (a.y + b.y))
}

/// Angle in degrees between the horizontal and the `center -> touch` vector,
/// folded into `[0, 90]`.
///
/// Screen `y` grows downward, so the vertical component is flipped before
/// taking `atan2`.
#[must_use]
pub fn folded_angle_degrees(center: ScreenPoint, touch: ScreenPoint) -> f64 {
    let angle = (center.y - touch.y).atan2(touch.x - center.x).to_degrees().abs();
    if angle > 90.0 { 180.0 - angle } else { angle }
}
