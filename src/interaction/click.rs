use ordered_float::OrderedFloat;

use crate::api::{ChartView, GestureConfig, HighlightedPoint};
use crate::core::ScreenPoint;
use crate::core::geometry::squared_distance;

use super::{GestureEffect, GestureEffects};

/// Whether a drag from `start` to `end` is short enough to be a click.
///
/// A click also requires a highlighted x position; without one the release
/// is just a tiny drag.
pub(crate) fn is_click<V: ChartView + ?Sized>(
    start: ScreenPoint,
    end: ScreenPoint,
    view: &V,
    config: &GestureConfig,
) -> bool {
    let tolerance = config.tuning.click_tolerance_px;
    (end.x - start.x).abs() < tolerance
        && (end.y - start.y).abs() < tolerance
        && view.last_highlighted_x().is_some()
}

/// Emits point-click and click callbacks for a release at `position`.
///
/// Both callbacks may fire for the same click.
pub(crate) fn click_effects<V: ChartView + ?Sized>(
    position: ScreenPoint,
    view: &V,
    config: &GestureConfig,
    effects: &mut GestureEffects,
) {
    let points = view.highlighted_points();

    if config.callbacks.point_click {
        let radius = config.highlight_radius_px + 2.0;
        if let Some(point) = nearest_point(points, position, radius * radius) {
            effects.push(GestureEffect::PointClicked { position, point });
        }
    }

    if config.callbacks.click {
        if let Some(x) = view.last_highlighted_x() {
            effects.push(GestureEffect::Clicked {
                position,
                x,
                points: points.to_vec(),
            });
        }
    }
}

/// Nearest point by squared pixel distance, accepted within `max_squared`.
///
/// Points whose distance is NaN never win; ties keep the earliest point.
pub(crate) fn nearest_point(
    points: &[HighlightedPoint],
    position: ScreenPoint,
    max_squared: f64,
) -> Option<HighlightedPoint> {
    points
        .iter()
        .map(|point| {
            let distance = squared_distance(
                ScreenPoint::new(point.canvas_x, point.canvas_y),
                position,
            );
            (point, distance)
        })
        .filter(|(_, distance)| !distance.is_nan())
        .min_by_key(|(_, distance)| OrderedFloat(*distance))
        .filter(|(_, distance)| *distance <= max_squared)
        .map(|(point, _)| *point)
}
