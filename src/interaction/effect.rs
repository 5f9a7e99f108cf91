use smallvec::SmallVec;

use crate::api::HighlightedPoint;
use crate::core::{DataRange, ScreenPoint};

use super::DragDirection;

/// Zoom selection rectangle to draw, with the previously drawn one so the
/// overlay can be erased incrementally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomOverlay {
    pub direction: DragDirection,
    pub start: ScreenPoint,
    pub end: ScreenPoint,
    pub previous: Option<PreviousOverlay>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviousOverlay {
    pub direction: DragDirection,
    pub end: ScreenPoint,
}

/// Command produced by a gesture transition and executed by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureEffect {
    CommitXWindow(DataRange),
    CommitYWindow { axis: usize, window: DataRange },
    /// Full chart redraw.
    Redraw,
    DrawZoomOverlay(ZoomOverlay),
    ClearZoomOverlay,
    ResetViewport,
    /// Point-click callback: a click landed on a highlighted point.
    PointClicked {
        position: ScreenPoint,
        point: HighlightedPoint,
    },
    /// Click callback with the last highlighted x and every highlighted point.
    Clicked {
        position: ScreenPoint,
        x: f64,
        points: Vec<HighlightedPoint>,
    },
    PanCompleted { x: Option<f64>, y: Option<f64> },
    ZoomCompleted { x: DataRange, y: Vec<DataRange> },
}

impl GestureEffect {
    #[must_use]
    pub fn is_callback(&self) -> bool {
        matches!(
            self,
            Self::PointClicked { .. }
                | Self::Clicked { .. }
                | Self::PanCompleted { .. }
                | Self::ZoomCompleted { .. }
        )
    }
}

pub type GestureEffects = SmallVec<[GestureEffect; 4]>;
