//! Gesture state machine.
//!
//! Raw pointer and touch events are folded into a [`GestureContext`] by
//! [`transition`]; every step yields [`GestureEffects`] the host executes.

mod click;
mod dispatcher;
mod effect;
mod event;
mod pan;
mod tap;
mod touch;
mod zoom;

use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;

pub use dispatcher::{GestureController, transition};
pub use effect::{GestureEffect, GestureEffects, PreviousOverlay, ZoomOverlay};
pub use event::{GestureEvent, Modifiers, PointerButton, PointerInput, TouchInput, TouchPoints};
pub use pan::{AxisPanState, PanState};
pub use tap::{DblclickGuard, DoubleTapTracker, TapRecord};
pub use touch::{TouchAnchor, TouchDirections, TouchState, clamp_pinch_scale};
pub use zoom::{ZoomState, classify_drag_direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    /// Pointer is down without a drag gesture (non-interactive model).
    Pressed,
    Panning,
    Zooming,
    Touching,
}

/// Which axis a rectangle zoom commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragDirection {
    Horizontal,
    Vertical,
}

/// The active gesture, if any. Gesture-specific scratch state only exists
/// inside its own variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Pressed { start: ScreenPoint },
    Panning(PanState),
    Zooming(ZoomState),
    Touching(TouchState),
}

impl GestureState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        match self {
            Self::Idle => InteractionMode::Idle,
            Self::Pressed { .. } => InteractionMode::Pressed,
            Self::Panning(_) => InteractionMode::Panning,
            Self::Zooming(_) => InteractionMode::Zooming,
            Self::Touching(_) => InteractionMode::Touching,
        }
    }
}

/// Gesture state plus the one-shot memories that outlive single gestures.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureContext {
    pub state: GestureState,
    pub double_tap: DoubleTapTracker,
    pub dblclick_guard: DblclickGuard,
}

impl GestureContext {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.state.mode()
    }
}
