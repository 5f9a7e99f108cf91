use chrono::{DateTime, Utc};
use smallvec::SmallVec;

use crate::core::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// Keyboard modifiers held while the event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub alt: bool,
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::default()
        }
    }

    /// Alt or shift turns a drag into a pan and blocks double-press reset.
    #[must_use]
    pub fn requests_pan(self) -> bool {
        self.alt || self.shift
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// Canvas-relative position.
    pub position: ScreenPoint,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerInput {
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: ScreenPoint::new(x, y),
            button: PointerButton::Primary,
            modifiers: Modifiers::none(),
        }
    }

    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

pub type TouchPoints = SmallVec<[ScreenPoint; 2]>;

/// One touch event.
///
/// `touches` lists the fingers still on the surface, in platform order;
/// `changed` lists the fingers this event is about (for a touch-end, the
/// ones that just lifted).
#[derive(Debug, Clone, PartialEq)]
pub struct TouchInput {
    pub touches: TouchPoints,
    pub changed: TouchPoints,
    pub timestamp: DateTime<Utc>,
}

impl TouchInput {
    #[must_use]
    pub fn new(
        touches: impl IntoIterator<Item = ScreenPoint>,
        changed: impl IntoIterator<Item = ScreenPoint>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            touches: touches.into_iter().collect(),
            changed: changed.into_iter().collect(),
            timestamp,
        }
    }
}

/// Raw input delivered by the host widget.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureEvent {
    Press(PointerInput),
    Move(PointerInput),
    Release(PointerInput),
    /// Pointer left the drawable surface.
    Leave,
    DoublePress { modifiers: Modifiers },
    TouchStart(TouchInput),
    TouchMove(TouchInput),
    TouchEnd(TouchInput),
}

impl GestureEvent {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Press(_) => "press",
            Self::Move(_) => "move",
            Self::Release(_) => "release",
            Self::Leave => "leave",
            Self::DoublePress { .. } => "double_press",
            Self::TouchStart(_) => "touch_start",
            Self::TouchMove(_) => "touch_move",
            Self::TouchEnd(_) => "touch_end",
        }
    }
}
