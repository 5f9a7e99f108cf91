//! chart-gestures: pointer and touch gesture state machine for chart viewports.
//!
//! Raw press/move/release, double-press and multi-touch events are turned into
//! pan, rectangle-zoom, click and pinch-zoom changes of a time-series viewport.
//! Drawing and coordinate mapping stay with the host, reached through
//! [`api::ChartView`] and [`api::EffectSink`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{GestureConfig, GestureEngine, HeadlessChart};
pub use error::{GestureError, GestureResult};
pub use interaction::{GestureController, GestureEffect, GestureEvent, InteractionMode};
