mod engine;
mod gesture_config;
mod gesture_validation;
mod headless_chart;
mod json_contract;
mod view;

pub use engine::GestureEngine;
pub use gesture_config::{GestureCallbacks, GestureConfig, GestureTuning, InteractionModel};
pub use headless_chart::HeadlessChart;
pub use json_contract::{GESTURE_CONFIG_JSON_SCHEMA_V1, GestureConfigJsonContractV1};
pub use view::{ChartHost, ChartView, EffectSink, HighlightedPoint};
