use serde::{Deserialize, Serialize};

use crate::error::{GestureError, GestureResult};

use super::GestureConfig;

pub const GESTURE_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: GestureConfig,
}

impl GestureConfig {
    pub fn to_json_pretty(&self) -> GestureResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GestureError::InvalidConfig(format!("failed to serialize gesture config: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> GestureResult<String> {
        let payload = GestureConfigJsonContractV1 {
            schema_version: GESTURE_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GestureError::InvalidConfig(format!(
                "failed to serialize gesture config contract v1: {e}"
            ))
        })
    }

    /// Parses either a bare config object or a versioned v1 envelope, then
    /// validates the result.
    pub fn from_json_compat_str(input: &str) -> GestureResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            GestureError::InvalidConfig(format!("failed to parse gesture config json: {e}"))
        })?;

        let config = if value.get("schema_version").is_some() {
            let payload: GestureConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    GestureError::InvalidConfig(format!(
                        "failed to parse gesture config json payload: {e}"
                    ))
                })?;
            if payload.schema_version != GESTURE_CONFIG_JSON_SCHEMA_V1 {
                return Err(GestureError::InvalidConfig(format!(
                    "unsupported gesture config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value::<GestureConfig>(value).map_err(|e| {
                GestureError::InvalidConfig(format!("failed to parse gesture config: {e}"))
            })?
        };

        config.validated()
    }
}
