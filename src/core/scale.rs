use crate::core::types::DataRange;
use crate::error::{GestureError, GestureResult};

/// Base used for logarithmic axes.
pub const LOG_SCALE_BASE: f64 = 10.0;

/// Maps values of one axis window onto the unit interval.
///
/// Linear axes interpolate directly; log axes interpolate in `log10` space,
/// which requires a strictly positive window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    window: DataRange,
    log_scale: bool,
}

impl AxisScale {
    pub fn new(window: DataRange, log_scale: bool) -> GestureResult<Self> {
        let window = window.validate("axis window")?;
        if log_scale && window.low <= 0.0 {
            return Err(GestureError::InvalidData(
                "log-scale axis window must be strictly positive".to_owned(),
            ));
        }
        Ok(Self { window, log_scale })
    }

    #[must_use]
    pub fn window(self) -> DataRange {
        self.window
    }

    #[must_use]
    pub fn is_log_scale(self) -> bool {
        self.log_scale
    }

    /// Position of `value` inside the window: `0.0` at `low`, `1.0` at `high`.
    #[must_use]
    pub fn value_to_fraction(self, value: f64) -> f64 {
        if self.log_scale {
            let low = self.window.low.log10();
            let high = self.window.high.log10();
            (value.log10() - low) / (high - low)
        } else {
            (value - self.window.low) / self.window.span()
        }
    }

    #[must_use]
    pub fn fraction_to_value(self, fraction: f64) -> f64 {
        if self.log_scale {
            let low = self.window.low.log10();
            let high = self.window.high.log10();
            LOG_SCALE_BASE.powf(low + fraction * (high - low))
        } else {
            self.window.low + fraction * self.window.span()
        }
    }
}
