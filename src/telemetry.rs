//! Opt-in `tracing` subscriber setup.
//!
//! Gesture starts and ends are logged at `debug`, per-move updates and
//! applied effects at `trace`, rejected effects at `warn`. Hosts that already
//! run a subscriber only need a directive for the `chart_gestures` target.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "chart_gestures=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is off or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_TRACING_FILTER)
}

/// Like [`init_default_tracing`] with a caller-chosen fallback, e.g.
/// `"chart_gestures=trace"` while debugging a touch sequence.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_directives));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{init_default_tracing, init_tracing_with_fallback};

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn setup_is_a_noop_without_feature() {
        assert!(!init_default_tracing());
        assert!(!init_tracing_with_fallback("chart_gestures=trace"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_install_is_rejected() {
        let _ = init_default_tracing();
        assert!(!init_tracing_with_fallback("chart_gestures=trace"));
    }
}
