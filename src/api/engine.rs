use tracing::{debug, trace, warn};

use crate::error::GestureResult;
use crate::interaction::{
    GestureContext, GestureController, GestureEffect, GestureEffects, GestureEvent,
    InteractionMode,
};

use super::{ChartHost, GestureConfig};

/// Drives a [`GestureController`] against a host that executes its effects.
pub struct GestureEngine<H: ChartHost> {
    host: H,
    controller: GestureController,
}

impl<H: ChartHost> GestureEngine<H> {
    pub fn new(host: H, config: GestureConfig) -> GestureResult<Self> {
        Ok(Self {
            host,
            controller: GestureController::new(config)?,
        })
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        self.controller.config()
    }

    pub fn set_config(&mut self, config: GestureConfig) -> GestureResult<()> {
        self.controller.set_config(config)
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.controller.mode()
    }

    #[must_use]
    pub fn context(&self) -> &GestureContext {
        self.controller.context()
    }

    pub fn reset_gesture(&mut self) {
        self.controller.reset();
    }

    /// Runs one event through the state machine and applies the resulting
    /// effects in order.
    ///
    /// The gesture state has already advanced when an effect fails; the
    /// remaining effects of this event are skipped and the error returned.
    pub fn handle_event(&mut self, event: &GestureEvent) -> GestureResult<GestureEffects> {
        let effects = self.controller.handle(event, &self.host);
        for effect in &effects {
            self.apply(effect.clone())?;
        }
        Ok(effects)
    }

    fn apply(&mut self, effect: GestureEffect) -> GestureResult<()> {
        if effect.is_callback() {
            debug!(?effect, "gesture callback");
        } else {
            trace!(?effect, "apply gesture effect");
        }
        self.host.apply_effect(effect).inspect_err(|err| {
            warn!(error = %err, "host rejected gesture effect");
        })
    }
}
