use std::mem;

use tracing::{debug, trace};

use crate::api::{ChartView, GestureConfig, InteractionModel};
use crate::error::GestureResult;

use super::click::{click_effects, is_click};
use super::{
    GestureContext, GestureEffect, GestureEffects, GestureEvent, GestureState, InteractionMode,
    PanState, PointerButton, PointerInput, TapRecord, TouchInput, TouchState, ZoomState,
};

/// Folds one input event into the gesture context.
///
/// The view is only queried; every change to the chart is returned as an
/// effect, in the order the host must apply it. Events that make no sense
/// in the current state (a move with nothing pressed, a secondary-button
/// press, ...) return the context unchanged and no effects.
pub fn transition<V: ChartView + ?Sized>(
    mut context: GestureContext,
    event: &GestureEvent,
    view: &V,
    config: &GestureConfig,
) -> (GestureContext, GestureEffects) {
    let effects = match config.interaction_model {
        InteractionModel::Default => default_model(&mut context, event, view, config),
        InteractionModel::NonInteractive => non_interactive_model(&mut context, event, view, config),
        InteractionModel::DragIsPan => drag_is_pan_model(&mut context, event, view, config),
    };
    (context, effects)
}

fn default_model<V: ChartView + ?Sized>(
    context: &mut GestureContext,
    event: &GestureEvent,
    view: &V,
    config: &GestureConfig,
) -> GestureEffects {
    let state = mem::take(&mut context.state);
    match (state, event) {
        (GestureState::Touching(touch), GestureEvent::Press(_)) => {
            context.state = GestureState::Touching(touch);
            GestureEffects::new()
        }
        (state, GestureEvent::Press(input)) => {
            if !is_primary(input) {
                context.state = state;
                return GestureEffects::new();
            }
            let effects = abandon(state);
            context.state = if input.modifiers.requests_pan() {
                GestureState::Panning(PanState::start(input.position, view, config))
            } else {
                GestureState::Zooming(ZoomState::start(input.position))
            };
            effects
        }
        (GestureState::Panning(mut pan), GestureEvent::Move(input)) => {
            let effects = pan.drag_to(input.position);
            context.state = GestureState::Panning(pan);
            effects
        }
        (GestureState::Zooming(mut zoom), GestureEvent::Move(input)) => {
            let effects = zoom.drag_to(input.position, config);
            context.state = GestureState::Zooming(zoom);
            effects
        }
        (GestureState::Panning(pan), GestureEvent::Release(input)) => {
            pan.finish(input.position, view, config)
        }
        (GestureState::Zooming(zoom), GestureEvent::Release(input)) => {
            let (effects, committed) = zoom.finish(input.position, view, config);
            if committed {
                context.dblclick_guard.arm();
            }
            effects
        }
        (GestureState::Zooming(mut zoom), GestureEvent::Leave) => {
            let effects = zoom.leave();
            context.state = GestureState::Zooming(zoom);
            effects
        }
        (state, GestureEvent::DoublePress { modifiers }) => {
            context.state = state;
            let mut effects = GestureEffects::new();
            if context.dblclick_guard.consume() {
                debug!("double press suppressed after zoom");
            } else if !modifiers.requests_pan() {
                effects.push(GestureEffect::ResetViewport);
            }
            effects
        }
        (state, GestureEvent::TouchStart(input)) => {
            let effects = abandon(state);
            start_touch(context, input, view);
            effects
        }
        (GestureState::Touching(touch), GestureEvent::TouchMove(input)) => {
            context.double_tap.clear();
            let effects = touch.drag_to(&input.touches, view, config);
            context.state = GestureState::Touching(touch);
            effects
        }
        (GestureState::Touching(_), GestureEvent::TouchEnd(input)) => {
            end_touch(context, input, view, config)
        }
        (state, GestureEvent::TouchMove(_)) => {
            context.double_tap.clear();
            context.state = state;
            GestureEffects::new()
        }
        (state, _) => {
            context.state = state;
            GestureEffects::new()
        }
    }
}

/// Press and release only; a short enough drag reports a click.
fn non_interactive_model<V: ChartView + ?Sized>(
    context: &mut GestureContext,
    event: &GestureEvent,
    view: &V,
    config: &GestureConfig,
) -> GestureEffects {
    let state = mem::take(&mut context.state);
    match (state, event) {
        (_, GestureEvent::Press(input)) if is_primary(input) => {
            context.state = GestureState::Pressed {
                start: input.position,
            };
            GestureEffects::new()
        }
        (GestureState::Pressed { start }, GestureEvent::Release(input)) => {
            let mut effects = GestureEffects::new();
            if is_click(start, input.position, view, config) {
                click_effects(input.position, view, config, &mut effects);
            }
            effects
        }
        (state, _) => {
            context.state = state;
            GestureEffects::new()
        }
    }
}

/// Every primary drag pans, modifiers or not.
fn drag_is_pan_model<V: ChartView + ?Sized>(
    context: &mut GestureContext,
    event: &GestureEvent,
    view: &V,
    config: &GestureConfig,
) -> GestureEffects {
    let state = mem::take(&mut context.state);
    match (state, event) {
        (state, GestureEvent::Press(input)) if is_primary(input) => {
            let effects = abandon(state);
            context.state = GestureState::Panning(PanState::start(input.position, view, config));
            effects
        }
        (GestureState::Panning(mut pan), GestureEvent::Move(input)) => {
            let effects = pan.drag_to(input.position);
            context.state = GestureState::Panning(pan);
            effects
        }
        (GestureState::Panning(pan), GestureEvent::Release(input)) => {
            pan.finish(input.position, view, config)
        }
        (state, _) => {
            context.state = state;
            GestureEffects::new()
        }
    }
}

fn is_primary(input: &PointerInput) -> bool {
    input.button == PointerButton::Primary
}

/// Drops an unfinished gesture that a new one replaces.
fn abandon(state: GestureState) -> GestureEffects {
    let mut effects = GestureEffects::new();
    match state {
        GestureState::Zooming(zoom) if zoom.moved() => {
            debug!("abandoning unfinished zoom");
            effects.push(GestureEffect::ClearZoomOverlay);
        }
        GestureState::Panning(_) => debug!("abandoning unfinished pan"),
        _ => {}
    }
    effects
}

fn start_touch<V: ChartView + ?Sized>(
    context: &mut GestureContext,
    input: &TouchInput,
    view: &V,
) {
    if input.touches.len() > 1 {
        context.double_tap.clear();
    }
    context.state = TouchState::start(&input.touches, view)
        .map(GestureState::Touching)
        .unwrap_or_default();
}

fn end_touch<V: ChartView + ?Sized>(
    context: &mut GestureContext,
    input: &TouchInput,
    view: &V,
    config: &GestureConfig,
) -> GestureEffects {
    let mut effects = GestureEffects::new();
    if !input.touches.is_empty() {
        start_touch(context, input, view);
        return effects;
    }

    context.state = GestureState::Idle;
    if let [lifted] = input.changed.as_slice() {
        let tap = TapRecord {
            at: input.timestamp,
            position: *lifted,
        };
        if context.double_tap.register(tap, &config.tuning) {
            debug!(x = lifted.x, y = lifted.y, "double tap");
            effects.push(GestureEffect::ResetViewport);
        }
    }
    effects
}

/// Owns the gesture context and feeds it events.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureController {
    context: GestureContext,
    config: GestureConfig,
}

impl GestureController {
    pub fn new(config: GestureConfig) -> GestureResult<Self> {
        Ok(Self {
            context: GestureContext::default(),
            config: config.validated()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the config. Switching interaction model drops any gesture in
    /// progress.
    pub fn set_config(&mut self, config: GestureConfig) -> GestureResult<()> {
        let config = config.validated()?;
        if config.interaction_model != self.config.interaction_model {
            self.context.state = GestureState::Idle;
        }
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn context(&self) -> &GestureContext {
        &self.context
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.context.mode()
    }

    /// Forgets the active gesture and every one-shot memory.
    pub fn reset(&mut self) {
        self.context = GestureContext::default();
    }

    pub fn handle<V: ChartView + ?Sized>(
        &mut self,
        event: &GestureEvent,
        view: &V,
    ) -> GestureEffects {
        let before = self.context.mode();
        let context = mem::take(&mut self.context);
        let (context, effects) = transition(context, event, view, &self.config);
        self.context = context;
        trace!(
            event = event.kind(),
            ?before,
            after = ?self.context.mode(),
            effects = effects.len(),
            "gesture event"
        );
        effects
    }
}
