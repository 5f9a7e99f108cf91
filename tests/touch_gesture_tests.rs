use chart_gestures::api::{
    ChartView, GestureCallbacks, GestureConfig, GestureEngine, HeadlessChart,
};
use chart_gestures::core::{DataRange, PlotArea, ScreenPoint};
use chart_gestures::interaction::{
    GestureEffect, GestureEvent, GestureState, InteractionMode, PointerInput, TouchDirections,
    TouchInput,
};
use chrono::{DateTime, TimeDelta, Utc};

fn build_chart(y_extremes: DataRange) -> HeadlessChart {
    HeadlessChart::new(
        (400.0, 200.0),
        PlotArea::new(0.0, 0.0, 400.0, 200.0),
        DataRange::new(0.0, 400.0),
        y_extremes,
    )
    .expect("chart init")
}

fn build_engine(config: GestureConfig) -> GestureEngine<HeadlessChart> {
    GestureEngine::new(build_chart(DataRange::new(0.0, 200.0)), config).expect("engine init")
}

fn at_ms(ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::milliseconds(ms)
}

fn points(raw: &[(f64, f64)]) -> Vec<ScreenPoint> {
    raw.iter().map(|(x, y)| ScreenPoint::new(*x, *y)).collect()
}

fn touch_start(raw: &[(f64, f64)], ms: i64) -> GestureEvent {
    GestureEvent::TouchStart(TouchInput::new(points(raw), points(raw), at_ms(ms)))
}

fn touch_move(raw: &[(f64, f64)], ms: i64) -> GestureEvent {
    GestureEvent::TouchMove(TouchInput::new(points(raw), points(raw), at_ms(ms)))
}

fn touch_end(remaining: &[(f64, f64)], lifted: &[(f64, f64)], ms: i64) -> GestureEvent {
    GestureEvent::TouchEnd(TouchInput::new(points(remaining), points(lifted), at_ms(ms)))
}

fn tap(engine: &mut GestureEngine<HeadlessChart>, x: f64, y: f64, down_ms: i64, up_ms: i64) {
    engine
        .handle_event(&touch_start(&[(x, y)], down_ms))
        .expect("tap down");
    engine
        .handle_event(&touch_end(&[], &[(x, y)], up_ms))
        .expect("tap up");
}

fn assert_range(actual: DataRange, low: f64, high: f64) {
    assert!(
        (actual.low - low).abs() <= 1e-9 && (actual.high - high).abs() <= 1e-9,
        "expected [{low}, {high}], got [{}, {}]",
        actual.low,
        actual.high
    );
}

#[test]
fn single_finger_swipe_pans_both_axes_without_zoom_callback() {
    let config = GestureConfig::default().with_callbacks(GestureCallbacks::all());
    let mut engine = build_engine(config);

    engine
        .handle_event(&touch_start(&[(100.0, 100.0)], 0))
        .expect("start");
    assert_eq!(engine.mode(), InteractionMode::Touching);
    engine
        .handle_event(&touch_move(&[(150.0, 120.0)], 16))
        .expect("move");

    assert_range(engine.host().x_range(), -50.0, 350.0);
    assert_range(engine.host().y_range(0), 20.0, 220.0);
    assert!(engine.host().callbacks().is_empty());
}

#[test]
fn horizontal_pinch_zooms_x_only() {
    let config = GestureConfig::default().with_callbacks(GestureCallbacks::all());
    let mut engine = build_engine(config);

    engine
        .handle_event(&touch_start(&[(100.0, 100.0), (300.0, 100.0)], 0))
        .expect("start");
    let GestureState::Touching(touch) = &engine.context().state else {
        panic!("expected touching state");
    };
    assert_eq!(touch.directions(), TouchDirections { x: true, y: false });

    engine
        .handle_event(&touch_move(&[(50.0, 100.0), (350.0, 100.0)], 16))
        .expect("move");

    assert_range(engine.host().x_range(), 200.0 - 200.0 / 1.5, 200.0 + 200.0 / 1.5);
    assert!(engine.host().y_window(0).is_none());

    let callbacks = engine.host().callbacks();
    assert_eq!(callbacks.len(), 1);
    let GestureEffect::ZoomCompleted { x, y } = &callbacks[0] else {
        panic!("expected zoom completion, got {:?}", callbacks[0]);
    };
    assert_range(*x, 200.0 - 200.0 / 1.5, 200.0 + 200.0 / 1.5);
    assert_eq!(y, &vec![DataRange::new(0.0, 200.0)]);
}

#[test]
fn pinching_to_one_point_clamps_scale() {
    let mut engine = build_engine(GestureConfig::default());
    engine
        .handle_event(&touch_start(&[(100.0, 100.0), (300.0, 100.0)], 0))
        .expect("start");

    let GestureState::Touching(touch) = &engine.context().state else {
        panic!("expected touching state");
    };
    let collapsed = points(&[(200.0, 100.0), (200.0, 100.0)]);
    let (x_scale, _) = touch.scale_factors(&collapsed, &engine.config().tuning);
    assert_eq!(x_scale, 0.125);

    engine
        .handle_event(&touch_move(&[(200.0, 100.0), (200.0, 100.0)], 16))
        .expect("move");
    assert_range(engine.host().x_range(), -1400.0, 1800.0);
}

#[test]
fn diagonal_pinch_zooms_both_axes() {
    let mut engine = build_engine(GestureConfig::default());
    engine
        .handle_event(&touch_start(&[(100.0, 50.0), (300.0, 150.0)], 0))
        .expect("start");

    let GestureState::Touching(touch) = &engine.context().state else {
        panic!("expected touching state");
    };
    assert_eq!(touch.directions(), TouchDirections { x: true, y: true });
}

#[test]
fn third_finger_does_not_move_the_pinch_center() {
    let mut engine = build_engine(GestureConfig::default());
    engine
        .handle_event(&touch_start(
            &[(100.0, 100.0), (300.0, 100.0), (0.0, 0.0)],
            0,
        ))
        .expect("start");

    let GestureState::Touching(touch) = &engine.context().state else {
        panic!("expected touching state");
    };
    assert_eq!(touch.initial_center().screen, ScreenPoint::new(200.0, 100.0));
    assert_eq!(touch.initial_touches().len(), 3);
}

#[test]
fn vertical_pinch_on_log_axis_scales_in_decades() {
    let mut chart = build_chart(DataRange::new(1.0, 10_000.0));
    chart.set_log_scale(0, true).expect("log axis");
    let mut engine = GestureEngine::new(chart, GestureConfig::default()).expect("engine init");

    engine
        .handle_event(&touch_start(&[(200.0, 50.0), (200.0, 150.0)], 0))
        .expect("start");
    engine
        .handle_event(&touch_move(&[(200.0, 0.0), (200.0, 200.0)], 16))
        .expect("move");

    let window = engine.host().y_window(0).expect("y window");
    assert!((window.low - 10.0).abs() <= 1e-9);
    assert!((window.high - 1000.0).abs() <= 1e-7);
    assert!(engine.host().x_window().is_none());
}

#[test]
fn lifting_one_of_two_fingers_restarts_as_swipe() {
    let mut engine = build_engine(GestureConfig::default());
    engine
        .handle_event(&touch_start(&[(100.0, 100.0), (300.0, 100.0)], 0))
        .expect("start");
    engine
        .handle_event(&touch_end(&[(300.0, 100.0)], &[(100.0, 100.0)], 40))
        .expect("partial end");

    assert_eq!(engine.mode(), InteractionMode::Touching);
    let GestureState::Touching(touch) = &engine.context().state else {
        panic!("expected touching state");
    };
    assert_eq!(touch.initial_touches().len(), 1);
    assert_eq!(touch.directions(), TouchDirections { x: true, y: true });
}

#[test]
fn double_tap_resets_viewport() {
    let mut engine = build_engine(GestureConfig::default());
    engine
        .host_mut()
        .set_x_window(Some(DataRange::new(10.0, 20.0)))
        .expect("x window");

    tap(&mut engine, 100.0, 100.0, 0, 80);
    assert!(engine.context().double_tap.pending().is_some());
    tap(&mut engine, 102.0, 101.0, 200, 300);

    assert!(engine.host().x_window().is_none());
    assert!(engine.context().double_tap.pending().is_none());
    assert_eq!(engine.mode(), InteractionMode::Idle);
}

#[test]
fn slow_second_tap_is_not_a_double_tap() {
    let mut engine = build_engine(GestureConfig::default());
    engine
        .host_mut()
        .set_x_window(Some(DataRange::new(10.0, 20.0)))
        .expect("x window");

    tap(&mut engine, 100.0, 100.0, 0, 80);
    tap(&mut engine, 100.0, 100.0, 600, 680);

    assert_eq!(engine.host().x_window(), Some(DataRange::new(10.0, 20.0)));
}

#[test]
fn distant_second_tap_is_not_a_double_tap() {
    let mut engine = build_engine(GestureConfig::default());
    engine
        .host_mut()
        .set_x_window(Some(DataRange::new(10.0, 20.0)))
        .expect("x window");

    tap(&mut engine, 100.0, 100.0, 0, 80);
    tap(&mut engine, 160.0, 100.0, 200, 300);

    assert_eq!(engine.host().x_window(), Some(DataRange::new(10.0, 20.0)));
}

#[test]
fn two_finger_touch_discards_pending_tap() {
    let mut engine = build_engine(GestureConfig::default());
    tap(&mut engine, 100.0, 100.0, 0, 80);
    engine
        .handle_event(&touch_start(&[(100.0, 100.0), (150.0, 100.0)], 150))
        .expect("two fingers");
    assert!(engine.context().double_tap.pending().is_none());
}

#[test]
fn moving_touch_is_not_part_of_a_double_tap() {
    let mut engine = build_engine(GestureConfig::default());
    engine
        .host_mut()
        .set_x_window(Some(DataRange::new(10.0, 20.0)))
        .expect("x window");

    tap(&mut engine, 100.0, 100.0, 0, 80);
    engine
        .handle_event(&touch_start(&[(100.0, 100.0)], 150))
        .expect("down");
    engine
        .handle_event(&touch_move(&[(100.0, 100.0)], 170))
        .expect("still");
    engine
        .handle_event(&touch_end(&[], &[(100.0, 100.0)], 200))
        .expect("up");

    assert_eq!(engine.host().x_window(), Some(DataRange::new(10.0, 20.0)));
}

#[test]
fn touch_start_abandons_mouse_zoom() {
    let mut engine = build_engine(GestureConfig::default());
    engine
        .handle_event(&GestureEvent::Press(PointerInput::at(50.0, 50.0)))
        .expect("press");
    engine
        .handle_event(&GestureEvent::Move(PointerInput::at(150.0, 50.0)))
        .expect("move");
    assert!(engine.host().overlay().is_some());

    let effects = engine
        .handle_event(&touch_start(&[(100.0, 100.0)], 0))
        .expect("touch");
    assert_eq!(effects.as_slice(), &[GestureEffect::ClearZoomOverlay]);
    assert_eq!(engine.mode(), InteractionMode::Touching);

    let effects = engine
        .handle_event(&GestureEvent::Press(PointerInput::at(10.0, 10.0)))
        .expect("press during touch");
    assert!(effects.is_empty());
    assert_eq!(engine.mode(), InteractionMode::Touching);
}

#[test]
fn touch_move_without_start_is_a_noop() {
    let mut engine = build_engine(GestureConfig::default());
    let effects = engine
        .handle_event(&touch_move(&[(100.0, 100.0)], 0))
        .expect("stray move");
    assert!(effects.is_empty());
    assert!(engine.host().x_window().is_none());
}
