use chart_gestures::api::{
    ChartView, GestureCallbacks, GestureConfig, GestureEngine, HeadlessChart, HighlightedPoint,
};
use chart_gestures::core::{DataPoint, DataRange, PlotArea, ScreenPoint};
use chart_gestures::interaction::{
    DragDirection, GestureEffect, GestureEvent, InteractionMode, Modifiers, PointerButton,
    PointerInput,
};

fn build_engine(config: GestureConfig) -> GestureEngine<HeadlessChart> {
    let chart = HeadlessChart::new(
        (300.0, 200.0),
        PlotArea::new(0.0, 0.0, 300.0, 200.0),
        DataRange::new(0.0, 300.0),
        DataRange::new(0.0, 200.0),
    )
    .expect("chart init");
    GestureEngine::new(chart, config).expect("engine init")
}

fn drag(engine: &mut GestureEngine<HeadlessChart>, from: (f64, f64), to: (f64, f64)) {
    engine
        .handle_event(&GestureEvent::Press(PointerInput::at(from.0, from.1)))
        .expect("press");
    engine
        .handle_event(&GestureEvent::Move(PointerInput::at(to.0, to.1)))
        .expect("move");
    engine
        .handle_event(&GestureEvent::Release(PointerInput::at(to.0, to.1)))
        .expect("release");
}

fn double_press() -> GestureEvent {
    GestureEvent::DoublePress {
        modifiers: Modifiers::none(),
    }
}

#[test]
fn horizontal_drag_commits_x_range_and_arms_dblclick_guard() {
    let mut engine = build_engine(GestureConfig::default());
    let expected = DataRange::new(
        engine.host().pixel_to_data_x(50.0),
        engine.host().pixel_to_data_x(200.0),
    );

    drag(&mut engine, (50.0, 100.0), (200.0, 104.0));

    assert_eq!(engine.mode(), InteractionMode::Idle);
    assert_eq!(engine.host().x_window(), Some(expected));
    assert!(engine.context().dblclick_guard.is_armed());
    assert!(engine.host().overlay().is_none());
}

#[test]
fn zoom_rectangle_is_clipped_to_plot_area() {
    let mut engine = build_engine(GestureConfig::default());
    drag(&mut engine, (250.0, 100.0), (420.0, 100.0));

    let window = engine.host().x_window().expect("x window");
    assert!((window.low - 250.0).abs() <= 1e-9);
    assert!((window.high - 300.0).abs() <= 1e-9);
}

#[test]
fn clipped_extent_below_threshold_does_not_commit() {
    let mut engine = build_engine(GestureConfig::default());
    drag(&mut engine, (295.0, 100.0), (400.0, 100.0));

    assert!(engine.host().x_window().is_none());
    assert!(!engine.context().dblclick_guard.is_armed());
}

#[test]
fn short_drag_clears_overlay_without_zooming() {
    let mut engine = build_engine(GestureConfig::default());
    engine
        .handle_event(&GestureEvent::Press(PointerInput::at(100.0, 100.0)))
        .expect("press");
    engine
        .handle_event(&GestureEvent::Move(PointerInput::at(105.0, 100.0)))
        .expect("move");
    assert!(engine.host().overlay().is_some());

    let effects = engine
        .handle_event(&GestureEvent::Release(PointerInput::at(105.0, 100.0)))
        .expect("release");
    assert_eq!(effects.as_slice(), &[GestureEffect::ClearZoomOverlay]);
    assert!(engine.host().overlay().is_none());
    assert!(engine.host().x_window().is_none());
}

#[test]
fn vertical_drag_commits_y_range() {
    let mut engine = build_engine(GestureConfig::default());
    drag(&mut engine, (100.0, 40.0), (102.0, 140.0));

    let window = engine.host().y_window(0).expect("y window");
    assert!((window.low - 60.0).abs() <= 1e-9);
    assert!((window.high - 160.0).abs() <= 1e-9);
    assert!(engine.host().x_window().is_none());
}

#[test]
fn vertical_zoom_updates_every_axis() {
    let chart = HeadlessChart::new(
        (300.0, 200.0),
        PlotArea::new(0.0, 0.0, 300.0, 200.0),
        DataRange::new(0.0, 300.0),
        DataRange::new(0.0, 200.0),
    )
    .expect("chart init")
    .with_y_axis(DataRange::new(1.0, 100.0), true)
    .expect("log axis");
    let mut engine = GestureEngine::new(chart, GestureConfig::default()).expect("engine init");

    drag(&mut engine, (100.0, 0.0), (100.0, 100.0));

    let log_window = engine.host().y_window(1).expect("log window");
    assert!((log_window.low - 10.0).abs() <= 1e-9);
    assert!((log_window.high - 100.0).abs() <= 1e-9);
}

#[test]
fn overlay_carries_previous_rectangle() {
    let mut engine = build_engine(GestureConfig::default());
    engine
        .handle_event(&GestureEvent::Press(PointerInput::at(50.0, 50.0)))
        .expect("press");
    engine
        .handle_event(&GestureEvent::Move(PointerInput::at(80.0, 55.0)))
        .expect("move");
    let first = engine.host().overlay().expect("first overlay");
    assert!(first.previous.is_none());
    assert_eq!(first.direction, DragDirection::Horizontal);

    engine
        .handle_event(&GestureEvent::Move(PointerInput::at(60.0, 120.0)))
        .expect("move");
    let second = engine.host().overlay().expect("second overlay");
    assert_eq!(second.direction, DragDirection::Vertical);
    let previous = second.previous.expect("previous rectangle");
    assert_eq!(previous.direction, DragDirection::Horizontal);
    assert_eq!(previous.end, ScreenPoint::new(80.0, 55.0));
}

#[test]
fn leaving_surface_clears_overlay_but_keeps_zooming() {
    let mut engine = build_engine(GestureConfig::default());
    engine
        .handle_event(&GestureEvent::Press(PointerInput::at(50.0, 50.0)))
        .expect("press");
    engine
        .handle_event(&GestureEvent::Move(PointerInput::at(150.0, 50.0)))
        .expect("move");

    engine.handle_event(&GestureEvent::Leave).expect("leave");
    assert!(engine.host().overlay().is_none());
    assert_eq!(engine.mode(), InteractionMode::Zooming);
    assert!(engine.host().x_window().is_none());
}

#[test]
fn secondary_button_press_is_ignored() {
    let mut engine = build_engine(GestureConfig::default());
    let effects = engine
        .handle_event(&GestureEvent::Press(
            PointerInput::at(50.0, 50.0).with_button(PointerButton::Secondary),
        ))
        .expect("press");
    assert!(effects.is_empty());
    assert_eq!(engine.mode(), InteractionMode::Idle);
}

#[test]
fn double_press_after_zoom_is_suppressed_once() {
    let mut engine = build_engine(GestureConfig::default());
    drag(&mut engine, (50.0, 100.0), (200.0, 100.0));
    let zoomed = engine.host().x_window();
    assert!(zoomed.is_some());

    engine.handle_event(&double_press()).expect("first double press");
    assert_eq!(engine.host().x_window(), zoomed);

    engine.handle_event(&double_press()).expect("second double press");
    assert_eq!(engine.host().x_range(), DataRange::new(0.0, 300.0));
    assert!(engine.host().x_window().is_none());
}

#[test]
fn double_press_with_modifier_keeps_viewport() {
    let mut engine = build_engine(GestureConfig::default());
    engine
        .host_mut()
        .set_x_window(Some(DataRange::new(10.0, 20.0)))
        .expect("x window");
    let effects = engine
        .handle_event(&GestureEvent::DoublePress {
            modifiers: Modifiers::shift(),
        })
        .expect("double press");
    assert!(effects.is_empty());
    assert_eq!(engine.host().x_window(), Some(DataRange::new(10.0, 20.0)));
}

#[test]
fn zoom_then_reset_restores_extremes_exactly() {
    let mut engine = build_engine(GestureConfig::default());
    drag(&mut engine, (20.0, 30.0), (290.0, 40.0));
    drag(&mut engine, (100.0, 20.0), (110.0, 180.0));
    assert!(engine.host().x_window().is_some());
    assert!(engine.host().y_window(0).is_some());

    engine
        .handle_event(&GestureEvent::DoublePress {
            modifiers: Modifiers::none(),
        })
        .expect("suppressed");
    engine.handle_event(&double_press()).expect("reset");

    assert_eq!(engine.host().x_range(), engine.host().x_extremes());
    assert_eq!(engine.host().y_range(0), engine.host().y_extremes(0));
}

#[test]
fn zoom_completion_callback_reports_new_window() {
    let config = GestureConfig::default().with_callbacks(GestureCallbacks {
        zoom_complete: true,
        ..GestureCallbacks::default()
    });
    let mut engine = build_engine(config);
    drag(&mut engine, (50.0, 100.0), (200.0, 100.0));

    let callbacks = engine.host().callbacks();
    assert_eq!(callbacks.len(), 1);
    let GestureEffect::ZoomCompleted { x, y } = &callbacks[0] else {
        panic!("expected zoom completion, got {:?}", callbacks[0]);
    };
    assert!((x.low - 50.0).abs() <= 1e-9);
    assert!((x.high - 200.0).abs() <= 1e-9);
    assert_eq!(y, &vec![DataRange::new(0.0, 200.0)]);
}

#[test]
fn click_hits_nearest_highlighted_point() {
    let config = GestureConfig::default().with_callbacks(GestureCallbacks::all());
    let mut engine = build_engine(config);
    let near = HighlightedPoint {
        series_index: 1,
        canvas_x: 103.0,
        canvas_y: 98.0,
        point: DataPoint::new(103.0, 102.0),
    };
    let far = HighlightedPoint {
        series_index: 0,
        canvas_x: 100.0,
        canvas_y: 150.0,
        point: DataPoint::new(100.0, 50.0),
    };
    engine
        .host_mut()
        .set_highlight(vec![far, near], Some(100.0), Some(100.0));

    drag(&mut engine, (100.0, 100.0), (101.0, 100.0));

    let callbacks = engine.host().callbacks();
    assert_eq!(callbacks.len(), 2);
    assert!(matches!(
        &callbacks[0],
        GestureEffect::PointClicked { point, .. } if point.series_index == 1
    ));
    assert!(matches!(&callbacks[1], GestureEffect::Clicked { points, .. } if points.len() == 2));
    assert!(engine.host().x_window().is_none());
}

#[test]
fn click_outside_highlight_radius_only_fires_click_callback() {
    let config = GestureConfig::default()
        .with_callbacks(GestureCallbacks::all())
        .with_highlight_radius_px(3.0);
    let mut engine = build_engine(config);
    let point = HighlightedPoint {
        series_index: 0,
        canvas_x: 106.0,
        canvas_y: 100.0,
        point: DataPoint::new(106.0, 100.0),
    };
    engine
        .host_mut()
        .set_highlight(vec![point], Some(106.0), Some(100.0));

    drag(&mut engine, (100.0, 100.0), (100.0, 100.0));

    let callbacks = engine.host().callbacks();
    assert_eq!(callbacks.len(), 1);
    assert!(matches!(&callbacks[0], GestureEffect::Clicked { x, .. } if *x == 106.0));
}

#[test]
fn click_without_highlight_reports_nothing() {
    let config = GestureConfig::default().with_callbacks(GestureCallbacks::all());
    let mut engine = build_engine(config);
    drag(&mut engine, (100.0, 100.0), (101.0, 101.0));
    assert!(engine.host().callbacks().is_empty());
}
