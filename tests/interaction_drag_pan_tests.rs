use plotview_rs::core::{CanvasSize, MarginProfile, ScreenBox, ScrollTuning, Series, WidthClass, ZoomTuning};
use plotview_rs::{ChartView, ChartViewConfig};

fn build_view(width_class: WidthClass) -> ChartView {
    let series = Series::builder(["2022", "2023", "2024"])
        .channel("tu", vec![10.0, 20.0, 30.0])
        .build()
        .expect("series");
    // Zero start/end insets give x0 = 0 and a step of exactly 100; the
    // 200x100 screen box makes the letterbox mapping the identity.
    let margins = MarginProfile::new(0.0, 0.0, 10.0, 10.0);
    let config = ChartViewConfig::new(CanvasSize::new(200.0, 100.0))
        .with_compact_margins(margins)
        .with_comfortable_margins(margins)
        .with_zoom_tuning(ZoomTuning {
            min_scale: 1.0,
            max_scale: 4.0,
            wheel_step: 2.0,
        })
        .with_scroll_tuning(ScrollTuning::default());
    let mut view = ChartView::new(series, config, width_class).expect("view init");
    view.resize(ScreenBox::new(0.0, 0.0, 200.0, 100.0), width_class);
    view
}

fn zoom_to_two(view: &mut ChartView) {
    assert!(view.wheel(100.0, 50.0, -1.0, true));
    let state = view.viewport_state();
    assert!((state.scale - 2.0).abs() <= 1e-12);
    assert!((state.translate_x - (-100.0)).abs() <= 1e-12);
}

#[test]
fn drag_pans_by_the_logical_delta() {
    let mut view = build_view(WidthClass::Comfortable);
    zoom_to_two(&mut view);

    view.pointer_down(150.0, 50.0);
    assert!(view.gesture().is_dragging());

    view.pointer_move(160.0, 50.0);
    assert!((view.viewport_state().translate_x - (-90.0)).abs() <= 1e-12);
}

#[test]
fn drag_clamps_at_the_pan_bounds() {
    let mut view = build_view(WidthClass::Comfortable);
    zoom_to_two(&mut view);

    view.pointer_down(150.0, 50.0);
    // 250 logical units of drag would overshoot the right bound.
    view.pointer_move(400.0, 50.0);
    assert!((view.viewport_state().translate_x - 0.0).abs() <= 1e-12);

    view.pointer_move(-400.0, 50.0);
    assert!((view.viewport_state().translate_x - (-200.0)).abs() <= 1e-12);
}

#[test]
fn drag_at_identity_scale_cannot_reveal_outside_area() {
    let mut view = build_view(WidthClass::Comfortable);

    view.pointer_down(100.0, 50.0);
    view.pointer_move(180.0, 50.0);
    assert!((view.viewport_state().translate_x - 0.0).abs() <= 1e-12);
}

#[test]
fn pointer_up_ends_the_drag() {
    let mut view = build_view(WidthClass::Comfortable);
    zoom_to_two(&mut view);

    view.pointer_down(150.0, 50.0);
    view.pointer_up();
    assert!(view.gesture().is_idle());

    // Further movement no longer pans.
    view.pointer_move(10.0, 50.0);
    assert!((view.viewport_state().translate_x - (-100.0)).abs() <= 1e-12);
}

#[test]
fn pointer_leave_ends_the_drag_and_clears_the_tooltip() {
    let mut view = build_view(WidthClass::Comfortable);
    view.pointer_move(100.0, 50.0);
    assert!(view.tooltip().is_some());

    view.pointer_down(100.0, 50.0);
    view.pointer_leave();
    assert!(view.gesture().is_idle());
    assert!(view.tooltip().is_none());
}

#[test]
fn compact_presentations_ignore_drag() {
    let mut view = build_view(WidthClass::Compact);

    view.pointer_down(100.0, 50.0);
    assert!(view.gesture().is_idle());
}

#[test]
fn pointer_down_without_a_measured_box_is_a_noop() {
    let series = Series::builder(["2023", "2024"])
        .channel("tu", vec![1.0, 2.0])
        .build()
        .expect("series");
    let mut view = ChartView::new(
        series,
        ChartViewConfig::default(),
        WidthClass::Comfortable,
    )
    .expect("view init");

    view.pointer_down(100.0, 50.0);
    assert!(view.gesture().is_idle());
}

#[test]
fn non_finite_pointer_input_is_ignored() {
    let mut view = build_view(WidthClass::Comfortable);
    zoom_to_two(&mut view);

    view.pointer_down(f64::NAN, 50.0);
    assert!(view.gesture().is_idle());

    view.pointer_down(150.0, 50.0);
    view.pointer_move(f64::NAN, 50.0);
    assert!((view.viewport_state().translate_x - (-100.0)).abs() <= 1e-12);
}
