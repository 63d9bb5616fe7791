use plotview_rs::ViewError;
use plotview_rs::core::{PlotRect, ScrollTuning, ViewportState, ViewportTransform, ZoomTuning};

fn build_transform() -> ViewportTransform {
    // x0 = 0 keeps the worked examples readable: step-100 samples at 0/100/200.
    let rect = PlotRect {
        x0: 0.0,
        x1: 200.0,
        y0: 10.0,
        y1: 90.0,
    };
    ViewportTransform::new(rect, 200.0, ZoomTuning::default(), ScrollTuning::default())
        .expect("transform init")
}

#[test]
fn bounds_pin_the_transformed_plot_inside_the_original() {
    let transform = build_transform();

    let bounds = transform.bounds_for(2.0);
    assert!((bounds.min_translate - (-200.0)).abs() <= 1e-12);
    assert!((bounds.max_translate - 0.0).abs() <= 1e-12);

    let identity = transform.bounds_for(1.0);
    assert!((identity.min_translate - 0.0).abs() <= 1e-12);
    assert!((identity.max_translate - 0.0).abs() <= 1e-12);
}

#[test]
fn clamp_translate_stays_within_bounds() {
    let transform = build_transform();

    assert!((transform.clamp_translate(-1_000.0, 2.0) - (-200.0)).abs() <= 1e-12);
    assert!((transform.clamp_translate(50.0, 2.0) - 0.0).abs() <= 1e-12);
    assert!((transform.clamp_translate(-120.0, 2.0) - (-120.0)).abs() <= 1e-12);
}

#[test]
fn zoom_about_keeps_the_focal_point_stationary() {
    let mut transform = build_transform();

    let before = transform.apply_x(100.0);
    let state = transform
        .zoom_about(2.0, 100.0, false)
        .expect("zoom should work");

    assert!((state.scale - 2.0).abs() <= 1e-12);
    assert!((state.translate_x - (-100.0)).abs() <= 1e-12);
    assert!((transform.apply_x(100.0) - before).abs() <= 1e-12);
}

#[test]
fn zoom_clamps_scale_into_the_configured_limits() {
    let mut transform = build_transform();

    let state = transform
        .zoom_about(100.0, 100.0, false)
        .expect("zoom should clamp");
    assert!((state.scale - 4.0).abs() <= 1e-12);

    let state = transform
        .zoom_about(1e-6, 100.0, false)
        .expect("zoom out should clamp");
    assert!((state.scale - 1.0).abs() <= 1e-12);
    assert!((state.translate_x - 0.0).abs() <= 1e-12);
}

#[test]
fn delegated_pan_zoom_pins_translation_at_zero() {
    let mut transform = build_transform();

    let state = transform
        .zoom_about(2.0, 100.0, true)
        .expect("zoom should work");
    assert!((state.scale - 2.0).abs() <= 1e-12);
    assert!((state.translate_x - 0.0).abs() <= 1e-12);
}

#[test]
fn zoom_from_origin_rescales_from_the_captured_state() {
    let mut transform = build_transform();
    let origin = transform.state();

    transform
        .zoom_from_origin(origin, 2.0, 100.0, false)
        .expect("first pinch step");
    let state = transform
        .zoom_from_origin(origin, 6.0, 100.0, false)
        .expect("second pinch step");

    // Ratio applies to the origin scale, not the intermediate one.
    assert!((state.scale - 4.0).abs() <= 1e-12);
}

#[test]
fn zoom_rejects_invalid_factor_and_focal() {
    let mut transform = build_transform();
    let before = transform.state();

    let err = transform
        .zoom_about(0.0, 100.0, false)
        .expect_err("zero factor must fail");
    assert!(matches!(err, ViewError::InvalidData(_)));

    let err = transform
        .zoom_about(2.0, f64::NAN, false)
        .expect_err("nan focal must fail");
    assert!(matches!(err, ViewError::InvalidData(_)));

    assert_eq!(transform.state(), before);
}

#[test]
fn pan_to_clamps_and_rejects_non_finite_input() {
    let mut transform = build_transform();
    transform.zoom_about(2.0, 100.0, false).expect("zoom");

    let state = transform.pan_to(75.0).expect("pan should clamp");
    assert!((state.translate_x - 0.0).abs() <= 1e-12);

    let state = transform.pan_to(-150.0).expect("pan within bounds");
    assert!((state.translate_x - (-150.0)).abs() <= 1e-12);

    assert!(transform.pan_to(f64::INFINITY).is_err());
}

#[test]
fn restore_clamps_scale_and_translation() {
    let mut transform = build_transform();

    let state = transform
        .restore(ViewportState {
            scale: 10.0,
            translate_x: 500.0,
        })
        .expect("restore");
    assert!((state.scale - 4.0).abs() <= 1e-12);
    assert!((state.translate_x - 0.0).abs() <= 1e-12);

    assert!(
        transform
            .restore(ViewportState {
                scale: f64::NAN,
                translate_x: 0.0,
            })
            .is_err()
    );
}

#[test]
fn plot_rect_swap_reclamps_translation() {
    let mut transform = build_transform();
    transform.zoom_about(2.0, 100.0, false).expect("zoom");
    transform.pan_to(-200.0).expect("pan to the far edge");

    // A narrower rect tightens the bounds; the old translation is pulled in.
    transform.set_plot_rect(PlotRect {
        x0: 0.0,
        x1: 150.0,
        y0: 10.0,
        y1: 90.0,
    });
    assert!((transform.state().translate_x - (-150.0)).abs() <= 1e-12);
}

#[test]
fn scroll_content_width_grows_with_scale() {
    let rect = PlotRect {
        x0: 70.0,
        x1: 1140.0,
        y0: 40.0,
        y1: 350.0,
    };
    let mut transform = ViewportTransform::new(
        rect,
        1200.0,
        ZoomTuning::default(),
        ScrollTuning::default(),
    )
    .expect("transform init");

    assert!((transform.scroll_content_width() - 1260.0).abs() <= 1e-9);

    transform.zoom_about(4.0, 600.0, true).expect("zoom");
    assert!((transform.scroll_content_width() - 5040.0).abs() <= 1e-9);
}

#[test]
fn invalid_tuning_is_rejected() {
    let rect = PlotRect {
        x0: 0.0,
        x1: 200.0,
        y0: 10.0,
        y1: 90.0,
    };

    let bad_zoom = ViewportTransform::new(
        rect,
        200.0,
        ZoomTuning {
            min_scale: 0.5,
            max_scale: 4.0,
            wheel_step: 1.1,
        },
        ScrollTuning::default(),
    );
    assert!(bad_zoom.is_err());

    let bad_scroll = ViewportTransform::new(
        rect,
        200.0,
        ZoomTuning::default(),
        ScrollTuning {
            base_min_width: 900.0,
            growth: 0.5,
        },
    );
    assert!(bad_scroll.is_err());
}
