//! Integration tests for camera geometry: transforms, clamping, fitting and resize

use glam::Vec2;
use world_camera::camera::{FitSpace, Padding, fit_bounds};
use world_camera::{Bounds, Camera, CameraError};

const EPS: f32 = 1e-3;

fn world() -> Vec2 {
    Vec2::new(1000.0, 500.0)
}

fn viewport() -> Vec2 {
    Vec2::new(400.0, 400.0)
}

fn camera() -> Camera {
    Camera::new(&world(), viewport()).expect("valid camera")
}

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < EPS
}

#[test]
fn test_inverse_transform_across_states() {
    let mut camera = camera();
    let points = [
        Vec2::ZERO,
        Vec2::new(1000.0, 500.0),
        Vec2::new(0.0, 500.0),
        Vec2::new(333.3, 77.7),
        Vec2::new(999.0, 1.0),
    ];

    for (zoom, position) in [
        (0.8, Vec2::new(500.0, 250.0)),
        (1.3, Vec2::new(120.0, 400.0)),
        (2.65, Vec2::new(900.0, 60.0)),
    ] {
        camera.set_zoom_scale(zoom);
        camera.set_position_in_world(position);

        for p in points {
            let back = camera.screen_to_world(camera.world_to_screen(p));
            assert!(approx(back, p), "world {p:?} came back as {back:?} at zoom {zoom}");

            let screen = p / 2.0;
            let again = camera.world_to_screen(camera.screen_to_world(screen));
            assert!(approx(again, screen), "screen {screen:?} came back as {again:?}");
        }
    }
}

#[test]
fn test_clamp_is_idempotent() {
    let mut camera = camera();
    camera.set_zoom_scale(2.0);

    for p in [Vec2::new(-50.0, 900.0), Vec2::new(500.0, 250.0), Vec2::new(2000.0, -1.0)] {
        camera.set_position_in_world(p);
        let first = camera.position_in_world();
        camera.set_position_in_world(p);
        assert_eq!(camera.position_in_world(), first);
    }
}

#[test]
fn test_min_zoom_uses_tighter_axis() {
    let mut camera = camera();
    assert!((camera.min_zoom() - 0.8).abs() < EPS);

    camera.set_zoom_scale(0.3);
    assert!((camera.zoom_scale() - 0.8).abs() < EPS);
}

#[test]
fn test_no_overscan_at_min_zoom() {
    let camera = camera();
    let visible = camera.visible_world_rect();
    let world = camera.world_bounds();

    // y is the tighter axis: the view spans the world's full height
    assert!((visible.height() - world.height()).abs() < EPS);
    assert!((visible.min.y - world.min.y).abs() < EPS);
    assert!((visible.max.y - world.max.y).abs() < EPS);

    // x has room to spare and stays inside
    assert!(visible.width() < world.width());
    assert!(world.contains_bounds(&visible, EPS));
    assert!((visible.center().x - world.center().x).abs() < EPS);
}

#[test]
fn test_position_clamp_at_max_zoom() {
    let mut camera = camera();
    camera.set_zoom_scale(2.65);
    assert_eq!(camera.zoom_scale(), 2.65);

    camera.set_position_in_world(Vec2::ZERO);

    let half = viewport() / (2.0 * 2.65);
    assert!(approx(camera.position_in_world(), half));

    let visible = camera.visible_world_rect();
    assert!(visible.min.x >= -EPS);
    assert!(visible.min.y >= -EPS);
}

#[test]
fn test_clamp_on_far_edges() {
    let mut camera = camera();
    camera.set_zoom_scale(2.0);
    camera.set_position_in_world(Vec2::new(5000.0, 5000.0));
    assert_eq!(camera.position_in_world(), Vec2::new(900.0, 400.0));
}

#[test]
fn test_fit_rect_too_wide_is_limited_by_min_zoom() {
    let mut camera = camera();
    camera.set_visible_world_rect(camera.world_bounds());
    assert!((camera.zoom_scale() - camera.min_zoom()).abs() < EPS);
    assert!(camera.world_bounds().contains_bounds(&camera.visible_world_rect(), EPS));
}

#[test]
fn test_fit_rect_contains_requested_rect() {
    let mut camera = camera();
    let requests = [
        Bounds::from_origin_size(Vec2::new(100.0, 100.0), Vec2::new(300.0, 100.0)),
        Bounds::from_origin_size(Vec2::new(600.0, 50.0), Vec2::new(80.0, 300.0)),
        Bounds::from_origin_size(Vec2::new(450.0, 200.0), Vec2::new(200.0, 200.0)),
    ];

    for rect in requests {
        camera.set_visible_world_rect(rect);
        let visible = camera.visible_world_rect();
        assert!(
            visible.contains_bounds(&rect, EPS),
            "requested {rect:?}, visible {visible:?}"
        );
        assert!(camera.world_bounds().contains_bounds(&visible, EPS));
    }
}

#[test]
fn test_fit_rect_keeps_aspect() {
    let mut camera = camera();
    let rect = Bounds::from_origin_size(Vec2::new(100.0, 100.0), Vec2::new(300.0, 100.0));
    camera.set_visible_world_rect(rect);

    // width is the binding axis: 400 / 300
    assert!((camera.zoom_scale() - 400.0 / 300.0).abs() < EPS);
    let visible = camera.visible_world_rect();
    assert!((visible.width() - 300.0).abs() < 0.01);
    assert!((visible.height() - 300.0).abs() < 0.01);
}

#[test]
fn test_fit_tiny_rect_clamps_to_max_zoom() {
    let mut camera = camera();
    camera.set_visible_world_rect(Bounds::point(Vec2::new(500.0, 250.0)));
    assert_eq!(camera.zoom_scale(), camera.max_zoom());
    assert_eq!(camera.position_in_world(), Vec2::new(500.0, 250.0));
}

#[test]
fn test_empty_fit_leaves_camera_alone() {
    let mut camera = camera();
    camera.set_zoom_scale(1.5);
    let before = camera.state();

    let empty: Vec<Vec2> = Vec::new();
    assert!(matches!(
        camera.bounds_for_fit_objects(empty.clone(), Padding::default(), FitSpace::World),
        Err(CameraError::EmptyInput)
    ));
    assert!(matches!(
        camera.fit_objects(empty, Padding::uniform(10.0)),
        Err(CameraError::EmptyInput)
    ));
    assert_eq!(camera.state(), before);
}

#[test]
fn test_fit_objects_with_padding_frames_group() {
    let mut camera = camera();
    let group = [Vec2::new(300.0, 200.0), Vec2::new(420.0, 260.0), Vec2::new(350.0, 300.0)];
    let padding = Padding::uniform(20.0);

    let target = fit_bounds(group, padding).unwrap();
    camera.fit_objects(group, padding).unwrap();

    let visible = camera.visible_world_rect();
    assert!(visible.contains_bounds(&target, EPS));
    for p in group {
        assert!(visible.contains_point(p));
    }
}

#[test]
fn test_viewport_resize_reclamps_zoom() {
    let mut camera = camera();
    camera.set_zoom_scale(1.0);

    camera.resize_viewport(Vec2::new(1200.0, 400.0)).unwrap();
    assert!((camera.min_zoom() - 1.2).abs() < EPS);
    assert!((camera.zoom_scale() - 1.2).abs() < EPS);
    assert!(camera.world_bounds().contains_bounds(&camera.visible_world_rect(), EPS));
}

#[test]
fn test_viewport_resize_keeps_valid_zoom() {
    let mut camera = camera();
    camera.set_zoom_scale(2.0);
    camera.resize_viewport(Vec2::new(500.0, 300.0)).unwrap();
    assert_eq!(camera.zoom_scale(), 2.0);
    assert!((camera.min_zoom() - 0.6).abs() < EPS);
}

#[test]
fn test_infinite_zoom_clamps() {
    let mut camera = camera();
    camera.set_zoom_scale(f32::INFINITY);
    assert_eq!(camera.zoom_scale(), camera.max_zoom());
    camera.set_zoom_scale(f32::NEG_INFINITY);
    assert!((camera.zoom_scale() - camera.min_zoom()).abs() < EPS);
}

#[test]
fn test_axis_covered_by_view_is_centered() {
    // At zoom 3 the view spans the world's full width, so x is pinned to the center
    let mut camera = Camera::new(&Vec2::new(100.0, 100.0), Vec2::new(300.0, 150.0)).unwrap();
    assert!((camera.min_zoom() - 3.0).abs() < EPS);

    camera.set_max_zoom(3.0).unwrap();
    camera.set_position_in_world(Vec2::new(0.0, 0.0));
    assert!(approx(camera.position_in_world(), Vec2::new(50.0, 25.0)));
}
