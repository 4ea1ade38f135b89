// Host-side tests for the orbit camera state and matrices.

use attractor_core::*;
use glam::{Vec3, Vec4};
use std::f32::consts::FRAC_PI_2;

fn camera() -> OrbitCamera {
    OrbitCamera::new(CameraConfig::default()).unwrap()
}

#[test]
fn starts_on_positive_z_axis_at_initial_radius() {
    let cam = camera();
    assert_eq!(cam.azimuth(), INITIAL_AZIMUTH);
    assert_eq!(cam.elevation(), INITIAL_ELEVATION);
    assert_eq!(cam.radius(), INITIAL_RADIUS);
    let eye = cam.eye_position();
    assert!((eye - Vec3::new(0.0, 0.0, 80.0)).length() < 1e-4);
}

#[test]
fn drag_moves_azimuth_against_dx_and_elevation_with_dy() {
    let mut cam = camera();
    cam.on_drag_delta(10.0, 5.0);
    assert!((cam.azimuth() - (-10.0 * DRAG_SENSITIVITY)).abs() < 1e-6);
    assert!((cam.elevation() - 5.0 * DRAG_SENSITIVITY).abs() < 1e-6);
}

#[test]
fn elevation_never_leaves_clamp_range() {
    let mut cam = camera();
    let limit = cam.config().elevation_limit;
    assert!(limit < FRAC_PI_2);
    for _ in 0..100 {
        cam.on_drag_delta(0.0, 1_000.0);
        assert!(cam.elevation() <= limit && cam.elevation() >= -limit);
    }
    assert_eq!(cam.elevation(), limit);
    for _ in 0..100 {
        cam.on_drag_delta(3.0, -1_000.0);
        assert!(cam.elevation() <= limit && cam.elevation() >= -limit);
    }
    assert_eq!(cam.elevation(), -limit);
}

#[test]
fn radius_never_leaves_clamp_range() {
    let mut cam = camera();
    for _ in 0..500 {
        cam.on_scroll_delta(250.0);
        assert!(cam.radius() <= MAX_RADIUS);
    }
    assert_eq!(cam.radius(), MAX_RADIUS);
    for _ in 0..500 {
        cam.on_scroll_delta(-250.0);
        assert!(cam.radius() >= MIN_RADIUS);
    }
    assert_eq!(cam.radius(), MIN_RADIUS);
}

#[test]
fn scroll_applies_zoom_sensitivity() {
    let mut cam = camera();
    cam.on_scroll_delta(100.0);
    assert!((cam.radius() - (INITIAL_RADIUS + 100.0 * ZOOM_SENSITIVITY)).abs() < 1e-4);
}

#[test]
fn eye_stays_on_sphere_of_radius() {
    let mut cam = camera();
    for i in 0..50 {
        cam.on_drag_delta(i as f32 * 3.7, (i as f32 - 25.0) * 2.1);
        cam.on_scroll_delta((i as f32 - 20.0) * 4.0);
        let eye = cam.eye_position();
        assert!((eye.length() - cam.radius()).abs() < 1e-3);
        let expected_y = cam.radius() * cam.elevation().sin();
        assert!((eye.y - expected_y).abs() < 1e-3);
    }
}

#[test]
fn view_matrix_maps_eye_to_origin_and_target_onto_forward_axis() {
    let mut cam = camera();
    cam.on_drag_delta(42.0, -17.0);
    let view = cam.view_matrix();
    let eye = view * cam.eye_position().extend(1.0);
    assert!(eye.truncate().length() < 1e-3);
    let target = view * Vec4::new(0.0, 0.0, 0.0, 1.0);
    // right-handed: the target lies on -Z at distance radius
    assert!(target.x.abs() < 1e-3 && target.y.abs() < 1e-3);
    assert!((target.z + cam.radius()).abs() < 1e-3);
}

#[test]
fn view_matrix_is_finite_at_the_elevation_limit() {
    let mut cam = camera();
    cam.on_drag_delta(0.0, 1e6);
    assert!(cam.view_matrix().is_finite());
    cam.on_drag_delta(0.0, -1e6);
    assert!(cam.view_matrix().is_finite());
}

#[test]
fn reading_view_matrix_twice_is_identical() {
    let mut cam = camera();
    cam.on_drag_delta(12.5, 3.25);
    cam.on_scroll_delta(-40.0);
    assert_eq!(cam.view_matrix(), cam.view_matrix());
    assert_eq!(cam.projection_matrix(1.5), cam.projection_matrix(1.5));
}

#[test]
fn projection_tracks_aspect_ratio() {
    let cam = camera();
    let wide = cam.projection_matrix(2.0);
    let square = cam.projection_matrix(1.0);
    assert!((wide.x_axis.x * 2.0 - square.x_axis.x).abs() < 1e-5);
    assert_eq!(wide.y_axis.y, square.y_axis.y);
    // near/far map to 0/1 depth
    let near = square * Vec4::new(0.0, 0.0, -Z_NEAR, 1.0);
    let far = square * Vec4::new(0.0, 0.0, -Z_FAR, 1.0);
    assert!((near.z / near.w).abs() < 1e-4);
    assert!((far.z / far.w - 1.0).abs() < 1e-4);
}

#[test]
fn origin_projects_to_screen_center() {
    let mut cam = camera();
    cam.on_drag_delta(-80.0, 33.0);
    let clip = cam.view_projection(16.0 / 9.0) * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((clip.x / clip.w).abs() < 1e-4);
    assert!((clip.y / clip.w).abs() < 1e-4);
}

#[test]
fn invalid_configs_are_rejected() {
    let bad_limit = CameraConfig {
        elevation_limit: FRAC_PI_2,
        ..CameraConfig::default()
    };
    assert!(matches!(
        OrbitCamera::new(bad_limit),
        Err(ConfigError::InvalidElevationLimit { .. })
    ));
    let bad_range = CameraConfig {
        min_radius: 50.0,
        max_radius: 20.0,
        ..CameraConfig::default()
    };
    assert!(matches!(
        OrbitCamera::new(bad_range),
        Err(ConfigError::InvalidRadiusRange { .. })
    ));
    let bad_clip = CameraConfig {
        znear: 0.0,
        ..CameraConfig::default()
    };
    assert!(matches!(
        OrbitCamera::new(bad_clip),
        Err(ConfigError::InvalidClipPlanes { .. })
    ));
    let bad_start = CameraConfig {
        initial_radius: 500.0,
        ..CameraConfig::default()
    };
    assert!(matches!(
        OrbitCamera::new(bad_start),
        Err(ConfigError::InvalidInitialRadius { .. })
    ));
}
