use glam::DVec3;

// Shared simulation/camera tuning constants used by every front end.

// Lorenz system (classical butterfly)
pub const LORENZ_SIGMA: f64 = 10.0;
pub const LORENZ_RHO: f64 = 28.0;
pub const LORENZ_BETA: f64 = 8.0 / 3.0;
pub const LORENZ_DT: f64 = 0.01; // fixed integration step per frame

// Seed point; the whole trajectory follows from it
pub const INITIAL_STATE: DVec3 = DVec3::new(0.01, 0.0, 0.0);

// Trail length in points
pub const DEFAULT_CAPACITY: usize = 20_000;
pub const MIN_CAPACITY: usize = 2; // a tangent needs two points

// Orbit camera input
pub const DRAG_SENSITIVITY: f32 = 0.01; // radians per pixel
pub const ZOOM_SENSITIVITY: f32 = 0.05; // radius units per wheel unit
pub const ELEVATION_MARGIN: f32 = 0.1; // keeps the eye away from the poles
pub const MIN_RADIUS: f32 = 10.0;
pub const MAX_RADIUS: f32 = 200.0;

// Orbit camera start
pub const INITIAL_AZIMUTH: f32 = 0.0;
pub const INITIAL_ELEVATION: f32 = 0.0;
pub const INITIAL_RADIUS: f32 = 80.0;

// Lens
pub const FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

#[inline]
pub fn elevation_limit() -> f32 {
    std::f32::consts::FRAC_PI_2 - ELEVATION_MARGIN
}
