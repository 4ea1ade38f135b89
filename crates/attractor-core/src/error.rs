use thiserror::Error;

/// Misconfiguration detected while building a session or one of its parts.
///
/// Nothing in the per-frame path can fail; every check lives at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("trajectory capacity must be at least 2 points, got {capacity}")]
    CapacityTooSmall { capacity: usize },
    #[error("integration time step must be finite and positive, got {dt}")]
    InvalidTimeStep { dt: f64 },
    #[error("camera radius range [{min}, {max}] is empty or not positive")]
    InvalidRadiusRange { min: f32, max: f32 },
    #[error("camera elevation limit {limit} must lie strictly inside (0, pi/2)")]
    InvalidElevationLimit { limit: f32 },
    #[error("clip planes must satisfy 0 < near < far, got near={znear} far={zfar}")]
    InvalidClipPlanes { znear: f32, zfar: f32 },
    #[error("initial camera radius {radius} lies outside [{min}, {max}]")]
    InvalidInitialRadius { radius: f32, min: f32, max: f32 },
}
