//! Orbit camera around the world origin.
//!
//! These types avoid referencing platform-specific APIs. Front ends feed pointer
//! deltas in and read right-handed view/projection matrices out once per frame.

use crate::constants::{
    elevation_limit, DRAG_SENSITIVITY, FOVY_RADIANS, INITIAL_AZIMUTH, INITIAL_ELEVATION,
    INITIAL_RADIUS, MAX_RADIUS, MIN_RADIUS, ZOOM_SENSITIVITY, Z_FAR, Z_NEAR,
};
use crate::error::ConfigError;
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    /// Radians of orbit per pixel of drag.
    pub drag_sensitivity: f32,
    /// Radius change per unit of scroll.
    pub zoom_sensitivity: f32,
    /// Elevation is clamped to `[-elevation_limit, elevation_limit]`.
    pub elevation_limit: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub initial_azimuth: f32,
    pub initial_elevation: f32,
    pub initial_radius: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: DRAG_SENSITIVITY,
            zoom_sensitivity: ZOOM_SENSITIVITY,
            elevation_limit: elevation_limit(),
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            initial_azimuth: INITIAL_AZIMUTH,
            initial_elevation: INITIAL_ELEVATION,
            initial_radius: INITIAL_RADIUS,
            fovy_radians: FOVY_RADIANS,
            znear: Z_NEAR,
            zfar: Z_FAR,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.elevation_limit > 0.0 && self.elevation_limit < FRAC_PI_2) {
            return Err(ConfigError::InvalidElevationLimit {
                limit: self.elevation_limit,
            });
        }
        if !(self.min_radius > 0.0 && self.min_radius <= self.max_radius) {
            return Err(ConfigError::InvalidRadiusRange {
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        if !(self.znear > 0.0 && self.znear < self.zfar) {
            return Err(ConfigError::InvalidClipPlanes {
                znear: self.znear,
                zfar: self.zfar,
            });
        }
        if !(self.min_radius..=self.max_radius).contains(&self.initial_radius) {
            return Err(ConfigError::InvalidInitialRadius {
                radius: self.initial_radius,
                min: self.min_radius,
                max: self.max_radius,
            });
        }
        Ok(())
    }
}

/// Eye on a sphere of `radius` around the origin, looking at the origin.
///
/// `elevation` is measured from the horizontal plane and never reaches the
/// poles, so the look-at basis with a fixed +Y up vector is always defined.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    azimuth: f32,
    elevation: f32,
    radius: f32,
    config: CameraConfig,
}

impl OrbitCamera {
    pub fn new(config: CameraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let limit = config.elevation_limit;
        Ok(Self {
            azimuth: config.initial_azimuth,
            elevation: config.initial_elevation.clamp(-limit, limit),
            radius: config.initial_radius,
            config,
        })
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Orbit by a pointer drag, in pixels.
    pub fn on_drag_delta(&mut self, dx: f32, dy: f32) {
        let k = self.config.drag_sensitivity;
        let limit = self.config.elevation_limit;
        self.azimuth -= dx * k;
        self.elevation = (self.elevation + dy * k).clamp(-limit, limit);
    }

    /// Dolly by a scroll/pinch delta; positive moves the eye away.
    pub fn on_scroll_delta(&mut self, dy: f32) {
        self.radius = (self.radius + dy * self.config.zoom_sensitivity)
            .clamp(self.config.min_radius, self.config.max_radius);
    }

    pub fn eye_position(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();
        Vec3::new(
            self.radius * cos_el * sin_az,
            self.radius * sin_el,
            self.radius * cos_el * cos_az,
        )
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), Vec3::ZERO, Vec3::Y)
    }

    /// Compute the clip-space projection matrix for the current viewport.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.config.fovy_radians,
            aspect,
            self.config.znear,
            self.config.zfar,
        )
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
