//! Per-frame orchestration: integrate, append, and package what the renderer needs.

use crate::camera::{CameraConfig, OrbitCamera};
use crate::constants::{DEFAULT_CAPACITY, INITIAL_STATE, MIN_CAPACITY};
use crate::error::ConfigError;
use crate::lorenz::LorenzParams;
use crate::trajectory::TrajectoryStore;
use glam::{DVec3, Mat4, Vec3};

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub lorenz: LorenzParams,
    pub initial_state: DVec3,
    pub capacity: usize,
    pub camera: CameraConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lorenz: LorenzParams::default(),
            initial_state: INITIAL_STATE,
            capacity: DEFAULT_CAPACITY,
            camera: CameraConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn with_lorenz(mut self, lorenz: LorenzParams) -> Self {
        self.lorenz = lorenz;
        self
    }

    pub fn with_initial_state(mut self, initial_state: DVec3) -> Self {
        self.initial_state = initial_state;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity < MIN_CAPACITY {
            return Err(ConfigError::CapacityTooSmall {
                capacity: self.capacity,
            });
        }
        self.lorenz.validate()?;
        self.camera.validate()
    }
}

/// Everything the renderer consumes for one frame.
///
/// Borrows the trajectory, so it cannot outlive the next call to
/// [`Session::advance_frame`].
#[derive(Clone, Copy, Debug)]
pub struct FramePayload<'a> {
    /// Chronological trail, oldest first.
    pub points: &'a [Vec3],
    /// Unit tangents parallel to `points`.
    pub tangents: &'a [Vec3],
    pub view: Mat4,
    pub projection: Mat4,
    /// Monotonic frame index, a shading input only.
    pub frame: u64,
}

impl FramePayload<'_> {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Owned simulation + camera context, advanced one frame at a time by the host.
///
/// Holds no scheduling of its own: the host decides when `advance_frame` runs
/// and must route input deltas through the same owner (`&mut self`).
pub struct Session {
    params: LorenzParams,
    state: DVec3,
    store: TrajectoryStore,
    camera: OrbitCamera,
    frame: u64,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let store = TrajectoryStore::new(config.capacity)?;
        let camera = OrbitCamera::new(config.camera)?;
        log::info!(
            "[session] capacity={} sigma={} rho={} beta={:.4} dt={} seed=({}, {}, {})",
            config.capacity,
            config.lorenz.sigma,
            config.lorenz.rho,
            config.lorenz.beta,
            config.lorenz.dt,
            config.initial_state.x,
            config.initial_state.y,
            config.initial_state.z
        );
        Ok(Self {
            params: config.lorenz,
            state: config.initial_state,
            store,
            camera,
            frame: 0,
        })
    }

    /// Run one frame and hand back the payload for the renderer.
    ///
    /// Steps the integrator, appends the new point, refreshes the newest
    /// tangent, then samples the camera for `aspect`. The payload carries the
    /// frame index before it is incremented.
    pub fn advance_frame(&mut self, aspect: f32) -> FramePayload<'_> {
        self.state = self.params.step(self.state);
        self.store.append(self.state.as_vec3());
        self.store.update_newest_tangent();

        let view = self.camera.view_matrix();
        let projection = self.camera.projection_matrix(aspect);
        let frame = self.frame;
        self.frame += 1;
        log::trace!("[frame {}] points={}", frame, self.store.size());

        FramePayload {
            points: self.store.points_view(),
            tangents: self.store.tangents_view(),
            view,
            projection,
            frame,
        }
    }

    pub fn on_drag_delta(&mut self, dx: f32, dy: f32) {
        self.camera.on_drag_delta(dx, dy);
    }

    pub fn on_scroll_delta(&mut self, dy: f32) {
        self.camera.on_scroll_delta(dy);
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn state(&self) -> DVec3 {
        self.state
    }

    pub fn params(&self) -> &LorenzParams {
        &self.params
    }

    pub fn store(&self) -> &TrajectoryStore {
        &self.store
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }
}
