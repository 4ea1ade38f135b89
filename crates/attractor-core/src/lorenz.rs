//! Fixed-step forward-Euler integration of the Lorenz system.

use crate::constants::{LORENZ_BETA, LORENZ_DT, LORENZ_RHO, LORENZ_SIGMA};
use crate::error::ConfigError;
use glam::DVec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LorenzParams {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
    pub dt: f64,
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self {
            sigma: LORENZ_SIGMA,
            rho: LORENZ_RHO,
            beta: LORENZ_BETA,
            dt: LORENZ_DT,
        }
    }
}

impl LorenzParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep { dt: self.dt });
        }
        Ok(())
    }

    /// Vector field of the system at `state`.
    #[inline]
    pub fn derivative(&self, state: DVec3) -> DVec3 {
        let DVec3 { x, y, z } = state;
        DVec3::new(
            self.sigma * (y - x),
            x * (self.rho - z) - y,
            x * y - self.beta * z,
        )
    }

    /// Advance `state` by one time step.
    ///
    /// Pure and deterministic. Diverging parameter choices produce infinities
    /// or NaN rather than an error.
    #[inline]
    pub fn step(&self, state: DVec3) -> DVec3 {
        state + self.derivative(state) * self.dt
    }
}
