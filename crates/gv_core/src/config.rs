//! # Kernel Configuration
//!
//! Observation settings in one serializable value, with presets.
//!
//! ```rust
//! use gv_core::config::KernelConfig;
//!
//! let config = KernelConfig::default();
//! let noisy = KernelConfig::noisy();
//! assert!(noisy.validate().is_ok());
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::observation::ObservationWindow;
use crate::visibility::{VisibilityFunction, VisibilityKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Visibility algorithm used for observations
    #[serde(default)]
    pub visibility: VisibilityKind,
    /// Egocentric view size
    #[serde(default)]
    pub window: ObservationWindow,
    /// Seed of the random source handed to stochastic algorithms
    #[serde(default)]
    pub seed: u64,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self::minigrid()
    }
}

impl KernelConfig {
    /// 7x7 window, row-scan visibility (default)
    pub fn minigrid() -> Self {
        Self { visibility: VisibilityKind::Minigrid, window: ObservationWindow::default(), seed: 0 }
    }

    /// Everything in the window is visible
    pub fn fully_observable() -> Self {
        Self { visibility: VisibilityKind::Full, ..Self::minigrid() }
    }

    /// Wider window, ray-traced occlusion
    pub fn raytracing() -> Self {
        Self {
            visibility: VisibilityKind::Raytracing,
            window: ObservationWindow { height: 9, width: 9 },
            ..Self::minigrid()
        }
    }

    /// Ray-traced occlusion with random split rays
    pub fn noisy() -> Self {
        Self { visibility: VisibilityKind::StochasticRaytracing, ..Self::raytracing() }
    }

    pub fn validate(&self) -> GridResult<()> {
        self.window.validate()
    }

    /// Parses and validates a JSON document; absent fields take their
    /// defaults.
    pub fn from_json(json: &str) -> GridResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GridError::InvalidArgument(format!("invalid kernel config: {}", e)))?;
        config.validate()?;
        log::debug!("loaded kernel config: {:?}", config);
        Ok(config)
    }

    pub fn to_json(&self) -> GridResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GridError::InvalidArgument(format!("cannot serialize kernel config: {}", e)))
    }

    pub fn visibility_function(&self) -> Box<dyn VisibilityFunction> {
        self.visibility.build()
    }

    /// Fresh random source at the configured seed.
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }
}
