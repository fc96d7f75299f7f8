// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Engine tuning knobs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CubeError;

/// Default distance between neighbouring cubie centres, in render units.
pub const DEFAULT_SPACING: f32 = 70.0;
/// Default fixed animation duration of one layer rotation.
pub const DEFAULT_ANIMATION_MS: u64 = 350;
/// Default quiet interval before the idle trigger starts the auto-solve.
pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = 5_000;

/// Configuration for a [`crate::CubeEngine`].
///
/// Missing fields deserialize to their defaults, so a partial JSON document
/// such as `{"idle_timeout_ms": 8000}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Distance between neighbouring cubie centres.
    pub spacing: f32,
    /// How long the animation gate stays held after each rotation.
    pub animation_ms: u64,
    /// Quiet interval after the last interaction before auto-solve begins.
    pub idle_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            animation_ms: DEFAULT_ANIMATION_MS,
            idle_timeout_ms: DEFAULT_IDLE_TIMEOUT_MS,
        }
    }
}

impl EngineConfig {
    /// Animation duration as a [`Duration`].
    pub const fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    /// Idle quiet interval as a [`Duration`].
    pub const fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }

    /// Checks the configuration before any cubie is built.
    ///
    /// The idle interval must outlast one animation: every reset happens at
    /// or after the start of the newest user rotation, so the idle deadline
    /// can then never fall inside a user animation.
    pub fn validate(&self) -> Result<(), CubeError> {
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(CubeError::InvalidConfiguration(format!(
                "spacing must be a positive finite number, got {}",
                self.spacing
            )));
        }
        if self.animation_ms == 0 {
            return Err(CubeError::InvalidConfiguration(
                "animation_ms must be greater than zero".into(),
            ));
        }
        if self.idle_timeout_ms <= self.animation_ms {
            return Err(CubeError::InvalidConfiguration(format!(
                "idle_timeout_ms ({}) must exceed animation_ms ({})",
                self.idle_timeout_ms, self.animation_ms
            )));
        }
        Ok(())
    }
}
