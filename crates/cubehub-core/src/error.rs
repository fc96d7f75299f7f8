// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Errors emitted by the cube engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    /// Startup configuration or textual input was rejected.
    ///
    /// Covers non-positive spacing, bad timer durations, and malformed face
    /// labels or move notation. Fatal at startup.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A rotation was requested while another one is still animating.
    ///
    /// The engine drops such requests; callers of the public input methods
    /// never see this variant.
    #[error("a rotation is already in progress")]
    AnimationInProgress,
}
