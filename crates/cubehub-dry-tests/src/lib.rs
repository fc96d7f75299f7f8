// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for CubeHub crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`engine`] - Engine builder and move-script helpers
//! - [`render`] - Render port fake that records every push

pub mod config;
pub mod engine;
pub mod render;

// Re-export commonly used items at crate root for convenience
pub use config::InMemoryConfigStore;
pub use engine::{ms, play_moves, play_script, EngineTestBuilder};
pub use render::{RecordingRenderPort, RenderEvent};
