// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for CubeHub tools (config, stopwatch).
//! Keeps adapters thin and independent of the cube engine's internals.
#![forbid(unsafe_code)]

pub mod config;
pub mod stopwatch;
