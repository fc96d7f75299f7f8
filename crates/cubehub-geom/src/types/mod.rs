// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
/// Principal axes and signed quarter turns.
pub mod axis;
/// Affine transform wrapper.
pub mod transform;
