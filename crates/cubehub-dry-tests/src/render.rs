// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Render port fake that records every push.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use cubehub_core::{CubieId, FaceLabel, RenderPort, Sticker, Transform};
use serde::Serialize;

/// One call the engine made on its render port.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderEvent {
    /// `set_visual_transform`, with the column-major matrix.
    Transform {
        /// Target cubie.
        cubie: CubieId,
        /// Pose pushed.
        matrix: [f32; 16],
    },
    /// `set_sticker`.
    Sticker {
        /// Target cubie.
        cubie: CubieId,
        /// Local face.
        face: FaceLabel,
        /// New appearance.
        sticker: Sticker,
    },
}

/// [`RenderPort`] that keeps an event log and the latest sticker per face.
///
/// Clones share the log, so a test can keep one handle while the engine owns
/// the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderPort {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    events: Vec<RenderEvent>,
    stickers: HashMap<(CubieId, FaceLabel), Sticker>,
}

impl RecordingRenderPort {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Every event so far, in call order.
    pub fn events(&self) -> Vec<RenderEvent> {
        self.lock().events.clone()
    }

    /// Number of pose pushes so far.
    pub fn transform_count(&self) -> usize {
        self.lock()
            .events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Transform { .. }))
            .count()
    }

    /// Number of sticker pushes so far.
    pub fn sticker_count(&self) -> usize {
        self.lock()
            .events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Sticker { .. }))
            .count()
    }

    /// Latest pose pushed for `cubie`.
    pub fn last_transform(&self, cubie: CubieId) -> Option<[f32; 16]> {
        self.lock().events.iter().rev().find_map(|e| match e {
            RenderEvent::Transform { cubie: c, matrix } if *c == cubie => Some(*matrix),
            _ => None,
        })
    }

    /// Latest appearance pushed for one sticker.
    pub fn sticker(&self, cubie: CubieId, face: FaceLabel) -> Option<Sticker> {
        self.lock().stickers.get(&(cubie, face)).copied()
    }

    /// Glyphs currently shown on front stickers, keyed by cubie.
    pub fn front_glyphs(&self) -> HashMap<CubieId, char> {
        self.lock()
            .stickers
            .iter()
            .filter(|((_, face), _)| *face == FaceLabel::F)
            .filter_map(|((cubie, _), sticker)| sticker.glyph.map(|g| (*cubie, g)))
            .collect()
    }

    /// Forgets the event log; the latest sticker view is kept.
    pub fn clear_events(&self) {
        self.lock().events.clear();
    }
}

impl RenderPort for RecordingRenderPort {
    fn set_visual_transform(&mut self, cubie: CubieId, transform: &Transform) {
        self.lock().events.push(RenderEvent::Transform {
            cubie,
            matrix: transform.to_array(),
        });
    }

    fn set_sticker(&mut self, cubie: CubieId, face: FaceLabel, sticker: &Sticker) {
        let mut inner = self.lock();
        inner.stickers.insert((cubie, face), *sticker);
        inner.events.push(RenderEvent::Sticker {
            cubie,
            face,
            sticker: *sticker,
        });
    }
}
