// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Decorative "CUBEHUB" reveal on the front layer.

use tracing::info;

use crate::face::FaceLabel;
use crate::registry::CubieRegistry;
use crate::render_port::RenderPort;

/// Glyph for each front-layer `(x, y)` position, read left-to-right,
/// top-to-bottom. `(0, -1)` and `(1, -1)` stay blank.
pub const LOGO_GLYPHS: [((i8, i8), char); 7] = [
    ((-1, 1), 'C'),
    ((0, 1), 'U'),
    ((1, 1), 'B'),
    ((-1, 0), 'E'),
    ((0, 0), 'H'),
    ((1, 0), 'U'),
    ((-1, -1), 'B'),
];

/// Glyph the logo puts at front-layer position `(x, y)`, if any.
pub fn glyph_at(x: i8, y: i8) -> Option<char> {
    LOGO_GLYPHS
        .iter()
        .find(|((gx, gy), _)| *gx == x && *gy == y)
        .map(|(_, glyph)| *glyph)
}

/// Tracks whether the logo is currently written onto the cube.
#[derive(Debug, Clone, Default)]
pub struct LogoOverlay {
    shown: bool,
}

impl LogoOverlay {
    /// Hidden overlay.
    pub const fn new() -> Self {
        Self { shown: false }
    }

    /// True between [`Self::show`] and the next [`Self::clear`].
    pub const fn is_shown(&self) -> bool {
        self.shown
    }

    /// Writes the glyphs onto the front stickers of the `z = +1` layer and
    /// marks them blinking. Returns how many stickers received a glyph.
    pub fn show<R: RenderPort + ?Sized>(
        &mut self,
        registry: &mut CubieRegistry,
        render: &mut R,
    ) -> usize {
        let front: Vec<_> = registry
            .cubies()
            .iter()
            .filter(|c| c.coord().z == 1)
            .filter_map(|c| glyph_at(c.coord().x, c.coord().y).map(|g| (c.id(), g)))
            .collect();

        for (id, glyph) in &front {
            let sticker = registry.cubie_mut(*id).sticker_mut(FaceLabel::F);
            sticker.glyph = Some(*glyph);
            sticker.blink = true;
            render.set_sticker(*id, FaceLabel::F, sticker);
        }
        self.shown = true;
        info!(glyphs = front.len(), "logo revealed");
        front.len()
    }

    /// Removes glyphs and blink marks from every cubie's front sticker.
    pub fn clear<R: RenderPort + ?Sized>(&mut self, registry: &mut CubieRegistry, render: &mut R) {
        let ids: Vec<_> = registry.cubies().iter().map(|c| c.id()).collect();
        for id in ids {
            let sticker = registry.cubie_mut(id).sticker_mut(FaceLabel::F);
            sticker.glyph = None;
            sticker.blink = false;
            render.set_sticker(id, FaceLabel::F, sticker);
        }
        self.shown = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_port::NullRenderPort;
    use cubehub_geom::GridCoord;

    #[test]
    fn glyph_table_spells_cubehub() {
        let text: String = LOGO_GLYPHS.iter().map(|(_, g)| *g).collect();
        assert_eq!(text, "CUBEHUB");
        assert_eq!(glyph_at(0, -1), None);
        assert_eq!(glyph_at(1, -1), None);
    }

    #[test]
    fn show_then_clear() {
        let mut registry = CubieRegistry::initialize(70.0).unwrap();
        let mut logo = LogoOverlay::new();
        assert_eq!(logo.show(&mut registry, &mut NullRenderPort), 7);
        assert!(logo.is_shown());
        let centre = registry.at(GridCoord::new(0, 0, 1)).unwrap();
        assert_eq!(centre.sticker(FaceLabel::F).glyph, Some('H'));
        assert!(centre.sticker(FaceLabel::F).blink);

        logo.clear(&mut registry, &mut NullRenderPort);
        assert!(!logo.is_shown());
        assert!(registry
            .cubies()
            .iter()
            .all(|c| c.sticker(FaceLabel::F).glyph.is_none() && !c.sticker(FaceLabel::F).blink));
    }
}
