//! Placeholder fruit avatars for participants without an uploaded image.
//!
//! Draws come from an [`AvatarPool`] without replacement, so no fruit repeats
//! within a render pass until the whole palette has been used once.

use rand::Rng;
use serde::Serialize;

use crate::error::CoreError;

/// A glyph and the background color it is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FruitAvatar {
    pub glyph: &'static str,
    pub color: &'static str,
}

const fn fruit(glyph: &'static str, color: &'static str) -> FruitAvatar {
    FruitAvatar { glyph, color }
}

/// The fixed fruit palette.
pub const FRUIT_PALETTE: &[FruitAvatar] = &[
    fruit("🍎", "#FF6B6B"),
    fruit("🍋", "#FFE66D"),
    fruit("🥝", "#88D498"),
    fruit("🍇", "#9B5DE5"),
    fruit("🍊", "#FF9F43"),
    fruit("🍓", "#EE5A5A"),
    fruit("🍑", "#FFBE76"),
    fruit("🍌", "#F9E04B"),
    fruit("🫐", "#5F7ADB"),
    fruit("🍉", "#FF7979"),
    fruit("🍒", "#E74C3C"),
    fruit("🍐", "#A8D5BA"),
    fruit("🥭", "#F7B731"),
    fruit("🍍", "#F5CD2F"),
    fruit("🥥", "#C4A484"),
    fruit("🍈", "#B8E994"),
    fruit("🫒", "#6B8E23"),
    fruit("🥑", "#7CB342"),
    fruit("🍏", "#8BC34A"),
];

/// Working set of not-yet-drawn avatars for one render pass.
#[derive(Debug, Clone)]
pub struct AvatarPool {
    palette: Vec<FruitAvatar>,
    available: Vec<FruitAvatar>,
}

impl AvatarPool {
    /// Build a pool over a custom palette.
    pub fn new(palette: Vec<FruitAvatar>) -> Result<Self, CoreError> {
        if palette.is_empty() {
            return Err(CoreError::Validation(
                "Avatar palette must contain at least one entry".to_string(),
            ));
        }
        let available = palette.clone();
        Ok(Self { palette, available })
    }

    /// Pool over the built-in [`FRUIT_PALETTE`].
    pub fn fruits() -> Self {
        Self {
            palette: FRUIT_PALETTE.to_vec(),
            available: FRUIT_PALETTE.to_vec(),
        }
    }

    /// Refill the working set from the palette. Call at the start of every render pass.
    pub fn reset(&mut self) {
        self.available.clear();
        self.available.extend_from_slice(&self.palette);
    }

    /// Draw one avatar uniformly from the working set and remove it.
    ///
    /// An exhausted pool refills before drawing.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> FruitAvatar {
        if self.available.is_empty() {
            self.reset();
        }
        let index = rng.random_range(0..self.available.len());
        self.available.swap_remove(index)
    }

    /// Number of avatars left before the next refill.
    pub fn remaining(&self) -> usize {
        self.available.len()
    }

    pub fn palette_len(&self) -> usize {
        self.palette.len()
    }
}

impl Default for AvatarPool {
    fn default() -> Self {
        Self::fruits()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
