// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic category colors.
//!
//! Two strategies are offered:
//! - [`Palette::assign`] cycles a fixed palette over a caller-ordered key list, so the same list
//!   always yields the same mapping;
//! - [`hash_color`] derives a hue from the key bytes alone, so a key keeps its color whatever
//!   else is on screen.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;
use peniko::color::palette::css;
use peniko::color::{AlphaColor, Hsl, Srgb};

/// Color for the empty category key.
pub const NEUTRAL: Color = css::BLACK;

/// Saturation used by [`hash_color`], in percent.
const HASH_SATURATION: f32 = 65.0;
/// Lightness used by [`hash_color`], in percent.
const HASH_LIGHTNESS: f32 = 50.0;

/// The ten-color categorical palette used by default.
const CATEGORY10: [Color; 10] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

/// An ordered list of colors cycled over category keys.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: CATEGORY10.to_vec(),
        }
    }
}

impl Palette {
    /// Creates a palette from `colors`.
    ///
    /// An empty list behaves like a single [`NEUTRAL`] entry.
    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        Self {
            colors: colors.into(),
        }
    }

    /// Returns the colors.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the `i`-th color, wrapping around.
    pub fn color(&self, i: usize) -> Color {
        if self.colors.is_empty() {
            return NEUTRAL;
        }
        self.colors[i % self.colors.len()]
    }

    /// Maps the `i`-th key to `color(i)`.
    ///
    /// If a key repeats, its first position wins.
    pub fn assign<K: AsRef<str>>(&self, keys: impl IntoIterator<Item = K>) -> CategoryColors {
        let mut out = CategoryColors::default();
        for (i, key) in keys.into_iter().enumerate() {
            out.colors
                .entry(String::from(key.as_ref()))
                .or_insert_with(|| self.color(i));
        }
        out
    }
}

/// A key-to-color map produced by one of the assignment strategies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryColors {
    colors: HashMap<String, Color>,
}

impl CategoryColors {
    /// Colors every key with [`hash_color`].
    pub fn hashed<K: AsRef<str>>(keys: impl IntoIterator<Item = K>) -> Self {
        let colors = keys
            .into_iter()
            .map(|k| (String::from(k.as_ref()), hash_color(k.as_ref())))
            .collect();
        Self { colors }
    }

    /// The color assigned to `key`.
    pub fn get(&self, key: &str) -> Option<Color> {
        self.colors.get(key).copied()
    }

    /// The color assigned to `key`, or [`NEUTRAL`] for the empty key and unknown keys.
    pub fn color_or_neutral(&self, key: &str) -> Color {
        if key.is_empty() {
            return NEUTRAL;
        }
        self.get(key).unwrap_or(NEUTRAL)
    }

    /// Number of colored keys.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if no key has a color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// 32-bit FNV-1a hash of `bytes`.
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;
    bytes.iter().fold(OFFSET_BASIS, |h, b| {
        (h ^ u32::from(*b)).wrapping_mul(PRIME)
    })
}

/// Derives a color from `key` alone.
///
/// The hue in degrees is the FNV-1a hash of the UTF-8 bytes modulo 360. Saturation and
/// lightness are fixed.
pub fn hash_color(key: &str) -> Color {
    let hue = (fnv1a_32(key.as_bytes()) % 360) as f32;
    AlphaColor::<Hsl>::new([hue, HASH_SATURATION, HASH_LIGHTNESS, 1.0]).convert::<Srgb>()
}
