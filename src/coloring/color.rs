// Copyright 2025 Cowboy AI, LLC.

//! Vertex colors and the cyclic palette used by click-to-cycle.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::errors::{DemoError, DemoResult};

/// A vertex color. Renders as a CSS color keyword.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// `red`
    Red,
    /// `blue`
    Blue,
    /// `green`
    Green,
    /// `yellow`
    Yellow,
    /// `purple`
    Purple,
}

impl Color {
    /// Every color, in default palette order.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
    ];

    /// CSS keyword for this color.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DemoError::InvalidConfig(format!("unknown color: {s}")))
    }
}

/// Fixed finite cyclic ordering of colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Default for Palette {
    fn default() -> Self {
        Self(Color::ALL.to_vec())
    }
}

impl Palette {
    /// Build a palette; must be non-empty without repeats.
    pub fn new(colors: Vec<Color>) -> DemoResult<Self> {
        let palette = Self(colors);
        palette.validate()?;
        Ok(palette)
    }

    /// Check the palette is non-empty and has no repeated color.
    pub fn validate(&self) -> DemoResult<()> {
        if self.is_empty() {
            return Err(DemoError::InvalidConfig("palette is empty".to_string()));
        }
        for (i, color) in self.0.iter().enumerate() {
            if self.0[..i].contains(color) {
                return Err(DemoError::InvalidConfig(format!(
                    "palette repeats {color}"
                )));
            }
        }
        Ok(())
    }

    /// Colors in cycle order.
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Number of colors in the cycle.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color following `current`, wrapping from last to first.
    ///
    /// A color outside the palette advances to the first entry.
    pub fn next(&self, current: Color) -> Option<Color> {
        let next_idx = match self.0.iter().position(|c| *c == current) {
            Some(idx) => (idx + 1) % self.0.len(),
            None => 0,
        };
        self.0.get(next_idx).copied()
    }
}
