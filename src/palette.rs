use rand::RngExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("a palette needs exactly {PALETTE_SIZE} colors, got {0}")]
pub struct WrongSize(pub usize);

/// An ordered set of colors, in display order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

impl Palette {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    pub fn generate_with<R: RngExt>(rng: &mut R) -> Self {
        Self {
            colors: std::array::from_fn(|_| Color::random_with(rng)),
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = WrongSize;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        let len = colors.len();
        let colors = colors.try_into().map_err(|_| WrongSize(len))?;
        Ok(Self { colors })
    }
}

#[cfg(test)]
pub(crate) fn sample(codes: [&str; PALETTE_SIZE]) -> Palette {
    let colors = codes
        .iter()
        .map(|code| code.parse().unwrap())
        .collect::<Vec<Color>>();
    Palette::try_from(colors).unwrap()
}
