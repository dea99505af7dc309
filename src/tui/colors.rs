use std::collections::HashMap;
use std::sync::OnceLock;

use palette::rgb::Rgb as PaletteRgb;
use palette::stimulus::FromStimulus;
use palette::{FromColor, Lch, Srgb};

use grid48::engine::grid::Tile;

/// Largest exponent with its own entry in the tile palette, 2^17 = 131072.
const MAX_TILE_EXPONENT: u32 = 17;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Rgb {
    color: PaletteRgb,
}

impl Rgb {
    pub(crate) fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: PaletteRgb::new(
                f32::from_stimulus(r),
                f32::from_stimulus(g),
                f32::from_stimulus(b),
            ),
        }
    }

    #[inline(always)]
    pub(crate) fn r(&self) -> u8 {
        u8::from_stimulus(self.color.red)
    }

    #[inline(always)]
    pub(crate) fn g(&self) -> u8 {
        u8::from_stimulus(self.color.green)
    }

    #[inline(always)]
    pub(crate) fn b(&self) -> u8 {
        u8::from_stimulus(self.color.blue)
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(f: Rgb) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: f.r(),
            g: f.g(),
            b: f.b(),
        }
    }
}

/// Background and foreground of a tile.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TileColors {
    pub(crate) background: Rgb,
    pub(crate) foreground: Rgb,
}

static TILE_COLORS: OnceLock<HashMap<Tile, TileColors>> = OnceLock::new();

fn tile_palette() -> &'static HashMap<Tile, TileColors> {
    TILE_COLORS.get_or_init(|| {
        let fg_hue: f32 = 28.0 + 180.0;
        (1..=MAX_TILE_EXPONENT)
            .map(|i| {
                let bg_lch: Lch = Lch::new(80.0, 90.0, i as f32 * 360.0 / MAX_TILE_EXPONENT as f32);
                let fg_lch: Lch = Lch::new(20.0, 50.0, fg_hue);
                let bg = Srgb::<f32>::from_color(bg_lch).into_format::<u8>();
                let fg = Srgb::<f32>::from_color(fg_lch).into_format::<u8>();
                (
                    2u32.pow(i),
                    TileColors {
                        background: Rgb::new(bg.red, bg.green, bg.blue),
                        foreground: Rgb::new(fg.red, fg.green, fg.blue),
                    },
                )
            })
            .collect()
    })
}

/// Colors for a tile value; empty cells share the board color and values past the palette fall
/// back to white.
pub(crate) fn tile_colors(value: Tile) -> TileColors {
    if value == 0 {
        return TileColors {
            background: board_background(),
            foreground: board_background(),
        };
    }
    tile_palette()
        .get(&value)
        .cloned()
        .unwrap_or_else(|| TileColors {
            background: Rgb::new(255, 255, 255),
            foreground: Rgb::new(90, 0, 0),
        })
}

pub(crate) fn board_background() -> Rgb {
    Rgb::new(60, 50, 45)
}

pub(crate) fn board_foreground() -> Rgb {
    Rgb::new(150, 190, 230)
}
