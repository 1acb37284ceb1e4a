//! Image to hanzi text art: each output cell is a Chinese character whose
//! stroke count matches the pixel's quantized intensity.

pub mod dict;
pub mod glyph;
pub mod quantize;
pub mod render;

pub use dict::StrokeTable;
pub use glyph::{GlyphGrid, GlyphSelector};
pub use quantize::QuantizedImage;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HanziartError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no character with {0} strokes in the stroke table (try fewer levels or a looser grade filter)")]
    StrokesUnavailable(u32),
}

pub type Result<T> = std::result::Result<T, HanziartError>;

/// Main converter: quantizes an image and picks one hanzi per cell.
pub struct Converter {
    selector: GlyphSelector,
    width: u32,
    levels: u32,
    color: bool,
    negative: bool,
}

impl Converter {
    pub fn new(table: StrokeTable) -> Self {
        Self {
            selector: GlyphSelector::new(table),
            width: 80,
            levels: 20,
            color: true,
            negative: false,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    /// Fix the selector's random source for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.selector.reseed(seed);
        self
    }

    /// Quantize the image and pick one character per cell.
    ///
    /// Fails if any quantized value lands on a stroke count with no
    /// dictionary entry; see [`GlyphSelector::pick`].
    pub fn convert(&mut self, image: &image::DynamicImage) -> Result<GlyphGrid> {
        let quantized =
            quantize::quantize(image, self.width, self.levels, self.color, self.negative);
        self.selector.select_grid(&quantized)
    }
}
