//! Intensity quantization - stretch, resize and rebin an image into integer levels.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb32FImage};

// Luminance weights used for the grayscale collapse (ITU-R BT.709).
const LUMA_WEIGHTS: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Stroke counts in the Unihan data top out in the low forties, so more
/// levels than this cannot be mapped to characters.
pub const MAX_LEVELS: u32 = 42;

/// A row-major grid of integer intensity levels in `[0, levels]`.
pub struct QuantizedImage {
    width: u32,
    height: u32,
    levels: u32,
    values: Vec<u32>,
}

impl QuantizedImage {
    pub fn new(width: u32, height: u32, levels: u32, values: Vec<u32>) -> Self {
        assert_eq!(values.len(), (width * height) as usize);
        Self { width, height, levels, values }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Effective level count after clamping.
    pub fn levels(&self) -> u32 {
        self.levels
    }

    pub fn values(&self) -> &[u32] {
        self.values.as_slice()
    }
}

/// Quantize `image` into integer intensity levels at the requested column
/// width.
///
/// The pipeline is: optional inversion (`negative`), a stretch of the global
/// min/max to the full dynamic range, a proportional resize to `width`
/// columns, a second stretch-and-rebin into `[0, levels]`, and a
/// luminance-weighted grayscale collapse (truncated to an integer) when
/// `color` is set (otherwise the first channel is used as-is). Level counts
/// above [`MAX_LEVELS`] are clamped with a warning.
pub fn quantize(
    image: &DynamicImage,
    width: u32,
    levels: u32,
    color: bool,
    negative: bool,
) -> QuantizedImage {
    let levels = if levels > MAX_LEVELS {
        eprintln!("... WARNING: --levels value above {MAX_LEVELS}, using levels={MAX_LEVELS} instead");
        MAX_LEVELS
    } else {
        levels
    };

    let mut pixels: Rgb32FImage = image.to_rgb32f();
    if negative {
        for pixel in pixels.pixels_mut() {
            for channel in &mut pixel.0 {
                *channel = 1.0 - *channel;
            }
        }
    }
    stretch(&mut pixels);

    let factor = width as f32 / pixels.width() as f32;
    let height = ((pixels.height() as f32 * factor).round() as u32).max(1);
    let mut resized = imageops::resize(&pixels, width, height, FilterType::CatmullRom);
    // Interpolation narrows the value range, so stretch again before binning.
    stretch(&mut resized);

    let rebin = |channel: f32| (channel * levels as f32).round();
    let values = resized
        .pixels()
        .map(|pixel| {
            let value = if color {
                let [r, g, b] = pixel.0;
                let [wr, wg, wb] = LUMA_WEIGHTS;
                // Truncate like the original tool rather than rounding.
                (wr * rebin(r) + wg * rebin(g) + wb * rebin(b)).floor()
            } else {
                rebin(pixel.0[0])
            };
            (value as u32).min(levels)
        })
        .collect();

    QuantizedImage::new(width, height, levels, values)
}

// Map the global channel min/max onto [0, 1]. A constant image maps to all
// zeroes rather than dividing by zero.
fn stretch(pixels: &mut Rgb32FImage) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for pixel in pixels.pixels() {
        for &channel in &pixel.0 {
            min = min.min(channel);
            max = max.max(channel);
        }
    }
    let range = max - min;
    for pixel in pixels.pixels_mut() {
        for channel in &mut pixel.0 {
            *channel = if range > 0.0 { (*channel - min) / range } else { 0.0 };
        }
    }
}
