use image::{DynamicImage, RgbaImage, imageops};

use crate::color::Color;
use crate::padding::Padding;
use crate::{ConvertError, ConvertResult};

/// Compute the canvas dimensions for `source` surrounded by `padding`.
///
/// Fails with [`ConvertError::InvalidCanvas`] when either side is not positive
/// or does not fit in `u32`. Sizes that fit are not checked against available
/// memory: a huge padding allocates the whole canvas and may abort.
pub fn canvas_size(source: (u32, u32), padding: &Padding) -> ConvertResult<(u32, u32)> {
    let width = i128::from(source.0) + padding.horizontal();
    let height = i128::from(source.1) + padding.vertical();

    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(ConvertError::InvalidCanvas { width, height }),
    }
}

/// Place `source` on a new canvas enlarged by `padding` and filled with
/// `background`.
///
/// The fill replaces pixels outright; the source is then blended on top at
/// `(padding.left, padding.top)` and clipped to the canvas. Sources without an
/// alpha channel are opaque.
pub fn compose_padded(
    source: &DynamicImage,
    padding: &Padding,
    background: Color,
) -> ConvertResult<RgbaImage> {
    let (w, h) = canvas_size((source.width(), source.height()), padding)?;

    let mut canvas = RgbaImage::from_pixel(w, h, background.to_rgba());
    imageops::overlay(&mut canvas, &source.to_rgba8(), padding.left, padding.top);

    Ok(canvas)
}
