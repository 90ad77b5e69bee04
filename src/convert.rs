use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::buffer::ConvertBuffer;
use image::{DynamicImage, ImageError, RgbImage, RgbaImage};
use log::{debug, info};

use crate::color::Color;
use crate::composite::compose_padded;
use crate::config::Config;
use crate::format::Format;
use crate::{ConvertError, ConvertResult};

/// JPEG quality used for every lossy output.
pub const JPEG_QUALITY: u8 = 50;

/// How the canvas is filled before the source is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPolicy {
    /// Use the configured background color.
    Background,
    /// Fully transparent, ignoring the configured background.
    Transparent,
}

impl FillPolicy {
    /// The fill color this policy produces for `config`.
    pub fn color(self, config: &Config) -> Color {
        match self {
            FillPolicy::Background => config.background,
            FillPolicy::Transparent => Color::TRANSPARENT,
        }
    }
}

/// A supported conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub source: Format,
    pub target: Format,
    pub fill: FillPolicy,
}

/// Every supported direction with its fill policy.
///
/// JPEG has no alpha channel, so PNG sources are flattened onto the background.
/// JPEG sources converted to PNG keep a transparent border.
pub const ROUTES: &[Route] = &[
    Route {
        source: Format::Png,
        target: Format::Jpeg,
        fill: FillPolicy::Background,
    },
    Route {
        source: Format::Jpeg,
        target: Format::Png,
        fill: FillPolicy::Transparent,
    },
];

/// Look up the route for a format pair.
pub fn route(source: Format, target: Format) -> Option<&'static Route> {
    ROUTES
        .iter()
        .find(|route| route.source == source && route.target == target)
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionReport {
    pub source_format: Format,
    pub target_format: Format,
    pub source_dimensions: (u32, u32),
    pub output_dimensions: (u32, u32),
}

/// Convert `input` to `output`, adding the configured padding.
///
/// Formats are taken from the file extensions. The output file must not exist
/// yet; it is created exclusively and never overwritten.
pub fn convert_image(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &Config,
) -> ConvertResult<ConversionReport> {
    let input = input.as_ref();
    let output = output.as_ref();

    let source_format = Format::from_path(input);
    let target_format = Format::from_path(output);
    let route = route(source_format, target_format).ok_or(ConvertError::UnsupportedConversion {
        from: source_format,
        to: target_format,
    })?;
    info!(
        "converting {source_format} to {target_format} with {:?} fill",
        route.fill
    );

    let source = decode(input, source_format)?;
    let source_dimensions = (source.width(), source.height());
    debug!(
        "decoded {} ({}x{})",
        input.display(),
        source_dimensions.0,
        source_dimensions.1
    );

    let canvas = compose_padded(&source, &config.padding, route.fill.color(config))?;
    let output_dimensions = canvas.dimensions();
    debug!(
        "composited canvas {}x{} with padding {:?}",
        output_dimensions.0, output_dimensions.1, config.padding
    );

    encode(&canvas, output, target_format)?;
    debug!("wrote {}", output.display());

    Ok(ConversionReport {
        source_format,
        target_format,
        source_dimensions,
        output_dimensions,
    })
}

/// Decode `path` strictly as `format`, regardless of its content signature.
pub fn decode(path: &Path, format: Format) -> ConvertResult<DynamicImage> {
    let decode_error = |source: ImageError| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let image_format = format
        .image_format()
        .ok_or_else(|| decode_error(unsupported_format()))?;

    let file = File::open(path).map_err(|err| ConvertError::io(path, err))?;
    image::load(BufReader::new(file), image_format).map_err(decode_error)
}

/// Encode `canvas` as `format` into a newly created file at `path`.
///
/// Fails with [`ConvertError::Io`] of kind `AlreadyExists` if `path` exists.
pub fn encode(canvas: &RgbaImage, path: &Path, format: Format) -> ConvertResult<()> {
    let encode_error = |source: ImageError| ConvertError::Encode {
        path: path.to_path_buf(),
        source,
    };
    if format == Format::Unknown {
        return Err(encode_error(unsupported_format()));
    }

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| ConvertError::io(path, err))?;
    let mut writer = BufWriter::new(file);

    let encoded = match format {
        Format::Jpeg => {
            // Baseline JPEG carries no alpha; the background fill leaves the canvas opaque.
            let rgb: RgbImage = canvas.convert();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY))
        }
        _ => canvas.write_with_encoder(PngEncoder::new(&mut writer)),
    };
    encoded.map_err(encode_error)?;

    writer.flush().map_err(|err| ConvertError::io(path, err))
}

fn unsupported_format() -> ImageError {
    ImageError::Unsupported(UnsupportedError::from_format_and_kind(
        ImageFormatHint::Unknown,
        UnsupportedErrorKind::Format(ImageFormatHint::Unknown),
    ))
}
