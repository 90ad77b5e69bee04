pub mod color;
pub mod composite;
pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod padding;

pub use color::{Color, HexTokens, parse_color};
pub use composite::{canvas_size, compose_padded};
pub use config::Config;
pub use convert::{
    ConversionReport, FillPolicy, JPEG_QUALITY, ROUTES, Route, convert_image, decode, encode, route,
};
pub use error::{ConvertError, ConvertResult};
pub use format::Format;
pub use padding::{Padding, parse_padding};
