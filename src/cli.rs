use std::path::PathBuf;

use clap::Parser;
use padframe::{Color, Config, Padding, parse_color, parse_padding};

/// Command line interface definition.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input image path (.png, .jpg or .jpeg)
    pub input: PathBuf,
    /// Output image path; must not exist yet
    pub output: PathBuf,
    /// Background color for JPEG output (black, white, red, green, blue or hex like #ff8000)
    #[arg(long = "bg", value_name = "COLOR", default_value = "white", value_parser = parse_color)]
    pub bg: Color,
    /// Padding in pixels: `all`, `vertical,horizontal` or `top,right,bottom,left`
    #[arg(long, value_name = "SPEC", allow_hyphen_values = true, value_parser = parse_padding)]
    pub padding: Option<Padding>,
    /// Log each conversion stage
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config::new(cli.bg, cli.padding.unwrap_or_default())
    }
}
