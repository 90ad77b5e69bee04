use std::io::ErrorKind;

use padframe::{ConvertError, ROUTES};

pub fn report_error(err: &ConvertError) {
    eprintln!("{err}");
    match err {
        ConvertError::Io { path, source } if source.kind() == ErrorKind::AlreadyExists => {
            eprintln!();
            eprintln!(
                "Refusing to overwrite {}; remove it or choose another output path.",
                path.display()
            );
        }
        ConvertError::UnsupportedConversion { .. } => {
            eprintln!();
            eprintln!("Supported conversions:");
            for route in ROUTES {
                eprintln!("  - {} -> {}", route.source, route.target);
            }
        }
        _ => {}
    }
}
