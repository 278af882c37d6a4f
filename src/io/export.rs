//! CSV export of hex coordinates and colors

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::io::configuration::CSV_COORDINATE_PRECISION;
use crate::io::error::{LayoutError, Result};
use crate::spatial::hex::{Hex, axial_to_pixel};

/// Quote a CSV field when it holds a separator, quote or line break
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Write `q,r,x,y,color` rows for a layout to `writer`
///
/// Colors containing commas, quotes or line breaks are quoted with inner
/// quotes doubled.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_layout_csv<W: Write>(
    writer: &mut W,
    hexes: &[Hex],
    colors: &[String],
    radius: f64,
) -> std::io::Result<()> {
    writeln!(writer, "q,r,x,y,color")?;
    for (&hex, color) in hexes.iter().zip(colors) {
        let [x, y] = axial_to_pixel(hex, radius);
        writeln!(
            writer,
            "{},{},{x:.prec$},{y:.prec$},{}",
            hex.q,
            hex.r,
            csv_field(color),
            prec = CSV_COORDINATE_PRECISION
        )?;
    }
    writer.flush()
}

/// Save a layout as a CSV file, creating parent directories as needed
///
/// # Errors
///
/// Returns [`LayoutError::FileSystem`] if the directory or file cannot be
/// created or written.
pub fn export_layout_as_csv(
    hexes: &[Hex],
    colors: &[String],
    radius: f64,
    output_path: &Path,
) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| LayoutError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = File::create(output_path).map_err(|e| LayoutError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    write_layout_csv(&mut writer, hexes, colors, radius).map_err(|e| LayoutError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write csv",
        source: e,
    })
}
