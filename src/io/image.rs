//! PNG export of colored layouts on a transparent canvas

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::configuration::{PNG_MARGIN_RADII, PNG_PIXELS_PER_RADIUS};
use crate::io::error::{LayoutError, Result, invalid_parameter};
use crate::spatial::bounds::tile_bounds;
use crate::spatial::hex::{Hex, SQRT_3, axial_to_pixel};

const NAMED_COLORS: [(&str, [u8; 4]); 10] = [
    ("black", [0, 0, 0, 255]),
    ("white", [255, 255, 255, 255]),
    ("red", [255, 0, 0, 255]),
    ("green", [0, 128, 0, 255]),
    ("blue", [0, 0, 255, 255]),
    ("yellow", [255, 255, 0, 255]),
    ("orange", [255, 165, 0, 255]),
    ("purple", [128, 0, 128, 255]),
    ("gray", [128, 128, 128, 255]),
    ("grey", [128, 128, 128, 255]),
];

/// Parse a color identifier into RGBA
///
/// Accepts `#RRGGBB`, `#RRGGBBAA` and a handful of lowercase names.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidParameter`] for anything else.
pub fn parse_color(identifier: &str) -> Result<Rgba<u8>> {
    let trimmed = identifier.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex_digits(hex)
            .map(Rgba)
            .ok_or_else(|| invalid_parameter("colors", &identifier, &"malformed hex color"));
    }

    let lowered = trimmed.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|&(_, rgba)| Rgba(rgba))
        .ok_or_else(|| invalid_parameter("colors", &identifier, &"unknown color name"))
}

fn parse_hex_digits(digits: &str) -> Option<[u8; 4]> {
    if !digits.is_ascii() || !matches!(digits.len(), 6 | 8) {
        return None;
    }
    let channel = |start: usize| {
        digits
            .get(start..start + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };
    let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
    Some([channel(0)?, channel(2)?, channel(4)?, alpha])
}

/// Whether `(dx, dy)` lies inside a flat-top hexagon of circumradius `radius`
fn inside_hexagon(dx: f64, dy: f64, radius: f64) -> bool {
    let (dx, dy) = (dx.abs(), dy.abs());
    let apothem = SQRT_3 / 2.0 * radius;
    dy <= apothem && SQRT_3.mul_add(dx, dy) <= SQRT_3 * radius
}

/// Rasterize a layout into an RGBA image
///
/// Each hex is a filled flat-top hexagon centered on its pixel position; the
/// canvas covers the padded bounding box plus a margin and is otherwise
/// transparent. Image rows run top to bottom, so plot `y` is flipped.
///
/// # Errors
///
/// Returns an error if:
/// - The layout is empty
/// - The hex and color lists differ in length
/// - A color identifier cannot be parsed
pub fn render_layout(hexes: &[Hex], colors: &[String], radius: f64) -> Result<RgbaImage> {
    if hexes.len() != colors.len() {
        return Err(invalid_parameter(
            "colors",
            &colors.len(),
            &format!("must match the hex count ({})", hexes.len()),
        ));
    }
    let bounds = tile_bounds(hexes, radius)
        .ok_or_else(|| invalid_parameter("hexes", &0, &"cannot render an empty layout"))?;

    let scale = PNG_PIXELS_PER_RADIUS / radius;
    let margin = PNG_MARGIN_RADII * radius;
    let origin_x = bounds.min_x - margin;
    let top_y = bounds.max_y + margin;
    let width = ((bounds.width() + 2.0 * margin) * scale).ceil().max(1.0) as u32;
    let height = ((bounds.height() + 2.0 * margin) * scale).ceil().max(1.0) as u32;

    let mut img: RgbaImage = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for (&hex, identifier) in hexes.iter().zip(colors) {
        let fill = parse_color(identifier)?;
        let [cx, cy] = axial_to_pixel(hex, radius);

        let column_range = pixel_span(cx - radius - origin_x, cx + radius - origin_x, scale, width);
        let row_range = pixel_span(top_y - cy - radius, top_y - cy + radius, scale, height);

        for row in row_range {
            let y = top_y - (f64::from(row) + 0.5) / scale;
            for column in column_range.clone() {
                let x = origin_x + (f64::from(column) + 0.5) / scale;
                if inside_hexagon(x - cx, y - cy, radius) {
                    img.put_pixel(column, row, fill);
                }
            }
        }
    }

    Ok(img)
}

/// Pixel indices covering plot offsets `[low, high]`, clipped to `limit`
fn pixel_span(low: f64, high: f64, scale: f64, limit: u32) -> std::ops::Range<u32> {
    let start = (low * scale).floor().max(0.0) as u32;
    let end = ((high * scale).ceil().max(0.0) as u32).min(limit);
    start.min(end)..end
}

/// Render a layout and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The layout cannot be rendered (see [`render_layout`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_as_png(
    hexes: &[Hex],
    colors: &[String],
    radius: f64,
    output_path: &Path,
) -> Result<()> {
    let img = render_layout(hexes, colors, radius)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| LayoutError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| LayoutError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
