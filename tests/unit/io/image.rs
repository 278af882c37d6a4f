//! Tests for color parsing and PNG rendering

#[cfg(test)]
mod tests {
    use hexcluster::io::image::{export_layout_as_png, parse_color, render_layout};
    use hexcluster::spatial::hex::Hex;
    use image::{GenericImageView, Rgba};

    fn colors(names: &[&str]) -> Vec<String> {
        names.iter().map(|&name| name.to_owned()).collect()
    }

    // Tests hex and named color parsing
    // Verified by ignoring the alpha channel
    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#ff8000").ok(), Some(Rgba([255, 128, 0, 255])));
        assert_eq!(parse_color("#00000080").ok(), Some(Rgba([0, 0, 0, 128])));
        assert_eq!(parse_color(" Red ").ok(), Some(Rgba([255, 0, 0, 255])));
        assert_eq!(parse_color("grey").ok(), parse_color("gray").ok());
    }

    // Tests malformed colors are rejected
    // Verified by treating unknown names as black
    #[test]
    fn test_parse_color_rejects() {
        assert!(parse_color("#fff").is_err());
        assert!(parse_color("#gg0000").is_err());
        assert!(parse_color("chartreuse-ish").is_err());
        assert!(parse_color("").is_err());
    }

    // Tests a single tile fills its center and leaves corners transparent
    // Verified by filling the whole canvas
    #[test]
    fn test_render_single_tile() {
        let img = match render_layout(&[Hex::ORIGIN], &colors(&["blue"]), 1.0) {
            Ok(img) => img,
            Err(error) => panic!("render failed: {error}"),
        };
        let (width, height) = img.dimensions();
        assert!(width > 0 && height > 0);

        assert_eq!(*img.get_pixel(width / 2, height / 2), Rgba([0, 0, 255, 255]));
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(width - 1, height - 1)[3], 0);
    }

    // Tests plot y is flipped so higher hexes appear nearer the top
    // Verified by drawing rows in plot order
    #[test]
    fn test_render_flips_y() {
        let hexes = [Hex::ORIGIN, Hex::new(0, 1)];
        let img = match render_layout(&hexes, &colors(&["red", "blue"]), 1.0) {
            Ok(img) => img,
            Err(error) => panic!("render failed: {error}"),
        };
        let (width, height) = img.dimensions();
        assert_eq!(*img.get_pixel(width / 2, height / 4), Rgba([0, 0, 255, 255]));
        assert_eq!(*img.get_pixel(width / 2, height * 3 / 4), Rgba([255, 0, 0, 255]));
    }

    // Tests invalid inputs are reported
    // Verified by rendering an empty canvas for an empty layout
    #[test]
    fn test_render_errors() {
        assert!(render_layout(&[], &[], 1.0).is_err());
        assert!(render_layout(&[Hex::ORIGIN], &colors(&["red", "blue"]), 1.0).is_err());
        assert!(render_layout(&[Hex::ORIGIN], &colors(&["mauve?"]), 1.0).is_err());
    }

    // Tests export writes a readable PNG
    // Verified by saving to the parent directory
    #[test]
    fn test_export_png() {
        let temp_dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir failed: {e}"));
        let path = temp_dir.path().join("out").join("layout_1.png");
        let hexes = [Hex::ORIGIN, Hex::new(1, 0)];

        let result = export_layout_as_png(&hexes, &colors(&["#273c6b", "#d8c03f"]), 1.0, &path);
        assert!(result.is_ok());

        let loaded = image::open(&path).map(|img| img.dimensions()).ok();
        let rendered = render_layout(&hexes, &colors(&["#273c6b", "#d8c03f"]), 1.0)
            .map(|img| img.dimensions())
            .ok();
        assert!(loaded.is_some());
        assert_eq!(loaded, rendered);
    }
}
