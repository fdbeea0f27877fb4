use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Colour of the summed series.
pub const SERIES_COLOR: Color32 = Color32::LIGHT_BLUE;

/// Colour of the spectrum curve.
pub const SPECTRUM_COLOR: Color32 = Color32::from_rgb(0x8e, 0x44, 0xad);

/// Hue step between neighbouring components, in degrees.
const GOLDEN_ANGLE: f32 = 137.507_77;

/// Colour of component `index`.
///
/// Hues advance by the golden angle, so a component keeps its colour when
/// the series grows and neighbours never share a hue.
pub fn hue_color(index: usize) -> Color32 {
    let hue = (index as f32 * GOLDEN_ANGLE) % 360.0;
    let rgb: Srgb = Hsl::new(hue, 0.7, 0.6).into_color();
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

/// Colours for the first `n` components.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n).map(hue_color).collect()
}

/// Colour for component `index`, falling back to grey past the palette.
pub fn component_color(palette: &[Color32], index: usize) -> Color32 {
    palette.get(index).copied().unwrap_or(Color32::GRAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_entries() {
        let colors = generate_palette(3);
        assert_eq!(colors.len(), 3);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn colours_stay_put_as_series_grows() {
        assert_eq!(generate_palette(2)[..], generate_palette(7)[..2]);
    }

    #[test]
    fn out_of_range_component_is_grey() {
        assert_eq!(component_color(&[], 2), Color32::GRAY);
    }
}
