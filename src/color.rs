use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Season;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
/// Used for the one-line-per-year time series.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.75, 0.55))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fixed colour assignments
// ---------------------------------------------------------------------------

/// Map-marker colour per season (pink summer, blue winter, matching the
/// season shading of the time-series background).
pub fn season_color(season: Season) -> Color32 {
    match season {
        Season::Summer => Color32::from_rgb(233, 110, 133),
        Season::Winter => Color32::from_rgb(100, 149, 237),
    }
}

/// Translucent band colours behind the time series.
pub fn season_band_color(season: Season) -> Color32 {
    match season {
        Season::Summer => Color32::from_rgba_unmultiplied(255, 182, 193, 40),
        Season::Winter => Color32::from_rgba_unmultiplied(173, 216, 230, 40),
    }
}

/// Yellow→orange→red ramp for circle-matrix intensity in `[0, 1]`,
/// approximating the YlOrRd scale.
pub fn intensity_color(t: f64) -> Color32 {
    let t = t.clamp(0.0, 1.0) as f32;
    // Hue walks from yellow (55°) down to red (0°); darker at the hot end.
    let hue = 55.0 * (1.0 - t);
    let lightness = 0.72 - 0.32 * t;
    hsl_to_color32(Hsl::new(hue, 0.9, lightness))
}

/// Placeholder colour for grid cells with no fires.
pub fn empty_cell_color() -> Color32 {
    Color32::from_gray(90)
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(8);
        assert_eq!(p.len(), 8);
        assert_ne!(p[0], p[4]);
    }

    #[test]
    fn intensity_ramp_ends_are_yellow_and_red() {
        let cold = intensity_color(0.0);
        let hot = intensity_color(1.0);
        // Yellow end: red and green channels both high.
        assert!(cold.r() > 180 && cold.g() > 150);
        // Red end: red dominates green.
        assert!(hot.r() > hot.g() + 80);
        // Out-of-range input clamps rather than panics.
        assert_eq!(intensity_color(-1.0), cold);
        assert_eq!(intensity_color(2.0), hot);
    }
}
