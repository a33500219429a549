use eframe::egui::{Stroke, Ui};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points, Polygon};

use crate::color;
use crate::data::model::{Season, SizeClass, MONTH_NAMES};
use crate::state::AppState;

/// Label for an integral month mark, empty for in-between grid lines.
fn month_label(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 {
        return String::new();
    }
    match rounded as i64 {
        m @ 1..=12 => MONTH_NAMES[(m - 1) as usize].to_string(),
        _ => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Monthly burned-area time series (one line per year)
// ---------------------------------------------------------------------------

pub fn timeseries_plot(ui: &mut Ui, state: &AppState) {
    let series = &state.view.timeseries;

    let years: Vec<i32> = {
        let mut ys: Vec<i32> = series.iter().map(|m| m.year).collect();
        ys.dedup();
        ys
    };
    let palette = color::generate_palette(years.len());

    let y_max = series
        .iter()
        .map(|m| m.total_area_ha)
        .fold(0.0, f64::max)
        .max(1.0);

    Plot::new("timeseries_plot")
        .legend(Legend::default())
        .x_axis_label("Month")
        .y_axis_label("Burned area [ha]")
        .x_axis_formatter(|mark, _range| month_label(mark.value))
        .include_x(1.0)
        .include_x(12.0)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            // Season shading behind the lines: winter / summer / winter.
            let bands = [
                (1.0, 5.0, Season::Winter),
                (5.0, 10.0, Season::Summer),
                (10.0, 12.0, Season::Winter),
            ];
            for (x0, x1, season) in bands {
                let top = y_max * 1.05;
                let corners: PlotPoints =
                    vec![[x0, 0.0], [x1, 0.0], [x1, top], [x0, top]].into();
                plot_ui.polygon(
                    Polygon::new(corners)
                        .fill_color(color::season_band_color(season))
                        .stroke(Stroke::NONE),
                );
            }

            for (year, color) in years.iter().zip(palette.iter()) {
                let points: PlotPoints = series
                    .iter()
                    .filter(|m| m.year == *year)
                    .map(|m| [f64::from(m.month), m.total_area_ha])
                    .collect();
                plot_ui.line(
                    Line::new(points)
                        .name(year.to_string())
                        .color(*color)
                        .width(1.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Fire-location map (centroid scatter, colour by season, size by area)
// ---------------------------------------------------------------------------

pub fn map_plot(ui: &mut Ui, state: &AppState) {
    let points = &state.view.points;

    let max_area = points.iter().map(|p| p.area_ha).fold(0.0, f64::max);

    Plot::new("map_plot")
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(1.0)
        .show(ui, |plot_ui| {
            for p in points {
                // Square-root scaling so marker area tracks burned area.
                let radius = if max_area > 0.0 {
                    (2.0 + (p.area_ha / max_area).sqrt() * 10.0) as f32
                } else {
                    2.0
                };
                // Big fires (> 100 ha) stand out as diamonds.
                let shape = match p.size_class {
                    SizeClass::Big => MarkerShape::Diamond,
                    SizeClass::Small => MarkerShape::Circle,
                };
                plot_ui.points(
                    Points::new(vec![[p.lon, p.lat]])
                        .name(p.season.to_string())
                        .color(color::season_color(p.season))
                        .shape(shape)
                        .filled(true)
                        .radius(radius),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Circle matrix (dense year × month bubble grid)
// ---------------------------------------------------------------------------

pub fn circle_matrix(ui: &mut Ui, state: &AppState) {
    let grid = &state.view.grid;

    Plot::new("circle_matrix")
        .x_axis_label("Month")
        .y_axis_label("Year")
        .x_axis_formatter(|mark, _range| month_label(mark.value))
        // Years are plotted negated so the most recent sits at the top;
        // the formatter shows the real value.
        .y_axis_formatter(|mark, _range| {
            let v = -mark.value;
            if (v - v.round()).abs() < 1e-6 {
                format!("{}", v.round() as i64)
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            for cell in grid {
                let pos = vec![[f64::from(cell.month), -f64::from(cell.year)]];
                let marker = if cell.count == 0 {
                    Points::new(pos)
                        .color(color::empty_cell_color())
                        .radius(1.5)
                } else {
                    Points::new(pos)
                        .color(color::intensity_color(cell.intensity))
                        .radius((2.0 + cell.radius * 0.45) as f32)
                };
                plot_ui.points(marker.shape(MarkerShape::Circle).filled(true));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_labels_cover_only_integral_months() {
        assert_eq!(month_label(1.0), "Jan");
        assert_eq!(month_label(12.0), "Dec");
        assert_eq!(month_label(6.5), "");
        assert_eq!(month_label(0.0), "");
        assert_eq!(month_label(13.0), "");
    }
}
