use std::collections::BTreeMap;

use geo::Centroid;
use serde::Serialize;

use super::filter::filter_by_years;
use super::model::{FireDataset, FireRecord, Season, SizeClass, YearRange};
use super::projection::unproject_coord;

/// Display radius of the largest circle-matrix cell.
pub const GRID_RADIUS_SCALE: f64 = 40.0;
/// Radius used for every cell when the whole grid has zero burned area.
pub const GRID_FALLBACK_RADIUS: f64 = 1.0;

// ---------------------------------------------------------------------------
// Monthly time series
// ---------------------------------------------------------------------------

/// Burned-area totals for one `(year, month)` bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAggregate {
    pub year: i32,
    /// 1–12.
    pub month: u32,
    pub total_area_ha: f64,
    pub count: usize,
}

/// Group records by `(year, month)` and sum burned area, ascending by year
/// then calendar month.
pub fn monthly_series(records: &[&FireRecord]) -> Vec<MonthlyAggregate> {
    let mut buckets: BTreeMap<(i32, u32), (f64, usize)> = BTreeMap::new();
    for r in records {
        let entry = buckets.entry((r.year, r.month)).or_insert((0.0, 0));
        entry.0 += r.area_ha;
        entry.1 += 1;
    }
    buckets
        .into_iter()
        .map(|((year, month), (total_area_ha, count))| MonthlyAggregate {
            year,
            month,
            total_area_ha,
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Map points
// ---------------------------------------------------------------------------

/// One map marker per record: geometry centroid back in geographic degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
    pub area_ha: f64,
    pub season: Season,
    pub size_class: SizeClass,
    pub year: i32,
}

/// Project each record's centroid back to WGS84 lat/lon. Records whose
/// centroid is undefined (empty geometry) are skipped.
pub fn map_points(records: &[&FireRecord]) -> Vec<MapPoint> {
    records
        .iter()
        .filter_map(|r| {
            let c = r.geometry.centroid()?;
            let (lat, lon) = unproject_coord(c.x(), c.y());
            Some(MapPoint {
                lat,
                lon,
                area_ha: r.area_ha,
                season: r.season,
                size_class: r.size_class,
                year: r.year,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Year × month circle grid
// ---------------------------------------------------------------------------

/// One cell of the dense year×month grid, including months with no fires.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    pub year: i32,
    /// 1–12.
    pub month: u32,
    pub count: usize,
    pub total_area_ha: f64,
    /// Display radius, square-root-scaled so circle *area* tracks burned area.
    pub radius: f64,
    /// Relative fire count in `[0, 1]` for colour mapping.
    pub intensity: f64,
}

/// Build the complete cartesian grid of the selected years × months 1–12,
/// left-joining the monthly aggregates onto it. Cells without incidents keep
/// zero count and area so absence renders distinctly from small-but-nonzero.
pub fn circle_grid(records: &[&FireRecord], range: YearRange) -> Vec<GridCell> {
    let monthly = monthly_series(records);
    let by_key: BTreeMap<(i32, u32), &MonthlyAggregate> =
        monthly.iter().map(|m| ((m.year, m.month), m)).collect();

    let mut cells: Vec<GridCell> = Vec::with_capacity(range.span() * 12);
    for year in range.years() {
        for month in 1..=12 {
            let (count, total_area_ha) = by_key
                .get(&(year, month))
                .map_or((0, 0.0), |m| (m.count, m.total_area_ha));
            cells.push(GridCell {
                year,
                month,
                count,
                total_area_ha,
                radius: 0.0,
                intensity: 0.0,
            });
        }
    }

    let max_area = cells.iter().map(|c| c.total_area_ha).fold(0.0, f64::max);
    let max_count = cells.iter().map(|c| c.count).max().unwrap_or(0);

    for cell in &mut cells {
        cell.radius = if max_area > 0.0 {
            (cell.total_area_ha / max_area).sqrt() * GRID_RADIUS_SCALE
        } else {
            GRID_FALLBACK_RADIUS
        };
        cell.intensity = if max_count > 0 {
            cell.count as f64 / max_count as f64
        } else {
            0.0
        };
    }
    cells
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

/// Headline numbers over the filtered subset. Peaks are `None` when the
/// subset is empty; ties resolve to the earliest year.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Summary {
    pub total_fires: usize,
    pub total_area_ha: f64,
    pub peak_year_by_count: Option<(i32, usize)>,
    pub peak_year_by_area: Option<(i32, f64)>,
}

pub fn summarize(records: &[&FireRecord]) -> Summary {
    let mut per_year: BTreeMap<i32, (usize, f64)> = BTreeMap::new();
    let mut total_area_ha = 0.0;
    for r in records {
        let entry = per_year.entry(r.year).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += r.area_ha;
        total_area_ha += r.area_ha;
    }

    // Ascending-year iteration with strict comparisons makes ties resolve
    // to the earliest year.
    let mut peak_year_by_count: Option<(i32, usize)> = None;
    let mut peak_year_by_area: Option<(i32, f64)> = None;
    for (&year, &(count, area)) in &per_year {
        if peak_year_by_count.map_or(true, |(_, best)| count > best) {
            peak_year_by_count = Some((year, count));
        }
        if peak_year_by_area.map_or(true, |(_, best)| area > best) {
            peak_year_by_area = Some((year, area));
        }
    }

    Summary {
        total_fires: records.len(),
        total_area_ha,
        peak_year_by_count,
        peak_year_by_area,
    }
}

// ---------------------------------------------------------------------------
// The one recompute entry point
// ---------------------------------------------------------------------------

/// Everything a single year-range interaction produces for the charts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardView {
    pub timeseries: Vec<MonthlyAggregate>,
    pub points: Vec<MapPoint>,
    pub grid: Vec<GridCell>,
    pub summary: Summary,
}

/// Recompute all three views plus the summary for the given range. Pure:
/// the same dataset and range always reproduce identical output.
pub fn render(dataset: &FireDataset, range: YearRange) -> DashboardView {
    let filtered = filter_by_years(dataset, range);
    DashboardView {
        timeseries: monthly_series(&filtered),
        points: map_points(&filtered),
        grid: circle_grid(&filtered, range),
        summary: summarize(&filtered),
    }
}
