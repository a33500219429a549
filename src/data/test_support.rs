//! Shared builders for the data-layer tests.

use chrono::NaiveDate;
use geo::{Geometry, Point};

use super::model::{FireRecord, Season, SizeClass};
use super::projection::{mercator_x_m, mercator_y_m};

/// A fire record on the 15th of the given month, located at the origin.
pub fn record(year: i32, month: u32, area_ha: f64) -> FireRecord {
    record_at(0.0, 0.0, year, month, area_ha)
}

/// A fire record at the given WGS84 lon/lat, dated the 15th of the month.
pub fn record_at(lon: f64, lat: f64, year: i32, month: u32, area_ha: f64) -> FireRecord {
    let date = NaiveDate::from_ymd_opt(year, month, 15).expect("valid test date");
    FireRecord {
        geometry: Geometry::Point(Point::new(mercator_x_m(lon), mercator_y_m(lat))),
        area_ha,
        date,
        year,
        month,
        day: 15,
        year_month: format!("{year:04}-{month:02}"),
        season: Season::from_month(month),
        size_class: SizeClass::from_area_ha(area_ha),
    }
}
