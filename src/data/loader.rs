use std::path::Path;

use anyhow::{Context, Result, bail};
use geo::{Area, BooleanOps, Geometry, Point, Validation};
use geojson::{FeatureCollection, GeoJson};
use thiserror::Error;

use super::derive::derive_records;
use super::model::FireDataset;
use super::projection::{mercator_x_m, mercator_y_m, project_geometry};

/// Property names probed for the incident date, in order.
const DATE_FIELDS: [&str; 5] = ["FIREDATE", "firedate", "date", "DATE", "Date"];

/// Property names probed for a pre-computed burned area (point datasets).
const AREA_FIELDS: [&str; 3] = ["area_ha", "AREA_HA", "area"];

/// Loader failure categories. Per-record problems (bad date, bad geometry)
/// are not errors; the record is dropped and counted instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("dataset contains no usable fire records")]
    EmptyDataset,
}

/// One raw input feature before date parsing and field derivation.
///
/// The geometry is already reprojected to Mercator meters and repaired;
/// `area_ha` and `date_raw` may still be missing and are resolved (or the
/// record dropped) by [`derive_records`].
#[derive(Debug, Clone)]
pub struct RawFeature {
    pub geometry: Geometry<f64>,
    pub area_ha: Option<f64>,
    pub date_raw: Option<String>,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a fire dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.geojson` / `.json` – GeoJSON FeatureCollection in WGS84 lon/lat
/// * `.csv`               – point records with `lon`, `lat`, `date` columns
///                          and an optional `area_ha` column
///
/// Fails if the file cannot be read or yields zero usable records; this is
/// the startup-fatal path.
pub fn load_dataset(path: &Path) -> Result<FireDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let raw = match ext.as_str() {
        "geojson" | "json" => load_geojson(path)?,
        "csv" => load_csv(path)?,
        other => bail!(LoadError::UnsupportedExtension(other.to_string())),
    };

    let n_raw = raw.len();
    let dataset = derive_records(raw);
    let n_dropped = n_raw - dataset.len();
    if n_dropped > 0 {
        log::warn!("Dropped {n_dropped} of {n_raw} features (unusable date or area)");
    }
    if dataset.is_empty() {
        return Err(LoadError::EmptyDataset.into());
    }
    let first = dataset.records.iter().map(|r| r.date).min();
    let last = dataset.records.iter().map(|r| r.date).max();
    if let (Some(first), Some(last)) = (first, last) {
        log::info!(
            "Loaded {} fire records from {first} to {last}",
            dataset.len()
        );
    }
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// GeoJSON loader
// ---------------------------------------------------------------------------

/// Expected input: a FeatureCollection of point or polygon features whose
/// properties carry the incident date string, e.g.
///
/// ```json
/// { "type": "Feature",
///   "geometry": { "type": "Polygon", "coordinates": [...] },
///   "properties": { "FIREDATE": "2021-08-11", ... } }
/// ```
fn load_geojson(path: &Path) -> Result<Vec<RawFeature>> {
    let text = std::fs::read_to_string(path).context("reading GeoJSON file")?;
    let gj: GeoJson = text.parse().context("parsing GeoJSON")?;
    let fc = FeatureCollection::try_from(gj).context("expected a FeatureCollection")?;

    let mut raw = Vec::with_capacity(fc.features.len());
    let mut skipped_geometry = 0usize;

    for feature in fc.features {
        let Some(gj_geom) = feature.geometry.clone() else {
            skipped_geometry += 1;
            continue;
        };
        let geom: Geometry<f64> = match gj_geom.try_into() {
            Ok(g) => g,
            Err(_) => {
                skipped_geometry += 1;
                continue;
            }
        };

        let geometry = repair_geometry(project_geometry(geom));

        let date_raw = DATE_FIELDS
            .iter()
            .find_map(|f| feature.property(f))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        // Polygonal shapes get their area from the geometry; point features
        // must carry it as a property.
        let area_ha = geometry_area_ha(&geometry).or_else(|| {
            AREA_FIELDS
                .iter()
                .find_map(|f| feature.property(f))
                .and_then(|v| v.as_f64())
        });

        raw.push(RawFeature {
            geometry,
            area_ha,
            date_raw,
        });
    }

    if skipped_geometry > 0 {
        log::warn!("Skipped {skipped_geometry} features with missing or malformed geometry");
    }
    Ok(raw)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with at least `lon`, `lat`, `date` columns;
/// coordinates in WGS84 degrees. An `area_ha` column is used when present,
/// otherwise the (point) record has zero burned area.
fn load_csv(path: &Path) -> Result<Vec<RawFeature>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_ascii_lowercase())
        .collect();

    let lon_idx = headers
        .iter()
        .position(|h| h == "lon" || h == "longitude")
        .context("CSV missing 'lon' column")?;
    let lat_idx = headers
        .iter()
        .position(|h| h == "lat" || h == "latitude")
        .context("CSV missing 'lat' column")?;
    let date_idx = headers
        .iter()
        .position(|h| h == "date" || h == "firedate")
        .context("CSV missing 'date' column")?;
    let area_idx = headers.iter().position(|h| h == "area_ha" || h == "area");

    let mut raw = Vec::new();
    let mut skipped_coords = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let lon = record.get(lon_idx).and_then(|s| s.trim().parse::<f64>().ok());
        let lat = record.get(lat_idx).and_then(|s| s.trim().parse::<f64>().ok());
        let (Some(lon), Some(lat)) = (lon, lat) else {
            skipped_coords += 1;
            continue;
        };

        let geometry = Geometry::Point(Point::new(mercator_x_m(lon), mercator_y_m(lat)));

        let area_ha = area_idx
            .and_then(|i| record.get(i))
            .and_then(|s| s.trim().parse::<f64>().ok())
            .or(Some(0.0));

        let date_raw = record
            .get(date_idx)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        raw.push(RawFeature {
            geometry,
            area_ha,
            date_raw,
        });
    }

    if skipped_coords > 0 {
        log::warn!("Skipped {skipped_coords} CSV rows with unparseable coordinates");
    }
    Ok(raw)
}

// ---------------------------------------------------------------------------
// Geometry helpers
// ---------------------------------------------------------------------------

/// Self-intersection repair: re-node an invalid polygonal geometry through a
/// boolean self-union, the zero-distance-buffer equivalent. Non-polygonal
/// geometries pass through untouched.
fn repair_geometry(geom: Geometry<f64>) -> Geometry<f64> {
    match geom {
        Geometry::Polygon(p) => {
            if p.is_valid() {
                Geometry::Polygon(p)
            } else {
                Geometry::MultiPolygon(p.union(&p))
            }
        }
        Geometry::MultiPolygon(mp) => {
            if mp.is_valid() {
                Geometry::MultiPolygon(mp)
            } else {
                Geometry::MultiPolygon(mp.union(&mp))
            }
        }
        other => other,
    }
}

/// Planar area of a projected polygonal geometry in hectares, `None` for
/// zero-dimensional geometries (points carry their area as an attribute).
fn geometry_area_ha(geom: &Geometry<f64>) -> Option<f64> {
    match geom {
        Geometry::Polygon(_) | Geometry::MultiPolygon(_) => {
            Some(geom.unsigned_area() / 10_000.0)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, Polygon};

    fn square_1km_at(lon: f64, lat: f64) -> Geometry<f64> {
        // A ~1 km square in Mercator meters centred on (lon, lat).
        let x = mercator_x_m(lon);
        let y = mercator_y_m(lat);
        let h = 500.0;
        Geometry::Polygon(Polygon::new(
            LineString::from(vec![
                (x - h, y - h),
                (x + h, y - h),
                (x + h, y + h),
                (x - h, y + h),
                (x - h, y - h),
            ]),
            vec![],
        ))
    }

    #[test]
    fn polygon_area_is_in_hectares() {
        let geom = square_1km_at(16.0, 39.0);
        // 1000 m × 1000 m = 100 ha
        let area = geometry_area_ha(&geom).unwrap();
        assert!((area - 100.0).abs() < 1e-6);
    }

    #[test]
    fn points_have_no_geometric_area() {
        let geom = Geometry::Point(Point::new(0.0, 0.0));
        assert_eq!(geometry_area_ha(&geom), None);
    }

    #[test]
    fn valid_polygons_pass_through_repair_unchanged() {
        let geom = square_1km_at(16.0, 39.0);
        let repaired = repair_geometry(geom.clone());
        assert_eq!(geometry_area_ha(&geom), geometry_area_ha(&repaired));
    }

    #[test]
    fn bowtie_polygon_is_repaired_to_valid() {
        // Self-intersecting "bowtie": (0,0) (10,10) (10,0) (0,10)
        let bowtie = Geometry::Polygon(Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (10.0, 10.0),
                (10.0, 0.0),
                (0.0, 10.0),
                (0.0, 0.0),
            ]),
            vec![],
        ));
        let repaired = repair_geometry(bowtie);
        match &repaired {
            Geometry::MultiPolygon(mp) => assert!(mp.is_valid()),
            other => panic!("expected MultiPolygon after repair, got {other:?}"),
        }
        // Two triangles of 25 m² each.
        assert!((repaired.unsigned_area() - 50.0).abs() < 1e-6);
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let err = load_dataset(Path::new("fires.shp")).unwrap_err();
        assert!(err.to_string().contains("unsupported file extension"));
    }

    #[test]
    fn csv_round_trip_from_temp_file() {
        let path = std::env::temp_dir().join("fire_atlas_loader_test.csv");
        std::fs::write(
            &path,
            "lon,lat,date,area_ha\n\
             16.2,39.1,2020-06-01,50.0\n\
             16.3,39.2,2020-06-15,150.0\n\
             bad,39.0,2021-01-10,10.0\n\
             16.4,38.8,2021-01-10,10.0\n",
        )
        .unwrap();

        let ds = load_dataset(&path).unwrap();
        // The 'bad' coordinate row is dropped.
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.year_bounds(), Some((2020, 2021)));
        assert!((ds.records[0].area_ha - 50.0).abs() < 1e-12);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn geojson_features_with_bad_dates_are_dropped() {
        let path = std::env::temp_dir().join("fire_atlas_loader_test.geojson");
        std::fs::write(
            &path,
            r#"{"type":"FeatureCollection","features":[
              {"type":"Feature","geometry":{"type":"Point","coordinates":[16.2,39.1]},
               "properties":{"FIREDATE":"2020-06-01","area_ha":12.5}},
              {"type":"Feature","geometry":{"type":"Point","coordinates":[16.3,39.0]},
               "properties":{"FIREDATE":"not a date","area_ha":3.0}}
            ]}"#,
        )
        .unwrap();

        let ds = load_dataset(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].year, 2020);
        assert!((ds.records[0].area_ha - 12.5).abs() < 1e-12);

        std::fs::remove_file(&path).ok();
    }
}
