use geo::{Coord, Geometry, MapCoords};

// ---------------------------------------------------------------------------
// Spherical Web-Mercator (EPSG:3857-equivalent)
// ---------------------------------------------------------------------------

/// WGS84 equatorial radius in meters, as used by Web-Mercator.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Forward projection of a longitude in degrees to Mercator x in meters.
pub fn mercator_x_m(lon_deg: f64) -> f64 {
    EARTH_RADIUS_M * lon_deg.to_radians()
}

/// Forward projection of a latitude in degrees to Mercator y in meters.
pub fn mercator_y_m(lat_deg: f64) -> f64 {
    let lat_rad = lat_deg.to_radians();
    EARTH_RADIUS_M * (std::f64::consts::FRAC_PI_4 + lat_rad / 2.0).tan().ln()
}

/// Inverse projection of Mercator x in meters back to longitude in degrees.
pub fn inverse_mercator_lon_deg(x_m: f64) -> f64 {
    (x_m / EARTH_RADIUS_M).to_degrees()
}

/// Inverse projection of Mercator y in meters back to latitude in degrees.
pub fn inverse_mercator_lat_deg(y_m: f64) -> f64 {
    (2.0 * (y_m / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2).to_degrees()
}

/// Reproject a whole geometry from WGS84 lon/lat degrees into Mercator meters.
pub fn project_geometry(geom: Geometry<f64>) -> Geometry<f64> {
    geom.map_coords(|Coord { x, y }| Coord {
        x: mercator_x_m(x),
        y: mercator_y_m(y),
    })
}

/// Map a projected coordinate back to `(lat, lon)` degrees.
pub fn unproject_coord(x_m: f64, y_m: f64) -> (f64, f64) {
    (inverse_mercator_lat_deg(y_m), inverse_mercator_lon_deg(x_m))
}
