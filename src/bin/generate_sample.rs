//! Writes a synthetic wildfire dataset (GeoJSON polygons plus a CSV point
//! variant) for trying out the dashboard without real data.

use std::io::Write;

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};
use serde_json::{Map, json};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        lo + (self.next_u64() % u64::from(hi - lo + 1)) as u32
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Region roughly matching Calabria.
const LON_RANGE: (f64, f64) = (15.8, 16.9);
const LAT_RANGE: (f64, f64) = (37.95, 39.45);

/// Expected fires per month, summer-heavy.
const FIRES_PER_MONTH: [u32; 12] = [1, 1, 2, 3, 5, 8, 14, 16, 9, 4, 2, 1];

struct SyntheticFire {
    lon: f64,
    lat: f64,
    area_ha: f64,
    date: String,
}

fn generate_fires(rng: &mut SimpleRng, years: std::ops::RangeInclusive<i32>) -> Vec<SyntheticFire> {
    let mut fires = Vec::new();
    for year in years {
        for (month0, &base) in FIRES_PER_MONTH.iter().enumerate() {
            let month = month0 as u32 + 1;
            let n = rng.range_u32(base / 2, base + base / 2);
            for _ in 0..n {
                // Log-normal-ish burned area: mostly small, a few huge.
                let area_ha = rng.gauss(2.0, 1.6).exp().min(5_000.0);
                fires.push(SyntheticFire {
                    lon: rng.range(LON_RANGE.0, LON_RANGE.1),
                    lat: rng.range(LAT_RANGE.0, LAT_RANGE.1),
                    area_ha,
                    date: format!("{year:04}-{month:02}-{:02}", rng.range_u32(1, 28)),
                });
            }
        }
    }
    fires
}

/// Square polygon of the requested area, centred on the fire location,
/// in WGS84 degrees.
fn fire_polygon(fire: &SyntheticFire) -> Geometry {
    let side_m = (fire.area_ha * 10_000.0).sqrt();
    let half_lat = side_m / 2.0 / 111_320.0;
    let half_lon = half_lat / fire.lat.to_radians().cos();
    let (lon, lat) = (fire.lon, fire.lat);
    let ring = vec![
        vec![lon - half_lon, lat - half_lat],
        vec![lon + half_lon, lat - half_lat],
        vec![lon + half_lon, lat + half_lat],
        vec![lon - half_lon, lat + half_lat],
        vec![lon - half_lon, lat - half_lat],
    ];
    Geometry::new(Value::Polygon(vec![ring]))
}

fn write_geojson(fires: &[SyntheticFire], path: &str) -> std::io::Result<()> {
    let features = fires
        .iter()
        .map(|fire| {
            let mut properties = Map::new();
            properties.insert("FIREDATE".to_string(), json!(fire.date));
            Feature {
                bbox: None,
                geometry: Some(fire_polygon(fire)),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    let fc = GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    });
    std::fs::write(path, fc.to_string())
}

fn write_csv(fires: &[SyntheticFire], path: &str) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "lon,lat,date,area_ha")?;
    for fire in fires {
        writeln!(
            file,
            "{:.5},{:.5},{},{:.3}",
            fire.lon, fire.lat, fire.date, fire.area_ha
        )?;
    }
    Ok(())
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let fires = generate_fires(&mut rng, 2015..=2024);

    write_geojson(&fires, "sample_fires.geojson").expect("writing GeoJSON");
    write_csv(&fires, "sample_fires.csv").expect("writing CSV");

    println!(
        "Wrote {} synthetic fires to sample_fires.geojson and sample_fires.csv",
        fires.len()
    );
}
