/// Data layer: core types, loading, derivation, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .geojson / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → reproject → repair → area
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  derive   │  parse dates → calendar fields, season, size class
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ FireDataset  │  Vec<FireRecord>, immutable after load
///   └─────────────┘
///        │  per year-range change
///        ▼
///   ┌──────────┐      ┌────────────┐
///   │  filter   │ ───▶ │ aggregate   │  time series, map points,
///   └──────────┘      └────────────┘  circle grid, summary
/// ```

pub mod aggregate;
pub mod derive;
pub mod filter;
pub mod loader;
pub mod model;
pub mod projection;

#[cfg(test)]
pub mod test_support;
