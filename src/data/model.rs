use std::fmt;

use chrono::NaiveDate;
use geo::Geometry;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Season – coarse calendar bucket used for map colouring
// ---------------------------------------------------------------------------

/// Fire season bucket derived from the incident month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    /// May through October, inclusive on both ends.
    Summer,
    /// November through April.
    Winter,
}

impl Season {
    /// Pure function of the calendar month (1–12).
    pub fn from_month(month: u32) -> Self {
        if (5..=10).contains(&month) {
            Season::Summer
        } else {
            Season::Winter
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Summer => write!(f, "Summer"),
            Season::Winter => write!(f, "Winter"),
        }
    }
}

// ---------------------------------------------------------------------------
// SizeClass – small/big split on burned area
// ---------------------------------------------------------------------------

/// Size bucket derived from burned area. `Big` is strictly above 100 ha,
/// so a fire of exactly 100 ha is `Small`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SizeClass {
    Small,
    Big,
}

impl SizeClass {
    pub fn from_area_ha(area_ha: f64) -> Self {
        if area_ha > 100.0 {
            SizeClass::Big
        } else {
            SizeClass::Small
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeClass::Small => write!(f, "Small"),
            SizeClass::Big => write!(f, "Big"),
        }
    }
}

// ---------------------------------------------------------------------------
// FireRecord – one row of the source dataset
// ---------------------------------------------------------------------------

/// A single wildfire incident after loading and derivation.
///
/// The geometry lives in Web-Mercator meters; `area_ha` is its planar area
/// in hectares. All calendar fields are derived once from `date` and never
/// mutated independently.
#[derive(Debug, Clone)]
pub struct FireRecord {
    /// Point or polygon shape in projected (Web-Mercator) coordinates.
    pub geometry: Geometry<f64>,
    /// Burned area in hectares (projected m² / 10 000), non-negative.
    pub area_ha: f64,
    /// Incident date.
    pub date: NaiveDate,
    pub year: i32,
    /// 1–12.
    pub month: u32,
    pub day: u32,
    /// `"YYYY-MM"` key, consistent with `date`.
    pub year_month: String,
    pub season: Season,
    pub size_class: SizeClass,
}

// ---------------------------------------------------------------------------
// FireDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full cleaned dataset. Loaded once at startup, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct FireDataset {
    /// All retained incidents, in source order.
    pub records: Vec<FireRecord>,
}

impl FireDataset {
    pub fn new(records: Vec<FireRecord>) -> Self {
        FireDataset { records }
    }

    /// Number of incidents.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed `(min_year, max_year)` over all records, `None` when empty.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().map(|r| r.year);
        let first = years.next()?;
        let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        Some((min, max))
    }
}

// ---------------------------------------------------------------------------
// YearRange – the single user control
// ---------------------------------------------------------------------------

/// Closed year interval `[min, max]` selected by the range control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    /// Build a range, swapping the ends if given in reverse order.
    pub fn new(a: i32, b: i32) -> Self {
        YearRange {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    /// Number of years covered (always ≥ 1).
    pub fn span(&self) -> usize {
        (self.max - self.min + 1) as usize
    }

    /// Iterate the covered years ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.min..=self.max
    }

    /// Clamp both ends into the dataset's observed bounds.
    pub fn clamp_to(&self, bounds: (i32, i32)) -> Self {
        let (lo, hi) = bounds;
        YearRange::new(self.min.clamp(lo, hi), self.max.clamp(lo, hi))
    }
}

/// Three-letter month labels in calendar order, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_boundaries_are_inclusive_summer() {
        assert_eq!(Season::from_month(5), Season::Summer);
        assert_eq!(Season::from_month(10), Season::Summer);
        assert_eq!(Season::from_month(4), Season::Winter);
        assert_eq!(Season::from_month(11), Season::Winter);
        assert_eq!(Season::from_month(1), Season::Winter);
    }

    #[test]
    fn size_class_is_strictly_big_above_100() {
        assert_eq!(SizeClass::from_area_ha(100.0), SizeClass::Small);
        assert_eq!(SizeClass::from_area_ha(100.01), SizeClass::Big);
        assert_eq!(SizeClass::from_area_ha(0.0), SizeClass::Small);
    }

    #[test]
    fn year_range_normalizes_and_clamps() {
        let r = YearRange::new(2022, 2018);
        assert_eq!(r, YearRange { min: 2018, max: 2022 });
        assert_eq!(r.span(), 5);
        assert!(r.contains(2018));
        assert!(r.contains(2022));
        assert!(!r.contains(2023));

        let clamped = r.clamp_to((2019, 2021));
        assert_eq!(clamped, YearRange { min: 2019, max: 2021 });
    }

    #[test]
    fn year_bounds_over_records() {
        let ds = FireDataset::default();
        assert_eq!(ds.year_bounds(), None);
    }
}
