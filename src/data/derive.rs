use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::loader::RawFeature;
use super::model::{FireDataset, FireRecord, Season, SizeClass};

// ---------------------------------------------------------------------------
// Permissive date parsing
// ---------------------------------------------------------------------------

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y", "%Y%m%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse an incident date string, trying the common date and datetime
/// layouts in turn. Returns `None` when nothing matches; the caller drops
/// the record.
pub fn parse_date_permissive(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Record derivation
// ---------------------------------------------------------------------------

/// Turn raw features into the cleaned dataset.
///
/// A feature is dropped (silently, not defaulted) when its date fails to
/// parse or its area is missing, non-finite, or negative. Everything else
/// gets the full set of derived calendar fields.
pub fn derive_records(raw: Vec<RawFeature>) -> FireDataset {
    let records = raw
        .into_iter()
        .filter_map(|feat| {
            let date = parse_date_permissive(feat.date_raw.as_deref()?)?;
            let area_ha = feat.area_ha.filter(|a| a.is_finite() && *a >= 0.0)?;

            let year = date.year();
            let month = date.month();
            Some(FireRecord {
                geometry: feat.geometry,
                area_ha,
                date,
                year,
                month,
                day: date.day(),
                year_month: format!("{year:04}-{month:02}"),
                season: Season::from_month(month),
                size_class: SizeClass::from_area_ha(area_ha),
            })
        })
        .collect();

    FireDataset::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Geometry, Point};

    fn raw(date: Option<&str>, area: Option<f64>) -> RawFeature {
        RawFeature {
            geometry: Geometry::Point(Point::new(0.0, 0.0)),
            area_ha: area,
            date_raw: date.map(|s| s.to_string()),
        }
    }

    #[test]
    fn parses_common_date_layouts() {
        let expected = NaiveDate::from_ymd_opt(2021, 8, 11).unwrap();
        for s in [
            "2021-08-11",
            "2021/08/11",
            "11/08/2021",
            "11-08-2021",
            "20210811",
            "2021-08-11 14:30:00",
            "2021-08-11T14:30:00",
        ] {
            assert_eq!(parse_date_permissive(s), Some(expected), "failed for {s}");
        }
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(parse_date_permissive(""), None);
        assert_eq!(parse_date_permissive("   "), None);
        assert_eq!(parse_date_permissive("not a date"), None);
        assert_eq!(parse_date_permissive("2021-13-40"), None);
    }

    #[test]
    fn derives_calendar_fields_consistently() {
        let ds = derive_records(vec![raw(Some("2020-06-15"), Some(150.0))]);
        assert_eq!(ds.len(), 1);
        let r = &ds.records[0];
        assert_eq!((r.year, r.month, r.day), (2020, 6, 15));
        assert_eq!(r.year_month, "2020-06");
        assert_eq!(r.season, Season::Summer);
        assert_eq!(r.size_class, SizeClass::Big);
    }

    #[test]
    fn drops_records_with_unusable_date_or_area() {
        let ds = derive_records(vec![
            raw(Some("2020-06-15"), Some(1.0)),
            raw(None, Some(1.0)),
            raw(Some("nope"), Some(1.0)),
            raw(Some("2020-06-16"), None),
            raw(Some("2020-06-17"), Some(f64::NAN)),
            raw(Some("2020-06-18"), Some(-5.0)),
        ]);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].day, 15);
    }
}
