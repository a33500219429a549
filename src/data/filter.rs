use super::model::{FireDataset, FireRecord, YearRange};

// ---------------------------------------------------------------------------
// Year-range filter: the only predicate the dashboard applies
// ---------------------------------------------------------------------------

/// Return the records whose year falls inside the closed range, preserving
/// input order. Pure and deterministic; an empty result is a valid outcome
/// that every downstream aggregator accepts.
pub fn filter_by_years<'a>(dataset: &'a FireDataset, range: YearRange) -> Vec<&'a FireRecord> {
    dataset
        .records
        .iter()
        .filter(|r| range.contains(r.year))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::record;

    fn dataset() -> FireDataset {
        FireDataset::new(vec![
            record(2018, 3, 5.0),
            record(2020, 6, 50.0),
            record(2020, 6, 150.0),
            record(2021, 1, 10.0),
            record(2023, 8, 700.0),
        ])
    }

    #[test]
    fn every_result_is_inside_the_bounds() {
        let ds = dataset();
        let out = filter_by_years(&ds, YearRange::new(2020, 2021));
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|r| (2020..=2021).contains(&r.year)));
    }

    #[test]
    fn input_order_is_preserved() {
        let ds = dataset();
        let out = filter_by_years(&ds, YearRange::new(2018, 2023));
        let years: Vec<i32> = out.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2018, 2020, 2020, 2021, 2023]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = dataset();
        let range = YearRange::new(2020, 2021);
        let once = filter_by_years(&ds, range);
        let again = FireDataset::new(once.iter().map(|r| (*r).clone()).collect());
        let twice = filter_by_years(&again, range);
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.year_month, b.year_month);
            assert_eq!(a.area_ha, b.area_ha);
        }
    }

    #[test]
    fn empty_range_result_is_valid() {
        let ds = dataset();
        let out = filter_by_years(&ds, YearRange::new(1990, 1995));
        assert!(out.is_empty());
    }
}
