use crate::data::aggregate::{self, DashboardView};
use crate::data::model::{FireDataset, YearRange};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which central view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    CircleMatrix,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<FireDataset>,

    /// Observed `(min_year, max_year)` of the dataset; slider bounds.
    pub year_bounds: Option<(i32, i32)>,

    /// Currently selected year interval.
    pub range: Option<YearRange>,

    /// Chart-ready output of the last recompute.
    pub view: DashboardView,

    /// Active central tab.
    pub tab: Tab,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            year_bounds: None,
            range: None,
            view: DashboardView::default(),
            tab: Tab::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: bounds come from the data, the range
    /// starts wide open, and all views are computed once.
    pub fn set_dataset(&mut self, dataset: FireDataset) {
        let bounds = dataset.year_bounds();
        self.year_bounds = bounds;
        self.range = bounds.map(|(lo, hi)| YearRange::new(lo, hi));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.recompute();
    }

    /// Apply a new year range (clamped to the dataset bounds) and recompute.
    pub fn set_range(&mut self, range: YearRange) {
        let clamped = match self.year_bounds {
            Some(bounds) => range.clamp_to(bounds),
            None => range,
        };
        if self.range != Some(clamped) {
            self.range = Some(clamped);
            self.recompute();
        }
    }

    /// Re-run filter → aggregators → summary for the current range.
    pub fn recompute(&mut self) {
        self.view = match (&self.dataset, self.range) {
            (Some(ds), Some(range)) => aggregate::render(ds, range),
            _ => DashboardView::default(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::record;

    fn state_with_data() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(FireDataset::new(vec![
            record(2018, 3, 5.0),
            record(2020, 6, 50.0),
            record(2021, 1, 10.0),
        ]));
        state
    }

    #[test]
    fn loading_a_dataset_opens_the_full_range() {
        let state = state_with_data();
        assert_eq!(state.year_bounds, Some((2018, 2021)));
        assert_eq!(state.range, Some(YearRange::new(2018, 2021)));
        assert_eq!(state.view.summary.total_fires, 3);
        assert_eq!(state.view.grid.len(), 4 * 12);
    }

    #[test]
    fn set_range_clamps_to_dataset_bounds() {
        let mut state = state_with_data();
        state.set_range(YearRange::new(1900, 2050));
        assert_eq!(state.range, Some(YearRange::new(2018, 2021)));

        state.set_range(YearRange::new(2020, 2020));
        assert_eq!(state.view.summary.total_fires, 1);
        assert_eq!(state.view.grid.len(), 12);
    }

    #[test]
    fn recompute_without_data_yields_empty_views() {
        let mut state = AppState::default();
        state.recompute();
        assert!(state.view.timeseries.is_empty());
        assert!(state.view.grid.is_empty());
        assert_eq!(state.view.summary.total_fires, 0);
    }
}
