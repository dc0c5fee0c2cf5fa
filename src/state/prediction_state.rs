//! Prediction board selection and category filter.

use crate::catalog::Category;

/// Which markets are listed and which one is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictionState {
    /// Category filter; `None` lists every market.
    pub filter: Option<Category>,
    /// Selected row within the filtered list.
    pub selected: usize,
}

impl PredictionState {
    /// All, then each category in order, then back to all. Resets the selection.
    pub fn cycle_filter(&mut self) {
        self.filter = match self.filter {
            None => Some(Category::ALL[0]),
            Some(current) => Category::ALL
                .iter()
                .position(|c| *c == current)
                .and_then(|i| Category::ALL.get(i + 1))
                .copied(),
        };
        self.selected = 0;
    }

    /// Label for the current filter.
    pub fn filter_label(&self) -> String {
        self.filter
            .map_or_else(|| "All".to_string(), |c| c.to_string())
    }

    /// Move down, wrapping over `len` rows.
    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move up, wrapping over `len` rows.
    pub fn select_previous(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Select `index` if it is one of `len` rows.
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if index < len {
            self.selected = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_cycles_through_categories() {
        let mut state = PredictionState {
            selected: 4,
            ..Default::default()
        };
        let mut seen = Vec::new();
        for _ in 0..4 {
            state.cycle_filter();
            seen.push(state.filter_label());
        }
        assert_eq!(seen, vec!["Performance", "Risk", "Returns", "All"]);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = PredictionState::default();
        state.select_previous(3);
        assert_eq!(state.selected, 2);
        state.select_next(3);
        assert_eq!(state.selected, 0);
        state.select_next(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_select_out_of_range_is_refused() {
        let mut state = PredictionState::default();
        assert!(state.select(2, 3));
        assert!(!state.select(3, 3));
        assert_eq!(state.selected, 2);
    }
}
