//! Filter Controller
//!
//! Tracks the selected view and which tab carries the selected state.

use crate::model::ViewFilter;

/// One filter tab as the view should draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTab {
    pub filter: ViewFilter,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterController {
    current: ViewFilter,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ViewFilter {
        self.current
    }

    /// Make `filter` the active view; returns true if it changed
    pub fn select(&mut self, filter: ViewFilter) -> bool {
        let changed = self.current != filter;
        self.current = filter;
        tracing::debug!(filter = filter.as_str(), changed, "filter selected");
        changed
    }

    /// All tabs in display order, exactly one of them selected
    pub fn tabs(&self) -> [FilterTab; 3] {
        ViewFilter::ALL.map(|filter| FilterTab {
            filter,
            selected: filter == self.current,
        })
    }
}
