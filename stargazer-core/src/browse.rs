//! Catalog browsing: free-text filter, featured month and empty state.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{CatalogEntry, MonthEntry};

pub const EMPTY_STATE_TITLE: &str = "검색 결과가 없습니다.";
pub const EMPTY_STATE_HINT: &str = "다른 검색어로 밤하늘을 찾아보세요.";

/// Everything the browser needs to render one frame of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub search_term: String,
    /// The month matching today's date, shown above the grid.
    pub featured: Option<MonthEntry>,
    pub months: Vec<MonthEntry>,
    /// Present only when the filter left no months.
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyState {
    pub title: String,
    pub hint: String,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            title: EMPTY_STATE_TITLE.to_string(),
            hint: EMPTY_STATE_HINT.to_string(),
        }
    }
}

/// Whether `entry`, listed under `month`, matches the search term.
///
/// Matching is a literal, case-sensitive substring test against the entry's
/// name, its description and the month's display label. An empty term
/// matches everything.
pub fn matches(entry: &CatalogEntry, month: &MonthEntry, term: &str) -> bool {
    term.is_empty()
        || entry.name.contains(term)
        || entry.description.contains(term)
        || month.label.contains(term)
}

/// Filter the calendar, keeping only matching entries and dropping months
/// left without any.
pub fn filter_months(months: &[MonthEntry], term: &str) -> Vec<MonthEntry> {
    if term.is_empty() {
        return months.to_vec();
    }

    months
        .iter()
        .filter_map(|month| {
            let objects: Vec<CatalogEntry> = month
                .objects
                .iter()
                .filter(|entry| matches(entry, month, term))
                .cloned()
                .collect();
            if objects.is_empty() {
                None
            } else {
                Some(MonthEntry {
                    objects,
                    ..month.clone()
                })
            }
        })
        .collect()
}

/// The month whose number matches `today`.
pub fn current_month(months: &[MonthEntry], today: NaiveDate) -> Option<&MonthEntry> {
    months.iter().find(|m| m.month == today.month())
}

/// Build the browser view for a search term on a given date.
///
/// The featured month always comes from the unfiltered calendar so it stays
/// visible while searching.
pub fn browse(months: &[MonthEntry], term: &str, today: NaiveDate) -> CatalogView {
    let filtered = filter_months(months, term);
    let empty_state = filtered.is_empty().then(EmptyState::default);

    CatalogView {
        search_term: term.to_string(),
        featured: current_month(months, today).cloned(),
        months: filtered,
        empty_state,
    }
}
