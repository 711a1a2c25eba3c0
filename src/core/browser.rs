use crate::core::filters::FilterState;
use crate::core::paginator::{self, Direction};
use crate::core::predicate::filter_facilities;
use crate::domain::model::Facility;

/// Default number of facilities shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One visible window of the filtered list, with what a caller needs to
/// drive navigation controls.
#[derive(Debug)]
pub struct PageView<'a> {
    pub facilities: Vec<&'a Facility>,
    pub page: usize,
    pub filtered_len: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// A browsing session over one fetched facility list: the filter selection
/// plus the current page index. Filtering and pagination are recomputed from
/// scratch on every read; both are cheap and pure, so nothing is cached.
///
/// The page index is deliberately not reset when a filter toggle shrinks the
/// filtered list. The view can land on an empty page; navigation clamps back
/// into range on the next step. Resetting to page zero on every toggle would
/// lose the operator's place whenever they widen a filter, so the stay-put
/// behavior is kept.
#[derive(Debug)]
pub struct FacilityBrowser {
    facilities: Vec<Facility>,
    filter: FilterState,
    page: usize,
    page_size: usize,
}

impl FacilityBrowser {
    pub fn new(facilities: Vec<Facility>, page_size: usize) -> Self {
        Self {
            facilities,
            filter: FilterState::default(),
            page: 0,
            page_size,
        }
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn toggle_fueltech_category(&mut self, label: &str, enabled: bool) {
        self.filter = self.filter.set_fueltech_category(label, enabled);
    }

    pub fn toggle_status_category(&mut self, label: &str, enabled: bool) {
        self.filter = self.filter.set_status_category(label, enabled);
    }

    pub fn next_page(&mut self) {
        self.step(Direction::Forward);
    }

    pub fn previous_page(&mut self) {
        self.step(Direction::Back);
    }

    fn step(&mut self, direction: Direction) {
        let filtered_len = filter_facilities(&self.facilities, &self.filter).len();
        self.page = paginator::navigate(self.page, direction, filtered_len, self.page_size);
    }

    pub fn current_page(&self) -> PageView<'_> {
        let filtered = filter_facilities(&self.facilities, &self.filter);
        let filtered_len = filtered.len();
        let window = paginator::page_window(&filtered, self.page, self.page_size).to_vec();

        PageView {
            facilities: window,
            page: self.page,
            filtered_len,
            has_previous: paginator::has_previous(self.page),
            has_next: paginator::has_next(self.page, filtered_len, self.page_size),
        }
    }
}
