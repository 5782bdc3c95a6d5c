//! Marketplace view state: the listing, the filtered subset, and the cursor.

use crate::domain::entities::Website;
use crate::domain::filter::{FilterCriteria, filter};
use crate::domain::pagination::{PAGE_SIZE, PageControl, page_controls, page_count, paginate};

/// State behind one rendering of the marketplace.
///
/// Created over the loaded listing with every website visible on page 1.
/// Only [`apply_filters`](Self::apply_filters) changes the filtered subset
/// and only [`change_page`](Self::change_page) moves the cursor.
#[derive(Debug)]
pub struct MarketplaceView<'a> {
    all: &'a [Website],
    filtered: Vec<&'a Website>,
    current_page: u32,
}

impl<'a> MarketplaceView<'a> {
    pub fn new(all: &'a [Website]) -> Self {
        Self {
            all,
            filtered: all.iter().collect(),
            current_page: 1,
        }
    }

    /// Recomputes the filtered subset and returns to the first page.
    pub fn apply_filters(&mut self, criteria: &FilterCriteria) {
        self.filtered = filter(self.all, criteria);
        self.current_page = 1;
    }

    /// Moves to `target`, or does nothing when it is outside `1..=page_count`.
    ///
    /// Returns whether the move happened.
    pub fn change_page(&mut self, target: u32) -> bool {
        if target < 1 || target > self.page_count() {
            return false;
        }
        self.current_page = target;
        true
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Page count of the current filtered subset.
    pub fn page_count(&self) -> u32 {
        page_count(self.filtered.len(), PAGE_SIZE)
    }

    pub fn total_items(&self) -> usize {
        self.filtered.len()
    }

    /// Websites on the current page.
    pub fn window(&self) -> &[&'a Website] {
        paginate(&self.filtered, self.current_page, PAGE_SIZE).items
    }

    /// Index of the first website of the current page within the filtered subset.
    pub fn window_offset(&self) -> usize {
        (self.current_page as usize - 1) * PAGE_SIZE
    }

    pub fn controls(&self) -> Vec<PageControl> {
        page_controls(self.current_page, self.page_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::Range;

    fn listing(n: usize) -> Vec<Website> {
        (0..n)
            .map(|i| Website {
                domain: format!("site{i}.com"),
                authority: (i % 100).to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_new_view_shows_everything_on_page_one() {
        let all = listing(120);
        let view = MarketplaceView::new(&all);

        assert_eq!(view.current_page(), 1);
        assert_eq!(view.total_items(), 120);
        assert_eq!(view.page_count(), 3);
        assert_eq!(view.window().len(), 50);
    }

    #[test]
    fn test_change_page_bounds() {
        let all = listing(120);
        let mut view = MarketplaceView::new(&all);

        assert!(!view.change_page(0));
        assert!(!view.change_page(4));
        assert_eq!(view.current_page(), 1);

        assert!(view.change_page(2));
        assert_eq!(view.current_page(), 2);
        assert_eq!(view.window()[0].domain, "site50.com");
        assert_eq!(view.window()[49].domain, "site99.com");
        assert_eq!(view.window_offset(), 50);
    }

    #[test]
    fn test_apply_filters_resets_page() {
        let all = listing(120);
        let mut view = MarketplaceView::new(&all);
        view.change_page(3);

        view.apply_filters(&FilterCriteria {
            authority: Range::new(0, 9),
            ..Default::default()
        });

        assert_eq!(view.current_page(), 1);
        // authority i % 100 in 0..=9: i in 0..10 and 100..110
        assert_eq!(view.total_items(), 20);
        assert_eq!(view.page_count(), 1);
        assert!(view.controls().is_empty());
    }

    #[test]
    fn test_empty_filter_result() {
        let all = listing(10);
        let mut view = MarketplaceView::new(&all);
        view.apply_filters(&FilterCriteria::default().with_search("nothing-matches"));

        assert_eq!(view.page_count(), 0);
        assert!(view.window().is_empty());
        assert!(!view.change_page(1));
        assert!(view.controls().is_empty());
    }
}
