//! Page window and link-state computation

use serde::Serialize;

use crate::config::DisplayConfig;
use crate::error::{PaginateError, Result};
use crate::window::{LinkDescriptor, LinkKind, PageWindow, PaginationState};

/// Window size used when the configuration does not set one
pub const DEFAULT_MAX_NUMBERS: usize = 10;

/// Pure calculator deriving every link of a pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindowCalculator {
    state: PaginationState,
    max_numbers: usize,
}

impl PageWindowCalculator {
    /// Create a calculator, rejecting a zero page size or window size
    pub fn new(state: PaginationState, max_numbers: usize) -> Result<Self> {
        if state.page_size == 0 {
            return Err(PaginateError::invalid("page size must be greater than zero"));
        }
        if max_numbers == 0 {
            return Err(PaginateError::invalid(
                "max numbers must be greater than zero",
            ));
        }
        Ok(Self { state, max_numbers })
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn max_numbers(&self) -> usize {
        self.max_numbers
    }

    // Page 0 never reaches here from the request adapter; treat it as page 1.
    fn current_page(&self) -> u64 {
        self.state.current_page.max(1)
    }

    /// Highest page holding at least one record; 0 when there are none
    pub fn last_page(&self) -> u64 {
        self.state.total_items.div_ceil(self.state.page_size)
    }

    pub fn first(&self) -> LinkDescriptor {
        LinkDescriptor::navigation(LinkKind::First, 1, self.current_page() > 1)
    }

    pub fn prev(&self) -> LinkDescriptor {
        let page = self.current_page();
        LinkDescriptor::navigation(LinkKind::Prev, page - 1, page > 1)
    }

    /// Enabled while records remain past the end of the current page
    pub fn next(&self) -> LinkDescriptor {
        let page = self.current_page();
        let shown = u128::from(self.state.page_size) * u128::from(page);
        let enabled = u128::from(self.state.total_items) > shown;
        LinkDescriptor::navigation(LinkKind::Next, page.saturating_add(1), enabled)
    }

    pub fn last(&self) -> LinkDescriptor {
        let last_page = self.last_page();
        LinkDescriptor::navigation(LinkKind::Last, last_page, last_page > self.current_page())
    }

    /// Number of neighbours shown before and after the current page.
    ///
    /// Both sides get `max_numbers / 2`. An odd window is exactly
    /// `max_numbers` long; an even one holds `max_numbers + 1` pages.
    pub fn split(&self) -> (u64, u64) {
        let half = self.max_numbers as u64 / 2;
        (half, half)
    }

    /// Inclusive page bounds of the numbered window.
    ///
    /// Bounds are clamped to `1..=last_page` rather than shifted, so the window
    /// shrinks near either edge. `start > end` means there is nothing to show.
    pub fn window_bounds(&self) -> (u64, u64) {
        let page = self.current_page();
        let (before, after) = self.split();
        let start = page.saturating_sub(before).max(1);
        let end = page.saturating_add(after).min(self.last_page());
        (start, end)
    }

    /// Numbered links around the current page
    pub fn numbers(&self) -> PageWindow {
        let (start, end) = self.window_bounds();
        PageWindow::from_range(start, end, self.current_page())
    }

    /// Every link of the control
    pub fn links(&self) -> LinkSet {
        let links = LinkSet {
            first: self.first(),
            prev: self.prev(),
            numbers: self.numbers(),
            next: self.next(),
            last: self.last(),
        };
        log::debug!(
            "computed links for page {} of {} (window {:?}..={:?})",
            self.current_page(),
            self.last_page(),
            links.numbers.start(),
            links.numbers.end(),
        );
        links
    }
}

/// Complete set of descriptors for one pagination control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSet {
    pub first: LinkDescriptor,
    pub prev: LinkDescriptor,
    pub numbers: PageWindow,
    pub next: LinkDescriptor,
    pub last: LinkDescriptor,
}

impl LinkSet {
    /// Descriptors in display order, skipping the sections `config` hides.
    /// Disabled links keep their slot.
    pub fn sequence(&self, config: &DisplayConfig) -> Vec<LinkDescriptor> {
        let mut out = Vec::with_capacity(self.numbers.len() + 4);
        if config.show_first_last {
            out.push(self.first);
        }
        if config.show_prev_next {
            out.push(self.prev);
        }
        if config.show_numbers {
            out.extend(self.numbers.iter().copied());
        }
        if config.show_prev_next {
            out.push(self.next);
        }
        if config.show_first_last {
            out.push(self.last);
        }
        out
    }
}

/// Compute every link for `state` using the window size from `config`
pub fn compute_links(state: &PaginationState, config: &DisplayConfig) -> Result<LinkSet> {
    Ok(PageWindowCalculator::new(*state, config.max_numbers)?.links())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(page: u64, total: u64, size: u64, max: usize) -> PageWindowCalculator {
        PageWindowCalculator::new(PaginationState::new(page, total, size), max).unwrap()
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let err = PageWindowCalculator::new(PaginationState::new(1, 10, 0), 10).unwrap_err();
        assert!(matches!(err, PaginateError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_zero_max_numbers() {
        let err = PageWindowCalculator::new(PaginationState::new(1, 10, 5), 0).unwrap_err();
        assert!(matches!(err, PaginateError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_last_page() {
        assert_eq!(calc(1, 0, 10, 10).last_page(), 0);
        assert_eq!(calc(1, 1, 10, 10).last_page(), 1);
        assert_eq!(calc(1, 10, 10, 10).last_page(), 1);
        assert_eq!(calc(1, 11, 10, 10).last_page(), 2);
        assert_eq!(calc(1, 95, 10, 10).last_page(), 10);
    }

    #[test]
    fn test_no_records() {
        let links = calc(1, 0, 10, 10).links();
        assert!(!links.first.enabled);
        assert!(!links.prev.enabled);
        assert!(!links.next.enabled);
        assert!(!links.last.enabled);
        assert!(links.numbers.is_empty());
    }

    #[test]
    fn test_first_page() {
        let links = calc(1, 35, 10, 10).links();
        assert!(!links.first.enabled);
        assert!(!links.prev.enabled);
        assert!(links.next.enabled);
        assert_eq!(links.next.target_page, 2);
        assert!(links.last.enabled);
        assert_eq!(links.last.target_page, 4);
    }

    #[test]
    fn test_last_page_disables_forward_links() {
        let links = calc(4, 35, 10, 10).links();
        assert!(!links.next.enabled);
        assert!(!links.last.enabled);
        assert!(links.prev.enabled);
        assert_eq!(links.prev.target_page, 3);
        assert!(links.first.enabled);
        assert_eq!(links.first.target_page, 1);
    }

    #[test]
    fn test_exact_multiple_has_no_next() {
        let links = calc(2, 20, 10, 10).links();
        assert!(!links.next.enabled);
        assert!(!links.last.enabled);
    }

    #[test]
    fn test_single_page() {
        let links = calc(1, 7, 10, 10).links();
        assert!(!links.first.enabled);
        assert!(!links.next.enabled);
        assert_eq!(links.numbers.pages(), vec![1]);
        assert!(links.numbers.as_slice()[0].is_active);
    }

    #[test]
    fn test_page_beyond_last() {
        let links = calc(60, 500, 10, 10).links();
        assert!(links.prev.enabled);
        assert_eq!(links.prev.target_page, 59);
        assert!(!links.next.enabled);
        assert!(!links.last.enabled);
        assert!(links.numbers.is_empty());
    }

    #[test]
    fn test_page_zero_treated_as_first() {
        let links = calc(0, 50, 10, 10).links();
        assert!(!links.prev.enabled);
        assert_eq!(links.next.target_page, 2);
        assert_eq!(links.numbers.active().map(|d| d.target_page), Some(1));
    }

    #[test]
    fn test_split() {
        assert_eq!(calc(1, 10, 1, 11).split(), (5, 5));
        assert_eq!(calc(1, 10, 1, 10).split(), (5, 5));
        assert_eq!(calc(1, 10, 1, 2).split(), (1, 1));
        assert_eq!(calc(1, 10, 1, 1).split(), (0, 0));
    }

    #[test]
    fn test_window_even_is_symmetric() {
        let window = calc(25, 500, 10, 10).numbers();
        assert_eq!(window.start(), Some(20));
        assert_eq!(window.end(), Some(30));
        assert_eq!(window.len(), 11);
        assert_eq!(window.active().map(|d| d.target_page), Some(25));
    }

    #[test]
    fn test_window_small_collection() {
        let window = calc(5, 95, 10, 10).numbers();
        assert_eq!(window.pages(), (1..=10).collect::<Vec<_>>());
        assert_eq!(window.active().map(|d| d.target_page), Some(5));
    }

    #[test]
    fn test_window_odd_is_symmetric() {
        let window = calc(25, 500, 10, 11).numbers();
        assert_eq!(window.start(), Some(20));
        assert_eq!(window.end(), Some(30));
        assert_eq!(window.len(), 11);
    }

    #[test]
    fn test_window_clamps_at_left_edge() {
        let window = calc(1, 500, 10, 10).numbers();
        assert_eq!(window.pages(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_window_clamps_at_right_edge() {
        let window = calc(50, 500, 10, 10).numbers();
        assert_eq!(window.pages(), vec![45, 46, 47, 48, 49, 50]);
    }

    #[test]
    fn test_window_of_one() {
        let window = calc(7, 500, 10, 1).numbers();
        assert_eq!(window.pages(), vec![7]);
    }

    #[test]
    fn test_next_does_not_overflow() {
        let links = calc(u64::MAX, u64::MAX, u64::MAX, 10).links();
        assert!(!links.next.enabled);
        assert_eq!(links.next.target_page, u64::MAX);
    }

    #[test]
    fn test_window_invariants_hold_everywhere() {
        for total in [0u64, 1, 9, 10, 11, 95, 100, 101, 500] {
            for size in [1u64, 3, 10, 25] {
                for max in 1..=12usize {
                    let last = total.div_ceil(size);
                    for page in 1..=last + 2 {
                        let window = calc(page, total, size, max).numbers();
                        assert!(window.len() <= max / 2 * 2 + 1, "window too long");
                        if max % 2 == 1 {
                            assert!(window.len() <= max);
                        }
                        let pages = window.pages();
                        assert!(pages.windows(2).all(|w| w[1] == w[0] + 1));
                        assert!(pages.iter().all(|p| (1..=last).contains(p)));
                        let active = window.iter().filter(|d| d.is_active).count();
                        let expected = usize::from(page <= last);
                        assert_eq!(active, expected, "page {page} of {last}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_window_full_length_away_from_edges() {
        for max in 1..=12usize {
            let window = calc(100, 10_000, 10, max).numbers();
            assert_eq!(window.len(), max / 2 * 2 + 1);
        }
    }

    #[test]
    fn test_links_are_idempotent() {
        let calculator = calc(7, 123, 10, 10);
        assert_eq!(calculator.links(), calculator.links());

        let state = PaginationState::new(7, 123, 10);
        let config = DisplayConfig::default();
        assert_eq!(
            compute_links(&state, &config).unwrap(),
            compute_links(&state, &config).unwrap()
        );
    }

    #[test]
    fn test_compute_links_uses_config_window() {
        let state = PaginationState::new(25, 500, 10);
        let config = DisplayConfig {
            max_numbers: 5,
            ..DisplayConfig::default()
        };
        let links = compute_links(&state, &config).unwrap();
        assert_eq!(links.numbers.pages(), vec![23, 24, 25, 26, 27]);
    }

    #[test]
    fn test_compute_links_rejects_zero_window() {
        let state = PaginationState::new(1, 10, 10);
        let config = DisplayConfig {
            max_numbers: 0,
            ..DisplayConfig::default()
        };
        assert!(compute_links(&state, &config).is_err());
    }

    #[test]
    fn test_sequence_order_and_gates() {
        let links = calc(2, 30, 10, 10).links();
        let kinds: Vec<LinkKind> = links
            .sequence(&DisplayConfig::default())
            .iter()
            .map(|d| d.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                LinkKind::First,
                LinkKind::Prev,
                LinkKind::Number,
                LinkKind::Number,
                LinkKind::Number,
                LinkKind::Next,
                LinkKind::Last,
            ]
        );

        let config = DisplayConfig {
            show_first_last: false,
            show_numbers: false,
            ..DisplayConfig::default()
        };
        let kinds: Vec<LinkKind> = links.sequence(&config).iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![LinkKind::Prev, LinkKind::Next]);
    }

    #[test]
    fn test_sequence_keeps_disabled_slots() {
        let links = calc(1, 5, 10, 10).links();
        let sequence = links.sequence(&DisplayConfig::default());
        assert_eq!(sequence.len(), 5);
        assert!(!sequence[0].enabled);
        assert!(!sequence[4].enabled);
    }
}
