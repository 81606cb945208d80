//! Link descriptors: render-ready description of a single navigation link

use serde::Serialize;
use smallvec::SmallVec;

/// Which navigation control a descriptor stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    First,
    Prev,
    Number,
    Next,
    Last,
}

impl LinkKind {
    /// Whether this is one of the four boundary controls
    pub fn is_navigation(&self) -> bool {
        !matches!(self, LinkKind::Number)
    }
}

/// A single link in the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDescriptor {
    pub kind: LinkKind,
    /// Page the link points to; only meaningful when `enabled`
    pub target_page: u64,
    pub enabled: bool,
    /// True only for the numbered link of the current page
    pub is_active: bool,
}

impl LinkDescriptor {
    /// Create a first/prev/next/last descriptor
    pub fn navigation(kind: LinkKind, target_page: u64, enabled: bool) -> Self {
        Self {
            kind,
            target_page,
            enabled,
            is_active: false,
        }
    }

    /// Create a numbered page descriptor
    pub fn number(page: u64, current_page: u64) -> Self {
        Self {
            kind: LinkKind::Number,
            target_page: page,
            enabled: true,
            is_active: page == current_page,
        }
    }
}

/// Inline capacity covers the default window of ten pages plus odd sizes
pub(crate) type WindowItems = SmallVec<[LinkDescriptor; 12]>;

/// Contiguous, ascending run of numbered page links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageWindow {
    items: WindowItems,
}

impl PageWindow {
    /// Build the window covering `start..=end`, marking `current_page` active.
    /// An inverted range yields an empty window.
    pub fn from_range(start: u64, end: u64, current_page: u64) -> Self {
        let items = (start..=end)
            .map(|page| LinkDescriptor::number(page, current_page))
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkDescriptor> {
        self.items.iter()
    }

    /// First page number in the window
    pub fn start(&self) -> Option<u64> {
        self.items.first().map(|d| d.target_page)
    }

    /// Last page number in the window
    pub fn end(&self) -> Option<u64> {
        self.items.last().map(|d| d.target_page)
    }

    /// The active descriptor, if the current page is inside the window
    pub fn active(&self) -> Option<&LinkDescriptor> {
        self.items.iter().find(|d| d.is_active)
    }

    /// Page numbers in display order
    pub fn pages(&self) -> Vec<u64> {
        self.items.iter().map(|d| d.target_page).collect()
    }

    pub fn as_slice(&self) -> &[LinkDescriptor] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a PageWindow {
    type Item = &'a LinkDescriptor;
    type IntoIter = std::slice::Iter<'a, LinkDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_descriptor() {
        let active = LinkDescriptor::number(4, 4);
        assert!(active.enabled);
        assert!(active.is_active);
        assert_eq!(active.kind, LinkKind::Number);

        let other = LinkDescriptor::number(5, 4);
        assert!(!other.is_active);
    }

    #[test]
    fn test_navigation_descriptor_never_active() {
        let next = LinkDescriptor::navigation(LinkKind::Next, 3, true);
        assert!(!next.is_active);
        assert!(next.kind.is_navigation());
        assert!(!LinkKind::Number.is_navigation());
    }

    #[test]
    fn test_window_from_range() {
        let window = PageWindow::from_range(3, 7, 5);
        assert_eq!(window.pages(), vec![3, 4, 5, 6, 7]);
        assert_eq!(window.start(), Some(3));
        assert_eq!(window.end(), Some(7));
        assert_eq!(window.active().map(|d| d.target_page), Some(5));
    }

    #[test]
    fn test_window_inverted_range_is_empty() {
        let window = PageWindow::from_range(8, 5, 8);
        assert!(window.is_empty());
        assert_eq!(window.start(), None);
        assert!(window.active().is_none());
    }

    #[test]
    fn test_descriptor_serialization() {
        let json = serde_json::to_string(&LinkDescriptor::number(2, 2)).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"number","targetPage":2,"enabled":true,"isActive":true}"#
        );
    }
}
