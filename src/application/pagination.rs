//! Page-number pagination for listings.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub total_pages: usize,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
    pub pages: Vec<PageLink>,
    items: Range<usize>,
}

impl PageWindow {
    /// Clamps `requested` into `1..=max(total_pages, 1)` and builds links with `href`.
    pub fn new(
        requested: usize,
        total_items: usize,
        per_page: usize,
        href: impl Fn(usize) -> String,
    ) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total_items.div_ceil(per_page);
        let page = requested.clamp(1, total_pages.max(1));

        let start = (page - 1) * per_page;
        let end = (start + per_page).min(total_items);

        let pages = (1..=total_pages)
            .map(|number| PageLink {
                number,
                href: href(number),
                current: number == page,
            })
            .collect();

        Self {
            page,
            total_pages,
            previous_href: (page > 1).then(|| href(page - 1)),
            next_href: (page < total_pages).then(|| href(page + 1)),
            pages,
            items: start.min(end)..end,
        }
    }

    /// Pagination controls are only shown when there is more than one page.
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.items.end.min(items.len());
        let start = self.items.start.min(end);
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn href(page: usize) -> String {
        format!("/blogs?page={page}")
    }

    #[test]
    fn slices_the_requested_page() {
        let items: Vec<_> = (1..=8).collect();
        let window = PageWindow::new(2, items.len(), 6, href);

        assert_eq!(window.total_pages, 2);
        assert_eq!(window.slice(&items), &[7, 8]);
        assert_eq!(window.previous_href.as_deref(), Some("/blogs?page=1"));
        assert_eq!(window.next_href, None);
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let items: Vec<_> = (1..=8).collect();

        let high = PageWindow::new(9, items.len(), 6, href);
        assert_eq!(high.page, 2);

        let low = PageWindow::new(0, items.len(), 6, href);
        assert_eq!(low.page, 1);
        assert_eq!(low.previous_href, None);
        assert_eq!(low.next_href.as_deref(), Some("/blogs?page=2"));
    }

    #[test]
    fn empty_listing_has_a_single_empty_page() {
        let items: Vec<u8> = Vec::new();
        let window = PageWindow::new(3, 0, 6, href);

        assert_eq!(window.page, 1);
        assert_eq!(window.total_pages, 0);
        assert!(window.slice(&items).is_empty());
        assert!(!window.is_paginated());
        assert!(window.pages.is_empty());
    }

    #[test]
    fn exactly_one_full_page_is_not_paginated() {
        let window = PageWindow::new(1, 6, 6, href);
        assert_eq!(window.total_pages, 1);
        assert!(!window.is_paginated());
        assert_eq!(window.pages.len(), 1);
        assert!(window.pages[0].current);
    }
}
