use serde::Serialize;

/// Number of pages shown at each edge and around the current page.
const LEFT_EDGE: usize = 2;
const LEFT_CURRENT: usize = 2;
const RIGHT_CURRENT: usize = 4;
const RIGHT_EDGE: usize = 2;

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Number of pages needed for `total_items`; an empty collection still has one page.
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1)).max(1)
}

/// Keeps a 1-indexed page inside `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Page links for the pagination bar, `None` marks a gap.
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    /// Cuts the requested page out of the complete, already filtered collection.
    /// A page outside `[1, total_pages]` is moved to the nearest bound.
    pub fn from_all(all: Vec<T>, page: usize, per_page: usize) -> Self {
        let total_items = all.len();
        let total_pages = total_pages(total_items, per_page);
        let page = clamp_page(page, total_pages);
        let per_page = per_page.max(1);

        let items = all
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        let pages = get_pages(
            total_pages,
            page,
            LEFT_EDGE,
            LEFT_CURRENT,
            RIGHT_CURRENT,
            RIGHT_EDGE,
        );

        Self {
            items,
            pages,
            page,
            total_pages,
            total_items,
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }

    /// Previous page, never below the first one.
    pub fn previous_page(&self) -> usize {
        self.page.saturating_sub(1).max(1)
    }

    /// Next page, never past the last one.
    pub fn next_page(&self) -> usize {
        (self.page + 1).min(self.total_pages.max(1))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pages: self.pages,
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }
}
