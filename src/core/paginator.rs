/// Which way a navigation request moves the page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

/// The window `[page * page_size, (page + 1) * page_size)` of `items`.
/// An out-of-range page yields an empty slice, never an error.
pub fn page_window<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Moves the page index one step, clamping at both ends: a step that would
/// go below zero or start at or past `filtered_len` returns the index
/// unchanged. The last valid page is the first one still holding an item,
/// whether or not it is full.
pub fn navigate(page: usize, direction: Direction, filtered_len: usize, page_size: usize) -> usize {
    match direction {
        Direction::Back => page.checked_sub(1).unwrap_or(page),
        Direction::Forward => {
            let next = page + 1;
            if next.saturating_mul(page_size) >= filtered_len {
                page
            } else {
                next
            }
        }
    }
}

pub fn has_previous(page: usize) -> bool {
    page > 0
}

pub fn has_next(page: usize, filtered_len: usize, page_size: usize) -> bool {
    (page + 1).saturating_mul(page_size) < filtered_len
}
