//! Fixed-size pages over a result list

/// Page size used by the line-prompt mode
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A read-only paged view over a slice
///
/// Pages are numbered from 0; [`label`](Self::label) renders the 1-based
/// form shown to users.
///
/// # Examples
/// ```
/// use letterboxed_solver::results::Pages;
///
/// let items: Vec<u32> = (1..=25).collect();
/// let pages = Pages::new(&items, 10);
/// assert_eq!(pages.page_count(), 3);
/// assert_eq!(pages.page(2), &[21, 22, 23, 24, 25]);
/// assert!(pages.page(3).is_empty());
/// assert_eq!(pages.label(0), "1/3");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pages<'a, T> {
    items: &'a [T],
    page_size: usize,
}

impl<'a, T> Pages<'a, T> {
    /// Create a paged view; a zero page size is treated as one
    #[must_use]
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of non-empty pages
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Items on page `index`, or an empty slice past the end
    #[must_use]
    pub fn page(&self, index: usize) -> &'a [T] {
        let start = index.saturating_mul(self.page_size);
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Position of the first item on page `index` within the full list
    #[must_use]
    pub const fn first_item(&self, index: usize) -> usize {
        index.saturating_mul(self.page_size)
    }

    /// Iterate over pages in order
    pub fn iter(&self) -> std::slice::Chunks<'a, T> {
        self.items.chunks(self.page_size)
    }

    /// "current/total" with 1-based numbering; an empty list shows "1/1"
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        format!("{}/{}", index + 1, self.page_count().max(1))
    }
}
