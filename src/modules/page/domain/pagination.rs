use std::num::NonZeroUsize;

/// Growing visible prefix of a collection sorted newest first.
///
/// `shown` starts at `min(page_size, total)` and grows by `page_size` per
/// reveal. It may overshoot `total`; everything derived from it is clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedList<T> {
    items: Vec<T>,
    page_size: NonZeroUsize,
    shown: usize,
}

impl<T> PaginatedList<T> {
    /// Sorts `items` by `sort_key` descending. Equal keys keep input order.
    pub fn new<K, F>(mut items: Vec<T>, sort_key: F, page_size: NonZeroUsize) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        items.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
        let shown = page_size.get().min(items.len());
        Self {
            items,
            page_size,
            shown,
        }
    }

    /// Continues from a reveal count recorded earlier.
    ///
    /// Counts below the first page are raised to it; counts past the end
    /// are lowered to `total`.
    pub fn resume_at(mut self, shown: usize) -> Self {
        let first_page = self.page_size.get().min(self.items.len());
        self.shown = shown.clamp(first_page, self.items.len());
        self
    }

    pub fn current_page(&self) -> &[T] {
        &self.items[..self.shown.min(self.items.len())]
    }

    /// Grows the visible prefix by one page. Returns `false` once exhausted.
    pub fn reveal_next(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.shown += self.page_size.get();
        true
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.shown)
    }

    pub fn has_more(&self) -> bool {
        self.shown < self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
