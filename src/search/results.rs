use super::client::SearchResult;

/// The displayed result list plus the highlighted entry.
///
/// Pure state: no network or file I/O happens here. The active index defaults
/// to 0 and stays clamped to the list bounds.
#[derive(Debug, Default)]
pub struct ResultList {
    results: Vec<SearchResult>,
    active: usize,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed list and reset the active marker
    pub fn replace(&mut self, results: Vec<SearchResult>) {
        self.results = results;
        self.active = 0;
    }

    /// Empty the list and reset the selection
    pub fn clear(&mut self) {
        self.results.clear();
        self.active = 0;
    }

    /// Move the active marker; no-op if `index` is out of range
    pub fn set_active(&mut self, index: usize) {
        if index < self.results.len() {
            self.active = index;
        }
    }

    pub fn move_up(&mut self) {
        if self.active > 0 {
            self.set_active(self.active - 1);
        }
    }

    pub fn move_down(&mut self) {
        if self.active < self.results.len().saturating_sub(1) {
            self.set_active(self.active + 1);
        }
    }

    /// The highlighted result, if any
    pub fn active_result(&self) -> Option<&SearchResult> {
        self.results.get(self.active)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
