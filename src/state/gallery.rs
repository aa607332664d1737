use crate::api::listing::ImageRecord;

/// Whether a page request is currently outstanding.
///
/// There is exactly one logical fetch at a time: scroll events that arrive
/// while `Fetching` are dropped, not queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Fetching,
}

/// The gallery view-model: accumulated records plus pagination state.
///
/// All mutation goes through the operations below. `records` is append-only
/// and never reordered, so positional indices stay valid for the lifetime of
/// the view and can be used as tile identity.
#[derive(Debug)]
pub struct GalleryState {
    records: Vec<ImageRecord>,
    /// 1-based page number of the next request
    cursor: u32,
    fetch: FetchState,
}

impl GalleryState {
    pub fn new() -> Self {
        GalleryState {
            records: Vec::new(),
            cursor: 1,
            fetch: FetchState::Idle,
        }
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch == FetchState::Fetching
    }

    /// Start the very first fetch without advancing the cursor.
    ///
    /// Returns the page number to request, or `None` if a fetch is already
    /// outstanding.
    pub fn initial_fetch(&mut self) -> Option<u32> {
        if self.fetch == FetchState::Fetching {
            return None;
        }

        self.fetch = FetchState::Fetching;
        Some(self.cursor)
    }

    /// React to a sentinel visibility check.
    ///
    /// Advances the cursor by exactly 1 and starts a fetch when the sentinel
    /// is fully visible and no fetch is outstanding. In every other case the
    /// event is ignored. Returns the page number to request, if any.
    pub fn on_sentinel(&mut self, fully_visible: bool) -> Option<u32> {
        if !fully_visible || self.fetch == FetchState::Fetching {
            return None;
        }

        self.cursor += 1;
        self.fetch = FetchState::Fetching;
        Some(self.cursor)
    }

    /// A fetch came back with a page of records.
    ///
    /// Appends them in order, then clears the in-flight state last.
    pub fn complete_fetch(&mut self, page: Vec<ImageRecord>) {
        self.records.extend(page);
        self.fetch = FetchState::Idle;
    }

    /// A fetch failed. Records are left untouched; the in-flight state is
    /// cleared so later scroll events can trigger another attempt.
    pub fn fail_fetch(&mut self) {
        self.fetch = FetchState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ImageRecord {
        ImageRecord {
            id: id.to_string(),
            author: format!("Author {}", id),
            url: format!("https://unsplash.com/photos/{}", id),
            download_url: format!("https://picsum.photos/id/{}/5000/3333", id),
        }
    }

    fn page_of(count: usize, offset: usize) -> Vec<ImageRecord> {
        (0..count).map(|i| record(&(offset + i).to_string())).collect()
    }

    #[test]
    fn starts_at_page_one_idle_and_empty() {
        let state = GalleryState::new();
        assert_eq!(state.cursor(), 1);
        assert!(!state.is_fetching());
        assert!(state.records().is_empty());
    }

    #[test]
    fn initial_fetch_requests_page_one_without_advancing() {
        let mut state = GalleryState::new();
        assert_eq!(state.initial_fetch(), Some(1));
        assert_eq!(state.cursor(), 1);
        assert!(state.is_fetching());
    }

    #[test]
    fn no_second_fetch_while_one_is_outstanding() {
        let mut state = GalleryState::new();
        assert_eq!(state.initial_fetch(), Some(1));

        // Neither trigger path may start another request mid-flight
        assert_eq!(state.initial_fetch(), None);
        assert_eq!(state.on_sentinel(true), None);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn successful_fetch_appends_a_full_page_and_clears_the_flag() {
        let mut state = GalleryState::new();
        state.initial_fetch();
        state.complete_fetch(page_of(30, 0));

        assert_eq!(state.len(), 30);
        assert!(!state.is_fetching());
    }

    #[test]
    fn failed_fetch_leaves_records_unchanged_and_does_not_stick() {
        let mut state = GalleryState::new();
        state.initial_fetch();
        state.complete_fetch(page_of(30, 0));

        state.on_sentinel(true);
        state.fail_fetch();

        assert_eq!(state.len(), 30);
        assert!(!state.is_fetching());

        // A later scroll can still recover with a fresh attempt
        assert_eq!(state.on_sentinel(true), Some(3));
    }

    #[test]
    fn sentinel_while_fetching_does_not_advance_the_cursor() {
        let mut state = GalleryState::new();
        state.initial_fetch();

        assert_eq!(state.on_sentinel(true), None);
        assert_eq!(state.on_sentinel(true), None);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn sentinel_while_idle_advances_by_exactly_one() {
        let mut state = GalleryState::new();
        state.initial_fetch();
        state.complete_fetch(page_of(30, 0));

        assert_eq!(state.on_sentinel(true), Some(2));
        assert_eq!(state.cursor(), 2);
        assert!(state.is_fetching());
    }

    #[test]
    fn sentinel_not_fully_visible_is_ignored() {
        let mut state = GalleryState::new();
        state.initial_fetch();
        state.complete_fetch(page_of(30, 0));

        assert_eq!(state.on_sentinel(false), None);
        assert_eq!(state.cursor(), 1);
        assert!(!state.is_fetching());
    }

    #[test]
    fn pages_accumulate_in_fetch_order() {
        let mut state = GalleryState::new();
        state.initial_fetch();
        state.complete_fetch(page_of(30, 0));
        state.on_sentinel(true);
        state.complete_fetch(page_of(30, 30));
        state.on_sentinel(true);
        state.complete_fetch(page_of(17, 60));

        assert_eq!(state.len(), 77);
        assert_eq!(state.cursor(), 3);

        let ids: Vec<&str> = state.records().iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<String> = (0..77).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
