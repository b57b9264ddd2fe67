//! Catalog state: the active filter result and the "show more" page cursor.
//!
//! [`CatalogState`] owns the full book list, the lookup tables, the current
//! matches and a 1-based page cursor. Its transitions return plain data
//! (slices of books and remaining counts) and never touch a renderer.
//!
//! # Invariants
//!
//! - `page >= 1`, and `page` is reset to 1 whenever `matches` changes.
//! - `visible_count == min(page * page_size, matches.len())`.
//! - `remaining == matches.len().saturating_sub(page * page_size)`.
//!
//! # Example
//!
//! ```rust
//! use bookconnect::app::CatalogState;
//! use bookconnect::domain::{FilterSpec, LookupTable};
//!
//! let authors = LookupTable::from([("a1".to_string(), "Ada".to_string())]);
//! let genres = LookupTable::from([("g1".to_string(), "Fiction".to_string())]);
//! let mut state = CatalogState::new(vec![], authors, genres, 10)?;
//!
//! let result = state.apply_filter(&FilterSpec::any().with_title("war"));
//! assert!(result.is_empty());
//! assert_eq!(state.remaining(), 0);
//! # Ok::<(), bookconnect::BookConnectError>(())
//! ```

use crate::domain::error::{BookConnectError, Result};
use crate::domain::filter::{matches_filter, FilterSpec};
use crate::domain::{Book, LookupTable};

/// Outcome of [`CatalogState::apply_filter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    /// Number of books matching the filter.
    pub total: usize,
    /// `matches[0..page_size]`, to replace the visible list with.
    pub first_page: Vec<Book>,
    /// Matches not yet revealed after the first page.
    pub remaining: usize,
}

impl FilterResult {
    /// Returns `true` when nothing matched; the caller shows the empty-state message.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Outcome of [`CatalogState::advance_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// Books to append to the visible list. Empty once every match is shown.
    pub items: Vec<Book>,
    /// Matches not yet revealed after this page.
    pub remaining: usize,
}

/// Filtered, paginated view over an immutable book catalog.
#[derive(Debug, Clone)]
pub struct CatalogState {
    all_items: Vec<Book>,
    authors: LookupTable,
    genres: LookupTable,
    page_size: usize,
    matches: Vec<Book>,
    page: usize,
}

impl CatalogState {
    /// Creates the catalog state with every book matching and the cursor on page 1.
    ///
    /// # Errors
    ///
    /// Returns [`BookConnectError::Config`] when `page_size` is zero, or when the
    /// catalog has books but its author or genre table is missing (empty).
    pub fn new(
        all_items: Vec<Book>,
        authors: LookupTable,
        genres: LookupTable,
        page_size: usize,
    ) -> Result<Self> {
        if page_size == 0 {
            return Err(BookConnectError::Config(
                "page size must be greater than zero".to_string(),
            ));
        }
        if !all_items.is_empty() && authors.is_empty() {
            return Err(BookConnectError::Config("author table is missing".to_string()));
        }
        if !all_items.is_empty() && genres.is_empty() {
            return Err(BookConnectError::Config("genre table is missing".to_string()));
        }

        tracing::debug!(
            total_books = all_items.len(),
            authors = authors.len(),
            genres = genres.len(),
            page_size,
            "catalog state created"
        );

        Ok(Self {
            matches: all_items.clone(),
            all_items,
            authors,
            genres,
            page_size,
            page: 1,
        })
    }

    /// Recomputes the matches for `spec` and resets the cursor to page 1.
    ///
    /// Books keep their catalog order. An empty result is valid.
    pub fn apply_filter(&mut self, spec: &FilterSpec) -> FilterResult {
        let _span = tracing::debug_span!(
            "apply_filter",
            total_books = self.all_items.len(),
            title_len = spec.title.len(),
            author = %spec.author,
            genre = %spec.genre
        )
        .entered();

        self.matches = self
            .all_items
            .iter()
            .filter(|book| matches_filter(book, spec))
            .cloned()
            .collect();
        self.page = 1;

        let result = FilterResult {
            total: self.matches.len(),
            first_page: self.initial_page().to_vec(),
            remaining: self.remaining(),
        };

        tracing::debug!(
            matches = result.total,
            remaining = result.remaining,
            "filter applied"
        );

        result
    }

    /// Returns the next page of matches and advances the cursor.
    ///
    /// The cursor advances even when nothing is left, in which case the
    /// returned slice is empty. Callers should not ask for more once
    /// [`remaining`](Self::remaining) is zero.
    pub fn advance_page(&mut self) -> PageResult {
        let _span = tracing::debug_span!("advance_page", page = self.page).entered();

        let start = self.visible_count();
        let end = self
            .page
            .saturating_add(1)
            .saturating_mul(self.page_size)
            .min(self.matches.len());
        let items = self.matches[start..end].to_vec();

        self.page += 1;

        let remaining = self.remaining();
        tracing::debug!(appended = items.len(), page = self.page, remaining, "page advanced");

        PageResult { items, remaining }
    }

    /// Finds a book by id among all books, including filtered-out ones.
    ///
    /// # Errors
    ///
    /// Returns [`BookConnectError::NotFound`] if no book has the given id.
    pub fn resolve_by_id(&self, id: &str) -> Result<&Book> {
        self.all_items
            .iter()
            .find(|book| book.id == id)
            .ok_or_else(|| BookConnectError::NotFound(id.to_string()))
    }

    /// Number of matches currently revealed: `min(page * page_size, matches)`.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.revealed().min(self.matches.len())
    }

    /// Number of matches not yet revealed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.matches.len().saturating_sub(self.revealed())
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.remaining() > 0
    }

    /// Books the renderer should currently be showing.
    #[must_use]
    pub fn visible(&self) -> &[Book] {
        &self.matches[..self.visible_count()]
    }

    /// The first page of matches, independent of the cursor.
    #[must_use]
    pub fn initial_page(&self) -> &[Book] {
        &self.matches[..self.page_size.min(self.matches.len())]
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn matches(&self) -> &[Book] {
        &self.matches
    }

    #[must_use]
    pub fn all_items(&self) -> &[Book] {
        &self.all_items
    }

    #[must_use]
    pub const fn authors(&self) -> &LookupTable {
        &self.authors
    }

    #[must_use]
    pub const fn genres(&self) -> &LookupTable {
        &self.genres
    }

    fn revealed(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::fixtures::{authors, books, genres};

    fn state(count: usize, page_size: usize) -> CatalogState {
        CatalogState::new(books(count), authors(), genres(), page_size).unwrap()
    }

    fn ids(items: &[Book]) -> Vec<String> {
        items.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn rejects_zero_page_size() {
        let err = CatalogState::new(books(3), authors(), genres(), 0).unwrap_err();
        assert!(matches!(err, BookConnectError::Config(_)));
    }

    #[test]
    fn rejects_missing_lookup_tables() {
        let err = CatalogState::new(books(3), LookupTable::new(), genres(), 10).unwrap_err();
        assert!(matches!(err, BookConnectError::Config(msg) if msg.contains("author")));

        let err = CatalogState::new(books(3), authors(), LookupTable::new(), 10).unwrap_err();
        assert!(matches!(err, BookConnectError::Config(msg) if msg.contains("genre")));
    }

    #[test]
    fn empty_catalog_needs_no_tables() {
        let s = CatalogState::new(vec![], LookupTable::new(), LookupTable::new(), 5).unwrap();
        assert_eq!(s.remaining(), 0);
        assert!(s.visible().is_empty());
    }

    #[test]
    fn starts_with_everything_on_page_one() {
        let s = state(25, 10);
        assert_eq!(s.page(), 1);
        assert_eq!(s.matches().len(), 25);
        assert_eq!(s.visible_count(), 10);
        assert_eq!(s.remaining(), 15);
        assert_eq!(ids(s.initial_page()), ids(&s.all_items()[..10]));
    }

    #[test]
    fn scenario_a_paging_through_25_items() {
        let mut s = state(25, 10);
        let all = s.all_items().to_vec();

        let second = s.advance_page();
        assert_eq!(second.items, all[10..20].to_vec());
        assert_eq!(second.remaining, 5);

        let third = s.advance_page();
        assert_eq!(third.items, all[20..25].to_vec());
        assert_eq!(third.remaining, 0);

        let fourth = s.advance_page();
        assert!(fourth.items.is_empty());
        assert_eq!(fourth.remaining, 0);
        assert_eq!(s.page(), 4);
        assert_eq!(s.visible_count(), 25);
    }

    #[test]
    fn paging_conserves_matches_in_order() {
        for (count, page_size) in [(25, 10), (30, 10), (7, 3), (1, 1), (0, 4)] {
            let mut s = state(count, page_size);
            let mut seen = s.initial_page().to_vec();
            while s.has_more() {
                seen.extend(s.advance_page().items);
            }
            assert_eq!(seen, s.matches().to_vec(), "count={count} page_size={page_size}");
        }
    }

    #[test]
    fn exact_multiple_reaches_zero_remaining() {
        let mut s = state(20, 10);
        assert_eq!(s.advance_page().remaining, 0);
        let extra = s.advance_page();
        assert!(extra.items.is_empty());
        assert_eq!(extra.remaining, 0);
        assert_eq!(s.visible_count(), 20);
    }

    #[test]
    fn empty_matches_advance_is_noop_but_increments() {
        let mut s = state(10, 4);
        s.apply_filter(&FilterSpec::any().with_title("zzz-nonexistent"));
        assert_eq!(s.remaining(), 0);

        let page = s.advance_page();
        assert!(page.items.is_empty());
        assert_eq!(page.remaining, 0);
        assert_eq!(s.page(), 2);
    }

    #[test]
    fn unrestricted_filter_restores_everything() {
        let mut s = state(25, 10);
        s.apply_filter(&FilterSpec::any().with_genre("fiction"));
        s.advance_page();

        let result = s.apply_filter(&FilterSpec::any());
        assert_eq!(s.matches(), s.all_items());
        assert_eq!(s.page(), 1);
        assert_eq!(result.total, 25);
        assert_eq!(result.remaining, 15);
    }

    #[test]
    fn filter_resets_page_cursor() {
        let mut s = state(50, 5);
        s.advance_page();
        s.advance_page();
        assert_eq!(s.page(), 3);

        s.apply_filter(&FilterSpec::any().with_title("Title"));
        assert_eq!(s.page(), 1);
        assert_eq!(s.visible_count(), 5);
    }

    #[test]
    fn scenario_b_genre_filter_fits_one_page() {
        // books 0, 7, 14, 21 are fiction in the fixture; drop one to get three.
        let mut items = books(25);
        items[21].genres = vec!["history".to_string()];
        let mut s = CatalogState::new(items, authors(), genres(), 10).unwrap();
        s.advance_page();

        let result = s.apply_filter(&FilterSpec::any().with_genre("fiction"));
        assert_eq!(result.total, 3);
        assert_eq!(s.page(), 1);
        assert_eq!(ids(&result.first_page), vec!["book-0", "book-7", "book-14"]);
        assert_eq!(result.remaining, 0);
        assert!(!s.has_more());
    }

    #[test]
    fn scenario_c_no_matches() {
        let mut s = state(25, 10);
        let result = s.apply_filter(&FilterSpec::any().with_title("zzz-nonexistent"));
        assert!(result.is_empty());
        assert!(result.first_page.is_empty());
        assert!(s.visible().is_empty());
    }

    #[test]
    fn scenario_d_missing_id_leaves_state_untouched() {
        let mut s = state(25, 10);
        s.advance_page();
        let before_page = s.page();
        let before_matches = s.matches().to_vec();

        let err = s.resolve_by_id("missing-id").unwrap_err();
        assert!(matches!(err, BookConnectError::NotFound(id) if id == "missing-id"));
        assert_eq!(s.page(), before_page);
        assert_eq!(s.matches(), before_matches.as_slice());
    }

    #[test]
    fn resolves_filtered_out_books() {
        let mut s = state(25, 10);
        s.apply_filter(&FilterSpec::any().with_genre("fiction"));
        assert!(s.matches().iter().all(|b| b.id != "book-1"));

        let found = s.resolve_by_id("book-1").unwrap();
        assert_eq!(found.title, "Title 1");
    }
}
