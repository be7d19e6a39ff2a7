//! Per-page list state: the fetched collection, the search query, the
//! current page, and the modal's open/closed and create-vs-edit flags.
//! The visible rows are always derived, never stored.

use crate::listing;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

pub struct ListView<T> {
    items: Vec<T>,
    query: String,
    page: usize,
    modal: Option<FormMode>,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListView<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            query: String::new(),
            page: 1,
            modal: None,
        }
    }

    /// Replaces the list after a (re-)fetch.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Changing the search resets to the first page.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.page = 1;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// The filtered, paginated rows currently on screen.
    pub fn visible<K>(&self, key: K) -> Vec<&T>
    where
        K: Fn(&T) -> String,
    {
        let filtered = listing::filter_by(&self.items, &self.query, key);
        listing::paginate(&filtered, self.page, PAGE_SIZE).to_vec()
    }

    pub fn open_create(&mut self) {
        self.modal = Some(FormMode::Create);
    }

    pub fn open_edit(&mut self, id: impl Into<String>) {
        self.modal = Some(FormMode::Edit(id.into()));
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn modal(&self) -> Option<&FormMode> {
        self.modal.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ListView<String> {
        let mut view = ListView::new();
        view.set_items((1..=23).map(|i| format!("Client {}", i)).collect());
        view
    }

    #[test]
    fn visible_is_capped_at_page_size() {
        let view = view();
        assert_eq!(view.visible(|s| s.clone()).len(), PAGE_SIZE);
    }

    #[test]
    fn setting_query_resets_the_page() {
        let mut view = view();
        view.set_page(3);
        view.set_query("client 2");
        assert_eq!(view.page(), 1);
        // "Client 2", "Client 20" .. "Client 23"
        assert_eq!(view.visible(|s| s.clone()).len(), 5);
    }

    #[test]
    fn out_of_range_page_shows_nothing() {
        let mut view = view();
        view.set_page(9);
        assert!(view.visible(|s| s.clone()).is_empty());
    }

    #[test]
    fn modal_mode_flags() {
        let mut view = view();
        assert!(view.modal().is_none());
        view.open_create();
        assert_eq!(view.modal(), Some(&FormMode::Create));
        view.open_edit("abc");
        assert_eq!(view.modal(), Some(&FormMode::Edit("abc".into())));
        view.close_modal();
        assert!(view.modal().is_none());
    }
}
