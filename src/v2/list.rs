use serde::{Deserialize, Serialize};

/// A page of a v2 list. Pagination follows the page URLs instead of v1's `starting_after`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct V2ListObject<T> {
    pub data: Vec<T>,
    pub next_page_url: Option<String>,
    pub previous_page_url: Option<String>,
}

impl<T> V2ListObject<T> {
    pub fn has_more(&self) -> bool {
        self.next_page_url.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous_page_url.is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for V2ListObject<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
