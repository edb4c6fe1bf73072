//! Account diff list state

use code_diff_client::{DiffPage, DiffResource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagementState {
    pub page: u32,
    pub query: String,
    pub data: Option<DiffPage>,
    pub selected: usize,
    pub loading: bool,
    /// The last load was rejected for lack of a valid bearer token
    pub permission_denied: bool,
}

impl Default for ManagementState {
    fn default() -> Self {
        Self {
            page: 1,
            query: String::new(),
            data: None,
            selected: 0,
            loading: false,
            permission_denied: false,
        }
    }
}

impl ManagementState {
    pub fn rows(&self) -> &[DiffResource] {
        self.data.as_ref().map(|d| d.results.as_slice()).unwrap_or(&[])
    }

    pub fn selected_diff(&self) -> Option<&DiffResource> {
        self.rows().get(self.selected)
    }

    pub fn has_next(&self) -> bool {
        self.data.as_ref().is_some_and(|d| d.next.is_some())
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1 && self.data.as_ref().is_some_and(|d| d.previous.is_some())
    }

    /// Query to send, `None` when blank
    pub fn query_param(&self) -> Option<&str> {
        let query = self.query.trim();
        (!query.is_empty()).then_some(query)
    }
}
