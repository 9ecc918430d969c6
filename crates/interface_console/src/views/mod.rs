//! List views

pub mod customer_list;
pub mod policy_list;

pub use customer_list::CustomerListView;
pub use policy_list::PolicyListView;

use infra_api::ClientResult;

/// Fetch state of a list view
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> ListState<T> {
    pub(crate) fn from_result(result: ClientResult<Vec<T>>) -> Self {
        match result {
            Ok(rows) => ListState::Loaded(rows),
            Err(e) => ListState::Failed(e.user_message()),
        }
    }

    pub fn rows(&self) -> &[T] {
        match self {
            ListState::Loaded(rows) => rows,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }
}
