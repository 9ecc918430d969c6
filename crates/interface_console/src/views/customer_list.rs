//! Customer list

use tracing::{debug, info};

use domain_customer::Customer;
use infra_api::SalesClient;

use super::ListState;
use crate::error::ShellError;
use crate::event::{Completion, Effect};
use crate::scope::ComponentScope;

pub const EMPTY_MESSAGE: &str = "No customers found.";

#[derive(Debug)]
pub struct CustomerListView {
    client: SalesClient,
    scope: ComponentScope,
    state: ListState<Customer>,
}

impl CustomerListView {
    /// Mounts the view and starts fetching
    pub fn mount(client: SalesClient, scope: ComponentScope) -> Self {
        let mut view = Self {
            client,
            scope,
            state: ListState::Loading,
        };
        view.fetch();
        view
    }

    pub fn state(&self) -> &ListState<Customer> {
        &self.state
    }

    /// Re-issues the fetch
    pub fn retry(&mut self) {
        info!("Retrying customer list fetch");
        self.fetch();
    }

    /// Returns the customer on 1-based row `row`
    pub fn select(&self, row: &str) -> Result<Customer, ShellError> {
        row.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.state.rows().get(i))
            .cloned()
            .ok_or_else(|| ShellError::NoSuchRow(row.trim().to_string()))
    }

    pub fn apply(&mut self, completion: Completion) -> Effect {
        match completion {
            Completion::Customers(result) => {
                self.state = ListState::from_result(result);
                debug!(rows = self.state.rows().len(), "Customer list updated");
            }
            other => debug!(?other, "Customer list ignored completion"),
        }
        Effect::None
    }

    fn fetch(&mut self) {
        self.state = ListState::Loading;
        let client = self.client.clone();
        self.scope
            .spawn(async move { client.list_customers().await }, Completion::Customers);
    }
}
