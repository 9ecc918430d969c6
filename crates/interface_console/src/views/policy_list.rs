//! Policy list

use tracing::{debug, info};

use domain_policy::Policy;
use infra_api::SalesClient;

use super::ListState;
use crate::event::{Completion, Effect};
use crate::scope::ComponentScope;

pub const EMPTY_MESSAGE: &str = "No policies found.";

#[derive(Debug)]
pub struct PolicyListView {
    client: SalesClient,
    scope: ComponentScope,
    state: ListState<Policy>,
}

impl PolicyListView {
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

    pub fn state(&self) -> &ListState<Policy> {
        &self.state
    }

    pub fn retry(&mut self) {
        info!("Retrying policy list fetch");
        self.fetch();
    }

    pub fn apply(&mut self, completion: Completion) -> Effect {
        if let Completion::Policies(result) = completion {
            self.state = ListState::from_result(result);
            debug!(rows = self.state.rows().len(), "Policy list updated");
        }
        Effect::None
    }

    fn fetch(&mut self) {
        self.state = ListState::Loading;
        let client = self.client.clone();
        self.scope
            .spawn(async move { client.list_policies().await }, Completion::Policies);
    }
}
