//! Customer create and edit form

use std::time::Duration;

use tracing::{debug, info, warn};

use core_kernel::{CountryId, CustomerId, OccupationId, StateId};
use domain_customer::{
    City, Customer, CustomerDraft, ReferenceOption, COUNTRIES, OCCUPATIONS, STATES,
};
use infra_api::SalesClient;

use super::{FormStatus, SubmitOutcome};
use crate::error::ShellError;
use crate::event::{Completion, Effect};
use crate::scope::ComponentScope;

pub const CITIES_ERROR: &str = "Error fetching cities. Check backend connection.";
pub const CREATED_MESSAGE: &str = "Customer added successfully!";
pub const UPDATED_MESSAGE: &str = "Customer updated successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerFormMode {
    Create,
    Edit(CustomerId),
}

#[derive(Debug)]
pub struct CustomerForm {
    client: SalesClient,
    scope: ComponentScope,
    mode: CustomerFormMode,
    draft: CustomerDraft,
    cities: Option<Vec<City>>,
    cities_error: Option<String>,
    status: FormStatus,
    confirmation_delay: Duration,
}

impl CustomerForm {
    /// Mounts an empty form for a new customer
    pub fn create(client: SalesClient, scope: ComponentScope, confirmation_delay: Duration) -> Self {
        Self::mount(client, scope, confirmation_delay, CustomerFormMode::Create, CustomerDraft::default())
    }

    /// Mounts a form prefilled from `customer`
    pub fn edit(
        client: SalesClient,
        scope: ComponentScope,
        confirmation_delay: Duration,
        customer: &Customer,
    ) -> Self {
        Self::mount(
            client,
            scope,
            confirmation_delay,
            CustomerFormMode::Edit(customer.customer_id),
            CustomerDraft::from_customer(customer),
        )
    }

    fn mount(
        client: SalesClient,
        scope: ComponentScope,
        confirmation_delay: Duration,
        mode: CustomerFormMode,
        draft: CustomerDraft,
    ) -> Self {
        let mut form = Self {
            client,
            scope,
            mode,
            draft,
            cities: None,
            cities_error: None,
            status: FormStatus::Editing,
            confirmation_delay,
        };
        form.load_cities();
        form
    }

    pub fn mode(&self) -> CustomerFormMode {
        self.mode
    }

    pub fn draft(&self) -> &CustomerDraft {
        &self.draft
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Cities from the backend; `None` until the fetch finishes
    pub fn cities(&self) -> Option<&[City]> {
        self.cities.as_deref()
    }

    pub fn cities_error(&self) -> Option<&str> {
        self.cities_error.as_deref()
    }

    pub fn states(&self) -> &'static [ReferenceOption<StateId>] {
        &STATES
    }

    pub fn countries(&self) -> &'static [ReferenceOption<CountryId>] {
        &COUNTRIES
    }

    pub fn occupations(&self) -> &'static [ReferenceOption<OccupationId>] {
        &OCCUPATIONS
    }

    /// Sets one field of the draft
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), ShellError> {
        self.draft
            .set(field, value)
            .map_err(|e| ShellError::Field(e.to_string()))
    }

    /// Validates the draft and sends it
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.status.is_locked() {
            debug!("Customer submit ignored, already in progress");
            return SubmitOutcome::Busy;
        }

        let client = self.client.clone();
        match self.mode {
            CustomerFormMode::Create => {
                let new = match self.draft.to_new_customer() {
                    Ok(new) => new,
                    Err(e) => return self.reject(e.to_string()),
                };
                info!("Submitting new customer");
                self.scope.spawn(
                    async move {
                        client.create_customer(&new).await.map(|created| {
                            created.message.unwrap_or_else(|| CREATED_MESSAGE.to_string())
                        })
                    },
                    Completion::CustomerSaved,
                );
            }
            CustomerFormMode::Edit(id) => {
                let customer = match self.draft.to_customer(id) {
                    Ok(customer) => customer,
                    Err(e) => return self.reject(e.to_string()),
                };
                info!(customer_id = %id, "Submitting customer update");
                self.scope.spawn(
                    async move {
                        client
                            .update_customer(id, &customer)
                            .await
                            .map(|_| UPDATED_MESSAGE.to_string())
                    },
                    Completion::CustomerSaved,
                );
            }
        }

        self.status = FormStatus::Submitting;
        SubmitOutcome::Sent
    }

    /// Re-fetches the city list after a failure
    pub fn retry(&mut self) {
        if self.cities_error.is_some() {
            self.load_cities();
        }
    }

    pub fn apply(&mut self, completion: Completion) -> Effect {
        match completion {
            Completion::Cities(Ok(cities)) => {
                debug!(count = cities.len(), "Cities loaded");
                self.cities = Some(cities);
                self.cities_error = None;
            }
            Completion::Cities(Err(e)) => {
                warn!(error = %e, "City list failed to load");
                self.cities = Some(Vec::new());
                self.cities_error = Some(CITIES_ERROR.to_string());
            }
            Completion::CustomerSaved(Ok(message)) => {
                info!(%message, "Customer saved");
                self.status = FormStatus::Confirmed(message);
                self.scope.after(self.confirmation_delay);
            }
            Completion::CustomerSaved(Err(e)) => {
                warn!(error = %e, "Customer save failed");
                self.status = FormStatus::Rejected(e.user_message());
            }
            Completion::ConfirmationElapsed => {
                if matches!(self.status, FormStatus::Confirmed(_)) {
                    return Effect::ActionComplete;
                }
            }
            other => debug!(?other, "Customer form ignored completion"),
        }
        Effect::None
    }

    fn reject(&mut self, message: String) -> SubmitOutcome {
        debug!(%message, "Customer draft rejected before sending");
        self.status = FormStatus::Rejected(message.clone());
        SubmitOutcome::Invalid(message)
    }

    fn load_cities(&mut self) {
        self.cities = None;
        self.cities_error = None;
        let client = self.client.clone();
        self.scope
            .spawn(async move { client.list_cities().await }, Completion::Cities);
    }
}
