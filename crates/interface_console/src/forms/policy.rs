//! Policy create form

use std::time::Duration;

use tracing::{debug, info, warn};

use domain_policy::PolicyDraft;
use infra_api::{ClientError, SalesClient};

use super::{FormStatus, SubmitOutcome};
use crate::error::ShellError;
use crate::event::{Completion, Effect, PolicyFormData};
use crate::scope::ComponentScope;

#[derive(Debug)]
pub struct PolicyForm {
    client: SalesClient,
    scope: ComponentScope,
    draft: PolicyDraft,
    data: Option<PolicyFormData>,
    load_error: Option<String>,
    status: FormStatus,
    confirmation_delay: Duration,
}

impl PolicyForm {
    /// Mounts the form and starts loading its lookup lists
    pub fn mount(client: SalesClient, scope: ComponentScope, confirmation_delay: Duration) -> Self {
        let mut form = Self {
            client,
            scope,
            draft: PolicyDraft::default(),
            data: None,
            load_error: None,
            status: FormStatus::Editing,
            confirmation_delay,
        };
        form.load();
        form
    }

    pub fn draft(&self) -> &PolicyDraft {
        &self.draft
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Customers, coverages and policy types; `None` until loaded
    pub fn data(&self) -> Option<&PolicyFormData> {
        self.data.as_ref()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn set(&mut self, field: &str, value: &str) -> Result<(), ShellError> {
        self.draft
            .set(field, value)
            .map_err(|e| ShellError::Field(e.to_string()))
    }

    /// Validates the draft and sends it
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.status.is_locked() {
            debug!("Policy submit ignored, already in progress");
            return SubmitOutcome::Busy;
        }

        let new = match self.draft.to_new_policy() {
            Ok(new) => new,
            Err(e) => {
                let message = e.to_string();
                debug!(%message, "Policy draft rejected before sending");
                self.status = FormStatus::Rejected(message.clone());
                return SubmitOutcome::Invalid(message);
            }
        };

        info!(customer_id = %new.customer_id, premium = %new.premium, "Submitting new policy");
        let client = self.client.clone();
        self.scope
            .spawn(async move { client.create_policy(&new).await }, Completion::PolicyCreated);
        self.status = FormStatus::Submitting;
        SubmitOutcome::Sent
    }

    /// Reloads the lookup lists after a failure
    pub fn retry(&mut self) {
        if self.load_error.is_some() {
            self.load();
        }
    }

    pub fn apply(&mut self, completion: Completion) -> Effect {
        match completion {
            Completion::PolicyFormData(Ok(data)) => {
                debug!(
                    customers = data.customers.len(),
                    coverages = data.coverages.len(),
                    policy_types = data.policy_types.len(),
                    "Policy form data loaded"
                );
                self.data = Some(data);
            }
            Completion::PolicyFormData(Err(e)) => {
                warn!(error = %e, "Policy form data failed to load");
                self.load_error = Some(format!("Failed to load form data: {}", e.user_message()));
            }
            Completion::PolicyCreated(Ok(created)) => {
                let number = created.record.policy_number;
                info!(policy_number = %number, "Policy created");
                self.status = FormStatus::Confirmed(format!(
                    "Policy added successfully! Policy Number: {}",
                    number
                ));
                self.draft.reset();
                self.scope.after(self.confirmation_delay);
            }
            Completion::PolicyCreated(Err(e)) => {
                warn!(error = %e, "Policy creation failed");
                self.status = FormStatus::Rejected(e.user_message());
            }
            Completion::ConfirmationElapsed => {
                if matches!(self.status, FormStatus::Confirmed(_)) {
                    return Effect::ActionComplete;
                }
            }
            other => debug!(?other, "Policy form ignored completion"),
        }
        Effect::None
    }

    fn load(&mut self) {
        self.data = None;
        self.load_error = None;
        let client = self.client.clone();
        self.scope.spawn(
            async move {
                let (customers, coverages, policy_types) = tokio::try_join!(
                    client.list_customers(),
                    client.list_coverages(),
                    client.list_policy_types(),
                )?;
                Ok::<_, ClientError>(PolicyFormData {
                    customers,
                    coverages,
                    policy_types,
                })
            },
            Completion::PolicyFormData,
        );
    }
}
