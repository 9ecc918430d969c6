//! Completions delivered back to the screen that started them

use infra_api::{ClientResult, Created};
use domain_customer::{City, Customer};
use domain_policy::{Coverage, Policy, PolicyType};

/// Identifies one mounted screen; a fresh id is issued on every mount
pub type ScreenId = u64;

/// Lookup lists the policy form loads on mount
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyFormData {
    pub customers: Vec<Customer>,
    pub coverages: Vec<Coverage>,
    pub policy_types: Vec<PolicyType>,
}

/// The result of background work, addressed to a screen
#[derive(Debug)]
pub struct Event {
    pub screen: ScreenId,
    pub completion: Completion,
}

/// What finished
#[derive(Debug)]
pub enum Completion {
    Customers(ClientResult<Vec<Customer>>),
    Policies(ClientResult<Vec<Policy>>),
    Cities(ClientResult<Vec<City>>),
    PolicyFormData(ClientResult<PolicyFormData>),
    /// Carries the confirmation to show
    CustomerSaved(ClientResult<String>),
    PolicyCreated(ClientResult<Created<Policy>>),
    /// The confirmation has been on screen long enough
    ConfirmationElapsed,
}

/// What the app should do after a screen handled a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    ActionComplete,
}
