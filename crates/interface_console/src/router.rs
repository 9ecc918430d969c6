//! Page router
//!
//! The current page is a closed enum. The edit page carries the customer
//! being edited, so there is no way to be on it without one.

use std::fmt;
use std::str::FromStr;

use domain_customer::Customer;

use crate::error::ShellError;

/// The page on screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    Home,
    #[default]
    CustomerList,
    AddCustomer,
    EditCustomer(Customer),
    PolicyList,
    AddPolicy,
}

impl Page {
    /// The page identifier
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::CustomerList => "customer-list",
            Page::AddCustomer => "add-customer",
            Page::EditCustomer(_) => "edit-customer",
            Page::PolicyList => "policy-list",
            Page::AddPolicy => "add-policy",
        }
    }

    /// Where a form's "action complete" leads
    fn after_action(&self) -> Option<Page> {
        match self {
            Page::AddCustomer | Page::EditCustomer(_) => Some(Page::CustomerList),
            Page::AddPolicy => Some(Page::PolicyList),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Navigation bar targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavLink {
    Home,
    CustomerList,
    AddCustomer,
    PolicyList,
    AddPolicy,
}

impl NavLink {
    pub const ALL: [NavLink; 5] = [
        NavLink::Home,
        NavLink::CustomerList,
        NavLink::AddCustomer,
        NavLink::PolicyList,
        NavLink::AddPolicy,
    ];

    pub fn id(&self) -> &'static str {
        self.page().id()
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Home => "Home",
            NavLink::CustomerList => "Customers",
            NavLink::AddCustomer => "Add Customer",
            NavLink::PolicyList => "Policies",
            NavLink::AddPolicy => "Add Policy",
        }
    }

    fn page(&self) -> Page {
        match self {
            NavLink::Home => Page::Home,
            NavLink::CustomerList => Page::CustomerList,
            NavLink::AddCustomer => Page::AddCustomer,
            NavLink::PolicyList => Page::PolicyList,
            NavLink::AddPolicy => Page::AddPolicy,
        }
    }
}

impl FromStr for NavLink {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NavLink::ALL
            .into_iter()
            .find(|link| link.id() == s)
            .ok_or_else(|| ShellError::UnknownPage(s.to_string()))
    }
}

/// Holds the current page and applies transitions
#[derive(Debug, Clone, Default)]
pub struct Router {
    page: Page,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Follows a navigation link
    pub fn navigate(&mut self, link: NavLink) -> &Page {
        self.page = link.page();
        &self.page
    }

    /// Opens the edit page for `customer`
    pub fn edit_customer(&mut self, customer: Customer) -> &Page {
        self.page = Page::EditCustomer(customer);
        &self.page
    }

    /// Leaves a form after a successful submit; other pages stay put
    ///
    /// Returns true when the page changed.
    pub fn action_complete(&mut self) -> bool {
        match self.page.after_action() {
            Some(next) => {
                self.page = next;
                true
            }
            None => false,
        }
    }

    /// Leaves a form without submitting
    pub fn cancel(&mut self) -> bool {
        self.action_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::CustomerFixtures;

    #[test]
    fn test_starts_on_customer_list() {
        assert_eq!(Router::new().page(), &Page::CustomerList);
    }

    #[test]
    fn test_nav_link_ids() {
        assert_eq!("add-policy".parse::<NavLink>().unwrap(), NavLink::AddPolicy);
        assert_eq!(" home ".parse::<NavLink>().unwrap(), NavLink::Home);
        assert!("edit-customer".parse::<NavLink>().is_err());
        assert!("customers".parse::<NavLink>().is_err());
    }

    #[test]
    fn test_edit_carries_customer() {
        let mut router = Router::new();
        let asha = CustomerFixtures::asha();
        router.edit_customer(asha.clone());
        assert_eq!(router.page(), &Page::EditCustomer(asha));
        assert_eq!(router.page().id(), "edit-customer");
    }

    #[test]
    fn test_action_complete_targets() {
        let mut router = Router::new();

        router.navigate(NavLink::AddCustomer);
        assert!(router.action_complete());
        assert_eq!(router.page(), &Page::CustomerList);

        router.edit_customer(CustomerFixtures::liam());
        assert!(router.cancel());
        assert_eq!(router.page(), &Page::CustomerList);

        router.navigate(NavLink::AddPolicy);
        assert!(router.action_complete());
        assert_eq!(router.page(), &Page::PolicyList);
    }

    #[test]
    fn test_action_complete_elsewhere_is_noop() {
        let mut router = Router::new();
        router.navigate(NavLink::Home);
        assert!(!router.action_complete());
        assert_eq!(router.page(), &Page::Home);
    }
}
