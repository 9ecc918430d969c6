//! Text rendering of pages

use std::fmt::Write;

use domain_customer::{Customer, ReferenceOption, CUSTOMER_FIELDS};
use domain_policy::{Policy, POLICY_FIELDS};

use crate::app::Screen;
use crate::forms::{customer::CustomerFormMode, CustomerForm, FormStatus, PolicyForm};
use crate::router::{NavLink, Page};
use crate::views::{customer_list, policy_list, ListState};

/// Renders the navigation bar and the mounted screen
pub fn page(page: &Page, screen: &Screen) -> String {
    let mut out = nav_bar(page);
    out.push('\n');
    match screen {
        Screen::Home => {
            out.push_str("Welcome to the Insurance Management System!\n");
            out.push_str("Please use the navigation above.\n");
        }
        Screen::CustomerList(view) => customers(&mut out, view.state()),
        Screen::PolicyList(view) => policies(&mut out, view.state()),
        Screen::CustomerForm(form) => customer_form(&mut out, form),
        Screen::PolicyForm(form) => policy_form(&mut out, form),
    }
    out
}

fn nav_bar(page: &Page) -> String {
    NavLink::ALL
        .iter()
        .map(|link| {
            if link.id() == page.id() {
                format!("[{}]", link.label())
            } else {
                link.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn customers(out: &mut String, state: &ListState<Customer>) {
    match state {
        ListState::Loading => out.push_str("Loading customers...\n"),
        ListState::Failed(message) => {
            let _ = writeln!(out, "Error: {}", message);
            out.push_str("Type 'retry' to try again.\n");
        }
        ListState::Loaded(rows) if rows.is_empty() => {
            let _ = writeln!(out, "{}", customer_list::EMPTY_MESSAGE);
        }
        ListState::Loaded(rows) => {
            let header = ["#", "ID", "First Name", "Last Name", "Gender", "DOB", "Mobile", "City"];
            let body = rows
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    vec![
                        (i + 1).to_string(),
                        c.customer_id.to_string(),
                        c.first_name.clone(),
                        c.last_name.clone(),
                        c.gender.label().to_string(),
                        c.dob.to_string(),
                        c.mobile_number.clone(),
                        c.city_name.clone().unwrap_or_else(|| c.city_id.to_string()),
                    ]
                })
                .collect::<Vec<_>>();
            table(out, &header, &body);
        }
    }
}

fn policies(out: &mut String, state: &ListState<Policy>) {
    match state {
        ListState::Loading => out.push_str("Loading policies...\n"),
        ListState::Failed(message) => {
            let _ = writeln!(out, "Error: {}", message);
            out.push_str("Type 'retry' to try again.\n");
        }
        ListState::Loaded(rows) if rows.is_empty() => {
            let _ = writeln!(out, "{}", policy_list::EMPTY_MESSAGE);
        }
        ListState::Loaded(rows) => {
            let header = [
                "ID",
                "Policy No.",
                "Premium",
                "Customer ID",
                "Policy Type ID",
                "Coverage ID",
                "Created Date",
            ];
            let body = rows
                .iter()
                .map(|p| {
                    vec![
                        p.policy_id.to_string(),
                        p.policy_number.clone(),
                        format!("{:.2}", p.premium),
                        p.customer_id.to_string(),
                        p.policy_type_id.to_string(),
                        p.coverage_id.to_string(),
                        p.created_date
                            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_else(|| "N/A".to_string()),
                    ]
                })
                .collect::<Vec<_>>();
            table(out, &header, &body);
        }
    }
}

fn customer_form(out: &mut String, form: &CustomerForm) {
    let title = match form.mode() {
        CustomerFormMode::Create => "Add Customer".to_string(),
        CustomerFormMode::Edit(id) => format!("Edit Customer {}", id),
    };
    let _ = writeln!(out, "{}\n", title);

    for field in CUSTOMER_FIELDS {
        let value = form.draft().get(field).unwrap_or_default();
        let _ = writeln!(out, "  {:<14} {}", field, value);
    }

    out.push_str("\n  gender:       M, F, Other\n");
    match (form.cities(), form.cities_error()) {
        (_, Some(error)) => {
            let _ = writeln!(out, "  cityId:       {}", error);
        }
        (None, None) => out.push_str("  cityId:       loading...\n"),
        (Some(cities), None) => {
            let names = cities
                .iter()
                .map(|c| format!("{}={}", c.city_id, c.city_name))
                .collect::<Vec<_>>();
            let _ = writeln!(out, "  cityId:       {}", names.join(", "));
        }
    }
    options(out, "stateId", form.states());
    options(out, "countryId", form.countries());
    options(out, "occupationId", form.occupations());

    status(out, form.status());
}

fn policy_form(out: &mut String, form: &PolicyForm) {
    out.push_str("Add Policy\n\n");

    for field in POLICY_FIELDS {
        let value = form.draft().get(field).unwrap_or_default();
        let _ = writeln!(out, "  {:<14} {}", field, value);
    }
    out.push('\n');

    if let Some(error) = form.load_error() {
        let _ = writeln!(out, "  {}", error);
    } else if let Some(data) = form.data() {
        let customers = data
            .customers
            .iter()
            .map(|c| format!("{}={}", c.customer_id, c.full_name()))
            .collect::<Vec<_>>();
        let coverages = data
            .coverages
            .iter()
            .map(|c| format!("{}={}", c.coverage_id, c.coverage_name))
            .collect::<Vec<_>>();
        let types = data
            .policy_types
            .iter()
            .map(|t| format!("{}={}", t.type_id, t.type_name))
            .collect::<Vec<_>>();
        let _ = writeln!(out, "  customerId:   {}", customers.join(", "));
        let _ = writeln!(out, "  coverageId:   {}", coverages.join(", "));
        let _ = writeln!(out, "  policyTypeId: {}", types.join(", "));
    } else {
        out.push_str("  Loading form data...\n");
    }

    status(out, form.status());
}

fn options<Id: std::fmt::Display>(out: &mut String, field: &str, list: &[ReferenceOption<Id>]) {
    let names = list
        .iter()
        .map(|o| format!("{}={}", o.id, o.name))
        .collect::<Vec<_>>();
    let _ = writeln!(out, "  {:<13} {}", format!("{}:", field), names.join(", "));
}

fn status(out: &mut String, status: &FormStatus) {
    match status {
        FormStatus::Editing => {}
        FormStatus::Submitting => out.push_str("\nSubmitting...\n"),
        FormStatus::Rejected(message) => {
            let _ = writeln!(out, "\nError: {}", message);
        }
        FormStatus::Confirmed(message) => {
            let _ = writeln!(out, "\n{}", message);
        }
    }
}

fn table(out: &mut String, header: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let _ = writeln!(out, "{}", line(header.to_vec()));
    let _ = writeln!(
        out,
        "{}",
        widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  ")
    );
    for row in rows {
        let _ = writeln!(out, "{}", line(row.iter().map(String::as_str).collect()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_bar_marks_current_page() {
        let bar = nav_bar(&Page::PolicyList);
        assert!(bar.contains("[Policies]"));
        assert!(bar.contains("Customers |"));
    }

    #[test]
    fn test_edit_page_has_no_highlighted_link() {
        let bar = nav_bar(&Page::EditCustomer(test_utils::CustomerFixtures::asha()));
        assert!(!bar.contains('['));
    }

    #[test]
    fn test_table_aligns_columns() {
        let mut out = String::new();
        table(
            &mut out,
            &["ID", "Name"],
            &[vec!["1".into(), "Asha".into()], vec!["10".into(), "Li".into()]],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID  Name");
        assert_eq!(lines[1], "--  ----");
        assert_eq!(lines[2], "1   Asha");
        assert_eq!(lines[3], "10  Li");
    }

    #[test]
    fn test_empty_lists() {
        let mut out = String::new();
        customers(&mut out, &ListState::Loaded(Vec::new()));
        assert_eq!(out.trim(), "No customers found.");

        let mut out = String::new();
        policies(&mut out, &ListState::Failed("boom".into()));
        assert!(out.starts_with("Error: boom"));
    }
}
