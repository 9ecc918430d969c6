//! End-to-end console flows against a recording mock backend

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::sync::Notify;

use infra_api::{HttpMethod, MockTransport, SalesClient, TransportError, NO_RESPONSE_MESSAGE};
use interface_console::forms::customer::{CITIES_ERROR, UPDATED_MESSAGE};
use interface_console::{
    App, Command, Completion, Event, FormStatus, ListState, NavLink, Page, Reply, Screen,
    ShellError,
};
use test_utils::{CatalogFixtures, CustomerFixtures, ResponseFixtures, TestPolicyBuilder};

fn app_with(mock: MockTransport) -> (App, Arc<MockTransport>) {
    let mock = Arc::new(mock);
    let app = App::new(SalesClient::new(mock.clone()), Duration::ZERO);
    (app, mock)
}

async fn step(app: &mut App) -> bool {
    tokio::time::timeout(Duration::from_secs(5), app.step())
        .await
        .expect("no completion arrived")
        .expect("event channel closed")
}

async fn wait_for_requests(mock: &MockTransport, count: usize) {
    for _ in 0..1000 {
        if mock.request_count() >= count {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("expected {} requests, saw {}", count, mock.request_count());
}

fn run(app: &mut App, line: &str) -> Result<Reply, ShellError> {
    let command = Command::parse(line)?.expect("non-blank command");
    app.execute(command)
}

fn fill(app: &mut App, fields: &[(&str, &str)]) {
    for (field, value) in fields {
        run(app, &format!("set {} {}", field, value)).unwrap();
    }
}

const ASHA_FIELDS: [(&str, &str); 9] = [
    ("firstName", "Asha"),
    ("lastName", "Raman"),
    ("gender", "F"),
    ("dob", "1990-04-12"),
    ("mobileNumber", "9876543210"),
    ("cityId", "1"),
    ("stateId", "1"),
    ("countryId", "1"),
    ("occupationId", "1"),
];

fn customer_rows(app: &App) -> &ListState<domain_customer::Customer> {
    match app.screen() {
        Screen::CustomerList(view) => view.state(),
        other => panic!("expected customer list, got {:?}", other),
    }
}

fn customer_form_status(app: &App) -> &FormStatus {
    match app.screen() {
        Screen::CustomerForm(form) => form.status(),
        other => panic!("expected customer form, got {:?}", other),
    }
}

fn policy_form_status(app: &App) -> &FormStatus {
    match app.screen() {
        Screen::PolicyForm(form) => form.status(),
        other => panic!("expected policy form, got {:?}", other),
    }
}

fn empty_customer_list() -> serde_json::Value {
    ResponseFixtures::wrapped_customer_list(&[])
}

#[tokio::test]
async fn test_starts_on_customer_list_and_loads() {
    let asha = CustomerFixtures::asha();
    let liam = CustomerFixtures::liam();
    let (mut app, mock) = app_with(
        MockTransport::new().with_json(200, ResponseFixtures::wrapped_customer_list(&[asha.clone(), liam.clone()])),
    );

    assert_eq!(app.page(), &Page::CustomerList);
    assert!(customer_rows(&app).is_loading());

    assert!(step(&mut app).await);

    assert_eq!(customer_rows(&app), &ListState::Loaded(vec![asha, liam]));
    assert_eq!(mock.requests()[0].path, "/api/customers");
    let page = app.render();
    assert!(page.contains("Asha"));
    assert!(page.contains("Walsh"));
}

#[tokio::test]
async fn test_list_failure_then_manual_retry() {
    let (mut app, mock) = app_with(
        MockTransport::new()
            .with_failure(TransportError::NoResponse {
                url: "/api/customers".into(),
                message: "connection refused".into(),
            })
            .with_json(200, empty_customer_list()),
    );

    step(&mut app).await;
    assert_eq!(customer_rows(&app), &ListState::Failed(NO_RESPONSE_MESSAGE.to_string()));
    assert!(app.render().contains(NO_RESPONSE_MESSAGE));

    run(&mut app, "retry").unwrap();
    assert!(customer_rows(&app).is_loading());
    step(&mut app).await;

    assert_eq!(customer_rows(&app), &ListState::Loaded(vec![]));
    assert!(app.render().contains("No customers found."));
    assert_eq!(mock.request_count(), 2);
}

#[tokio::test]
async fn test_add_customer_with_blank_mobile_sends_nothing() {
    let (mut app, mock) = app_with(
        MockTransport::new()
            .with_json(200, empty_customer_list())
            .with_json(200, ResponseFixtures::city_list(&CatalogFixtures::cities())),
    );
    step(&mut app).await;

    run(&mut app, "go add-customer").unwrap();
    step(&mut app).await;
    fill(&mut app, &ASHA_FIELDS);
    run(&mut app, "set mobileNumber").unwrap();
    let before = mock.request_count();

    let reply = run(&mut app, "submit").unwrap();

    assert_eq!(reply, Reply::Render);
    assert_eq!(mock.request_count(), before);
    assert_eq!(
        customer_form_status(&app),
        &FormStatus::Rejected("Please fill in all required fields.".to_string())
    );
    assert!(app.render().contains("Please fill in all required fields."));
    assert_eq!(app.page(), &Page::AddCustomer);
}

#[tokio::test]
async fn test_add_customer_success_returns_to_list() {
    let asha = CustomerFixtures::asha();
    let (mut app, mock) = app_with(
        MockTransport::new()
            .with_json(200, empty_customer_list())
            .with_json(200, ResponseFixtures::city_list(&CatalogFixtures::cities()))
            .with_json(201, ResponseFixtures::messaged("Customer created", "customerDTO", json!(asha)))
            .with_json(200, ResponseFixtures::wrapped_customer_list(&[asha.clone()])),
    );
    step(&mut app).await;
    run(&mut app, "go add-customer").unwrap();
    step(&mut app).await;
    fill(&mut app, &ASHA_FIELDS);

    assert_eq!(run(&mut app, "submit").unwrap(), Reply::Text("Submitting...".into()));
    assert_eq!(
        run(&mut app, "submit").unwrap(),
        Reply::Text("A submit is already in progress.".into())
    );

    step(&mut app).await;
    assert_eq!(
        customer_form_status(&app),
        &FormStatus::Confirmed("Customer created".to_string())
    );

    // Confirmation delay elapses, then the list is mounted and fetched
    step(&mut app).await;
    assert_eq!(app.page(), &Page::CustomerList);
    step(&mut app).await;
    assert_eq!(customer_rows(&app), &ListState::Loaded(vec![asha]));

    let post = &mock.requests()[2];
    assert_eq!(post.method, HttpMethod::Post);
    assert_eq!(post.path, "/api/customers");
    let body = post.body.as_ref().unwrap();
    assert_eq!(body["mobileNumber"], "9876543210");
    assert_eq!(body["gender"], "F");
    assert!(body.get("customerId").is_none());
}

#[tokio::test]
async fn test_add_customer_business_failure_stays_on_form() {
    let (mut app, mock) = app_with(
        MockTransport::new()
            .with_json(200, empty_customer_list())
            .with_json(200, ResponseFixtures::city_list(&CatalogFixtures::cities()))
            .with_json(200, ResponseFixtures::failure("Mobile number already registered")),
    );
    step(&mut app).await;
    run(&mut app, "go add-customer").unwrap();
    step(&mut app).await;
    fill(&mut app, &ASHA_FIELDS);

    run(&mut app, "submit").unwrap();
    step(&mut app).await;

    assert_eq!(app.page(), &Page::AddCustomer);
    assert_eq!(
        customer_form_status(&app),
        &FormStatus::Rejected("Mobile number already registered".to_string())
    );

    // Not locked after a failure
    assert_eq!(run(&mut app, "submit").unwrap(), Reply::Text("Submitting...".into()));
    wait_for_requests(&mock, 4).await;
}

#[tokio::test]
async fn test_city_failure_leaves_form_usable() {
    let (mut app, _mock) = app_with(
        MockTransport::new()
            .with_json(200, empty_customer_list())
            .with_text(500, "Internal Server Error"),
    );
    step(&mut app).await;
    run(&mut app, "go add-customer").unwrap();
    step(&mut app).await;

    match app.screen() {
        Screen::CustomerForm(form) => {
            assert_eq!(form.cities_error(), Some(CITIES_ERROR));
            assert_eq!(form.states().len(), 8);
        }
        other => panic!("expected customer form, got {:?}", other),
    }
    run(&mut app, "set firstName Asha").unwrap();
    assert!(app.render().contains(CITIES_ERROR));
}

#[tokio::test]
async fn test_edit_customer_from_list_row() {
    let asha = CustomerFixtures::asha();
    let mut updated = asha.clone();
    updated.mobile_number = "9000000001".to_string();

    let (mut app, mock) = app_with(
        MockTransport::new()
            .with_json(200, ResponseFixtures::wrapped_customer_list(&[asha.clone()]))
            .with_json(200, ResponseFixtures::city_list(&CatalogFixtures::cities()))
            .with_json(200, ResponseFixtures::wrapped_customer(&updated)),
    );
    step(&mut app).await;

    assert_eq!(run(&mut app, "edit 2"), Err(ShellError::NoSuchRow("2".into())));
    run(&mut app, "edit 1").unwrap();
    assert_eq!(app.page(), &Page::EditCustomer(asha));
    step(&mut app).await;

    run(&mut app, "set mobileNumber 9000000001").unwrap();
    run(&mut app, "submit").unwrap();
    step(&mut app).await;

    assert_eq!(
        customer_form_status(&app),
        &FormStatus::Confirmed(UPDATED_MESSAGE.to_string())
    );
    let put = &mock.requests()[2];
    assert_eq!(put.method, HttpMethod::Put);
    assert_eq!(put.path, "/api/customers/3");
    let body = put.body.as_ref().unwrap();
    assert_eq!(body["customerId"], 3);
    assert_eq!(body["mobileNumber"], "9000000001");
}

#[tokio::test]
async fn test_cancel_edit_returns_to_list() {
    let (mut app, _mock) = app_with(
        MockTransport::new()
            .with_json(200, ResponseFixtures::wrapped_customer_list(&[CustomerFixtures::liam()]))
            .with_json(200, ResponseFixtures::city_list(&[]))
            .with_json(200, empty_customer_list()),
    );
    step(&mut app).await;
    run(&mut app, "edit 1").unwrap();

    run(&mut app, "cancel").unwrap();

    assert_eq!(app.page(), &Page::CustomerList);
}

#[tokio::test]
async fn test_add_policy_validates_then_creates() {
    let created = TestPolicyBuilder::new().with_id(9).with_number("PN-9").build();
    let (mut app, mock) = app_with(
        MockTransport::new()
            .with_json(200, empty_customer_list())
            .with_json(200, ResponseFixtures::wrapped_customer_list(&[CustomerFixtures::asha()]))
            .with_json(200, ResponseFixtures::coverage_list(&CatalogFixtures::coverages()))
            .with_json(200, ResponseFixtures::policy_type_list(&CatalogFixtures::policy_types()))
            .with_json(200, ResponseFixtures::created_policy(&created))
            .with_json(200, ResponseFixtures::policy_list(&[created.clone()])),
    );
    step(&mut app).await;
    run(&mut app, "go add-policy").unwrap();
    step(&mut app).await;

    match app.screen() {
        Screen::PolicyForm(form) => {
            let data = form.data().expect("form data loaded");
            assert_eq!(data.customers.len(), 1);
            assert_eq!(data.coverages.len(), 2);
            assert_eq!(data.policy_types.len(), 2);
        }
        other => panic!("expected policy form, got {:?}", other),
    }

    fill(&mut app, &[("customerId", "3"), ("coverageId", "1"), ("policyTypeId", "2"), ("premium", "0")]);
    let before = mock.request_count();
    run(&mut app, "submit").unwrap();
    assert_eq!(mock.request_count(), before);
    assert!(matches!(policy_form_status(&app), FormStatus::Rejected(_)));

    run(&mut app, "set premium 100").unwrap();
    run(&mut app, "submit").unwrap();
    step(&mut app).await;

    assert_eq!(
        policy_form_status(&app),
        &FormStatus::Confirmed("Policy added successfully! Policy Number: PN-9".to_string())
    );
    match app.screen() {
        Screen::PolicyForm(form) => assert_eq!(form.draft().premium, ""),
        other => panic!("expected policy form, got {:?}", other),
    }
    let body = mock.requests()[4].body.clone().unwrap();
    assert_eq!(body["customerId"], 3);
    assert!(body.get("policyNumber").is_none());

    step(&mut app).await;
    assert_eq!(app.page(), &Page::PolicyList);
    step(&mut app).await;
    assert!(app.render().contains("PN-9"));
}

#[tokio::test]
async fn test_policy_form_load_failure() {
    let (mut app, _mock) = app_with(
        MockTransport::new()
            .with_json(200, empty_customer_list())
            .with_json(200, empty_customer_list())
            .with_json(503, ResponseFixtures::failure("Coverage service down"))
            .with_json(200, ResponseFixtures::policy_type_list(&[])),
    );
    step(&mut app).await;
    run(&mut app, "go add-policy").unwrap();
    step(&mut app).await;

    match app.screen() {
        Screen::PolicyForm(form) => {
            assert_eq!(form.load_error(), Some("Failed to load form data: Coverage service down"));
        }
        other => panic!("expected policy form, got {:?}", other),
    }
}

#[tokio::test]
async fn test_navigation_away_abandons_inflight_request() {
    let gate = Arc::new(Notify::new());
    let (mut app, mock) = app_with(
        MockTransport::new()
            .gated(gate.clone())
            .with_json(200, ResponseFixtures::policy_list(&[])),
    );

    // The customer fetch is waiting on the gate
    wait_for_requests(&mock, 1).await;
    let first_screen = app.screen_id();

    run(&mut app, "go policy-list").unwrap();
    wait_for_requests(&mock, 2).await;
    gate.notify_waiters();

    assert!(step(&mut app).await);
    match app.screen() {
        Screen::PolicyList(view) => assert_eq!(view.state(), &ListState::Loaded(vec![])),
        other => panic!("expected policy list, got {:?}", other),
    }
    assert_ne!(app.screen_id(), first_screen);

    let late = tokio::time::timeout(Duration::from_millis(50), app.next_event()).await;
    assert!(late.is_err(), "torn-down screen delivered a completion");
}

#[tokio::test]
async fn test_stale_completion_is_discarded() {
    let (mut app, _mock) = app_with(
        MockTransport::new()
            .with_json(200, empty_customer_list())
            .with_json(200, empty_customer_list()),
    );
    let old = app.screen_id();
    run(&mut app, "go customer-list").unwrap();

    let handled = app.handle(Event {
        screen: old,
        completion: Completion::Customers(Ok(vec![CustomerFixtures::asha()])),
    });

    assert!(!handled);
    assert!(customer_rows(&app).is_loading());
}

#[tokio::test]
async fn test_commands_outside_their_page() {
    let (mut app, _mock) = app_with(MockTransport::new().with_json(200, empty_customer_list()));
    step(&mut app).await;

    assert_eq!(
        run(&mut app, "submit"),
        Err(ShellError::not_available("submit", "customer-list"))
    );
    run(&mut app, "go home").unwrap();
    assert_eq!(app.page(), &Page::Home);
    assert!(app.render().contains("Welcome to the Insurance Management System!"));
    assert_eq!(run(&mut app, "retry"), Err(ShellError::not_available("retry", "home")));
    assert_eq!(run(&mut app, "quit").unwrap(), Reply::Quit);
    assert!("home".parse::<NavLink>().is_ok());
}
