//! Application state
//!
//! The app owns the router and the one mounted screen. Changing page drops
//! the old screen, which tears down its scope; completions still addressed
//! to it are discarded when they arrive.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use infra_api::SalesClient;

use crate::error::ShellError;
use crate::event::{Completion, Effect, Event, ScreenId};
use crate::forms::{CustomerForm, PolicyForm, SubmitOutcome};
use crate::render;
use crate::router::{Page, Router};
use crate::scope::ComponentScope;
use crate::shell::{Command, HELP};
use crate::views::{CustomerListView, PolicyListView};

/// The mounted component
#[derive(Debug)]
pub enum Screen {
    Home,
    CustomerList(CustomerListView),
    CustomerForm(CustomerForm),
    PolicyList(PolicyListView),
    PolicyForm(PolicyForm),
}

impl Screen {
    fn apply(&mut self, completion: Completion) -> Effect {
        match self {
            Screen::Home => Effect::None,
            Screen::CustomerList(view) => view.apply(completion),
            Screen::CustomerForm(form) => form.apply(completion),
            Screen::PolicyList(view) => view.apply(completion),
            Screen::PolicyForm(form) => form.apply(completion),
        }
    }
}

/// What the shell should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Redraw the current page
    Render,
    /// Print this text
    Text(String),
    Quit,
}

pub struct App {
    client: SalesClient,
    confirmation_delay: Duration,
    router: Router,
    screen: Screen,
    screen_id: ScreenId,
    events: UnboundedSender<Event>,
    inbox: UnboundedReceiver<Event>,
}

impl App {
    /// Creates the app on its initial page and starts that page's fetches
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(client: SalesClient, confirmation_delay: Duration) -> Self {
        let (events, inbox) = mpsc::unbounded_channel();
        let mut app = Self {
            client,
            confirmation_delay,
            router: Router::new(),
            screen: Screen::Home,
            screen_id: 0,
            events,
            inbox,
        };
        app.mount();
        app
    }

    pub fn page(&self) -> &Page {
        self.router.page()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_id(&self) -> ScreenId {
        self.screen_id
    }

    /// Renders the current page
    pub fn render(&self) -> String {
        render::page(self.router.page(), &self.screen)
    }

    /// Runs one shell command
    pub fn execute(&mut self, command: Command) -> Result<Reply, ShellError> {
        let page = self.router.page().id();
        match command {
            Command::Go(link) => {
                self.router.navigate(link);
                self.mount();
                Ok(Reply::Render)
            }
            Command::Edit(row) => {
                let Screen::CustomerList(view) = &self.screen else {
                    return Err(ShellError::not_available("edit", page));
                };
                let customer = view.select(&row)?;
                self.router.edit_customer(customer);
                self.mount();
                Ok(Reply::Render)
            }
            Command::Set { field, value } => {
                match &mut self.screen {
                    Screen::CustomerForm(form) => form.set(&field, &value)?,
                    Screen::PolicyForm(form) => form.set(&field, &value)?,
                    _ => return Err(ShellError::not_available("set", page)),
                }
                Ok(Reply::Render)
            }
            Command::Submit => {
                let outcome = match &mut self.screen {
                    Screen::CustomerForm(form) => form.submit(),
                    Screen::PolicyForm(form) => form.submit(),
                    _ => return Err(ShellError::not_available("submit", page)),
                };
                Ok(match outcome {
                    SubmitOutcome::Busy => Reply::Text("A submit is already in progress.".to_string()),
                    SubmitOutcome::Sent => Reply::Text("Submitting...".to_string()),
                    SubmitOutcome::Invalid(_) => Reply::Render,
                })
            }
            Command::Cancel => {
                if !matches!(self.screen, Screen::CustomerForm(_) | Screen::PolicyForm(_)) {
                    return Err(ShellError::not_available("cancel", page));
                }
                if self.router.cancel() {
                    self.mount();
                }
                Ok(Reply::Render)
            }
            Command::Retry => {
                match &mut self.screen {
                    Screen::CustomerList(view) => view.retry(),
                    Screen::PolicyList(view) => view.retry(),
                    Screen::CustomerForm(form) => form.retry(),
                    Screen::PolicyForm(form) => form.retry(),
                    Screen::Home => return Err(ShellError::not_available("retry", page)),
                }
                Ok(Reply::Render)
            }
            Command::Show => Ok(Reply::Render),
            Command::Help => Ok(Reply::Text(HELP.to_string())),
            Command::Quit => Ok(Reply::Quit),
        }
    }

    /// Waits for the next background completion
    pub async fn next_event(&mut self) -> Option<Event> {
        self.inbox.recv().await
    }

    /// Applies a completion to the screen it belongs to
    ///
    /// Returns false when the screen is gone and the event was dropped.
    pub fn handle(&mut self, event: Event) -> bool {
        if event.screen != self.screen_id {
            debug!(
                event_screen = event.screen,
                current_screen = self.screen_id,
                "Discarding completion for a torn-down screen"
            );
            return false;
        }

        if self.screen.apply(event.completion) == Effect::ActionComplete && self.router.action_complete() {
            self.mount();
        }
        true
    }

    /// Waits for one completion and applies it
    pub async fn step(&mut self) -> Option<bool> {
        let event = self.next_event().await?;
        Some(self.handle(event))
    }

    fn mount(&mut self) {
        self.screen_id += 1;
        let scope = ComponentScope::new(self.screen_id, self.events.clone());
        let client = self.client.clone();
        let delay = self.confirmation_delay;

        let screen = match self.router.page() {
            Page::Home => Screen::Home,
            Page::CustomerList => Screen::CustomerList(CustomerListView::mount(client, scope)),
            Page::AddCustomer => Screen::CustomerForm(CustomerForm::create(client, scope, delay)),
            Page::EditCustomer(customer) => {
                Screen::CustomerForm(CustomerForm::edit(client, scope, delay, customer))
            }
            Page::PolicyList => Screen::PolicyList(PolicyListView::mount(client, scope)),
            Page::AddPolicy => Screen::PolicyForm(PolicyForm::mount(client, scope, delay)),
        };

        info!(page = %self.router.page(), screen = self.screen_id, "Mounted page");
        self.screen = screen;
    }
}
