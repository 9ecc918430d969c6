//! Sales Console
//!
//! A terminal front end for the insurance sales back office: customer and
//! policy lists, the add and edit customer forms, and the add policy form.
//!
//! # Architecture
//!
//! - `router`: the current page as a closed enum with transition methods
//! - `scope`: per-screen cancellation; work outlives nothing it belongs to
//! - `views` and `forms`: the screens, each driven by commands and by
//!   completions of the requests it started
//! - `app`: mounts one screen per page and routes completions to it
//! - `shell`: parses the line commands the binary reads from stdin
//!
//! All network work happens on spawned tasks. Screens never block; they
//! change state when a completion for them arrives.

pub mod config;
pub mod error;
pub mod event;
pub mod scope;
pub mod router;
pub mod views;
pub mod forms;
pub mod render;
pub mod shell;
pub mod app;

pub use app::{App, Reply, Screen};
pub use config::ConsoleConfig;
pub use error::ShellError;
pub use event::{Completion, Effect, Event, PolicyFormData, ScreenId};
pub use forms::{FormStatus, SubmitOutcome};
pub use router::{NavLink, Page, Router};
pub use scope::ComponentScope;
pub use shell::Command;
pub use views::ListState;
