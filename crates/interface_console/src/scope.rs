//! Component lifetime scopes
//!
//! Each mounted screen owns a `ComponentScope`. Work started through the
//! scope runs on its own task and reports back over the app's event
//! channel. Dropping the scope cancels its token: pending work is
//! abandoned and nothing is delivered.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::event::{Completion, Event, ScreenId};

pub struct ComponentScope {
    screen: ScreenId,
    token: CancellationToken,
    events: UnboundedSender<Event>,
}

impl ComponentScope {
    pub fn new(screen: ScreenId, events: UnboundedSender<Event>) -> Self {
        Self {
            screen,
            token: CancellationToken::new(),
            events,
        }
    }

    pub fn screen(&self) -> ScreenId {
        self.screen
    }

    /// Returns false once the owning screen has been torn down
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Runs `fut` until it finishes or the scope is torn down
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        guarded(&self.token, fut).await
    }

    /// Runs `fut` in the background and delivers `wrap(output)` to the
    /// owning screen, unless the scope is torn down first
    pub fn spawn<F, T, W>(&self, fut: F, wrap: W)
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
        W: FnOnce(T) -> Completion + Send + 'static,
    {
        let token = self.token.clone();
        let events = self.events.clone();
        let screen = self.screen;

        tokio::spawn(async move {
            match guarded(&token, fut).await {
                Some(output) => {
                    let event = Event {
                        screen,
                        completion: wrap(output),
                    };
                    if events.send(event).is_err() {
                        debug!(screen, "Event channel closed, dropping completion");
                    }
                }
                None => debug!(screen, "Screen torn down, abandoning request"),
            }
        });
    }

    /// Delivers `ConfirmationElapsed` after `delay`
    pub fn after(&self, delay: Duration) {
        self.spawn(tokio::time::sleep(delay), |_| Completion::ConfirmationElapsed);
    }

    /// Cancels all pending work
    pub fn teardown(&self) {
        self.token.cancel();
    }
}

impl Drop for ComponentScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

impl std::fmt::Debug for ComponentScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentScope")
            .field("screen", &self.screen)
            .field("active", &self.is_active())
            .finish()
    }
}

async fn guarded<F: Future>(token: &CancellationToken, fut: F) -> Option<F::Output> {
    tokio::select! {
        biased;
        _ = token.cancelled() => None,
        output = fut => Some(output),
    }
}
