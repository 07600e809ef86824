use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, OptionFuture};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::service::HeroService;
use crate::types::Hero;

/// Type-ahead search over the hero service.
///
/// Terms are debounced, a term equal to the previous search is dropped, and a
/// newer search replaces one still in flight.
pub struct HeroSearch;

/// Feeds terms to a running [`HeroSearch`] and observes its results.
pub struct SearchHandle {
    terms: mpsc::UnboundedSender<String>,
    results: watch::Receiver<Vec<Hero>>,
    task: JoinHandle<()>,
}

impl HeroSearch {
    pub fn spawn(service: HeroService, debounce: Duration) -> SearchHandle {
        let (terms_tx, terms_rx) = mpsc::unbounded_channel();
        let (results_tx, results_rx) = watch::channel(Vec::new());
        let task = tokio::spawn(run(service, debounce, terms_rx, results_tx));
        SearchHandle {
            terms: terms_tx,
            results: results_rx,
            task,
        }
    }
}

impl SearchHandle {
    pub fn search(&self, term: impl Into<String>) {
        let _ = self.terms.send(term.into());
    }

    pub fn results(&self) -> Vec<Hero> {
        self.results.borrow().clone()
    }

    /// Waits for the next published result set.
    pub async fn changed(&mut self) -> Option<Vec<Hero>> {
        self.results.changed().await.ok()?;
        Some(self.results.borrow_and_update().clone())
    }

    /// Stops accepting terms and waits for the search task to finish.
    pub async fn close(self) {
        drop(self.terms);
        let _ = self.task.await;
    }
}

async fn run(
    service: HeroService,
    debounce: Duration,
    mut terms: mpsc::UnboundedReceiver<String>,
    results: watch::Sender<Vec<Hero>>,
) {
    let mut pending: Option<(String, Instant)> = None;
    let mut last: Option<String> = None;
    let mut in_flight: Option<BoxFuture<'static, Vec<Hero>>> = None;

    loop {
        let deadline = pending.as_ref().map(|(_, at)| *at);
        tokio::select! {
            term = terms.recv() => match term {
                Some(term) => pending = Some((term, Instant::now() + debounce)),
                None => break,
            },
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                let Some((term, _)) = pending.take() else { continue };
                if last.as_deref() == Some(term.as_str()) {
                    continue;
                }
                last = Some(term.clone());
                // Replacing the future drops the previous search.
                in_flight = Some(start(&service, term));
            }
            Some(heroes) = OptionFuture::from(in_flight.as_mut()), if in_flight.is_some() => {
                in_flight = None;
                let _ = results.send(heroes);
            }
        }
    }

    // Closing the term stream flushes a debounced term.
    if let Some((term, _)) = pending {
        if last.as_deref() != Some(term.as_str()) {
            in_flight = Some(start(&service, term));
        }
    }
    if let Some(search) = in_flight {
        let _ = results.send(search.await);
    }
}

fn start(service: &HeroService, term: String) -> BoxFuture<'static, Vec<Hero>> {
    let service = service.clone();
    async move { service.search_heroes(&term).await }.boxed()
}
