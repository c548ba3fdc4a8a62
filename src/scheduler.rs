// Debounce timing, staleness handling and pipeline orchestration

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::api::CompletionClient;
use crate::candidates::build_candidates;
use crate::extract::extract_code;
use crate::models::{Candidate, TriggerEvent};

/// Converts a stream of trigger events into at most one active backend
/// request at a time.
///
/// Every trigger advances a generation counter and clears the previous
/// debounce timer. When a timer survives its quiet period the backend is
/// asked for a continuation; the network call is never aborted once started,
/// a result belonging to a superseded generation is simply dropped. All
/// pipeline failures degrade to an empty candidate list, nothing is ever
/// surfaced to the consumer as an error.
pub struct RequestScheduler {
    client: CompletionClient,
    delay: Duration,
    generation: Arc<AtomicU64>,
    cancel: Option<oneshot::Sender<()>>,
    tx: mpsc::UnboundedSender<Vec<Candidate>>,
}

impl RequestScheduler {
    pub fn new(
        client: CompletionClient,
        delay: Duration,
        tx: mpsc::UnboundedSender<Vec<Candidate>>,
    ) -> Self {
        Self {
            client,
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            cancel: None,
            tx,
        }
    }

    /// Accept a new trigger, superseding any pending one.
    pub fn on_trigger(&mut self, event: TriggerEvent) {
        let generation = Arc::clone(&self.generation);
        let g = generation.fetch_add(1, Ordering::SeqCst) + 1;

        // Replacing the stored sender drops the previous one, which wakes
        // that timer's cancel branch before it can fire.
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
        self.cancel = Some(cancel_tx);

        let client = self.client.clone();
        let tx = self.tx.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(delay) => {}
                _ = &mut cancel_rx => {
                    debug!(generation = g, "debounce timer cleared");
                    return;
                }
            }

            // Timer cancellation alone is not enough: a newer trigger may
            // have arrived in the same instant the timer fired.
            if generation.load(Ordering::SeqCst) != g {
                return;
            }

            let result = client.fetch(&event.prefix_text).await;

            if generation.load(Ordering::SeqCst) != g {
                debug!(generation = g, "dropping stale completion result");
                return;
            }

            let candidates = match result {
                Ok(raw) => build_candidates(&extract_code(&raw), &event.line_indentation),
                Err(err) => {
                    warn!(generation = g, error = %err, "completion fetch failed");
                    Vec::new()
                }
            };

            let _ = tx.send(candidates);
        });
    }

    /// Tear down at session end; a sleeping debounce timer dies with it.
    pub fn shutdown(&mut self) {
        self.cancel = None;
    }
}
