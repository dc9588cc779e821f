use std::sync::Arc;
use std::time::Duration;

use broadcast_core::{Round, RoundSnapshot};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::clients::BroadcastApi;

/// A successful poll, tagged with the round it was fetched for.
#[derive(Debug)]
pub struct PollEvent {
    pub round_id: String,
    pub snapshot: RoundSnapshot,
}

struct PollTask {
    round_id: String,
    handle: JoinHandle<()>,
}

/// Repeatedly fetches the selected round. At most one poll task runs at a time.
pub struct BoardPoller {
    api: Arc<dyn BroadcastApi>,
    tournament_id: String,
    interval: Duration,
    events: mpsc::UnboundedSender<PollEvent>,
    task: Option<PollTask>,
}

impl BoardPoller {
    pub fn new(
        api: Arc<dyn BroadcastApi>,
        tournament_id: String,
        interval: Duration,
        events: mpsc::UnboundedSender<PollEvent>,
    ) -> Self {
        Self {
            api,
            tournament_id,
            interval,
            events,
            task: None,
        }
    }

    /// Cancels the current task, if any, and starts polling `round` immediately.
    pub fn start(&mut self, round: Round) {
        self.stop();

        tracing::info!("Polling round {} ({})", round.slug, round.id);
        let round_id = round.id.clone();
        let handle = tokio::spawn(poll_loop(
            Arc::clone(&self.api),
            self.tournament_id.clone(),
            round,
            self.interval,
            self.events.clone(),
        ));
        self.task = Some(PollTask { round_id, handle });
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.handle.abort();
            tracing::debug!("Stopped polling round {}", task.round_id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.handle.is_finished())
    }

    pub fn round_id(&self) -> Option<&str> {
        self.task.as_ref().map(|t| t.round_id.as_str())
    }
}

impl Drop for BoardPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn poll_loop(
    api: Arc<dyn BroadcastApi>,
    tournament_id: String,
    round: Round,
    interval: Duration,
    events: mpsc::UnboundedSender<PollEvent>,
) {
    loop {
        match api.fetch_round(&tournament_id, &round).await {
            Ok(snapshot) => {
                let event = PollEvent {
                    round_id: round.id.clone(),
                    snapshot,
                };
                if events.send(event).is_err() {
                    // session is gone
                    break;
                }
            }
            Err(e) => {
                tracing::warn!("Failed to poll round {}: {}", round.id, e);
            }
        }

        tokio::time::sleep(interval).await;
    }
}
