use std::sync::Arc;

use broadcast_core::{BoardRenderer, DisplayMode, Round, RoundSelector};
use tokio::sync::mpsc;

use super::poller::{BoardPoller, PollEvent};
use super::protocol::{ClientMessage, ServerMessage};
use super::remote::RemoteBoards;
use crate::clients::BroadcastApi;
use crate::config::Config;

/// One viewer: round selection, the poll loop and the widget registry for a
/// single connected browser. All state changes happen inside [`LiveSession::run`].
pub struct LiveSession {
    api: Arc<dyn BroadcastApi>,
    tournament_id: String,
    selector: RoundSelector,
    renderer: BoardRenderer<RemoteBoards>,
    poller: BoardPoller,
    poll_events: mpsc::UnboundedReceiver<PollEvent>,
    outbound: mpsc::UnboundedSender<ServerMessage>,
}

impl LiveSession {
    pub fn new(
        api: Arc<dyn BroadcastApi>,
        config: &Config,
        outbound: mpsc::UnboundedSender<ServerMessage>,
    ) -> Self {
        let (events_tx, poll_events) = mpsc::unbounded_channel();
        let poller = BoardPoller::new(
            Arc::clone(&api),
            config.tournament_id.clone(),
            config.poll_interval,
            events_tx,
        );
        Self {
            api,
            tournament_id: config.tournament_id.clone(),
            selector: RoundSelector::new(),
            renderer: BoardRenderer::new(RemoteBoards::new(outbound.clone())),
            poller,
            poll_events,
            outbound,
        }
    }

    pub fn selector(&self) -> &RoundSelector {
        &self.selector
    }

    pub fn renderer(&self) -> &BoardRenderer<RemoteBoards> {
        &self.renderer
    }

    pub fn poller(&self) -> &BoardPoller {
        &self.poller
    }

    /// Fetches the round list, then serves commands and poll results until
    /// the command channel closes or nobody is left to receive output.
    pub async fn run(mut self, mut commands: mpsc::Receiver<ClientMessage>) {
        self.load_rounds().await;

        loop {
            tokio::select! {
                cmd = commands.recv() => match cmd {
                    Some(cmd) => self.handle(cmd),
                    None => break,
                },
                Some(event) = self.poll_events.recv() => self.apply(event),
                _ = self.outbound.closed() => {
                    tracing::debug!("Live session output closed");
                    break;
                }
            }
        }

        self.shutdown();
    }

    /// On failure the round list stays empty and the page keeps showing its loading state.
    pub async fn load_rounds(&mut self) {
        match self.api.fetch_rounds(&self.tournament_id).await {
            Ok(list) => self.rounds_loaded(list.rounds),
            Err(e) => tracing::warn!("Failed to load rounds for {}: {}", self.tournament_id, e),
        }
    }

    pub fn rounds_loaded(&mut self, rounds: Vec<Round>) {
        tracing::info!("Loaded {} rounds for {}", rounds.len(), self.tournament_id);
        let first = self.selector.load(rounds).cloned();
        let _ = self.outbound.send(ServerMessage::Rounds {
            options: self.selector.options(),
        });

        match first {
            Some(round) => self.switch_to(round),
            None => self.poller.stop(),
        }
    }

    pub fn handle(&mut self, cmd: ClientMessage) {
        match cmd {
            ClientMessage::SelectRound { round_id } => self.select_round(&round_id),
        }
    }

    pub fn select_round(&mut self, round_id: &str) {
        if self.selector.is_current(round_id) {
            return;
        }
        match self.selector.select(round_id).cloned() {
            Some(round) => self.switch_to(round),
            None => tracing::debug!("Ignoring unknown round {round_id}"),
        }
    }

    /// Applies a poll result unless it belongs to a round that is no longer selected.
    pub fn apply(&mut self, event: PollEvent) {
        if !self.selector.is_current(&event.round_id) {
            tracing::debug!("Dropping stale poll for round {}", event.round_id);
            return;
        }
        let stats = self.renderer.render(&event.snapshot);
        tracing::debug!(
            "Round {}: {} games, {} created, {} updated, {} results",
            event.round_id,
            event.snapshot.games.len(),
            stats.created,
            stats.updated,
            stats.results
        );
    }

    fn switch_to(&mut self, round: Round) {
        // clear the previous round's boards before its replacement is fetched
        if !self.renderer.is_empty() || self.renderer.mode() == DisplayMode::Live {
            self.renderer.reset();
        }
        self.poller.start(round);
    }

    fn shutdown(&mut self) {
        self.poller.stop();
        self.renderer.dispose();
        tracing::debug!("Live session for {} closed", self.tournament_id);
    }
}
