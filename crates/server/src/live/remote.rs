//! Widgets that live in the browser: every call becomes a protocol message.

use broadcast_core::{BoardConfig, BoardSlot, BoardUpdate, BoardWidget, DisplayMode, WidgetFactory};
use tokio::sync::mpsc::UnboundedSender;

use super::protocol::ServerMessage;
use crate::views::boards::{board_card, BoardCard};

pub struct RemoteBoards {
    outbound: UnboundedSender<ServerMessage>,
}

impl RemoteBoards {
    pub fn new(outbound: UnboundedSender<ServerMessage>) -> Self {
        Self { outbound }
    }

    fn send(&self, msg: ServerMessage) {
        // closed once the socket writer exits; LiveSession::run stops on that
        let _ = self.outbound.send(msg);
    }
}

impl WidgetFactory for RemoteBoards {
    type Widget = RemoteBoard;

    fn create(&mut self, slot: &BoardSlot<'_>, config: &BoardConfig) -> RemoteBoard {
        let card = BoardCard::live(slot);
        self.send(ServerMessage::CreateBoard {
            id: slot.game.id.clone(),
            html: board_card(DisplayMode::Live, &card).into_string(),
            config: config.clone(),
        });
        RemoteBoard {
            id: slot.game.id.clone(),
            outbound: self.outbound.clone(),
        }
    }

    fn show(&mut self, mode: DisplayMode) {
        self.send(ServerMessage::Mode { mode });
    }
}

pub struct RemoteBoard {
    id: String,
    outbound: UnboundedSender<ServerMessage>,
}

impl RemoteBoard {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl BoardWidget for RemoteBoard {
    fn set(&mut self, update: &BoardUpdate) {
        let _ = self.outbound.send(ServerMessage::UpdateBoard {
            id: self.id.clone(),
            update: update.clone(),
        });
    }

    fn set_result(&mut self, label: Option<&str>) {
        let _ = self.outbound.send(ServerMessage::BoardResult {
            id: self.id.clone(),
            label: label.map(str::to_string),
        });
    }
}
