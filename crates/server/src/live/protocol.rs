use broadcast_core::{BoardConfig, BoardUpdate, DisplayMode, RoundOption};
use serde::{Deserialize, Serialize};

/// Server → client messages
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Rounds {
        options: Vec<RoundOption>,
    },
    #[serde(rename = "display_mode")]
    Mode {
        mode: DisplayMode,
    },
    CreateBoard {
        id: String,
        /// Pre-rendered board card; the widget mounts on its `.cg-board` element.
        html: String,
        config: BoardConfig,
    },
    UpdateBoard {
        id: String,
        update: BoardUpdate,
    },
    BoardResult {
        id: String,
        label: Option<String>,
    },
}

/// Client → server messages
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    SelectRound { round_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_message_parse() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type": "select_round", "round_id": "r2"}"#).unwrap();
        assert_eq!(msg, ClientMessage::SelectRound { round_id: "r2".into() });

        assert!(serde_json::from_str::<ClientMessage>(r#"{"type": "resign"}"#).is_err());
    }

    #[test]
    fn test_server_message_tags() {
        let mode = serde_json::to_value(ServerMessage::Mode { mode: DisplayMode::Loading }).unwrap();
        assert_eq!(mode, json!({"type": "display_mode", "mode": "loading"}));

        let result = serde_json::to_value(ServerMessage::BoardResult {
            id: "g1".into(),
            label: Some("1 - 0".into()),
        })
        .unwrap();
        assert_eq!(result, json!({"type": "board_result", "id": "g1", "label": "1 - 0"}));
    }
}
