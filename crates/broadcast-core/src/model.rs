use serde::{Deserialize, Serialize};

/// Status value the broadcast API uses for a game still in progress.
pub const IN_PROGRESS: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: String,
    pub slug: String,
    pub url: String,
}

impl Round {
    /// External viewer link for one game of this round.
    pub fn game_url(&self, game_id: &str) -> String {
        format!("{}/{}", self.url, game_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: Option<String>,
    pub title: Option<String>,
    pub rating: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub fen: Option<String>,
    pub last_move: Option<String>,
    pub check: Option<String>, // "+" or "#"
    pub status: Option<String>, // "*", "1-0", "0-1", "1/2-1/2"
    pub players: Option<Vec<Player>>,
}

impl Game {
    pub fn white(&self) -> Option<&Player> {
        self.players.as_ref().and_then(|p| p.first())
    }

    pub fn black(&self) -> Option<&Player> {
        self.players.as_ref().and_then(|p| p.get(1))
    }

    /// True once the status has left the in-progress sentinel.
    pub fn is_finished(&self) -> bool {
        matches!(self.status.as_deref(), Some(s) if s != IN_PROGRESS)
    }
}

/// `GET /broadcast/{tournament}` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundList {
    #[serde(default)]
    pub rounds: Vec<Round>,
}

/// `GET /broadcast/{tournament}/{slug}/{round}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSnapshot {
    #[serde(default)]
    pub games: Vec<Game>,
    pub round: Round,
}
