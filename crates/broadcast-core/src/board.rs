//! The seam between the renderer and the chessboard widgets it drives.

use serde::Serialize;
use shakmaty::Color;

use crate::model::{Game, Player, Round};
use crate::notation::{check_side, parse_last_move, serialize_side, LastMove};

pub const WHITE_PLACEHOLDER: &str = "Blanco";
pub const BLACK_PLACEHOLDER: &str = "Negro";

/// Which variant of the board card the container shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Skeleton cards while the first poll for a round is pending.
    Loading,
    Live,
}

/// Widget configuration at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardConfig {
    pub fen: Option<String>,
    pub view_only: bool,
    pub coordinates: bool,
    #[serde(serialize_with = "serialize_side")]
    pub check: Option<Color>,
}

impl BoardConfig {
    pub fn for_game(game: &Game) -> Self {
        Self {
            fen: game.fen.clone(),
            view_only: true,
            coordinates: false,
            check: check_side(game.fen.as_deref(), game.check.as_deref()),
        }
    }
}

/// Incremental update applied on every poll that carries a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardUpdate {
    pub fen: String,
    pub last_move: Option<LastMove>,
    #[serde(serialize_with = "serialize_side")]
    pub check: Option<Color>,
}

impl BoardUpdate {
    /// `None` when the game has no position yet.
    pub fn for_game(game: &Game) -> Option<Self> {
        let fen = game.fen.clone()?;
        Some(Self {
            check: check_side(Some(fen.as_str()), game.check.as_deref()),
            last_move: game.last_move.as_deref().and_then(parse_last_move),
            fen,
        })
    }
}

/// Display data for one side of a board card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    pub title: String,
    pub name: String,
    pub rating: i32,
}

impl PlayerCard {
    pub fn new(player: Option<&Player>, placeholder: &str) -> Self {
        Self {
            title: player.and_then(|p| p.title.clone()).unwrap_or_default(),
            name: player
                .and_then(|p| p.name.clone())
                .unwrap_or_else(|| placeholder.to_string()),
            rating: player.and_then(|p| p.rating).unwrap_or(0),
        }
    }

    pub fn placeholder(name: &str) -> Self {
        Self::new(None, name)
    }
}

/// Where a new widget goes: its position on the grid plus the data for its card.
#[derive(Debug, Clone, Copy)]
pub struct BoardSlot<'a> {
    pub index: usize,
    pub game: &'a Game,
    pub round: &'a Round,
}

impl BoardSlot<'_> {
    pub fn label(&self) -> String {
        format!("Mesa {}", self.index + 1)
    }

    pub fn white(&self) -> PlayerCard {
        PlayerCard::new(self.game.white(), WHITE_PLACEHOLDER)
    }

    pub fn black(&self) -> PlayerCard {
        PlayerCard::new(self.game.black(), BLACK_PLACEHOLDER)
    }

    pub fn link(&self) -> String {
        self.round.game_url(&self.game.id)
    }
}

/// A live chessboard widget.
pub trait BoardWidget {
    fn set(&mut self, update: &BoardUpdate);

    /// Shows the result overlay with `label`, or hides it on `None`.
    fn set_result(&mut self, label: Option<&str>);

    fn destroy(self)
    where
        Self: Sized,
    {
    }
}

/// Creates widgets inside the board container and controls what the container shows.
pub trait WidgetFactory {
    type Widget: BoardWidget;

    fn create(&mut self, slot: &BoardSlot<'_>, config: &BoardConfig) -> Self::Widget;

    /// Switching to `Loading` clears the container.
    fn show(&mut self, mode: DisplayMode);
}
