//! Domain types and pure logic for following a Lichess broadcast.
//!
//! Nothing here performs I/O: the async shell fetches snapshots and feeds
//! them to [`renderer::BoardRenderer`], which drives whatever widgets the
//! [`board::WidgetFactory`] hands out.

pub mod board;
pub mod model;
pub mod notation;
pub mod renderer;
pub mod selector;

pub use board::{BoardConfig, BoardSlot, BoardUpdate, BoardWidget, DisplayMode, WidgetFactory};
pub use model::{Game, Player, Round, RoundList, RoundSnapshot};
pub use renderer::{BoardRenderer, RenderStats};
pub use selector::{RoundOption, RoundSelector};
