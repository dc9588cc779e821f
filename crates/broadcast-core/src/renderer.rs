//! Keeps one widget per game alive across polls and pushes only what changed.

use std::collections::HashMap;

use crate::board::{BoardConfig, BoardSlot, BoardUpdate, BoardWidget, DisplayMode, WidgetFactory};
use crate::model::RoundSnapshot;
use crate::notation::result_label;

struct BoardEntry<W> {
    widget: W,
    applied: Option<BoardUpdate>,
    result: Option<String>,
}

/// What a single [`BoardRenderer::render`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub created: usize,
    pub updated: usize,
    pub results: usize,
}

pub struct BoardRenderer<F: WidgetFactory> {
    factory: F,
    boards: HashMap<String, BoardEntry<F::Widget>>,
    mode: DisplayMode,
}

impl<F: WidgetFactory> BoardRenderer<F> {
    /// Starts in `Loading`; the container is assumed to already show skeletons.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            boards: HashMap::new(),
            mode: DisplayMode::Loading,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn contains(&self, game_id: &str) -> bool {
        self.boards.contains_key(game_id)
    }

    pub fn widget(&self, game_id: &str) -> Option<&F::Widget> {
        self.boards.get(game_id).map(|entry| &entry.widget)
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Applies one poll result. Games missing from `snapshot` keep their widgets.
    pub fn render(&mut self, snapshot: &RoundSnapshot) -> RenderStats {
        if self.mode == DisplayMode::Loading {
            self.mode = DisplayMode::Live;
            self.factory.show(DisplayMode::Live);
        }

        let mut stats = RenderStats::default();

        for (index, game) in snapshot.games.iter().enumerate() {
            let factory = &mut self.factory;
            let entry = self.boards.entry(game.id.clone()).or_insert_with(|| {
                stats.created += 1;
                let slot = BoardSlot { index, game, round: &snapshot.round };
                BoardEntry {
                    widget: factory.create(&slot, &BoardConfig::for_game(game)),
                    applied: None,
                    result: None,
                }
            });

            if let Some(update) = BoardUpdate::for_game(game) {
                if entry.applied.as_ref() != Some(&update) {
                    entry.widget.set(&update);
                    entry.applied = Some(update);
                    stats.updated += 1;
                }
            }

            let result = game
                .status
                .as_deref()
                .filter(|_| game.is_finished())
                .map(result_label);
            if result != entry.result {
                entry.widget.set_result(result.as_deref());
                entry.result = result;
                stats.results += 1;
            }
        }

        stats
    }

    /// Disposes every widget and puts the container back into `Loading`.
    pub fn reset(&mut self) {
        self.dispose();
        self.mode = DisplayMode::Loading;
        self.factory.show(DisplayMode::Loading);
    }

    /// Destroys every widget without touching the container, for teardown.
    pub fn dispose(&mut self) {
        for (_, entry) in self.boards.drain() {
            entry.widget.destroy();
        }
    }
}
