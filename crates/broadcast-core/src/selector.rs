use serde::Serialize;

use crate::model::Round;

/// One entry of the round picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundOption {
    pub id: String,
    pub slug: String,
    pub label: String,
    pub selected: bool,
}

/// The fetched round list plus a pointer to the selected round.
#[derive(Debug, Default)]
pub struct RoundSelector {
    rounds: Vec<Round>,
    current: Option<usize>,
}

impl RoundSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the list; the selection resets to the first round.
    pub fn load(&mut self, rounds: Vec<Round>) -> Option<&Round> {
        self.current = if rounds.is_empty() { None } else { Some(0) };
        self.rounds = rounds;
        self.current()
    }

    /// Switches to the round with `id`. Unknown ids leave the selection as it was.
    pub fn select(&mut self, id: &str) -> Option<&Round> {
        let idx = self.rounds.iter().position(|r| r.id == id)?;
        self.current = Some(idx);
        self.rounds.get(idx)
    }

    pub fn current(&self) -> Option<&Round> {
        self.current.and_then(|i| self.rounds.get(i))
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.current().is_some_and(|r| r.id == id)
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn options(&self) -> Vec<RoundOption> {
        self.rounds
            .iter()
            .enumerate()
            .map(|(i, r)| RoundOption {
                id: r.id.clone(),
                slug: r.slug.clone(),
                label: format!("Ronda {}", i + 1),
                selected: self.current == Some(i),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounds() -> Vec<Round> {
        (1..=3)
            .map(|n| Round {
                id: format!("r{n}"),
                slug: format!("round-{n}"),
                url: format!("https://lichess.org/broadcast/t/round-{n}/r{n}"),
            })
            .collect()
    }

    #[test]
    fn test_load_defaults_to_first_round() {
        let mut selector = RoundSelector::new();
        assert!(selector.current().is_none());

        let first = selector.load(rounds()).map(|r| r.id.clone());
        assert_eq!(first.as_deref(), Some("r1"));
        assert!(selector.is_current("r1"));
    }

    #[test]
    fn test_select_switches_by_id() {
        let mut selector = RoundSelector::new();
        selector.load(rounds());

        assert_eq!(selector.select("r3").map(|r| r.slug.as_str()), Some("round-3"));
        assert!(selector.is_current("r3"));
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let mut selector = RoundSelector::new();
        selector.load(rounds());
        selector.select("r2");

        assert!(selector.select("nope").is_none());
        assert!(selector.is_current("r2"));
    }

    #[test]
    fn test_reload_resets_selection() {
        let mut selector = RoundSelector::new();
        selector.load(rounds());
        selector.select("r3");

        selector.load(rounds());
        assert!(selector.is_current("r1"));

        selector.load(Vec::new());
        assert!(selector.current().is_none());
        assert!(selector.options().is_empty());
    }

    #[test]
    fn test_options_are_labelled_by_position() {
        let mut selector = RoundSelector::new();
        selector.load(rounds());
        selector.select("r2");

        let options = selector.options();
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Ronda 1", "Ronda 2", "Ronda 3"]);
        assert!(options[1].selected);
        assert!(!options[0].selected);
    }
}
