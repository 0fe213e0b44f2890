//! Game mode selection.

use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who sits on the other side of the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the input.
    HumanVsHuman,
    /// Player two is the random computer player.
    #[default]
    HumanVsComputer,
}

impl GameMode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::HumanVsHuman => "Human vs Human",
            Self::HumanVsComputer => "Human vs Computer",
        }
    }

    /// Switches to the other mode.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::HumanVsHuman => Self::HumanVsComputer,
            Self::HumanVsComputer => Self::HumanVsHuman,
        }
    }

    /// Whether `player` is driven by the computer in this mode.
    pub fn is_computer(self, player: Player) -> bool {
        matches!((self, player), (Self::HumanVsComputer, Player::Two))
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computer_only_plays_two_against_human() {
        assert!(GameMode::HumanVsComputer.is_computer(Player::Two));
        assert!(!GameMode::HumanVsComputer.is_computer(Player::One));
        assert!(!GameMode::HumanVsHuman.is_computer(Player::Two));
    }

    #[test]
    fn test_toggle_round_trip() {
        let mode = GameMode::default();
        assert_eq!(mode, GameMode::HumanVsComputer);
        assert_eq!(mode.toggle().toggle(), mode);
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("human-vs-human".parse::<GameMode>(), Ok(GameMode::HumanVsHuman));
        assert_eq!("Human-Vs-Computer".parse::<GameMode>(), Ok(GameMode::HumanVsComputer));
        assert!("solo".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&GameMode::HumanVsHuman).unwrap();
        assert_eq!(json, "\"human-vs-human\"");
        let mode: GameMode = serde_json::from_str("\"human-vs-computer\"").unwrap();
        assert_eq!(mode, GameMode::HumanVsComputer);
    }
}
