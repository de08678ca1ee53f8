//! Domain types shared by the session, repository, and statistics engine.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Cumulative total at which a match ends.
pub const WIN_THRESHOLD: u32 = 100;

/// Largest score a single hand may carry.
pub const MAX_HAND_SCORE: u32 = 999;

/// Timestamp format used in the `match_date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The two fixed players tracked by the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Player {
    Zayaka,
    Brian,
}

impl Player {
    /// The label used in hand tokens and the persisted `winner` column.
    pub fn name(&self) -> &'static str {
        match self {
            Player::Zayaka => "Zayaka",
            Player::Brian => "Brian",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "Zayaka" => Some(Player::Zayaka),
            "Brian" => Some(Player::Brian),
            _ => None,
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            Player::Zayaka => Player::Brian,
            Player::Brian => Player::Zayaka,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One scored hand within a match. The entry lock guarantees at most one
/// field is nonzero for hands recorded through the session, but decoded
/// hands are not required to satisfy that.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct HandScore {
    pub zayaka: u32,
    pub brian: u32,
}

impl HandScore {
    pub fn new(zayaka: u32, brian: u32) -> Self {
        Self { zayaka, brian }
    }

    pub fn score_for(&self, player: Player) -> u32 {
        match player {
            Player::Zayaka => self.zayaka,
            Player::Brian => self.brian,
        }
    }
}

/// Immutable snapshot produced when a session crosses the win threshold.
/// Handed to the repository; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CompletedMatch {
    pub zayaka_total: u32,
    pub brian_total: u32,
    pub winner: Player,
    pub completed_at: NaiveDateTime,
    pub hands: Vec<HandScore>,
}

/// A persisted match, as read back from the repository.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub id: i64,
    pub zayaka_total: u32,
    pub brian_total: u32,
    pub winner: Player,
    pub completed_at: NaiveDateTime,
    pub hands: Vec<HandScore>,
}

impl MatchRecord {
    /// Number of hands played in this match.
    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    pub fn total_for(&self, player: Player) -> u32 {
        match player {
            Player::Zayaka => self.zayaka_total,
            Player::Brian => self.brian_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_name_round_trip() {
        for player in [Player::Zayaka, Player::Brian] {
            assert_eq!(Player::from_name(player.name()), Some(player));
        }
        assert_eq!(Player::from_name("nobody"), None);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Zayaka.opponent(), Player::Brian);
        assert_eq!(Player::Brian.opponent(), Player::Zayaka);
    }

    #[test]
    fn test_score_for() {
        let hand = HandScore::new(25, 0);
        assert_eq!(hand.score_for(Player::Zayaka), 25);
        assert_eq!(hand.score_for(Player::Brian), 0);
    }
}
