//! Aggregate statistics over the stored match history.
//!
//! Everything here is a pure projection of the record set: recomputed fresh
//! on every call, never persisted, no state between invocations.

use serde::Serialize;

use crate::model::{MatchRecord, Player};

/// Per-player slice of the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerStats {
    pub wins: usize,
    /// Percentage of all matches won; 0 when no matches exist.
    pub win_pct: f64,
    /// Average final total per match.
    pub avg_match_total: f64,
    pub avg_hand: f64,
    pub max_hand: u32,
    pub min_hand: u32,
    /// Hands with a strictly positive score.
    pub scoring_hands: usize,
    /// Percentage of hands with a strictly positive score; 0 when no hands.
    pub efficiency: f64,
    /// Longest run of consecutive match wins.
    pub best_streak: usize,
}

/// Full derived report across the match history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchStatistics {
    pub total_matches: usize,
    pub total_hands: usize,
    pub avg_hands_per_match: f64,
    pub max_hands_per_match: usize,
    pub min_hands_per_match: usize,
    pub zayaka: PlayerStats,
    pub brian: PlayerStats,
    /// Zayaka iff the per-hand averages differ by less than 2 points;
    /// fixed tie-break, not a judgment call.
    pub most_consistent: Player,
    /// Zayaka only on a strictly higher max hand, otherwise Brian.
    pub highest_single_hand: Player,
    pub highest_single_hand_score: u32,
    /// Zayaka only on strictly higher efficiency, otherwise Brian.
    pub most_efficient: Player,
}

impl MatchStatistics {
    /// Compute the report from records in ascending completion order (the
    /// streak walk depends on it; everything else is order-independent).
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let total_matches = records.len();

        let mut zayaka = PlayerStats::default();
        let mut brian = PlayerStats::default();

        // Match-level accumulation and the streak walk.
        let mut zayaka_match_sum: u64 = 0;
        let mut brian_match_sum: u64 = 0;
        let mut current_zayaka_streak = 0;
        let mut current_brian_streak = 0;

        for record in records {
            zayaka_match_sum += record.zayaka_total as u64;
            brian_match_sum += record.brian_total as u64;

            match record.winner {
                Player::Zayaka => {
                    zayaka.wins += 1;
                    current_zayaka_streak += 1;
                    current_brian_streak = 0;
                    zayaka.best_streak = zayaka.best_streak.max(current_zayaka_streak);
                }
                Player::Brian => {
                    brian.wins += 1;
                    current_brian_streak += 1;
                    current_zayaka_streak = 0;
                    brian.best_streak = brian.best_streak.max(current_brian_streak);
                }
            }
        }

        if total_matches > 0 {
            zayaka.win_pct = zayaka.wins as f64 / total_matches as f64 * 100.0;
            brian.win_pct = brian.wins as f64 / total_matches as f64 * 100.0;
            zayaka.avg_match_total = zayaka_match_sum as f64 / total_matches as f64;
            brian.avg_match_total = brian_match_sum as f64 / total_matches as f64;
        }

        // Hand-level accumulation over the flattened histories.
        let mut total_hands = 0;
        let mut zayaka_hand_sum: u64 = 0;
        let mut brian_hand_sum: u64 = 0;
        let mut max_hands_per_match = 0;
        let mut min_hands_per_match = usize::MAX;

        for record in records {
            let count = record.hand_count();
            max_hands_per_match = max_hands_per_match.max(count);
            min_hands_per_match = min_hands_per_match.min(count);

            for hand in &record.hands {
                total_hands += 1;
                zayaka_hand_sum += hand.zayaka as u64;
                brian_hand_sum += hand.brian as u64;
                zayaka.max_hand = zayaka.max_hand.max(hand.zayaka);
                brian.max_hand = brian.max_hand.max(hand.brian);
                if total_hands == 1 {
                    zayaka.min_hand = hand.zayaka;
                    brian.min_hand = hand.brian;
                } else {
                    zayaka.min_hand = zayaka.min_hand.min(hand.zayaka);
                    brian.min_hand = brian.min_hand.min(hand.brian);
                }
                if hand.zayaka > 0 {
                    zayaka.scoring_hands += 1;
                }
                if hand.brian > 0 {
                    brian.scoring_hands += 1;
                }
            }
        }

        if total_hands > 0 {
            zayaka.avg_hand = zayaka_hand_sum as f64 / total_hands as f64;
            brian.avg_hand = brian_hand_sum as f64 / total_hands as f64;
            zayaka.efficiency = zayaka.scoring_hands as f64 / total_hands as f64 * 100.0;
            brian.efficiency = brian.scoring_hands as f64 / total_hands as f64 * 100.0;
        }

        let avg_hands_per_match = if total_matches > 0 {
            total_hands as f64 / total_matches as f64
        } else {
            0.0
        };
        if min_hands_per_match == usize::MAX {
            min_hands_per_match = 0;
        }

        let most_consistent = if (zayaka.avg_hand - brian.avg_hand).abs() < 2.0 {
            Player::Zayaka
        } else {
            Player::Brian
        };
        let highest_single_hand = if zayaka.max_hand > brian.max_hand {
            Player::Zayaka
        } else {
            Player::Brian
        };
        let highest_single_hand_score = zayaka.max_hand.max(brian.max_hand);
        let most_efficient = if zayaka.efficiency > brian.efficiency {
            Player::Zayaka
        } else {
            Player::Brian
        };

        Self {
            total_matches,
            total_hands,
            avg_hands_per_match,
            max_hands_per_match,
            min_hands_per_match,
            zayaka,
            brian,
            most_consistent,
            highest_single_hand,
            highest_single_hand_score,
            most_efficient,
        }
    }

    pub fn for_player(&self, player: Player) -> &PlayerStats {
        match player {
            Player::Zayaka => &self.zayaka,
            Player::Brian => &self.brian,
        }
    }

    /// Render the multi-section text report shown in the statistics tab.
    pub fn render(&self) -> String {
        format!(
            "\
Gin Rummy Statistics
====================

MATCH STATISTICS
----------------
Total Matches: {total_matches}
Average Hands per Match: {avg_hands:.1}
Longest Match: {max_hands} hands
Shortest Match: {min_hands} hands

WIN STATISTICS
--------------
Zayaka Wins: {z_wins} ({z_win_pct:.1}%)
Brian Wins: {b_wins} ({b_win_pct:.1}%)

Win Streaks:
- Zayaka: {z_streak} consecutive wins
- Brian: {b_streak} consecutive wins

MATCH AVERAGES
--------------
Zayaka Average per Match: {z_avg_match:.1} points
Brian Average per Match: {b_avg_match:.1} points

HAND STATISTICS
---------------
Total Hands Played: {total_hands}

Average Score per Hand:
- Zayaka: {z_avg_hand:.1} points
- Brian: {b_avg_hand:.1} points

Hand Score Ranges:
- Zayaka: {z_min} - {z_max} points
- Brian: {b_min} - {b_max} points

Scoring Efficiency (Non-Zero Hands):
- Zayaka: {z_eff:.1}% ({z_scoring}/{total_hands} hands)
- Brian: {b_eff:.1}% ({b_scoring}/{total_hands} hands)

PERFORMANCE METRICS
-------------------
Most Consistent Player: {consistent}
Highest Single Hand: {highest} ({highest_score} points)
Most Efficient Scorer: {efficient} ({best_eff:.1}%)
",
            total_matches = self.total_matches,
            avg_hands = self.avg_hands_per_match,
            max_hands = self.max_hands_per_match,
            min_hands = self.min_hands_per_match,
            z_wins = self.zayaka.wins,
            z_win_pct = self.zayaka.win_pct,
            b_wins = self.brian.wins,
            b_win_pct = self.brian.win_pct,
            z_streak = self.zayaka.best_streak,
            b_streak = self.brian.best_streak,
            z_avg_match = self.zayaka.avg_match_total,
            b_avg_match = self.brian.avg_match_total,
            total_hands = self.total_hands,
            z_avg_hand = self.zayaka.avg_hand,
            b_avg_hand = self.brian.avg_hand,
            z_min = self.zayaka.min_hand,
            z_max = self.zayaka.max_hand,
            b_min = self.brian.min_hand,
            b_max = self.brian.max_hand,
            z_eff = self.zayaka.efficiency,
            z_scoring = self.zayaka.scoring_hands,
            b_eff = self.brian.efficiency,
            b_scoring = self.brian.scoring_hands,
            consistent = self.most_consistent,
            highest = self.highest_single_hand,
            highest_score = self.highest_single_hand_score,
            efficient = self.most_efficient,
            best_eff = self.zayaka.efficiency.max(self.brian.efficiency),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HandScore;
    use chrono::NaiveDate;

    fn record(id: i64, winner: Player, hands: Vec<HandScore>) -> MatchRecord {
        let zayaka_total = hands.iter().map(|h| h.zayaka).sum();
        let brian_total = hands.iter().map(|h| h.brian).sum();
        let completed_at = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            + chrono::Duration::hours(id);

        MatchRecord {
            id,
            zayaka_total,
            brian_total,
            winner,
            completed_at,
            hands,
        }
    }

    fn zayaka_win(id: i64) -> MatchRecord {
        record(
            id,
            Player::Zayaka,
            vec![HandScore::new(60, 0), HandScore::new(0, 20), HandScore::new(45, 0)],
        )
    }

    fn brian_win(id: i64) -> MatchRecord {
        record(id, Player::Brian, vec![HandScore::new(0, 55), HandScore::new(0, 50)])
    }

    #[test]
    fn test_empty_history() {
        let stats = MatchStatistics::from_records(&[]);

        assert_eq!(stats.total_matches, 0);
        assert_eq!(stats.total_hands, 0);
        assert_eq!(stats.zayaka.win_pct, 0.0);
        assert_eq!(stats.brian.win_pct, 0.0);
        assert_eq!(stats.avg_hands_per_match, 0.0);
        assert_eq!(stats.min_hands_per_match, 0);
        assert_eq!(stats.zayaka.efficiency, 0.0);
    }

    #[test]
    fn test_win_counts_and_percentages() {
        let records = vec![zayaka_win(0), zayaka_win(1), brian_win(2), zayaka_win(3)];
        let stats = MatchStatistics::from_records(&records);

        assert_eq!(stats.total_matches, 4);
        assert_eq!(stats.zayaka.wins, 3);
        assert_eq!(stats.brian.wins, 1);
        assert_eq!(stats.zayaka.win_pct, 75.0);
        assert_eq!(stats.brian.win_pct, 25.0);
    }

    #[test]
    fn test_streaks() {
        // Chronological order: Zayaka, Zayaka, Brian, Zayaka.
        let records = vec![zayaka_win(0), zayaka_win(1), brian_win(2), zayaka_win(3)];
        let stats = MatchStatistics::from_records(&records);

        assert_eq!(stats.zayaka.best_streak, 2);
        assert_eq!(stats.brian.best_streak, 1);
    }

    #[test]
    fn test_hand_level_metrics() {
        let records = vec![zayaka_win(0)];
        let stats = MatchStatistics::from_records(&records);

        assert_eq!(stats.total_hands, 3);
        assert_eq!(stats.zayaka.max_hand, 60);
        assert_eq!(stats.zayaka.min_hand, 0);
        assert_eq!(stats.brian.max_hand, 20);
        assert!((stats.zayaka.avg_hand - 35.0).abs() < 1e-9);
        assert_eq!(stats.zayaka.scoring_hands, 2);
        assert_eq!(stats.brian.scoring_hands, 1);
        assert!((stats.zayaka.efficiency - 2.0 / 3.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_hands_per_match_extrema() {
        let records = vec![zayaka_win(0), brian_win(1)];
        let stats = MatchStatistics::from_records(&records);

        assert_eq!(stats.max_hands_per_match, 3);
        assert_eq!(stats.min_hands_per_match, 2);
        assert!((stats.avg_hands_per_match - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_commentary_tie_breaks() {
        let stats = MatchStatistics::from_records(&[]);
        // Equal (zero) averages and efficiencies: fixed defaults.
        assert_eq!(stats.most_consistent, Player::Zayaka);
        assert_eq!(stats.most_efficient, Player::Brian);
        assert_eq!(stats.highest_single_hand, Player::Brian);
    }

    #[test]
    fn test_idempotent() {
        let records = vec![zayaka_win(0), brian_win(1), zayaka_win(2)];
        let first = MatchStatistics::from_records(&records);
        let second = MatchStatistics::from_records(&records);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_mentions_key_figures() {
        let records = vec![zayaka_win(0), brian_win(1)];
        let report = MatchStatistics::from_records(&records).render();

        assert!(report.contains("Total Matches: 2"));
        assert!(report.contains("Zayaka Wins: 1 (50.0%)"));
        assert!(report.contains("Total Hands Played: 5"));
    }
}
