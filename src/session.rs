//! In-memory state machine for the match currently being played.

use chrono::Local;

use crate::error::TrackerError;
use crate::model::{CompletedMatch, HandScore, MAX_HAND_SCORE, Player, WIN_THRESHOLD};

/// Which entry field may accept input, derived purely from the pending entry
/// texts. Whoever won the hand enters their score; as soon as one field holds
/// text the other is locked until it is cleared. The presentation layer
/// queries this to decide what to enable, the session never touches widgets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryLock {
    /// Both fields empty; either player may enter a score.
    Either,
    /// Zayaka's field holds text; Brian's is locked.
    ZayakaOnly,
    /// Brian's field holds text; Zayaka's is locked.
    BrianOnly,
}

pub fn entry_lock(zayaka_text: &str, brian_text: &str) -> EntryLock {
    if !zayaka_text.trim().is_empty() {
        EntryLock::ZayakaOnly
    } else if !brian_text.trim().is_empty() {
        EntryLock::BrianOnly
    } else {
        EntryLock::Either
    }
}

/// Result of a successful [`MatchSession::record_hand`].
#[derive(Debug, Clone)]
pub enum HandOutcome {
    /// Hand recorded, match still open.
    InProgress {
        zayaka_total: u32,
        brian_total: u32,
    },
    /// The win threshold was crossed. The session has already been reset;
    /// the snapshot is the caller's to persist.
    MatchOver(CompletedMatch),
}

/// Running totals and ordered hand history for the open match.
///
/// The session exclusively owns its hand list. Finalization hands an
/// immutable copy to the caller and clears the live list, so the archived
/// record and the next session never alias.
#[derive(Debug)]
pub struct MatchSession {
    zayaka_total: u32,
    brian_total: u32,
    hands: Vec<HandScore>,
}

impl MatchSession {
    pub fn new() -> Self {
        Self {
            zayaka_total: 0,
            brian_total: 0,
            hands: Vec::new(),
        }
    }

    pub fn totals(&self) -> (u32, u32) {
        (self.zayaka_total, self.brian_total)
    }

    pub fn hands(&self) -> &[HandScore] {
        &self.hands
    }

    pub fn total_for(&self, player: Player) -> u32 {
        match player {
            Player::Zayaka => self.zayaka_total,
            Player::Brian => self.brian_total,
        }
    }

    /// Record one hand from the two pending entry texts.
    ///
    /// At most one score is parsed: whichever field is non-empty wins, with
    /// Zayaka's taking precedence, and the other is forced to zero. Errors
    /// leave the session untouched.
    pub fn record_hand(
        &mut self,
        zayaka_text: &str,
        brian_text: &str,
    ) -> Result<HandOutcome, TrackerError> {
        let hand = parse_hand_entries(zayaka_text, brian_text)?;

        self.hands.push(hand);
        self.zayaka_total += hand.zayaka;
        self.brian_total += hand.brian;

        tracing::info!(
            "hand recorded: Zayaka={} Brian={} (totals {}-{})",
            hand.zayaka,
            hand.brian,
            self.zayaka_total,
            self.brian_total
        );

        match self.winner() {
            Some(winner) => Ok(HandOutcome::MatchOver(self.finalize(winner))),
            None => Ok(HandOutcome::InProgress {
                zayaka_total: self.zayaka_total,
                brian_total: self.brian_total,
            }),
        }
    }

    /// The winner, if the threshold has been crossed.
    ///
    /// Both totals at or past the threshold is unreachable while the entry
    /// lock holds (a hand raises only one total). If it is ever observed, a
    /// strictly higher total wins; an exact tie keeps the match open, since
    /// the outcome is out of contract.
    fn winner(&self) -> Option<Player> {
        let zayaka_done = self.zayaka_total >= WIN_THRESHOLD;
        let brian_done = self.brian_total >= WIN_THRESHOLD;

        match (zayaka_done, brian_done) {
            (true, false) => Some(Player::Zayaka),
            (false, true) => Some(Player::Brian),
            (true, true) => {
                if self.zayaka_total > self.brian_total {
                    Some(Player::Zayaka)
                } else if self.brian_total > self.zayaka_total {
                    Some(Player::Brian)
                } else {
                    tracing::warn!(
                        "both players at {} with equal totals; match left open",
                        self.zayaka_total
                    );
                    None
                }
            }
            (false, false) => None,
        }
    }

    /// Snapshot the finished match and reset to a fresh session.
    fn finalize(&mut self, winner: Player) -> CompletedMatch {
        tracing::info!(
            "match over: winner={} final {}-{} after {} hands",
            winner,
            self.zayaka_total,
            self.brian_total,
            self.hands.len()
        );

        let completed = CompletedMatch {
            zayaka_total: self.zayaka_total,
            brian_total: self.brian_total,
            winner,
            completed_at: Local::now().naive_local(),
            hands: std::mem::take(&mut self.hands),
        };

        self.zayaka_total = 0;
        self.brian_total = 0;

        completed
    }
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_hand_entries(zayaka_text: &str, brian_text: &str) -> Result<HandScore, TrackerError> {
    let zayaka_text = zayaka_text.trim();
    let brian_text = brian_text.trim();

    if zayaka_text.is_empty() && brian_text.is_empty() {
        return Err(TrackerError::NoScoreProvided);
    }

    if !zayaka_text.is_empty() {
        Ok(HandScore::new(parse_score_entry(zayaka_text)?, 0))
    } else {
        Ok(HandScore::new(0, parse_score_entry(brian_text)?))
    }
}

fn parse_score_entry(text: &str) -> Result<u32, TrackerError> {
    let score: u32 = text
        .parse()
        .map_err(|_| TrackerError::InvalidScoreInput(text.to_string()))?;
    if score > MAX_HAND_SCORE {
        return Err(TrackerError::InvalidScoreInput(text.to_string()));
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_hand;

    #[test]
    fn test_entry_lock() {
        assert_eq!(entry_lock("", ""), EntryLock::Either);
        assert_eq!(entry_lock("25", ""), EntryLock::ZayakaOnly);
        assert_eq!(entry_lock("", "30"), EntryLock::BrianOnly);
        assert_eq!(entry_lock("  ", "  "), EntryLock::Either);
    }

    #[test]
    fn test_record_hands_accumulates_totals() {
        let mut session = MatchSession::new();

        session.record_hand("25", "").unwrap();
        session.record_hand("", "30").unwrap();
        let outcome = session.record_hand("50", "").unwrap();

        assert!(matches!(
            outcome,
            HandOutcome::InProgress {
                zayaka_total: 75,
                brian_total: 30,
            }
        ));
        assert_eq!(session.totals(), (75, 30));
        assert_eq!(session.hands().len(), 3);
    }

    #[test]
    fn test_no_score_provided() {
        let mut session = MatchSession::new();
        let err = session.record_hand("", "").unwrap_err();
        assert!(matches!(err, TrackerError::NoScoreProvided));
        assert!(session.hands().is_empty());
    }

    #[test]
    fn test_invalid_input_leaves_session_untouched() {
        let mut session = MatchSession::new();
        session.record_hand("25", "").unwrap();

        assert!(session.record_hand("abc", "").is_err());
        assert!(session.record_hand("-5", "").is_err());
        assert!(session.record_hand("1000", "").is_err());
        assert_eq!(session.totals(), (25, 0));
        assert_eq!(session.hands().len(), 1);
    }

    #[test]
    fn test_zayaka_entry_takes_precedence() {
        let mut session = MatchSession::new();
        session.record_hand("25", "30").unwrap();
        assert_eq!(session.totals(), (25, 0));
    }

    #[test]
    fn test_threshold_finalizes_and_resets() {
        let mut session = MatchSession::new();

        for _ in 0..3 {
            assert!(matches!(
                session.record_hand("30", "").unwrap(),
                HandOutcome::InProgress { .. }
            ));
        }

        let outcome = session.record_hand("30", "").unwrap();
        let completed = match outcome {
            HandOutcome::MatchOver(completed) => completed,
            HandOutcome::InProgress { .. } => panic!("expected match to end"),
        };

        assert_eq!(completed.zayaka_total, 120);
        assert_eq!(completed.brian_total, 0);
        assert_eq!(completed.winner, Player::Zayaka);
        assert_eq!(completed.hands.len(), 4);
        for hand in &completed.hands {
            assert_eq!(encode_hand(hand), "Zayaka:30, Brian:0");
        }

        // Session is fresh again.
        assert_eq!(session.totals(), (0, 0));
        assert!(session.hands().is_empty());
    }

    #[test]
    fn test_brian_can_win() {
        let mut session = MatchSession::new();
        session.record_hand("", "60").unwrap();
        let outcome = session.record_hand("", "45").unwrap();

        match outcome {
            HandOutcome::MatchOver(completed) => {
                assert_eq!(completed.winner, Player::Brian);
                assert_eq!(completed.brian_total, 105);
            }
            HandOutcome::InProgress { .. } => panic!("expected match to end"),
        }
    }

    #[test]
    fn test_exactly_threshold_wins() {
        let mut session = MatchSession::new();
        let outcome = session.record_hand("100", "").unwrap();
        assert!(matches!(outcome, HandOutcome::MatchOver(_)));
    }

    #[test]
    fn test_no_hand_has_both_fields_nonzero() {
        let mut session = MatchSession::new();
        let entries = [("25", ""), ("", "30"), ("10", "40"), ("", "15")];

        for (zayaka, brian) in entries {
            session.record_hand(zayaka, brian).unwrap();
        }

        for hand in session.hands() {
            assert!(hand.zayaka == 0 || hand.brian == 0);
        }
    }
}
