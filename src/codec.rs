//! Text codec for hand scores.
//!
//! A single hand serializes to a token like `Zayaka:25, Brian:0`; a match's
//! hand history joins its tokens with `"; "` into one storage blob. Decoding
//! is deliberately lenient at the match level: segments that fail to parse
//! are dropped rather than failing the whole blob, so a history written by an
//! older or newer build still yields every hand it can.

use crate::error::TrackerError;
use crate::model::HandScore;

const ZAYAKA_LABEL: &str = "Zayaka:";
const BRIAN_LABEL: &str = "Brian:";
const HAND_SEPARATOR: &str = "; ";

/// Encode one hand as `Zayaka:<n>, Brian:<n>`.
pub fn encode_hand(hand: &HandScore) -> String {
    format!("{}{}, {}{}", ZAYAKA_LABEL, hand.zayaka, BRIAN_LABEL, hand.brian)
}

/// Decode a single hand token.
///
/// Splits on the first occurrence of the `Brian:` label, so a score text can
/// never be confused with the separator regardless of digit count. The
/// numeric remainders are trimmed of whitespace and the inter-label comma;
/// an empty remainder counts as zero.
pub fn decode_hand(token: &str) -> Result<HandScore, TrackerError> {
    let malformed = || TrackerError::MalformedHandToken(token.to_string());

    let (left, right) = token.split_once(BRIAN_LABEL).ok_or_else(malformed)?;
    let zayaka_part = left
        .trim()
        .strip_prefix(ZAYAKA_LABEL)
        .ok_or_else(malformed)?
        .trim()
        .trim_end_matches(',')
        .trim();
    let brian_part = right.trim();

    Ok(HandScore {
        zayaka: parse_score_part(zayaka_part).ok_or_else(malformed)?,
        brian: parse_score_part(brian_part).ok_or_else(malformed)?,
    })
}

fn parse_score_part(part: &str) -> Option<u32> {
    if part.is_empty() {
        return Some(0);
    }
    part.parse().ok()
}

/// Encode a full hand history into one storage blob. An empty history
/// encodes to an empty blob.
pub fn encode_match(hands: &[HandScore]) -> String {
    hands
        .iter()
        .map(encode_hand)
        .collect::<Vec<_>>()
        .join(HAND_SEPARATOR)
}

/// Decode a storage blob back into a hand history.
///
/// Malformed segments are skipped silently; this lenience is a contract of
/// the format, not an accident.
pub fn decode_match(blob: &str) -> Vec<HandScore> {
    if blob.trim().is_empty() {
        return Vec::new();
    }

    blob.split(HAND_SEPARATOR)
        .filter_map(|segment| match decode_hand(segment) {
            Ok(hand) => Some(hand),
            Err(_) => {
                tracing::debug!("skipping malformed hand segment: {:?}", segment);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hand() {
        assert_eq!(encode_hand(&HandScore::new(25, 0)), "Zayaka:25, Brian:0");
        assert_eq!(encode_hand(&HandScore::new(0, 999)), "Zayaka:0, Brian:999");
    }

    #[test]
    fn test_decode_hand_basic() {
        let hand = decode_hand("Zayaka:25, Brian:0").unwrap();
        assert_eq!(hand, HandScore::new(25, 0));
    }

    #[test]
    fn test_decode_hand_whitespace() {
        let hand = decode_hand("  Zayaka: 42 ,  Brian: 7 ").unwrap();
        assert_eq!(hand, HandScore::new(42, 7));
    }

    #[test]
    fn test_decode_hand_empty_remainder_is_zero() {
        let hand = decode_hand("Zayaka:, Brian:").unwrap();
        assert_eq!(hand, HandScore::new(0, 0));
    }

    #[test]
    fn test_decode_hand_missing_zayaka_label() {
        let err = decode_hand("25, Brian:0").unwrap_err();
        assert!(matches!(err, TrackerError::MalformedHandToken(_)));
    }

    #[test]
    fn test_decode_hand_missing_brian_label() {
        assert!(decode_hand("Zayaka:25").is_err());
    }

    #[test]
    fn test_decode_hand_non_numeric() {
        assert!(decode_hand("Zayaka:abc, Brian:0").is_err());
        assert!(decode_hand("Zayaka:25, Brian:xyz").is_err());
    }

    #[test]
    fn test_decode_hand_four_digit_scores_unambiguous() {
        let hand = decode_hand("Zayaka:1234, Brian:5678").unwrap();
        assert_eq!(hand, HandScore::new(1234, 5678));
    }

    #[test]
    fn test_encode_match_empty() {
        assert_eq!(encode_match(&[]), "");
        assert!(decode_match("").is_empty());
    }

    #[test]
    fn test_match_round_trip() {
        let hands = vec![
            HandScore::new(25, 0),
            HandScore::new(0, 30),
            HandScore::new(999, 0),
            HandScore::new(0, 0),
        ];
        let blob = encode_match(&hands);
        assert_eq!(decode_match(&blob), hands);
    }

    #[test]
    fn test_decode_match_skips_malformed_segments() {
        let hands = decode_match("Zayaka:25, Brian:0; garbage; Zayaka:10, Brian:0");
        assert_eq!(hands, vec![HandScore::new(25, 0), HandScore::new(10, 0)]);
    }

    #[test]
    fn test_decode_match_all_garbage() {
        assert!(decode_match("not; a; blob").is_empty());
    }
}
