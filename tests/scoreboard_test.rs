//! Tests for the scoreboard drivers behind the `score` and `play` commands.

use strictly_bowling::{OutputFormat, RollError, ScoreboardConfig, ScoreboardError, play, score_rolls};

fn text_config(strict: bool) -> ScoreboardConfig {
    ScoreboardConfig::default().with_overrides(Some(OutputFormat::Text), strict)
}

fn json_config() -> ScoreboardConfig {
    ScoreboardConfig::default().with_overrides(Some(OutputFormat::Json), false)
}

fn json_lines(out: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_strict_score_aborts_on_first_rejection() {
    let mut out = Vec::new();
    let err = score_rolls([2, 3, 11, 4], &text_config(true), &mut out).unwrap_err();

    assert!(matches!(
        err,
        ScoreboardError::Rejected {
            pins: 11,
            reason: RollError::OutOfRange(11)
        }
    ));
    assert_eq!(err.to_string(), "Delivery 11 rejected: Pin count 11 is out of range (0-10)");
    assert!(out.is_empty());
}

#[test]
fn test_lenient_score_skips_rejections() {
    let mut out = Vec::new();
    let game = score_rolls([2, 3, 11, 10, -1, 5, 3], &text_config(false), &mut out).unwrap();

    assert_eq!(game.history().len(), 5);
    assert_eq!(*game.score().total_score(), 31);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Total: 31"));
    assert!(text.trim_end().ends_with("Frame 4"));
}

#[test]
fn test_score_writes_json_report() {
    let mut out = Vec::new();
    score_rolls([10; 12], &json_config(), &mut out).unwrap();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["totalScore"], 300);
    assert_eq!(report["accumulatedFrameScore"][9], 300);
}

#[test]
fn test_play_stops_at_quit() {
    let input = "3\n\n4\nquit\n5\n".as_bytes();
    let mut out = Vec::new();
    let game = play(input, &text_config(false), &mut out).unwrap();

    assert_eq!(game.history().len(), 2);
    assert_eq!(*game.score().total_score(), 7);
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Enter pins per delivery"));
    assert!(text.contains("Frame 1: 4 (Open)"));
}

#[test]
fn test_play_stops_when_game_complete() {
    let input = "10\n".repeat(13);
    let mut out = Vec::new();
    let game = play(input.as_bytes(), &json_config(), &mut out).unwrap();

    assert!(game.is_complete());
    assert_eq!(game.history().len(), 12);

    let events = json_lines(&out);
    assert_eq!(events.len(), 12);
    let last = events.last().unwrap();
    assert_eq!(last["status"], "Game complete");
    assert_eq!(last["score"]["totalScore"], 300);
}

#[test]
fn test_play_reports_rejected_lines() {
    let input = "abc\n11\n7\n".as_bytes();
    let mut out = Vec::new();
    let game = play(input, &json_config(), &mut out).unwrap();

    assert_eq!(game.history().len(), 1);

    let events = json_lines(&out);
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["rejected"], "'abc' is not a pin count");
    assert!(events[0].get("accepted").is_none());
    assert_eq!(events[1]["rejected"], "Pin count 11 is out of range (0-10)");
    assert_eq!(events[2]["accepted"]["delivery"], 7);
    assert_eq!(events[2]["accepted"]["mark"], "pending");
    assert_eq!(events[2]["status"], "Frame 1");
}
