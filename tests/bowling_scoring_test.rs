//! Tests for game-level scoring and the score report.

use strictly_bowling::{Game, GameStatus, RollError, ScoreReport};

fn score_of(rolls: &[i32]) -> ScoreReport {
    Game::replay(rolls.iter().copied()).score()
}

#[test]
fn test_no_rolls() {
    let report = score_of(&[]);
    assert_eq!(*report.total_score(), 0);
    assert_eq!(report.strikes(), &vec![false]);
    assert_eq!(report.spares(), &vec![false]);
    assert_eq!(report.accumulated_frame_score(), &vec![0]);
    assert_eq!(report.pins_per_roll(), &vec![0]);
}

#[test]
fn test_single_roll() {
    let report = score_of(&[1]);
    assert_eq!(*report.total_score(), 1);
    assert_eq!(report.pins_per_roll(), &vec![1]);
}

#[test]
fn test_two_rolls() {
    let report = score_of(&[1, 4]);
    assert_eq!(*report.total_score(), 5);
    assert_eq!(report.pins_per_roll(), &vec![1, 4]);
}

#[test]
fn test_negative_pins_ignored() {
    let mut game = Game::new();
    assert_eq!(game.roll(-1), Err(RollError::OutOfRange(-1)));

    let report = game.score();
    assert_eq!(report, score_of(&[]));
}

#[test]
fn test_more_than_ten_pins_ignored() {
    let mut game = Game::new();
    assert_eq!(game.roll(11), Err(RollError::OutOfRange(11)));
    assert_eq!(*game.score().total_score(), 0);
    assert_eq!(game.score().strikes(), &vec![false]);
}

#[test]
fn test_frame_cannot_exceed_ten_pins() {
    let report = score_of(&[2, 9, 4]);
    assert_eq!(*report.total_score(), 6);
    assert_eq!(report.strikes(), &vec![false]);
    assert_eq!(report.spares(), &vec![false]);
    assert_eq!(report.accumulated_frame_score(), &vec![6]);
}

#[test]
fn test_spare() {
    let report = score_of(&[2, 3, 0, 10, 5]);
    assert_eq!(*report.total_score(), 25);
    assert_eq!(report.strikes(), &vec![false, false, false]);
    assert_eq!(report.spares(), &vec![false, true, false]);
    assert_eq!(report.accumulated_frame_score(), &vec![5, 20, 25]);
}

#[test]
fn test_strike() {
    let report = score_of(&[2, 3, 10, 5, 3]);
    assert_eq!(*report.total_score(), 31);
    assert_eq!(report.strikes(), &vec![false, true, false]);
    assert_eq!(report.spares(), &vec![false, false, false]);
    assert_eq!(report.accumulated_frame_score(), &vec![5, 23, 31]);
    assert_eq!(report.pins_per_roll(), &vec![2, 3, 10, 0, 5, 3]);
}

#[test]
fn test_strike_with_pending_bonus() {
    let report = score_of(&[2, 3, 10, 2]);
    assert_eq!(*report.total_score(), 19);
    assert_eq!(report.strikes(), &vec![false, true, false]);
    assert_eq!(report.accumulated_frame_score(), &vec![5, 17, 19]);
}

#[test]
fn test_tenth_frame_strike_with_bonus_rolls() {
    let mut rolls = [3, 4].repeat(9);
    rolls.extend([10, 7, 2]);

    let report = score_of(&rolls);
    assert_eq!(report.accumulated_frame_score().len(), 10);
    assert_eq!(report.accumulated_frame_score()[8], 63);
    assert_eq!(report.accumulated_frame_score()[9], 82);
    assert_eq!(*report.total_score(), 82);
    assert_eq!(report.strikes().len(), 11);
    assert!(report.strikes()[9]);
    assert_eq!(&report.pins_per_roll()[18..], &[10, 0, 7, 2]);
}

#[test]
fn test_perfect_game() {
    let mut game = Game::replay([10; 12]);
    let report = game.score();

    assert_eq!(*report.total_score(), 300);
    assert_eq!(
        report.accumulated_frame_score(),
        &(1..=10).map(|frame| frame * 30).collect::<Vec<u32>>()
    );
    assert_eq!(report.strikes(), &vec![true; 12]);
    assert_eq!(report.pins_per_roll().len(), 24);
    assert_eq!(game.roll(10), Err(RollError::GameComplete));
}

#[test]
fn test_all_spares() {
    let report = score_of(&[5; 21]);
    assert_eq!(*report.total_score(), 150);
    assert_eq!(report.spares().iter().filter(|&&spare| spare).count(), 10);
}

#[test]
fn test_gutter_game() {
    let mut game = Game::replay([0; 20]);
    assert_eq!(*game.score().total_score(), 0);
    assert_eq!(game.status(), GameStatus::Complete);
    assert_eq!(game.roll(0), Err(RollError::GameComplete));
}

#[test]
fn test_rejections_leave_score_unchanged() {
    let mut game = Game::replay([4, 5, 10, 3]);
    let before = game.score();

    for pins in [-5, 8, 11, 100] {
        assert!(game.roll(pins).is_err());
        assert_eq!(game.score(), before);
    }
}

#[test]
fn test_frame_pins_never_exceed_ten() {
    let rolls = [7, 7, 3, 9, 1, 10, 6, 5, 4, 2, 8, 8, 2, 10, 10, 9, 9, 0, 10, 10, 10];
    let game = Game::replay(rolls);
    for frame in game.frames() {
        assert!(frame.score() <= 10);
    }
}
