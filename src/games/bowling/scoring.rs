//! Look-ahead scoring over a frame sequence.
//!
//! Frames never reference their siblings. Bonuses are read here by index
//! into the next one or two frames.

use super::frame::Frame;
use tracing::instrument;

/// Frames counted toward the official total.
pub const CANONICAL_FRAMES: usize = 10;

/// Score of the frame at `index` (0-based), bonuses included.
///
/// A missing frame scores 0. A strike adds the next two deliveries, a spare
/// the next one; deliveries not yet thrown count as 0.
///
/// Strike bonuses count physical deliveries: when the next frame is also a
/// strike, the second bonus ball is the first roll of the frame after it
/// rather than the next frame's raw score, so X-X-7 credits the first
/// frame 27.
#[instrument(skip(frames))]
pub fn frame_score(frames: &[Frame], index: usize) -> u32 {
    let Some(frame) = frames.get(index) else {
        return 0;
    };

    let mut score = frame.score();
    if frame.is_strike() {
        score += strike_bonus(frames, index);
    } else if frame.is_spare() {
        score += first_roll(frames, index + 1);
    }
    score
}

/// Next two physical deliveries after the strike at `index`.
fn strike_bonus(frames: &[Frame], index: usize) -> u32 {
    match frames.get(index + 1) {
        // A strike holds one real ball; the second comes from the frame after.
        Some(next) if next.is_strike() => next.score() + first_roll(frames, index + 2),
        Some(next) => next.score(),
        None => 0,
    }
}

fn first_roll(frames: &[Frame], index: usize) -> u32 {
    frames
        .get(index)
        .and_then(Frame::score_first_roll)
        .map(u32::from)
        .unwrap_or(0)
}

/// Sum of the canonical frame scores.
#[instrument(skip(frames), fields(frames = frames.len()))]
pub fn total_score(frames: &[Frame]) -> u32 {
    (0..CANONICAL_FRAMES)
        .map(|index| frame_score(frames, index))
        .sum()
}

/// Running totals, one per existing canonical frame.
#[instrument(skip(frames), fields(frames = frames.len()))]
pub fn accumulated_scores(frames: &[Frame]) -> Vec<u32> {
    let canonical = frames.len().min(CANONICAL_FRAMES);
    (0..canonical)
        .scan(0, |running, index| {
            *running += frame_score(frames, index);
            Some(*running)
        })
        .collect()
}
