//! Single open frame invariant: only the last frame may take deliveries.

use super::super::Game;
use super::Invariant;

/// Invariant: every frame before the last is full.
///
/// Rolls always land in the last frame, so an earlier open frame means a
/// delivery was routed past a frame that still had room.
pub struct SingleOpenFrameInvariant;

impl Invariant<Game> for SingleOpenFrameInvariant {
    fn holds(game: &Game) -> bool {
        match game.frames().split_last() {
            Some((_, earlier)) => earlier.iter().all(|frame| frame.is_full()),
            None => false,
        }
    }

    fn description() -> &'static str {
        "Only the last frame may be open"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::bowling::Frame;

    #[test]
    fn test_holds_through_a_game() {
        let mut game = Game::new();
        for pins in [3, 4, 10, 2] {
            game.roll(pins).unwrap();
            assert!(SingleOpenFrameInvariant::holds(&game));
        }
    }

    #[test]
    fn test_open_frame_behind_the_last_violates() {
        let mut game = Game::new();
        game.roll(3).unwrap();
        game.frames.push(Frame::new());
        assert!(!SingleOpenFrameInvariant::holds(&game));
    }

    #[test]
    fn test_no_frames_violates() {
        let mut game = Game::new();
        game.frames.clear();
        assert!(!SingleOpenFrameInvariant::holds(&game));
    }
}
