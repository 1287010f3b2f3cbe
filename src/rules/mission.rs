//! Mission tally and win evaluation.

use crate::core::{MissionBoard, MissionOutcome, Winner, MISSIONS_TO_WIN};

/// Did the mission succeed?
///
/// It fails once the number of fail cards reaches `required_fails`.
#[must_use]
pub fn tally_mission(outcomes: &[bool], required_fails: usize) -> bool {
    let fails = outcomes.iter().filter(|&&o| !o).count();
    log::trace!("mission tally: {} fails, {} required", fails, required_fails);
    fails < required_fails
}

/// Evaluate the board.
///
/// Evil is checked first; both sides reaching three is impossible with five
/// missions.
#[must_use]
pub fn evaluate_winner(board: &MissionBoard) -> Winner {
    if board.count(MissionOutcome::Failed) >= MISSIONS_TO_WIN {
        Winner::EvilWin
    } else if board.count(MissionOutcome::Succeeded) >= MISSIONS_TO_WIN {
        Winner::GoodWin
    } else {
        Winner::NoWinnerYet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MissionOutcome::*;

    #[test]
    fn test_tally_single_fail() {
        assert!(!tally_mission(&[false], 1));
        assert!(tally_mission(&[true], 1));
    }

    #[test]
    fn test_tally_two_fail_mission() {
        assert!(tally_mission(&[true, false, true, true], 2));
        assert!(!tally_mission(&[false, false, true, true], 2));
    }

    #[test]
    fn test_evil_wins_on_three_fails() {
        for board in [
            [Failed, Failed, Failed, Pending, Pending],
            [Failed, Succeeded, Failed, Succeeded, Failed],
            [Succeeded, Failed, Failed, Failed, Pending],
        ] {
            assert_eq!(evaluate_winner(&MissionBoard::from(board)), Winner::EvilWin);
        }
    }

    #[test]
    fn test_good_wins_on_three_successes() {
        let board = MissionBoard::from([Succeeded, Failed, Succeeded, Failed, Succeeded]);
        assert_eq!(evaluate_winner(&board), Winner::GoodWin);
    }

    #[test]
    fn test_no_winner_yet() {
        assert_eq!(evaluate_winner(&MissionBoard::new()), Winner::NoWinnerYet);

        let board = MissionBoard::from([Succeeded, Failed, Succeeded, Failed, Pending]);
        assert_eq!(evaluate_winner(&board), Winner::NoWinnerYet);
        assert!(!evaluate_winner(&board).is_decided());
    }
}
