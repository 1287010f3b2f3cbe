//! Team structure checks and the approval tally.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Seat, Team};
use crate::error::{EngineError, EngineResult};

/// Consecutive rejections after which the next team skips the vote.
pub const HAMMER_LIMIT: usize = 4;

/// Validate a proposed team against the required size and the seated names.
///
/// Checks run in order: size, membership of every name, then repeats.
pub fn validate_team<S: AsRef<str>>(
    names: &[S],
    want: usize,
    seats: &FxHashMap<String, Seat>,
) -> EngineResult<Team> {
    if names.len() != want {
        return Err(EngineError::TeamSize {
            got: names.len(),
            want,
        });
    }

    if let Some(unknown) = names.iter().map(AsRef::as_ref).find(|n| !seats.contains_key(*n)) {
        return Err(EngineError::UnknownPlayer(unknown.to_string()));
    }

    let mut seen = FxHashSet::default();
    for name in names.iter().map(AsRef::as_ref) {
        if !seen.insert(name) {
            return Err(EngineError::DuplicatePlayer(name.to_string()));
        }
    }

    Ok(names.iter().map(|n| n.as_ref().to_string()).collect())
}

/// Is the team approved?
///
/// A team passes only on a strict majority of approvals; exact ties reject.
#[must_use]
pub fn tally_approval(ballots: &[bool]) -> bool {
    let rejects = ballots.iter().filter(|&&b| !b).count();
    let approved = rejects * 2 < ballots.len();
    log::trace!("approval tally: {} of {} rejected", rejects, ballots.len());
    approved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(names: &[&str]) -> FxHashMap<String, Seat> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.to_string(), Seat::new(i)))
            .collect()
    }

    #[test]
    fn test_validate_team_ok() {
        let seats = seats(&["a", "b", "c", "d", "e"]);
        let team = validate_team(&["c", "a"], 2, &seats).unwrap();
        assert_eq!(team.as_slice(), &["c".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_validate_team_size_first() {
        let seats = seats(&["a", "b", "c", "d", "e"]);
        let err = validate_team(&["zed", "zed", "a"], 2, &seats).unwrap_err();
        assert_eq!(err, EngineError::TeamSize { got: 3, want: 2 });
    }

    #[test]
    fn test_validate_team_unknown_before_duplicate() {
        let seats = seats(&["a", "b", "c", "d", "e"]);
        let err = validate_team(&["a", "a", "zed"], 3, &seats).unwrap_err();
        assert_eq!(err, EngineError::UnknownPlayer("zed".to_string()));
    }

    #[test]
    fn test_validate_team_duplicate() {
        let seats = seats(&["a", "b", "c", "d", "e"]);
        let err = validate_team(&["b", "c", "b"], 3, &seats).unwrap_err();
        assert_eq!(err, EngineError::DuplicatePlayer("b".to_string()));
    }

    #[test]
    fn test_validate_team_case_sensitive() {
        let seats = seats(&["alice", "bob"]);
        let err = validate_team(&["Alice"], 1, &seats).unwrap_err();
        assert_eq!(err, EngineError::UnknownPlayer("Alice".to_string()));
    }

    #[test]
    fn test_tally_three_players() {
        assert!(!tally_approval(&[false, false, true]));
        assert!(tally_approval(&[true, true, false]));
    }

    #[test]
    fn test_tally_ties_reject() {
        assert!(!tally_approval(&[true, true, false, false]));
        assert!(tally_approval(&[true, true, true, false]));
    }

    #[test]
    fn test_tally_five_players() {
        assert!(tally_approval(&[true, true, true, false, false]));
        assert!(!tally_approval(&[true, true, false, false, false]));
    }
}
