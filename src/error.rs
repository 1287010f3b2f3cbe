//! Engine and ruleset errors.
//!
//! Every `EngineError` is a rejected operation: the match is left exactly as
//! it was before the call. Callers report the error and re-prompt.

use thiserror::Error;

use crate::core::Phase;

/// A rejected state transition or match creation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("expected to be in phase {want}, in phase {got} instead")]
    WrongPhase { got: Phase, want: Phase },

    #[error("expected a team of {want} players, got {got}")]
    TeamSize { got: usize, want: usize },

    #[error("expected {want} ballots, got {got}")]
    BallotCount { got: usize, want: usize },

    #[error("name {0} does not correspond to any player in the match")]
    UnknownPlayer(String),

    #[error("found multiple instances of {0}; players cannot appear more than once")]
    DuplicatePlayer(String),

    #[error("the ruleset has no table for {0} players")]
    UnsupportedPlayerCount(usize),

    #[error("roles do not match the roster for {0} players")]
    RosterMismatch(usize),

    #[error("all missions have been played")]
    MatchComplete,
}

/// A ruleset that could not be read or does not hold together.
#[derive(Debug, Error)]
pub enum RulesetError {
    #[error("failed to read ruleset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse ruleset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid table for {player_count} players: {reason}")]
    Invalid { player_count: usize, reason: String },
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_phase_message() {
        let err = EngineError::WrongPhase {
            got: Phase::AwaitingApproval,
            want: Phase::ProposingTeam,
        };
        assert_eq!(
            err.to_string(),
            "expected to be in phase ProposingTeam, in phase AwaitingApproval instead"
        );
    }

    #[test]
    fn test_ruleset_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: RulesetError = json_err.into();
        assert!(matches!(err, RulesetError::Json(_)));
    }
}
