//! Match event log.
//!
//! Every successful transition appends one `MatchEvent`. The log is enough
//! to rebuild a match from its seating (see `Match::replay`).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Seat;

/// Names on a proposed team. Inline for the usual 2-5 members.
pub type Team = SmallVec<[String; 5]>;

/// One ballot per voter, in seat order. Inline for up to ten players.
pub type Ballots = SmallVec<[bool; 10]>;

/// A recorded transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A structurally valid team was put forward.
    TeamProposed {
        day: usize,
        proposer: Seat,
        team: Team,
        /// The hammer was up, so the team skipped the approval vote.
        forced: bool,
    },

    /// Approval ballots were tallied.
    VoteTallied {
        day: usize,
        ballots: Ballots,
        approved: bool,
    },

    /// Mission ballots were tallied.
    MissionResolved {
        day: usize,
        outcomes: Ballots,
        succeeded: bool,
    },
}

impl MatchEvent {
    /// Mission day the event belongs to.
    #[must_use]
    pub fn day(&self) -> usize {
        match self {
            MatchEvent::TeamProposed { day, .. }
            | MatchEvent::VoteTallied { day, .. }
            | MatchEvent::MissionResolved { day, .. } => *day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_event_day() {
        let event = MatchEvent::VoteTallied {
            day: 2,
            ballots: smallvec![true, false, true],
            approved: true,
        };
        assert_eq!(event.day(), 2);
    }

    #[test]
    fn test_event_serialization() {
        let event = MatchEvent::TeamProposed {
            day: 0,
            proposer: Seat::new(1),
            team: smallvec!["alice".to_string(), "bob".to_string()],
            forced: false,
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: MatchEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }
}
