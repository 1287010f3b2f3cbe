//! Match phases, mission outcomes and the mission board.

use serde::{Deserialize, Serialize};

/// Number of missions (days) in a match.
pub const MISSION_COUNT: usize = 5;

/// Missions one side must win to take the match.
pub const MISSIONS_TO_WIN: usize = 3;

/// Three-state cycle driven by the match.
///
/// `ProposingTeam -> AwaitingApproval -> AwaitingMissionResult -> ProposingTeam`.
/// A rejected team returns from `AwaitingApproval` to `ProposingTeam`, and a
/// hammered proposal skips `AwaitingApproval`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    ProposingTeam,
    AwaitingApproval,
    AwaitingMissionResult,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::ProposingTeam => "ProposingTeam",
            Phase::AwaitingApproval => "AwaitingApproval",
            Phase::AwaitingMissionResult => "AwaitingMissionResult",
        };
        f.write_str(name)
    }
}

/// Outcome of a single mission slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionOutcome {
    #[default]
    Pending,
    Succeeded,
    Failed,
}

/// Result of win evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    EvilWin,
    GoodWin,
    NoWinnerYet,
}

impl Winner {
    /// True once either side has won.
    #[must_use]
    pub fn is_decided(self) -> bool {
        self != Winner::NoWinnerYet
    }
}

/// Fixed five-slot record of mission outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionBoard([MissionOutcome; MISSION_COUNT]);

impl MissionBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcome of the mission on `day`, `None` past the last mission.
    #[must_use]
    pub fn get(&self, day: usize) -> Option<MissionOutcome> {
        self.0.get(day).copied()
    }

    pub(crate) fn set(&mut self, day: usize, outcome: MissionOutcome) {
        self.0[day] = outcome;
    }

    /// Number of slots holding `outcome`.
    #[must_use]
    pub fn count(&self, outcome: MissionOutcome) -> usize {
        self.0.iter().filter(|&&o| o == outcome).count()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[MissionOutcome] {
        &self.0
    }
}

impl From<[MissionOutcome; MISSION_COUNT]> for MissionBoard {
    fn from(slots: [MissionOutcome; MISSION_COUNT]) -> Self {
        Self(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_default() {
        assert_eq!(Phase::default(), Phase::ProposingTeam);
        assert_eq!(format!("{}", Phase::AwaitingMissionResult), "AwaitingMissionResult");
    }

    #[test]
    fn test_board_counts() {
        let mut board = MissionBoard::new();
        assert_eq!(board.count(MissionOutcome::Pending), MISSION_COUNT);

        board.set(0, MissionOutcome::Failed);
        board.set(3, MissionOutcome::Succeeded);

        assert_eq!(board.count(MissionOutcome::Failed), 1);
        assert_eq!(board.count(MissionOutcome::Succeeded), 1);
        assert_eq!(board.get(0), Some(MissionOutcome::Failed));
        assert_eq!(board.get(5), None);
    }

    #[test]
    fn test_board_serialization() {
        let board = MissionBoard::from([
            MissionOutcome::Succeeded,
            MissionOutcome::Failed,
            MissionOutcome::Pending,
            MissionOutcome::Pending,
            MissionOutcome::Pending,
        ]);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: MissionBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
