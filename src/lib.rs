//! # avalon-engine
//!
//! Game-state engine for a single match of The Resistance: Avalon.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven**: Role rosters, mission sizes, fail thresholds and
//!    visibility sets come from a `Ruleset`, loaded from JSON or built in code.
//!
//! 2. **All-or-Nothing Transitions**: Every operation validates its inputs
//!    before mutating. A rejected call leaves the match unchanged.
//!
//! 3. **Caller-Driven**: No threads, timers or I/O. The surrounding adapter
//!    (chat bot, CLI) owns each `Match` and serializes calls to it.
//!
//! ## Flow
//!
//! ```text
//! ProposingTeam --propose_team--> AwaitingApproval --approved--> AwaitingMissionResult
//!       ^   ^                           |                               |
//!       |   +--------rejected-----------+                               |
//!       +----------------------record_mission_result--------------------+
//! ```
//!
//! After four rejections in a day the next proposal skips the vote.
//!
//! ## Modules
//!
//! - `core`: Ruleset, players, phases, RNG, event log, the `Match` aggregate
//! - `rules`: Role assignment, approval tally, mission tally, win evaluation
//! - `error`: Engine and ruleset errors

pub mod core;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Ballots, GameRng, Match, MatchEvent, MissionBoard, MissionOutcome, MissionRules, Phase,
    Player, RoleId, Ruleset, Seat, TableRules, Team, Visibility, Winner,
};

pub use crate::rules::HAMMER_LIMIT;

pub use crate::error::{EngineError, EngineResult, RulesetError};
