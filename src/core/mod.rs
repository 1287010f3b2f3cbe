//! Core match types: ruleset, players, phases, RNG, event log, match state.
//!
//! The ruleset is data; nothing here hardcodes roles or table sizes.

pub mod ruleset;
pub mod player;
pub mod rng;
pub mod phase;
pub mod action;
pub mod state;

pub use ruleset::{roles, MissionRules, RoleId, Ruleset, TableRules, Visibility};
pub use player::{Player, Seat};
pub use rng::GameRng;
pub use phase::{MissionBoard, MissionOutcome, Phase, Winner, MISSIONS_TO_WIN, MISSION_COUNT};
pub use action::{Ballots, MatchEvent, Team};
pub use state::Match;
