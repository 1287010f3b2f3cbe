//! Rules applied by the match.
//!
//! - Role assignment from the ruleset roster
//! - Team checks and the approval tally (with the hammer limit)
//! - Mission tally and win evaluation
//!
//! These are pure functions over data; `Match` sequences them.

pub mod assignment;
pub mod voting;
pub mod mission;

pub use assignment::{assign_roles, check_roster, check_seating};
pub use voting::{tally_approval, validate_team, HAMMER_LIMIT};
pub use mission::{evaluate_winner, tally_mission};
