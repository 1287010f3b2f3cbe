//! Ruleset: the data that drives a match.
//!
//! A ruleset provides, per supported player count:
//! - the role roster (one role per seat)
//! - five missions, each with a team size and a required-fail threshold
//!
//! and three visibility sets shared by every table: the roles Merlin sees,
//! the roles evil players see, and the roles Percival sees.
//!
//! The engine never interprets role identifiers beyond set membership.
//!
//! ## JSON format
//!
//! ```json
//! {
//!   "players": { "5": ["merlin", "percival", "servant", "morgana", "assassin"] },
//!   "missions": { "5": [[2, 1], [3, 1], [2, 1], [3, 1], [3, 1]] },
//!   "merlin_visible": ["morgana", "assassin"],
//!   "evil_visible": ["morgana", "assassin"],
//!   "percival_visible": ["merlin", "morgana"]
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::phase::MISSION_COUNT;
use crate::error::RulesetError;

/// Role identifiers used by [`Ruleset::standard`].
pub mod roles {
    pub const MERLIN: &str = "merlin";
    pub const PERCIVAL: &str = "percival";
    pub const SERVANT: &str = "servant";
    pub const MORGANA: &str = "morgana";
    pub const ASSASSIN: &str = "assassin";
    pub const MORDRED: &str = "mordred";
    pub const OBERON: &str = "oberon";
    pub const MINION: &str = "minion";
}

/// Role identifier. Opaque to the engine, compared for equality only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(String);

impl RoleId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The three "can see" relations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Roles revealed to Merlin.
    Merlin,
    /// Roles revealed to the evil team.
    Evil,
    /// Roles revealed to Percival.
    Percival,
}

/// Team size and fail threshold for one mission.
///
/// Serialized as a `[team_size, required_fails]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct MissionRules {
    pub team_size: usize,
    pub required_fails: usize,
}

impl MissionRules {
    #[must_use]
    pub const fn new(team_size: usize, required_fails: usize) -> Self {
        Self {
            team_size,
            required_fails,
        }
    }
}

impl From<(usize, usize)> for MissionRules {
    fn from((team_size, required_fails): (usize, usize)) -> Self {
        Self::new(team_size, required_fails)
    }
}

impl From<MissionRules> for (usize, usize) {
    fn from(rules: MissionRules) -> Self {
        (rules.team_size, rules.required_fails)
    }
}

/// Everything that depends on the player count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRules {
    /// Role multiset; its length is the player count.
    pub roles: Vec<RoleId>,

    /// One entry per mission day.
    pub missions: [MissionRules; MISSION_COUNT],
}

impl TableRules {
    /// Build a table from role names and `(team_size, required_fails)` pairs.
    pub fn new<R: Into<RoleId>>(
        roles: impl IntoIterator<Item = R>,
        missions: [(usize, usize); MISSION_COUNT],
    ) -> Self {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
            missions: missions.map(MissionRules::from),
        }
    }

    /// Number of players this table seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roles.len()
    }

    /// Rules for the mission on `day`.
    #[must_use]
    pub fn mission(&self, day: usize) -> Option<MissionRules> {
        self.missions.get(day).copied()
    }

    fn validate(&self, player_count: usize) -> Result<(), RulesetError> {
        let invalid = |reason: String| RulesetError::Invalid {
            player_count,
            reason,
        };

        if self.roles.len() != player_count {
            return Err(invalid(format!(
                "roster has {} roles",
                self.roles.len()
            )));
        }

        for (day, mission) in self.missions.iter().enumerate() {
            if mission.team_size == 0 || mission.team_size > player_count {
                return Err(invalid(format!(
                    "mission {} has team size {}",
                    day, mission.team_size
                )));
            }
            if mission.required_fails == 0 || mission.required_fails > mission.team_size {
                return Err(invalid(format!(
                    "mission {} requires {} fails from a team of {}",
                    day, mission.required_fails, mission.team_size
                )));
            }
        }

        Ok(())
    }
}

/// Complete, immutable ruleset.
///
/// Built in code with the `with_*` builders, or loaded from JSON. Loading
/// validates every table; tables built in code can be checked with
/// [`Ruleset::validate`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RulesetDocument", into = "RulesetDocument")]
pub struct Ruleset {
    tables: BTreeMap<usize, TableRules>,
    merlin_visible: BTreeSet<RoleId>,
    evil_visible: BTreeSet<RoleId>,
    percival_visible: BTreeSet<RoleId>,
}

impl Ruleset {
    /// Create an empty ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the table for its player count.
    #[must_use]
    pub fn with_table(mut self, table: TableRules) -> Self {
        self.tables.insert(table.player_count(), table);
        self
    }

    /// Set the roles visible under `relation`.
    #[must_use]
    pub fn with_visible<R: Into<RoleId>>(
        mut self,
        relation: Visibility,
        roles: impl IntoIterator<Item = R>,
    ) -> Self {
        *self.visible_set_mut(relation) = roles.into_iter().map(Into::into).collect();
        self
    }

    /// The standard 5-10 player table.
    #[must_use]
    pub fn standard() -> Self {
        use roles::*;

        let small = [(2, 1), (3, 1), (2, 1), (3, 1), (3, 1)];
        let six = [(2, 1), (3, 1), (4, 1), (3, 1), (4, 1)];
        let seven = [(2, 1), (3, 1), (3, 1), (4, 2), (4, 1)];
        let large = [(3, 1), (4, 1), (4, 1), (5, 2), (5, 1)];

        Self::new()
            .with_table(TableRules::new(
                [MERLIN, PERCIVAL, SERVANT, MORGANA, ASSASSIN],
                small,
            ))
            .with_table(TableRules::new(
                [MERLIN, PERCIVAL, SERVANT, SERVANT, MORGANA, ASSASSIN],
                six,
            ))
            .with_table(TableRules::new(
                [MERLIN, PERCIVAL, SERVANT, SERVANT, MORGANA, ASSASSIN, OBERON],
                seven,
            ))
            .with_table(TableRules::new(
                [MERLIN, PERCIVAL, SERVANT, SERVANT, SERVANT, MORGANA, ASSASSIN, MINION],
                large,
            ))
            .with_table(TableRules::new(
                [
                    MERLIN, PERCIVAL, SERVANT, SERVANT, SERVANT, SERVANT, MORGANA, ASSASSIN,
                    MORDRED,
                ],
                large,
            ))
            .with_table(TableRules::new(
                [
                    MERLIN, PERCIVAL, SERVANT, SERVANT, SERVANT, SERVANT, MORGANA, ASSASSIN,
                    MORDRED, OBERON,
                ],
                large,
            ))
            .with_visible(Visibility::Merlin, [MORGANA, ASSASSIN, OBERON, MINION])
            .with_visible(Visibility::Evil, [MORGANA, ASSASSIN, MORDRED, MINION])
            .with_visible(Visibility::Percival, [MERLIN, MORGANA])
    }

    /// Parse and validate a ruleset from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, RulesetError> {
        let document: RulesetDocument = serde_json::from_str(json)?;
        Self::try_from(document)
    }

    /// Parse and validate a ruleset from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, RulesetError> {
        let document: RulesetDocument = serde_json::from_reader(reader)?;
        Self::try_from(document)
    }

    /// Load a ruleset from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RulesetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let ruleset = Self::from_json_str(&json)?;
        log::info!(
            "loaded ruleset from {} ({} tables)",
            path.display(),
            ruleset.tables.len()
        );
        Ok(ruleset)
    }

    /// Check every table against its player count.
    pub fn validate(&self) -> Result<(), RulesetError> {
        self.tables
            .iter()
            .try_for_each(|(&player_count, table)| table.validate(player_count))
    }

    /// Table for `player_count` players, if configured.
    #[must_use]
    pub fn table(&self, player_count: usize) -> Option<&TableRules> {
        self.tables.get(&player_count)
    }

    /// Configured player counts in ascending order.
    pub fn player_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.tables.keys().copied()
    }

    /// Roles visible under `relation`.
    #[must_use]
    pub fn visible_roles(&self, relation: Visibility) -> &BTreeSet<RoleId> {
        match relation {
            Visibility::Merlin => &self.merlin_visible,
            Visibility::Evil => &self.evil_visible,
            Visibility::Percival => &self.percival_visible,
        }
    }

    /// Is `role` visible under `relation`?
    #[must_use]
    pub fn is_visible(&self, relation: Visibility, role: &RoleId) -> bool {
        self.visible_roles(relation).contains(role)
    }

    fn visible_set_mut(&mut self, relation: Visibility) -> &mut BTreeSet<RoleId> {
        match relation {
            Visibility::Merlin => &mut self.merlin_visible,
            Visibility::Evil => &mut self.evil_visible,
            Visibility::Percival => &mut self.percival_visible,
        }
    }
}

/// On-disk layout: rosters and missions keyed separately by player count.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RulesetDocument {
    players: BTreeMap<usize, Vec<RoleId>>,
    missions: BTreeMap<usize, Vec<MissionRules>>,
    #[serde(default)]
    merlin_visible: Vec<RoleId>,
    #[serde(default)]
    evil_visible: Vec<RoleId>,
    #[serde(default)]
    percival_visible: Vec<RoleId>,
}

impl TryFrom<RulesetDocument> for Ruleset {
    type Error = RulesetError;

    fn try_from(mut document: RulesetDocument) -> Result<Self, Self::Error> {
        let mut ruleset = Ruleset::new()
            .with_visible(Visibility::Merlin, document.merlin_visible)
            .with_visible(Visibility::Evil, document.evil_visible)
            .with_visible(Visibility::Percival, document.percival_visible);

        for (player_count, roles) in document.players {
            let missions = document.missions.remove(&player_count).ok_or_else(|| {
                RulesetError::Invalid {
                    player_count,
                    reason: "no missions configured".to_string(),
                }
            })?;
            let got = missions.len();
            let missions: [MissionRules; MISSION_COUNT] =
                missions.try_into().map_err(|_| RulesetError::Invalid {
                    player_count,
                    reason: format!("expected {} missions, got {}", MISSION_COUNT, got),
                })?;

            let table = TableRules { roles, missions };
            table.validate(player_count)?;
            ruleset.tables.insert(player_count, table);
        }

        if let Some(&player_count) = document.missions.keys().next() {
            return Err(RulesetError::Invalid {
                player_count,
                reason: "missions configured without a roster".to_string(),
            });
        }

        Ok(ruleset)
    }
}

impl From<Ruleset> for RulesetDocument {
    fn from(ruleset: Ruleset) -> Self {
        let mut players = BTreeMap::new();
        let mut missions = BTreeMap::new();
        for (player_count, table) in ruleset.tables {
            players.insert(player_count, table.roles);
            missions.insert(player_count, table.missions.to_vec());
        }

        Self {
            players,
            missions,
            merlin_visible: ruleset.merlin_visible.into_iter().collect(),
            evil_visible: ruleset.evil_visible.into_iter().collect(),
            percival_visible: ruleset.percival_visible.into_iter().collect(),
        }
    }
}
