//! Role assignment.
//!
//! Deals the roster for the table size to the seated players with a uniform
//! random permutation. Every role in the roster is used exactly once.

use rustc_hash::FxHashSet;

use crate::core::{GameRng, Player, RoleId, Ruleset, TableRules};
use crate::error::{EngineError, EngineResult};

/// Check that `names` can be seated under `ruleset`.
///
/// Fails with `UnsupportedPlayerCount` when no table exists for the number
/// of names, and `DuplicatePlayer` when a name repeats.
pub fn check_seating<'r, S: AsRef<str>>(
    names: &[S],
    ruleset: &'r Ruleset,
) -> EngineResult<&'r TableRules> {
    let table = ruleset
        .table(names.len())
        .ok_or(EngineError::UnsupportedPlayerCount(names.len()))?;

    let mut seen = FxHashSet::default();
    for name in names {
        let name = name.as_ref();
        if !seen.insert(name) {
            return Err(EngineError::DuplicatePlayer(name.to_string()));
        }
    }

    Ok(table)
}

/// Check that already-dealt `players` hold exactly `table`'s roster.
///
/// Fails with `RosterMismatch` when a role is missing, extra or repeated
/// more often than the roster allows.
pub fn check_roster(players: &[Player], table: &TableRules) -> EngineResult<()> {
    let mut dealt: Vec<&RoleId> = players.iter().map(Player::role).collect();
    let mut roster: Vec<&RoleId> = table.roles.iter().collect();
    dealt.sort();
    roster.sort();

    if dealt == roster {
        Ok(())
    } else {
        Err(EngineError::RosterMismatch(table.player_count()))
    }
}

/// Deal roles to `names`, returning players in seat order.
pub fn assign_roles<S: AsRef<str>>(
    names: &[S],
    ruleset: &Ruleset,
    rng: &mut GameRng,
) -> EngineResult<Vec<Player>> {
    let table = check_seating(names, ruleset)?;
    Ok(deal(names, table, rng))
}

/// Shuffle `table`'s roster onto `names`, which must already be checked.
pub(crate) fn deal<S: AsRef<str>>(names: &[S], table: &TableRules, rng: &mut GameRng) -> Vec<Player> {
    let mut roles = table.roles.clone();
    rng.shuffle(&mut roles);

    names
        .iter()
        .zip(roles)
        .map(|(name, role)| Player::new(name.as_ref(), role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_roles(players: &[Player]) -> Vec<RoleId> {
        let mut roles: Vec<_> = players.iter().map(|p| p.role().clone()).collect();
        roles.sort();
        roles
    }

    #[test]
    fn test_assign_uses_whole_roster() {
        let ruleset = Ruleset::standard();
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        let players = assign_roles(&names, &ruleset, &mut GameRng::new(7)).unwrap();

        let names_out: Vec<_> = players.iter().map(Player::name).collect();
        assert_eq!(names_out, names);

        let mut expected = ruleset.table(7).unwrap().roles.clone();
        expected.sort();
        assert_eq!(sorted_roles(&players), expected);
    }

    #[test]
    fn test_assign_is_seeded() {
        let ruleset = Ruleset::standard();
        let names = ["a", "b", "c", "d", "e"];

        let first = assign_roles(&names, &ruleset, &mut GameRng::new(3)).unwrap();
        let second = assign_roles(&names, &ruleset, &mut GameRng::new(3)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unsupported_count() {
        let ruleset = Ruleset::standard();
        let err = assign_roles(&["a", "b", "c"], &ruleset, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, EngineError::UnsupportedPlayerCount(3));
    }

    #[test]
    fn test_duplicate_name() {
        let ruleset = Ruleset::standard();
        let err = assign_roles(&["a", "b", "c", "b", "e"], &ruleset, &mut GameRng::new(1))
            .unwrap_err();
        assert_eq!(err, EngineError::DuplicatePlayer("b".to_string()));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let ruleset = Ruleset::standard();
        let players = assign_roles(&["a", "A", "b", "B", "c"], &ruleset, &mut GameRng::new(1));
        assert!(players.is_ok());
    }

    #[test]
    fn test_dealt_players_match_roster() {
        let ruleset = Ruleset::standard();
        let table = ruleset.table(5).unwrap();
        let players = assign_roles(&["a", "b", "c", "d", "e"], &ruleset, &mut GameRng::new(9)).unwrap();
        assert_eq!(check_roster(&players, table), Ok(()));
    }

    #[test]
    fn test_repeated_role_breaks_roster() {
        let ruleset = Ruleset::standard();
        let table = ruleset.table(5).unwrap();
        let players: Vec<_> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|name| Player::new(*name, RoleId::new("morgana")))
            .collect();

        assert_eq!(check_roster(&players, table), Err(EngineError::RosterMismatch(5)));
    }
}
