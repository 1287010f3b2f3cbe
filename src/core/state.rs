//! The match aggregate.
//!
//! A `Match` owns one game of Avalon from the deal to the last mission:
//! - Seated players in turn order, and their roles
//! - Phase, day, turn and hammer counters
//! - The proposed team
//! - Vote history, mission board and event log
//!
//! Fields are private. State changes only through the three transitions
//! (`propose_team`, `record_approval_votes`, `record_mission_result`) and
//! `reset`. Every transition checks all of its preconditions before touching
//! any field, so a rejected call leaves the match exactly as it was.
//!
//! The history uses `im` persistent vectors, so cloning a match to inspect a
//! hypothetical line of play is cheap.
//!
//! ## Example
//!
//! ```
//! use avalon_engine::{Match, Phase, Ruleset};
//!
//! let names = ["ann", "ben", "cat", "dan", "eve"];
//! let mut game = Match::with_seed(names, Ruleset::standard(), 42).unwrap();
//!
//! assert_eq!(game.current_turn_player(), "ann");
//! game.propose_team(&["ann", "ben"]).unwrap();
//! assert!(game.record_approval_votes(&[true, true, true, false, false]).unwrap());
//! assert!(!game.record_mission_result(&[true, false]).unwrap());
//!
//! assert_eq!(game.phase(), Phase::ProposingTeam);
//! assert_eq!(game.day(), 1);
//! ```

use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHashMap;

use super::action::{Ballots, MatchEvent, Team};
use super::phase::{MissionBoard, MissionOutcome, Phase, Winner, MISSION_COUNT};
use super::player::{Player, Seat};
use super::rng::GameRng;
use super::ruleset::{MissionRules, Ruleset, TableRules, Visibility};
use crate::error::{EngineError, EngineResult};
use crate::rules::{assignment, mission, voting};

/// One game of Avalon.
#[derive(Clone, Debug)]
pub struct Match {
    ruleset: Arc<Ruleset>,
    /// Table for this player count.
    table: TableRules,

    // === Seating ===
    /// Players in turn order.
    players: Vec<Player>,
    /// Name -> seat index into `players`.
    seats: FxHashMap<String, Seat>,

    // === Progression ===
    phase: Phase,
    /// Mission index; equals `MISSION_COUNT` once every mission is played.
    day: usize,
    turn: Seat,
    hammer: usize,
    current_team: Team,

    // === History ===
    vote_history: Vector<Ballots>,
    board: MissionBoard,
    events: Vector<MatchEvent>,

    rng: GameRng,
}

impl Match {
    /// Seat `names` in order and deal roles with `rng`.
    ///
    /// Fails with `UnsupportedPlayerCount` if the ruleset has no table for
    /// this many players, or `DuplicatePlayer` if a name repeats.
    pub fn new<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        ruleset: impl Into<Arc<Ruleset>>,
        mut rng: GameRng,
    ) -> EngineResult<Self> {
        let ruleset = ruleset.into();
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let table = assignment::check_seating(&names, &ruleset)?.clone();
        let players = assignment::deal(&names, &table, &mut rng);

        log::debug!(
            "created {}-player match (seed {})",
            players.len(),
            rng.seed()
        );
        Ok(Self::seated(players, ruleset, table, rng))
    }

    /// Like [`Match::new`] with a seeded RNG.
    pub fn with_seed<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        ruleset: impl Into<Arc<Ruleset>>,
        seed: u64,
    ) -> EngineResult<Self> {
        Self::new(names, ruleset, GameRng::new(seed))
    }

    /// Seat players whose roles are already dealt.
    ///
    /// Used to rebuild a match from a known assignment. Fails like
    /// [`Match::new`] on the seating, and with `RosterMismatch` when the
    /// roles are not exactly the roster for this player count.
    pub fn from_players(
        players: Vec<Player>,
        ruleset: impl Into<Arc<Ruleset>>,
    ) -> EngineResult<Self> {
        let ruleset = ruleset.into();
        let names: Vec<&str> = players.iter().map(Player::name).collect();
        let table = assignment::check_seating(&names, &ruleset)?.clone();
        assignment::check_roster(&players, &table)?;

        Ok(Self::seated(players, ruleset, table, GameRng::from_entropy()))
    }

    /// Rebuild a match by re-applying a recorded event log.
    ///
    /// Fails with the first error a recorded transition produces, which
    /// means the log does not belong to this seating and ruleset.
    pub fn replay<'e>(
        players: Vec<Player>,
        ruleset: impl Into<Arc<Ruleset>>,
        events: impl IntoIterator<Item = &'e MatchEvent>,
    ) -> EngineResult<Self> {
        let mut game = Self::from_players(players, ruleset)?;

        for event in events {
            match event {
                MatchEvent::TeamProposed { team, .. } => {
                    game.propose_team(team.as_slice())?;
                }
                MatchEvent::VoteTallied { ballots, .. } => {
                    game.record_approval_votes(ballots)?;
                }
                MatchEvent::MissionResolved { outcomes, .. } => {
                    game.record_mission_result(outcomes)?;
                }
            }
        }

        Ok(game)
    }

    fn seated(players: Vec<Player>, ruleset: Arc<Ruleset>, table: TableRules, rng: GameRng) -> Self {
        let seats = players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name().to_string(), Seat::new(i)))
            .collect();

        Self {
            ruleset,
            table,
            players,
            seats,
            phase: Phase::ProposingTeam,
            day: 0,
            turn: Seat::default(),
            hammer: 0,
            current_team: Team::new(),
            vote_history: Vector::new(),
            board: MissionBoard::new(),
            events: Vector::new(),
            rng,
        }
    }

    /// Re-deal roles to the same seating and return to the opening state.
    pub fn reset(&mut self) {
        let names: Vec<&str> = self.players.iter().map(Player::name).collect();
        let players = assignment::deal(&names, &self.table, &mut self.rng);

        log::debug!("reset {}-player match", self.player_count());
        *self = Self::seated(
            players,
            Arc::clone(&self.ruleset),
            self.table.clone(),
            self.rng.clone(),
        );
    }

    // === Seating ===

    #[must_use]
    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Player names in turn order.
    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(Player::name)
    }

    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.seats.get(name).map(|seat| &self.players[seat.index()])
    }

    #[must_use]
    pub fn seat_of(&self, name: &str) -> Option<Seat> {
        self.seats.get(name).copied()
    }

    /// The player privileged to propose the next team.
    #[must_use]
    pub fn current_turn_player(&self) -> &str {
        self.players[self.turn.index()].name()
    }

    /// Names of players whose role is visible under `relation`, in seat order.
    #[must_use]
    pub fn visible_to(&self, relation: Visibility) -> Vec<&str> {
        self.players
            .iter()
            .filter(|p| self.ruleset.is_visible(relation, p.role()))
            .map(Player::name)
            .collect()
    }

    // === Progression ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn day(&self) -> usize {
        self.day
    }

    #[must_use]
    pub fn turn(&self) -> Seat {
        self.turn
    }

    #[must_use]
    pub fn hammer(&self) -> usize {
        self.hammer
    }

    /// The proposed team; empty while proposing.
    #[must_use]
    pub fn current_team(&self) -> &[String] {
        &self.current_team
    }

    /// True once all five missions have been played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.day >= MISSION_COUNT
    }

    /// Rules for today's mission, `None` once the match is complete.
    #[must_use]
    pub fn mission_rules(&self) -> Option<MissionRules> {
        self.table.mission(self.day)
    }

    /// Team size required today.
    #[must_use]
    pub fn team_size(&self) -> Option<usize> {
        self.mission_rules().map(|m| m.team_size)
    }

    /// Fail cards needed to sink today's mission.
    #[must_use]
    pub fn required_fails(&self) -> Option<usize> {
        self.mission_rules().map(|m| m.required_fails)
    }

    // === History ===

    /// Every approval vote, rejected ones included, in order.
    #[must_use]
    pub fn vote_history(&self) -> &Vector<Ballots> {
        &self.vote_history
    }

    #[must_use]
    pub fn mission_board(&self) -> &MissionBoard {
        &self.board
    }

    /// Every successful transition, in order.
    #[must_use]
    pub fn events(&self) -> &Vector<MatchEvent> {
        &self.events
    }

    #[must_use]
    pub fn winner(&self) -> Winner {
        mission::evaluate_winner(&self.board)
    }

    // === Transitions ===

    /// Put a team forward for today's mission.
    ///
    /// On success the match moves to `AwaitingApproval`, or straight to
    /// `AwaitingMissionResult` when the hammer is up. Returns the new phase.
    pub fn propose_team<S: AsRef<str>>(&mut self, names: &[S]) -> EngineResult<Phase> {
        self.expect_phase(Phase::ProposingTeam)?;
        let want = self.team_size().ok_or(EngineError::MatchComplete)?;
        let team = voting::validate_team(names, want, &self.seats)?;

        let forced = self.hammer >= voting::HAMMER_LIMIT;
        self.phase = if forced {
            Phase::AwaitingMissionResult
        } else {
            Phase::AwaitingApproval
        };

        log::debug!(
            "day {}: {} proposed {:?}{}",
            self.day,
            self.current_turn_player(),
            team,
            if forced { " (hammer)" } else { "" }
        );

        self.events.push_back(MatchEvent::TeamProposed {
            day: self.day,
            proposer: self.turn,
            team: team.clone(),
            forced,
        });
        self.current_team = team;

        Ok(self.phase)
    }

    /// Tally approval ballots, one per player in seat order.
    ///
    /// Returns whether the team was approved. A rejection raises the hammer
    /// and passes the proposal to the next seat.
    pub fn record_approval_votes(&mut self, ballots: &[bool]) -> EngineResult<bool> {
        self.expect_phase(Phase::AwaitingApproval)?;
        self.expect_ballots(ballots.len(), self.player_count())?;

        let ballots = Ballots::from_slice(ballots);
        let approved = voting::tally_approval(&ballots);

        self.vote_history.push_back(ballots.clone());
        self.events.push_back(MatchEvent::VoteTallied {
            day: self.day,
            ballots,
            approved,
        });

        if approved {
            self.phase = Phase::AwaitingMissionResult;
            log::debug!("day {}: team approved", self.day);
        } else {
            self.hammer += 1;
            self.turn = self.turn.next(self.player_count());
            self.current_team.clear();
            self.phase = Phase::ProposingTeam;
            log::debug!("day {}: team rejected, hammer at {}", self.day, self.hammer);
        }

        Ok(approved)
    }

    /// Tally mission ballots, one per team member (`true` = success).
    ///
    /// Records the outcome on the board, then advances turn and day and
    /// clears the hammer. Returns whether the mission succeeded.
    pub fn record_mission_result(&mut self, outcomes: &[bool]) -> EngineResult<bool> {
        self.expect_phase(Phase::AwaitingMissionResult)?;
        self.expect_ballots(outcomes.len(), self.current_team.len())?;

        let day = self.day;
        // Proposals stop once the board is full, so this phase always has a mission.
        let required_fails = self
            .required_fails()
            .ok_or(EngineError::MatchComplete)?;
        let succeeded = mission::tally_mission(outcomes, required_fails);

        self.board.set(
            day,
            if succeeded {
                MissionOutcome::Succeeded
            } else {
                MissionOutcome::Failed
            },
        );
        self.events.push_back(MatchEvent::MissionResolved {
            day,
            outcomes: Ballots::from_slice(outcomes),
            succeeded,
        });

        self.turn = self.turn.next(self.player_count());
        self.day += 1;
        self.hammer = 0;
        self.current_team.clear();
        self.phase = Phase::ProposingTeam;

        log::debug!(
            "day {}: mission {}, winner {:?}",
            day,
            if succeeded { "succeeded" } else { "failed" },
            self.winner()
        );

        Ok(succeeded)
    }

    // === Helpers ===

    fn expect_phase(&self, want: Phase) -> EngineResult<()> {
        if self.phase == want {
            Ok(())
        } else {
            Err(EngineError::WrongPhase {
                got: self.phase,
                want,
            })
        }
    }

    fn expect_ballots(&self, got: usize, want: usize) -> EngineResult<()> {
        if got == want {
            Ok(())
        } else {
            Err(EngineError::BallotCount { got, want })
        }
    }
}
