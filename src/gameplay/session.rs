use super::event::Event;
use super::event::Kind;
use super::ledger::Ledger;
use super::player::Player;
use super::player::Status;
use super::seat::Origin;
use super::seat::Seat;
use super::settlement::Settlement;
use crate::flow::phase::Phase;
use crate::Points;
use crate::FAKE_PENALTY;
use crate::N;
use serde::Deserialize;
use serde::Serialize;

/// The one owned aggregate behind a conversational identity.
///
/// Holds the flow phase, the event under composition, the roster, and the
/// per-round ledgers. Every mutation is a synchronous method here; the flow
/// engine decides *when* to call them, this type decides *what* they mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    phase: Phase,
    scratch: Event,
    limit: usize,
    expected: usize,
    players: [Player; N],
    round: usize,
    ledgers: Vec<Ledger>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            phase: Phase::Init,
            scratch: Event::default(),
            limit: 0,
            expected: 0,
            players: Self::roster(),
            round: 0,
            ledgers: Vec::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
    fn roster() -> [Player; N] {
        [
            Player::new(Seat::East),
            Player::new(Seat::South),
            Player::new(Seat::West),
            Player::new(Seat::North),
        ]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn limit(&self) -> usize {
        self.limit
    }
    pub fn expected(&self) -> usize {
        self.expected
    }
    /// Rounds started so far; the open round's index is one less.
    pub fn played(&self) -> usize {
        self.round
    }
    pub fn index(&self) -> usize {
        assert!(self.round > 0, "no round started");
        self.round - 1
    }
    pub fn is_last_round(&self) -> bool {
        self.round == self.limit
    }

    pub fn players(&self) -> &[Player; N] {
        &self.players
    }
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }
    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }
    pub fn scratch(&self) -> &Event {
        &self.scratch
    }
    pub fn scratch_mut(&mut self) -> &mut Event {
        &mut self.scratch
    }
    pub fn ledgers(&self) -> &[Ledger] {
        &self.ledgers
    }
    pub fn current(&self) -> &Ledger {
        self.ledgers.last().expect("no open round")
    }
    pub fn current_mut(&mut self) -> &mut Ledger {
        self.ledgers.last_mut().expect("no open round")
    }

    //
    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
    /// Fresh session keeping nothing; called when a new round-count arrives.
    pub fn reset(&mut self, limit: usize) {
        *self = Self::default();
        self.limit = limit;
    }
    pub fn set_expected(&mut self, expected: usize) {
        assert!(expected == 3 || expected == 4);
        self.expected = expected;
        self.reset_players();
    }
    pub fn reset_players(&mut self) {
        self.players = Self::roster();
    }

    /// Open the next round: everyone but the vacant seat rejoins, the round
    /// counter advances, and an empty ledger is appended.
    pub fn next_round(&mut self) {
        assert!(self.round < self.limit, "session already complete");
        for player in self.players.iter_mut() {
            player.rejoin();
        }
        self.round += 1;
        self.ledgers.push(Ledger::new());
    }

    //
    pub fn in_game(&self) -> Vec<Seat> {
        self.players
            .iter()
            .filter(|p| p.is_in_game())
            .map(|p| p.seat())
            .collect()
    }
    pub fn participants(&self) -> Vec<Seat> {
        self.players
            .iter()
            .filter(|p| !p.is_absent())
            .map(|p| p.seat())
            .collect()
    }
    fn in_game_except(&self, except: Option<Seat>) -> Vec<Seat> {
        self.players
            .iter()
            .filter(|p| p.is_in_game())
            .filter(|p| Some(p.seat()) != except)
            .map(|p| p.seat())
            .collect()
    }

    /// Commit the scratch event as an immutable ledger entry.
    ///
    /// Wall-sourced wins and self-contained kongs snapshot their payer set
    /// now: later commits in the same round change seat statuses, and a
    /// late-computed set would misname the payers of this declaration. A
    /// kong's value is fixed by rule at commit so that a later not-ready
    /// declaration can forfeit it.
    pub fn commit(&mut self) {
        let mut event = self.scratch.clone();
        match event.kind {
            Kind::Mahjong => {
                if let Some(declarer) = event.player.seat() {
                    self.player_mut(declarer).set_status(Status::Mahjong);
                }
                if event.from.is_wall() {
                    event.contributors = self.in_game_except(event.player.seat());
                }
                self.current_mut().mahjongs += 1;
            }
            Kind::Kong => {
                if event.from.is_wall() || event.from == event.player {
                    event.contributors = self.in_game_except(event.player.seat());
                    event.score = 1;
                } else {
                    event.score = 2;
                }
            }
            _ => (),
        }
        log::debug!("commit {}", event);
        self.current_mut().events.push(event);
    }

    //
    pub fn set_tenpai(&mut self, seat: Seat) {
        self.player_mut(seat).set_status(Status::Tenpai);
        self.current_mut().tenpais += 1;
        self.current_mut()
            .events
            .push(Event::new(Kind::Tenpai, seat.into(), seat.into()));
    }
    /// A not-ready seat forfeits any pending point value it had accumulated.
    pub fn set_noten(&mut self, seat: Seat) {
        self.player_mut(seat).set_status(Status::Noten);
        self.current_mut().notens += 1;
        self.current_mut()
            .events
            .push(Event::new(Kind::Noten, seat.into(), seat.into()));
        for event in self.current_mut().events.iter_mut() {
            if event.player == Origin::Seat(seat) {
                event.score = 0;
            }
        }
    }
    /// Zero turns the declaration into a false win with the flat penalty.
    pub fn set_mahjong_value(&mut self, seat: Seat, value: Points) {
        for event in self.current_mut().events.iter_mut() {
            if event.player == Origin::Seat(seat) && event.kind == Kind::Mahjong {
                if value == 0 {
                    event.kind = Kind::FakeMahjong;
                    event.score = -FAKE_PENALTY;
                } else {
                    event.score = value;
                }
            }
        }
    }
    pub fn set_tenpai_value(&mut self, seat: Seat, value: Points) {
        for event in self.current_mut().events.iter_mut() {
            if event.player == Origin::Seat(seat) && event.kind == Kind::Tenpai {
                event.score = value;
            }
        }
    }

    //
    pub fn next_in_game(&self) -> Option<Seat> {
        self.players
            .iter()
            .find(|p| p.is_in_game())
            .map(|p| p.seat())
    }
    pub fn next_unvalued_mahjong(&self) -> Option<Seat> {
        self.current()
            .events
            .iter()
            .find(|e| e.kind == Kind::Mahjong && e.score == 0)
            .and_then(|e| e.player.seat())
    }
    /// Ready hands are only valued when both ready and not-ready seats
    /// exist; otherwise no points change hands at wall exhaustion.
    pub fn next_unvalued_tenpai(&self) -> Option<Seat> {
        let ledger = self.current();
        if ledger.tenpais > 0 && ledger.notens > 0 {
            ledger
                .events
                .iter()
                .find(|e| e.kind == Kind::Tenpai && e.score == 0)
                .and_then(|e| e.player.seat())
        } else {
            None
        }
    }

    /// Write-once application of a settlement to the open round.
    pub fn record(&mut self, settlement: Settlement) {
        assert!(!self.current().is_settled(), "round already settled");
        self.current_mut().scores = settlement.scores;
        self.current_mut().logs = settlement.logs;
    }

    /// Running totals across every settled round.
    pub fn totals(&self) -> [Points; N] {
        let mut totals = [0; N];
        for ledger in self.ledgers.iter() {
            for (total, score) in totals.iter_mut().zip(ledger.scores.iter()) {
                *total += score;
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seated() -> Session {
        let mut session = Session::new();
        session.reset(4);
        session.set_expected(4);
        for seat in Seat::all() {
            session.player_mut(*seat).set_name(&format!("p{}", seat.index()));
        }
        session
    }

    #[test]
    fn rounds_advance_one_at_a_time() {
        let mut session = seated();
        assert!(session.played() == 0);
        session.next_round();
        assert!(session.played() == 1);
        assert!(session.index() == 0);
        assert!(session.ledgers().len() == session.played());
        session.next_round();
        assert!(session.index() == 1);
    }

    #[test]
    #[should_panic]
    fn rounds_never_exceed_limit() {
        let mut session = seated();
        for _ in 0..5 {
            session.next_round();
        }
    }

    #[test]
    fn wall_win_snapshots_contributors_at_commit() {
        let mut session = seated();
        session.next_round();
        *session.scratch_mut() =
            Event::new(Kind::Mahjong, Seat::East.into(), Origin::Wall);
        session.commit();
        let snapshot = session.current().events[0].contributors.clone();
        assert!(snapshot == vec![Seat::South, Seat::West, Seat::North]);
        // a second declarer leaves the first snapshot untouched
        *session.scratch_mut() =
            Event::new(Kind::Mahjong, Seat::South.into(), Origin::Wall);
        session.commit();
        assert!(session.current().events[0].contributors == snapshot);
        assert!(session.current().events[1].contributors == vec![Seat::West, Seat::North]);
    }

    #[test]
    fn discard_win_has_no_contributors() {
        let mut session = seated();
        session.next_round();
        *session.scratch_mut() =
            Event::new(Kind::Mahjong, Seat::West.into(), Seat::South.into());
        session.commit();
        assert!(session.current().events[0].contributors.is_empty());
        assert!(session.player(Seat::West).status() == Status::Mahjong);
        assert!(session.current().mahjongs == 1);
    }

    #[test]
    fn kong_value_is_fixed_at_commit() {
        let mut session = seated();
        session.next_round();
        *session.scratch_mut() = Event::new(Kind::Kong, Seat::East.into(), Origin::Wall);
        session.commit();
        *session.scratch_mut() = Event::new(Kind::Kong, Seat::East.into(), Seat::East.into());
        session.commit();
        *session.scratch_mut() = Event::new(Kind::Kong, Seat::East.into(), Seat::North.into());
        session.commit();
        let events = &session.current().events;
        assert!(events[0].score == 1);
        assert!(events[1].score == 1);
        assert!(events[2].score == 2);
        assert!(events[2].contributors.is_empty());
    }

    #[test]
    fn noten_forfeits_pending_points() {
        let mut session = seated();
        session.next_round();
        *session.scratch_mut() = Event::new(Kind::Kong, Seat::North.into(), Origin::Wall);
        session.commit();
        assert!(session.current().events[0].score == 1);
        session.set_tenpai(Seat::East);
        session.set_noten(Seat::North);
        assert!(session.current().events[0].score == 0);
        assert!(session.current().tenpais == 1);
        assert!(session.current().notens == 1);
    }

    #[test]
    fn false_declaration_mutates_kind() {
        let mut session = seated();
        session.next_round();
        *session.scratch_mut() =
            Event::new(Kind::Mahjong, Seat::South.into(), Seat::East.into());
        session.commit();
        session.set_mahjong_value(Seat::South, 0);
        let event = &session.current().events[0];
        assert!(event.kind == Kind::FakeMahjong);
        assert!(event.score == -crate::FAKE_PENALTY);
        assert!(session.next_unvalued_mahjong() == None);
    }

    #[test]
    fn scoring_questions_resolve_in_priority_order() {
        let mut session = seated();
        session.next_round();
        *session.scratch_mut() =
            Event::new(Kind::Mahjong, Seat::West.into(), Origin::Wall);
        session.commit();
        // west won, three seats still in game: ready question comes first
        assert!(session.next_in_game() == Some(Seat::East));
        assert!(session.next_unvalued_mahjong() == Some(Seat::West));
        session.set_tenpai(Seat::East);
        session.set_noten(Seat::South);
        session.set_noten(Seat::North);
        assert!(session.next_in_game() == None);
        session.set_mahjong_value(Seat::West, 4);
        assert!(session.next_unvalued_mahjong() == None);
        assert!(session.next_unvalued_tenpai() == Some(Seat::East));
        session.set_tenpai_value(Seat::East, 2);
        assert!(session.next_unvalued_tenpai() == None);
    }

    #[test]
    fn three_player_roster_excludes_the_vacant_seat() {
        let mut session = Session::new();
        session.reset(1);
        session.set_expected(3);
        session.player_mut(Seat::South).set_status(Status::NotToCome);
        session.next_round();
        assert!(session.in_game() == vec![Seat::East, Seat::West, Seat::North]);
        assert!(session.participants() == vec![Seat::East, Seat::West, Seat::North]);
        *session.scratch_mut() =
            Event::new(Kind::Mahjong, Seat::East.into(), Origin::Wall);
        session.commit();
        assert!(session.current().events[0].contributors == vec![Seat::West, Seat::North]);
    }

    #[test]
    fn snapshot_round_trip_preserves_behavior() {
        let mut session = seated();
        session.next_round();
        *session.scratch_mut() =
            Event::new(Kind::Mahjong, Seat::East.into(), Origin::Wall);
        session.commit();
        let json = serde_json::to_string(&session).expect("serialize");
        let thawed: Session = serde_json::from_str(&json).expect("deserialize");
        assert!(thawed == session);
        assert!(thawed.next_unvalued_mahjong() == Some(Seat::East));
    }
}
