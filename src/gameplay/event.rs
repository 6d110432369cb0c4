use super::seat::Origin;
use super::seat::Seat;
use crate::Points;
use serde::Deserialize;
use serde::Serialize;

/// Kinds of ledger entries a round can accumulate.
///
/// `BeginGame` and `EndGame` are bookkeeping markers kept for snapshot
/// parity; the flow never offers them as declarations. `FakeMahjong` is
/// never declared directly either: a `Mahjong` entry mutates into it when
/// the hand is valued at zero during scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    BeginGame,
    Kong,
    Mahjong,
    EndOfWall,
    Tenpai,
    Noten,
    EndGame,
    FakeMahjong,
}

/// One committed declaration.
///
/// `player` is the declaring seat, or the wall for structural entries.
/// `from` is where the tile came from. `contributors` is the payer set
/// snapshotted at commit time for wall-sourced and self-contained entries;
/// once written it is authoritative even if seat statuses change later in
/// the round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: Kind,
    pub player: Origin,
    pub from: Origin,
    pub score: Points,
    pub contributors: Vec<Seat>,
}

impl Event {
    pub fn new(kind: Kind, player: Origin, from: Origin) -> Self {
        Self {
            kind,
            player,
            from,
            score: 0,
            contributors: Vec::new(),
        }
    }
    /// Did the winning or melded tile come off the wall?
    pub fn is_self_drawn(&self) -> bool {
        self.from.is_wall()
    }
    /// Kong taken from one's own draw and exposed.
    pub fn is_delivered(&self) -> bool {
        self.kind == Kind::Kong && self.from == self.player
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new(Kind::BeginGame, Origin::Wall, Origin::Wall)
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:?} {} <- {} ({:+})",
            self.kind, self.player, self.from, self.score
        )
    }
}
