use super::event::Event;
use super::event::Kind;
use crate::Points;
use crate::N;
use serde::Deserialize;
use serde::Serialize;

/// The append-only record of one round.
///
/// `events` grows only through `Session::commit` and the synthetic
/// ready/not-ready entries of the scoring phase. `scores` and `logs` are
/// written once by settlement and never touched afterward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub events: Vec<Event>,
    pub scores: [Points; N],
    pub logs: Vec<String>,
    pub mahjongs: usize,
    pub tenpais: usize,
    pub notens: usize,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn is_settled(&self) -> bool {
        !self.logs.is_empty() || self.scores.iter().any(|s| *s != 0)
    }
    pub fn count(&self, kind: Kind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::seat::Origin;

    #[test]
    fn fresh_ledger_is_unsettled() {
        let ledger = Ledger::new();
        assert!(ledger.is_settled() == false);
        assert!(ledger.events.is_empty());
        assert!(ledger.scores == [0; N]);
    }

    #[test]
    fn counts_by_kind() {
        let mut ledger = Ledger::new();
        ledger
            .events
            .push(Event::new(Kind::EndOfWall, Origin::Wall, Origin::Wall));
        assert!(ledger.count(Kind::EndOfWall) == 1);
        assert!(ledger.count(Kind::Mahjong) == 0);
    }
}
