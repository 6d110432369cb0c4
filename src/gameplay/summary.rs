use super::seat::Seat;
use super::session::Session;
use crate::Points;

/// One row of the ranked session summary.
///
/// Rank is dense: equal totals share a rank, and with it a medal tier.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub seat: Seat,
    pub name: String,
    pub total: Points,
    pub rank: usize,
}

impl Standing {
    pub fn medal(&self) -> &'static str {
        match self.rank {
            0 => "🥇",
            1 => "🥈",
            2 => "🥉",
            _ => "",
        }
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.medal() {
            "" => write!(f, "{}: {:+}", self.name, self.total),
            medal => write!(f, "{} {}: {:+}", medal, self.name, self.total),
        }
    }
}

/// Ranked totals across every settled round, vacant seat dropped.
pub fn standings(session: &Session) -> Vec<Standing> {
    let totals = session.totals();
    let mut distinct = session
        .participants()
        .iter()
        .map(|s| totals[s.index()])
        .collect::<Vec<Points>>();
    distinct.sort_unstable_by(|a, b| b.cmp(a));
    distinct.dedup();
    let mut rows = session
        .participants()
        .iter()
        .map(|s| Standing {
            seat: *s,
            name: session.player(*s).name().to_string(),
            total: totals[s.index()],
            rank: distinct
                .iter()
                .position(|t| *t == totals[s.index()])
                .expect("every total is in the distinct list"),
        })
        .collect::<Vec<Standing>>();
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}

/// Per-seat result lines for the round just settled:
/// running total first, this round's delta in parentheses.
pub fn report(session: &Session) -> Vec<String> {
    let totals = session.totals();
    let scores = session.current().scores;
    session
        .participants()
        .iter()
        .map(|s| {
            format!(
                "{}: {:+} ({:+})",
                session.player(*s).name(),
                totals[s.index()],
                scores[s.index()],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::player::Status;
    use crate::gameplay::settlement::Settlement;

    fn settled(scores: [Points; 4], expected: usize) -> Session {
        let mut session = Session::new();
        session.reset(4);
        session.set_expected(expected);
        if expected == 3 {
            session.player_mut(Seat::South).set_status(Status::NotToCome);
        }
        for seat in Seat::all() {
            session
                .player_mut(*seat)
                .set_name(&format!("p{}", seat.index()));
        }
        session.next_round();
        session.record(Settlement {
            scores,
            logs: vec!["---".to_string()],
        });
        session
    }

    #[test]
    fn ranks_are_dense_and_shared() {
        let session = settled([12, -4, 12, -20], 4);
        let rows = standings(&session);
        assert!(rows.len() == 4);
        assert!(rows[0].rank == 0 && rows[0].medal() == "🥇");
        assert!(rows[1].rank == 0 && rows[1].medal() == "🥇");
        assert!(rows[2].rank == 1 && rows[2].medal() == "🥈");
        assert!(rows[3].rank == 2 && rows[3].medal() == "🥉");
        // stable sort keeps seat order within a tie
        assert!(rows[0].seat == Seat::East && rows[1].seat == Seat::West);
    }

    #[test]
    fn fourth_distinct_total_gets_no_medal() {
        let session = settled([9, 3, -4, -8], 4);
        let rows = standings(&session);
        assert!(rows[3].medal() == "");
        assert!(format!("{}", rows[3]) == "p3: -8");
        assert!(format!("{}", rows[0]) == "🥇 p0: +9");
    }

    #[test]
    fn vacant_seat_is_dropped_from_the_summary() {
        let session = settled([18, 0, -9, -9], 3);
        let rows = standings(&session);
        assert!(rows.len() == 3);
        assert!(rows.iter().all(|r| r.seat != Seat::South));
        // the two equal losers share silver, so bronze is never awarded
        assert!(rows[1].rank == 1 && rows[2].rank == 1);
    }

    #[test]
    fn round_report_shows_total_and_delta() {
        let mut session = settled([4, -4, 0, 0], 4);
        session.next_round();
        session.record(Settlement {
            scores: [-2, 0, 2, 0],
            logs: vec!["---".to_string()],
        });
        let lines = report(&session);
        assert!(lines[0] == "p0: +2 (-2)");
        assert!(lines[1] == "p1: -4 (+0)");
        assert!(lines[2] == "p2: +2 (+2)");
        assert!(lines[3] == "p3: +0 (+0)");
    }
}
