use super::event::Kind;
use super::ledger::Ledger;
use super::player::Player;
use super::player::Status;
use super::seat::Seat;
use crate::Points;
use crate::N;
use crate::SELF_DRAW_BONUS;

/// The outcome of settling one round: a zero-sum score vector and one
/// audit line per scored event.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub scores: [Points; N],
    pub logs: Vec<String>,
}

/// Walk the round's committed events in order and accumulate point
/// transfers. Pure function of the ledger and the roster; the flow engine
/// decides when all information is present.
pub fn settle(ledger: &Ledger, players: &[Player; N]) -> Settlement {
    let mut scores = [0 as Points; N];
    let mut logs = Vec::new();
    let mut winners: Vec<Seat> = Vec::new();
    for event in ledger.events.iter() {
        match event.kind {
            Kind::Mahjong => {
                let winner = match event.player.seat() {
                    Some(seat) => seat,
                    None => continue,
                };
                winners.push(winner);
                let bonus = match event.is_self_drawn() {
                    true => SELF_DRAW_BONUS,
                    false => 0,
                };
                let payers = payers(event.contributors.as_slice(), event.from.seat());
                let each = event.score + bonus;
                scores[winner.index()] += payers.len() as Points * each;
                for payer in payers.iter() {
                    scores[payer.index()] -= each;
                }
                logs.push(match event.is_self_drawn() {
                    true => format!(
                        "Маджонг. {} со стены. {} с {}",
                        players[winner.index()].name(),
                        spelled(each, payers.len() > 1),
                        names(&payers, players),
                    ),
                    false => format!(
                        "Маджонг. {} с {}. {}",
                        players[winner.index()].name(),
                        names(&payers, players),
                        spelled(each, false),
                    ),
                });
            }
            Kind::Kong => {
                let winner = match event.player.seat() {
                    Some(seat) => seat,
                    None => continue,
                };
                // score 0 means the meld was forfeited by a not-ready seat
                if event.score == 0 {
                    continue;
                }
                let payers = payers(event.contributors.as_slice(), event.from.seat());
                scores[winner.index()] += payers.len() as Points * event.score;
                for payer in payers.iter().filter(|p| **p != winner) {
                    scores[payer.index()] -= event.score;
                }
                let label = match (event.is_self_drawn(), event.is_delivered()) {
                    (true, _) => "Закрытый конг",
                    (_, true) => "Доставленный конг",
                    _ => "Конг",
                };
                logs.push(match event.from.seat() {
                    Some(from) if from != winner => format!(
                        "{}. {} с {}. {}",
                        label,
                        players[winner.index()].name(),
                        players[from.index()].name(),
                        spelled(event.score, false),
                    ),
                    _ => format!(
                        "{}. {}. {} с {}",
                        label,
                        players[winner.index()].name(),
                        spelled(event.score, payers.len() > 1),
                        names(&payers, players),
                    ),
                });
            }
            Kind::FakeMahjong => {
                let declarer = match event.player.seat() {
                    Some(seat) => seat,
                    None => continue,
                };
                let recipients = players
                    .iter()
                    .filter(|p| !p.is_absent())
                    .map(|p| p.seat())
                    .filter(|s| *s != declarer)
                    .filter(|s| !winners.contains(s))
                    .collect::<Vec<Seat>>();
                scores[declarer.index()] += recipients.len() as Points * event.score;
                for recipient in recipients.iter() {
                    scores[recipient.index()] -= event.score;
                }
                logs.push(format!(
                    "Ложный маджонг. {} платит. {}: {}",
                    players[declarer.index()].name(),
                    spelled(-event.score, recipients.len() > 1),
                    names(&recipients, players),
                ));
            }
            Kind::Tenpai => {
                let winner = match event.player.seat() {
                    Some(seat) => seat,
                    None => continue,
                };
                if event.score == 0 {
                    continue;
                }
                let payers = players
                    .iter()
                    .filter(|p| p.status() == Status::Noten)
                    .map(|p| p.seat())
                    .collect::<Vec<Seat>>();
                scores[winner.index()] += payers.len() as Points * event.score;
                for payer in payers.iter() {
                    scores[payer.index()] -= event.score;
                }
                logs.push(format!(
                    "Темпай. {}. {} с {}",
                    players[winner.index()].name(),
                    spelled(event.score, payers.len() > 1),
                    names(&payers, players),
                ));
            }
            Kind::BeginGame | Kind::EndOfWall | Kind::Noten | Kind::EndGame => (),
        }
    }
    debug_assert!(scores.iter().sum::<Points>() == 0, "settlement must be zero-sum");
    Settlement { scores, logs }
}

/// Snapshot payers if any were recorded, else the single discarding seat.
fn payers(contributors: &[Seat], from: Option<Seat>) -> Vec<Seat> {
    if contributors.is_empty() {
        from.into_iter().collect()
    } else {
        contributors.to_vec()
    }
}

fn names(seats: &[Seat], players: &[Player; N]) -> String {
    seats
        .iter()
        .map(|s| players[s.index()].name())
        .collect::<Vec<&str>>()
        .join(", ")
}

/// Spell a point amount with the unit declined for the value: "+1 очко",
/// "+2 очка", "+8 очков". The per-payer form reads "По +1 очку" (dative).
pub fn spelled(points: Points, each: bool) -> String {
    if each {
        format!("По {:+} {}", points, unit(points, true))
    } else {
        format!("{:+} {}", points, unit(points, false))
    }
}

fn unit(points: Points, dative: bool) -> &'static str {
    let n = points.abs() % 100;
    let tail = n % 10;
    if tail == 1 && n != 11 {
        match dative {
            true => "очку",
            false => "очко",
        }
    } else if (2..=4).contains(&tail) && !(12..=14).contains(&n) {
        "очка"
    } else {
        "очков"
    }
}
