use crate::gameplay::seat::Origin;
use crate::gameplay::seat::Seat;
use crate::Points;

/// One discrete input from the transport.
///
/// Most intents arrive as a picked menu choice and carry their payload
/// ready-parsed; `Name` is the only free-text input. `Declare` keeps its
/// raw token so an unknown selector can be reported rather than dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Greet and ask for the session length (the "start" command).
    Start,
    /// Shortcut: a single-round session (the "new game" command).
    Quick,
    /// Session length picked from the menu.
    Games(usize),
    /// 3 or 4 players at the table.
    Seats(usize),
    /// Which seat stays vacant in a 3-player session.
    Absent(Seat),
    /// Free-text name for the next unnamed seat.
    Name(String),
    /// Seating confirmed or rejected.
    Confirm(bool),
    /// Event-kind token from the round menu.
    Declare(String),
    /// Who declared the event under composition.
    Declarer(Seat),
    /// Where the tile came from.
    Source(Origin),
    /// Ready or not at wall exhaustion.
    Ready(Seat, bool),
    /// Hand value for a win or a ready hand; zero marks a false win.
    Value(Seat, Points),
    /// Abandon the event under composition.
    Cancel,
}
