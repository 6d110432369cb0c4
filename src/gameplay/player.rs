use super::seat::Seat;
use serde::Deserialize;
use serde::Serialize;

/// Per-round outcome state of a seat.
///
/// `InGame` means the seat is still live this round. `NotToCome` marks the
/// permanently vacant seat of a 3-player session and survives round resets.
/// The remaining three record this round's declared outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InGame,
    NotToCome,
    Mahjong,
    Tenpai,
    Noten,
}

/// One roster entry: a seat, its player's name, and the round status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    status: Status,
    seat: Seat,
}

impl Player {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            name: String::new(),
            status: Status::InGame,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn is_in_game(&self) -> bool {
        self.status == Status::InGame
    }
    pub fn is_absent(&self) -> bool {
        self.status == Status::NotToCome
    }
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.trim().to_string();
    }
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
    /// Round-start reset: everyone returns to play except the vacant seat.
    pub fn rejoin(&mut self) {
        if self.status != Status::NotToCome {
            self.status = Status::InGame;
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.seat, self.name)
    }
}
