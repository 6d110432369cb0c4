use serde::Deserialize;
use serde::Serialize;

/// One of the four fixed positions around the table.
///
/// Ordinal order (East first) doubles as the name-collection order during
/// seating and the iteration order of every score vector.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    East = 0isize,
    South = 1isize,
    West = 2isize,
    North = 3isize,
}

impl Seat {
    pub const fn all() -> &'static [Self] {
        &[Self::East, Self::South, Self::West, Self::North]
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// Place name shown in prompts and seating lists.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::East => "Восток",
            Self::South => "Юг",
            Self::West => "Запад",
            Self::North => "Север",
        }
    }
}

impl From<usize> for Seat {
    fn from(index: usize) -> Self {
        match index {
            0 => Self::East,
            1 => Self::South,
            2 => Self::West,
            3 => Self::North,
            _ => panic!("seat index out of range"),
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Where a tile came from: a specific opponent, or the drawing pile.
///
/// The wall is an explicit tag rather than an out-of-range seat index, so
/// every consumer matches both cases exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    Seat(Seat),
    Wall,
}

impl Origin {
    pub const fn seat(&self) -> Option<Seat> {
        match self {
            Self::Seat(seat) => Some(*seat),
            Self::Wall => None,
        }
    }
    pub const fn is_wall(&self) -> bool {
        matches!(self, Self::Wall)
    }
}

impl From<Seat> for Origin {
    fn from(seat: Seat) -> Self {
        Self::Seat(seat)
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Seat(seat) => write!(f, "{}", seat),
            Self::Wall => write!(f, "стена"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_round_trip() {
        for seat in Seat::all() {
            assert!(Seat::from(seat.index()) == *seat);
        }
    }

    #[test]
    fn wall_is_not_a_seat() {
        assert!(Origin::Wall.seat() == None);
        assert!(Origin::from(Seat::West).seat() == Some(Seat::West));
    }
}
