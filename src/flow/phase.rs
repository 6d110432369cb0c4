use serde::Deserialize;
use serde::Serialize;

/// Where the conversation stands.
///
/// Setup runs `EnterGamesCount` through `CheckPlayers`; each round then
/// cycles `Play` with the two detail-collection phases until `Scoring`
/// resolves it and either reopens `Play` or returns to `EnterGamesCount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Init,
    EnterGamesCount,
    EnterPlayerCount,
    EnterNotComePlace,
    EnterPlayersNames,
    CheckPlayers,
    Play,
    EnterMahjong,
    EnterKong,
    Scoring,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
