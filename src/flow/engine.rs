use super::intent::Intent;
use super::phase::Phase;
use super::reply::Choice;
use super::reply::Reply;
use crate::gameplay::event::Event;
use crate::gameplay::event::Kind;
use crate::gameplay::seat::Origin;
use crate::gameplay::seat::Seat;
use crate::gameplay::session::Session;
use crate::gameplay::settlement::settle;
use crate::gameplay::summary;
use crate::HAND_VALUES;
use crate::SESSION_LENGTHS;

/// Drives one session through the seating, play, and scoring phases.
///
/// `apply` consumes exactly one intent and fully processes it: state
/// transition, ledger commit, reply composition. Nothing suspends midway,
/// so the transport can persist the session between any two intents and
/// resume later. Out-of-phase intents are ignored without mutation.
pub struct Engine {
    session: Session,
}

impl Default for Engine {
    fn default() -> Self {
        Self::from(Session::new())
    }
}

impl From<Session> for Engine {
    fn from(session: Session) -> Self {
        Self { session }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn session(&self) -> &Session {
        &self.session
    }
    pub fn into_session(self) -> Session {
        self.session
    }

    pub fn apply(&mut self, intent: Intent) -> Vec<Reply> {
        match (self.session.phase(), intent) {
            (_, Intent::Start) => self.start(),
            (_, Intent::Quick) => self.begin(1),
            (Phase::EnterGamesCount, Intent::Games(limit)) if limit > 0 => self.begin(limit),
            (Phase::EnterPlayerCount, Intent::Seats(n)) if n == 3 || n == 4 => self.seat(n),
            (Phase::EnterNotComePlace, Intent::Absent(seat)) if seat != Seat::East => {
                self.vacate(seat)
            }
            (Phase::EnterPlayersNames, Intent::Name(name)) if !name.trim().is_empty() => {
                self.name(&name)
            }
            (Phase::CheckPlayers, Intent::Confirm(yes)) => self.confirm(yes),
            (Phase::Play, Intent::Declare(token)) => self.declare(&token),
            (Phase::EnterMahjong | Phase::EnterKong, Intent::Declarer(seat)) => self.declarer(seat),
            (Phase::EnterMahjong | Phase::EnterKong, Intent::Source(origin)) => self.source(origin),
            (Phase::EnterMahjong | Phase::EnterKong, Intent::Cancel) => self.abort(),
            (Phase::Scoring, Intent::Ready(seat, ready)) => self.ready(seat, ready),
            (Phase::Scoring, Intent::Value(seat, value)) => self.value(seat, value),
            _ => Vec::new(),
        }
    }

    /// Re-ask the current outstanding question without consuming an answer,
    /// so a transport can re-prompt after reloading a persisted session.
    /// Scoring re-entry is idempotent; an event under composition is
    /// abandoned and detail collection restarts from the event menu.
    pub fn resume(&mut self) -> Vec<Reply> {
        match self.session.phase() {
            Phase::Init => self.start(),
            Phase::EnterGamesCount => vec![self.ask_games()],
            Phase::EnterPlayerCount => vec![self.ask_seats()],
            Phase::EnterNotComePlace => vec![self.ask_absent()],
            Phase::EnterPlayersNames => self.advance_naming(),
            Phase::CheckPlayers => vec![self.check()],
            Phase::Play => vec![self.ask_event()],
            Phase::EnterMahjong | Phase::EnterKong => self.abort(),
            Phase::Scoring => self.resolve(),
        }
    }

    //
    fn start(&mut self) -> Vec<Reply> {
        vec![Reply::text("Привет! Начнём?"), self.ask_games()]
    }
    fn begin(&mut self, limit: usize) -> Vec<Reply> {
        self.session.reset(limit);
        log::info!("new session of {} rounds", limit);
        vec![
            Reply::text(format!("Запускаем сессию. Сдач в сессии: {}", limit)),
            self.ask_seats(),
        ]
    }
    fn seat(&mut self, expected: usize) -> Vec<Reply> {
        self.session.set_expected(expected);
        match expected {
            3 => vec![self.ask_absent()],
            _ => self.advance_naming(),
        }
    }
    fn vacate(&mut self, seat: Seat) -> Vec<Reply> {
        self.session
            .player_mut(seat)
            .set_status(crate::gameplay::player::Status::NotToCome);
        self.advance_naming()
    }
    fn name(&mut self, name: &str) -> Vec<Reply> {
        if let Some(seat) = self.next_unnamed() {
            self.session.player_mut(seat).set_name(name);
        }
        self.advance_naming()
    }
    fn confirm(&mut self, yes: bool) -> Vec<Reply> {
        match yes {
            true => self.open_round(),
            false => vec![self.ask_seats()],
        }
    }

    //
    fn declare(&mut self, token: &str) -> Vec<Reply> {
        match token {
            "mahjong" => {
                *self.session.scratch_mut() =
                    Event::new(Kind::Mahjong, Origin::Wall, Origin::Wall);
                self.session.set_phase(Phase::EnterMahjong);
                vec![self.ask_declarer("Кто объявил маджонг?")]
            }
            "kong" => {
                *self.session.scratch_mut() = Event::new(Kind::Kong, Origin::Wall, Origin::Wall);
                self.session.set_phase(Phase::EnterKong);
                vec![self.ask_declarer("Кто объявил конг?")]
            }
            "end_of_wall" => {
                *self.session.scratch_mut() =
                    Event::new(Kind::EndOfWall, Origin::Wall, Origin::Wall);
                self.session.commit();
                self.resolve()
            }
            unknown => vec![Reply::text(format!("Неизвестное событие {}", unknown))],
        }
    }
    fn declarer(&mut self, seat: Seat) -> Vec<Reply> {
        if !self.session.player(seat).is_in_game() {
            return Vec::new();
        }
        self.session.scratch_mut().player = Origin::Seat(seat);
        vec![self.ask_source(seat)]
    }
    fn source(&mut self, origin: Origin) -> Vec<Reply> {
        if let Origin::Seat(seat) = origin {
            if !self.session.player(seat).is_in_game() {
                return Vec::new();
            }
        }
        self.session.scratch_mut().from = origin;
        self.session.commit();
        let swept = self.session.scratch().kind == Kind::Mahjong
            && self.session.current().mahjongs == self.session.expected();
        match swept {
            true => self.resolve(),
            false => vec![self.ask_event()],
        }
    }
    fn abort(&mut self) -> Vec<Reply> {
        *self.session.scratch_mut() = Event::default();
        vec![self.ask_event()]
    }

    //
    fn ready(&mut self, seat: Seat, ready: bool) -> Vec<Reply> {
        if self.session.next_in_game() != Some(seat) {
            return Vec::new();
        }
        match ready {
            true => self.session.set_tenpai(seat),
            false => self.session.set_noten(seat),
        }
        self.resolve()
    }
    fn value(&mut self, seat: Seat, value: crate::Points) -> Vec<Reply> {
        if value != 0 && !HAND_VALUES.contains(&value) {
            return Vec::new();
        }
        if self.session.next_in_game().is_some() {
            return Vec::new();
        }
        if self.session.next_unvalued_mahjong() == Some(seat) {
            self.session.set_mahjong_value(seat, value);
            self.resolve()
        } else if value != 0 && self.session.next_unvalued_tenpai() == Some(seat) {
            self.session.set_tenpai_value(seat, value);
            self.resolve()
        } else {
            Vec::new()
        }
    }

    /// The priority-ordered scoring dispatcher: one outstanding question
    /// per turn, settlement once nothing is outstanding.
    fn resolve(&mut self) -> Vec<Reply> {
        self.session.set_phase(Phase::Scoring);
        if let Some(seat) = self.session.next_in_game() {
            return vec![Reply::menu(
                format!("{}: готова ли рука?", self.session.player(seat).name()),
                vec![
                    Choice::new("Темпай", Intent::Ready(seat, true)),
                    Choice::new("Нотен", Intent::Ready(seat, false)),
                ],
            )];
        }
        if let Some(seat) = self.session.next_unvalued_mahjong() {
            let mut menu = self.values(seat);
            menu.push(Choice::new("Ложный маджонг", Intent::Value(seat, 0)));
            return vec![Reply::menu(
                format!("{}: сколько стоит рука?", self.session.player(seat).name()),
                menu,
            )];
        }
        if let Some(seat) = self.session.next_unvalued_tenpai() {
            return vec![Reply::menu(
                format!("{}: сколько стоит темпай?", self.session.player(seat).name()),
                self.values(seat),
            )];
        }
        self.close_round()
    }
    fn close_round(&mut self) -> Vec<Reply> {
        let settlement = settle(self.session.current(), self.session.players());
        log::info!(
            "round {} of {} settled {:?}",
            self.session.played(),
            self.session.limit(),
            settlement.scores,
        );
        self.session.record(settlement);
        let mut replies = Vec::new();
        let logs = self.session.current().logs.clone();
        if !logs.is_empty() {
            replies.push(Reply::text(logs.join("\n")));
        }
        replies.push(Reply::text(summary::report(&self.session).join("\n")));
        if self.session.is_last_round() {
            let standings = summary::standings(&self.session)
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<String>>()
                .join("\n");
            replies.push(Reply::text(format!("Сессия окончена\n{}", standings)));
            replies.push(self.ask_games());
        } else {
            replies.extend(self.open_round());
        }
        replies
    }

    //
    fn open_round(&mut self) -> Vec<Reply> {
        self.session.next_round();
        vec![
            Reply::text(format!(
                "Начата игра {} из {}",
                self.session.played(),
                self.session.limit(),
            )),
            self.ask_event(),
        ]
    }
    fn advance_naming(&mut self) -> Vec<Reply> {
        match self.next_unnamed() {
            Some(seat) => {
                self.session.set_phase(Phase::EnterPlayersNames);
                vec![Reply::text(format!("{}: введите имя игрока", seat.name()))]
            }
            None => vec![self.check()],
        }
    }
    fn next_unnamed(&self) -> Option<Seat> {
        self.session
            .players()
            .iter()
            .find(|p| p.is_in_game() && p.is_unnamed())
            .map(|p| p.seat())
    }

    //
    fn ask_games(&mut self) -> Reply {
        self.session.set_phase(Phase::EnterGamesCount);
        Reply::menu(
            "Сколько будет сдач в сессии?",
            SESSION_LENGTHS
                .iter()
                .map(|n| Choice::new(n.to_string(), Intent::Games(*n)))
                .collect(),
        )
    }
    fn ask_seats(&mut self) -> Reply {
        self.session.set_phase(Phase::EnterPlayerCount);
        Reply::menu(
            "Сколько будет игроков?",
            vec![
                Choice::new("4", Intent::Seats(4)),
                Choice::new("3", Intent::Seats(3)),
            ],
        )
    }
    fn ask_absent(&mut self) -> Reply {
        self.session.set_phase(Phase::EnterNotComePlace);
        Reply::menu(
            "На каком месте нет игрока?",
            Seat::all()
                .iter()
                .filter(|s| **s != Seat::East)
                .map(|s| Choice::new(s.name(), Intent::Absent(*s)))
                .collect(),
        )
    }
    fn check(&mut self) -> Reply {
        self.session.set_phase(Phase::CheckPlayers);
        let mut lines = vec!["Рассадка:".to_string()];
        for player in self.session.players().iter().filter(|p| !p.is_absent()) {
            lines.push(player.to_string());
        }
        lines.push("Всё верно?".to_string());
        Reply::menu(
            lines.join("\n"),
            vec![
                Choice::new("Да", Intent::Confirm(true)),
                Choice::new("Нет", Intent::Confirm(false)),
            ],
        )
    }
    fn ask_event(&mut self) -> Reply {
        self.session.set_phase(Phase::Play);
        Reply::menu(
            "Добавим событие?",
            vec![
                Choice::new("Маджонг", Intent::Declare("mahjong".to_string())),
                Choice::new("Конг", Intent::Declare("kong".to_string())),
                Choice::new("Стена закончилась", Intent::Declare("end_of_wall".to_string())),
            ],
        )
    }
    fn ask_declarer(&self, prompt: &str) -> Reply {
        let mut menu = self
            .session
            .players()
            .iter()
            .filter(|p| p.is_in_game())
            .map(|p| Choice::new(p.name(), Intent::Declarer(p.seat())))
            .collect::<Vec<Choice>>();
        menu.push(Choice::new("Отмена", Intent::Cancel));
        Reply::menu(prompt, menu)
    }
    fn ask_source(&self, declarer: Seat) -> Reply {
        let kong = self.session.phase() == Phase::EnterKong;
        let mut menu = vec![Choice::new("Со стены", Intent::Source(Origin::Wall))];
        for player in self.session.players().iter().filter(|p| p.is_in_game()) {
            if player.seat() == declarer {
                // only a kong can be taken from one's own draw
                if kong {
                    menu.push(Choice::new(
                        "Доставленный",
                        Intent::Source(Origin::Seat(declarer)),
                    ));
                }
                continue;
            }
            menu.push(Choice::new(
                player.name(),
                Intent::Source(Origin::Seat(player.seat())),
            ));
        }
        menu.push(Choice::new("Отмена", Intent::Cancel));
        match kong {
            true => Reply::menu("С кого взяли конг?", menu),
            false => Reply::menu("С кого взяли маджонг?", menu),
        }
    }
    fn values(&self, seat: Seat) -> Vec<Choice> {
        HAND_VALUES
            .iter()
            .map(|v| Choice::new(v.to_string(), Intent::Value(seat, *v)))
            .collect()
    }
}
