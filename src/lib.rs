//! Event ledger and settlement engine for multi-round Mahjong scoring sessions.
//!
//! The engine walks a session from seating, through round play, to
//! end-of-round scoring. An external transport feeds it discrete intents and
//! renders its replies; everything in between is synchronous state transition.

pub mod flow;
pub mod gameplay;
pub mod store;

/// Point deltas and running totals.
pub type Points = i16;

/// Seats around the table.
pub const N: usize = 4;
/// Flat penalty paid to each recipient on a false Mahjong declaration.
pub const FAKE_PENALTY: Points = 8;
/// Extra point each payer owes when the winning tile came from the wall.
pub const SELF_DRAW_BONUS: Points = 1;
/// Hand values offered when scoring a win or a ready hand.
pub const HAND_VALUES: [Points; 5] = [1, 2, 4, 8, 16];
/// Session lengths offered at setup, in rounds.
pub const SESSION_LENGTHS: [usize; 4] = [10, 8, 4, 1];

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
