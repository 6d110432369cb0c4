//! Interactive scorekeeper.
//!
//! Stands in for the chat transport: renders engine replies, drives the
//! fixed menus with dialoguer, and persists the session after every fully
//! processed intent, so an abandoned session resumes where it left off.

use clap::Parser;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;
use tilescore::flow::engine::Engine;
use tilescore::flow::intent::Intent;
use tilescore::flow::phase::Phase;
use tilescore::flow::reply::Reply;
use tilescore::store::Disk;
use tilescore::store::Identity;
use tilescore::store::Store;

#[derive(Parser)]
#[command(about = "Mahjong session scorekeeper")]
struct Args {
    /// Directory holding per-identity session snapshots.
    #[arg(long, default_value = "storage/sessions")]
    storage: std::path::PathBuf,
    /// Identity owning the session (one session per identity).
    #[arg(long, default_value_t = 0)]
    identity: Identity,
}

fn main() -> anyhow::Result<()> {
    tilescore::log();
    let args = Args::parse();
    let mut store = Disk::new(&args.storage);
    let mut engine = match store.get(args.identity) {
        Some(session) => Engine::from(session),
        None => Engine::new(),
    };
    let mut replies = engine.resume();
    while let Some(intent) = exchange(&engine, &replies)? {
        replies = engine.apply(intent);
        store.put(args.identity, engine.session())?;
    }
    Ok(())
}

/// Render the turn's replies and collect the next intent.
/// Esc on a menu ends the program; all state is already persisted.
fn exchange(engine: &Engine, replies: &[Reply]) -> anyhow::Result<Option<Intent>> {
    let last = match replies.last() {
        Some(last) => last,
        None => return Ok(None),
    };
    for reply in replies.iter().filter(|r| r.menu.is_empty()) {
        println!("{}", reply.text.cyan());
    }
    if !last.menu.is_empty() {
        let labels = last
            .menu
            .iter()
            .map(|c| c.label.as_str())
            .collect::<Vec<&str>>();
        let picked = Select::new()
            .with_prompt(last.text.clone())
            .items(labels.as_slice())
            .default(0)
            .interact_opt()?;
        Ok(picked.map(|i| last.menu[i].intent.clone()))
    } else if engine.session().phase() == Phase::EnterPlayersNames {
        let name: String = Input::new().with_prompt("Имя").interact_text()?;
        Ok(Some(Intent::Name(name)))
    } else {
        Ok(None)
    }
}
