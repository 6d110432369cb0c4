pub mod disk;
pub use disk::*;

pub mod memory;
pub use memory::*;

use crate::gameplay::session::Session;

/// A chat identity owning one session.
pub type Identity = i64;

/// Keyed session persistence, injected into the transport.
///
/// `get` reports a corrupt or unreadable snapshot as absent so the caller
/// starts a fresh session rather than crashing; `put` is called after every
/// fully-processed intent.
pub trait Store {
    fn get(&self, id: Identity) -> Option<Session>;
    fn put(&mut self, id: Identity, session: &Session) -> anyhow::Result<()>;
}
