use super::Identity;
use super::Store;
use crate::gameplay::session::Session;
use std::collections::HashMap;

/// In-memory store for tests and single-process transports.
#[derive(Debug, Default)]
pub struct Memory {
    sessions: HashMap<Identity, Session>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for Memory {
    fn get(&self, id: Identity) -> Option<Session> {
        self.sessions.get(&id).cloned()
    }
    fn put(&mut self, id: Identity, session: &Session) -> anyhow::Result<()> {
        self.sessions.insert(id, session.clone());
        Ok(())
    }
}
