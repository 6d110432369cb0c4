use super::Identity;
use super::Store;
use crate::gameplay::session::Session;
use std::path::Path;
use std::path::PathBuf;

/// One JSON file per identity under a storage directory.
#[derive(Debug)]
pub struct Disk {
    dir: PathBuf,
}

impl Disk {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
    fn path(&self, id: Identity) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

impl Store for Disk {
    /// A snapshot that fails structural validation is treated as absent,
    /// never propagated as a crash.
    fn get(&self, id: Identity) -> Option<Session> {
        let path = self.path(id);
        let text = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&text) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("discarding corrupt session {}: {}", path.display(), e);
                None
            }
        }
    }
    fn put(&mut self, id: Identity, session: &Session) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let text = serde_json::to_string_pretty(session)?;
        std::fs::write(self.path(id), text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tilescore-{}-{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn round_trips_a_session() {
        let mut store = Disk::new(scratch_dir("roundtrip"));
        let mut session = Session::new();
        session.reset(4);
        session.set_expected(4);
        store.put(1, &session).expect("put");
        assert!(store.get(1) == Some(session));
        assert!(store.get(2) == None);
    }

    #[test]
    fn corrupt_snapshot_reads_as_absent() {
        let dir = scratch_dir("corrupt");
        let mut store = Disk::new(&dir);
        store.put(1, &Session::new()).expect("put");
        std::fs::write(dir.join("1.json"), "{ not json").expect("overwrite");
        assert!(store.get(1) == None);
    }
}
