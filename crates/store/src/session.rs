//! JSON-file session persistence.
//!
//! Two named slots — the authenticated identity and the document history —
//! persisted as JSON blobs under a data directory. Loaded once at startup
//! and saved after each mutation; never consulted as ambient global state.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use trustseal_core::document::Document;

use crate::auth::UserAccount;

// ---------------------------------------------------------------------------
// Slots and errors
// ---------------------------------------------------------------------------

/// Slot name for the authenticated identity.
pub const IDENTITY_SLOT: &str = "trustseal_user";

/// Slot name for the document history.
pub const DOCUMENTS_SLOT: &str = "trustseal_documents";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// SessionStore
// ---------------------------------------------------------------------------

/// Load-at-start / save-after-mutate persistence contract.
///
/// Implementations persist the two slots independently; a missing slot is
/// an empty state, not an error.
pub trait SessionStore: Send + Sync {
    fn load_identity(&self) -> Result<Option<UserAccount>, StoreError>;
    fn save_identity(&self, account: &UserAccount) -> Result<(), StoreError>;
    fn clear_identity(&self) -> Result<(), StoreError>;

    fn load_documents(&self) -> Result<Vec<Document>, StoreError>;
    fn save_documents(&self, documents: &[Document]) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

/// File-backed store writing one `<slot>.json` file per slot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }

    fn read_slot(&self, slot: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.slot_path(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_slot(&self, slot: &str, contents: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.slot_path(slot), contents)?;
        tracing::debug!(slot, "Session slot saved");
        Ok(())
    }

    fn delete_slot(&self, slot: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionStore for JsonFileStore {
    fn load_identity(&self) -> Result<Option<UserAccount>, StoreError> {
        match self.read_slot(IDENTITY_SLOT)? {
            Some(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            None => Ok(None),
        }
    }

    fn save_identity(&self, account: &UserAccount) -> Result<(), StoreError> {
        self.write_slot(IDENTITY_SLOT, &serde_json::to_string_pretty(account)?)
    }

    fn clear_identity(&self) -> Result<(), StoreError> {
        self.delete_slot(IDENTITY_SLOT)
    }

    fn load_documents(&self) -> Result<Vec<Document>, StoreError> {
        match self.read_slot(DOCUMENTS_SLOT)? {
            Some(contents) => Ok(serde_json::from_str(&contents)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_documents(&self, documents: &[Document]) -> Result<(), StoreError> {
        self.write_slot(DOCUMENTS_SLOT, &serde_json::to_string_pretty(documents)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthProvider, DemoAuthProvider};
    use trustseal_core::assembler;
    use trustseal_core::file::FileDescriptor;

    fn store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn missing_slots_load_as_empty_state() {
        let (_dir, store) = store();
        assert!(store.load_identity().unwrap().is_none());
        assert!(store.load_documents().unwrap().is_empty());
    }

    #[test]
    fn identity_round_trips() {
        let (_dir, store) = store();
        let account = DemoAuthProvider.login("alice@corp.com", "pw").unwrap();

        store.save_identity(&account).unwrap();
        let loaded = store.load_identity().unwrap().unwrap();
        assert_eq!(loaded, account);
    }

    #[test]
    fn clear_identity_removes_the_slot() {
        let (_dir, store) = store();
        let account = DemoAuthProvider.login("alice@corp.com", "pw").unwrap();
        store.save_identity(&account).unwrap();

        store.clear_identity().unwrap();
        assert!(store.load_identity().unwrap().is_none());
    }

    #[test]
    fn clearing_an_absent_identity_is_fine() {
        let (_dir, store) = store();
        store.clear_identity().unwrap();
    }

    #[test]
    fn documents_round_trip() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let (_dir, store) = store();
        let mut rng = StdRng::seed_from_u64(1);
        let owner = uuid::Uuid::from_u128(9);
        let docs: Vec<_> = ["a.pdf", "b.png"]
            .iter()
            .map(|name| {
                assembler::assemble(&FileDescriptor::from_name(*name, 100), owner, &mut rng)
                    .unwrap()
            })
            .collect();

        store.save_documents(&docs).unwrap();
        let loaded = store.load_documents().unwrap();
        assert_eq!(loaded, docs);
    }

    #[test]
    fn save_creates_the_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested/data");
        let store = JsonFileStore::new(&nested);

        let account = DemoAuthProvider.login("alice@corp.com", "pw").unwrap();
        store.save_identity(&account).unwrap();
        assert!(nested.join("trustseal_user.json").exists());
    }
}
