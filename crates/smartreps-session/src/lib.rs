//! Session persistence for the smartreps dashboard.
//!
//! One profile record backs the whole session: the last write wins, there
//! is no expiry and no multi-profile support. The record lives in a single
//! JSON file under the platform data directory (or wherever the store was
//! pointed at construction), and anything unreadable in that file is
//! treated as "no session" rather than an error.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use smartreps_core::UserProfile;

/// File name of the persisted session record.
pub const SESSION_FILE: &str = "smartreps_user.json";

/// Store for the single persisted user profile.
///
/// Constructed once at app start and passed to whoever needs it; login
/// writes through it and logout clears it.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by an explicit file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store in the platform data directory.
    ///
    /// Returns `None` when no home directory can be resolved.
    pub fn open_default() -> Option<Self> {
        let dirs = ProjectDirs::from("", "", "smartreps")?;
        Some(Self::new(dirs.data_dir().join(SESSION_FILE)))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Persist `profile` as the current session, replacing any previous one.
    pub fn set_user(&self, profile: &UserProfile) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(profile)?;
        fs::write(&self.path, json)
    }

    /// The stored profile, or `None` when nothing valid is stored.
    ///
    /// A missing file and a malformed record are both "no session".
    pub fn get_user(&self) -> Option<UserProfile> {
        let data = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&data).ok()
    }

    /// Whether a valid session record is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.get_user().is_some()
    }

    /// Remove the stored session, if any.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use smartreps_core::Role;

    use super::*;

    fn scratch_store(name: &str) -> SessionStore {
        let dir = std::env::temp_dir().join("smartreps_session_tests").join(name);
        let _ = fs::remove_dir_all(&dir);
        SessionStore::new(dir.join(SESSION_FILE))
    }

    fn demo_profile() -> UserProfile {
        UserProfile::signup("Sarah Mentor", "sarah@expert.com", Role::Mentor)
    }

    #[test]
    fn test_round_trip_preserves_profile() {
        let store = scratch_store("round_trip");
        store.set_user(&demo_profile()).unwrap();
        assert_eq!(store.get_user(), Some(demo_profile()));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_missing_file_is_no_session() {
        let store = scratch_store("missing");
        assert_eq!(store.get_user(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_malformed_record_is_no_session() {
        let store = scratch_store("malformed");
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{not json").unwrap();
        assert_eq!(store.get_user(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_last_write_wins() {
        let store = scratch_store("last_write");
        store.set_user(&demo_profile()).unwrap();

        let second = UserProfile::signup("Tech Corp", "hr@techcorp.com", Role::Company);
        store.set_user(&second).unwrap();
        assert_eq!(store.get_user(), Some(second));
    }

    #[test]
    fn test_clear_removes_session() {
        let store = scratch_store("clear");
        store.set_user(&demo_profile()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.get_user(), None);

        // Clearing an already-empty store is fine.
        store.clear().unwrap();
    }

    #[test]
    fn test_stored_record_uses_camel_case_keys() {
        let store = scratch_store("key_shape");
        store.set_user(&demo_profile()).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"umrEligible\":true"));
        assert!(raw.contains("\"role\":\"mentor\""));
    }
}
