//! The tab-wide session: zero or one authenticated identity.
//!
//! The session is created once per tab by the application shell, which keeps
//! sole ownership. Everything else gets `&Session` for reads; the only writes
//! are [`Session::login`] and [`Session::logout`], and those are also the only
//! operations that touch the storage area.

use authz::types::Identity;
use tracing::{debug, info};

use crate::error::Result;
use crate::storage::StorageArea;

/// Reserved storage key for the persisted identity record.
pub const SESSION_KEY: &str = "user";

/// Session state for one tab.
pub struct Session<S> {
    identity: Option<Identity>,
    storage: S,
}

impl<S: StorageArea> Session<S> {
    /// Load the session from the tab's storage area.
    ///
    /// A record that is missing, unreadable, or does not parse into an
    /// [`Identity`] (including one with an unknown role) leaves the session
    /// logged out. That case is never reported as an error.
    pub fn initialize(storage: S) -> Self {
        let identity = match storage.get(SESSION_KEY) {
            Ok(Some(record)) => match serde_json::from_str::<Identity>(&record) {
                Ok(identity) => Some(identity),
                Err(e) => {
                    debug!("Ignoring unparseable session record: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                debug!("Ignoring unreadable session storage: {}", e);
                None
            }
        };

        if let Some(identity) = &identity {
            info!("Session restored for user: {}", identity.username);
        }

        Self { identity, storage }
    }

    /// The identity currently signed in, if any. Never touches storage.
    pub fn current_identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Remember `identity` for this tab, replacing any previous one.
    ///
    /// The identity is taken as returned by the backend and is not validated
    /// here.
    pub fn login(&mut self, identity: Identity) -> Result<()> {
        let record = serde_json::to_string(&identity)?;
        info!("Session created for user: {}", identity.username);

        self.identity = Some(identity);
        self.storage.set(SESSION_KEY, &record)
    }

    /// Forget the current identity. Calling this while logged out is a no-op.
    pub fn logout(&mut self) -> Result<()> {
        if let Some(identity) = self.identity.take() {
            info!("Session destroyed for user: {}", identity.username);
        }
        self.storage.remove(SESSION_KEY)
    }

    /// Read access to the underlying storage area.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the storage area back, ending the session.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::storage::{MemoryStorage, RedbStorage};
    use rstest::rstest;
    use tempfile::TempDir;

    fn stored(storage: &impl StorageArea) -> Option<String> {
        storage.get(SESSION_KEY).unwrap()
    }

    #[test]
    fn test_initialize_empty_storage() {
        let session = Session::initialize(MemoryStorage::new());
        assert!(session.current_identity().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_sets_memory_and_storage() {
        let mut session = Session::initialize(MemoryStorage::new());
        let identity = Identity::guest(4, "alice");

        session.login(identity.clone()).unwrap();

        assert_eq!(session.current_identity(), Some(&identity));
        let record = stored(session.storage()).unwrap();
        let persisted: Identity = serde_json::from_str(&record).unwrap();
        assert_eq!(persisted, identity);
    }

    #[test]
    fn test_login_replaces_previous_identity() {
        let mut session = Session::initialize(MemoryStorage::new());
        session.login(Identity::guest(1, "alice")).unwrap();
        session.login(Identity::admin(2, "root")).unwrap();

        assert_eq!(session.current_identity(), Some(&Identity::admin(2, "root")));
        let reloaded = Session::initialize(session.into_storage());
        assert_eq!(reloaded.current_identity(), Some(&Identity::admin(2, "root")));
    }

    #[test]
    fn test_round_trip_through_reload() {
        for identity in [
            Identity::guest(10, "alice"),
            Identity::admin("abc-123", "root"),
            Identity::guest(0, ""),
        ] {
            let mut session = Session::initialize(MemoryStorage::new());
            session.login(identity.clone()).unwrap();

            let reloaded = Session::initialize(session.into_storage());
            assert_eq!(reloaded.current_identity(), Some(&identity));
        }
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut session = Session::initialize(MemoryStorage::new());
        session.login(Identity::guest(1, "alice")).unwrap();

        session.logout().unwrap();
        assert!(session.current_identity().is_none());
        assert!(stored(session.storage()).is_none());

        session.logout().unwrap();
        assert!(session.current_identity().is_none());
        assert!(stored(session.storage()).is_none());
    }

    #[test]
    fn test_logout_when_never_logged_in() {
        let mut session = Session::initialize(MemoryStorage::new());
        session.logout().unwrap();
        session.logout().unwrap();
        assert!(session.current_identity().is_none());
        assert!(session.storage().is_empty());
    }

    #[rstest]
    #[case("not json at all")]
    #[case("")]
    #[case("null")]
    #[case("{}")]
    #[case(r#"{"id":1,"username":"x"}"#)]
    #[case(r#"{"id":1,"username":"x","role":"owner"}"#)]
    #[case(r#"{"id":1.5,"username":"x","role":"guest"}"#)]
    #[case(r#"["guest"]"#)]
    fn test_malformed_record_recovers_to_absent(#[case] record: &str) {
        let mut storage = MemoryStorage::new();
        storage.set(SESSION_KEY, record).unwrap();

        let session = Session::initialize(storage);
        assert!(session.current_identity().is_none());
    }

    struct BrokenStorage;

    impl StorageArea for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(UserError::Io(std::io::Error::other("unreadable")))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(UserError::Io(std::io::Error::other("read-only")))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(UserError::Io(std::io::Error::other("read-only")))
        }
    }

    #[test]
    fn test_unreadable_storage_recovers_to_absent() {
        let session = Session::initialize(BrokenStorage);
        assert!(session.current_identity().is_none());
    }

    #[test]
    fn test_failed_write_still_updates_memory() {
        let mut session = Session::initialize(BrokenStorage);
        let result = session.login(Identity::admin(1, "root"));

        assert!(matches!(result, Err(UserError::Io(_))));
        assert!(session.is_authenticated());

        assert!(session.logout().is_err());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_round_trip_through_redb() {
        let temp_dir = TempDir::new().unwrap();
        let identity = Identity::admin(99, "root");

        {
            let storage = RedbStorage::open_tab(temp_dir.path(), "main").unwrap();
            let mut session = Session::initialize(storage);
            session.login(identity.clone()).unwrap();
        }

        let storage = RedbStorage::open_tab(temp_dir.path(), "main").unwrap();
        let mut session = Session::initialize(storage);
        assert_eq!(session.current_identity(), Some(&identity));

        session.logout().unwrap();
        drop(session);

        let storage = RedbStorage::open_tab(temp_dir.path(), "main").unwrap();
        assert!(Session::initialize(storage).current_identity().is_none());
    }
}
