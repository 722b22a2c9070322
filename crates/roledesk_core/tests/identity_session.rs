use roledesk_core::db::open_db;
use roledesk_core::{
    check_access, GuardDecision, IdentityStore, LocalStorage, MemoryLocalStorage, Role, Route,
    Session, SqliteLocalStorage, StorageError, StorageResult, SESSION_STORAGE_KEY,
};

/// Backend whose reads or removals fail on demand.
#[derive(Default)]
struct FlakyStorage {
    inner: MemoryLocalStorage,
    fail_reads: bool,
    fail_removes: bool,
}

impl LocalStorage for FlakyStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        if self.fail_reads {
            return Err(StorageError::UninitializedConnection);
        }
        self.inner.get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        if self.fail_removes {
            return Err(StorageError::UninitializedConnection);
        }
        self.inner.remove_item(key)
    }
}

#[test]
fn seeded_credentials_log_in_with_matching_role() {
    for (email, secret, role) in [
        ("admin@example.com", "admin123", Role::Admin),
        ("worker@example.com", "worker123", Role::Worker),
        ("user@example.com", "user123", Role::User),
    ] {
        let mut identity = IdentityStore::open(MemoryLocalStorage::new());
        assert!(identity.login(email, secret).unwrap());

        let session = identity.current_session().expect("session after login");
        assert_eq!(session.role, role);
        assert_eq!(session.email, email);
        assert!(identity
            .storage()
            .get_item(SESSION_STORAGE_KEY)
            .unwrap()
            .is_some());
    }
}

#[test]
fn wrong_credentials_leave_session_unset() {
    let mut identity = IdentityStore::open(MemoryLocalStorage::new());

    for (email, secret) in [
        ("admin@example.com", "worker123"),
        ("nobody@example.com", "admin123"),
        ("admin@example.com", ""),
        ("ADMIN@example.com", "admin123"),
    ] {
        assert!(!identity.login(email, secret).unwrap());
        assert!(identity.current_session().is_none());
    }
    assert!(identity.storage().is_empty());
}

#[test]
fn failed_login_keeps_existing_session() {
    let mut identity = IdentityStore::open(MemoryLocalStorage::new());
    identity.login("worker@example.com", "worker123").unwrap();

    assert!(!identity.login("admin@example.com", "nope").unwrap());
    assert_eq!(identity.current_session().unwrap().role, Role::Worker);
}

#[test]
fn logout_clears_session_and_storage_key() {
    let mut identity = IdentityStore::open(MemoryLocalStorage::new());
    identity.login("admin@example.com", "admin123").unwrap();

    identity.logout().unwrap();

    assert!(identity.current_session().is_none());
    assert_eq!(identity.storage().get_item(SESSION_STORAGE_KEY).unwrap(), None);
}

#[test]
fn stored_record_uses_plain_session_shape() {
    let mut identity = IdentityStore::open(MemoryLocalStorage::new());
    identity.login("user@example.com", "user123").unwrap();

    let raw = identity
        .storage()
        .get_item(SESSION_STORAGE_KEY)
        .unwrap()
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["id"], "3");
    assert_eq!(json["email"], "user@example.com");
    assert_eq!(json["name"], "Regular User");
    assert_eq!(json["role"], "user");
}

#[test]
fn restore_trusts_any_well_formed_record() {
    let mut storage = MemoryLocalStorage::new();
    storage
        .set_item(
            SESSION_STORAGE_KEY,
            r#"{"id":"77","email":"ghost@example.com","name":"Ghost","role":"admin"}"#,
        )
        .unwrap();

    let identity = IdentityStore::open(storage);
    assert_eq!(
        identity.current_session(),
        Some(&Session {
            id: "77".to_string(),
            email: "ghost@example.com".to_string(),
            name: "Ghost".to_string(),
            role: Role::Admin,
        })
    );
}

#[test]
fn session_survives_reopen_with_sqlite_storage() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("roledesk.sqlite3");

    {
        let conn = open_db(&db_path).unwrap();
        let storage = SqliteLocalStorage::try_new(&conn).unwrap();
        let mut identity = IdentityStore::open(storage);
        assert!(identity.login("worker@example.com", "worker123").unwrap());
    }

    let conn = open_db(&db_path).unwrap();
    let storage = SqliteLocalStorage::try_new(&conn).unwrap();
    let mut identity = IdentityStore::new(storage);
    assert!(identity.is_loading());
    identity.restore();
    assert!(!identity.is_loading());
    assert_eq!(identity.current_session().unwrap().role, Role::Worker);

    identity.logout().unwrap();
    let identity = IdentityStore::open(SqliteLocalStorage::try_new(&conn).unwrap());
    assert!(identity.current_session().is_none());
}

#[test]
fn unreadable_storage_restores_as_signed_out() {
    let storage = FlakyStorage {
        fail_reads: true,
        ..FlakyStorage::default()
    };
    let mut identity = IdentityStore::new(storage);

    assert!(identity.restore().is_none());
    assert!(!identity.is_loading());
    assert_eq!(
        check_access(&identity, None),
        GuardDecision::Redirect(Route::Login)
    );
}

#[test]
fn failed_logout_keeps_session_and_record_in_step() {
    let mut identity = IdentityStore::open(FlakyStorage::default());
    assert!(identity.login("admin@example.com", "admin123").unwrap());

    let mut storage = identity.into_storage();
    storage.fail_removes = true;
    let mut identity = IdentityStore::open(storage);

    assert!(identity.logout().is_err());
    assert_eq!(identity.current_session().unwrap().role, Role::Admin);
    assert!(identity
        .storage()
        .get_item(SESSION_STORAGE_KEY)
        .unwrap()
        .is_some());
}
