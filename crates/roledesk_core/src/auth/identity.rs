//! Identity store: session lifecycle over a `LocalStorage` backend.

use crate::auth::credentials::authenticate;
use crate::model::session::Session;
use crate::storage::local_storage::{LocalStorage, StorageError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized session record.
pub const SESSION_STORAGE_KEY: &str = "user";

pub type IdentityResult<T> = Result<T, IdentityError>;

/// Identity failures. Wrong credentials are not an error; only the storage
/// backend can fail.
#[derive(Debug)]
pub enum IdentityError {
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for IdentityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "session storage failed: {err}"),
            Self::Encode(err) => write!(f, "session record could not be encoded: {err}"),
        }
    }
}

impl Error for IdentityError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for IdentityError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Holds the authenticated session.
///
/// `is_loading()` stays `true` from construction until `restore()` has read
/// durable storage once.
pub struct IdentityStore<S: LocalStorage> {
    storage: S,
    session: Option<Session>,
    is_loading: bool,
}

impl<S: LocalStorage> IdentityStore<S> {
    /// Creates a store in the loading state without touching storage.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: None,
            is_loading: true,
        }
    }

    /// Creates a store and immediately restores the stored session.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.restore();
        store
    }

    /// Loads the stored session record, if any.
    ///
    /// A well-formed record is trusted as is. A malformed record or a storage
    /// read failure is treated as "no stored session"; the record is left in
    /// place. Loading always ends here.
    pub fn restore(&mut self) -> Option<&Session> {
        let stored = match self.storage.get_item(SESSION_STORAGE_KEY) {
            Ok(stored) => stored,
            Err(err) => {
                warn!(
                    "event=session_restore module=identity status=ignored reason=storage_read_failed error={}",
                    err
                );
                None
            }
        };
        self.session = match stored {
            Some(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => {
                    info!(
                        "event=session_restore module=identity status=ok role={}",
                        session.role
                    );
                    Some(session)
                }
                Err(err) => {
                    warn!(
                        "event=session_restore module=identity status=ignored reason=malformed_record error={}",
                        err
                    );
                    None
                }
            },
            None => {
                info!("event=session_restore module=identity status=ok session=none");
                None
            }
        };
        self.is_loading = false;
        self.session.as_ref()
    }

    /// Attempts a login against the static credential table.
    ///
    /// Returns `Ok(false)` and leaves the current session untouched on a
    /// mismatch.
    pub fn login(&mut self, email: &str, secret: &str) -> IdentityResult<bool> {
        let Some(session) = authenticate(email, secret) else {
            info!("event=login module=identity status=rejected");
            return Ok(false);
        };

        let record = serde_json::to_string(&session).map_err(IdentityError::Encode)?;
        self.storage.set_item(SESSION_STORAGE_KEY, &record)?;
        info!(
            "event=login module=identity status=ok role={}",
            session.role
        );
        self.session = Some(session);
        Ok(true)
    }

    /// Removes the stored record, then clears the session.
    ///
    /// On a storage failure the session stays set so memory and storage agree.
    pub fn logout(&mut self) -> IdentityResult<()> {
        self.storage.remove_item(SESSION_STORAGE_KEY)?;
        self.session = None;
        info!("event=logout module=identity status=ok");
        Ok(())
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Releases the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
