//! Login state shared across views.
//!
//! The persisted [`User`] record is the auth flag. Views hold a [`Session`]
//! and call [`Session::subscribe`] to re-render when the user logs in or out.
//! No credentials are verified here.

use std::sync::Arc;

use tokio::sync::watch;

use crate::error::{CoachError, CoachResult};
use crate::storage::Storage;
use crate::types::User;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

#[derive(Clone)]
pub struct Session {
    storage: Storage,
    tx: Arc<watch::Sender<Option<User>>>,
}

impl Session {
    /// Load any persisted user.
    pub fn open(storage: Storage) -> CoachResult<Self> {
        let user = storage.load_user()?;
        if let Some(ref u) = user {
            tracing::info!(email = %u.email, "Restored session");
        }
        let (tx, _rx) = watch::channel(user);
        Ok(Self {
            storage,
            tx: Arc::new(tx),
        })
    }

    pub fn current(&self) -> Option<User> {
        self.tx.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Email of the logged-in user, empty when logged out.
    pub fn email(&self) -> String {
        self.tx
            .borrow()
            .as_ref()
            .map(|u| u.email.clone())
            .unwrap_or_default()
    }

    /// Receiver that observes every login and logout.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.tx.subscribe()
    }

    /// Persist `email` as the logged-in user.
    ///
    /// Both fields must be non-blank. The password is not stored.
    pub fn login(&self, email: &str, password: &str) -> CoachResult<User> {
        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            return Err(CoachError::InvalidInput(MISSING_FIELDS_MESSAGE.to_string()));
        }
        let user = User::new(email);
        self.storage.save_user(&user)?;
        self.tx.send_replace(Some(user.clone()));
        tracing::info!(email = %user.email, "Logged in");
        Ok(user)
    }

    pub fn logout(&self) -> CoachResult<()> {
        self.storage.clear_user()?;
        if self.tx.send_replace(None).is_some() {
            tracing::info!("Logged out");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn session(dir: &tempfile::TempDir) -> Session {
        Session::open(Storage::new(dir.path().join("session.redb")).unwrap()).unwrap()
    }

    #[test]
    fn test_login_requires_both_fields() {
        let dir = tempdir().unwrap();
        let session = session(&dir);

        for (email, password) in [("", "pw"), ("a@b.c", ""), ("  ", "  ")] {
            let err = session.login(email, password).unwrap_err();
            assert_eq!(err.user_message(), MISSING_FIELDS_MESSAGE);
        }
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_login_logout_cycle() {
        let dir = tempdir().unwrap();
        let session = session(&dir);

        let user = session.login(" lifter@example.com ", "secret").unwrap();
        assert_eq!(user.email, "lifter@example.com");
        assert_eq!(session.email(), "lifter@example.com");

        session.logout().unwrap();
        assert!(session.current().is_none());
        assert_eq!(session.email(), "");
    }

    #[test]
    fn test_session_restored_on_open() {
        let dir = tempdir().unwrap();
        session(&dir).login("lifter@example.com", "secret").unwrap();

        let reopened = session(&dir);
        assert!(reopened.is_logged_in());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let dir = tempdir().unwrap();
        let session = session(&dir);
        let mut rx = session.subscribe();

        session.login("lifter@example.com", "secret").unwrap();
        rx.changed().await.unwrap();
        assert_eq!(
            rx.borrow_and_update().as_ref().map(|u| u.email.as_str()),
            Some("lifter@example.com")
        );

        session.logout().unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
    }
}
