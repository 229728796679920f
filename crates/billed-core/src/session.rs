//! Local Session Store
//!
//! Contract for the durable key-value storage holding the logged-in user
//! and the session token, plus the two-phase session lifecycle written
//! around the login exchange: the user record lands immediately when a
//! form is submitted (pending), and is either promoted when the token
//! arrives (confirmed) or discarded on terminal failure.

use std::cell::Cell;

use crate::domain::User;

/// Storage key for the serialized [`User`]
pub const USER_KEY: &str = "user";
/// Storage key for the opaque session token
pub const JWT_KEY: &str = "jwt";

/// Durable key-value storage surviving page reloads
///
/// Access is synchronous and always safe from the main flow; the browser
/// implementation wraps `localStorage`.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Where the session stands relative to the remote exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No user record stored
    Anonymous,
    /// User record written, token not yet received
    Pending,
    /// User record and token both stored
    Confirmed,
}

/// Session lifecycle over a [`SessionStore`]
pub struct Session<L: SessionStore> {
    storage: L,
    phase: Cell<SessionPhase>,
}

impl<L: SessionStore> Session<L> {
    /// Wrap a storage, inferring the phase from what a previous page load
    /// may have left behind
    pub fn new(storage: L) -> Self {
        let phase = match (
            storage.get_item(USER_KEY).is_some(),
            storage.get_item(JWT_KEY).is_some(),
        ) {
            (true, true) => SessionPhase::Confirmed,
            (true, false) => SessionPhase::Pending,
            _ => SessionPhase::Anonymous,
        };
        Self {
            storage,
            phase: Cell::new(phase),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase.get()
    }

    /// Write the user record ahead of the remote exchange
    pub fn begin(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(serialized) => {
                self.storage.set_item(USER_KEY, &serialized);
                self.phase.set(SessionPhase::Pending);
            }
            Err(err) => log::error!("failed to serialize user record: {}", err),
        }
    }

    /// Promote the pending session once the remote issued a token
    pub fn confirm(&self, jwt: &str) {
        self.storage.set_item(JWT_KEY, jwt);
        self.phase.set(SessionPhase::Confirmed);
    }

    /// Drop a session whose remote exchange failed terminally
    pub fn discard(&self) {
        self.storage.remove_item(USER_KEY);
        self.storage.remove_item(JWT_KEY);
        self.phase.set(SessionPhase::Anonymous);
    }

    /// Clear the stored identity on explicit disconnect
    pub fn logout(&self) {
        self.discard();
    }

    /// The stored user record, if any
    pub fn current_user(&self) -> Option<User> {
        let serialized = self.storage.get_item(USER_KEY)?;
        match serde_json::from_str(&serialized) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("stored user record is unreadable: {}", err);
                None
            }
        }
    }

    /// Email of the stored user, attached to uploads and submitted bills
    pub fn current_email(&self) -> Option<String> {
        self.current_user().map(|user| user.email)
    }

    /// Direct access to the underlying storage
    pub fn storage(&self) -> &L {
        &self.storage
    }
}
