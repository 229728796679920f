//! User Entity
//!
//! The account record persisted in the local session store. It is rebuilt
//! from the submitted form on every login and overwritten in place.

use serde::{Deserialize, Serialize};

use super::Route;

/// Account role, fixed by which login form was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UserRole {
    #[default]
    Employee,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Employee => "Employee",
            UserRole::Admin => "Admin",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Admin" => UserRole::Admin,
            _ => UserRole::Employee,
        }
    }

    /// Page shown after a successful login for this role
    pub fn home_route(&self) -> Route {
        match self {
            UserRole::Employee => Route::Bills,
            UserRole::Admin => Route::Dashboard,
        }
    }
}

/// Connection status stored alongside the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Connected,
    #[default]
    Disconnected,
}

/// The logged-in account
///
/// Field order matters: the session store holds the serialized form and
/// callers compare it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type")]
    pub role: UserRole,
    pub email: String,
    pub password: String,
    pub status: UserStatus,
}

impl User {
    /// Build a connected user from submitted credentials
    pub fn new(role: UserRole, email: String, password: String) -> Self {
        Self {
            role,
            email,
            password,
            status: UserStatus::Connected,
        }
    }

    /// Local part of the email, used as the display name when the account
    /// is provisioned on first login
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or_default()
    }
}
