//! Authentication Flow
//!
//! Credential submission for the two roles, with the implicit
//! register-on-first-login policy: an account the backend does not know
//! is provisioned once and the login retried.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::domain::{Route, User, UserRole};
use crate::session::{Session, SessionStore};
use crate::store::{Credentials, NewUser, RemoteStore, StoreError};

/// Raw form field values; no client-side format validation is applied
#[derive(Debug, Clone, Default)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

/// Terminal authentication failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Login rejected for a reason other than a missing account
    AuthenticationFailed(String),
    /// The account was unknown and provisioning it failed too
    RegistrationFailed(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::AuthenticationFailed(msg) => write!(f, "authentication failed: {}", msg),
            LoginError::RegistrationFailed(msg) => write!(f, "registration failed: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

/// Login flow for both roles
///
/// The user record is written to the session store as a pending session
/// before the remote call resolves; the caller navigates to the returned
/// route on success.
pub struct LoginFlow<S: RemoteStore, L: SessionStore> {
    store: Option<Rc<S>>,
    session: Rc<Session<L>>,
    previous_location: Cell<Option<Route>>,
    error: RefCell<Option<LoginError>>,
}

impl<S: RemoteStore, L: SessionStore> LoginFlow<S, L> {
    pub fn new(store: Option<Rc<S>>, session: Rc<Session<L>>) -> Self {
        Self {
            store,
            session,
            previous_location: Cell::new(None),
            error: RefCell::new(None),
        }
    }

    /// Employee form submission; home route is the bill list
    pub async fn submit_employee(&self, fields: LoginFields) -> Result<Route, LoginError> {
        self.submit(UserRole::Employee, fields).await
    }

    /// Admin form submission; home route is the dashboard
    pub async fn submit_admin(&self, fields: LoginFields) -> Result<Route, LoginError> {
        self.submit(UserRole::Admin, fields).await
    }

    /// Route recorded on the last successful submission, kept for
    /// breadcrumb/back-navigation support
    pub fn previous_location(&self) -> Option<Route> {
        self.previous_location.get()
    }

    /// Error recorded on the last failed submission
    pub fn last_error(&self) -> Option<LoginError> {
        self.error.borrow().clone()
    }

    async fn submit(&self, role: UserRole, fields: LoginFields) -> Result<Route, LoginError> {
        let user = User::new(role, fields.email, fields.password);
        self.session.begin(&user);

        match self.login_or_register(&user).await {
            Ok(()) => {
                let route = role.home_route();
                self.error.replace(None);
                self.previous_location.set(Some(route));
                Ok(route)
            }
            Err(err) => {
                self.session.discard();
                log::error!("login failed for {}: {}", user.email, err);
                self.error.replace(Some(err.clone()));
                Err(err)
            }
        }
    }

    /// Login, falling back to provisioning plus exactly one retry when
    /// the account is unknown
    async fn login_or_register(&self, user: &User) -> Result<(), LoginError> {
        // Without a remote store the submission resolves locally.
        let Some(store) = &self.store else {
            return Ok(());
        };

        match self.login(store, user).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_not_found() => {
                log::info!("unknown account {}, provisioning it", user.email);
                self.register(store, user).await?;
                self.login(store, user)
                    .await
                    .map_err(|err| LoginError::AuthenticationFailed(err.to_string()))
            }
            Err(err) => Err(LoginError::AuthenticationFailed(err.to_string())),
        }
    }

    async fn login(&self, store: &S, user: &User) -> Result<(), StoreError> {
        let receipt = store
            .login(&Credentials {
                email: user.email.clone(),
                password: user.password.clone(),
            })
            .await?;
        self.session.confirm(&receipt.jwt);
        Ok(())
    }

    async fn register(&self, store: &S, user: &User) -> Result<(), LoginError> {
        store
            .create_user(&NewUser {
                role: user.role,
                name: user.display_name().to_string(),
                email: user.email.clone(),
                password: user.password.clone(),
            })
            .await
            .map_err(|err| LoginError::RegistrationFailed(err.to_string()))?;
        log::info!("account {} created", user.email);
        Ok(())
    }
}
