//! Remote Data Service Contract
//!
//! Flows talk to the backend exclusively through [`RemoteStore`]. The UI
//! crate provides the HTTP implementation; tests provide an in-memory one.
//! Futures are `?Send` because the browser target's futures are not `Send`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Bill, UserRole};

/// Credentials sent to the login endpoint
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Session token issued on successful login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginReceipt {
    pub jwt: String,
}

/// Payload for provisioning an account on first login
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    #[serde(rename = "type")]
    pub role: UserRole,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A receipt file handed to the upload endpoint together with the owner
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub email: String,
}

/// Upload result: where the attachment landed and the remote-assigned
/// bill key used by the later metadata submission
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    pub key: String,
}

/// Errors surfaced by the remote data service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Transport-level failure, the request never completed
    Request(String),
    /// The server answered with a non-success status
    Api { status: u16, message: String },
    /// 404-equivalent: the addressed resource does not exist
    NotFound,
}

impl StoreError {
    /// Whether this failure means "no such account/resource", the trigger
    /// for the register-on-first-login fallback
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Request(msg) => write!(f, "request failed: {}", msg),
            StoreError::Api { status, message } => {
                write!(f, "server answered {}: {}", status, message)
            }
            StoreError::NotFound => write!(f, "not found"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Capability surface of the remote data service
///
/// Mirrors the backend resources: authentication, user management and
/// bill management. Listing is implicitly scoped to the session token the
/// implementation carries.
#[async_trait(?Send)]
pub trait RemoteStore {
    /// Exchange credentials for a session token
    async fn login(&self, credentials: &Credentials) -> Result<LoginReceipt, StoreError>;

    /// Provision a new account
    async fn create_user(&self, user: &NewUser) -> Result<(), StoreError>;

    /// Upload a receipt file, creating the bill shell remotely
    async fn create_bill(&self, upload: &FileUpload) -> Result<UploadReceipt, StoreError>;

    /// Attach the metadata to a previously created bill
    async fn update_bill(&self, bill_id: &str, bill: &Bill) -> Result<(), StoreError>;

    /// Fetch all bills visible to the current session
    async fn list_bills(&self) -> Result<Vec<Bill>, StoreError>;
}
