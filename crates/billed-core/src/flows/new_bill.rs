//! Bill Submission Flow
//!
//! Two cooperating entry points: attachment selection uploads the file
//! and keeps the remote-assigned key, form submission attaches the
//! metadata to that key. Upload results are committed through a
//! generation counter so that only the latest started upload wins.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::domain::{Bill, BillStatus, Route, DEFAULT_PCT};
use crate::session::{Session, SessionStore};
use crate::store::{FileUpload, RemoteStore};

/// File extensions accepted for receipt attachments, matched
/// case-insensitively
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Whether the metadata form may be submitted before an upload completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentPolicy {
    /// Submission proceeds with null attachment fields
    #[default]
    AllowMissing,
    /// Submission is rejected until an upload has completed
    Required,
}

/// Bill submission failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewBillError {
    /// Extension outside the allow-list; nothing was uploaded
    InvalidFileType(String),
    /// The upload call was made and rejected
    UploadFailed(String),
    /// No remote store is wired in; submission is fail-closed
    ConfigurationFailure,
    /// The attachment policy requires a completed upload first
    MissingAttachment,
    /// The metadata submission was rejected
    SubmitFailed(String),
}

impl std::fmt::Display for NewBillError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NewBillError::InvalidFileType(name) => {
                write!(f, "unsupported file type: {}", name)
            }
            NewBillError::UploadFailed(msg) => write!(f, "upload failed: {}", msg),
            NewBillError::ConfigurationFailure => {
                write!(f, "remote store is not configured")
            }
            NewBillError::MissingAttachment => {
                write!(f, "a receipt attachment is required before submitting")
            }
            NewBillError::SubmitFailed(msg) => write!(f, "submission failed: {}", msg),
        }
    }
}

impl std::error::Error for NewBillError {}

/// Raw metadata form field values
#[derive(Debug, Clone, Default)]
pub struct BillFormFields {
    pub expense_type: String,
    pub expense_name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

/// Attachment fields assigned by a completed upload
#[derive(Debug, Clone, PartialEq, Eq)]
struct Attachment {
    file_url: String,
    file_name: String,
    bill_id: String,
}

/// Bill submission flow
pub struct NewBillFlow<S: RemoteStore, L: SessionStore> {
    store: Option<Rc<S>>,
    session: Rc<Session<L>>,
    policy: AttachmentPolicy,
    attachment: RefCell<Option<Attachment>>,
    upload_error: RefCell<Option<NewBillError>>,
    upload_seq: Cell<u64>,
}

impl<S: RemoteStore, L: SessionStore> NewBillFlow<S, L> {
    pub fn new(store: Option<Rc<S>>, session: Rc<Session<L>>) -> Self {
        Self {
            store,
            session,
            policy: AttachmentPolicy::default(),
            attachment: RefCell::new(None),
            upload_error: RefCell::new(None),
            upload_seq: Cell::new(0),
        }
    }

    pub fn with_policy(mut self, policy: AttachmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Attachment selection entry point
    ///
    /// Validates the extension, uploads the file with the current user's
    /// email and keeps the returned url/key for the submission step. A
    /// result arriving after a newer upload started is dropped.
    pub async fn select_file(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), NewBillError> {
        if !extension_allowed(file_name) {
            let err = NewBillError::InvalidFileType(file_name.to_string());
            self.upload_error.replace(Some(err.clone()));
            return Err(err);
        }
        // A valid selection dismisses the previous error.
        self.upload_error.replace(None);

        let Some(store) = self.store.clone() else {
            let err = NewBillError::ConfigurationFailure;
            log::error!("no remote store configured, upload aborted");
            self.upload_error.replace(Some(err.clone()));
            return Err(err);
        };

        let seq = self.upload_seq.get() + 1;
        self.upload_seq.set(seq);

        let upload = FileUpload {
            file_name: file_name.to_string(),
            bytes,
            email: self.session.current_email().unwrap_or_default(),
        };
        match store.create_bill(&upload).await {
            Ok(receipt) => {
                if self.upload_seq.get() != seq {
                    log::warn!("stale upload result for {} dropped", upload.file_name);
                    return Ok(());
                }
                self.attachment.replace(Some(Attachment {
                    file_url: receipt.file_url,
                    file_name: upload.file_name,
                    bill_id: receipt.key,
                }));
                Ok(())
            }
            Err(err) => {
                if self.upload_seq.get() != seq {
                    log::warn!("stale upload failure for {} dropped: {}", upload.file_name, err);
                    return Ok(());
                }
                log::error!("upload of {} failed: {}", upload.file_name, err);
                let err = NewBillError::UploadFailed(err.to_string());
                self.upload_error.replace(Some(err.clone()));
                Err(err)
            }
        }
    }

    /// Form submission entry point
    ///
    /// Assembles the complete bill with status `pending` and sends it as
    /// an update keyed by the upload-assigned id. Returns the bill list
    /// route on success; the caller performs the navigation.
    pub async fn submit(&self, fields: BillFormFields) -> Result<Route, NewBillError> {
        let Some(store) = &self.store else {
            log::error!("no remote store configured, bill submission aborted");
            return Err(NewBillError::ConfigurationFailure);
        };

        let attachment = self.attachment.borrow().clone();
        if attachment.is_none() && self.policy == AttachmentPolicy::Required {
            return Err(NewBillError::MissingAttachment);
        }

        let bill = Bill {
            id: None,
            email: self.session.current_email().unwrap_or_default(),
            bill_type: fields.expense_type,
            name: fields.expense_name,
            amount: fields.amount.trim().parse().unwrap_or_default(),
            date: fields.date,
            vat: fields.vat,
            pct: fields.pct.trim().parse().unwrap_or(DEFAULT_PCT),
            commentary: fields.commentary,
            file_url: attachment.as_ref().map(|a| a.file_url.clone()),
            file_name: attachment.as_ref().map(|a| a.file_name.clone()),
            status: BillStatus::Pending,
        };
        let bill_id = attachment.map(|a| a.bill_id).unwrap_or_default();

        store.update_bill(&bill_id, &bill).await.map_err(|err| {
            log::error!("bill update failed: {}", err);
            NewBillError::SubmitFailed(err.to_string())
        })?;
        Ok(Route::Bills)
    }

    /// Attachment url assigned by the last committed upload
    pub fn file_url(&self) -> Option<String> {
        self.attachment.borrow().as_ref().map(|a| a.file_url.clone())
    }

    /// Attachment file name assigned by the last committed upload
    pub fn file_name(&self) -> Option<String> {
        self.attachment.borrow().as_ref().map(|a| a.file_name.clone())
    }

    /// Remote-assigned bill key from the last committed upload
    pub fn bill_id(&self) -> Option<String> {
        self.attachment.borrow().as_ref().map(|a| a.bill_id.clone())
    }

    /// Observable upload/validation error, rendered by the UI as a
    /// dismissible element
    pub fn upload_error(&self) -> Option<NewBillError> {
        self.upload_error.borrow().clone()
    }

    /// Dismiss the visible upload error
    pub fn clear_upload_error(&self) {
        self.upload_error.replace(None);
    }
}

fn extension_allowed(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_allow_list() {
        assert!(extension_allowed("receipt.jpg"));
        assert!(extension_allowed("receipt.jpeg"));
        assert!(extension_allowed("PHOTO.PNG"));
        assert!(!extension_allowed("receipt.exe"));
        assert!(!extension_allowed("receipt.pdf"));
        assert!(!extension_allowed("no-extension"));
        assert!(!extension_allowed(""));
    }
}
