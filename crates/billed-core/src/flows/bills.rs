//! Bill Listing Flow
//!
//! Fetches the session's bills and projects them for display. Failures
//! never cross this boundary: the caller always receives a (possibly
//! empty) list plus an observable error message.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::BillListEntry;
use crate::store::RemoteStore;

/// Bill listing flow
pub struct BillsFlow<S: RemoteStore> {
    store: Option<Rc<S>>,
    error: RefCell<Option<String>>,
}

impl<S: RemoteStore> BillsFlow<S> {
    pub fn new(store: Option<Rc<S>>) -> Self {
        Self {
            store,
            error: RefCell::new(None),
        }
    }

    /// Fetch and project all bills visible to the current session
    ///
    /// Ordering is preserved as returned by the remote store; any
    /// chronological sort is a presentation concern of the caller.
    pub async fn get_bills(&self) -> Vec<BillListEntry> {
        let Some(store) = &self.store else {
            self.error
                .replace(Some("remote store is not configured".to_string()));
            return Vec::new();
        };

        match store.list_bills().await {
            Ok(bills) => {
                self.error.replace(None);
                bills.into_iter().map(BillListEntry::from_bill).collect()
            }
            Err(err) => {
                log::error!("failed to fetch bills: {}", err);
                self.error.replace(Some(err.to_string()));
                Vec::new()
            }
        }
    }

    /// Display-level error recorded by the last fetch
    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }
}
