//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use billed_core::domain::BillListEntry;
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Bills of the current session, already projected for display and
    /// sorted newest-first
    pub bills: Vec<BillListEntry>,
    /// Listing error, shown as a banner above the bill tables
    pub bills_error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the displayed bills after a fetch
pub fn store_set_bills(store: &AppStore, bills: Vec<BillListEntry>, error: Option<String>) {
    *store.bills().write() = bills;
    *store.bills_error().write() = error;
}
