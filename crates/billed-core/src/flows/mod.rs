//! Flow Layer
//!
//! One module per user-facing task: authentication, bill submission and
//! bill listing. Flows read form field values, call the remote data
//! service and return the route the caller should navigate to — they
//! never perform navigation themselves.

mod bills;
mod login;
mod new_bill;


pub use bills::BillsFlow;
pub use login::{LoginError, LoginFields, LoginFlow};
pub use new_bill::{
    AttachmentPolicy, BillFormFields, NewBillError, NewBillFlow, ALLOWED_EXTENSIONS,
};
