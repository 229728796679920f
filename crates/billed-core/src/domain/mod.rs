//! Domain Layer
//!
//! Contains the entities exchanged with the remote data service and the
//! display projections built from them. No dependency on the UI layer.

mod bill;
mod route;
mod user;

pub use bill::{Bill, BillListEntry, BillStatus, DEFAULT_PCT};
pub use route::Route;
pub use user::{User, UserRole, UserStatus};
