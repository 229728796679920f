//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use billed_core::domain::Route;
use billed_core::session::Session;
use leptos::prelude::*;

use crate::api::HttpStore;
use crate::session::BrowserSession;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed page - read
    pub route: ReadSignal<Route>,
    /// Currently displayed page - write
    set_route: WriteSignal<Route>,
    /// Trigger to reload bills from the remote store - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload bills from the remote store - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Swap the displayed page
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }

    /// Trigger a reload of bills
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Shared service handles (remote store and session), provided via
/// context alongside the signals
#[derive(Clone)]
pub struct Services {
    pub store: Rc<HttpStore>,
    pub session: Rc<Session<BrowserSession>>,
}
