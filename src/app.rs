//! Billed Frontend App
//!
//! Top-level component: owns the route signal (the navigation surface),
//! the shared service handles and the reactive state store, and swaps
//! the displayed page when the route changes.

use std::rc::Rc;

use billed_core::domain::Route;
use billed_core::session::Session;
use leptos::prelude::*;
use reactive_stores::Store;
use send_wrapper::SendWrapper;

use crate::api::HttpStore;
use crate::components::{BillsPage, DashboardPage, LoginPage, NewBillPage};
use crate::context::{AppContext, Services};
use crate::session::BrowserSession;
use crate::store::AppState;

/// Backend root the HTTP store talks to
const API_BASE_URL: &str = "http://localhost:5678";

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(initial_route());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(
        (route, set_route),
        (reload_trigger, set_reload_trigger),
    ));
    provide_context(Store::new(AppState::default()));
    provide_context(SendWrapper::new(Services {
        store: Rc::new(HttpStore::new(API_BASE_URL)),
        session: Rc::new(Session::new(BrowserSession)),
    }));

    // Mirror the route into the location hash, SPA-style
    Effect::new(move |_| {
        let current = route.get();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(current.path());
        }
    });

    view! {
        <div class="app-layout">
            {move || match route.get() {
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Bills => view! { <BillsPage /> }.into_any(),
                Route::NewBill => view! { <NewBillPage /> }.into_any(),
                Route::Dashboard => view! { <DashboardPage /> }.into_any(),
            }}
        </div>
    }
}

/// Restore the page from the location hash on startup
fn initial_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Route::from_path(&hash))
        .unwrap_or_default()
}
