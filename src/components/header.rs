//! App Header Component
//!
//! Title, connected user and the disconnect button shown on every
//! authenticated page.

use billed_core::domain::Route;
use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::context::{AppContext, Services};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let services = expect_context::<SendWrapper<Services>>();
    let email = services.session.current_email().unwrap_or_default();

    let disconnect = {
        let services = services.clone();
        move |_| {
            services.session.logout();
            ctx.navigate(Route::Login);
        }
    };

    view! {
        <header class="app-header">
            <span class="app-title">"Billed"</span>
            <span class="user-email">{email}</span>
            <button class="disconnect-btn" data-testid="layout-disconnect" on:click=disconnect>
                "Se déconnecter"
            </button>
        </header>
    }
}
