//! Dashboard Page Component
//!
//! Admin home: every submitted bill with its owner and review status.

use billed_core::flows::BillsFlow;
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;

use crate::components::Header;
use crate::context::{AppContext, Services};
use crate::store::{store_set_bills, use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let services = expect_context::<SendWrapper<Services>>();
    let app_store = use_app_store();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let store = services.store.clone();
        spawn_local(async move {
            let flow = BillsFlow::new(Some(store));
            let mut bills = flow.get_bills().await;
            bills.sort_by(|a, b| b.raw_date.cmp(&a.raw_date));
            store_set_bills(&app_store, bills, flow.error());
        });
    });

    view! {
        <div class="dashboard-page">
            <Header />
            <h2>"Validations"</h2>

            {move || {
                app_store
                    .bills_error()
                    .get()
                    .map(|msg| {
                        view! {
                            <p class="error-banner" data-testid="error-message">
                                {msg}
                            </p>
                        }
                    })
            }}

            <table class="bills-table">
                <thead>
                    <tr>
                        <th>"Email"</th>
                        <th>"Nom"</th>
                        <th>"Date"</th>
                        <th>"Montant"</th>
                        <th>"Statut"</th>
                    </tr>
                </thead>
                <tbody data-testid="dashboard-tbody">
                    {move || {
                        app_store
                            .bills()
                            .get()
                            .into_iter()
                            .map(|bill| {
                                view! {
                                    <tr>
                                        <td>{bill.email.clone()}</td>
                                        <td>{bill.name.clone()}</td>
                                        <td>{bill.date.clone()}</td>
                                        <td>{format!("{} €", bill.amount)}</td>
                                        <td>{bill.status.clone()}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
