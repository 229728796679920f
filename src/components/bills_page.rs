//! Bills Page Component
//!
//! Employee view: the submitted bills as a table, newest first, with an
//! attachment preview and the entry point to a new submission.

use billed_core::domain::Route;
use billed_core::flows::BillsFlow;
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;

use crate::components::Header;
use crate::context::{AppContext, Services};
use crate::store::{store_set_bills, use_app_store, AppStateStoreFields};

#[component]
pub fn BillsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let services = expect_context::<SendWrapper<Services>>();
    let app_store = use_app_store();
    let (preview, set_preview) = signal(Option::<String>::None);

    // Load bills on mount and whenever a reload is triggered
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let store = services.store.clone();
        spawn_local(async move {
            let flow = BillsFlow::new(Some(store));
            let mut bills = flow.get_bills().await;
            // Presentation sort: newest first on the stored ISO date
            bills.sort_by(|a, b| b.raw_date.cmp(&a.raw_date));
            store_set_bills(&app_store, bills, flow.error());
        });
    });

    let new_bill = move |_| ctx.navigate(Route::NewBill);

    view! {
        <div class="bills-page">
            <Header />
            <div class="content-header">
                <h2>"Mes notes de frais"</h2>
                <button class="new-bill-btn" data-testid="btn-new-bill" on:click=new_bill>
                    "Nouvelle note de frais"
                </button>
            </div>

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
                        <th>"Type"</th>
                        <th>"Nom"</th>
                        <th>"Date"</th>
                        <th>"Montant"</th>
                        <th>"Statut"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody data-testid="tbody">
                    {move || {
                        app_store
                            .bills()
                            .get()
                            .into_iter()
                            .map(|bill| {
                                let file_url = bill.file_url.clone();
                                view! {
                                    <tr>
                                        <td>{bill.bill_type.clone()}</td>
                                        <td>{bill.name.clone()}</td>
                                        <td>{bill.date.clone()}</td>
                                        <td>{format!("{} €", bill.amount)}</td>
                                        <td>{bill.status.clone()}</td>
                                        <td>
                                            <button
                                                class="icon-eye"
                                                data-testid="icon-eye"
                                                on:click=move |_| set_preview.set(file_url.clone())
                                            >
                                                "👁"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            {move || {
                preview
                    .get()
                    .map(|url| {
                        view! {
                            <div class="bill-modal" data-testid="modale-file">
                                <button
                                    class="modal-close"
                                    on:click=move |_| set_preview.set(None)
                                >
                                    "Fermer"
                                </button>
                                <img src=url alt="Justificatif" />
                            </div>
                        }
                    })
            }}
        </div>
    }
}
