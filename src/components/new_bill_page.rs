//! New Bill Page Component
//!
//! The expense form: attachment selection uploads immediately, the
//! submit button sends the metadata keyed by the upload receipt.

use std::rc::Rc;

use billed_core::flows::{BillFormFields, NewBillFlow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;

use crate::components::Header;
use crate::context::{AppContext, Services};

/// Expense categories offered by the form
const EXPENSE_TYPES: &[&str] = &[
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

#[component]
pub fn NewBillPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let services = expect_context::<SendWrapper<Services>>();
    let flow = SendWrapper::new(Rc::new(NewBillFlow::new(
        Some(services.store.clone()),
        services.session.clone(),
    )));

    let (expense_type, set_expense_type) = signal(EXPENSE_TYPES[0].to_string());
    let (expense_name, set_expense_name) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (vat, set_vat) = signal(String::new());
    let (pct, set_pct) = signal(String::new());
    let (commentary, set_commentary) = signal(String::new());
    let (file_error, set_file_error) = signal(Option::<String>::None);
    let (submit_error, set_submit_error) = signal(Option::<String>::None);

    let input_value = |ev: &web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        input.value()
    };

    let on_file_change = {
        let flow = flow.clone();
        move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let input = target
                .dyn_ref::<web_sys::HtmlInputElement>()
                .unwrap()
                .clone();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let flow = flow.clone();
            spawn_local(async move {
                let name = file.name();
                match read_file(&file).await {
                    Ok(bytes) => {
                        if flow.select_file(&name, bytes).await.is_err() {
                            // Keep the rejected file out of the input.
                            input.set_value("");
                        }
                        set_file_error.set(flow.upload_error().map(|err| err.to_string()));
                    }
                    Err(err) => {
                        web_sys::console::error_1(&err.into());
                    }
                }
            });
        }
    };

    let dismiss_file_error = {
        let flow = flow.clone();
        move |_| {
            flow.clear_upload_error();
            set_file_error.set(None);
        }
    };

    let on_submit = {
        let flow = flow.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let flow = flow.clone();
            let fields = BillFormFields {
                expense_type: expense_type.get(),
                expense_name: expense_name.get(),
                amount: amount.get(),
                date: date.get(),
                vat: vat.get(),
                pct: pct.get(),
                commentary: commentary.get(),
            };
            spawn_local(async move {
                match flow.submit(fields).await {
                    Ok(route) => {
                        ctx.reload();
                        ctx.navigate(route);
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("{}", err).into());
                        set_submit_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    view! {
        <div class="new-bill-page">
            <Header />
            <h2>"Envoyer une note de frais"</h2>
            <form data-testid="form-new-bill" on:submit=on_submit>
                <label>"Type de dépense"</label>
                <select
                    data-testid="expense-type"
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                        set_expense_type.set(select.value());
                    }
                >
                    {EXPENSE_TYPES
                        .iter()
                        .map(|kind| view! { <option value={*kind}>{*kind}</option> })
                        .collect_view()}
                </select>

                <label>"Nom de la dépense"</label>
                <input
                    type="text"
                    data-testid="expense-name"
                    placeholder="Vol Paris Londres"
                    prop:value=move || expense_name.get()
                    on:input=move |ev| set_expense_name.set(input_value(&ev))
                />

                <label>"Date"</label>
                <input
                    type="date"
                    data-testid="datepicker"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(input_value(&ev))
                />

                <label>"Montant TTC"</label>
                <input
                    type="number"
                    data-testid="amount"
                    placeholder="348"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(input_value(&ev))
                />

                <label>"TVA"</label>
                <input
                    type="number"
                    data-testid="vat"
                    placeholder="70"
                    prop:value=move || vat.get()
                    on:input=move |ev| set_vat.set(input_value(&ev))
                />
                <input
                    type="number"
                    data-testid="pct"
                    placeholder="20"
                    prop:value=move || pct.get()
                    on:input=move |ev| set_pct.set(input_value(&ev))
                />

                <label>"Commentaire"</label>
                <textarea
                    data-testid="commentary"
                    prop:value=move || commentary.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_commentary.set(area.value());
                    }
                ></textarea>

                <label>"Justificatif"</label>
                <input type="file" data-testid="file" on:change=on_file_change />

                {move || {
                    file_error
                        .get()
                        .map(|msg| {
                            let dismiss = dismiss_file_error.clone();
                            view! {
                                <div class="file-error" data-testid="file-error">
                                    <span>{msg}</span>
                                    <button type="button" on:click=dismiss>
                                        "×"
                                    </button>
                                </div>
                            }
                        })
                }}

                <button type="submit" data-testid="btn-send-bill">
                    "Envoyer"
                </button>

                {move || {
                    submit_error
                        .get()
                        .map(|msg| {
                            view! {
                                <p class="submit-error" data-testid="submit-error">
                                    {msg}
                                </p>
                            }
                        })
                }}
            </form>
        </div>
    }
}

/// Read the selected file into memory for the multipart upload
async fn read_file(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("failed to read {}", file.name()))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
