//! Login Page Component
//!
//! Employee and admin login forms. Each submit handler drives the
//! authentication flow and navigates to the returned home route.

use std::rc::Rc;

use billed_core::flows::{LoginFields, LoginFlow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;

use crate::context::{AppContext, Services};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let services = expect_context::<SendWrapper<Services>>();
    let flow = Rc::new(LoginFlow::new(
        Some(services.store.clone()),
        services.session.clone(),
    ));

    let (employee_email, set_employee_email) = signal(String::new());
    let (employee_password, set_employee_password) = signal(String::new());
    let (admin_email, set_admin_email) = signal(String::new());
    let (admin_password, set_admin_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    let input_value = |ev: &web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        input.value()
    };

    let submit_employee = {
        let flow = flow.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let flow = flow.clone();
            let fields = LoginFields {
                email: employee_email.get(),
                password: employee_password.get(),
            };
            spawn_local(async move {
                match flow.submit_employee(fields).await {
                    Ok(route) => ctx.navigate(route),
                    Err(err) => {
                        web_sys::console::error_1(&format!("{}", err).into());
                        set_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    let submit_admin = {
        let flow = flow.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let flow = flow.clone();
            let fields = LoginFields {
                email: admin_email.get(),
                password: admin_password.get(),
            };
            spawn_local(async move {
                match flow.submit_admin(fields).await {
                    Ok(route) => ctx.navigate(route),
                    Err(err) => {
                        web_sys::console::error_1(&format!("{}", err).into());
                        set_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <h1>"Billed"</h1>
            <div class="login-forms">
                <form data-testid="form-employee" on:submit=submit_employee>
                    <h2>"Employé"</h2>
                    <label>"Votre email"</label>
                    <input
                        type="text"
                        data-testid="employee-email-input"
                        prop:value=move || employee_email.get()
                        on:input=move |ev| set_employee_email.set(input_value(&ev))
                    />
                    <label>"Votre mot de passe"</label>
                    <input
                        type="password"
                        data-testid="employee-password-input"
                        prop:value=move || employee_password.get()
                        on:input=move |ev| set_employee_password.set(input_value(&ev))
                    />
                    <button type="submit" data-testid="employee-login-button">
                        "Se connecter"
                    </button>
                </form>

                <form data-testid="form-admin" on:submit=submit_admin>
                    <h2>"Administration"</h2>
                    <label>"Votre email"</label>
                    <input
                        type="text"
                        data-testid="admin-email-input"
                        prop:value=move || admin_email.get()
                        on:input=move |ev| set_admin_email.set(input_value(&ev))
                    />
                    <label>"Votre mot de passe"</label>
                    <input
                        type="password"
                        data-testid="admin-password-input"
                        prop:value=move || admin_password.get()
                        on:input=move |ev| set_admin_password.set(input_value(&ev))
                    />
                    <button type="submit" data-testid="admin-login-button">
                        "Se connecter"
                    </button>
                </form>
            </div>

            {move || {
                error
                    .get()
                    .map(|msg| {
                        view! {
                            <p class="login-error" data-testid="login-error">
                                {msg}
                            </p>
                        }
                    })
            }}
        </div>
    }
}
