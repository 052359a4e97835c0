//! Sign In Form Component
//!
//! Sign in with email and password, or create an account.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ErrorList;
use crate::context::use_app_context;
use crate::models::{Credentials, NewUser};
use crate::session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SignInForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (signing_up, set_signing_up) = signal(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<String>::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get().trim().to_string();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            set_errors.set(vec!["Email and password are required".to_string()]);
            return;
        }
        let sign_up = signing_up.get();
        let name = name.get().trim().to_string();
        let phone = phone.get().trim().to_string();

        spawn_local(async move {
            let api = ctx.api();
            let result = if sign_up {
                let user = NewUser {
                    name,
                    email: email.clone(),
                    password,
                    phone_number: (!phone.is_empty()).then_some(phone),
                };
                api.sign_up(&user).await
            } else {
                api.sign_in(&Credentials { email: email.clone(), password }).await
            };

            match result {
                Ok(auth) => {
                    log::info!("Signed in as {}", email);
                    api.set_token(Some(auth.token.clone()));
                    session::save(&auth.token, &email);
                    set_errors.set(Vec::new());
                    store.user_email().set(Some(email));
                }
                Err(errs) => set_errors.set(errs.into_messages()),
            }
        });
    };

    view! {
        <form class="sign-in-form" on:submit=on_submit>
            <h2>{move || if signing_up.get() { "Create account" } else { "Sign in" }}</h2>

            <Show when=move || signing_up.get()>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </Show>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <Show when=move || signing_up.get()>
                <input
                    type="tel"
                    placeholder="Phone number (optional)"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
            </Show>

            <ErrorList errors=errors />

            <button type="submit">{move || if signing_up.get() { "Sign up" } else { "Sign in" }}</button>
            <button
                type="button"
                class="link-btn"
                on:click=move |_| {
                    set_errors.set(Vec::new());
                    set_signing_up.update(|v| *v = !*v);
                }
            >
                {move || if signing_up.get() { "Have an account? Sign in" } else { "New here? Sign up" }}
            </button>
        </form>
    }
}
