//! Groupypay Frontend App
//!
//! Root component: sign-in, then the group list or a single group.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{GroupList, GroupView, LogPanel, ProfileForm, SignInForm};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::session;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();

    // Token is read from storage once; afterwards only sign-in/out change it
    let token = session::load_token();
    let user_email = token.as_ref().and_then(|_| session::load_email());
    let api = ApiClient::new(&config.base_url, token);
    log::debug!("API client ready for {}", api.base_url());

    let store = Store::new(AppState {
        user_email,
        ..Default::default()
    });
    let ctx = AppContext::new(api, config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    let (open_group, set_open_group) = signal::<Option<u32>>(None);

    let sign_out = move |_: web_sys::MouseEvent| {
        log::info!("Signing out");
        ctx.api().set_token(None);
        session::clear();
        set_open_group.set(None);
        store.groups().set(Vec::new());
        store.current_group().set(None);
        store.user_email().set(None);
    };

    let back_to_groups = Callback::new(move |_: ()| {
        set_open_group.set(None);
        store.current_group().set(None);
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Groupypay"</h1>
                {move || store.user_email().get().map(|email| view! {
                    <span class="user-email">{email}</span>
                    <button class="sign-out-btn" on:click=sign_out>"Sign out"</button>
                })}
            </header>

            <main class="main-content">
                {move || match (store.user_email().get(), open_group.get()) {
                    (None, _) => view! { <SignInForm /> }.into_any(),
                    (Some(email), None) => view! {
                        <ProfileForm email=email.clone() />
                        <GroupList email=email set_open_group=set_open_group />
                    }.into_any(),
                    (Some(_), Some(group_id)) => view! {
                        <GroupView group_id=group_id on_back=back_to_groups />
                    }.into_any(),
                }}
            </main>

            <LogPanel />
        </div>
    }
}
